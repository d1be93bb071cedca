//! Index newtypes used throughout the mesh and tree stores.
//!
//! Every array in this crate is flat and indexed by one of these types rather
//! than by raw `usize` or pointer — see the "cyclic pointer graphs → arena +
//! indices" design note. A single sentinel value (`u32::MAX`) stands in for a
//! null reference (a boundary half-edge's twin, an unset first-edge, ...).

use core::fmt;

/// Sentinel representing "no such index" (a boundary edge's twin, an unset
/// first-edge slot, ...). Reserved so that every real index fits in
/// `0..u32::MAX`.
const NONE: u32 = u32::MAX;

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The reserved "no such index" value.
            pub const NONE: Self = Self(NONE);

            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < NONE as usize, "index overflows u32");
                Self(index as u32)
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_none(self) -> bool {
                self.0 == NONE
            }

            #[inline]
            pub fn is_some(self) -> bool {
                !self.is_none()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_none() {
                    write!(f, concat!(stringify!($name), "(none)"))
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                }
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }
    };
}

index_type!(
    /// Identifies a vertex in a [`Mesh`](crate::mesh::Mesh).
    VertexId
);
index_type!(
    /// Identifies a directed half-edge in a [`Mesh`](crate::mesh::Mesh).
    EdgeId
);
index_type!(
    /// Identifies a triangle face in a [`Mesh`](crate::mesh::Mesh).
    FaceId
);
index_type!(
    /// Identifies a node (sorted rank) in a tree produced by
    /// [`TreeStore`](crate::tree::TreeStore).
    NodeIndex
);
