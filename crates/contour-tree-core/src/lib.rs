//! Mesh, vertex ordering, and flat tree storage for contour-tree
//! construction.
//!
//! This crate holds everything in §3/§4.A/§4.C/§4.F of the engine design that
//! the sweep and merge algorithms (`contour-tree-algorithms`) build on top
//! of: the half-edge [`mesh::Mesh`], the [`order::VertexOrder`] that turns a
//! scalar field into a strict total order, and the [`tree::TreeStore`] flat
//! node/arc representation shared by the join tree, split tree, and contour
//! tree.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod index;
pub mod mesh;
pub mod order;
pub mod scalar;
pub mod tree;

pub use error::{ErrorKind, Result};
pub use index::{EdgeId, FaceId, NodeIndex, VertexId};
pub use mesh::{Mesh, Position};
pub use order::VertexOrder;
pub use scalar::TotalOrd;
pub use tree::{NodeType, TreeBuilder, TreeStore};
