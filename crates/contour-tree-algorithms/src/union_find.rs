//! Disjoint-set with a per-component sweep-leader tag (§4.B).
//!
//! Grounded directly in the teacher's `UnionFind<K>`
//! (`contour-tree-core` here plays the role `petgraph_core::index::IndexType`
//! plays there): union-by-rank, full path compression on `find_mut`. The one
//! addition is `extremum[root]`, which the merge-tree sweep uses to track
//! which vertex currently "leads" each component — something this generic
//! disjoint-set deliberately does not decide on its own, since join and split
//! sweeps want opposite extrema.

use alloc::vec::Vec;
use core::cmp::Ordering;

use contour_tree_core::{
    error::{ErrorKind, Result},
    NodeIndex,
};
use error_stack::Report;

/// Disjoint-set over node ranks, each carrying a caller-assigned `extremum`
/// tag on top of the usual `parent`/`rank`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeIndex>,
    rank: Vec<u8>,
    extremum: Vec<NodeIndex>,
}

impl UnionFind {
    /// `make_set(n)`: `n` singleton components, each its own extremum.
    pub fn new(n: usize) -> Self {
        let parent: Vec<NodeIndex> = (0..n).map(NodeIndex::new).collect();
        Self {
            extremum: parent.clone(),
            parent,
            rank: alloc::vec![0; n],
        }
    }

    /// Reinitialise in place to `n` singleton components without
    /// reallocating past the vectors' existing capacity (§4.B `reset`).
    pub fn reset(&mut self, n: usize) {
        self.parent.clear();
        self.rank.clear();
        self.extremum.clear();
        self.parent.extend((0..n).map(NodeIndex::new));
        self.rank.extend(core::iter::repeat(0u8).take(n));
        self.extremum.extend_from_slice(&self.parent);
    }

    /// Return the representative of `x`'s component, without compressing.
    pub fn find(&self, x: NodeIndex) -> NodeIndex {
        let mut x = x;
        loop {
            let parent = self.parent[x.index()];
            if parent == x {
                return x;
            }
            x = parent;
        }
    }

    /// Return the representative of `x`'s component, compressing every
    /// visited node's parent pointer directly to the root.
    pub fn find_mut(&mut self, x: NodeIndex) -> NodeIndex {
        let mut x = x;
        let mut parent = self.parent[x.index()];
        while parent != x {
            let grandparent = self.parent[parent.index()];
            self.parent[x.index()] = grandparent;
            x = parent;
            parent = grandparent;
        }
        x
    }

    /// Union the components of `a` and `b`, rank-weighted. Returns the
    /// surviving root, or `None` if `a` and `b` were already in the same
    /// component (no merge happened). The caller must then overwrite
    /// `extremum[root]` with whichever of the two component leaders the
    /// sweep wants to keep — `union` does not blend extrema itself, since
    /// join and split sweeps disagree on which side should win (§4.B).
    pub fn union(&mut self, a: NodeIndex, b: NodeIndex) -> Option<NodeIndex> {
        let ra = self.find_mut(a);
        let rb = self.find_mut(b);
        if ra == rb {
            return None;
        }

        let (rank_a, rank_b) = (self.rank[ra.index()], self.rank[rb.index()]);
        let root = match rank_a.cmp(&rank_b) {
            Ordering::Less => {
                self.parent[ra.index()] = rb;
                rb
            }
            Ordering::Greater => {
                self.parent[rb.index()] = ra;
                ra
            }
            Ordering::Equal => {
                self.parent[rb.index()] = ra;
                self.rank[ra.index()] += 1;
                ra
            }
        };
        Some(root)
    }

    /// Checked counterpart of [`UnionFind::find_mut`] for callers outside
    /// the sweep's hot loop (tests, future non-core callers) who would
    /// rather not panic on an out-of-range index — grounded in the
    /// teacher's `petgraph::unionfind`'s `try_find`/`try_union` pair.
    pub fn try_find(&self, x: NodeIndex) -> Result<NodeIndex> {
        if x.index() >= self.len() {
            return Err(Report::new(ErrorKind::InvalidMesh)
                .attach_printable(alloc::format!("index {} out of range for {} elements", x.index(), self.len())));
        }
        Ok(self.find(x))
    }

    /// Checked counterpart of [`UnionFind::union`].
    pub fn try_union(&mut self, a: NodeIndex, b: NodeIndex) -> Result<Option<NodeIndex>> {
        if a.index() >= self.len() || b.index() >= self.len() {
            return Err(Report::new(ErrorKind::InvalidMesh).attach_printable(alloc::format!(
                "index out of range for {} elements",
                self.len()
            )));
        }
        Ok(self.union(a, b))
    }

    #[inline]
    pub fn extremum(&self, root: NodeIndex) -> NodeIndex {
        self.extremum[root.index()]
    }

    #[inline]
    pub fn set_extremum(&mut self, root: NodeIndex, leader: NodeIndex) {
        self.extremum[root.index()] = leader;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
