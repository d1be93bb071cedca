//! Contour tree construction on scalar fields defined over triangle meshes.
//!
//! This is the facade crate: it re-exports the public surface of
//! [`contour_tree_core`] and [`contour_tree_algorithms`], and adds the one
//! entry point the rest of this workspace builds towards —
//! [`ContourTree::build`], which runs the full pipeline of §2's data-flow
//! table (mesh → vertex order → join/split sweep → merge) in one call.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use contour_tree_algorithms::{direction::Direction, merge_tree::build_merge_tree};
pub use contour_tree_algorithms::{merge_trees, UnionFind};
pub use contour_tree_core::{
    error::{ErrorKind, Result},
    mesh::{HalfEdge, Mesh, OneRing, Position},
    order::VertexOrder,
    scalar::TotalOrd,
    tree::{NodeType, TreeBuilder, TreeStore},
    EdgeId, FaceId, NodeIndex, VertexId,
};
use error_stack::Report;

/// The three trees described in §3: join, split, and their merge, the
/// contour tree. All three share the same `node_to_vertex`/`vertex_to_node`
/// ordering, since they're built from the same [`VertexOrder`].
#[derive(Debug, Clone)]
pub struct ContourTree<V> {
    join: TreeStore<V>,
    split: TreeStore<V>,
    contour: TreeStore<V>,
}

impl<V: Clone + TotalOrd> ContourTree<V> {
    /// Run the full pipeline: rank `mesh`'s vertices by `field` (§4.C), sweep
    /// twice to build the join and split trees (§4.D), then merge them into
    /// the contour tree (§4.E).
    ///
    /// `mesh` must have already passed [`Mesh::check_manifold`] with a
    /// `true` result; this is a precondition of tree construction (§6: "If
    /// the input violates this, tree construction refuses with a manifold
    /// error"), not something this call re-derives, since a caller may want
    /// to build several trees over the same mesh without re-running the
    /// check each time.
    ///
    /// `field.len()` must equal `mesh.num_vertices()`.
    pub fn build(mesh: &Mesh, field: &[V]) -> Result<Self> {
        if !mesh.is_manifold() {
            return Err(
                Report::new(ErrorKind::NonManifoldMesh).attach_printable("mesh failed the manifold check")
            );
        }
        if field.len() != mesh.num_vertices() {
            return Err(Report::new(ErrorKind::InvalidMesh).attach_printable(alloc::format!(
                "field has {} entries, mesh has {} vertices",
                field.len(),
                mesh.num_vertices()
            )));
        }

        log::debug!("ranking {} vertices", mesh.num_vertices());
        let order = VertexOrder::build(field);

        log::debug!("sweeping join tree");
        let mut join = build_merge_tree(mesh, &order, field, Direction::Join);
        log::debug!("sweeping split tree");
        let mut split = build_merge_tree(mesh, &order, field, Direction::Split);

        log::debug!("merging join and split trees");
        let contour = merge_trees(&mut join, &mut split)?;

        Ok(Self { join, split, contour })
    }

    #[inline]
    pub fn join(&self) -> &TreeStore<V> {
        &self.join
    }

    #[inline]
    pub fn split(&self) -> &TreeStore<V> {
        &self.split
    }

    #[inline]
    pub fn contour(&self) -> &TreeStore<V> {
        &self.contour
    }

    /// Node ranks of every critical node (min/max/saddle) in the contour
    /// tree — §8 property 3's "set of critical nodes".
    pub fn critical_nodes(&self) -> Vec<NodeIndex> {
        (0..self.contour.num_nodes())
            .map(NodeIndex::new)
            .filter(|&n| self.contour.is_critical(n))
            .collect()
    }

    /// Contract every regular node of the contour tree into the superarc
    /// between its neighbours in place (§4.D "Reduction to critical
    /// points"), shrinking the tree from `O(N)` nodes down to `O(C)` live
    /// ones — the mins, maxes, and saddles. Idempotent: a node already
    /// reduced away stays [`NodeType::Deleted`] and is skipped on a repeat
    /// call.
    pub fn reduce_to_critical(&mut self) {
        self.contour.reduce_to_critical();
    }
}
