//! Vertex ordering: rank every vertex by scalar value, breaking ties by
//! vertex id so the order is strict even over a field with repeated values
//! (§4.C, "Simulation of simplicity").

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{index::VertexId, scalar::TotalOrd};

/// A strict total order over a mesh's vertices, derived from a scalar field.
///
/// `node_to_vertex[rank]` is the vertex at sorted position `rank` (lowest
/// scalar first); `vertex_to_node[vertex]` is the inverse. The two arrays are
/// mutual inverses of each other by construction, so either direction is a
/// single array index away.
#[derive(Debug, Clone)]
pub struct VertexOrder {
    node_to_vertex: Vec<VertexId>,
    vertex_to_node: Vec<u32>,
}

impl VertexOrder {
    /// Rank `field[v]` for every vertex `v`, ties broken by ascending vertex
    /// id so that no two vertices ever compare equal.
    pub fn build<T: TotalOrd>(field: &[T]) -> Self {
        let mut node_to_vertex: Vec<VertexId> =
            (0..field.len()).map(VertexId::new).collect();
        node_to_vertex.sort_by(|&a, &b| {
            field[a.index()]
                .total_cmp(&field[b.index()])
                .then_with(|| a.index().cmp(&b.index()))
        });

        let mut vertex_to_node = alloc::vec![0u32; field.len()];
        for (rank, &vertex) in node_to_vertex.iter().enumerate() {
            vertex_to_node[vertex.index()] = rank as u32;
        }

        Self {
            node_to_vertex,
            vertex_to_node,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.node_to_vertex.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_to_vertex.is_empty()
    }

    /// The vertex ranked at sorted position `rank`.
    #[inline]
    pub fn vertex_at(&self, rank: usize) -> VertexId {
        self.node_to_vertex[rank]
    }

    /// The sorted rank of `vertex`.
    #[inline]
    pub fn rank_of(&self, vertex: VertexId) -> usize {
        self.vertex_to_node[vertex.index()] as usize
    }

    /// Compare two vertices by rank. `Ordering::Less` means `a` has a smaller
    /// scalar value (or, on a tie, a smaller vertex id) than `b`.
    #[inline]
    pub fn compare(&self, a: VertexId, b: VertexId) -> Ordering {
        self.rank_of(a).cmp(&self.rank_of(b))
    }
}
