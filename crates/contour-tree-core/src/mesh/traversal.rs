//! Oriented one-ring traversal around a vertex (§4.A, "One-ring traversal").
//!
//! This is the critical primitive the merge-tree sweep (§4.D) is built on:
//! given an outgoing half-edge at `v`, produce the next outgoing half-edge at
//! `v`, in cyclic order around the triangle fan.
//!
//! Both steppers below always take and return an *outgoing* half-edge at
//! `vertex` (or [`EdgeId::NONE`] at a boundary) — there is no intermediate
//! incoming-edge state for a caller to thread through. Internally this is
//! "rotate to the opposite edge of the triangle, then cross it": for
//! `edge.from == vertex`, the opposite edge within the same face is
//! `edge.next.next` (the third half-edge of the triangle, which lands back
//! on `vertex` as its `to`); crossing its `twin` lands on the next outgoing
//! half-edge at `vertex` in the neighbouring face.

use super::Mesh;
use crate::index::{EdgeId, VertexId};

impl Mesh {
    /// Advance the outgoing half-edge `edge` at `vertex` to the next outgoing
    /// half-edge, rotating one face around the fan. Returns [`EdgeId::NONE`]
    /// once the rotation would cross a boundary (the opposite edge within the
    /// current face has no twin).
    pub fn next_vertex_edge(&self, vertex: VertexId, edge: EdgeId) -> EdgeId {
        if edge.is_none() {
            return EdgeId::NONE;
        }
        let he = self.edge(edge);
        debug_assert_eq!(he.from, vertex);
        let opposite = self.edge(he.next).next;
        self.edge(opposite).twin
    }

    /// The mirror image of [`Mesh::next_vertex_edge`]: rotates the fan in the
    /// opposite direction. Used by the boundary fan check to walk "the other
    /// way" from the forward walk's start. Returns [`EdgeId::NONE`] if `edge`
    /// itself has no twin (nothing to cross before rotating back).
    pub fn previous_vertex_edge(&self, vertex: VertexId, edge: EdgeId) -> EdgeId {
        if edge.is_none() {
            return EdgeId::NONE;
        }
        let he = self.edge(edge);
        debug_assert_eq!(he.from, vertex);
        if he.twin.is_none() {
            return EdgeId::NONE;
        }
        self.edge(he.twin).next
    }

    /// Iterate the neighbours of `vertex` in cyclic one-ring order, starting
    /// from `first_edge[vertex]`. Each neighbour is visited exactly once;
    /// the iterator is cheap to recreate (it only borrows `self`), so callers
    /// can restart a traversal freely.
    pub fn neighbours(&self, vertex: VertexId) -> OneRing<'_> {
        let start = self.first_edge(vertex);
        OneRing {
            mesh: self,
            vertex,
            start,
            current: start,
        }
    }
}

/// Lazy, restartable one-ring neighbour iterator; see [`Mesh::neighbours`].
pub struct OneRing<'a> {
    mesh: &'a Mesh,
    vertex: VertexId,
    start: EdgeId,
    current: EdgeId,
}

impl Iterator for OneRing<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.current.is_none() {
            return None;
        }
        let edge = self.mesh.edge(self.current);
        debug_assert_eq!(edge.from, self.vertex);
        let neighbour = edge.to;

        let advanced = self.mesh.next_vertex_edge(self.vertex, self.current);
        self.current = if advanced == self.start {
            EdgeId::NONE
        } else {
            advanced
        };
        Some(neighbour)
    }
}
