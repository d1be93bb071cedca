//! Manifold check: edge-duplicate test plus oriented vertex-fan test (§4.A).

use alloc::vec::Vec;

use super::Mesh;
use crate::index::{EdgeId, VertexId};

impl Mesh {
    /// Run the manifold check and cache the result in [`Mesh::is_manifold`].
    ///
    /// Two independent tests run in sequence:
    /// 1. *Edge-duplicate test*: no two directed edges `(u, v)` may coincide
    ///    — that would mean two faces share an oriented edge. Stops here (the
    ///    vertex-fan test below is skipped) if violated, matching the
    ///    original implementation's early return.
    /// 2. *Vertex-fan test*: every vertex's one-ring must be a single fan
    ///    (one cycle for an interior vertex, one open strip for a boundary
    ///    vertex) covering every incident triangle exactly once. Boundary
    ///    vertices additionally have `first_edge` re-rooted to the true fan
    ///    start as a side effect, so later one-ring iteration never needs to
    ///    special-case the boundary gap.
    ///
    /// Idempotent: calling this again after it already ran just re-derives
    /// the same answer (the boundary re-rooting is itself idempotent, since a
    /// vertex whose `first_edge` is already the fan start re-derives the same
    /// start).
    pub fn check_manifold(&mut self) {
        if self.has_duplicate_directed_edges() {
            log::warn!("manifold check failed: duplicate directed edges found");
            self.is_manifold = false;
            return;
        }

        let degrees = self.outgoing_degrees();
        let mut manifold = true;
        for v in 0..self.positions.len() {
            let vertex = VertexId::new(v);
            let degree = degrees[v];
            if degree == 0 {
                log::warn!("manifold check failed: vertex {v} has no incident faces");
                manifold = false;
                continue;
            }
            if !self.check_vertex_fan(vertex, degree) {
                log::warn!("manifold check failed: vertex {v} has more than one triangle fan");
                manifold = false;
            }
        }
        self.is_manifold = manifold;
    }

    fn has_duplicate_directed_edges(&self) -> bool {
        let mut order: Vec<EdgeId> = (0..self.edges.len()).map(EdgeId::new).collect();
        order.sort_by_key(|&e| {
            let he = self.edge(e);
            (he.from.index(), he.to.index())
        });
        order.windows(2).any(|w| {
            let (a, b) = (self.edge(w[0]), self.edge(w[1]));
            a.from == b.from && a.to == b.to
        })
    }

    fn outgoing_degrees(&self) -> Vec<usize> {
        let mut degrees = alloc::vec![0usize; self.positions.len()];
        for edge in &self.edges {
            degrees[edge.from.index()] += 1;
        }
        degrees
    }

    /// Walk the fan at `vertex`, returning `true` iff it is a single,
    /// complete fan covering exactly `degree` triangles.
    fn check_vertex_fan(&mut self, vertex: VertexId, degree: usize) -> bool {
        let start = self.first_edge(vertex);

        let forward = walk(self, vertex, start, Mesh::next_vertex_edge);
        match forward {
            Walk::Closed(count) => count == degree,
            Walk::Boundary { count: fwd_count, last } => {
                let backward = walk(self, vertex, start, Mesh::previous_vertex_edge);
                match backward {
                    // An interior fan cannot start a forward walk that hits a
                    // boundary while the backward walk closes into a cycle:
                    // the two walks disagree on whether v is on the boundary.
                    Walk::Closed(_) => false,
                    Walk::Boundary {
                        count: bwd_count,
                        last: fan_start,
                    } => {
                        if fwd_count + bwd_count - 1 != degree {
                            return false;
                        }
                        self.first_edge[vertex.index()] = fan_start;
                        let _ = last;
                        true
                    }
                }
            }
        }
    }
}

enum Walk {
    /// The walk returned to its own start after visiting `count` edges.
    Closed(usize),
    /// The walk hit a boundary (no twin / no predecessor) after visiting
    /// `count` edges; `last` is the outermost edge reached.
    Boundary { count: usize, last: EdgeId },
}

/// Walk the one-ring starting at `start`, stepping with `step`, until the
/// walk closes (returns to `start`) or runs off the boundary.
fn walk(
    mesh: &Mesh,
    vertex: VertexId,
    start: EdgeId,
    step: impl Fn(&Mesh, VertexId, EdgeId) -> EdgeId,
) -> Walk {
    let mut count = 1;
    let mut current = start;
    loop {
        let next = step(mesh, vertex, current);
        if next == start {
            return Walk::Closed(count);
        }
        if next.is_none() {
            return Walk::Boundary { count, last: current };
        }
        current = next;
        count += 1;
    }
}
