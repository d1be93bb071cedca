//! Half-edge construction from a face list (§4.A, "Edge construction").

use alloc::vec::Vec;

use error_stack::Report;

use super::half_edge::{HalfEdge, Position};
use crate::{
    error::{ErrorKind, Result},
    index::{EdgeId, VertexId},
};

/// Build the directed-edge array and the per-vertex `first_edge` table from
/// `positions` and `faces`.
///
/// Each face `(a, b, c)` emits three half-edges `(a→b)`, `(b→c)`, `(c→a)` at
/// positions `3f, 3f+1, 3f+2`, with `twin` left unset until the sorted-pair
/// pass below matches mutual reverses.
pub(super) fn build_edges(
    positions: &[Position],
    faces: &[[u32; 3]],
) -> Result<(Vec<HalfEdge>, Vec<EdgeId>)> {
    if positions.len() < 3 {
        return Err(Report::new(ErrorKind::InvalidMesh).attach_printable(alloc::format!(
            "mesh has {} vertices, need >= 3",
            positions.len()
        )));
    }
    if faces.is_empty() {
        return Err(Report::new(ErrorKind::InvalidMesh).attach_printable("mesh has no faces"));
    }

    let num_vertices = positions.len();
    for face in faces {
        for &v in face {
            if v as usize >= num_vertices {
                return Err(Report::new(ErrorKind::InvalidMesh).attach_printable(alloc::format!(
                    "face references vertex {v}, but mesh only has {num_vertices}"
                )));
            }
        }
    }

    let mut edges = Vec::with_capacity(faces.len() * 3);
    let mut first_edge = alloc::vec![EdgeId::NONE; num_vertices];

    for (f, face) in faces.iter().enumerate() {
        for k in 0..3 {
            let from = VertexId::new(face[k] as usize);
            let to = VertexId::new(face[(k + 1) % 3] as usize);
            let this_edge = EdgeId::new(f * 3 + k);
            let next_edge = EdgeId::new(f * 3 + (k + 1) % 3);

            edges.push(HalfEdge {
                from,
                to,
                next: next_edge,
                twin: EdgeId::NONE,
            });
            first_edge[from.index()] = this_edge;
        }
    }

    pair_twins(&mut edges);

    Ok((edges, first_edge))
}

/// Sort a copy of the edge indices lexicographically by
/// `(min(from, to), max(from, to))`; any two adjacent entries that are mutual
/// reverses become twins (§4.A step 2). More than two edges sharing an
/// undirected pair is a manifold violation surfaced later by
/// [`super::manifold`]'s edge-duplicate test, not here — pairing only ever
/// links the first mutual-reverse pair it meets in sorted order.
fn pair_twins(edges: &mut [HalfEdge]) {
    let mut order: Vec<EdgeId> = (0..edges.len()).map(EdgeId::new).collect();
    order.sort_by_key(|&e| undirected_key(edges, e));

    let mut i = 0;
    while i + 1 < order.len() {
        let (a, b) = (order[i], order[i + 1]);
        if edges[a.index()].twin.is_none()
            && edges[b.index()].twin.is_none()
            && is_mutual_reverse(edges, a, b)
        {
            edges[a.index()].twin = b;
            edges[b.index()].twin = a;
            i += 2;
        } else {
            i += 1;
        }
    }
}

#[inline]
fn undirected_key(edges: &[HalfEdge], e: EdgeId) -> (u32, u32) {
    let edge = &edges[e.index()];
    let (from, to) = (edge.from.index() as u32, edge.to.index() as u32);
    if from < to {
        (from, to)
    } else {
        (to, from)
    }
}

#[inline]
fn is_mutual_reverse(edges: &[HalfEdge], a: EdgeId, b: EdgeId) -> bool {
    let (ea, eb) = (&edges[a.index()], &edges[b.index()]);
    ea.from == eb.to && ea.to == eb.from
}
