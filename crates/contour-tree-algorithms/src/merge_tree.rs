//! Monotone sweep-based merge-tree construction (§4.D).
//!
//! The same routine builds both the join tree (sweeping rank high → low) and
//! the split tree (low → high); [`Direction`] supplies the two points where
//! the sweeps differ — where the sweep starts, which way it steps, and which
//! neighbours count as "already visited" — everything else is shared code.

use alloc::vec::Vec;

use contour_tree_core::{mesh::Mesh, order::VertexOrder, tree::TreeBuilder, NodeIndex, TreeStore, VertexId};

use crate::{direction::Direction, union_find::UnionFind};

/// Build the merge tree for `direction` over `mesh`'s vertices, ordered by
/// `order`. `field` supplies the per-vertex scalar value copied onto each
/// tree node for later inspection; `order` must already be the ranking of
/// that same field (§4.C).
pub fn build_merge_tree<V: Clone>(
    mesh: &Mesh,
    order: &VertexOrder,
    field: &[V],
    direction: Direction,
) -> TreeStore<V> {
    let n = mesh.num_vertices();

    let node_to_vertex: Vec<VertexId> = (0..n).map(|rank| order.vertex_at(rank)).collect();
    let vertex_to_node: Vec<u32> = (0..n)
        .map(|vertex| order.rank_of(VertexId::new(vertex)) as u32)
        .collect();
    let value: Vec<V> = node_to_vertex
        .iter()
        .map(|&vertex| field[vertex.index()].clone())
        .collect();

    let mut builder = TreeBuilder::allocate(node_to_vertex, vertex_to_node, value);
    let mut union_find = UnionFind::new(n);
    let mut visited = alloc::vec![false; n];

    let mut rank = direction.start(n);
    loop {
        let vertex = order.vertex_at(rank);
        visited[rank] = true;
        let current = NodeIndex::new(rank);

        for neighbour in mesh.neighbours(vertex) {
            let neighbour_rank = order.rank_of(neighbour);
            if !direction.already_swept(rank, neighbour_rank) || !visited[neighbour_rank] {
                continue;
            }

            let current_root = union_find.find_mut(current);
            let neighbour_root = union_find.find_mut(NodeIndex::new(neighbour_rank));
            if current_root == neighbour_root {
                continue;
            }

            let leader = union_find.extremum(neighbour_root);
            let (low, high) = if rank < leader.index() {
                (current, leader)
            } else {
                (leader, current)
            };
            builder.add_arc(low, high);

            let root = union_find
                .union(current, neighbour_root)
                .expect("roots were just confirmed distinct");
            union_find.set_extremum(root, current);
        }

        match direction.advance(rank, n) {
            Some(next) => rank = next,
            None => break,
        }
    }

    let mut seen_root = alloc::vec![false; n];
    let mut roots = Vec::new();
    for rank in 0..n {
        let root = union_find.find(NodeIndex::new(rank));
        if !seen_root[root.index()] {
            seen_root[root.index()] = true;
            roots.push(root);
        }
    }
    builder.set_roots(roots);

    builder.finish()
}
