//! Flat node/arc storage shared by the merge-tree builder and the
//! contour-tree merger (§3 "Tree node"/"Tree arc", §4.F).
//!
//! Construction happens in two phases, matching the "allocate with matching
//! release" memory discipline of §5: a [`TreeBuilder`] accumulates arcs with
//! plain growable adjacency while the sweep or merge is in progress, then
//! [`TreeBuilder::finish`] flattens it into the CSR-style [`TreeStore`] the
//! spec describes — one node array, one arc array, `first_arc[up]`/
//! `first_arc[down]` offsets into it. A `TreeStore` still allows degree to
//! shrink later (the contour-tree merger prunes leaves in place), so arcs are
//! removed by swapping the live slice's last element into the removed slot
//! and shrinking the recorded degree, rather than by reallocating — the
//! backing array never moves once built.

mod node;

use alloc::vec::Vec;

pub use node::NodeType;

use crate::index::{NodeIndex, VertexId};

/// Growable scratch used while a tree is being built: either by the merge-tree
/// sweep (§4.D), which discovers arcs as it visits nodes in sweep order, or by
/// the contour-tree merger (§4.E), which discovers them as it prunes leaves.
#[derive(Debug)]
pub struct TreeBuilder<V> {
    node_to_vertex: Vec<VertexId>,
    vertex_to_node: Vec<u32>,
    value: Vec<V>,
    up: Vec<Vec<NodeIndex>>,
    down: Vec<Vec<NodeIndex>>,
    roots: Vec<NodeIndex>,
}

impl<V> TreeBuilder<V> {
    /// Allocate scratch for `node_to_vertex.len()` nodes, no arcs yet.
    pub fn allocate(node_to_vertex: Vec<VertexId>, vertex_to_node: Vec<u32>, value: Vec<V>) -> Self {
        let n = node_to_vertex.len();
        debug_assert_eq!(vertex_to_node.len(), n);
        debug_assert_eq!(value.len(), n);
        Self {
            node_to_vertex,
            vertex_to_node,
            value,
            up: alloc::vec![Vec::new(); n],
            down: alloc::vec![Vec::new(); n],
            roots: Vec::new(),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.node_to_vertex.len()
    }

    /// Record an arc between `low` and `high` (the spec's "far endpoint"):
    /// `high` becomes an up-neighbour of `low`, and `low` a down-neighbour of
    /// `high`. Callers are responsible for ordering the two by rank —
    /// `TreeBuilder` does not compare them.
    pub fn add_arc(&mut self, low: NodeIndex, high: NodeIndex) {
        self.up[low.index()].push(high);
        self.down[high.index()].push(low);
    }

    pub fn set_roots(&mut self, roots: Vec<NodeIndex>) {
        self.roots = roots;
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Flatten the adjacency scratch into the CSR layout of [`TreeStore`]:
    /// one flat arc array of length `sum(degree_up) + sum(degree_down)`, with
    /// `first_arc[up]`/`first_arc[down]` as prefix-sum offsets into it (§4.D
    /// "Arc layout").
    pub fn finish(self) -> TreeStore<V> {
        let n = self.num_nodes();
        let mut first_arc_up = alloc::vec![0u32; n];
        let mut first_arc_down = alloc::vec![0u32; n];
        let mut degree_up = alloc::vec![0u32; n];
        let mut degree_down = alloc::vec![0u32; n];

        let mut cursor = 0u32;
        for i in 0..n {
            first_arc_up[i] = cursor;
            degree_up[i] = self.up[i].len() as u32;
            cursor += degree_up[i];
        }
        for i in 0..n {
            first_arc_down[i] = cursor;
            degree_down[i] = self.down[i].len() as u32;
            cursor += degree_down[i];
        }

        let mut arcs = alloc::vec![NodeIndex::NONE; cursor as usize];
        for i in 0..n {
            let base = first_arc_up[i] as usize;
            for (k, &target) in self.up[i].iter().enumerate() {
                arcs[base + k] = target;
            }
            let base = first_arc_down[i] as usize;
            for (k, &target) in self.down[i].iter().enumerate() {
                arcs[base + k] = target;
            }
        }

        TreeStore {
            node_to_vertex: self.node_to_vertex,
            vertex_to_node: self.vertex_to_node,
            value: self.value,
            degree_up,
            degree_down,
            first_arc_up,
            first_arc_down,
            arcs,
            roots: self.roots,
            deleted: alloc::vec![false; n],
        }
    }
}

/// A completed tree (join, split, or contour): flat node and arc arrays, no
/// pointers (§3 "Tree node"/"Tree arc", §9 "Cyclic pointer graphs → arena +
/// indices").
#[derive(Debug, Clone)]
pub struct TreeStore<V> {
    node_to_vertex: Vec<VertexId>,
    vertex_to_node: Vec<u32>,
    value: Vec<V>,
    degree_up: Vec<u32>,
    degree_down: Vec<u32>,
    first_arc_up: Vec<u32>,
    first_arc_down: Vec<u32>,
    arcs: Vec<NodeIndex>,
    roots: Vec<NodeIndex>,
    deleted: Vec<bool>,
}

impl<V> TreeStore<V> {
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.node_to_vertex.len()
    }

    /// Total live arc count. Each arc is counted once, from its low
    /// endpoint's up-slice.
    pub fn num_arcs(&self) -> usize {
        self.degree_up.iter().map(|&d| d as usize).sum()
    }

    #[inline]
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    #[inline]
    pub fn node_to_vertex(&self, node: NodeIndex) -> VertexId {
        self.node_to_vertex[node.index()]
    }

    #[inline]
    pub fn vertex_to_node(&self, vertex: VertexId) -> NodeIndex {
        NodeIndex::new(self.vertex_to_node[vertex.index()] as usize)
    }

    #[inline]
    pub fn value(&self, node: NodeIndex) -> &V {
        &self.value[node.index()]
    }

    #[inline]
    pub fn degree_up(&self, node: NodeIndex) -> u32 {
        self.degree_up[node.index()]
    }

    #[inline]
    pub fn degree_down(&self, node: NodeIndex) -> u32 {
        self.degree_down[node.index()]
    }

    #[inline]
    pub fn up_neighbours(&self, node: NodeIndex) -> &[NodeIndex] {
        let start = self.first_arc_up[node.index()] as usize;
        &self.arcs[start..start + self.degree_up[node.index()] as usize]
    }

    #[inline]
    pub fn down_neighbours(&self, node: NodeIndex) -> &[NodeIndex] {
        let start = self.first_arc_down[node.index()] as usize;
        &self.arcs[start..start + self.degree_down[node.index()] as usize]
    }

    pub fn node_type(&self, node: NodeIndex) -> NodeType {
        NodeType::classify(
            self.degree_up(node),
            self.degree_down(node),
            self.deleted[node.index()],
        )
    }

    #[inline]
    pub fn is_critical(&self, node: NodeIndex) -> bool {
        self.node_type(node).is_critical()
    }

    /// Mark `node` fully detached: both degrees driven to zero. Idempotent.
    pub fn delete(&mut self, node: NodeIndex) {
        self.degree_up[node.index()] = 0;
        self.degree_down[node.index()] = 0;
        self.deleted[node.index()] = true;
    }

    /// Remove `target` from `node`'s live up-slice via swap-remove,
    /// shrinking `degree_up`. Returns `false` if `target` was not present.
    pub fn remove_up_neighbour(&mut self, node: NodeIndex, target: NodeIndex) -> bool {
        let start = self.first_arc_up[node.index()] as usize;
        let degree = self.degree_up[node.index()] as usize;
        match self.arcs[start..start + degree].iter().position(|&n| n == target) {
            Some(pos) => {
                self.arcs.swap(start + pos, start + degree - 1);
                self.degree_up[node.index()] -= 1;
                true
            }
            None => false,
        }
    }

    /// Remove `target` from `node`'s live down-slice via swap-remove,
    /// shrinking `degree_down`. Returns `false` if `target` was not present.
    pub fn remove_down_neighbour(&mut self, node: NodeIndex, target: NodeIndex) -> bool {
        let start = self.first_arc_down[node.index()] as usize;
        let degree = self.degree_down[node.index()] as usize;
        match self.arcs[start..start + degree].iter().position(|&n| n == target) {
            Some(pos) => {
                self.arcs.swap(start + pos, start + degree - 1);
                self.degree_down[node.index()] -= 1;
                true
            }
            None => false,
        }
    }

    /// Rewrite the first occurrence of `old` in `node`'s live up-slice to
    /// `new`, without touching `degree_up`. Used to re-thread a spine arc
    /// around a pruned leaf (§4.E splice step).
    pub fn replace_up_neighbour(&mut self, node: NodeIndex, old: NodeIndex, new: NodeIndex) -> bool {
        let start = self.first_arc_up[node.index()] as usize;
        let degree = self.degree_up[node.index()] as usize;
        match self.arcs[start..start + degree].iter().position(|&n| n == old) {
            Some(pos) => {
                self.arcs[start + pos] = new;
                true
            }
            None => false,
        }
    }

    /// The down-slice counterpart of [`TreeStore::replace_up_neighbour`].
    pub fn replace_down_neighbour(&mut self, node: NodeIndex, old: NodeIndex, new: NodeIndex) -> bool {
        let start = self.first_arc_down[node.index()] as usize;
        let degree = self.degree_down[node.index()] as usize;
        match self.arcs[start..start + degree].iter().position(|&n| n == old) {
            Some(pos) => {
                self.arcs[start + pos] = new;
                true
            }
            None => false,
        }
    }

    /// Contract every regular node (`degree == (1, 1)`) into the superarc
    /// between its one up-neighbour and one down-neighbour (§4.D "Reduction
    /// to critical points"). A single left-to-right pass suffices: by the
    /// time a node is visited, any already-contracted neighbour earlier in
    /// the pass has already rewritten this node's own arc to point past it,
    /// so every read sees the nearest surviving node.
    pub fn reduce_to_critical(&mut self) {
        for i in 0..self.num_nodes() {
            let node = NodeIndex::new(i);
            if self.node_type(node) != NodeType::Regular {
                continue;
            }
            let up = self.up_neighbours(node)[0];
            let down = self.down_neighbours(node)[0];
            self.replace_down_neighbour(up, node, down);
            self.replace_up_neighbour(down, node, up);
            self.delete(node);
        }
    }

    /// Every `(low, high)` pair currently recorded, read off the up-slices
    /// (each live arc appears in exactly one node's up-slice). Used by
    /// callers that want a flat arc list rather than per-node adjacency.
    pub fn arc_pairs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        (0..self.num_nodes()).flat_map(move |i| {
            let low = NodeIndex::new(i);
            self.up_neighbours(low).iter().map(move |&high| (low, high))
        })
    }
}

impl<V: Clone> TreeStore<V> {
    /// Clone just the node-level ordering (`node_to_vertex`, `vertex_to_node`,
    /// `value`) to seed a fresh [`TreeBuilder`] sharing this tree's vertex
    /// order — used to initialise the split tree's node array from the join
    /// tree's, since both sweep the same vertex order (§4.F "copy_nodes").
    pub fn copy_nodes(&self) -> TreeBuilder<V> {
        TreeBuilder::allocate(
            self.node_to_vertex.clone(),
            self.vertex_to_node.clone(),
            self.value.clone(),
        )
    }
}
