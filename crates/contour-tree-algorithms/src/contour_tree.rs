//! Leaf-pruning merge of a join tree and a split tree into the contour tree
//! (§4.E, the Carr–Snoeyink–Axen algorithm).
//!
//! A node's degree in the *final* contour tree is exactly
//! `join.degree_up(v) + split.degree_down(v)` — the join tree already
//! records every upward branch correctly, the split tree every downward one.
//! The join tree's down-arcs and the split tree's up-arcs aren't part of the
//! output; they exist purely so that when a leaf is spliced away, whatever
//! was waiting behind it can be re-threaded to its new neighbour instead of
//! being lost. That splice step is the part §9 flags as the original
//! implementation's fragile spot — this version re-derives it from the
//! degree invariants above rather than porting the source's arithmetic.

use alloc::collections::VecDeque;

use contour_tree_core::{
    error::{ErrorKind, Result},
    tree::TreeStore,
    NodeIndex,
};
use error_stack::Report;

/// Merge `join` and `split` into the contour tree. Both inputs are consumed
/// as scratch: their degrees and arcs are mutated down to nothing over the
/// course of the merge. Fails with
/// [`ErrorKind::TreeShapeMismatch`] if the two trees don't describe the same
/// `N`/arc-count/root-count (§4.E, "Invariant checked up-front").
pub fn merge_trees<V: Clone>(join: &mut TreeStore<V>, split: &mut TreeStore<V>) -> Result<TreeStore<V>> {
    if join.num_nodes() != split.num_nodes() {
        return Err(Report::new(ErrorKind::TreeShapeMismatch).attach_printable(alloc::format!(
            "join has {} nodes, split has {}",
            join.num_nodes(),
            split.num_nodes()
        )));
    }
    if join.num_arcs() != split.num_arcs() {
        return Err(Report::new(ErrorKind::TreeShapeMismatch).attach_printable(alloc::format!(
            "join has {} arcs, split has {}",
            join.num_arcs(),
            split.num_arcs()
        )));
    }
    if join.roots().len() != split.roots().len() {
        return Err(Report::new(ErrorKind::TreeShapeMismatch).attach_printable(alloc::format!(
            "join has {} roots, split has {}",
            join.roots().len(),
            split.roots().len()
        )));
    }
    if join.num_nodes() > 0 && join.roots().is_empty() {
        return Err(Report::new(ErrorKind::TreeIncomplete).attach_printable(
            "join tree has nodes but no roots were ever set — it was consumed before its sweep finished",
        ));
    }
    if split.num_nodes() > 0 && split.roots().is_empty() {
        return Err(Report::new(ErrorKind::TreeIncomplete).attach_printable(
            "split tree has nodes but no roots were ever set — it was consumed before its sweep finished",
        ));
    }

    let n = join.num_nodes();
    let mut contour = join.copy_nodes();

    let mut in_queue = alloc::vec![false; n];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    for i in 0..n {
        let node = NodeIndex::new(i);
        if join.degree_up(node) + split.degree_down(node) == 1 {
            queue.push_back(node);
            in_queue[i] = true;
        }
    }

    while queue.len() > 1 {
        let leaf = queue.pop_front().expect("queue.len() > 1 checked above");
        in_queue[leaf.index()] = false;

        let join_up = join.degree_up(leaf);
        let split_down = split.degree_down(leaf);
        if join_up == 0 && split_down == 0 {
            // Already fully detached by an earlier splice (possible on a
            // multi-component mesh) — nothing left to emit for this node.
            log::warn!("leaf at node rank {} is already fully detached, skipping", leaf.index());
            continue;
        }

        if join_up == 0 {
            // Upper leaf: its one live connection is downward, through split.
            let target = split.down_neighbours(leaf)[0];
            contour.add_arc(target, leaf);
            split.remove_up_neighbour(target, leaf);

            if join.degree_down(leaf) > 0 {
                let waiting = join.down_neighbours(leaf)[0];
                join.replace_up_neighbour(waiting, leaf, target);
            }

            join.delete(leaf);
            split.delete(leaf);

            if !in_queue[target.index()]
                && join.degree_up(target) + split.degree_down(target) == 1
            {
                queue.push_back(target);
                in_queue[target.index()] = true;
            }
        } else {
            // Lower leaf: its one live connection is upward, through join.
            let target = join.up_neighbours(leaf)[0];
            contour.add_arc(leaf, target);
            join.remove_down_neighbour(target, leaf);

            if split.degree_up(leaf) > 0 {
                let waiting = split.up_neighbours(leaf)[0];
                split.replace_down_neighbour(waiting, leaf, target);
            }

            join.delete(leaf);
            split.delete(leaf);

            if !in_queue[target.index()]
                && join.degree_up(target) + split.degree_down(target) == 1
            {
                queue.push_back(target);
                in_queue[target.index()] = true;
            }
        }
    }

    contour.set_roots(join.roots().to_vec());
    Ok(contour.finish())
}
