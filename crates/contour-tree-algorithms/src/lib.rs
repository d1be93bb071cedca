//! Disjoint-set, the monotone merge-tree sweep, and the join/split merge
//! into a contour tree (§2 components B, D, E).
//!
//! Builds on [`contour_tree_core`] for the half-edge [`Mesh`](contour_tree_core::Mesh),
//! the [`VertexOrder`](contour_tree_core::VertexOrder), and the flat
//! [`TreeStore`](contour_tree_core::TreeStore) every tree here is expressed in.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod contour_tree;
pub mod direction;
pub mod merge_tree;
pub mod union_find;

pub use contour_tree::merge_trees;
pub use direction::Direction;
pub use merge_tree::build_merge_tree;
pub use union_find::UnionFind;
