//! The error surface shared by every phase of the engine (§6, §7).
//!
//! Grounded in the teacher's per-algorithm error enums (e.g.
//! `petgraph_algorithms::shortest_paths::dijkstra::DijkstraError`): a plain
//! `Debug + Display` enum implementing `error_stack::Context`, raised with
//! `error_stack::Report::new(kind).attach_printable(message)`. Every public
//! fallible function returns [`Result<T>`], so call sites can `.change_context`
//! into a narrower error if they need to, but nothing in this engine does —
//! the taxonomy below is already the full flat list §7 asks for.

use core::fmt::{self, Display, Formatter};

use error_stack::Context;

/// The flat error taxonomy from §6/§7. Every kind is fatal to the phase that
/// raised it; no phase attempts local recovery, and all scratch state held by
/// that phase is dropped (not leaked) on the error path, since it is owned by
/// ordinary `Vec`s and goes out of scope with the `Result::Err` return.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An allocation failed while sizing a mesh, tree, or scratch buffer.
    ///
    /// Kept in the taxonomy because §7 names it as part of the error
    /// surface, but it is not constructed anywhere in this engine: every
    /// buffer here is an ordinary `Vec`/`alloc::vec::Vec`, and Rust's default
    /// global allocator aborts the process on allocation failure rather than
    /// returning a recoverable error, so there is no call site that could
    /// ever observe one to report. A caller providing its own fallible
    /// allocator (`try_reserve` and friends) would be the only way to make
    /// this reachable, and this engine doesn't do that.
    AllocFailed,
    /// The mesh is missing required attributes or has too few vertices/faces.
    InvalidMesh,
    /// The manifold check found a non-manifold edge or vertex fan.
    NonManifoldMesh,
    /// A join tree and split tree disagree on `num_nodes`/`num_arcs`/`num_roots`.
    TreeShapeMismatch,
    /// A tree was consumed before its arcs/roots were fully populated.
    TreeIncomplete,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AllocFailed => "alloc-failed",
            Self::InvalidMesh => "invalid-mesh",
            Self::NonManifoldMesh => "non-manifold-mesh",
            Self::TreeShapeMismatch => "tree-shape-mismatch",
            Self::TreeIncomplete => "tree-incomplete",
        };
        f.write_str(text)
    }
}

impl Context for ErrorKind {}

/// Result alias used throughout the engine: every fallible phase returns
/// `error_stack::Result<T, ErrorKind>`.
pub type Result<T> = error_stack::Result<T, ErrorKind>;
