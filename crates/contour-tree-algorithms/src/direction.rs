//! Sweep direction as a tagged enum rather than function-pointer dispatch
//! (§9 "Function-pointer dispatch → tagged direction").
//!
//! The original engine drove join vs. split sweeps through a pair of
//! function pointers for "compare" and "increment". A single generic sweep
//! parameterised by this enum's inline predicates gives the same two
//! behaviours with no runtime indirection.

/// Which merge tree a sweep is building.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Join tree: sweeps rank high → low, unions sublevel-set components as
    /// the scalar value rises past each vertex in reverse.
    Join,
    /// Split tree: sweeps rank low → high, the mirror image.
    Split,
}

impl Direction {
    /// The rank a sweep in this direction starts from.
    #[inline]
    pub fn start(self, num_nodes: usize) -> usize {
        match self {
            Self::Join => num_nodes.saturating_sub(1),
            Self::Split => 0,
        }
    }

    /// Advance `rank` one step in this direction's sweep order. Returns
    /// `None` once the sweep has exhausted all `num_nodes` ranks.
    #[inline]
    pub fn advance(self, rank: usize, num_nodes: usize) -> Option<usize> {
        match self {
            Self::Join => rank.checked_sub(1),
            Self::Split => {
                let next = rank + 1;
                (next < num_nodes).then_some(next)
            }
        }
    }

    /// Whether neighbour rank `j` has already been swept when the current
    /// rank is `i` — §4.D step 2: "`dir==join` requires `j > i`
    /// (neighbour already processed); `dir==split` requires `j < i`".
    #[inline]
    pub fn already_swept(self, i: usize, j: usize) -> bool {
        match self {
            Self::Join => j > i,
            Self::Split => j < i,
        }
    }
}
