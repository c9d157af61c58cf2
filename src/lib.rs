//! # grid_greedy_walk
//!
//! A greedy 4-way walker on a bounded grid. Each iteration scores the
//! orthogonal neighbours of the current cell by Euclidean distance to the
//! goal and commits to the closest, never stepping straight back onto the
//! cell it just left. This is a locally greedy walk, not admissible search:
//! it carries no optimality guarantee, and a walk into a pocket ends in a
//! typed [Deadlock](WalkError::Deadlock) instead of backtracking. A step cap
//! turns oscillation into [StepLimitExceeded](WalkError::StepLimitExceeded)
//! rather than an unbounded loop.

pub mod candidates;
pub mod grid;
pub mod point;
pub mod walker;

pub use candidates::{candidates, CandidateSet, CANDIDATE_SLOTS};
pub use grid::{GridBounds, WalkGrid};
pub use point::{Direction, Position};
pub use walker::{GreedyWalker, WalkError, WalkState, WalkStatus};

use std::io::{self, Write};

/// Writes a path in the line-oriented text form, one `"row col"` pair per
/// line in visitation order. This is the default presentation of a finished
/// walk; the walk itself only ever returns data.
pub fn write_path<W: Write>(w: &mut W, path: &[Position]) -> io::Result<()> {
    for p in path {
        writeln!(w, "{}", p)?;
    }
    Ok(())
}
