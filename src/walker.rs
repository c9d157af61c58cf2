use crate::candidates::{candidates, CANDIDATE_SLOTS};
use crate::grid::WalkGrid;
use crate::point::Position;
use log::{info, warn};
use thiserror::Error;

/// Terminal failures of a walk. None of these is recoverable within the run;
/// the caller reconfigures the grid and starts over.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// Start or goal lies outside the grid bounds; rejected before stepping.
    #[error("position {0} lies outside the grid bounds")]
    OutOfBounds(Position),
    /// Every candidate at some iteration was blocked, over a boundary or the
    /// cell just left.
    #[error("no legal move from {at}")]
    Deadlock { at: Position },
    /// The step cap was reached without arrival; the walk was likely
    /// oscillating rather than hard-blocked.
    #[error("no arrival within {limit} steps")]
    StepLimitExceeded { limit: usize },
}

/// Result of one [WalkState::advance] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStatus {
    Walking,
    Arrived,
}

/// Mutable state of one walk: the current cell, the cell it just left
/// (equal to current before the first step) and every committed step so far.
/// Owned by the walk invocation, never shared.
#[derive(Clone, Debug)]
pub struct WalkState {
    current: Position,
    previous: Position,
    path: Vec<Position>,
}

impl WalkState {
    pub fn new(start: Position) -> WalkState {
        WalkState {
            current: start,
            previous: start,
            path: Vec::new(),
        }
    }

    pub fn current(&self) -> Position {
        self.current
    }

    /// The committed steps in visitation order, start exclusive.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }

    /// Performs one greedy step towards `goal`: generates candidates, scores
    /// the walkable ones by Euclidean distance to the goal and commits the
    /// best to the path. Arrival is detected before any candidates are
    /// generated, so a walk that starts on the goal never produces a step.
    pub fn advance(&mut self, grid: &WalkGrid, goal: Position) -> Result<WalkStatus, WalkError> {
        if self.current == goal {
            return Ok(WalkStatus::Arrived);
        }
        let mut set = candidates(&grid.bounds, self.current, self.previous);
        // Unreachable slots always score infinity, freshly assigned every
        // iteration; a blocked or off-grid candidate can never win while a
        // legal one exists.
        let mut scores = [f64::INFINITY; CANDIDATE_SLOTS];
        for (slot, score) in set.slots.iter_mut().zip(scores.iter_mut()) {
            if let Some(p) = *slot {
                if grid.walkable(&p) {
                    *score = p.distance(&goal);
                } else {
                    *slot = None;
                }
            }
        }
        if set.all_unreachable() {
            return Err(WalkError::Deadlock { at: self.current });
        }
        // Minimum score wins, earlier slot wins ties (north before west
        // before south before east). A non-empty set always selects a real
        // candidate: finite scores beat the infinity of empty slots.
        let mut best = 0;
        for i in 1..CANDIDATE_SLOTS {
            if scores[i] < scores[best] {
                best = i;
            }
        }
        let next = set.slots[best].ok_or(WalkError::Deadlock { at: self.current })?;
        self.path.push(next);
        self.previous = self.current;
        self.current = next;
        Ok(WalkStatus::Walking)
    }
}

/// Drives [WalkState::advance] until arrival or a terminal failure.
#[derive(Clone, Debug, Default)]
pub struct GreedyWalker {
    step_limit: Option<usize>,
}

impl GreedyWalker {
    pub fn new() -> GreedyWalker {
        GreedyWalker::default()
    }

    /// Overrides the default step cap of four times the grid area.
    pub fn with_step_limit(limit: usize) -> GreedyWalker {
        GreedyWalker {
            step_limit: Some(limit),
        }
    }

    /// Walks from `start` to `goal` on `grid`, returning the committed steps
    /// in visitation order, start exclusive and goal inclusive. A walk whose
    /// start equals its goal arrives immediately with an empty path.
    pub fn walk(
        &self,
        grid: &WalkGrid,
        start: Position,
        goal: Position,
    ) -> Result<Vec<Position>, WalkError> {
        for p in [start, goal] {
            if !grid.in_bounds(&p) {
                return Err(WalkError::OutOfBounds(p));
            }
        }
        // The walk is deterministic in the (current, previous) pair and each
        // cell has at most four incoming directions, so any walk longer than
        // 4 * area has repeated a state and will never arrive.
        let limit = self.step_limit.unwrap_or(4 * grid.bounds.area());
        info!("walking from {} to {} with step limit {}", start, goal, limit);
        let mut state = WalkState::new(start);
        loop {
            match state.advance(grid, goal) {
                Ok(WalkStatus::Arrived) => {
                    info!("arrived at {} after {} steps", goal, state.path().len());
                    return Ok(state.into_path());
                }
                Ok(WalkStatus::Walking) => {
                    if state.path().len() > limit {
                        warn!("step limit {} exceeded without arriving at {}", limit, goal);
                        return Err(WalkError::StepLimitExceeded { limit });
                    }
                }
                Err(e) => {
                    warn!("walk from {} failed: {}", start, e);
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBounds;

    fn open_grid() -> WalkGrid {
        WalkGrid::new(GridBounds::new(0, 7, 0, 7), [])
    }

    #[test]
    fn advance_commits_one_step() {
        let grid = open_grid();
        let mut state = WalkState::new(Position::new(0, 0));
        let status = state.advance(&grid, Position::new(3, 3)).unwrap();
        assert_eq!(status, WalkStatus::Walking);
        // South and east tie at distance sqrt(13); south sits in the earlier
        // slot.
        assert_eq!(state.path(), &[Position::new(1, 0)]);
        assert_eq!(state.current(), Position::new(1, 0));
    }

    #[test]
    fn advance_on_goal_is_arrival_without_a_step() {
        let grid = open_grid();
        let goal = Position::new(5, 5);
        let mut state = WalkState::new(goal);
        assert_eq!(state.advance(&grid, goal).unwrap(), WalkStatus::Arrived);
        assert!(state.path().is_empty());
    }

    #[test]
    fn boxed_in_start_deadlocks() {
        let grid = WalkGrid::new(
            GridBounds::new(0, 7, 0, 7),
            [Position::new(0, 1), Position::new(1, 0)],
        );
        let mut state = WalkState::new(Position::new(0, 0));
        assert_eq!(
            state.advance(&grid, Position::new(3, 3)),
            Err(WalkError::Deadlock {
                at: Position::new(0, 0)
            })
        );
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let grid = open_grid();
        let walker = GreedyWalker::new();
        let bad = Position::new(8, 0);
        assert_eq!(
            walker.walk(&grid, bad, Position::new(3, 3)),
            Err(WalkError::OutOfBounds(bad))
        );
        assert_eq!(
            walker.walk(&grid, Position::new(3, 3), bad),
            Err(WalkError::OutOfBounds(bad))
        );
    }
}
