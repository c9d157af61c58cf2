use crate::point::Position;
use core::fmt;
use fxhash::FxHashSet;

/// Inclusive rectangular domain of valid grid coordinates, fixed for the
/// lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl GridBounds {
    /// Panics if a minimum exceeds its maximum.
    pub fn new(min_row: i32, max_row: i32, min_col: i32, max_col: i32) -> GridBounds {
        assert!(
            min_row <= max_row && min_col <= max_col,
            "grid bounds must satisfy min_row <= max_row and min_col <= max_col"
        );
        GridBounds {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    pub fn contains(&self, p: &Position) -> bool {
        p.row >= self.min_row
            && p.row <= self.max_row
            && p.col >= self.min_col
            && p.col <= self.max_col
    }

    pub fn rows(&self) -> usize {
        (self.max_row - self.min_row + 1) as usize
    }

    pub fn cols(&self) -> usize {
        (self.max_col - self.min_col + 1) as usize
    }

    pub fn area(&self) -> usize {
        self.rows() * self.cols()
    }
}

/// Static configuration of one walk: the bounds and the blocked cells. All
/// queries are pure; an out-of-range query is simply not in bounds, never an
/// error.
#[derive(Clone, Debug)]
pub struct WalkGrid {
    pub bounds: GridBounds,
    obstacles: FxHashSet<Position>,
}

impl WalkGrid {
    pub fn new(bounds: GridBounds, obstacles: impl IntoIterator<Item = Position>) -> WalkGrid {
        WalkGrid {
            bounds,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    pub fn in_bounds(&self, p: &Position) -> bool {
        self.bounds.contains(p)
    }

    pub fn blocked(&self, p: &Position) -> bool {
        self.obstacles.contains(p)
    }

    pub fn walkable(&self, p: &Position) -> bool {
        self.in_bounds(p) && !self.blocked(p)
    }
}

impl fmt::Display for WalkGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.bounds.min_row..=self.bounds.max_row {
            for col in self.bounds.min_col..=self.bounds.max_col {
                let c = if self.blocked(&Position::new(row, col)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
