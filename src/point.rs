use core::fmt;

/// A grid coordinate in matrix notation: row grows southwards, column grows
/// eastwards. Positions have value identity only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Euclidean distance to `other`, used as the heuristic score of a
    /// candidate against the goal.
    pub fn distance(&self, other: &Position) -> f64 {
        let d_row = (other.row - self.row) as f64;
        let d_col = (other.col - self.col) as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// The orthogonal neighbour one step in `dir`.
    pub fn step(&self, dir: Direction) -> Position {
        match dir {
            Direction::North => Position::new(self.row - 1, self.col),
            Direction::West => Position::new(self.row, self.col - 1),
            Direction::South => Position::new(self.row + 1, self.col),
            Direction::East => Position::new(self.row, self.col + 1),
        }
    }

    /// The direction leading from `self` back to `previous`, provided the two
    /// are exactly one orthogonal step apart. Equal positions mean the walk
    /// has no history yet and yield [None], as does any non-adjacent pair.
    pub fn direction_back_to(&self, previous: &Position) -> Option<Direction> {
        match (self.row - previous.row, self.col - previous.col) {
            (1, 0) => Some(Direction::North),
            (0, 1) => Some(Direction::West),
            (-1, 0) => Some(Direction::South),
            (0, -1) => Some(Direction::East),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// The four orthogonal move directions. The declaration order doubles as the
/// fixed candidate slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// All directions in candidate slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }
}
