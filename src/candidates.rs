use crate::grid::GridBounds;
use crate::point::{Direction, Position};

/// Number of slots in a [CandidateSet]; one per orthogonal direction.
pub const CANDIDATE_SLOTS: usize = 4;

/// The candidate list of one iteration. Always exactly four slots: valid
/// candidates are compacted to the front in North, West, South, East order,
/// trailing slots carry [None] meaning "no valid candidate here". Never
/// outlives the iteration that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub slots: [Option<Position>; CANDIDATE_SLOTS],
}

impl CandidateSet {
    /// True when no slot holds a candidate, i.e. the walker has no legal
    /// move.
    pub fn all_unreachable(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}

/// Produces the reachable neighbours of `current`, excluding per axis the one
/// direction that steps over a boundary and the direction that retraces the
/// move from `previous`. With `current == previous` (the first iteration) no
/// coming-from exclusion applies.
pub fn candidates(bounds: &GridBounds, current: Position, previous: Position) -> CandidateSet {
    let (null_row, null_col) = boundary_exclusions(bounds, current);
    let coming_from = current.direction_back_to(&previous);
    let mut set = CandidateSet::default();
    let mut ind = 0;
    for dir in Direction::ALL {
        if Some(dir) == null_row || Some(dir) == null_col || Some(dir) == coming_from {
            continue;
        }
        set.slots[ind] = Some(current.step(dir));
        ind += 1;
    }
    set
}

/// At most one excluded direction per axis, southern and eastern limits
/// taking precedence. A degenerate axis (a single row or column) therefore
/// leaves one of its two violations unflagged; the walker's bounds check
/// catches the off-grid candidate before selection.
fn boundary_exclusions(
    bounds: &GridBounds,
    current: Position,
) -> (Option<Direction>, Option<Direction>) {
    let null_row = if current.row + 1 > bounds.max_row {
        Some(Direction::South)
    } else if current.row - 1 < bounds.min_row {
        Some(Direction::North)
    } else {
        None
    };
    let null_col = if current.col + 1 > bounds.max_col {
        Some(Direction::East)
    } else if current.col - 1 < bounds.min_col {
        Some(Direction::West)
    } else {
        None
    };
    (null_row, null_col)
}
