use grid_greedy_walk::{write_path, GreedyWalker, GridBounds, Position, WalkGrid};
use std::io;

// Walks an 8x8 grid from (0, 0) to (3, 3) around a single obstacle at (1, 1)
// and prints the committed steps, one "row col" pair per line.
fn main() -> io::Result<()> {
    let grid = WalkGrid::new(GridBounds::new(0, 7, 0, 7), [Position::new(1, 1)]);
    let start = Position::new(0, 0);
    let goal = Position::new(3, 3);
    match GreedyWalker::new().walk(&grid, start, goal) {
        Ok(path) => write_path(&mut io::stdout(), &path)?,
        Err(e) => eprintln!("walk failed: {}", e),
    }
    Ok(())
}
