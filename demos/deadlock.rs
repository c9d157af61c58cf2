use grid_greedy_walk::{GreedyWalker, GridBounds, Position, WalkGrid};

// The walker runs east along the top row into a pocket whose only open
// neighbour is the cell it came from, and reports a deadlock instead of
// looping. The grid is printed for orientation.
fn main() {
    let obstacles = [(1, 0), (1, 1), (1, 2), (1, 3), (0, 4)]
        .map(|(r, c)| Position::new(r, c));
    let grid = WalkGrid::new(GridBounds::new(0, 7, 0, 7), obstacles);
    println!("{}", grid);
    match GreedyWalker::new().walk(&grid, Position::new(0, 0), Position::new(0, 6)) {
        Ok(path) => println!("unexpectedly arrived in {} steps", path.len()),
        Err(e) => println!("walk failed: {}", e),
    }
}
