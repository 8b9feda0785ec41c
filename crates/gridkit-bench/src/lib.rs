//! Benchmark profiles for the gridkit toolkit.
//!
//! Deterministic inputs shared by the criterion benches:
//!
//! - [`maze_profile`]: a square maze with seeded wall placement
//! - [`scattered_points`]: seeded points spread over a square region

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridkit_core::Point2;
use gridkit_grid::DenseGrid;

/// Step a 64-bit LCG; the high bits are the output.
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// A `size * size` maze where roughly `wall_percent`% of cells are `'#'`
/// and the rest `'.'`. The top-left cell is always open.
pub fn maze_profile(size: usize, wall_percent: u64, seed: u64) -> DenseGrid<char> {
    let mut state = seed;
    let mut grid = DenseGrid::new(size, size);
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let wall = lcg(&mut state) % 100 < wall_percent;
            grid.set(Point2::new(x, y), if wall { '#' } else { '.' });
        }
    }
    grid.set(Point2::new(0, 0), '.');
    grid
}

/// `count` points with both components in `-half..half`.
pub fn scattered_points(count: usize, half: i64, seed: u64) -> Vec<Point2> {
    let mut state = seed;
    let span = (2 * half) as u64;
    (0..count)
        .map(|_| {
            let x = (lcg(&mut state) % span) as i64 - half;
            let y = (lcg(&mut state) % span) as i64 - half;
            Point2::new(x, y)
        })
        .collect()
}
