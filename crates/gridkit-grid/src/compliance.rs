//! Dense grid access-law test helpers.
//!
//! These functions verify that a grid honours the get/set contract at
//! every in-range coordinate and a ring of coordinates just outside it.
//! Reused by the dense grid tests for both origin and shifted grids.

use crate::dense::DenseGrid;
use gridkit_core::{Bounds, Point2};

/// Coordinates one step outside each edge of `bounds`, corners included.
fn outer_ring(bounds: &Bounds) -> Vec<Point2> {
    let tl = bounds.top_left();
    let br = bounds.bottom_right();
    let mut ring = Vec::new();
    for x in tl.x - 1..=br.x {
        ring.push(Point2::new(x, tl.y - 1));
        ring.push(Point2::new(x, br.y));
    }
    for y in tl.y..br.y {
        ring.push(Point2::new(tl.x - 1, y));
        ring.push(Point2::new(br.x, y));
    }
    ring
}

/// Assert that `set(c, v)` followed by `get(c)` yields `v` everywhere in range.
pub fn assert_set_then_get(grid: &mut DenseGrid<u32>) {
    let positions: Vec<Point2> = grid.positions().collect();
    for (i, &c) in positions.iter().enumerate() {
        grid.set(c, i as u32);
        assert_eq!(grid.get(c), Some(&(i as u32)), "set/get mismatch at {c}");
    }
}

/// Assert that writes just outside the grid are dropped and reads absent.
pub fn assert_outside_is_absent(grid: &mut DenseGrid<u32>) {
    let before = grid.occupied();
    for c in outer_ring(&grid.bounds()) {
        grid.set(c, u32::MAX);
        assert_eq!(grid.get(c), None, "out-of-range {c} returned a value");
        assert!(grid.require(c).is_err(), "require({c}) succeeded out of range");
    }
    assert_eq!(grid.occupied(), before, "out-of-range write changed occupancy");
}

/// Assert that `positions` visits every buffer index exactly once, row-major.
pub fn assert_positions_cover_buffer(grid: &DenseGrid<u32>) {
    let positions: Vec<Point2> = grid.positions().collect();
    assert_eq!(positions.len(), grid.width() * grid.height());
    for (i, &c) in positions.iter().enumerate() {
        assert_eq!(grid.index_of(c), Some(i), "index_of({c}) != {i}");
    }
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(sorted, positions, "positions are not row-major");
}

/// Run all access-law checks against a fresh grid.
pub fn run_full_compliance(mut grid: DenseGrid<u32>) {
    assert_positions_cover_buffer(&grid);
    assert_outside_is_absent(&mut grid);
    assert_set_then_get(&mut grid);
    assert_outside_is_absent(&mut grid);
}
