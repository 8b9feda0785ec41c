//! End-to-end puzzle scenarios combining several sub-crates.

use gridkit::prelude::*;
use gridkit::search::Visit;
use gridkit::store::{CodecMap, FnCodec};
use gridkit_test_utils::{init_logging, maze_from_rows};

// ── Grids and containers ────────────────────────────────────────

#[test]
fn sparse_trail_materializes_with_negative_origin() {
    // Walk a snake of moves and mark every visited cell.
    let mut field = SparseField::new();
    let mut at = Point2::new(0, 0);
    field.set(at, '#');
    for (dir, steps) in [
        (Direction::Left, 3),
        (Direction::Up, 2),
        (Direction::Right, 5),
    ] {
        for _ in 0..steps {
            at += Point2::from(dir);
            field.set(at, '#');
        }
    }
    let bounds = field.bounds().unwrap();
    assert_eq!(bounds.top_left(), Point2::new(-3, -2));
    assert_eq!(bounds.size(), Point2::new(6, 3));

    let grid = field.to_dense().unwrap();
    assert_eq!(grid.get(Point2::new(-3, -1)), Some(&'#'));
    assert_eq!(grid.get(Point2::new(0, -1)), None);
    let picture = grid.render(|c| c.map_or(".".into(), |ch| ch.to_string()));
    assert_eq!(picture, "######\n#.....\n####..");
}

#[test]
fn default_map_groups_cells_by_symbol() {
    let maze = maze_from_rows(&["a.b", "b.a", "..a"]);
    let mut groups: DefaultMap<char, Vec<Point2>> = DefaultMap::default();
    for (p, &c) in maze.iter() {
        if c != '.' {
            groups.ensure_and_get(c).push(p);
        }
    }
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.get(&'a').map(Vec::len), Some(3));
    assert_eq!(groups.get(&'b'), Some(&vec![Point2::new(2, 0), Point2::new(0, 1)]));
}

#[test]
fn packed_codec_and_struct_map_agree() {
    let pack = FnCodec::new(
        |p: &Point2| (p.y << 32) | (p.x & 0xffff_ffff),
        |k: &i64| Point2::new((*k as i32) as i64, k >> 32),
    );
    let mut packed = CodecMap::with_codec(pack);
    let mut plain = StructMap::new();
    for (i, p) in Bounds::from_corner(Point2::new(-2, -2), 5, 5).iter().enumerate() {
        packed.insert(p, i);
        plain.insert(p, i);
    }
    assert_eq!(packed.len(), plain.len());
    for (p, v) in plain.iter() {
        assert_eq!(packed.get(&p), Some(v));
    }
    assert_eq!(packed.keys().collect::<Vec<_>>(), plain.keys().collect::<Vec<_>>());
}

// ── Search ──────────────────────────────────────────────────────

#[test]
fn stateful_search_over_position_and_heading() {
    init_logging();
    // A cart may go straight or turn, but never reverse; turning costs 1000.
    let maze = maze_from_rows(&["#####", "#..E#", "#.#.#", "#S..#", "#####"]);
    let open = |p: Point2| maze.get(p).is_some_and(|&c| c != '#');
    let mut problem = FnProblem::new(
        |&(p, _): &(Point2, Direction)| open(p).then_some(()),
        |&(p, d): &(Point2, Direction)| {
            let mut next = gridkit::search::Candidates::new();
            next.push((p + Point2::from(d), d));
            next.push((p, d.rotate(Turn::Clockwise)));
            next.push((p, d.rotate(Turn::CounterClockwise)));
            next
        },
        |from: &Visit<(Point2, Direction), ()>, to: &(Point2, Direction), _: &()| {
            let cost = if to.1 == from.coord.1 { 1 } else { 1000 };
            Some(from.distance + cost)
        },
    );
    let start = (Point2::new(1, 3), Direction::Right);
    let result = dijkstra(&mut problem, start).unwrap();
    let best = Direction::ALL
        .iter()
        .filter_map(|&d| result.distance(&(Point2::new(3, 1), d)))
        .min();
    // Right 2, turn, up 2.
    assert_eq!(best, Some(1004));
}

#[test]
fn nearest_of_several_targets() {
    let maze = maze_from_rows(&["....1", ".###.", "2...."]);
    let mut problem = GridProblem::new(&maze, |&c| c != '#');
    let result = Bfs::new(Point2::new(2, 0))
        .stop_when(|v: &Visit<Point2, &char>| v.cell.is_ascii_digit())
        .run(&mut problem)
        .unwrap();
    let hit = result.stopped_at().unwrap();
    assert_eq!(*hit.cell, '1');
    assert_eq!(hit.distance, 2);
}

// ── Extrapolation ───────────────────────────────────────────────

#[test]
fn rotating_mark_extrapolates() {
    // Rotating a 3x3 pattern's single mark around the border: an 8-cycle
    // keyed on the grid itself.
    let ring = [
        Point2::new(0, 0),
        Point2::new(1, 0),
        Point2::new(2, 0),
        Point2::new(2, 1),
        Point2::new(2, 2),
        Point2::new(1, 2),
        Point2::new(0, 2),
        Point2::new(0, 1),
    ];
    let mut start = DenseGrid::new(3, 3);
    start.set(ring[0], '#');
    let step = |g: &DenseGrid<char>| {
        let at = ring.iter().position(|&p| g.get(p).is_some()).unwrap_or(0);
        let mut next = DenseGrid::new(3, 3);
        next.set(ring[(at + 1) % ring.len()], '#');
        let moved = ring[(at + 1) % ring.len()];
        (next, moved)
    };
    let out = extrapolate(start, 1_000_000_003, |g: &DenseGrid<char>| g.clone(), step).unwrap();
    assert_eq!(out.cycle_length(), 8);
    assert_eq!(out.result, ring[1_000_000_003 % 8]);
    assert_eq!(out.state.get(ring[3]), Some(&'#'));
}
