//! Laws every [`Coordinate`] implementation must satisfy.
//!
//! Each helper panics with a descriptive message on the first violation.

use gridkit_core::Coordinate;

/// Manhattan distance is a metric.
pub fn assert_metric_laws<C: Coordinate>(a: C, b: C, c: C) {
    assert_eq!(a.manhattan_distance(&a), 0, "d(a, a) != 0 for {a:?}");
    assert_eq!(
        a.manhattan_distance(&b),
        b.manhattan_distance(&a),
        "distance not symmetric for {a:?}, {b:?}"
    );
    if a != b {
        assert!(a.manhattan_distance(&b) > 0, "distinct {a:?}, {b:?} at distance 0");
    }
    assert!(
        a.manhattan_distance(&c) <= a.manhattan_distance(&b) + b.manhattan_distance(&c),
        "triangle inequality fails for {a:?}, {b:?}, {c:?}"
    );
}

/// Distance is invariant under translation: `d(a, b) == d(a + t, b + t)`.
pub fn assert_translation_invariant<C: Coordinate>(a: C, b: C, t: C) {
    assert_eq!(
        a.manhattan_distance(&b),
        (a + t).manhattan_distance(&(b + t)),
        "translation by {t:?} changed d({a:?}, {b:?})"
    );
}

/// Orthogonal neighbours are exactly the points at distance 1, listed once
/// each; the full neighbourhood contains them and never the centre.
pub fn assert_neighbourhood_laws<C: Coordinate>(c: C) {
    let near = c.surrounding();
    assert_eq!(near.len(), 2 * C::AXES, "wrong neighbour count around {c:?}");
    for n in &near {
        assert_eq!(c.manhattan_distance(n), 1, "{n:?} is not adjacent to {c:?}");
        assert!(c.is_adjacent(n));
    }
    for (i, n) in near.iter().enumerate() {
        assert!(!near[i + 1..].contains(n), "{n:?} listed twice around {c:?}");
    }

    let full = c.full_surrounding();
    assert!(!full.contains(&c), "full neighbourhood of {c:?} contains it");
    assert!(near.iter().all(|n| full.contains(n)));
    let mut sorted = full.to_vec();
    sorted.sort();
    assert_eq!(sorted, full.to_vec(), "full neighbourhood not in coordinate order");
}

/// Run every law on one triple of points.
pub fn run_coordinate_laws<C: Coordinate>(a: C, b: C, c: C) {
    assert_metric_laws(a, b, c);
    assert_translation_invariant(a, b, c);
    assert_neighbourhood_laws(a);
}
