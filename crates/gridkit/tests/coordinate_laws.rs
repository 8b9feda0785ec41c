//! Coordinate law checks for every point type the crate ships.

use gridkit::geom::{Point2, Point3};
use gridkit_test_utils::laws::{assert_neighbourhood_laws, run_coordinate_laws};
use proptest::prelude::*;

fn point2() -> impl Strategy<Value = Point2> {
    (-1000i64..1000, -1000i64..1000).prop_map(Point2::from)
}

fn point3() -> impl Strategy<Value = Point3> {
    (-1000i64..1000, -1000i64..1000, -1000i64..1000).prop_map(Point3::from)
}

#[test]
fn origin_neighbourhoods() {
    assert_neighbourhood_laws(Point2::new(0, 0));
    assert_neighbourhood_laws(Point3::new(0, 0, 0));
}

proptest! {
    #[test]
    fn point2_laws(a in point2(), b in point2(), c in point2()) {
        run_coordinate_laws(a, b, c);
    }

    #[test]
    fn point3_laws(a in point3(), b in point3(), c in point3()) {
        run_coordinate_laws(a, b, c);
    }
}
