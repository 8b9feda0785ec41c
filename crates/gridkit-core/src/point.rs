//! Integer points in 2D and 3D discrete space and the [`Coordinate`] trait.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Neighbour list returned by [`Coordinate`] enumeration.
///
/// Eight inline slots cover every 2D neighbourhood and the 3D orthogonal
/// one. The 26-cell 3D full neighbourhood spills to the heap.
pub type Neighbours<C> = SmallVec<[C; 8]>;

/// A structurally-compared point in a discrete integer space.
///
/// Implemented by [`Point2`] and [`Point3`]. Search, containers, and
/// test helpers are generic over this trait so 2D and 3D spaces share
/// one implementation.
pub trait Coordinate:
    Copy + Eq + Hash + Ord + fmt::Debug + Add<Output = Self> + Sub<Output = Self>
{
    /// Number of axes.
    const AXES: usize;

    /// The point with every component zero.
    const ORIGIN: Self;

    /// Sum of absolute component differences.
    fn manhattan_distance(&self, other: &Self) -> u64;

    /// Orthogonal neighbours in a fixed, deterministic order.
    fn surrounding(&self) -> Neighbours<Self>;

    /// All neighbours including diagonals, in a fixed order, excluding `self`.
    fn full_surrounding(&self) -> Neighbours<Self>;

    /// `true` if `other` is one orthogonal step away.
    fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

// ── Point2 ──────────────────────────────────────────────────────────

/// A point (or vector) on a 2D integer lattice.
///
/// `y` grows downwards, so [`Point2::UP`] is `(0, -1)`. Ordering is
/// row-major: first by `y`, then by `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Point2 {
    /// Unit vector pointing up (towards smaller `y`).
    pub const UP: Self = Self::new(0, -1);
    /// Unit vector pointing right.
    pub const RIGHT: Self = Self::new(1, 0);
    /// Unit vector pointing down.
    pub const DOWN: Self = Self::new(0, 1);
    /// Unit vector pointing left.
    pub const LEFT: Self = Self::new(-1, 0);

    /// Create a point from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rotate this vector by 90° around the origin.
    ///
    /// With `y` growing downwards, clockwise maps `UP` to `RIGHT`.
    ///
    /// ```
    /// use gridkit_core::{Point2, Turn};
    ///
    /// assert_eq!(Point2::UP.rotate(Turn::Clockwise), Point2::RIGHT);
    /// assert_eq!(Point2::new(2, 1).rotate(Turn::CounterClockwise), Point2::new(1, -2));
    /// ```
    pub const fn rotate(self, turn: crate::Turn) -> Self {
        match turn {
            crate::Turn::Clockwise => Self::new(-self.y, self.x),
            crate::Turn::CounterClockwise => Self::new(self.y, -self.x),
        }
    }

    /// Component-wise sign, so `(5, -3)` becomes `(1, -1)`.
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }
}

impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Coordinate for Point2 {
    const AXES: usize = 2;
    const ORIGIN: Self = Self::new(0, 0);

    fn manhattan_distance(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Up, right, down, left.
    fn surrounding(&self) -> Neighbours<Self> {
        smallvec![
            *self + Self::UP,
            *self + Self::RIGHT,
            *self + Self::DOWN,
            *self + Self::LEFT,
        ]
    }

    /// Row-major over the surrounding 3x3 block.
    fn full_surrounding(&self) -> Neighbours<Self> {
        let mut out = SmallVec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    out.push(Self::new(self.x + dx, self.y + dy));
                }
            }
        }
        out
    }
}

// ── Point3 ──────────────────────────────────────────────────────────

/// A point on a 3D integer lattice. Ordered by `z`, then `y`, then `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3 {
    /// First axis.
    pub x: i64,
    /// Second axis.
    pub y: i64,
    /// Third axis.
    pub z: i64,
}

impl Point3 {
    /// Create a point from its components.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i64, i64, i64)> for Point3 {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i64> for Point3 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Coordinate for Point3 {
    const AXES: usize = 3;
    const ORIGIN: Self = Self::new(0, 0, 0);

    fn manhattan_distance(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// -x, +x, -y, +y, -z, +z.
    fn surrounding(&self) -> Neighbours<Self> {
        let offsets: [(i64, i64, i64); 6] = [
            (-1, 0, 0),
            (1, 0, 0),
            (0, -1, 0),
            (0, 1, 0),
            (0, 0, -1),
            (0, 0, 1),
        ];
        offsets
            .into_iter()
            .map(|(dx, dy, dz)| Self::new(self.x + dx, self.y + dy, self.z + dz))
            .collect()
    }

    fn full_surrounding(&self) -> Neighbours<Self> {
        let mut out = SmallVec::new();
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx != 0 || dy != 0 || dz != 0 {
                        out.push(Self::new(self.x + dx, self.y + dy, self.z + dz));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Turn;
    use proptest::prelude::*;

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn sum_and_diff_are_componentwise() {
        assert_eq!(p(1, 2) + p(3, -5), p(4, -3));
        assert_eq!(p(1, 2) - p(3, -5), p(-2, 7));
        assert_eq!(Point2::RIGHT * 3, p(3, 0));
        assert_eq!(-p(1, -1), p(-1, 1));
    }

    #[test]
    fn surrounding_order_is_fixed() {
        let n = p(5, 5).surrounding();
        assert_eq!(n.as_slice(), &[p(5, 4), p(6, 5), p(5, 6), p(4, 5)]);
    }

    #[test]
    fn full_surrounding_excludes_center() {
        let n = p(0, 0).full_surrounding();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&p(0, 0)));
        assert_eq!(n[0], p(-1, -1));
        assert_eq!(n[7], p(1, 1));
        assert!(!n.spilled());
    }

    #[test]
    fn point3_neighbourhoods() {
        let c = Point3::new(1, 1, 1);
        assert_eq!(c.surrounding().len(), 6);
        let full = c.full_surrounding();
        assert_eq!(full.len(), 26);
        assert!(!full.contains(&c));
        assert!(full.iter().all(|n| n.manhattan_distance(&c) <= 3));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![p(2, 1), p(0, 2), p(1, 1), p(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![p(5, 0), p(1, 1), p(2, 1), p(0, 2)]);
    }

    #[test]
    fn adjacency_is_unit_manhattan() {
        assert!(p(0, 0).is_adjacent(&p(0, 1)));
        assert!(!p(0, 0).is_adjacent(&p(1, 1)));
        assert!(!p(0, 0).is_adjacent(&p(0, 0)));
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric_and_zero_iff_equal(
            ax in -1000i64..1000, ay in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000,
        ) {
            let a = p(ax, ay);
            let b = p(bx, by);
            prop_assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
            prop_assert_eq!(a.manhattan_distance(&b) == 0, a == b);
        }

        #[test]
        fn rotation_round_trips(x in -50i64..50, y in -50i64..50) {
            let v = p(x, y);
            prop_assert_eq!(v.rotate(Turn::Clockwise).rotate(Turn::CounterClockwise), v);
            let four = (0..4).fold(v, |acc, _| acc.rotate(Turn::Clockwise));
            prop_assert_eq!(four, v);
        }

        #[test]
        fn every_surrounding_cell_is_adjacent(x in -50i64..50, y in -50i64..50, z in -50i64..50) {
            let c2 = p(x, y);
            prop_assert!(c2.surrounding().iter().all(|n| c2.is_adjacent(n)));
            let c3 = Point3::new(x, y, z);
            prop_assert!(c3.surrounding().iter().all(|n| c3.is_adjacent(n)));
        }
    }
}
