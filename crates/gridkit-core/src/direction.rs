//! Headings on a 2D grid and 90° turns between them.

use crate::point::Point2;
use std::fmt;

/// Sense of a 90° rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Clockwise with `y` growing downwards (up becomes right).
    Clockwise,
    /// Counter-clockwise (up becomes left).
    CounterClockwise,
}

impl Turn {
    /// The rotation that undoes this one.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// One of the four orthogonal headings on a 2D grid.
///
/// Used both as a neighbour offset and as a movement heading that can be
/// turned. The discriminant order matches [`Coordinate::surrounding`]
/// (up, right, down, left).
///
/// [`Coordinate::surrounding`]: crate::Coordinate::surrounding
///
/// # Examples
///
/// ```
/// use gridkit_core::{Direction, Point2, Turn};
///
/// let heading = Direction::Up.rotate(Turn::Clockwise);
/// assert_eq!(heading, Direction::Right);
/// assert_eq!(Point2::new(3, 3) + heading.delta(), Point2::new(4, 3));
/// assert_eq!(heading.opposite(), Direction::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `x`.
    Right,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
}

impl Direction {
    /// All headings in clockwise order starting at [`Direction::Up`].
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit offset for this heading.
    pub const fn delta(self) -> Point2 {
        match self {
            Self::Up => Point2::UP,
            Self::Right => Point2::RIGHT,
            Self::Down => Point2::DOWN,
            Self::Left => Point2::LEFT,
        }
    }

    /// Heading for a unit offset, or `None` if `delta` is not one.
    pub fn from_delta(delta: Point2) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == delta)
    }

    /// Heading after a 90° turn.
    pub const fn rotate(self, turn: Turn) -> Self {
        let step = match turn {
            Turn::Clockwise => 1,
            Turn::CounterClockwise => 3,
        };
        Self::ALL[(self as usize + step) % 4]
    }

    /// Heading after a 180° turn.
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// `true` for [`Direction::Left`] and [`Direction::Right`].
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<Direction> for Point2 {
    fn from(d: Direction) -> Self {
        d.delta()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn rotate_pairs_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.rotate(Turn::Clockwise).rotate(Turn::CounterClockwise), d);
            assert_eq!(d.rotate(Turn::CounterClockwise).rotate(Turn::Clockwise), d);
        }
    }

    #[test]
    fn four_clockwise_turns_is_identity() {
        for d in Direction::ALL {
            let back = (0..4).fold(d, |acc, _| acc.rotate(Turn::Clockwise));
            assert_eq!(back, d);
        }
    }

    #[test]
    fn rotate_matches_vector_rotation() {
        for d in Direction::ALL {
            for turn in [Turn::Clockwise, Turn::CounterClockwise] {
                assert_eq!(d.rotate(turn).delta(), d.delta().rotate(turn));
            }
        }
    }

    #[test]
    fn opposite_cancels_delta() {
        for d in Direction::ALL {
            assert_eq!(d.delta() + d.opposite().delta(), Point2::ORIGIN);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn order_matches_surrounding() {
        let deltas: Vec<Point2> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.as_slice(), Point2::ORIGIN.surrounding().as_slice());
    }

    #[test]
    fn from_delta_rejects_diagonals() {
        assert_eq!(Direction::from_delta(Point2::new(0, 1)), Some(Direction::Down));
        assert_eq!(Direction::from_delta(Point2::new(1, 1)), None);
        assert_eq!(Turn::Clockwise.reverse(), Turn::CounterClockwise);
    }
}
