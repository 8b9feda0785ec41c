//! Axis-aligned rectangular regions of the 2D lattice.

use crate::error::GeometryError;
use crate::point::Point2;

/// An axis-aligned rectangle: a top-left corner plus a size.
///
/// Containment is closed-open on both axes:
/// `top_left.x <= x < top_left.x + size.x`, likewise for `y`.
/// Size components are never negative; [`Bounds::new`] rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    top_left: Point2,
    size: Point2,
}

impl Bounds {
    /// Create bounds from a corner and a size.
    ///
    /// Returns `Err(GeometryError::NegativeSize)` if either size component
    /// is negative.
    pub fn new(top_left: Point2, size: Point2) -> Result<Self, GeometryError> {
        if size.x < 0 || size.y < 0 {
            return Err(GeometryError::NegativeSize { size });
        }
        Ok(Self { top_left, size })
    }

    /// Bounds at the origin covering `width * height` cells.
    pub fn from_size(width: usize, height: usize) -> Self {
        Self {
            top_left: Point2::new(0, 0),
            size: Point2::new(width as i64, height as i64),
        }
    }

    /// Bounds with the given corner covering `width * height` cells.
    pub fn from_corner(top_left: Point2, width: usize, height: usize) -> Self {
        Self {
            top_left,
            size: Point2::new(width as i64, height as i64),
        }
    }

    /// Minimal bounds covering every point in `points`.
    ///
    /// Returns `Err(GeometryError::EmptyPointSet)` for an empty collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{Bounds, Point2};
    ///
    /// let b = Bounds::enclosing([Point2::new(-2, 1), Point2::new(3, -1)]).unwrap();
    /// assert_eq!(b.top_left(), Point2::new(-2, -1));
    /// assert_eq!(b.size(), Point2::new(6, 3));
    /// assert!(b.contains(Point2::new(3, 1)));
    /// ```
    pub fn enclosing<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator,
        I::Item: Into<Point2>,
    {
        let mut iter = points.into_iter().map(Into::into);
        let first = iter.next().ok_or(GeometryError::EmptyPointSet)?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Ok(Self {
            top_left: min,
            size: Point2::new(max.x - min.x + 1, max.y - min.y + 1),
        })
    }

    /// Top-left (inclusive) corner.
    pub fn top_left(&self) -> Point2 {
        self.top_left
    }

    /// Extent on each axis.
    pub fn size(&self) -> Point2 {
        self.size
    }

    /// Bottom-right corner, exclusive on both axes.
    pub fn bottom_right(&self) -> Point2 {
        self.top_left + self.size
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.size.x as usize
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.size.y as usize
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// `true` if the bounds cover no cells.
    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0
    }

    /// Closed-open containment test on both axes.
    pub fn contains(&self, p: Point2) -> bool {
        let end = self.bottom_right();
        self.top_left.x <= p.x && p.x < end.x && self.top_left.y <= p.y && p.y < end.y
    }

    /// Smallest bounds covering both `self` and `p`.
    pub fn expand(&self, p: Point2) -> Self {
        if self.is_empty() {
            return Self {
                top_left: p,
                size: Point2::new(1, 1),
            };
        }
        let end = self.bottom_right();
        let min = Point2::new(self.top_left.x.min(p.x), self.top_left.y.min(p.y));
        let max = Point2::new(end.x.max(p.x + 1), end.y.max(p.y + 1));
        Self {
            top_left: min,
            size: max - min,
        }
    }

    /// Every contained point in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point2> + '_ {
        let end = self.bottom_right();
        let (x0, x1) = (self.top_left.x, end.x);
        (self.top_left.y..end.y).flat_map(move |y| (x0..x1).map(move |x| Point2::new(x, y)))
    }
}

/// Free-function form of [`Bounds::contains`].
pub fn is_in_bounds(p: Point2, bounds: &Bounds) -> bool {
    bounds.contains(p)
}
