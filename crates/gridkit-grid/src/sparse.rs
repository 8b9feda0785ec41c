//! Unbounded sparse field keyed by coordinate.

use crate::dense::DenseGrid;
use gridkit_core::{Bounds, GeometryError, Point2};
use gridkit_store::StructMap;
use std::fmt;

/// An unbounded mapping from [`Point2`] to value.
///
/// Coordinates may be negative. Bounds are not stored: [`bounds`] rescans
/// the occupied keys on every call, so callers that need them repeatedly
/// should cache the result.
///
/// [`bounds`]: Self::bounds
///
/// # Examples
///
/// ```
/// use gridkit_core::Point2;
/// use gridkit_grid::SparseField;
///
/// let mut field = SparseField::new();
/// field.set(Point2::new(-2, 0), '#');
/// field.set(Point2::new(1, 3), '#');
///
/// let grid = field.to_dense().unwrap();
/// assert_eq!((grid.width(), grid.height()), (4, 4));
/// assert_eq!(grid.get(Point2::new(-2, 0)), Some(&'#'));
/// assert_eq!(grid.get(Point2::new(0, 0)), None);
/// ```
pub struct SparseField<T> {
    cells: StructMap<Point2, T>,
}

impl<T> SparseField<T> {
    /// Create an empty field.
    pub fn new() -> Self {
        Self {
            cells: StructMap::new(),
        }
    }

    /// Insert or overwrite the value at `coord`.
    pub fn set(&mut self, coord: Point2, value: T) -> Option<T> {
        self.cells.insert(coord, value)
    }

    /// The value at `coord`; never creates an entry.
    pub fn get(&self, coord: Point2) -> Option<&T> {
        self.cells.get(&coord)
    }

    /// Mutable access to the value at `coord`.
    pub fn get_mut(&mut self, coord: Point2) -> Option<&mut T> {
        self.cells.get_mut(&coord)
    }

    /// Remove and return the value at `coord`.
    pub fn remove(&mut self, coord: Point2) -> Option<T> {
        self.cells.remove(&coord)
    }

    /// `true` if `coord` is occupied.
    pub fn contains(&self, coord: Point2) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of occupied coordinates.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Point2, &T)> + '_ {
        self.cells.iter()
    }

    /// Minimal bounds covering every occupied coordinate, recomputed now.
    ///
    /// Returns `Err(GeometryError::EmptyPointSet)` when the field is empty.
    pub fn bounds(&self) -> Result<Bounds, GeometryError> {
        Bounds::enclosing(self.cells.keys())
    }

    /// Materialize into a [`DenseGrid`] whose delta is the bounds' corner.
    ///
    /// Grid coordinates equal field coordinates; cells the field does not
    /// occupy are empty.
    pub fn to_dense(&self) -> Result<DenseGrid<T>, GeometryError>
    where
        T: Clone,
    {
        let bounds = self.bounds()?;
        let mut grid = DenseGrid::new(bounds.width(), bounds.height()).with_delta(bounds.top_left());
        for (coord, value) in self.iter() {
            grid.set(coord, value.clone());
        }
        Ok(grid)
    }

    /// Consuming form of [`to_dense`](Self::to_dense).
    pub fn into_dense(self) -> Result<DenseGrid<T>, GeometryError> {
        let bounds = self.bounds()?;
        let mut grid = DenseGrid::new(bounds.width(), bounds.height()).with_delta(bounds.top_left());
        for (coord, value) in self.cells.into_entries() {
            grid.set(coord, value);
        }
        Ok(grid)
    }
}

impl<T> Default for SparseField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SparseField<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseField")
            .field("cells", &self.cells)
            .finish()
    }
}

impl<T> FromIterator<(Point2, T)> for SparseField<T> {
    fn from_iter<I: IntoIterator<Item = (Point2, T)>>(iter: I) -> Self {
        let mut field = Self::new();
        field.extend(iter);
        field
    }
}

impl<T> Extend<(Point2, T)> for SparseField<T> {
    fn extend<I: IntoIterator<Item = (Point2, T)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
