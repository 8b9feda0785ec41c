//! Fixed-size, flat-buffer grid with an optional origin offset.

use crate::error::GridError;
use crate::sparse::SparseField;
use gridkit_core::{Bounds, Point2};
use std::fmt;

/// A fixed-size 2D grid backed by a row-major `Vec<Option<T>>`.
///
/// Logical coordinates are translated by subtracting the grid's `delta`
/// before indexing, so a grid whose delta is `(-3, 5)` stores logical
/// `(-3, 5)` at buffer index 0. Out-of-range reads return `None` and
/// out-of-range writes are ignored; [`require`](Self::require) is the
/// checked variant for callers that have already proven occupancy.
///
/// # Examples
///
/// ```
/// use gridkit_core::Point2;
/// use gridkit_grid::DenseGrid;
///
/// let mut grid = DenseGrid::filled(3, 2, 0u8).with_delta(Point2::new(10, 10));
/// grid.set(Point2::new(12, 11), 7);
/// assert_eq!(grid.get(Point2::new(12, 11)), Some(&7));
/// assert_eq!(grid.get(Point2::new(2, 1)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DenseGrid<T> {
    width: usize,
    height: usize,
    delta: Point2,
    cells: Vec<Option<T>>,
}

impl<T> DenseGrid<T> {
    /// Create a `width * height` grid with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        cells.resize_with(width * height, || None);
        Self {
            width,
            height,
            delta: Point2::new(0, 0),
            cells,
        }
    }

    /// Build a grid from rows of values, top row first.
    ///
    /// Returns `Err(GridError::RaggedRows)` if the rows differ in length.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.into_iter().map(Some));
            let len = cells.len() - before;
            if y == 0 {
                width = len;
            } else if len != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    actual: len,
                });
            }
            height += 1;
        }
        if width == 0 {
            height = 0;
        }
        Ok(Self {
            width,
            height,
            delta: Point2::new(0, 0),
            cells,
        })
    }

    /// Replace the origin offset, consuming and returning the grid.
    pub fn with_delta(mut self, delta: Point2) -> Self {
        self.delta = delta;
        self
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Logical coordinate stored at buffer index 0.
    pub fn delta(&self) -> Point2 {
        self.delta
    }

    /// Move the grid's logical origin without touching its contents.
    pub fn set_delta(&mut self, delta: Point2) {
        self.delta = delta;
    }

    /// Logical region covered by the grid.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corner(self.delta, self.width, self.height)
    }

    /// Row-major buffer index for a logical coordinate.
    pub fn index_of(&self, coord: Point2) -> Option<usize> {
        let x = usize::try_from(coord.x.checked_sub(self.delta.x)?).ok()?;
        let y = usize::try_from(coord.y.checked_sub(self.delta.y)?).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Logical coordinate of a buffer index.
    fn coord_of(&self, index: usize) -> Point2 {
        let x = (index % self.width) as i64;
        let y = (index / self.width) as i64;
        Point2::new(x, y) + self.delta
    }

    /// `true` if `coord` lies inside the grid.
    pub fn contains(&self, coord: Point2) -> bool {
        self.index_of(coord).is_some()
    }

    /// The value at `coord`, or `None` when out of range or empty.
    pub fn get(&self, coord: Point2) -> Option<&T> {
        self.index_of(coord).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable access to the value at `coord`.
    pub fn get_mut(&mut self, coord: Point2) -> Option<&mut T> {
        self.index_of(coord).and_then(|i| self.cells[i].as_mut())
    }

    /// The value at `coord`, failing loudly if there is none.
    ///
    /// Returns `Err(GridError::OutOfBounds)` outside the grid and
    /// `Err(GridError::EmptyCell)` for an unset cell.
    pub fn require(&self, coord: Point2) -> Result<&T, GridError> {
        let index = self.index_of(coord).ok_or_else(|| GridError::OutOfBounds {
            coord,
            bounds: self.describe_bounds(),
        })?;
        self.cells[index]
            .as_ref()
            .ok_or(GridError::EmptyCell { coord })
    }

    /// Store `value` at `coord`; ignored when `coord` is out of range.
    pub fn set(&mut self, coord: Point2, value: T) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i] = Some(value);
        }
    }

    /// Empty the cell at `coord`, returning what it held.
    pub fn clear(&mut self, coord: Point2) -> Option<T> {
        self.index_of(coord).and_then(|i| self.cells[i].take())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// New grid of the same size and delta with `f` applied to every
    /// occupied cell. Empty cells stay empty.
    pub fn map<U>(&self, mut f: impl FnMut(&T, Point2) -> U) -> DenseGrid<U> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| cell.as_ref().map(|v| f(v, self.coord_of(i))))
            .collect();
        DenseGrid {
            width: self.width,
            height: self.height,
            delta: self.delta,
            cells,
        }
    }

    /// Occupied cells with their logical coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point2, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|v| (self.coord_of(i), v)))
    }

    /// Every logical coordinate in the grid, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Point2> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// Rows top to bottom as buffer slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// One row by logical `y`.
    pub fn row(&self, y: i64) -> Option<&[Option<T>]> {
        let start = self.index_of(Point2::new(self.delta.x, y))?;
        Some(&self.cells[start..start + self.width])
    }

    /// One column by logical `x`, top to bottom.
    pub fn column(&self, x: i64) -> Option<Vec<Option<&T>>> {
        let first = self.index_of(Point2::new(x, self.delta.y))?;
        Some(
            self.cells[first..]
                .iter()
                .step_by(self.width)
                .map(Option::as_ref)
                .collect(),
        )
    }

    /// Render the grid one line per row using `cell` for each position.
    pub fn render(&self, mut cell: impl FnMut(Option<&T>) -> String) -> String {
        let mut out = String::new();
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for value in row {
                out.push_str(&cell(value.as_ref()));
            }
        }
        out
    }

    /// Copy every occupied cell into a [`SparseField`].
    pub fn to_sparse(&self) -> SparseField<T>
    where
        T: Clone,
    {
        self.iter().map(|(p, v)| (p, v.clone())).collect()
    }

    fn describe_bounds(&self) -> String {
        let end = self.bounds().bottom_right();
        format!(
            "[{}, {}) x [{}, {})",
            self.delta.x, end.x, self.delta.y, end.y
        )
    }
}

impl<T: Clone> DenseGrid<T> {
    /// Create a `width * height` grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            delta: Point2::new(0, 0),
            cells: vec![Some(value); width * height],
        }
    }
}

impl<T: fmt::Display> fmt::Display for DenseGrid<T> {
    /// Each cell via `Display`; empty cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(|cell| match cell {
            Some(v) => v.to_string(),
            None => ".".to_string(),
        });
        f.write_str(&text)
    }
}
