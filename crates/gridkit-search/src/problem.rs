//! The search problem contract and the per-coordinate visit record.

use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Candidate neighbours of one coordinate.
pub type Candidates<C> = SmallVec<[C; 8]>;

/// One discovered coordinate: where it is, what is there, how far it is
/// from the start, and which visit discovered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit<C, Cell> {
    /// The discovered coordinate.
    pub coord: C,
    /// Cell resolved for `coord` at discovery time.
    pub cell: Cell,
    /// Distance assigned at discovery; never revised afterwards.
    pub distance: u64,
    pub(crate) parent: Option<usize>,
}

impl<C, Cell> Visit<C, Cell> {
    /// Discovery index of the visit this one was reached from.
    ///
    /// `None` only for the start.
    pub fn parent_index(&self) -> Option<usize> {
        self.parent
    }

    /// `true` for the start visit.
    pub fn is_start(&self) -> bool {
        self.parent.is_none()
    }
}

/// A graph to search, described by three callbacks.
///
/// Methods take `&mut self` so a problem can carry its own caches or
/// counters explicitly instead of hiding them in captured state.
pub trait SearchProblem {
    /// Node identity. Any structurally-compared value works: a grid point,
    /// a `(point, heading)` pair, a 3D voxel.
    type Coord: Clone + Eq + Hash + fmt::Debug;
    /// Whatever the lookup resolves a coordinate to.
    type Cell;

    /// Resolve `coord`, or `None` if it does not exist.
    fn cell(&mut self, coord: &Self::Coord) -> Option<Self::Cell>;

    /// Candidate coordinates adjacent to `coord`, in a fixed order.
    fn neighbours(&mut self, coord: &Self::Coord) -> Candidates<Self::Coord>;

    /// Distance to assign `to` when reached from `from`, or `None` to
    /// reject the edge.
    ///
    /// The returned value is the neighbour's total distance, not an
    /// increment; unweighted searches return `from.distance + 1`.
    fn step_cost(
        &mut self,
        from: &Visit<Self::Coord, Self::Cell>,
        to: &Self::Coord,
        to_cell: &Self::Cell,
    ) -> Option<u64>;
}

/// [`SearchProblem`] assembled from three closures.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coordinate, Point2};
/// use gridkit_search::{bfs, FnProblem};
///
/// // An open 5x5 room.
/// let mut room = FnProblem::from_filter(
///     |c: &Point2| (0..5).contains(&c.x) && (0..5).contains(&c.y),
///     |c: &Point2| c.surrounding(),
///     |from, _, _| Some(from.distance + 1),
/// );
/// let result = bfs(&mut room, Point2::new(0, 0)).unwrap();
/// assert_eq!(result.distance(&Point2::new(4, 4)), Some(8));
/// ```
pub struct FnProblem<C, Cell, L, N, E> {
    lookup: L,
    neighbours: N,
    cost: E,
    _marker: PhantomData<fn(&C) -> Cell>,
}

impl<C, Cell, L, N, E> FnProblem<C, Cell, L, N, E>
where
    L: FnMut(&C) -> Option<Cell>,
    N: FnMut(&C) -> Candidates<C>,
    E: FnMut(&Visit<C, Cell>, &C, &Cell) -> Option<u64>,
{
    /// Wrap a lookup, a neighbour generator, and an edge cost.
    pub fn new(lookup: L, neighbours: N, cost: E) -> Self {
        Self {
            lookup,
            neighbours,
            cost,
            _marker: PhantomData,
        }
    }
}

impl<C, N, E> FnProblem<C, (), fn(&C) -> Option<()>, N, E>
where
    N: FnMut(&C) -> Candidates<C>,
    E: FnMut(&Visit<C, ()>, &C, &()) -> Option<u64>,
{
    /// Problem whose cells carry no data: `exists` only says yes or no.
    pub fn from_filter(
        mut exists: impl FnMut(&C) -> bool,
        neighbours: N,
        cost: E,
    ) -> FnProblem<C, (), impl FnMut(&C) -> Option<()>, N, E> {
        FnProblem {
            lookup: move |c: &C| exists(c).then_some(()),
            neighbours,
            cost,
            _marker: PhantomData,
        }
    }
}

impl<C, Cell, L, N, E> SearchProblem for FnProblem<C, Cell, L, N, E>
where
    C: Clone + Eq + Hash + fmt::Debug,
    L: FnMut(&C) -> Option<Cell>,
    N: FnMut(&C) -> Candidates<C>,
    E: FnMut(&Visit<C, Cell>, &C, &Cell) -> Option<u64>,
{
    type Coord = C;
    type Cell = Cell;

    fn cell(&mut self, coord: &C) -> Option<Cell> {
        (self.lookup)(coord)
    }

    fn neighbours(&mut self, coord: &C) -> Candidates<C> {
        (self.neighbours)(coord)
    }

    fn step_cost(&mut self, from: &Visit<C, Cell>, to: &C, to_cell: &Cell) -> Option<u64> {
        (self.cost)(from, to, to_cell)
    }
}
