//! Weighted shortest-path search.
//!
//! Same problem contract as breadth-first search, but a coordinate's
//! distance is only fixed once it is popped from a min-heap, so a cheaper
//! route found later still wins.

use crate::error::SearchError;
use crate::problem::{SearchProblem, Visit};
use crate::result::{Outcome, SearchResult};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A tentative distance waiting in the heap.
struct Pending<C, Cell> {
    coord: C,
    cell: Cell,
    distance: u64,
    parent: usize,
}

/// Shortest distances from `start` under the problem's step costs.
///
/// `step_cost` keeps its meaning: it returns the neighbour's total
/// distance, which must not be smaller than the distance of the visit being
/// expanded. A smaller value yields `Err(SearchError::DecreasingCost)`.
///
/// Settled visits are recorded in settle order, so distances in
/// [`SearchResult::iter`] never decrease.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coordinate, Point2};
/// use gridkit_search::{dijkstra, FnProblem, Visit};
///
/// // Stepping onto the middle column costs 5.
/// let mut room = FnProblem::from_filter(
///     |c: &Point2| (0..3).contains(&c.x) && (0..3).contains(&c.y),
///     |c: &Point2| c.surrounding(),
///     |from: &Visit<Point2, ()>, to: &Point2, _: &()| {
///         Some(from.distance + if to.x == 1 && to.y < 2 { 5 } else { 1 })
///     },
/// );
/// let weighted = dijkstra(&mut room, Point2::new(0, 0)).unwrap();
/// assert_eq!(weighted.distance(&Point2::new(2, 0)), Some(6));
/// ```
pub fn dijkstra<P>(
    problem: &mut P,
    start: P::Coord,
) -> Result<SearchResult<P::Coord, P::Cell>, SearchError>
where
    P: SearchProblem,
{
    let cell = problem
        .cell(&start)
        .ok_or_else(|| SearchError::StartNotFound {
            start: format!("{start:?}"),
        })?;

    let mut settled: IndexMap<P::Coord, Visit<P::Coord, P::Cell>> = IndexMap::new();
    let mut best: IndexMap<P::Coord, u64> = IndexMap::new();
    settled.insert(
        start.clone(),
        Visit {
            coord: start.clone(),
            cell,
            distance: 0,
            parent: None,
        },
    );
    best.insert(start.clone(), 0);

    // Heap entries are (distance, slot); the slot breaks ties in push order.
    let mut heap = BinaryHeap::new();
    let mut slots: Vec<Option<Pending<P::Coord, P::Cell>>> = Vec::new();
    let mut current = Some(0usize);

    while let Some(index) = current.take() {
        let coord = settled[index].coord.clone();
        log::trace!("settled {coord:?} at distance {}", settled[index].distance);

        for next in problem.neighbours(&coord) {
            if settled.contains_key(&next) {
                continue;
            }
            let Some(cell) = problem.cell(&next) else {
                continue;
            };
            let from = &settled[index];
            let Some(distance) = problem.step_cost(from, &next, &cell) else {
                continue;
            };
            if distance < from.distance {
                return Err(SearchError::DecreasingCost {
                    from: format!("{coord:?}"),
                    from_distance: from.distance,
                    returned: distance,
                });
            }
            if best.get(&next).is_some_and(|&known| known <= distance) {
                continue;
            }
            best.insert(next.clone(), distance);
            heap.push(Reverse((distance, slots.len())));
            slots.push(Some(Pending {
                coord: next,
                cell,
                distance,
                parent: index,
            }));
        }

        while let Some(Reverse((_, slot))) = heap.pop() {
            let Some(pending) = slots.get_mut(slot).and_then(Option::take) else {
                continue;
            };
            if settled.contains_key(&pending.coord) {
                continue;
            }
            let (settled_index, _) = settled.insert_full(
                pending.coord.clone(),
                Visit {
                    coord: pending.coord,
                    cell: pending.cell,
                    distance: pending.distance,
                    parent: Some(pending.parent),
                },
            );
            current = Some(settled_index);
            break;
        }
    }

    log::debug!("dijkstra from {start:?}: {} settled", settled.len());
    Ok(SearchResult::new(start, settled, Outcome::Exhausted, None))
}
