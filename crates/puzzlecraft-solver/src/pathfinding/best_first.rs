use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use puzzlecraft_core::Grid;

use super::{reconstruct_path, trivial_path};

/// Finds a shortest path with A*, guided by [`Grid::distance_estimate`].
///
/// Open entries are ordered by `(f, g, position)` with `f = g + h`. A
/// neighbour's cost is only replaced on strict improvement, and entries made
/// stale by a later improvement are skipped when popped.
pub fn a_star<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    search(grid, start, goal, |pos| grid.distance_estimate(pos, goal))
}

/// Finds a shortest path with Dijkstra's algorithm.
///
/// This is [`a_star`] with a zero estimate.
pub fn dijkstra<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    search(grid, start, goal, |_| 0)
}

fn search<G, H>(grid: &G, start: G::Position, goal: G::Position, estimate: H) -> Vec<G::Position>
where
    G: Grid,
    H: Fn(G::Position) -> u32,
{
    if let Some(path) = trivial_path(grid, start, goal) {
        return path;
    }

    let mut open = BinaryHeap::new();
    let mut cost = HashMap::from([(start, 0_u32)]);
    let mut parents = HashMap::new();
    open.push(Reverse((estimate(start), 0_u32, start)));

    while let Some(Reverse((_, g, pos))) = open.pop() {
        if pos == goal {
            return reconstruct_path(&parents, goal);
        }
        if cost.get(&pos).is_some_and(|&best| g > best) {
            continue;
        }
        for next in grid.neighbors(pos) {
            let tentative = g + 1;
            if cost.get(&next).is_none_or(|&best| tentative < best) {
                cost.insert(next, tentative);
                parents.insert(next, pos);
                open.push(Reverse((tentative + estimate(next), tentative, next)));
            }
        }
    }
    Vec::new()
}
