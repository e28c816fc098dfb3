use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use puzzlecraft_core::Grid;

use super::{reconstruct_path, trivial_path};

/// Finds a path with greedy best-first search.
///
/// Always expands the open position with the smallest
/// [`Grid::distance_estimate`] to the goal, ignoring the cost so far. A
/// position's parent is fixed the first time it is discovered.
pub fn greedy_best_first<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    if let Some(path) = trivial_path(grid, start, goal) {
        return path;
    }

    let mut open = BinaryHeap::from([Reverse((grid.distance_estimate(start, goal), start))]);
    let mut discovered = HashSet::from([start]);
    let mut parents = HashMap::new();
    while let Some(Reverse((_, pos))) = open.pop() {
        if pos == goal {
            return reconstruct_path(&parents, goal);
        }
        for next in grid.neighbors(pos) {
            if discovered.insert(next) {
                parents.insert(next, pos);
                open.push(Reverse((grid.distance_estimate(next, goal), next)));
            }
        }
    }
    Vec::new()
}
