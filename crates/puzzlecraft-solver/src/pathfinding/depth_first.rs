use std::collections::{HashMap, HashSet};

use puzzlecraft_core::Grid;

use super::{reconstruct_path, trivial_path};

/// Finds a path with depth-first search.
///
/// Neighbours are explored in the order [`Grid::neighbors`] returns them, no
/// position is expanded twice, and the first path to reach the goal is
/// returned. The path is not necessarily shortest.
pub fn depth_first<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    if let Some(path) = trivial_path(grid, start, goal) {
        return path;
    }

    let mut stack = vec![(start, None)];
    let mut visited = HashSet::new();
    let mut parents = HashMap::new();
    while let Some((pos, parent)) = stack.pop() {
        if !visited.insert(pos) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(pos, parent);
        }
        if pos == goal {
            return reconstruct_path(&parents, goal);
        }
        for next in grid.neighbors(pos).into_iter().rev() {
            if !visited.contains(&next) {
                stack.push((next, Some(pos)));
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use puzzlecraft_core::{Pos2, RectGrid};

    use super::*;

    #[test]
    fn test_follows_neighbor_order() {
        // Up and down come before left and right, so the search snakes
        // through an open grid instead of taking a shortest route.
        let grid = RectGrid::new(3, 3);
        let path = depth_first(&grid, grid.start(), grid.goal());
        assert_eq!(
            path,
            [
                Pos2::new(0, 0),
                Pos2::new(1, 0),
                Pos2::new(2, 0),
                Pos2::new(2, 1),
                Pos2::new(1, 1),
                Pos2::new(0, 1),
                Pos2::new(0, 2),
                Pos2::new(1, 2),
                Pos2::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        let grid: RectGrid = "
            S..
            .#.
            ##G
        "
        .parse()
        .unwrap();
        let path = depth_first(&grid, grid.start(), grid.goal());
        assert_eq!(
            path,
            [
                Pos2::new(0, 0),
                Pos2::new(0, 1),
                Pos2::new(0, 2),
                Pos2::new(1, 2),
                Pos2::new(2, 2),
            ]
        );
    }
}
