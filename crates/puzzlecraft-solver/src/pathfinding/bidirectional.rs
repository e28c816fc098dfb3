use std::{collections::HashMap, mem};

use puzzlecraft_core::{Coordinate, Grid};

use super::trivial_path;

/// One side of a bidirectional search.
struct Frontier<P> {
    layer: Vec<P>,
    parents: HashMap<P, Option<P>>,
}

impl<P> Frontier<P>
where
    P: Coordinate,
{
    fn new(root: P) -> Self {
        Self {
            layer: vec![root],
            parents: HashMap::from([(root, None)]),
        }
    }

    fn has_visited(&self, pos: P) -> bool {
        self.parents.contains_key(&pos)
    }

    /// Expands the whole current layer and returns the first newly
    /// discovered position that `other` has already visited.
    fn expand_layer<G>(&mut self, grid: &G, other: &Self) -> Option<P>
    where
        G: Grid<Position = P>,
    {
        let mut next_layer = Vec::new();
        for pos in mem::take(&mut self.layer) {
            for next in grid.neighbors(pos) {
                if self.has_visited(next) {
                    continue;
                }
                self.parents.insert(next, Some(pos));
                if other.has_visited(next) {
                    return Some(next);
                }
                next_layer.push(next);
            }
        }
        self.layer = next_layer;
        None
    }

    fn is_exhausted(&self) -> bool {
        self.layer.is_empty()
    }

    /// Returns the path from `pos` back to this side's root.
    fn trace(&self, pos: P) -> Vec<P> {
        let mut path = vec![pos];
        let mut current = pos;
        while let Some(&Some(parent)) = self.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path
    }
}

/// Finds a shortest path by running breadth-first search from both ends.
///
/// The two sides alternate strictly, one full layer at a time, starting with
/// the start side. The search stops as soon as one side discovers a
/// position the other side has already visited.
pub fn bidirectional_bfs<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    if let Some(path) = trivial_path(grid, start, goal) {
        return path;
    }

    let mut forward = Frontier::new(start);
    let mut backward = Frontier::new(goal);
    loop {
        if let Some(meeting) = forward.expand_layer(grid, &backward) {
            return join(&forward, &backward, meeting);
        }
        if forward.is_exhausted() {
            return Vec::new();
        }
        if let Some(meeting) = backward.expand_layer(grid, &forward) {
            return join(&forward, &backward, meeting);
        }
        if backward.is_exhausted() {
            return Vec::new();
        }
    }
}

fn join<P>(forward: &Frontier<P>, backward: &Frontier<P>, meeting: P) -> Vec<P>
where
    P: Coordinate,
{
    let mut path = forward.trace(meeting);
    path.reverse();
    path.extend(backward.trace(meeting).into_iter().skip(1));
    path
}

#[cfg(test)]
mod tests {
    use puzzlecraft_core::{CircularGrid, HexGrid, LayeredGrid, Pos2, Pos3, RectGrid, RingPos};

    use super::*;
    use crate::pathfinding::dijkstra;

    #[test]
    fn test_adjacent_start_and_goal() {
        let grid = RectGrid::new(1, 2);
        let path = bidirectional_bfs(&grid, Pos2::new(0, 0), Pos2::new(0, 1));
        assert_eq!(path, [Pos2::new(0, 0), Pos2::new(0, 1)]);
    }

    #[test]
    fn test_corridor_meets_in_the_middle() {
        let grid = RectGrid::new(1, 7);
        let path = bidirectional_bfs(&grid, grid.start(), grid.goal());
        let expected = (0..7).map(|col| Pos2::new(0, col)).collect::<Vec<_>>();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_shortest_through_layers() {
        let grid = LayeredGrid::new(3, 3, 3);
        let path = bidirectional_bfs(&grid, grid.start(), grid.goal());
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Pos3::new(0, 0, 0)));
        assert_eq!(path.last(), Some(&Pos3::new(2, 2, 2)));
    }

    #[test]
    fn test_goal_side_exhausts_first() {
        let grid: RectGrid = "
            S....
            ...##
            ...#G
        "
        .parse()
        .unwrap();
        assert!(bidirectional_bfs(&grid, grid.start(), grid.goal()).is_empty());
    }

    #[test]
    fn test_ring_and_hex_positions() {
        let mut circular = CircularGrid::for_size(8);
        circular.set_walkable(RingPos::new(1, 0), false);
        circular.set_walkable(RingPos::new(1, 1), false);
        let path = bidirectional_bfs(&circular, circular.start(), circular.goal());
        assert_eq!(path.first(), Some(&circular.start()));
        assert_eq!(path.last(), Some(&circular.goal()));
        assert_eq!(
            path.len(),
            dijkstra(&circular, circular.start(), circular.goal()).len()
        );

        let mut hex = HexGrid::new(5, 5);
        hex.set_walkable(Pos2::new(1, 1), false);
        hex.set_walkable(Pos2::new(2, 2), false);
        let path = bidirectional_bfs(&hex, hex.start(), hex.goal());
        assert!(!path.is_empty());
        assert_eq!(path.len(), dijkstra(&hex, hex.start(), hex.goal()).len());
    }
}
