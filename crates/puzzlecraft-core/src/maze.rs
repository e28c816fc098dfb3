//! A maze of any supported topology.

use std::fmt::{self, Display};

use crate::{
    CircularGrid, Coordinate, Grid, HexGrid, LayeredGrid, Neighbors, Pos2, Pos3, RectGrid,
    RingPos,
};

/// A position in a [`Maze`], tagged with the coordinate kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MazePosition {
    /// A position on a flat (rectangular or hexagonal) grid.
    Flat(Pos2),
    /// A position on a layered grid.
    Layered(Pos3),
    /// A position on a circular grid.
    Ring(RingPos),
}

impl Default for MazePosition {
    fn default() -> Self {
        Self::Flat(Pos2::default())
    }
}

impl From<Pos2> for MazePosition {
    fn from(pos: Pos2) -> Self {
        Self::Flat(pos)
    }
}

impl From<Pos3> for MazePosition {
    fn from(pos: Pos3) -> Self {
        Self::Layered(pos)
    }
}

impl From<RingPos> for MazePosition {
    fn from(pos: RingPos) -> Self {
        Self::Ring(pos)
    }
}

impl Coordinate for MazePosition {
    /// Positions of different kinds are never compared by a search; they are
    /// treated as zero distance apart.
    fn manhattan(self, other: Self) -> u32 {
        match (self, other) {
            (Self::Flat(a), Self::Flat(b)) => a.manhattan(b),
            (Self::Layered(a), Self::Layered(b)) => a.manhattan(b),
            (Self::Ring(a), Self::Ring(b)) => a.manhattan(b),
            _ => 0,
        }
    }
}

impl Display for MazePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(pos) => Display::fmt(pos, f),
            Self::Layered(pos) => Display::fmt(pos, f),
            Self::Ring(pos) => Display::fmt(pos, f),
        }
    }
}

/// A maze of one of the supported topologies.
///
/// `Maze` implements [`Grid`] over [`MazePosition`], delegating to the
/// wrapped topology. A position of the wrong kind is treated as out of
/// bounds.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Grid, HexGrid, Maze, MazePosition, Pos2};
///
/// let maze = Maze::Hexagonal(HexGrid::new(3, 3));
/// assert_eq!(maze.start(), MazePosition::Flat(Pos2::new(0, 0)));
/// assert_eq!(maze.neighbors(maze.start()).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maze {
    /// A rectangular 2D maze.
    Rect(RectGrid),
    /// A layered 3D maze.
    Layered(LayeredGrid),
    /// A circular maze.
    Circular(CircularGrid),
    /// A hexagonal maze.
    Hexagonal(HexGrid),
}

impl Maze {
    /// Returns a short human-readable name of the topology.
    #[must_use]
    pub fn topology_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "2D",
            Self::Layered(_) => "3D",
            Self::Circular(_) => "Circular",
            Self::Hexagonal(_) => "Hexagonal",
        }
    }
}

fn wrap<P>(neighbors: Neighbors<P>) -> Neighbors<MazePosition>
where
    P: Coordinate + Into<MazePosition>,
{
    neighbors.into_iter().map(Into::into).collect()
}

impl Grid for Maze {
    type Position = MazePosition;

    fn start(&self) -> MazePosition {
        match self {
            Self::Rect(grid) => grid.start().into(),
            Self::Layered(grid) => grid.start().into(),
            Self::Circular(grid) => grid.start().into(),
            Self::Hexagonal(grid) => grid.start().into(),
        }
    }

    fn goal(&self) -> MazePosition {
        match self {
            Self::Rect(grid) => grid.goal().into(),
            Self::Layered(grid) => grid.goal().into(),
            Self::Circular(grid) => grid.goal().into(),
            Self::Hexagonal(grid) => grid.goal().into(),
        }
    }

    fn contains(&self, pos: MazePosition) -> bool {
        match (self, pos) {
            (Self::Rect(grid), MazePosition::Flat(pos)) => grid.contains(pos),
            (Self::Layered(grid), MazePosition::Layered(pos)) => grid.contains(pos),
            (Self::Circular(grid), MazePosition::Ring(pos)) => grid.contains(pos),
            (Self::Hexagonal(grid), MazePosition::Flat(pos)) => grid.contains(pos),
            _ => false,
        }
    }

    fn is_walkable(&self, pos: MazePosition) -> bool {
        match (self, pos) {
            (Self::Rect(grid), MazePosition::Flat(pos)) => grid.is_walkable(pos),
            (Self::Layered(grid), MazePosition::Layered(pos)) => grid.is_walkable(pos),
            (Self::Circular(grid), MazePosition::Ring(pos)) => grid.is_walkable(pos),
            (Self::Hexagonal(grid), MazePosition::Flat(pos)) => grid.is_walkable(pos),
            _ => false,
        }
    }

    fn neighbors(&self, pos: MazePosition) -> Neighbors<MazePosition> {
        match (self, pos) {
            (Self::Rect(grid), MazePosition::Flat(pos)) => wrap(grid.neighbors(pos)),
            (Self::Layered(grid), MazePosition::Layered(pos)) => wrap(grid.neighbors(pos)),
            (Self::Circular(grid), MazePosition::Ring(pos)) => wrap(grid.neighbors(pos)),
            (Self::Hexagonal(grid), MazePosition::Flat(pos)) => wrap(grid.neighbors(pos)),
            _ => Neighbors::new(),
        }
    }

    fn distance_estimate(&self, from: MazePosition, to: MazePosition) -> u32 {
        match (self, from, to) {
            (Self::Rect(grid), MazePosition::Flat(a), MazePosition::Flat(b)) => {
                grid.distance_estimate(a, b)
            }
            (Self::Layered(grid), MazePosition::Layered(a), MazePosition::Layered(b)) => {
                grid.distance_estimate(a, b)
            }
            (Self::Circular(grid), MazePosition::Ring(a), MazePosition::Ring(b)) => {
                grid.distance_estimate(a, b)
            }
            (Self::Hexagonal(grid), MazePosition::Flat(a), MazePosition::Flat(b)) => {
                grid.distance_estimate(a, b)
            }
            _ => 0,
        }
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect(grid) => Display::fmt(grid, f),
            Self::Layered(grid) => Display::fmt(grid, f),
            Self::Circular(grid) => Display::fmt(grid, f),
            Self::Hexagonal(grid) => Display::fmt(grid, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_topology() {
        let maze = Maze::Circular(CircularGrid::new(2, 4));
        assert_eq!(maze.start(), MazePosition::Ring(RingPos::new(0, 0)));
        assert_eq!(maze.goal(), MazePosition::Ring(RingPos::new(1, 2)));
        assert_eq!(maze.neighbors(maze.start()).len(), 3);
        assert_eq!(maze.topology_name(), "Circular");
    }

    #[test]
    fn test_foreign_position_is_out_of_bounds() {
        let maze = Maze::Layered(LayeredGrid::new(2, 2, 2));
        let foreign = MazePosition::Flat(Pos2::new(0, 0));
        assert!(!maze.contains(foreign));
        assert!(!maze.is_walkable(foreign));
        assert!(maze.neighbors(foreign).is_empty());
    }

    #[test]
    fn test_distance_estimate_uses_topology_heuristic() {
        let maze = Maze::Circular(CircularGrid::new(1, 36));
        let a = MazePosition::Ring(RingPos::new(0, 0));
        let b = MazePosition::Ring(RingPos::new(0, 35));
        assert_eq!(maze.distance_estimate(a, b), 1);
        assert_eq!(a.manhattan(b), 35);
    }
}
