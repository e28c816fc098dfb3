//! The grid capability shared by every topology.

use tinyvec::ArrayVec;

use crate::Coordinate;

/// Neighbours of a cell, in the topology's fixed enumeration order.
///
/// No supported topology has more than six neighbours per cell.
pub type Neighbors<P> = ArrayVec<[P; 6]>;

/// A read-only grid that search algorithms can walk.
///
/// Implementors expose the walkable neighbours of a cell and a fixed start
/// and goal. Searches never mutate a grid.
///
/// # Contract
///
/// - [`neighbors`](Self::neighbors) yields only in-bounds, walkable cells,
///   always in the same order for the same input.
/// - Adjacency is symmetric between walkable cells.
/// - [`distance_estimate`](Self::distance_estimate) never exceeds the true
///   number of steps between two cells, and changes by at most one per step.
pub trait Grid {
    /// The coordinate type identifying a cell.
    type Position: Coordinate;

    /// Returns the start cell.
    fn start(&self) -> Self::Position;

    /// Returns the goal cell.
    fn goal(&self) -> Self::Position;

    /// Returns `true` if `pos` lies within the grid bounds.
    fn contains(&self, pos: Self::Position) -> bool;

    /// Returns `true` if `pos` is in bounds and not blocked.
    fn is_walkable(&self, pos: Self::Position) -> bool;

    /// Returns the walkable neighbours of `pos`.
    fn neighbors(&self, pos: Self::Position) -> Neighbors<Self::Position>;

    /// Returns a lower bound on the number of steps from `from` to `to`.
    ///
    /// The default is the Manhattan distance over every axis.
    #[inline]
    fn distance_estimate(&self, from: Self::Position, to: Self::Position) -> u32 {
        from.manhattan(to)
    }
}
