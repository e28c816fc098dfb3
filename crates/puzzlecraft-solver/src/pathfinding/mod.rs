//! Shortest-path and reachability searches over any [`Grid`].
//!
//! Every search takes a grid together with explicit start and goal
//! positions and returns the path as a list of positions from `start` to
//! `goal`, both inclusive. An empty list means the goal is unreachable.
//!
//! | Algorithm                        | Path            |
//! |----------------------------------|-----------------|
//! | [`a_star`]                       | shortest        |
//! | [`dijkstra`]                     | shortest        |
//! | [`bidirectional_bfs`]            | shortest        |
//! | [`depth_first`]                  | any             |
//! | [`greedy_best_first`]            | any             |
//!
//! All searches share the same edge cases:
//!
//! - `start == goal` yields `[start]`.
//! - A blocked goal yields an empty path.
//! - A start with no walkable neighbours yields an empty path.
//!
//! # Examples
//!
//! ```
//! use puzzlecraft_core::{Grid, RectGrid};
//! use puzzlecraft_solver::pathfinding::{self, Algorithm};
//!
//! let grid: RectGrid = "
//!     S.#
//!     #..
//!     ..G
//! "
//! .parse()
//! .unwrap();
//!
//! let path = pathfinding::solve(Algorithm::AStar, &grid, grid.start(), grid.goal());
//! assert_eq!(path.len(), 5);
//! ```

use std::{
    collections::HashMap,
    str::FromStr,
    time::{Duration, Instant},
};

use log::debug;
use puzzlecraft_core::Grid;

pub use self::{
    best_first::{a_star, dijkstra},
    bidirectional::bidirectional_bfs,
    depth_first::depth_first,
    greedy::greedy_best_first,
};
use crate::SolverError;

mod best_first;
mod bidirectional;
mod depth_first;
mod greedy;

/// A grid search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Algorithm {
    /// A* with the grid's distance estimate.
    #[display("A*")]
    AStar,
    /// Uniform-cost search.
    #[display("Dijkstra")]
    Dijkstra,
    /// Breadth-first search from both ends.
    #[display("Bidirectional BFS")]
    BidirectionalBfs,
    /// Depth-first search.
    #[display("DFS")]
    DepthFirst,
    /// Greedy best-first search on the distance estimate alone.
    #[display("Greedy Best-First")]
    GreedyBestFirst,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Self; 5] = [
        Self::AStar,
        Self::Dijkstra,
        Self::BidirectionalBfs,
        Self::DepthFirst,
        Self::GreedyBestFirst,
    ];

    /// Returns `true` if the algorithm always finds a shortest path.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::AStar | Self::Dijkstra | Self::BidirectionalBfs)
    }
}

impl FromStr for Algorithm {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.to_string() == s)
            .ok_or_else(|| SolverError::UnknownAlgorithm { name: s.to_owned() })
    }
}

/// Runs `algorithm` from `start` to `goal`.
pub fn solve<G>(algorithm: Algorithm, grid: &G, start: G::Position, goal: G::Position) -> Vec<G::Position>
where
    G: Grid,
{
    let path = match algorithm {
        Algorithm::AStar => a_star(grid, start, goal),
        Algorithm::Dijkstra => dijkstra(grid, start, goal),
        Algorithm::BidirectionalBfs => bidirectional_bfs(grid, start, goal),
        Algorithm::DepthFirst => depth_first(grid, start, goal),
        Algorithm::GreedyBestFirst => greedy_best_first(grid, start, goal),
    };
    if path.is_empty() {
        debug!("{algorithm}: no path from {start:?} to {goal:?}");
    } else {
        debug!("{algorithm}: path of {} positions", path.len());
    }
    path
}

/// Runs `algorithm` between the grid's own start and goal.
pub fn solve_grid<G>(algorithm: Algorithm, grid: &G) -> Vec<G::Position>
where
    G: Grid,
{
    solve(algorithm, grid, grid.start(), grid.goal())
}

/// The outcome of one algorithm in a [`compare`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmReport<P> {
    /// The algorithm that was run.
    pub algorithm: Algorithm,
    /// The path it found; empty if it found none.
    pub path: Vec<P>,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl<P> AlgorithmReport<P> {
    /// Returns `true` if a path was found.
    #[must_use]
    pub fn solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Returns the number of positions on the path.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Runs every algorithm in [`Algorithm::ALL`] order and reports each result.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Grid, HexGrid};
/// use puzzlecraft_solver::pathfinding;
///
/// let grid = HexGrid::new(4, 4);
/// let reports = pathfinding::compare(&grid, grid.start(), grid.goal());
/// assert_eq!(reports.len(), 5);
/// assert!(reports.iter().all(|report| report.solved()));
/// ```
pub fn compare<G>(grid: &G, start: G::Position, goal: G::Position) -> Vec<AlgorithmReport<G::Position>>
where
    G: Grid,
{
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let started = Instant::now();
            let path = solve(algorithm, grid, start, goal);
            AlgorithmReport {
                algorithm,
                path,
                elapsed: started.elapsed(),
            }
        })
        .collect()
}

/// Resolves the cases every search answers without searching.
fn trivial_path<G>(grid: &G, start: G::Position, goal: G::Position) -> Option<Vec<G::Position>>
where
    G: Grid,
{
    if start == goal {
        Some(vec![start])
    } else if !grid.is_walkable(goal) {
        Some(Vec::new())
    } else {
        None
    }
}

/// Walks parent links back from `goal` and returns the path in forward order.
///
/// The root of the search is the position without a parent.
fn reconstruct_path<P>(parents: &HashMap<P, P>, goal: P) -> Vec<P>
where
    P: Copy + Eq + std::hash::Hash,
{
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
