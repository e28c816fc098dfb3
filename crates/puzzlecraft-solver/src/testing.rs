//! Test utilities for pathfinding.
//!
//! [`PathTester`] runs a search on a grid and checks the resulting path with
//! chained assertions.
//!
//! # Example
//!
//! ```ignore
//! let grid = RectGrid::new(3, 3);
//! PathTester::solve(&grid, Algorithm::AStar)
//!     .assert_valid()
//!     .assert_len(5);
//! ```

use puzzlecraft_core::Grid;

use crate::pathfinding::{self, Algorithm};

/// A test harness holding a grid and the path a search found on it.
///
/// All assertion methods return `self` for chaining and use
/// `#[track_caller]` so failures point at the test.
#[derive(Debug)]
pub struct PathTester<'a, G>
where
    G: Grid,
{
    grid: &'a G,
    algorithm: Algorithm,
    path: Vec<G::Position>,
}

impl<'a, G> PathTester<'a, G>
where
    G: Grid,
{
    /// Runs `algorithm` between the grid's start and goal.
    pub fn solve(grid: &'a G, algorithm: Algorithm) -> Self {
        let path = pathfinding::solve_grid(algorithm, grid);
        Self {
            grid,
            algorithm,
            path,
        }
    }

    /// Asserts that the path runs from start to goal through walkable,
    /// adjacent positions without repeating any of them.
    #[track_caller]
    pub fn assert_valid(self) -> Self {
        let Self {
            grid,
            algorithm,
            path,
        } = &self;
        assert_eq!(
            path.first(),
            Some(&grid.start()),
            "{algorithm}: path does not begin at start: {path:?}"
        );
        assert_eq!(
            path.last(),
            Some(&grid.goal()),
            "{algorithm}: path does not end at goal: {path:?}"
        );
        for step in path.windows(2) {
            assert!(
                grid.neighbors(step[0]).contains(&step[1]),
                "{algorithm}: {:?} -> {:?} is not a move",
                step[0],
                step[1]
            );
        }
        for (i, pos) in path.iter().enumerate() {
            assert!(
                !path[..i].contains(pos),
                "{algorithm}: {pos:?} visited twice"
            );
        }
        self
    }

    /// Asserts the number of positions on the path.
    #[track_caller]
    pub fn assert_len(self, expected: usize) -> Self {
        assert_eq!(
            self.path.len(),
            expected,
            "{}: unexpected path length: {:?}",
            self.algorithm,
            self.path
        );
        self
    }

    /// Asserts that the path has at least `min` positions.
    #[track_caller]
    pub fn assert_len_at_least(self, min: usize) -> Self {
        assert!(
            self.path.len() >= min,
            "{}: path of {} positions is shorter than {min}",
            self.algorithm,
            self.path.len()
        );
        self
    }

    /// Asserts that no path was found.
    #[track_caller]
    pub fn assert_empty(self) -> Self {
        assert!(
            self.path.is_empty(),
            "{}: expected no path, found {:?}",
            self.algorithm,
            self.path
        );
        self
    }
}
