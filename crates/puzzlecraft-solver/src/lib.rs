//! Search algorithms for puzzlecraft.
//!
//! - [`pathfinding`]: A*, Dijkstra, bidirectional BFS, depth-first and greedy
//!   best-first search over any [`Grid`](puzzlecraft_core::Grid)
//! - [`solve_n_queens`]: N-Queens by backtracking
//! - [`solve_sliding_puzzle`]: state-space search for the sliding-car puzzle
//! - [`run_guesser`]: a feedback-guided code breaker
//!
//! Searches never fail: an exhausted search space is reported as an empty
//! path or `None`. [`SolverError`] is only returned when parsing an
//! algorithm name.

pub use self::{
    code_breaker::{Attempt, CodeBreaker, GuessOutcome, random_secret, run_guesser},
    error::*,
    n_queens::{all_n_queens, is_valid_placement, solve_n_queens},
    pathfinding::Algorithm,
    sliding::{DFS_DEPTH_LIMIT, SlidingAlgorithm, solve_sliding_puzzle},
};

mod code_breaker;
mod error;
mod n_queens;
pub mod pathfinding;
mod sliding;

#[cfg(test)]
mod testing;
