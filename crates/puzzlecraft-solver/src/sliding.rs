//! State-space search for the sliding-car puzzle.
//!
//! States are [`Board`]s and edges are single-cell car moves produced by
//! [`Board::generate_moves`]. Every search deduplicates states by their
//! [`Board::key`] and reports the solution as the sequence of boards from
//! the initial layout to a solved one.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
    str::FromStr,
};

use log::{debug, trace};
use puzzlecraft_core::Board;

use crate::SolverError;

/// Maximum number of moves explored along one branch by
/// [`SlidingAlgorithm::DepthFirst`].
pub const DFS_DEPTH_LIMIT: usize = 50;

/// A search strategy for [`solve_sliding_puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SlidingAlgorithm {
    /// A* on the target car's distance to the exit; finds a fewest-move
    /// solution.
    #[display("A*")]
    AStar,
    /// Breadth-first search; finds a fewest-move solution.
    #[display("BFS")]
    BreadthFirst,
    /// Depth-first search bounded by [`DFS_DEPTH_LIMIT`]; returns the first
    /// solution found.
    #[display("DFS")]
    DepthFirst,
}

impl SlidingAlgorithm {
    /// Every algorithm.
    pub const ALL: [Self; 3] = [Self::AStar, Self::BreadthFirst, Self::DepthFirst];
}

impl FromStr for SlidingAlgorithm {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.to_string() == s)
            .ok_or_else(|| SolverError::UnknownAlgorithm { name: s.to_owned() })
    }
}

/// Searches for a sequence of moves that brings the target car to the exit.
///
/// Returns every board from `board` to the solved one, or `None` if the
/// search space is exhausted (or, for depth-first search, no solution lies
/// within [`DFS_DEPTH_LIMIT`] moves). An already solved board yields a
/// single snapshot.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::Board;
/// use puzzlecraft_solver::{SlidingAlgorithm, solve_sliding_puzzle};
///
/// let board: Board = "
///     AA....
///     B..CCC
///     BRR...
///     DD.E..
///     ...EFF
///     ......
/// "
/// .parse()?;
///
/// let steps = solve_sliding_puzzle(&board, SlidingAlgorithm::BreadthFirst).unwrap();
/// assert_eq!(steps.len(), 4);
/// assert!(steps.last().unwrap().is_solved());
/// # Ok::<(), puzzlecraft_core::BoardError>(())
/// ```
#[must_use]
pub fn solve_sliding_puzzle(board: &Board, algorithm: SlidingAlgorithm) -> Option<Vec<Board>> {
    let mut arena = Arena::new(board.clone());
    let solved = match algorithm {
        SlidingAlgorithm::AStar => a_star(&mut arena),
        SlidingAlgorithm::BreadthFirst => breadth_first(&mut arena),
        SlidingAlgorithm::DepthFirst => depth_first(&mut arena),
    };
    debug!(
        "{algorithm}: {} after generating {} states",
        if solved.is_some() { "solved" } else { "no solution" },
        arena.nodes.len()
    );
    solved.map(|index| arena.path_to(index))
}

/// A search node: a board and the node it was reached from.
#[derive(Debug)]
struct Node {
    board: Board,
    parent: Option<usize>,
}

/// Owns every generated board; nodes refer to their parent by index.
#[derive(Debug)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    const ROOT: usize = 0;

    fn new(root: Board) -> Self {
        Self {
            nodes: vec![Node {
                board: root,
                parent: None,
            }],
        }
    }

    fn board(&self, index: usize) -> &Board {
        &self.nodes[index].board
    }

    fn push(&mut self, board: Board, parent: usize) -> usize {
        self.nodes.push(Node {
            board,
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            path.push(self.nodes[i].board.clone());
            current = self.nodes[i].parent;
        }
        path.reverse();
        path
    }
}

fn breadth_first(arena: &mut Arena) -> Option<usize> {
    let mut seen = HashSet::from([arena.board(Arena::ROOT).key()]);
    let mut queue = VecDeque::from([Arena::ROOT]);
    while let Some(index) = queue.pop_front() {
        if arena.board(index).is_solved() {
            return Some(index);
        }
        let moves = arena.board(index).generate_moves();
        for (_, next) in moves {
            if seen.insert(next.key()) {
                queue.push_back(arena.push(next, index));
            }
        }
    }
    None
}

fn a_star(arena: &mut Arena) -> Option<usize> {
    let root = arena.board(Arena::ROOT);
    let mut best = HashMap::from([(root.key(), 0_usize)]);
    let mut open = BinaryHeap::from([Reverse((root.exit_distance(), 0_usize, Arena::ROOT))]);
    while let Some(Reverse((_, cost, index))) = open.pop() {
        let board = arena.board(index);
        if board.is_solved() {
            return Some(index);
        }
        if best.get(&board.key()).is_some_and(|&g| cost > g) {
            continue;
        }
        let moves = board.generate_moves();
        for (mv, next) in moves {
            let key = next.key();
            let tentative = cost + 1;
            if best.get(&key).is_none_or(|&g| tentative < g) {
                trace!("A*: {mv} reaches exit distance {}", next.exit_distance());
                best.insert(key, tentative);
                let f = tentative + next.exit_distance();
                open.push(Reverse((f, tentative, arena.push(next, index))));
            }
        }
    }
    None
}

fn depth_first(arena: &mut Arena) -> Option<usize> {
    let mut shallowest = HashMap::from([(arena.board(Arena::ROOT).key(), 0_usize)]);
    let mut stack = vec![(Arena::ROOT, 0_usize)];
    while let Some((index, depth)) = stack.pop() {
        let board = arena.board(index);
        if board.is_solved() {
            return Some(index);
        }
        if depth >= DFS_DEPTH_LIMIT {
            continue;
        }
        let moves = board.generate_moves();
        for (_, next) in moves.into_iter().rev() {
            let key = next.key();
            if shallowest.get(&key).is_none_or(|&d| depth + 1 < d) {
                shallowest.insert(key, depth + 1);
                stack.push((arena.push(next, index), depth + 1));
            }
        }
    }
    None
}
