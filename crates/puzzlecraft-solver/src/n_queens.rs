//! N-Queens by backtracking.
//!
//! A placement is a list of column indices, one per row: `placement[row]` is
//! the column of the queen in that row.

use std::{convert::Infallible, ops::ControlFlow};

use log::debug;

/// Returns the first placement of `n` non-attacking queens.
///
/// Rows are filled top to bottom, trying columns in ascending order, so the
/// result is the lexicographically smallest placement. Returns `None` when
/// no placement exists (`n` is 2 or 3).
///
/// # Examples
///
/// ```
/// use puzzlecraft_solver::solve_n_queens;
///
/// assert_eq!(solve_n_queens(4), Some(vec![1, 3, 0, 2]));
/// assert_eq!(solve_n_queens(3), None);
/// ```
#[must_use]
pub fn solve_n_queens(n: usize) -> Option<Vec<usize>> {
    let found = place(&mut Vec::with_capacity(n), n, &mut |placement| {
        ControlFlow::Break(placement.to_vec())
    })
    .break_value();
    debug!("{n} queens: {}", if found.is_some() { "solved" } else { "no solution" });
    found
}

/// Returns every placement of `n` non-attacking queens, in the order
/// [`solve_n_queens`] would discover them.
///
/// # Examples
///
/// ```
/// use puzzlecraft_solver::all_n_queens;
///
/// assert_eq!(all_n_queens(4), [vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// assert_eq!(all_n_queens(8).len(), 92);
/// ```
#[must_use]
pub fn all_n_queens(n: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    let ControlFlow::Continue(()) = place(&mut Vec::with_capacity(n), n, &mut |placement| {
        all.push(placement.to_vec());
        ControlFlow::<Infallible>::Continue(())
    });
    all
}

/// Returns `true` if `placement` puts one queen on each row, every column
/// is within the board, and no two queens attack each other.
#[must_use]
pub fn is_valid_placement(placement: &[usize]) -> bool {
    let n = placement.len();
    placement.iter().enumerate().all(|(row, &col)| {
        col < n && is_safe(&placement[..row], col)
    })
}

/// Returns `true` if a queen at `col` on the next row is attacked by none of
/// the queens already placed.
fn is_safe(placed: &[usize], col: usize) -> bool {
    let row = placed.len();
    placed
        .iter()
        .enumerate()
        .all(|(r, &c)| c != col && c.abs_diff(col) != row - r)
}

/// Extends `placed` row by row and hands every complete placement to
/// `visit`, stopping at the first `Break`.
fn place<B, F>(placed: &mut Vec<usize>, n: usize, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&[usize]) -> ControlFlow<B>,
{
    if placed.len() == n {
        return visit(placed);
    }
    for col in 0..n {
        if is_safe(placed, col) {
            placed.push(col);
            place(placed, n, visit)?;
            placed.pop();
        }
    }
    ControlFlow::Continue(())
}
