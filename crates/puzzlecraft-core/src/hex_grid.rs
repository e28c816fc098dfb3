//! Hexagonal grid in offset-column layout.

use std::fmt::{self, Display, Write as _};

use crate::{Grid, Neighbors, Pos2};

/// A hexagonal grid stored as rows and columns, with odd columns shifted
/// half a cell down.
///
/// A cell connects to the cells above and below it in its column, to the
/// cells left and right of it in its row, and to two diagonal cells whose
/// direction depends on the column parity:
///
/// - even columns: `(row - 1, col - 1)` and `(row - 1, col + 1)`
/// - odd columns: `(row + 1, col - 1)` and `(row + 1, col + 1)`
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Grid, HexGrid, Pos2};
///
/// let grid = HexGrid::new(3, 3);
/// let neighbors = grid.neighbors(Pos2::new(1, 1));
/// assert_eq!(
///     neighbors.as_slice(),
///     [
///         Pos2::new(0, 1),
///         Pos2::new(2, 1),
///         Pos2::new(1, 0),
///         Pos2::new(1, 2),
///         Pos2::new(2, 0),
///         Pos2::new(2, 2),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
}

impl HexGrid {
    /// Creates a fully walkable grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");
        Self {
            rows,
            cols,
            open: vec![true; rows * cols],
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos2> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos2::new(row, col)))
    }

    /// Marks a cell as walkable or blocked.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_walkable(&mut self, pos: Pos2, walkable: bool) {
        assert!(self.contains(pos), "{pos} is out of bounds");
        self.open[pos.row() * self.cols + pos.col()] = walkable;
    }

    /// Opens the start and goal cells.
    pub fn open_endpoints(&mut self) {
        self.set_walkable(self.start(), true);
        self.set_walkable(self.goal(), true);
    }
}

/// Converts an offset position into cube coordinates `(x, y, z)`.
#[expect(clippy::cast_possible_wrap)]
fn to_cube(pos: Pos2) -> (isize, isize, isize) {
    let col = pos.col() as isize;
    let row = pos.row() as isize;
    let x = col;
    let z = row - (col - (col & 1)) / 2;
    (x, -x - z, z)
}

impl Grid for HexGrid {
    type Position = Pos2;

    #[inline]
    fn start(&self) -> Pos2 {
        Pos2::new(0, 0)
    }

    #[inline]
    fn goal(&self) -> Pos2 {
        Pos2::new(self.rows - 1, self.cols - 1)
    }

    #[inline]
    fn contains(&self, pos: Pos2) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    #[inline]
    fn is_walkable(&self, pos: Pos2) -> bool {
        self.contains(pos) && self.open[pos.row() * self.cols + pos.col()]
    }

    fn neighbors(&self, pos: Pos2) -> Neighbors<Pos2> {
        let (row, col) = (pos.row(), pos.col());
        let up = row.checked_sub(1);
        let down = Some(row + 1);
        let left = col.checked_sub(1);
        let right = Some(col + 1);
        let diagonal_row = if col % 2 == 0 { up } else { down };
        let candidates = [
            up.map(|r| Pos2::new(r, col)),
            down.map(|r| Pos2::new(r, col)),
            left.map(|c| Pos2::new(row, c)),
            right.map(|c| Pos2::new(row, c)),
            diagonal_row.zip(left).map(|(r, c)| Pos2::new(r, c)),
            diagonal_row.zip(right).map(|(r, c)| Pos2::new(r, c)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&next| self.is_walkable(next))
            .collect()
    }

    /// Returns the hex distance, which is exact on an open grid.
    fn distance_estimate(&self, from: Pos2, to: Pos2) -> u32 {
        let (ax, ay, az) = to_cube(from);
        let (bx, by, bz) = to_cube(to);
        let steps = ax.abs_diff(bx).max(ay.abs_diff(by)).max(az.abs_diff(bz));
        u32::try_from(steps).unwrap_or(u32::MAX)
    }
}

impl Display for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..self.cols {
                let pos = Pos2::new(row, col);
                let ch = if pos == self.start() {
                    'S'
                } else if pos == self.goal() {
                    'G'
                } else if self.is_walkable(pos) {
                    '.'
                } else {
                    '#'
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_column_diagonals_go_up() {
        let grid = HexGrid::new(3, 3);
        let neighbors = grid.neighbors(Pos2::new(1, 2));
        assert_eq!(
            neighbors.as_slice(),
            [
                Pos2::new(0, 2),
                Pos2::new(2, 2),
                Pos2::new(1, 1),
                Pos2::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_odd_column_diagonals_go_down() {
        let grid = HexGrid::new(4, 4);
        let neighbors = grid.neighbors(Pos2::new(0, 1));
        assert_eq!(
            neighbors.as_slice(),
            [
                Pos2::new(1, 1),
                Pos2::new(0, 0),
                Pos2::new(0, 2),
                Pos2::new(1, 0),
                Pos2::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let grid = HexGrid::new(5, 5);
        for pos in grid.positions() {
            for next in grid.neighbors(pos) {
                assert!(
                    grid.neighbors(next).contains(&pos),
                    "{next} does not link back to {pos}"
                );
            }
        }
    }

    #[test]
    fn test_distance_estimate_is_one_for_every_neighbor() {
        let grid = HexGrid::new(5, 5);
        for pos in grid.positions() {
            for next in grid.neighbors(pos) {
                assert_eq!(grid.distance_estimate(pos, next), 1);
            }
        }
    }

    #[test]
    fn test_distance_estimate_spans_grid() {
        let grid = HexGrid::new(4, 4);
        assert_eq!(grid.distance_estimate(Pos2::new(0, 0), Pos2::new(3, 3)), 5);
    }
}
