//! Rectangular grid with 4-neighbour adjacency.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Grid, Neighbors, Pos2};

/// A rectangular grid of walkable and blocked cells.
///
/// Cells are stored in row-major order. By default the start is the top-left
/// cell and the goal is the bottom-right cell.
///
/// # Text format
///
/// Each non-empty line is one row. Leading and trailing whitespace of a line
/// is ignored.
///
/// - `.` walkable cell
/// - `#` blocked cell
/// - `S` walkable start cell
/// - `G` walkable goal cell
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Grid, Pos2, RectGrid};
///
/// let grid: RectGrid = "
///     ..#
///     #.S
///     G..
/// "
/// .parse()?;
///
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.start(), Pos2::new(1, 2));
/// assert_eq!(grid.goal(), Pos2::new(2, 0));
/// assert!(!grid.is_walkable(Pos2::new(0, 2)));
/// assert_eq!(grid.to_string(), "..#\n#.S\nG..");
/// # Ok::<(), puzzlecraft_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectGrid {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
    start: Pos2,
    goal: Pos2,
}

impl RectGrid {
    /// Creates a grid with every cell walkable.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_| true)
    }

    /// Creates a grid whose cell walkability is computed by `f`.
    ///
    /// Cells are visited in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(Pos2) -> bool,
    {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");
        let open = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Pos2::new(row, col)))
            .map(&mut f)
            .collect();
        Self {
            rows,
            cols,
            open,
            start: Pos2::new(0, 0),
            goal: Pos2::new(rows - 1, cols - 1),
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

    /// Returns every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos2> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos2::new(row, col)))
    }

    /// Returns the number of walkable cells.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }

    /// Marks a cell as walkable or blocked.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_walkable(&mut self, pos: Pos2, walkable: bool) {
        let index = self.index(pos);
        self.open[index] = walkable;
    }

    /// Moves the start cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_start(&mut self, pos: Pos2) {
        assert!(self.contains(pos), "start {pos} is out of bounds");
        self.start = pos;
    }

    /// Moves the goal cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_goal(&mut self, pos: Pos2) {
        assert!(self.contains(pos), "goal {pos} is out of bounds");
        self.goal = pos;
    }

    /// Opens the start and goal cells.
    pub fn open_endpoints(&mut self) {
        self.set_walkable(self.start, true);
        self.set_walkable(self.goal, true);
    }

    #[inline]
    fn index(&self, pos: Pos2) -> usize {
        assert!(self.contains(pos), "{pos} is out of bounds");
        pos.row() * self.cols + pos.col()
    }
}

impl Grid for RectGrid {
    type Position = Pos2;

    #[inline]
    fn start(&self) -> Pos2 {
        self.start
    }

    #[inline]
    fn goal(&self) -> Pos2 {
        self.goal
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
        let candidates = [
            row.checked_sub(1).map(|r| Pos2::new(r, col)),
            Some(Pos2::new(row + 1, col)),
            col.checked_sub(1).map(|c| Pos2::new(row, c)),
            Some(Pos2::new(row, col + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&next| self.is_walkable(next))
            .collect()
    }
}

impl Display for RectGrid {
    /// Writes the grid in the text form [`RectGrid::from_str`] accepts.
    ///
    /// A blocked cell is always drawn as `#`, even when it is the start or
    /// the goal, and a start that is also the goal is drawn as `S`. Neither
    /// case parses back to the same endpoints unless they sit on the default
    /// corners.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..self.cols {
                let pos = Pos2::new(row, col);
                let ch = if !self.is_walkable(pos) {
                    '#'
                } else if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else {
                    '.'
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`RectGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contained no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row had a different length than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell character was not one of `.`, `#`, `S`, `G`.
    #[display("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for RectGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.first().ok_or(GridParseError::Empty)?.chars().count();

        let mut open = Vec::with_capacity(lines.len() * cols);
        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let walkable = match ch {
                    '.' => true,
                    '#' => false,
                    'S' => {
                        start = Some(Pos2::new(row, col));
                        true
                    }
                    'G' => {
                        goal = Some(Pos2::new(row, col));
                        true
                    }
                    _ => return Err(GridParseError::InvalidCell { row, col, ch }),
                };
                open.push(walkable);
            }
        }

        let rows = lines.len();
        Ok(Self {
            rows,
            cols,
            open,
            start: start.unwrap_or(Pos2::new(0, 0)),
            goal: goal.unwrap_or(Pos2::new(rows - 1, cols - 1)),
        })
    }
}
