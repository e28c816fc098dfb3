//! Sliding-car board (traffic puzzle).
//!
//! A [`Board`] is a rectangular character matrix. Every distinct character
//! other than [`EMPTY`] names one [`Car`]: a straight run of two or three
//! cells that can only slide along its own axis. The [`TARGET`] car is
//! horizontal and must be brought to the last column of its row.
//!
//! # Examples
//!
//! ```
//! use puzzlecraft_core::{Board, Direction, Move};
//!
//! let board: Board = "
//!     AA....
//!     B..CCC
//!     BRR...
//!     DD.E..
//!     ...EFF
//!     ......
//! "
//! .parse()?;
//!
//! assert!(!board.is_solved());
//! assert_eq!(board.exit_distance(), 3);
//!
//! let moved = board.apply_move(Move::new('R', Direction::Right)).unwrap();
//! assert_eq!(moved.exit_distance(), 2);
//! # Ok::<(), puzzlecraft_core::BoardError>(())
//! ```

use std::{
    collections::HashMap,
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::Pos2;

/// Character marking an empty cell.
pub const EMPTY: char = '.';

/// Character naming the car that has to reach the exit.
pub const TARGET: char = 'R';

/// Shortest allowed car.
pub const MIN_CAR_LENGTH: usize = 2;

/// Longest allowed car.
pub const MAX_CAR_LENGTH: usize = 3;

/// The axis a car slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The car moves left and right.
    Horizontal,
    /// The car moves up and down.
    Vertical,
}

/// A direction a car can be moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Towards row 0.
    #[display("up")]
    Up,
    /// Away from row 0.
    #[display("down")]
    Down,
    /// Towards column 0.
    #[display("left")]
    Left,
    /// Away from column 0.
    #[display("right")]
    Right,
}

/// A car on a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car {
    id: char,
    origin: Pos2,
    length: usize,
    orientation: Orientation,
}

impl Car {
    /// Returns the character naming this car.
    #[must_use]
    #[inline]
    pub fn id(&self) -> char {
        self.id
    }

    /// Returns the top-left cell of the car.
    #[must_use]
    #[inline]
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Returns the number of cells the car covers.
    #[must_use]
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the axis the car slides along.
    #[must_use]
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the cells covered by the car, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Pos2> + use<> {
        let Self {
            origin,
            orientation,
            length,
            ..
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => Pos2::new(origin.row(), origin.col() + i),
            Orientation::Vertical => Pos2::new(origin.row() + i, origin.col()),
        })
    }

    /// Returns the rightmost column the car covers.
    #[must_use]
    pub fn last_col(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.origin.col() + self.length - 1,
            Orientation::Vertical => self.origin.col(),
        }
    }

    /// Returns the two directions the car can move in, backward first.
    #[must_use]
    pub fn directions(&self) -> [Direction; 2] {
        match self.orientation {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

/// A single-cell shift of one car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{car} {direction}")]
pub struct Move {
    car: char,
    direction: Direction,
}

impl Move {
    /// Creates a move of `car` towards `direction`.
    #[must_use]
    #[inline]
    pub const fn new(car: char, direction: Direction) -> Self {
        Self { car, direction }
    }

    /// Returns the car being moved.
    #[must_use]
    #[inline]
    pub fn car(&self) -> char {
        self.car
    }

    /// Returns the direction of the move.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Errors that can occur when building a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The input contained no rows.
    #[display("board contains no rows")]
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
    /// A cell contained whitespace or a control character.
    #[display("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// A car's cells do not form a single straight run.
    #[display("car {id:?} is not a straight contiguous run")]
    BrokenCar {
        /// The car character.
        id: char,
    },
    /// A car is shorter or longer than allowed.
    #[display("car {id:?} has length {length}, expected 2 or 3")]
    InvalidCarLength {
        /// The car character.
        id: char,
        /// The number of cells the car covers.
        length: usize,
    },
    /// The board has no target car.
    #[display("board has no target car 'R'")]
    MissingTargetCar,
    /// The target car runs vertically and can never reach the exit.
    #[display("target car 'R' must be horizontal")]
    VerticalTargetCar,
    /// A serialized key does not match the board dimensions.
    #[display("key has {found} cells, expected {expected}")]
    KeyLength {
        /// `rows × cols`.
        expected: usize,
        /// Length of the key.
        found: usize,
    },
}

/// A sliding-car puzzle state.
///
/// Boards are immutable values: moving a car produces a new board. Two
/// boards with the same layout are equal regardless of how they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Board {
    /// Creates a board from rows of characters, validating every car.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the rows are empty or ragged, a car is not
    /// a straight run of 2 or 3 cells, or the target car is missing or
    /// vertical.
    pub fn from_rows<R, S>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(BoardError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch.is_whitespace() || ch.is_control() {
                    return Err(BoardError::InvalidCell { row, col, ch });
                }
                cells.push(ch);
            }
            row_count += 1;
        }
        let cols = cols.filter(|&cols| cols > 0).ok_or(BoardError::Empty)?;
        let board = Self {
            rows: row_count,
            cols,
            cells,
        };
        board.validate()?;
        Ok(board)
    }

    /// Rebuilds a board from its [`key`](Self::key).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::KeyLength`] if the key does not hold
    /// `rows × cols` cells, or any error [`from_rows`](Self::from_rows) reports.
    pub fn from_key(rows: usize, cols: usize, key: &str) -> Result<Self, BoardError> {
        let cells = key.chars().collect::<Vec<_>>();
        if cells.len() != rows * cols {
            return Err(BoardError::KeyLength {
                expected: rows * cols,
                found: cells.len(),
            });
        }
        Self::from_rows(
            cells
                .chunks(cols.max(1))
                .map(|chunk| chunk.iter().collect::<String>()),
        )
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

    /// Returns the character at `pos`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Pos2) -> Option<char> {
        (pos.row() < self.rows && pos.col() < self.cols)
            .then(|| self.cells[pos.row() * self.cols + pos.col()])
    }

    /// Returns `true` if `pos` is in bounds and empty.
    #[must_use]
    #[inline]
    pub fn is_empty_at(&self, pos: Pos2) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Returns the canonical serialization of the layout.
    ///
    /// The key is the row-major concatenation of every cell. Boards of the
    /// same size have equal keys exactly when their layouts are equal.
    #[must_use]
    pub fn key(&self) -> String {
        self.cells.iter().collect()
    }

    /// Returns the number of cells covered by cars.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&ch| ch != EMPTY).count()
    }

    /// Returns every car, ordered by the row-major position of its origin.
    #[must_use]
    pub fn cars(&self) -> Vec<Car> {
        self.origins().map(|(pos, id)| self.car_at_origin(pos, id)).collect()
    }

    /// Returns the car named `id`, if present.
    #[must_use]
    pub fn car(&self, id: char) -> Option<Car> {
        self.origins()
            .find(|&(_, ch)| ch == id)
            .map(|(pos, id)| self.car_at_origin(pos, id))
    }

    /// Returns the target car, if present.
    #[must_use]
    pub fn target(&self) -> Option<Car> {
        self.car(TARGET)
    }

    /// Returns the number of columns between the target car's leading edge
    /// and the last column.
    ///
    /// Returns `usize::MAX` for a board without a target car.
    #[must_use]
    pub fn exit_distance(&self) -> usize {
        self.target()
            .map_or(usize::MAX, |car| self.cols - 1 - car.last_col())
    }

    /// Returns `true` if the target car covers the last column of its row.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.exit_distance() == 0
    }

    /// Returns every legal move with the board it produces.
    ///
    /// Each car is visited once, at its origin, and contributes at most two
    /// moves: backward (up or left) first, then forward (down or right).
    #[must_use]
    pub fn generate_moves(&self) -> Vec<(Move, Board)> {
        let mut moves = Vec::new();
        for car in self.cars() {
            for direction in car.directions() {
                if let Some(next) = self.shifted(car, direction) {
                    moves.push((Move::new(car.id, direction), next));
                }
            }
        }
        moves
    }

    /// Applies a move, returning the resulting board.
    ///
    /// Returns `None` if the car does not exist, the direction is not along
    /// the car's axis, or the destination cell is not empty.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let car = self.car(mv.car)?;
        self.shifted(car, mv.direction)
    }

    fn shifted(&self, car: Car, direction: Direction) -> Option<Board> {
        let origin = car.origin;
        let (enter, leave) = match (car.orientation, direction) {
            (Orientation::Horizontal, Direction::Left) => (
                Pos2::new(origin.row(), origin.col().checked_sub(1)?),
                Pos2::new(origin.row(), origin.col() + car.length - 1),
            ),
            (Orientation::Horizontal, Direction::Right) => (
                Pos2::new(origin.row(), origin.col() + car.length),
                origin,
            ),
            (Orientation::Vertical, Direction::Up) => (
                Pos2::new(origin.row().checked_sub(1)?, origin.col()),
                Pos2::new(origin.row() + car.length - 1, origin.col()),
            ),
            (Orientation::Vertical, Direction::Down) => (
                Pos2::new(origin.row() + car.length, origin.col()),
                origin,
            ),
            _ => return None,
        };
        if !self.is_empty_at(enter) {
            return None;
        }
        let mut next = self.clone();
        next.cells[enter.row() * self.cols + enter.col()] = car.id;
        next.cells[leave.row() * self.cols + leave.col()] = EMPTY;
        Some(next)
    }

    /// Iterates over cells that start a car: the first cell of each run,
    /// in row-major order.
    fn origins(&self) -> impl Iterator<Item = (Pos2, char)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Pos2::new(row, col)))
            .filter_map(move |pos| {
                let ch = self.get(pos)?;
                let continues_left = pos
                    .col()
                    .checked_sub(1)
                    .is_some_and(|col| self.get(Pos2::new(pos.row(), col)) == Some(ch));
                let continues_up = pos
                    .row()
                    .checked_sub(1)
                    .is_some_and(|row| self.get(Pos2::new(row, pos.col())) == Some(ch));
                (ch != EMPTY && !continues_left && !continues_up).then_some((pos, ch))
            })
    }

    fn car_at_origin(&self, origin: Pos2, id: char) -> Car {
        let run = |step: fn(Pos2, usize) -> Pos2| {
            (0..)
                .take_while(|&i| self.get(step(origin, i)) == Some(id))
                .count()
        };
        let horizontal = run(|pos, i| Pos2::new(pos.row(), pos.col() + i));
        let vertical = run(|pos, i| Pos2::new(pos.row() + i, pos.col()));
        let (orientation, length) = if horizontal >= vertical {
            (Orientation::Horizontal, horizontal)
        } else {
            (Orientation::Vertical, vertical)
        };
        Car {
            id,
            origin,
            length,
            orientation,
        }
    }

    fn validate(&self) -> Result<(), BoardError> {
        let mut counts = HashMap::<char, usize>::new();
        for &ch in self.cells.iter().filter(|&&ch| ch != EMPTY) {
            *counts.entry(ch).or_default() += 1;
        }

        let mut seen = HashMap::<char, Car>::new();
        for (pos, id) in self.origins() {
            let car = self.car_at_origin(pos, id);
            if seen.insert(id, car).is_some() || counts.get(&id) != Some(&car.length) {
                return Err(BoardError::BrokenCar { id });
            }
            if !(MIN_CAR_LENGTH..=MAX_CAR_LENGTH).contains(&car.length) {
                return Err(BoardError::InvalidCarLength {
                    id,
                    length: car.length,
                });
            }
        }
        match seen.get(&TARGET) {
            None => Err(BoardError::MissingTargetCar),
            Some(car) if car.orientation == Orientation::Vertical => {
                Err(BoardError::VerticalTargetCar)
            }
            Some(_) => Ok(()),
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &ch in row {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
        AA....
        B..CCC
        BRR...
        DD.E..
        ...EFF
        ......
    ";

    fn sample() -> Board {
        SAMPLE.parse().unwrap()
    }

    #[test]
    fn test_parses_cars_in_origin_order() {
        let board = sample();
        let ids = board.cars().iter().map(Car::id).collect::<String>();
        assert_eq!(ids, "ABCRDEF");

        let b = board.car('B').unwrap();
        assert_eq!(b.orientation(), Orientation::Vertical);
        assert_eq!(b.length(), 2);
        let c = board.car('C').unwrap();
        assert_eq!(c.orientation(), Orientation::Horizontal);
        assert_eq!(c.length(), 3);
        assert_eq!(c.origin(), Pos2::new(1, 3));
    }

    #[test]
    fn test_generate_moves_at_most_two_per_car() {
        let board = sample();
        let moves = board.generate_moves();
        let cars = board.cars().len();
        assert!(moves.len() <= 2 * cars);

        let names = moves
            .iter()
            .map(|(mv, _)| mv.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["A right", "C left", "R right", "D right", "E up", "E down"]
        );
    }

    #[test]
    fn test_moves_preserve_cells_and_never_overlap() {
        let board = sample();
        for (_, next) in board.generate_moves() {
            assert_eq!(next.occupied_count(), board.occupied_count());
            for car in board.cars() {
                let moved = next.car(car.id()).unwrap();
                assert_eq!(moved.length(), car.length());
                assert_eq!(moved.orientation(), car.orientation());
                for cell in moved.cells() {
                    assert_eq!(next.get(cell), Some(car.id()));
                }
            }
        }
    }

    #[test]
    fn test_three_cell_car_moves_by_one() {
        let board = sample();
        let moved = board
            .apply_move(Move::new('C', Direction::Left))
            .unwrap();
        assert_eq!(moved.to_string().lines().nth(1), Some("B.CCC."));
    }

    #[test]
    fn test_apply_move_rejects_blocked_and_off_axis() {
        let board = sample();
        assert_eq!(board.apply_move(Move::new('R', Direction::Left)), None);
        assert_eq!(board.apply_move(Move::new('R', Direction::Up)), None);
        assert_eq!(board.apply_move(Move::new('Z', Direction::Up)), None);
    }

    #[test]
    fn test_solved_when_target_reaches_last_column() {
        let board: Board = "
            ....RR
            ......
        "
        .parse()
        .unwrap();
        assert!(board.is_solved());
        assert_eq!(board.exit_distance(), 0);
    }

    #[test]
    fn test_key_round_trips() {
        let board = sample();
        let key = board.key();
        assert_eq!(key.len(), 36);
        let restored = Board::from_key(6, 6, &key).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.key(), key);
    }

    #[test]
    fn test_key_differs_for_any_moved_car() {
        let board = sample();
        for (_, next) in board.generate_moves() {
            assert_ne!(next.key(), board.key());
        }
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!("".parse::<Board>(), Err(BoardError::Empty));
        assert_eq!(
            "RR.\nAA".parse::<Board>(),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "RR.A".parse::<Board>(),
            Err(BoardError::InvalidCarLength { id: 'A', length: 1 })
        );
        assert_eq!(
            "RRAAAA".parse::<Board>(),
            Err(BoardError::InvalidCarLength { id: 'A', length: 4 })
        );
        assert_eq!(
            "RR.AA.A".parse::<Board>(),
            Err(BoardError::BrokenCar { id: 'A' })
        );
        assert_eq!(
            "AA.\nA..\nRR.".parse::<Board>(),
            Err(BoardError::BrokenCar { id: 'A' })
        );
        assert_eq!("AA..".parse::<Board>(), Err(BoardError::MissingTargetCar));
        assert_eq!(
            "..R\n..R\n...".parse::<Board>(),
            Err(BoardError::VerticalTargetCar)
        );
        assert_eq!(
            Board::from_key(2, 2, ".R.R"),
            Err(BoardError::VerticalTargetCar)
        );
        assert_eq!(
            Board::from_key(2, 2, "RR."),
            Err(BoardError::KeyLength {
                expected: 4,
                found: 3
            })
        );
    }
}
