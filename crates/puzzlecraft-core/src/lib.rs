//! Core data structures for puzzlecraft.
//!
//! This crate provides the models every solver in the workspace operates on.
//! All types are plain in-memory values: solvers only read them, and
//! generators build them once and hand them over.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: [`Pos2`], [`Pos3`] and [`RingPos`], all
//!    implementing [`Coordinate`].
//!
//! 2. **Grid capability** - [`grid`]: the [`Grid`] trait that pathfinding is
//!    generic over, and the [`Neighbors`] collection it returns.
//!
//! 3. **Topologies** - concrete grids implementing [`Grid`]:
//!    - [`RectGrid`]: rectangular 2D grid with 4-neighbour adjacency
//!    - [`LayeredGrid`]: stack of [`RectGrid`] layers with 6-neighbour adjacency
//!    - [`CircularGrid`]: concentric rings split into sectors
//!    - [`HexGrid`]: hexagonal grid in offset-column layout
//!    - [`Maze`]: a tagged union over the four topologies
//!
//! 4. **Puzzle states**
//!    - [`board`]: the sliding-car [`Board`] with its [`Car`]s and [`Move`]s
//!    - [`code`]: secret [`Code`]s and the [`Feedback`] between two codes
//!
//! # Examples
//!
//! ```
//! use puzzlecraft_core::{Grid, Pos2, RectGrid};
//!
//! let grid: RectGrid = "
//!     S.#
//!     ..#
//!     #.G
//! "
//! .parse()?;
//!
//! assert_eq!(grid.start(), Pos2::new(0, 0));
//! let neighbors = grid.neighbors(Pos2::new(1, 1));
//! assert_eq!(neighbors.as_slice(), [Pos2::new(0, 1), Pos2::new(2, 1), Pos2::new(1, 0)]);
//! # Ok::<(), puzzlecraft_core::GridParseError>(())
//! ```

pub mod board;
pub mod circular_grid;
pub mod code;
pub mod grid;
pub mod hex_grid;
pub mod layered_grid;
pub mod maze;
pub mod position;
pub mod rect_grid;

pub use self::{
    board::{Board, BoardError, Car, Direction, Move, Orientation},
    circular_grid::CircularGrid,
    code::{Code, CodeError, Feedback},
    grid::{Grid, Neighbors},
    hex_grid::HexGrid,
    layered_grid::LayeredGrid,
    maze::{Maze, MazePosition},
    position::{Coordinate, Pos2, Pos3, RingPos},
    rect_grid::{GridParseError, RectGrid},
};
