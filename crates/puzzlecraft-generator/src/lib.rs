//! Seeded maze generation for puzzlecraft.
//!
//! Two families of mazes are produced:
//!
//! - [`MazeShape`]: square [`RectGrid`](puzzlecraft_core::RectGrid) mazes
//!   with rectangular, spiral, circular or radial wall patterns, built by
//!   [`MazeGenerator::generate_maze`]
//! - [`MazeType`]: randomly opened 2D, 3D, circular or hexagonal
//!   [`Maze`](puzzlecraft_core::Maze)s, built by [`MazeGenerator::create_maze`]
//!
//! Every maze handed out is solvable: candidates are redrawn until A* finds
//! a path from start to goal. All randomness comes from one [`MazeSeed`], so
//! a maze can be reproduced from its seed.
//!
//! # Examples
//!
//! ```
//! use puzzlecraft_generator::{MazeGenerator, MazeSeed, MazeType};
//!
//! let generator = MazeGenerator::default();
//! let maze = generator.create_maze_with_seed(MazeType::Hexagonal, 8, MazeSeed::from_phrase("hex"));
//! assert_eq!(maze.grid.topology_name(), "Hexagonal");
//! ```

pub use self::{
    error::GeneratorError,
    generator::{GeneratedMaze, MIN_MAZE_SIZE, MazeGenerator, MazeGeneratorConfig},
    seed::{MazeSeed, SeedParseError},
    shape::{MazeShape, RADIAL_SECTORS},
    topology::MazeType,
};

mod error;
mod generator;
mod seed;
mod shape;
mod topology;
