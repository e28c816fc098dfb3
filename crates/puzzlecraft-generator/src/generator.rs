use log::{debug, trace};
use puzzlecraft_core::{Grid, Maze, RectGrid};
use puzzlecraft_solver::pathfinding;

use crate::{GeneratorError, MazeSeed, MazeShape, MazeType};

/// The smallest side length a generated maze can have.
pub const MIN_MAZE_SIZE: usize = 2;

/// Tuning knobs for [`MazeGenerator`].
///
/// Every probability has a range that guarantees an open candidate can
/// eventually be drawn, so the retry loop in [`MazeGenerator`] always ends.
/// Use [`MazeGeneratorConfig::validate`] (or [`MazeGenerator::new`]) to
/// check a hand-built configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeGeneratorConfig {
    /// Chance that a cell becomes a wall in rectangular, circular and radial
    /// shapes. Must be in `[0, 1)`.
    pub wall_probability: f64,
    /// Chance that a spiral wall cell is opened as a shortcut. Must be in
    /// `[0, 1]`.
    pub branch_probability: f64,
    /// Chance that a cell outside the circle of a circular shape is open.
    /// Must be in `(0, 1]`.
    pub outside_open_probability: f64,
    /// Chance that a cell is open in topology mazes. Must be in `(0, 1]`.
    pub open_ratio: f64,
    /// Number of layers in a 3D maze. Must be at least 1.
    pub depth: usize,
}

impl Default for MazeGeneratorConfig {
    fn default() -> Self {
        Self {
            wall_probability: 0.3,
            branch_probability: 0.15,
            outside_open_probability: 0.5,
            open_ratio: 0.7,
            depth: 3,
        }
    }
}

impl MazeGeneratorConfig {
    /// Checks that every setting is within its range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidProbability`] for the first
    /// probability out of range, or [`GeneratorError::ZeroDepth`] if
    /// `depth` is zero.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        check(
            "wall_probability",
            self.wall_probability,
            "[0, 1)",
            |p| (0.0..1.0).contains(&p),
        )?;
        check(
            "branch_probability",
            self.branch_probability,
            "[0, 1]",
            |p| (0.0..=1.0).contains(&p),
        )?;
        check(
            "outside_open_probability",
            self.outside_open_probability,
            "(0, 1]",
            |p| p > 0.0 && p <= 1.0,
        )?;
        check("open_ratio", self.open_ratio, "(0, 1]", |p| {
            p > 0.0 && p <= 1.0
        })?;
        if self.depth == 0 {
            return Err(GeneratorError::ZeroDepth);
        }
        Ok(())
    }
}

fn check(
    setting: &'static str,
    value: f64,
    range: &'static str,
    in_range: impl FnOnce(f64) -> bool,
) -> Result<(), GeneratorError> {
    if in_range(value) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidProbability {
            setting,
            value,
            range,
        })
    }
}

/// A solvable maze together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze<G> {
    /// The maze. Its start and goal are open and connected.
    pub grid: G,
    /// Seed that regenerates exactly this maze with the same configuration.
    pub seed: MazeSeed,
    /// Number of candidates drawn before a solvable one was found.
    pub attempts: usize,
}

/// Generates random mazes whose goal is always reachable.
///
/// Each call draws candidates from a single generator seeded by a
/// [`MazeSeed`] and keeps the first one A* can solve, so the same seed,
/// size and configuration always produce the same maze.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::Grid as _;
/// use puzzlecraft_generator::{MazeGenerator, MazeSeed, MazeShape};
///
/// let generator = MazeGenerator::default();
/// let seed = MazeSeed::from_phrase("docs");
/// let maze = generator.generate_maze_with_seed(MazeShape::Spiral, 9, seed);
/// assert!(maze.grid.is_walkable(maze.grid.goal()));
/// assert_eq!(
///     maze.grid,
///     generator.generate_maze_with_seed(MazeShape::Spiral, 9, seed).grid
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    config: MazeGeneratorConfig,
}

impl MazeGenerator {
    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails
    /// [`MazeGeneratorConfig::validate`].
    pub fn new(config: MazeGeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MazeGeneratorConfig {
        &self.config
    }

    /// Generates a solvable `size × size` rectangular maze with a random seed.
    ///
    /// Sizes below [`MIN_MAZE_SIZE`] are raised to it.
    #[must_use]
    pub fn generate_maze(&self, shape: MazeShape, size: usize) -> GeneratedMaze<RectGrid> {
        self.generate_maze_with_seed(shape, size, MazeSeed::random())
    }

    /// Generates a solvable `size × size` rectangular maze from `seed`.
    #[must_use]
    pub fn generate_maze_with_seed(
        &self,
        shape: MazeShape,
        size: usize,
        seed: MazeSeed,
    ) -> GeneratedMaze<RectGrid> {
        let size = size.max(MIN_MAZE_SIZE);
        debug!("generating {shape} maze of size {size} from seed {seed}");
        let mut rng = seed.rng();
        retry_until_solvable(seed, || shape.fill(size, &self.config, &mut rng))
    }

    /// Generates a solvable maze of the given topology with a random seed.
    ///
    /// Sizes below [`MIN_MAZE_SIZE`] are raised to it.
    #[must_use]
    pub fn create_maze(&self, maze_type: MazeType, size: usize) -> GeneratedMaze<Maze> {
        self.create_maze_with_seed(maze_type, size, MazeSeed::random())
    }

    /// Generates a solvable maze of the given topology from `seed`.
    #[must_use]
    pub fn create_maze_with_seed(
        &self,
        maze_type: MazeType,
        size: usize,
        seed: MazeSeed,
    ) -> GeneratedMaze<Maze> {
        let size = size.max(MIN_MAZE_SIZE);
        debug!("generating {maze_type} maze of size {size} from seed {seed}");
        let mut rng = seed.rng();
        retry_until_solvable(seed, || maze_type.fill(size, &self.config, &mut rng))
    }
}

/// Draws candidates until one has a path from start to goal.
fn retry_until_solvable<G, F>(seed: MazeSeed, mut candidate: F) -> GeneratedMaze<G>
where
    G: Grid,
    F: FnMut() -> G,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        let grid = candidate();
        let path = pathfinding::a_star(&grid, grid.start(), grid.goal());
        if !path.is_empty() {
            debug!("found solvable maze after {attempts} attempts");
            return GeneratedMaze {
                grid,
                seed,
                attempts,
            };
        }
        trace!("candidate {attempts} has no path, retrying");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use puzzlecraft_solver::Algorithm;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MazeGeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MazeGeneratorConfig {
            wall_probability: 1.0,
            ..MazeGeneratorConfig::default()
        };
        assert_eq!(
            MazeGenerator::new(config).err(),
            Some(GeneratorError::InvalidProbability {
                setting: "wall_probability",
                value: 1.0,
                range: "[0, 1)",
            })
        );

        let config = MazeGeneratorConfig {
            open_ratio: 0.0,
            ..MazeGeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidProbability {
                setting: "open_ratio",
                ..
            })
        ));

        let config = MazeGeneratorConfig {
            outside_open_probability: f64::NAN,
            ..MazeGeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MazeGeneratorConfig {
            depth: 0,
            ..MazeGeneratorConfig::default()
        };
        assert_eq!(config.validate(), Err(GeneratorError::ZeroDepth));
    }

    #[test]
    fn test_small_sizes_are_raised() {
        let generator = MazeGenerator::default();
        let seed = MazeSeed::from_phrase("tiny");
        let maze = generator.generate_maze_with_seed(MazeShape::Rectangular, 0, seed);
        assert_eq!((maze.grid.rows(), maze.grid.cols()), (2, 2));
        assert!(maze.attempts >= 1);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let generator = MazeGenerator::default();
        let seed = MazeSeed::from_phrase("repeat");
        for shape in MazeShape::ALL {
            let a = generator.generate_maze_with_seed(shape, 11, seed);
            let b = generator.generate_maze_with_seed(shape, 11, seed);
            assert_eq!(a, b, "{shape}");
        }
        for maze_type in MazeType::ALL {
            let a = generator.create_maze_with_seed(maze_type, 7, seed);
            let b = generator.create_maze_with_seed(maze_type, 7, seed);
            assert_eq!(a, b, "{maze_type}");
        }
    }

    #[test]
    fn test_fully_walled_spiral_still_solvable() {
        let config = MazeGeneratorConfig {
            branch_probability: 0.0,
            ..MazeGeneratorConfig::default()
        };
        let generator = MazeGenerator::new(config).unwrap();
        let maze = generator.generate_maze_with_seed(MazeShape::Spiral, 11, MazeSeed::new([7; 32]));
        assert_eq!(maze.attempts, 1);
    }

    #[test]
    fn test_search_algorithms_agree_on_generated_topologies() {
        let generator = MazeGenerator::default();
        for maze_type in MazeType::ALL {
            for size in 3..12 {
                for round in 0..5 {
                    let seed = MazeSeed::from_phrase(&format!("{maze_type}/{size}/{round}"));
                    let maze = generator.create_maze_with_seed(maze_type, size, seed);
                    let grid = &maze.grid;
                    let shortest = pathfinding::dijkstra(grid, grid.start(), grid.goal()).len();
                    for algorithm in Algorithm::ALL {
                        let path = pathfinding::solve_grid(algorithm, grid);
                        let context = format!("{algorithm} on {maze_type} size {size} seed {seed}");
                        assert_eq!(path.first(), Some(&grid.start()), "{context}");
                        assert_eq!(path.last(), Some(&grid.goal()), "{context}");
                        for step in path.windows(2) {
                            assert!(grid.neighbors(step[0]).contains(&step[1]), "{context}");
                        }
                        if algorithm.is_optimal() {
                            assert_eq!(path.len(), shortest, "{context}");
                        } else {
                            assert!(path.len() >= shortest, "{context}");
                        }
                    }
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn generated_shapes_are_solvable(
            bytes in any::<[u8; 32]>(),
            shape_index in 0..MazeShape::ALL.len(),
            size in 0_usize..16,
        ) {
            let generator = MazeGenerator::default();
            let shape = MazeShape::ALL[shape_index];
            let maze = generator.generate_maze_with_seed(shape, size, MazeSeed::new(bytes));
            let path = pathfinding::a_star(&maze.grid, maze.grid.start(), maze.grid.goal());
            prop_assert!(!path.is_empty());
        }

        #[test]
        fn generated_topologies_are_solvable(
            bytes in any::<[u8; 32]>(),
            type_index in 0..MazeType::ALL.len(),
            size in 0_usize..10,
        ) {
            let generator = MazeGenerator::default();
            let maze_type = MazeType::ALL[type_index];
            let maze = generator.create_maze_with_seed(maze_type, size, MazeSeed::new(bytes));
            prop_assert_eq!(maze.grid.topology_name(), maze_type.to_string());
            let path = pathfinding::a_star(&maze.grid, maze.grid.start(), maze.grid.goal());
            prop_assert!(!path.is_empty());
        }
    }
}
