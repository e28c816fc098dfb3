//! Random mazes over every grid topology.

use std::str::FromStr;

use puzzlecraft_core::{CircularGrid, HexGrid, LayeredGrid, Maze, Pos2, RectGrid, RingPos};
use rand::Rng;

use crate::{GeneratorError, MazeGeneratorConfig};

/// The topology of a [`Maze`] built by
/// [`MazeGenerator::create_maze`](crate::MazeGenerator::create_maze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MazeType {
    /// A square [`RectGrid`].
    #[display("2D")]
    TwoD,
    /// A [`LayeredGrid`] of square layers.
    #[display("3D")]
    ThreeD,
    /// A [`CircularGrid`] scaled from the size.
    #[display("Circular")]
    Circular,
    /// A square [`HexGrid`].
    #[display("Hexagonal")]
    Hexagonal,
}

impl MazeType {
    /// Every maze type.
    pub const ALL: [Self; 4] = [Self::TwoD, Self::ThreeD, Self::Circular, Self::Hexagonal];

    /// Builds one candidate maze of this type where every cell is open with
    /// the configured open ratio.
    ///
    /// Start and goal are opened; solvability is not checked.
    pub(crate) fn fill<R>(self, size: usize, config: &MazeGeneratorConfig, rng: &mut R) -> Maze
    where
        R: Rng + ?Sized,
    {
        let mut open = || rng.random_bool(config.open_ratio);
        match self {
            Self::TwoD => {
                let mut grid = RectGrid::from_fn(size, size, |_| open());
                grid.open_endpoints();
                Maze::Rect(grid)
            }
            Self::ThreeD => {
                let layers = (0..config.depth)
                    .map(|_| RectGrid::from_fn(size, size, |_: Pos2| open()))
                    .collect();
                let mut grid = LayeredGrid::from_layers(layers);
                grid.open_endpoints();
                Maze::Layered(grid)
            }
            Self::Circular => {
                let mut grid = CircularGrid::for_size(size);
                let cells = grid.positions().collect::<Vec<RingPos>>();
                for pos in cells {
                    grid.set_walkable(pos, open());
                }
                grid.open_endpoints();
                Maze::Circular(grid)
            }
            Self::Hexagonal => {
                let mut grid = HexGrid::new(size, size);
                let cells = grid.positions().collect::<Vec<Pos2>>();
                for pos in cells {
                    grid.set_walkable(pos, open());
                }
                grid.open_endpoints();
                Maze::Hexagonal(grid)
            }
        }
    }
}

impl FromStr for MazeType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|maze_type| maze_type.to_string() == s)
            .ok_or_else(|| GeneratorError::UnknownMazeType { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use puzzlecraft_core::{Grid as _, Pos3};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for maze_type in MazeType::ALL {
            assert_eq!(maze_type.to_string().parse::<MazeType>(), Ok(maze_type));
        }
        assert_eq!(
            "4D".parse::<MazeType>(),
            Err(GeneratorError::UnknownMazeType {
                name: "4D".to_owned()
            })
        );
    }

    #[test]
    fn test_fill_builds_matching_topology() {
        let config = MazeGeneratorConfig::default();
        let mut rng = Pcg64::seed_from_u64(5);
        for maze_type in MazeType::ALL {
            let maze = maze_type.fill(6, &config, &mut rng);
            assert_eq!(maze.topology_name(), maze_type.to_string());
            assert!(maze.is_walkable(maze.start()));
            assert!(maze.is_walkable(maze.goal()));
        }
    }

    #[test]
    fn test_three_d_uses_configured_depth() {
        let config = MazeGeneratorConfig {
            depth: 5,
            ..MazeGeneratorConfig::default()
        };
        let maze = MazeType::ThreeD.fill(4, &config, &mut Pcg64::seed_from_u64(0));
        let Maze::Layered(grid) = maze else {
            panic!("expected a layered maze");
        };
        assert_eq!(grid.depth(), 5);
        assert_eq!(grid.goal(), Pos3::new(4, 3, 3));
    }
}
