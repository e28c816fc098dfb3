//! Wall layouts for square rectangular mazes.

use std::{f64::consts::PI, str::FromStr};

use puzzlecraft_core::{Pos2, RectGrid};
use rand::Rng;

use crate::{GeneratorError, MazeGeneratorConfig};

/// Number of angular sectors used by [`MazeShape::Radial`].
pub const RADIAL_SECTORS: usize = 8;

/// The wall pattern of a square [`RectGrid`] maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MazeShape {
    /// Every cell is a wall with the configured wall probability.
    #[display("rectangular")]
    Rectangular,
    /// A corridor winding inwards in concentric squares, with random side
    /// openings.
    #[display("spiral")]
    Spiral,
    /// Mostly open inside the inscribed circle, sparse outside it.
    #[display("circular")]
    Circular,
    /// Alternating walled and open wedges around the centre.
    #[display("radial")]
    Radial,
}

impl MazeShape {
    /// Every shape.
    pub const ALL: [Self; 4] = [Self::Rectangular, Self::Spiral, Self::Circular, Self::Radial];

    /// Builds one `size × size` candidate grid with this shape.
    ///
    /// Start and goal are opened; solvability is not checked.
    pub(crate) fn fill<R>(self, size: usize, config: &MazeGeneratorConfig, rng: &mut R) -> RectGrid
    where
        R: Rng + ?Sized,
    {
        let mut grid = match self {
            Self::Rectangular => {
                RectGrid::from_fn(size, size, |_| !rng.random_bool(config.wall_probability))
            }
            Self::Spiral => spiral(size, config.branch_probability, rng),
            Self::Circular => circular(size, config, rng),
            Self::Radial => RectGrid::from_fn(size, size, |pos| {
                radial_sector(size, pos) % 2 == 1 || !rng.random_bool(config.wall_probability)
            }),
        };
        grid.open_endpoints();
        grid
    }
}

impl FromStr for MazeShape {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.to_string() == s)
            .ok_or_else(|| GeneratorError::UnknownMazeShape { name: s.to_owned() })
    }
}

/// Carves concentric square rings two cells apart. Each ring is cut just
/// below its top-left corner and joined to the next ring inside, so the
/// corridor runs clockwise around one ring and then steps inwards.
fn spiral<R>(size: usize, branch_probability: f64, rng: &mut R) -> RectGrid
where
    R: Rng + ?Sized,
{
    let mut open = vec![false; size * size];
    let mut set = |row: usize, col: usize, value: bool| open[row * size + col] = value;

    let mut lo = 0;
    while 2 * lo < size {
        let hi = size - 1 - lo;
        for i in lo..=hi {
            set(lo, i, true);
            set(hi, i, true);
            set(i, lo, true);
            set(i, hi, true);
        }
        if lo + 1 < hi {
            set(lo + 1, lo, false);
        }
        let inner = lo + 2;
        if 2 * inner < size {
            set(inner, lo + 1, true);
        }
        lo += 2;
    }

    RectGrid::from_fn(size, size, |pos| {
        open[pos.row() * size + pos.col()] || rng.random_bool(branch_probability)
    })
}

/// Opens the inside of the inscribed circle except for random walls, and
/// scatters random openings outside it.
fn circular<R>(size: usize, config: &MazeGeneratorConfig, rng: &mut R) -> RectGrid
where
    R: Rng + ?Sized,
{
    let center = size / 2;
    RectGrid::from_fn(size, size, |pos| {
        let dr = pos.row().abs_diff(center);
        let dc = pos.col().abs_diff(center);
        if dr * dr + dc * dc < center * center {
            !rng.random_bool(config.wall_probability)
        } else {
            rng.random_bool(config.outside_open_probability)
        }
    })
}

/// Returns which of the [`RADIAL_SECTORS`] wedges around the centre `pos`
/// falls in.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn radial_sector(size: usize, pos: Pos2) -> usize {
    let center = (size / 2) as f64;
    let angle = (pos.row() as f64 - center).atan2(pos.col() as f64 - center);
    let sector = ((angle + PI) / (2.0 * PI) * RADIAL_SECTORS as f64) as usize;
    sector.min(RADIAL_SECTORS - 1)
}

#[cfg(test)]
mod tests {
    use puzzlecraft_core::Grid as _;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(42)
    }

    #[test]
    fn test_shape_names_round_trip() {
        for shape in MazeShape::ALL {
            assert_eq!(shape.to_string().parse::<MazeShape>(), Ok(shape));
        }
        assert_eq!(
            "triangular".parse::<MazeShape>(),
            Err(GeneratorError::UnknownMazeShape {
                name: "triangular".to_owned()
            })
        );
    }

    #[test]
    fn test_spiral_without_branches() {
        let grid = spiral(7, 0.0, &mut rng());
        assert_eq!(
            grid.to_string(),
            "S......\n\
             ######.\n\
             .....#.\n\
             .###.#.\n\
             .#...#.\n\
             .#####.\n\
             ......G"
        );
    }

    #[test]
    fn test_spiral_is_solvable_without_branches() {
        for size in 2..12 {
            let grid = spiral(size, 0.0, &mut rng());
            let path = puzzlecraft_solver::pathfinding::solve_grid(
                puzzlecraft_solver::Algorithm::AStar,
                &grid,
            );
            assert!(!path.is_empty(), "size {size}");
        }
    }

    #[test]
    fn test_circular_without_randomness() {
        let config = MazeGeneratorConfig {
            wall_probability: 0.0,
            outside_open_probability: 1e-300,
            ..MazeGeneratorConfig::default()
        };
        let mut grid = circular(5, &config, &mut rng());
        grid.open_endpoints();
        assert!(grid.is_walkable(Pos2::new(2, 2)));
        assert!(grid.is_walkable(Pos2::new(1, 1)));
        assert!(!grid.is_walkable(Pos2::new(0, 1)));
        assert!(grid.is_walkable(Pos2::new(0, 0)));
    }

    #[test]
    fn test_radial_sectors_alternate() {
        let sectors = [
            radial_sector(9, Pos2::new(4, 0)),
            radial_sector(9, Pos2::new(0, 0)),
            radial_sector(9, Pos2::new(0, 8)),
            radial_sector(9, Pos2::new(8, 8)),
            radial_sector(9, Pos2::new(8, 0)),
        ];
        assert_eq!(sectors, [7, 1, 3, 5, 7]);
    }

    #[test]
    fn test_fill_opens_endpoints() {
        let config = MazeGeneratorConfig {
            wall_probability: 0.9,
            ..MazeGeneratorConfig::default()
        };
        for shape in MazeShape::ALL {
            let grid = shape.fill(6, &config, &mut rng());
            assert!(grid.is_walkable(grid.start()), "{shape}");
            assert!(grid.is_walkable(grid.goal()), "{shape}");
        }
    }
}
