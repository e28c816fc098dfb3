use std::fmt::Display;

use puzzlecraft_core::Grid;
use puzzlecraft_generator::{
    GeneratedMaze, MazeGenerator, MazeGeneratorConfig, MazeSeed, MazeShape, MazeType,
};
use puzzlecraft_solver::pathfinding::{self, Algorithm};

use crate::{error::CliError, seed::parse_seed};

#[derive(Debug, clap::Args)]
pub(crate) struct MazeArgs {
    /// Wall pattern of a rectangular maze (rectangular, spiral, circular, radial).
    #[arg(long, value_name = "SHAPE", conflicts_with = "maze_type")]
    shape: Option<MazeShape>,

    /// Grid topology (2D, 3D, Circular, Hexagonal).
    #[arg(long = "type", value_name = "TYPE")]
    maze_type: Option<MazeType>,

    /// Side length of the maze.
    #[arg(long, value_name = "N", default_value_t = 15)]
    size: usize,

    /// Seed as 64 hex characters, or any phrase to hash into one.
    #[arg(long, value_name = "SEED", value_parser = parse_seed)]
    seed: Option<MazeSeed>,

    /// Search algorithm (A*, Dijkstra, Bidirectional BFS, DFS, Greedy Best-First).
    #[arg(short, long, value_name = "ALGORITHM", default_value = "A*")]
    algorithm: Algorithm,

    /// Run every algorithm and print a comparison table.
    #[arg(long, conflicts_with = "algorithm")]
    compare: bool,

    /// Wall chance for rectangular, circular and radial shapes.
    #[arg(long, value_name = "P")]
    wall_probability: Option<f64>,

    /// Shortcut chance for the spiral shape.
    #[arg(long, value_name = "P")]
    branch_probability: Option<f64>,

    /// Open chance outside the circle of the circular shape.
    #[arg(long, value_name = "P")]
    outside_open_probability: Option<f64>,

    /// Open chance per cell for topology mazes.
    #[arg(long, value_name = "P")]
    open_ratio: Option<f64>,

    /// Layer count of 3D mazes.
    #[arg(long, value_name = "LAYERS")]
    depth: Option<usize>,
}

impl MazeArgs {
    fn config(&self) -> MazeGeneratorConfig {
        let default = MazeGeneratorConfig::default();
        MazeGeneratorConfig {
            wall_probability: self.wall_probability.unwrap_or(default.wall_probability),
            branch_probability: self.branch_probability.unwrap_or(default.branch_probability),
            outside_open_probability: self
                .outside_open_probability
                .unwrap_or(default.outside_open_probability),
            open_ratio: self.open_ratio.unwrap_or(default.open_ratio),
            depth: self.depth.unwrap_or(default.depth),
        }
    }
}

pub(crate) fn run(args: &MazeArgs) -> Result<(), CliError> {
    let generator = MazeGenerator::new(args.config())?;
    let seed = args.seed.unwrap_or_else(MazeSeed::random);

    if let Some(maze_type) = args.maze_type {
        let maze = generator.create_maze_with_seed(maze_type, args.size, seed);
        println!("Type:");
        println!("  {maze_type}");
        report(&maze, args)
    } else {
        let shape = args.shape.unwrap_or(MazeShape::Rectangular);
        let maze = generator.generate_maze_with_seed(shape, args.size, seed);
        println!("Shape:");
        println!("  {shape}");
        report(&maze, args)
    }
}

fn report<G>(maze: &GeneratedMaze<G>, args: &MazeArgs) -> Result<(), CliError>
where
    G: Grid + Display,
    G::Position: Display,
{
    let grid = &maze.grid;
    println!("Seed:");
    println!("  {}", maze.seed);
    println!("Attempts:");
    println!("  {}", maze.attempts);
    println!();
    println!("{grid}");
    println!();

    if args.compare {
        print_comparison(grid);
        return Ok(());
    }

    let path = pathfinding::solve_grid(args.algorithm, grid);
    if path.is_empty() {
        return Err(CliError::NoSolution);
    }
    println!("{} path ({} cells):", args.algorithm, path.len());
    let steps = path.iter().map(ToString::to_string).collect::<Vec<_>>();
    println!("  {}", steps.join(" -> "));
    Ok(())
}

fn print_comparison<G>(grid: &G)
where
    G: Grid,
{
    println!("{:<20} {:>8} {:>12}", "Algorithm", "Length", "Time");
    for report in pathfinding::compare(grid, grid.start(), grid.goal()) {
        let length = if report.solved() {
            report.path_len().to_string()
        } else {
            "-".to_owned()
        };
        let elapsed = format!("{:.3?}", report.elapsed);
        println!(
            "{:<20} {length:>8} {elapsed:>12}",
            report.algorithm.to_string()
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: MazeArgs,
    }

    fn parse(argv: &[&str]) -> Result<MazeArgs, clap::Error> {
        Wrapper::try_parse_from(std::iter::once("maze").chain(argv.iter().copied()))
            .map(|wrapper| wrapper.args)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.algorithm, Algorithm::AStar);
        assert_eq!(args.size, 15);
        assert_eq!(args.config(), MazeGeneratorConfig::default());
    }

    #[test]
    fn test_library_names_are_accepted() {
        let args = parse(&["--type", "3D", "-a", "Bidirectional BFS", "--depth", "4"]).unwrap();
        assert_eq!(args.maze_type, Some(MazeType::ThreeD));
        assert_eq!(args.algorithm, Algorithm::BidirectionalBfs);
        assert_eq!(args.config().depth, 4);

        assert!(parse(&["--shape", "triangle"]).is_err());
        assert!(parse(&["--shape", "spiral", "--type", "2D"]).is_err());
    }

    #[test]
    fn test_invalid_probability_is_config_error() {
        let args = parse(&["--wall-probability", "1.5"]).unwrap();
        let err = run(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
