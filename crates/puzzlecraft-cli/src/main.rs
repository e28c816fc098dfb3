//! Command-line front end for the puzzlecraft solvers.
//!
//! # Usage
//!
//! ```sh
//! puzzlecraft maze --shape spiral --size 21 --algorithm Dijkstra
//! puzzlecraft maze --type Hexagonal --compare
//! puzzlecraft queens 8
//! puzzlecraft traffic board.txt --algorithm BFS
//! puzzlecraft codebreaker --length 5 --seed "lucky"
//! ```
//!
//! Set `RUST_LOG=debug` to see generator retries and search outcomes.
//!
//! # Exit status
//!
//! - `0`: the puzzle was solved
//! - `1`: the search finished without a solution
//! - `2`: the command line or an input file is invalid

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use crate::error::CliError;

mod codebreaker;
mod error;
mod maze;
mod queens;
mod seed;
mod traffic;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a solvable maze and find a path through it.
    Maze(maze::MazeArgs),
    /// Place N queens on an N×N board.
    Queens(queens::QueensArgs),
    /// Slide cars until the target car reaches the exit.
    Traffic(traffic::TrafficArgs),
    /// Break a secret code from exact/partial feedback.
    Codebreaker(codebreaker::CodebreakerArgs),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli.command);

    let result: Result<(), CliError> = match cli.command {
        Command::Maze(args) => maze::run(&args),
        Command::Queens(args) => queens::run(&args),
        Command::Traffic(args) => traffic::run(&args),
        Command::Codebreaker(args) => codebreaker::run(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
