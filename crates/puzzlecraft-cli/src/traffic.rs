use std::{
    fs,
    path::{Path, PathBuf},
};

use puzzlecraft_core::Board;
use puzzlecraft_solver::{SlidingAlgorithm, solve_sliding_puzzle};

use crate::error::CliError;

/// Board solved when no file is given.
const DEFAULT_BOARD: &str = "
    AA....
    B..CCC
    BRR...
    DD.E..
    ...EFF
    ......
";

#[derive(Debug, clap::Args)]
pub(crate) struct TrafficArgs {
    /// Board file: one line per row, `.` for empty cells, `R` for the target
    /// car and any other letter for a car. A built-in board is used if omitted.
    #[arg(value_name = "FILE")]
    board: Option<PathBuf>,

    /// Search algorithm (A*, BFS, DFS).
    #[arg(short, long, value_name = "ALGORITHM", default_value = "A*")]
    algorithm: SlidingAlgorithm,
}

fn load_board(path: Option<&Path>) -> Result<Board, CliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadBoard {
            path: path.to_path_buf(),
            source,
        })?,
        None => DEFAULT_BOARD.to_owned(),
    };
    Ok(text.parse()?)
}

pub(crate) fn run(args: &TrafficArgs) -> Result<(), CliError> {
    let board = load_board(args.board.as_deref())?;
    let steps = solve_sliding_puzzle(&board, args.algorithm).ok_or(CliError::NoSolution)?;

    println!(
        "{} solved in {} moves",
        args.algorithm,
        steps.len().saturating_sub(1)
    );
    for (i, step) in steps.iter().enumerate() {
        println!();
        println!("Step {i}:");
        println!("{step}");
    }
    Ok(())
}
