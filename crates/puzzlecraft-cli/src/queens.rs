use puzzlecraft_solver::{all_n_queens, solve_n_queens};

use crate::error::CliError;

#[derive(Debug, clap::Args)]
pub(crate) struct QueensArgs {
    /// Board size and number of queens.
    #[arg(value_name = "N", default_value_t = 8)]
    n: usize,

    /// Count every placement instead of showing the first one.
    #[arg(long)]
    all: bool,
}

pub(crate) fn run(args: &QueensArgs) -> Result<(), CliError> {
    if args.all {
        let placements = all_n_queens(args.n);
        println!("{} placements of {} queens", placements.len(), args.n);
        for placement in &placements {
            println!("  {placement:?}");
        }
        return if placements.is_empty() {
            Err(CliError::NoSolution)
        } else {
            Ok(())
        };
    }

    let placement = solve_n_queens(args.n).ok_or(CliError::NoSolution)?;
    println!("Placement:");
    println!("  {placement:?}");
    println!();
    print!("{}", render(&placement));
    Ok(())
}

/// Draws a placement with `Q` for queens and `.` for empty squares.
fn render(placement: &[usize]) -> String {
    let n = placement.len();
    let mut out = String::new();
    for &col in placement {
        for c in 0..n {
            out.push(if c == col { 'Q' } else { '.' });
        }
        out.push('\n');
    }
    out
}
