use puzzlecraft_core::Code;
use puzzlecraft_generator::MazeSeed;
use puzzlecraft_solver::{random_secret, run_guesser};

use crate::{error::CliError, seed::parse_seed};

#[derive(Debug, clap::Args)]
pub(crate) struct CodebreakerArgs {
    /// Number of distinct digits in a random secret.
    #[arg(long, value_name = "LENGTH", default_value_t = 4, conflicts_with = "secret")]
    length: usize,

    /// Secret to break instead of a random one, e.g. `0123`.
    #[arg(long, value_name = "DIGITS")]
    secret: Option<Code>,

    /// Give up after this many guesses.
    #[arg(long, value_name = "COUNT")]
    max_attempts: Option<usize>,

    /// Seed for the secret and the guesses, as hex or a phrase.
    #[arg(long, value_name = "SEED", value_parser = parse_seed)]
    seed: Option<MazeSeed>,
}

pub(crate) fn run(args: &CodebreakerArgs) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(MazeSeed::random);
    let mut rng = seed.rng();
    let secret = match args.secret {
        Some(secret) => secret,
        None => random_secret(args.length, &mut rng)?,
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    let outcome = run_guesser(&secret, args.max_attempts, &mut rng);
    for (i, attempt) in outcome.attempts.iter().enumerate() {
        println!("{:>3}. {}  {}", i + 1, attempt.guess, attempt.feedback);
    }
    println!();

    let found = outcome.found.ok_or(CliError::NoSolution)?;
    println!("Found {found} in {} guesses", outcome.attempt_count());
    Ok(())
}
