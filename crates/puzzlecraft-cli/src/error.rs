use std::{io, path::PathBuf};

use puzzlecraft_core::{BoardError, CodeError};
use puzzlecraft_generator::GeneratorError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("invalid maze configuration: {_0}")]
    Generator(#[from] GeneratorError),
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
    #[display("invalid code: {_0}")]
    Code(#[from] CodeError),
    #[display("failed to read {}: {source}", path.display())]
    ReadBoard { path: PathBuf, source: io::Error },
    #[display("no solution found")]
    NoSolution,
}

impl CliError {
    /// Returns the process exit status for this error.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::NoSolution => 1,
            Self::Generator(_) | Self::Board(_) | Self::Code(_) | Self::ReadBoard { .. } => 2,
        }
    }
}
