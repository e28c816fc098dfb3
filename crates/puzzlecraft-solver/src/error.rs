/// Errors raised for invalid solver configuration.
///
/// Running out of search space is never an error: searches report it as an
/// empty path or `None`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The requested algorithm name is not recognised.
    #[display("unknown algorithm: {name:?}")]
    UnknownAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
}
