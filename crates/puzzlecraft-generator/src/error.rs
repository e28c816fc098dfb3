/// Errors raised for invalid generator configuration.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested maze shape name is not recognised.
    #[display("unknown maze shape: {name:?}")]
    UnknownMazeShape {
        /// The name that failed to parse.
        name: String,
    },
    /// The requested maze type name is not recognised.
    #[display("unknown maze type: {name:?}")]
    UnknownMazeType {
        /// The name that failed to parse.
        name: String,
    },
    /// A probability setting is outside the range that lets generation
    /// terminate.
    #[display("{setting} = {value} is outside {range}")]
    InvalidProbability {
        /// The configuration field.
        setting: &'static str,
        /// The rejected value.
        value: f64,
        /// The accepted range.
        range: &'static str,
    },
    /// The layer count for 3D mazes is zero.
    #[display("3D maze depth must be at least 1")]
    ZeroDepth,
}
