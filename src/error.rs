use thiserror::Error;

/// Error type for the commitment scheme.
///
/// A non-matching response is not an error: verification surfaces it
/// as `false`. These variants cover degenerate inputs, bad
/// configuration and environment failures only.
#[derive(Error, Debug, Clone)]
pub enum CommitError {
    /// Empty secret or empty salt; hashing a degenerate input would
    /// weaken the commitment.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scheme parameters that make an operation impossible.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The OS secure random generator failed. Fatal: a weak salt is
    /// never substituted.
    #[error("Randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// Failure on the line-based text interface.
    #[error("I/O error: {0}")]
    Io(String),
}
