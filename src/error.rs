use std::fmt;

/// The generator's failure taxonomy. Internal solver plumbing surfaces
/// these as plain `bool`/`Result<(), GenerationError>`; only
/// [`crate::generator::try_generate`] hands the caller the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Out-of-range `k`, an out-of-bounds position, or a value outside
    /// `0..=n`.
    InvalidArgument(String),
    /// AC-3 drove some domain empty, or `is_safe` refused every candidate.
    Inconsistent,
    /// The completion engine's wall-clock budget expired.
    TimedOut,
    /// The completion engine's recursion-depth bound was exceeded.
    DepthExceeded,
    /// `generate` exhausted `max_attempts` without producing a puzzle.
    GenerationFailure,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            GenerationError::Inconsistent => write!(f, "constraint network is inconsistent"),
            GenerationError::TimedOut => write!(f, "completion engine timed out"),
            GenerationError::DepthExceeded => write!(f, "completion engine exceeded its depth bound"),
            GenerationError::GenerationFailure => {
                write!(f, "generation failed after exhausting max_attempts")
            }
        }
    }
}

impl std::error::Error for GenerationError {}
