//! Error types for strokematch.

use thiserror::Error;

/// Result alias for strokematch operations.
pub type StrokeMatchResult<T> = std::result::Result<T, StrokeMatchError>;

/// Errors that can occur when normalizing or recognizing gestures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrokeMatchError {
    /// The raw gesture is too short to define a path for resampling.
    #[error("too few points to resample: got {got}, need at least 2")]
    TooFewPoints {
        /// Number of raw points supplied.
        got: usize,
    },
}
