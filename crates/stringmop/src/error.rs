//! Error types for option validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StringMopError {
    #[error("score cutoff must be a finite number in [0, 100], got {0}")]
    InvalidScoreCutoff(f64),
}

pub type Result<T> = std::result::Result<T, StringMopError>;
