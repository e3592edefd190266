//! Error type for parsing core values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid orientation {0:?}: expected one of N, E, S, W")]
    InvalidOrientation(String),
}

/// Shorthand result type for `mr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
