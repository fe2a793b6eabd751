//! Error types for waypoint-llm

use thiserror::Error;

/// Advisor error type
///
/// The advisor operations themselves are total functions and never fail;
/// this covers the crate's fallible seams (preference snapshot parsing).
#[derive(Debug, Error)]
pub enum Error {
    /// Preference snapshot could not be parsed
    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
