//! Error types for the arithmetic engine
//!
//! Arithmetic itself follows each kind's native failure semantics (integer
//! division by zero is fatal, float division by zero yields an infinity),
//! so the recoverable surface is limited to parsing.

use thiserror::Error;

/// Error type for the fallible surfaces of this crate
#[derive(Error, Debug)]
pub enum Error {
    /// A string did not name any operation category
    #[error("unknown operation category: {0}")]
    UnknownOperation(String),

    /// A string could not be read as a numeric value
    #[error("cannot interpret {0:?} as a numeric value")]
    InvalidNumber(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
