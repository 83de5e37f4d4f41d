//! Error types for the helper crate

use thiserror::Error;

/// Error type for the fallible helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A packed julian date string could not be read
    #[error("invalid julian date: {0:?}")]
    InvalidJulianDate(String),

    /// Other errors
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidJulianDate("20x3004".to_string());
        assert_eq!(err.to_string(), "invalid julian date: \"20x3004\"");
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(err.to_string().contains("custom error message"));
    }
}
