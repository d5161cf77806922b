//! Error types for the gridplace crates.

use thiserror::Error;

/// Errors produced by layout generation.
///
/// Both variants are caller-input errors: the generator is synchronous and
/// deterministic, so nothing here is transient or retryable. No partial
/// result accompanies an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The region is absent, empty, or otherwise not a usable planar area.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// A spacing value is non-positive or non-finite.
    #[error("invalid spacing: {0}")]
    InvalidSpacing(String),
}

/// Convenience result alias used throughout the gridplace crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSpacing("spacing.x must be strictly positive, got 0".into());
        assert!(err.to_string().contains("invalid spacing"));

        let err = Error::InvalidRegion("region must have at least 3 vertices".into());
        assert!(err.to_string().starts_with("invalid region"));
    }
}
