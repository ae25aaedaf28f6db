//! Graph generator errors

use thiserror::Error;

/// Errors raised by the built-in graph generators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Parameters outside the generator's domain
    #[error("Invalid parameters for {generator}: {reason}")]
    InvalidParameters {
        /// Generator name
        generator: &'static str,
        /// Human readable reason
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneratorError::InvalidParameters {
            generator: "watts_strogatz",
            reason: "k must not exceed n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameters for watts_strogatz: k must not exceed n"
        );
    }
}
