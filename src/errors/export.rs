//! Export errors

use thiserror::Error;

/// Errors raised while turning a render model into output text
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialisation failed
    #[error("Failed to serialise render model: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Template rendering failed
    #[error("Failed to render template: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Writing the output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert_eq!(err.to_string(), "Failed to write output: denied");
    }
}
