//! Metric computation errors
//!
//! These are recovered at the metrics boundary and never reach a caller of
//! the render pipeline.

use thiserror::Error;

/// Centrality computation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// The algorithm produced NaN or an infinite score
    #[error("Centrality for node '{node}' is not finite: {value}")]
    NonFinite {
        /// Node whose score is invalid
        node: String,
        /// Offending value
        value: f64,
    },

    /// The graph has no nodes to score
    #[error("Cannot compute centrality of an empty graph")]
    EmptyGraph,
}

impl MetricError {
    /// Check whether this error stems from numerical breakdown
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::NonFinite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MetricError::NonFinite {
            node: "7".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Centrality for node '7' is not finite: inf");
        assert!(err.is_numerical());
        assert!(!MetricError::EmptyGraph.is_numerical());
    }
}
