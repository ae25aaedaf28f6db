//! Domain-specific error types for netviz
//!
//! # Error Categories
//!
//! - **MetricError**: centrality computation on degenerate input
//! - **GeneratorError**: invalid parameters passed to a graph generator
//! - **ExportError**: serialising a render model to JSON or HTML
//! - **ConfigError**: reading, parsing and writing configuration files
//!
//! Metric failures never leave the metrics boundary: they are replaced by a
//! uniform fallback score. Everything else reaching the request boundary is
//! wrapped in an `anyhow::Error` and reported as a single message.
//!
//! # Examples
//!
//! ```rust
//! use netviz::errors::{MetricError, MetricResult};
//!
//! fn check(score: f64) -> MetricResult<f64> {
//!     if !score.is_finite() {
//!         return Err(MetricError::NonFinite { node: "a".to_string(), value: score });
//!     }
//!     Ok(score)
//! }
//!
//! assert!(check(f64::NAN).is_err());
//! ```

pub mod config;
pub mod export;
pub mod generator;
pub mod metric;

pub use config::ConfigError;
pub use export::ExportError;
pub use generator::GeneratorError;
pub use metric::MetricError;

/// Result type alias for metric computations
pub type MetricResult<T> = Result<T, MetricError>;

/// Result type alias for graph generators
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Result type alias for exporters
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type alias for configuration handling
pub type ConfigResult<T> = Result<T, ConfigError>;
