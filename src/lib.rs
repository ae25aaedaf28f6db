pub mod common;
pub mod config;
pub mod errors;
pub mod export;
pub mod generators;
pub mod graph;
pub mod metrics;
pub mod pipeline;
pub mod registry;
pub mod render_model;
pub mod sink;
pub mod style;

pub use graph::{Attributes, Graph};
pub use metrics::{compute_metrics, Metrics};
pub use pipeline::{render_graph, RenderOptions, RenderService};
pub use registry::GraphRegistry;
pub use render_model::{build_render_model, RenderLink, RenderModel, RenderNode};
