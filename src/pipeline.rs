//! Request boundary: selection name in, rendered output out.
//!
//! Every failure past this point is turned into one [`PipelineFailure`],
//! handed to the configured [`ErrorReporter`] and returned. Metric failures
//! never get this far; they are absorbed by [`compute_metrics`].

use anyhow::{Context, Result};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{error, info};

use crate::graph::Graph;
use crate::metrics::{compute_metrics, CentralityKind};
use crate::registry::GraphRegistry;
use crate::render_model::{build_render_model, RenderModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub centrality: CentralityKind,
}

/// Metrics plus render-model build for one graph snapshot.
pub fn render_graph(graph: &Graph, options: &RenderOptions) -> RenderModel {
    let provider = options.centrality.provider();
    let metrics = compute_metrics(graph, provider.as_ref());
    build_render_model(graph, &metrics)
}

/// Host rendering entry point receiving the finished model.
pub trait RenderSink {
    fn render(&mut self, model: &RenderModel) -> Result<()>;
}

/// Host channel for failures that could not be recovered locally.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, failure: &PipelineFailure);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, failure: &PipelineFailure) {
        error!("Error rendering graph: {}", failure.message);
    }
}

/// A failed render request, formatted once with its whole cause chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineFailure {
    pub message: String,
}

impl PipelineFailure {
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self {
            message: format!("{:?}", err),
        }
    }
}

impl fmt::Display for PipelineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PipelineFailure {}

/// Serialises render requests: a request that arrives while another is
/// running waits for it to finish, so two renders never race on a sink.
pub struct RenderService {
    registry: GraphRegistry,
    options: RenderOptions,
    reporter: Box<dyn ErrorReporter>,
    in_flight: Mutex<()>,
}

impl RenderService {
    pub fn new(registry: GraphRegistry, options: RenderOptions) -> Self {
        Self {
            registry,
            options,
            reporter: Box::new(TracingReporter),
            in_flight: Mutex::new(()),
        }
    }

    pub fn with_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn registry(&self) -> &GraphRegistry {
        &self.registry
    }

    pub fn render_by_name(
        &self,
        name: &str,
        sink: &mut dyn RenderSink,
    ) -> Result<RenderModel, PipelineFailure> {
        // The guard protects no data, so a panic in an earlier request
        // leaves nothing inconsistent behind.
        let _guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        self.try_render(name, sink).map_err(|err| {
            let failure = PipelineFailure::from_error(&err);
            self.reporter.report(&failure);
            failure
        })
    }

    fn try_render(&self, name: &str, sink: &mut dyn RenderSink) -> Result<RenderModel> {
        let graph = self
            .registry
            .build(name)
            .with_context(|| format!("Failed to build graph '{}'", name))?;

        let model = render_graph(&graph, &self.options);
        info!(
            "Render model ready: {} nodes, {} links",
            model.nodes.len(),
            model.links.len()
        );

        sink.render(&model)
            .with_context(|| format!("Failed to render graph '{}'", graph.name))?;
        Ok(model)
    }
}
