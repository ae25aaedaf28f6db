use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};

use crate::errors::{MetricError, MetricResult};
use crate::graph::Graph;

/// Centrality assigned to every node when the centrality algorithm fails.
pub const FALLBACK_CENTRALITY: f64 = 0.1;

/// Per-node metrics consumed by the render-model builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub centrality: HashMap<String, f64>,
    pub degree: HashMap<String, usize>,
}

impl Metrics {
    pub fn centrality_of(&self, node: &str) -> f64 {
        self.centrality.get(node).copied().unwrap_or(0.0)
    }

    pub fn degree_of(&self, node: &str) -> usize {
        self.degree.get(node).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CentralityKind {
    #[default]
    Betweenness,
    Degree,
}

impl CentralityKind {
    pub fn provider(self) -> Box<dyn CentralityProvider> {
        match self {
            CentralityKind::Betweenness => Box::new(Betweenness),
            CentralityKind::Degree => Box::new(DegreeCentrality),
        }
    }
}

/// Source of normalised [0,1] centrality scores
pub trait CentralityProvider {
    fn name(&self) -> &'static str;
    fn centrality(&self, graph: &Graph) -> MetricResult<HashMap<String, f64>>;
}

/// Shortest-path betweenness (Brandes), normalised by `1 / ((n-1)(n-2))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Betweenness;

impl CentralityProvider for Betweenness {
    fn name(&self) -> &'static str {
        "betweenness"
    }

    fn centrality(&self, graph: &Graph) -> MetricResult<HashMap<String, f64>> {
        if graph.is_empty() {
            return Err(MetricError::EmptyGraph);
        }

        let adjacency = graph.adjacency();
        let n = adjacency.len();
        let mut betweenness = vec![0.0; n];

        for s in 0..n {
            let mut stack = Vec::with_capacity(n);
            let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut sigma = vec![0.0_f64; n];
            let mut dist = vec![-1_i64; n];
            sigma[s] = 1.0;
            dist[s] = 0;

            let mut queue = VecDeque::new();
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                stack.push(v);
                for &w in &adjacency[v] {
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            let mut delta = vec![0.0; n];
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != s {
                    betweenness[w] += delta[w];
                }
            }
        }

        // Undirected pairs are visited from both ends, which the shared
        // normalisation factor already accounts for.
        if n > 2 {
            let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
            for score in &mut betweenness {
                *score *= scale;
            }
        }

        collect_scores(graph, betweenness)
    }
}

/// Degree over the maximum possible degree `n - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeCentrality;

impl CentralityProvider for DegreeCentrality {
    fn name(&self) -> &'static str {
        "degree"
    }

    fn centrality(&self, graph: &Graph) -> MetricResult<HashMap<String, f64>> {
        if graph.is_empty() {
            return Err(MetricError::EmptyGraph);
        }

        let n = graph.node_count();
        let degrees = graph.degrees();
        let scores = graph
            .node_ids()
            .map(|id| {
                if n <= 1 {
                    0.0
                } else {
                    degrees.get(id).copied().unwrap_or(0) as f64 / (n - 1) as f64
                }
            })
            .collect();

        collect_scores(graph, scores)
    }
}

fn collect_scores(graph: &Graph, scores: Vec<f64>) -> MetricResult<HashMap<String, f64>> {
    graph
        .node_ids()
        .zip(scores)
        .map(|(id, value)| {
            if value.is_finite() {
                Ok((id.to_string(), value))
            } else {
                Err(MetricError::NonFinite {
                    node: id.to_string(),
                    value,
                })
            }
        })
        .collect()
}

/// Reject a score map holding NaN or infinite values.
fn ensure_finite(scores: HashMap<String, f64>) -> MetricResult<HashMap<String, f64>> {
    if let Some((node, &value)) = scores.iter().find(|(_, value)| !value.is_finite()) {
        return Err(MetricError::NonFinite {
            node: node.clone(),
            value,
        });
    }
    Ok(scores)
}

/// Compute the metrics bundle for a graph.
///
/// Centrality failures are absorbed here: every node receives
/// [`FALLBACK_CENTRALITY`] instead. A provider returning any non-finite
/// score counts as a failure. Degrees always come from the graph.
pub fn compute_metrics(graph: &Graph, provider: &dyn CentralityProvider) -> Metrics {
    if graph.is_empty() {
        debug!("Graph '{}' is empty, skipping metrics", graph.name);
        return Metrics::default();
    }

    let centrality = match provider.centrality(graph).and_then(ensure_finite) {
        Ok(centrality) => {
            info!(
                "Computed {} centrality for {} nodes",
                provider.name(),
                centrality.len()
            );
            centrality
        }
        Err(e) => {
            warn!(
                "{} centrality failed for '{}', using fallback {}: {}",
                provider.name(),
                graph.name,
                FALLBACK_CENTRALITY,
                e
            );
            graph
                .node_ids()
                .map(|id| (id.to_string(), FALLBACK_CENTRALITY))
                .collect()
        }
    };

    Metrics {
        centrality,
        degree: graph.degrees(),
    }
}
