//! Graph to render-model transform.
//!
//! The render model is the `nodes` / `links` document consumed by the
//! force-directed renderer:
//!
//! ```text
//! { "nodes": [ { "id", "group": 1, "extra_style": {..}, "extra_data": {..} } ],
//!   "links": [ { "source", "target", "value": 1, "extra_style"?: {..} } ] }
//! ```
//!
//! Author-supplied `extra_style` maps are authoritative and copied verbatim.
//! Nodes without one get a style derived from their centrality, and every
//! node's `extra_data` is guaranteed to carry `centrality` and `degree`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::graph::{Attributes, Graph, DATA_ATTR, STYLE_ATTR};
use crate::metrics::Metrics;
use crate::style::{self, NodeColoring};

pub const NODE_GROUP: u32 = 1;
pub const LINK_VALUE: u32 = 1;

/// Decimal places kept for `extra_data.centrality`.
pub const CENTRALITY_DECIMALS: i32 = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderNode {
    pub id: String,
    pub group: u32,
    #[serde(rename = "extra_style")]
    pub style: Attributes,
    #[serde(rename = "extra_data")]
    pub data: Attributes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLink {
    pub source: String,
    pub target: String,
    pub value: u32,
    #[serde(
        rename = "extra_style",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<Attributes>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RenderModel {
    pub nodes: Vec<RenderNode>,
    pub links: Vec<RenderLink>,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn get_node(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn to_json_value(&self) -> Value {
        serde_json::json!(self)
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Object-valued attribute, or `None` (with a warning) for any other shape.
fn sub_map<'a>(attrs: &'a Attributes, key: &str, owner: &str) -> Option<&'a Attributes> {
    match attrs.get(key)? {
        Value::Object(map) => Some(map),
        other => {
            warn!("Ignoring non-object {} on {}: {}", key, owner, other);
            None
        }
    }
}

/// Build the render model for `graph`. Never fails and never mutates the
/// graph; node and edge order follow the graph's insertion order.
///
/// Only object-valued `extra_style` attributes are copied verbatim. A node
/// whose `extra_style` is any other JSON value gets a synthesized style, and
/// an edge with one is rendered without `extra_style`.
pub fn build_render_model(graph: &Graph, metrics: &Metrics) -> RenderModel {
    let coloring = NodeColoring::for_graph(graph);
    debug!(
        "Building render model for {} with {:?} colouring",
        graph.stats(),
        coloring
    );

    let nodes = graph
        .nodes()
        .map(|(id, attrs)| build_node(id, attrs, metrics, coloring))
        .collect();

    let links = graph
        .edges()
        .map(|edge| {
            let owner = format!("edge {} -> {}", edge.source, edge.target);
            RenderLink {
                source: edge.source.clone(),
                target: edge.target.clone(),
                value: LINK_VALUE,
                style: sub_map(&edge.attrs, STYLE_ATTR, &owner).cloned(),
            }
        })
        .collect();

    RenderModel { nodes, links }
}

fn build_node(
    id: &str,
    attrs: &Attributes,
    metrics: &Metrics,
    coloring: NodeColoring,
) -> RenderNode {
    let centrality = metrics.centrality_of(id);
    let owner = format!("node {}", id);

    let style = match sub_map(attrs, STYLE_ATTR, &owner) {
        Some(style) => {
            let unknown = style::unrecognized_keys(style);
            if !unknown.is_empty() {
                debug!(
                    "Passing through unrecognised style keys on {}: {:?}",
                    owner, unknown
                );
            }
            style.clone()
        }
        None => style::synthesize_node_style(attrs, centrality, coloring),
    };

    let mut data = sub_map(attrs, DATA_ATTR, &owner).cloned().unwrap_or_default();
    data.entry("centrality")
        .or_insert_with(|| Value::from(round_to(centrality, CENTRALITY_DECIMALS)));
    data.entry("degree")
        .or_insert_with(|| Value::from(metrics.degree_of(id)));

    RenderNode {
        id: id.to_string(),
        group: NODE_GROUP,
        style,
        data,
    }
}
