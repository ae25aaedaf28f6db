use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Free-form per-node / per-edge attribute map. Keys keep insertion order.
pub type Attributes = Map<String, Value>;

/// Attribute key holding an author-supplied style sub-map.
pub const STYLE_ATTR: &str = "extra_style";

/// Attribute key holding author-supplied domain metadata.
pub const DATA_ATTR: &str = "extra_data";

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub name: String,
    pub directed: bool,
    nodes: IndexMap<String, Attributes>,
    edges: Vec<Edge>,
    #[serde(skip)]
    edge_index: HashMap<(String, String), usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub attrs: Attributes,
}

impl Graph {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn new_directed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            directed: true,
            ..Default::default()
        }
    }

    // Undirected edges are stored under a single, order-independent key
    fn edge_key(&self, u: &str, v: &str) -> (String, String) {
        if self.directed || u <= v {
            (u.to_string(), v.to_string())
        } else {
            (v.to_string(), u.to_string())
        }
    }

    /// Add a node, merging `attrs` over any attributes it already has.
    pub fn add_node(&mut self, id: impl Into<String>, attrs: Attributes) {
        let id = id.into();
        match self.nodes.get_mut(&id) {
            Some(existing) => existing.extend(attrs),
            None => {
                self.nodes.insert(id, attrs);
            }
        }
    }

    /// Add an edge, creating missing endpoints. Re-adding an existing edge
    /// merges its attributes instead of creating a parallel edge.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, attrs: Attributes) {
        let (u, v) = (u.into(), v.into());
        for id in [&u, &v] {
            if !self.nodes.contains_key(id.as_str()) {
                self.nodes.insert(id.clone(), Attributes::new());
            }
        }

        let key = self.edge_key(&u, &v);
        if let Some(&idx) = self.edge_index.get(&key) {
            debug!("Merging attributes into existing edge {} -> {}", u, v);
            self.edges[idx].attrs.extend(attrs);
            return;
        }

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(Edge {
            source: u,
            target: v,
            attrs,
        });
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_index.contains_key(&self.edge_key(u, v))
    }

    pub fn node_attrs(&self, id: &str) -> Option<&Attributes> {
        self.nodes.get(id)
    }

    /// Nodes with their attributes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Attributes)> {
        self.nodes.iter().map(|(id, attrs)| (id.as_str(), attrs))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of a node in insertion order
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Adjacency lists indexed by node position. Directed graphs only
    /// follow edges forward.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            let (Some(s), Some(t)) = (
                self.nodes.get_index_of(&edge.source),
                self.nodes.get_index_of(&edge.target),
            ) else {
                continue;
            };
            adjacency[s].push(t);
            if !self.directed && s != t {
                adjacency[t].push(s);
            }
        }
        adjacency
    }

    /// Successors of a node (all neighbours for undirected graphs)
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.source == id {
                    Some(e.target.as_str())
                } else if !self.directed && e.target == id {
                    Some(e.source.as_str())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Number of incident edge endpoints; a self-loop counts twice and
    /// directed graphs sum in- and out-degree.
    pub fn degree(&self, id: &str) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.source == id) + usize::from(e.target == id))
            .sum()
    }

    pub fn degrees(&self) -> HashMap<String, usize> {
        let mut degrees: HashMap<String, usize> =
            self.nodes.keys().map(|id| (id.clone(), 0)).collect();
        for edge in &self.edges {
            for id in [&edge.source, &edge.target] {
                if let Some(d) = degrees.get_mut(id) {
                    *d += 1;
                }
            }
        }
        degrees
    }

    /// Whether any node carries `key` in its attribute map
    pub fn any_node_has_attr(&self, key: &str) -> bool {
        self.nodes.values().any(|attrs| attrs.contains_key(key))
    }

    pub fn stats(&self) -> String {
        format!(
            "Graph '{}' ({}): Nodes: {}, Edges: {}",
            self.name,
            if self.directed { "directed" } else { "undirected" },
            self.nodes.len(),
            self.edges.len()
        )
    }
}

/// Build an attribute map from `(key, value)` pairs.
pub fn attrs<K, V, I>(pairs: I) -> Attributes
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
