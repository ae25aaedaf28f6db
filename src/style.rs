//! Default node styling.
//!
//! Nodes without an author-supplied style get one synthesised from their
//! centrality. Colour comes from a [`NodeColoring`] strategy picked once per
//! graph: datasets that tag nodes with a `club` (Zachary's karate club) are
//! coloured by faction, everything else gets a single colour.

use serde_json::Value;

use crate::graph::{Attributes, Graph};

pub const BASE_RADIUS: f64 = 6.0;
pub const MAX_RADIUS: f64 = 30.0;
pub const RADIUS_SCALE: f64 = 100.0;

pub const DEFAULT_NODE_COLOR: &str = "#8b5cf6";
pub const UNKNOWN_CLUB_COLOR: &str = "#a78bfa";
pub const DEFAULT_TEXT_COLOR: &str = "#f8fafc";
pub const DEFAULT_FONT_SIZE: &str = "12px";

/// Node attribute that switches on faction colouring.
pub const CLUB_ATTR: &str = "club";

const CLUB_COLORS: [(&str, &str); 2] = [("Mr. Hi", "#60a5fa"), ("Officer", "#f472b6")];

/// Style keys the renderer understands. Others are passed through untouched.
pub const STYLE_KEYS: [&str; 17] = [
    "color",
    "stroke_color",
    "stroke_width",
    "stroke_dash",
    "radius",
    "opacity",
    "text_color",
    "font_size",
    "font_weight",
    "text_outline",
    "glow",
    "icon",
    "icon_size",
    "icon_color",
    "label",
    "arrow",
    "dash",
];

pub fn is_recognized_key(key: &str) -> bool {
    STYLE_KEYS.contains(&key)
}

/// Keys of `style` the renderer does not know about, in map order
pub fn unrecognized_keys(style: &Attributes) -> Vec<&str> {
    style
        .keys()
        .map(String::as_str)
        .filter(|k| !is_recognized_key(k))
        .collect()
}

/// Radius grows linearly with centrality from 6 and is capped at 30.
pub fn default_radius(centrality: f64) -> f64 {
    (BASE_RADIUS + centrality * RADIUS_SCALE).min(MAX_RADIUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeColoring {
    Uniform,
    ClubLookup,
}

impl NodeColoring {
    pub fn for_graph(graph: &Graph) -> Self {
        if graph.any_node_has_attr(CLUB_ATTR) {
            NodeColoring::ClubLookup
        } else {
            NodeColoring::Uniform
        }
    }

    pub fn color_for(&self, attrs: &Attributes) -> &'static str {
        match self {
            NodeColoring::Uniform => DEFAULT_NODE_COLOR,
            NodeColoring::ClubLookup => attrs
                .get(CLUB_ATTR)
                .and_then(Value::as_str)
                .and_then(club_color)
                .unwrap_or(UNKNOWN_CLUB_COLOR),
        }
    }
}

fn club_color(club: &str) -> Option<&'static str> {
    CLUB_COLORS
        .iter()
        .find(|(name, _)| *name == club)
        .map(|(_, color)| *color)
}

pub fn synthesize_node_style(
    attrs: &Attributes,
    centrality: f64,
    coloring: NodeColoring,
) -> Attributes {
    let mut style = Attributes::new();
    style.insert("radius".into(), Value::from(default_radius(centrality)));
    style.insert("color".into(), Value::from(coloring.color_for(attrs)));
    style.insert("text_color".into(), Value::from(DEFAULT_TEXT_COLOR));
    style.insert("font_size".into(), Value::from(DEFAULT_FONT_SIZE));
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::attrs;
    use serde_json::json;

    #[test]
    fn test_default_radius_bounds() {
        assert_eq!(default_radius(0.0), 6.0);
        assert_eq!(default_radius(0.1), 16.0);
        assert_eq!(default_radius(0.24), 30.0);
        assert_eq!(default_radius(1.0), 30.0);

        let mut previous = default_radius(0.0);
        for step in 1..=100 {
            let r = default_radius(step as f64 / 100.0);
            assert!(r >= previous);
            assert!((BASE_RADIUS..=MAX_RADIUS).contains(&r));
            previous = r;
        }
    }

    #[test]
    fn test_coloring_strategy_selection() {
        let mut graph = Graph::new("g");
        graph.add_node("a", Attributes::new());
        assert_eq!(NodeColoring::for_graph(&graph), NodeColoring::Uniform);
        graph.add_node("b", attrs([("club", "Officer")]));
        assert_eq!(NodeColoring::for_graph(&graph), NodeColoring::ClubLookup);
    }

    #[test]
    fn test_club_lookup_colors() {
        let coloring = NodeColoring::ClubLookup;
        assert_eq!(coloring.color_for(&attrs([("club", "Mr. Hi")])), "#60a5fa");
        assert_eq!(coloring.color_for(&attrs([("club", "Officer")])), "#f472b6");
        assert_eq!(coloring.color_for(&attrs([("club", "Judo")])), UNKNOWN_CLUB_COLOR);
        assert_eq!(coloring.color_for(&attrs([("club", 3)])), UNKNOWN_CLUB_COLOR);
        assert_eq!(coloring.color_for(&Attributes::new()), UNKNOWN_CLUB_COLOR);
    }

    #[test]
    fn test_uniform_ignores_club() {
        let coloring = NodeColoring::Uniform;
        assert_eq!(coloring.color_for(&attrs([("club", "Mr. Hi")])), DEFAULT_NODE_COLOR);
    }

    #[test]
    fn test_synthesized_style_shape() {
        let style = synthesize_node_style(&Attributes::new(), 0.05, NodeColoring::Uniform);
        assert_eq!(
            serde_json::Value::Object(style),
            json!({
                "radius": 11.0,
                "color": "#8b5cf6",
                "text_color": "#f8fafc",
                "font_size": "12px",
            })
        );
    }

    #[test]
    fn test_unrecognized_keys() {
        let style = attrs([("color", json!("#fff")), ("shadow", json!(3)), ("glow", json!(true))]);
        assert_eq!(unrecognized_keys(&style), vec!["shadow"]);
    }
}
