//! Properties of the render model across the built-in graphs
//!
//! Covers node/link counts, the always-present centrality and degree
//! fields, authoritative styles, club colouring and radius bounds.

use netviz::graph::{attrs, Attributes, Graph, DATA_ATTR, STYLE_ATTR};
use netviz::metrics::{compute_metrics, Betweenness, FALLBACK_CENTRALITY};
use netviz::style::{DEFAULT_NODE_COLOR, MAX_RADIUS, BASE_RADIUS, UNKNOWN_CLUB_COLOR};
use netviz::{build_render_model, render_graph, GraphRegistry, RenderOptions};
use serde_json::{json, Value};

fn all_graphs() -> Vec<Graph> {
    let registry = GraphRegistry::default();
    registry
        .names()
        .into_iter()
        .map(|name| registry.build(name).expect("builtin graph to build"))
        .collect()
}

#[test]
fn every_node_and_edge_is_rendered_once() {
    for graph in all_graphs() {
        let model = render_graph(&graph, &RenderOptions::default());
        assert_eq!(model.nodes.len(), graph.node_count(), "{}", graph.name);
        assert_eq!(model.links.len(), graph.edge_count(), "{}", graph.name);

        let ids: Vec<&str> = model.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, graph.node_ids().collect::<Vec<_>>());

        for (link, edge) in model.links.iter().zip(graph.edges()) {
            assert_eq!(link.source, edge.source);
            assert_eq!(link.target, edge.target);
            assert_eq!(link.value, 1);
        }
        assert!(model.nodes.iter().all(|n| n.group == 1));
    }
}

#[test]
fn centrality_and_degree_are_always_numeric() {
    for graph in all_graphs() {
        let model = render_graph(&graph, &RenderOptions::default());
        for node in &model.nodes {
            assert!(node.data["centrality"].is_number(), "{}", node.id);
            assert!(node.data["degree"].is_u64(), "{}", node.id);
        }
    }
}

#[test]
fn degree_matches_graph() {
    let graph = GraphRegistry::default().build("karate").unwrap();
    let model = render_graph(&graph, &RenderOptions::default());
    assert_eq!(model.get_node("0").unwrap().data["degree"], json!(16));
    assert_eq!(model.get_node("33").unwrap().data["degree"], json!(17));
}

#[test]
fn authored_styles_are_copied_exactly() {
    let graph = GraphRegistry::default().build("school").unwrap();
    let model = render_graph(&graph, &RenderOptions::default());

    for (node, (_, attrs)) in model.nodes.iter().zip(graph.nodes()) {
        assert_eq!(Value::Object(node.style.clone()), attrs[STYLE_ATTR]);
        let keys: Vec<&String> = node.style.keys().collect();
        let source_keys: Vec<&String> = attrs[STYLE_ATTR].as_object().unwrap().keys().collect();
        assert_eq!(keys, source_keys);
    }
    for (link, edge) in model.links.iter().zip(graph.edges()) {
        assert_eq!(
            link.style.clone().map(Value::Object),
            Some(edge.attrs[STYLE_ATTR].clone())
        );
    }

    let snape = model.get_node("Prof. Snape").unwrap();
    assert_eq!(snape.data["role"], json!("Teacher"));
    assert!(snape.data.contains_key("centrality"));
}

#[test]
fn graphs_without_clubs_are_purple() {
    for name in ["small_world", "scale_free", "tree", "random"] {
        let graph = GraphRegistry::default().build(name).unwrap();
        let model = render_graph(&graph, &RenderOptions::default());
        assert!(model
            .nodes
            .iter()
            .all(|n| n.style["color"] == json!(DEFAULT_NODE_COLOR)));
    }
}

#[test]
fn karate_nodes_follow_club_table() {
    let graph = GraphRegistry::default().build("karate").unwrap();
    let model = render_graph(&graph, &RenderOptions::default());
    for (node, (_, attrs)) in model.nodes.iter().zip(graph.nodes()) {
        let expected = match attrs["club"].as_str() {
            Some("Mr. Hi") => "#60a5fa",
            Some("Officer") => "#f472b6",
            _ => unreachable!(),
        };
        assert_eq!(node.style["color"], json!(expected));
    }
}

#[test]
fn one_club_node_switches_whole_graph_to_lookup() {
    let mut graph = Graph::new("mixed");
    graph.add_node("a", attrs([("club", "Chess")]));
    graph.add_node("b", Attributes::new());
    graph.add_node("c", attrs([("club", "Mr. Hi")]));
    let model = render_graph(&graph, &RenderOptions::default());
    assert_eq!(model.nodes[0].style["color"], json!(UNKNOWN_CLUB_COLOR));
    assert_eq!(model.nodes[1].style["color"], json!(UNKNOWN_CLUB_COLOR));
    assert_eq!(model.nodes[2].style["color"], json!("#60a5fa"));
}

#[test]
fn synthesized_radius_tracks_centrality_within_bounds() {
    let graph = GraphRegistry::default().build("karate").unwrap();
    let metrics = compute_metrics(&graph, &Betweenness);
    let model = build_render_model(&graph, &metrics);

    let mut pairs: Vec<(f64, f64)> = model
        .nodes
        .iter()
        .map(|n| (metrics.centrality_of(&n.id), n.style["radius"].as_f64().unwrap()))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    for window in pairs.windows(2) {
        assert!(window[0].1 <= window[1].1);
    }
    for (_, radius) in &pairs {
        assert!((BASE_RADIUS..=MAX_RADIUS).contains(radius));
    }
    // The two leaders are the most central members and hit the cap
    assert_eq!(model.get_node("0").unwrap().style["radius"], json!(30.0));
    assert_eq!(model.get_node("33").unwrap().style["radius"], json!(30.0));
}

#[test]
fn edges_without_style_omit_the_field() {
    let graph = GraphRegistry::default().build("tree").unwrap();
    let model = render_graph(&graph, &RenderOptions::default());
    let json = serde_json::to_value(&model).unwrap();
    for link in json["links"].as_array().unwrap() {
        assert!(link.get("extra_style").is_none());
    }
}

#[test]
fn empty_graph_renders_empty_model() {
    let model = render_graph(&Graph::new("empty"), &RenderOptions::default());
    assert_eq!(
        serde_json::to_value(&model).unwrap(),
        json!({"nodes": [], "links": []})
    );
}

#[test]
fn isolated_nodes_get_zero_metrics() {
    let mut graph = Graph::new("isolated");
    graph.add_node("alone", attrs([(DATA_ATTR, json!({"kind": "hermit"}))]));
    let model = render_graph(&graph, &RenderOptions::default());
    assert_eq!(
        Value::Object(model.nodes[0].data.clone()),
        json!({"kind": "hermit", "centrality": 0.0, "degree": 0})
    );
}

#[test]
fn output_is_deterministic() {
    let first = serde_json::to_string(&render_graph(
        &GraphRegistry::default().build("scale_free").unwrap(),
        &RenderOptions::default(),
    ))
    .unwrap();
    let second = serde_json::to_string(&render_graph(
        &GraphRegistry::default().build("scale_free").unwrap(),
        &RenderOptions::default(),
    ))
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn fallback_centrality_reaches_the_model() {
    struct AlwaysFails;

    impl netviz::metrics::CentralityProvider for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }

        fn centrality(
            &self,
            _graph: &Graph,
        ) -> netviz::errors::MetricResult<std::collections::HashMap<String, f64>> {
            Err(netviz::errors::MetricError::EmptyGraph)
        }
    }

    let graph = GraphRegistry::default().build("karate").unwrap();
    let model = build_render_model(&graph, &compute_metrics(&graph, &AlwaysFails));
    assert_eq!(model.nodes.len(), 34);
    assert_eq!(model.links.len(), 78);
    for node in &model.nodes {
        assert_eq!(node.data["centrality"], json!(FALLBACK_CENTRALITY));
        // 6 + 0.1 * 100
        assert_eq!(node.style["radius"], json!(16.0));
    }
}

#[test]
fn nan_scores_fall_back_before_reaching_the_model() {
    struct NanScores;

    impl netviz::metrics::CentralityProvider for NanScores {
        fn name(&self) -> &'static str {
            "nan"
        }

        fn centrality(
            &self,
            graph: &Graph,
        ) -> netviz::errors::MetricResult<std::collections::HashMap<String, f64>> {
            Ok(graph.node_ids().map(|id| (id.to_string(), f64::NAN)).collect())
        }
    }

    let graph = GraphRegistry::default().build("tree").unwrap();
    let model = build_render_model(&graph, &compute_metrics(&graph, &NanScores));
    for node in &model.nodes {
        assert!(node.data["centrality"].is_number(), "{}", node.id);
        assert_eq!(node.data["centrality"], json!(FALLBACK_CENTRALITY));
        assert_eq!(node.style["radius"], json!(16.0));
    }
}
