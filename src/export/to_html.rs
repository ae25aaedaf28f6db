use serde_json::json;

use crate::errors::ExportResult;
use crate::render_model::RenderModel;

/// Standalone page that hands the model to the renderer's `renderGraph`.
pub fn render(model: &RenderModel, title: &str, renderer_script: &str) -> ExportResult<String> {
    let handlebars = crate::common::get_handlebars();
    // Keep the embedded document from closing its <script> element early
    let graph_data = serde_json::to_string(model)?.replace("</", "<\\/");

    let res = handlebars.render_template(
        &get_template(),
        &json!({
            "title": title,
            "renderer_script": renderer_script,
            "graph_data": graph_data,
            "node_count": model.nodes.len(),
            "link_count": model.links.len(),
        }),
    )?;
    Ok(res)
}

pub fn get_template() -> String {
    include_str!("to_html.hbs").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{attrs, Graph, DATA_ATTR};
    use crate::metrics::Metrics;
    use crate::render_model::build_render_model;

    #[test]
    fn test_page_embeds_model() {
        let mut graph = Graph::new("g");
        graph.add_edge("a", "b", Default::default());
        let model = build_render_model(&graph, &Metrics::default());
        let res = render(&model, "Demo & Co", "js/graph.js").unwrap();
        assert!(res.contains("<title>Demo &amp; Co</title>"));
        assert!(res.contains(r#"<script src="js/graph.js"></script>"#));
        assert!(res.contains(r#"{"nodes":[{"id":"a""#));
        assert!(res.contains("renderGraph(graphData);"));
    }

    #[test]
    fn test_script_terminator_is_escaped() {
        let mut graph = Graph::new("g");
        graph.add_node("x", attrs([(DATA_ATTR, json!({"note": "</script>"}))]));
        let model = build_render_model(&graph, &Metrics::default());
        let res = render(&model, "t", "graph.js").unwrap();
        assert!(res.contains(r#"<\/script>"#));
        assert_eq!(res.matches("</script>").count(), 3);
    }
}
