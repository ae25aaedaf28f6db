pub mod to_html;
pub mod to_json;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::errors::ExportResult;
use crate::render_model::RenderModel;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    JsonPretty,
    Html,
}

/// Render `model` in the configured output format
pub fn render(model: &RenderModel, config: &ExportConfig) -> ExportResult<String> {
    match config.format {
        ExportFormat::Json => to_json::render(model, false),
        ExportFormat::JsonPretty => to_json::render(model, true),
        ExportFormat::Html => to_html::render(model, &config.title, &config.renderer_script),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_format() {
        let model = RenderModel::default();
        let mut config = ExportConfig::default();
        assert_eq!(render(&model, &config).unwrap(), r#"{"nodes":[],"links":[]}"#);

        config.format = ExportFormat::JsonPretty;
        assert!(render(&model, &config).unwrap().contains("\n"));

        config.format = ExportFormat::Html;
        assert!(render(&model, &config).unwrap().contains("renderGraph"));
    }
}
