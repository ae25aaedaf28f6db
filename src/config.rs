use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};
use crate::export::ExportFormat;
use crate::metrics::CentralityKind;
use crate::registry::DEFAULT_SEED;

/// ## Structure
///
/// ```text
/// Config
///   ├── graph: String            (registry name, default "karate")
///   ├── seed: u64                (random graph families)
///   ├── centrality: CentralityKind
///   └── export: ExportConfig
///       ├── format: ExportFormat (json | json_pretty | html)
///       ├── filename: Option<String>   (stdout when absent)
///       ├── title: String
///       └── renderer_script: String
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub graph: String,
    pub seed: u64,
    pub centrality: CentralityKind,
    pub export: ExportConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub filename: Option<String>,
    pub title: String,
    pub renderer_script: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: "karate".to_string(),
            seed: DEFAULT_SEED,
            centrality: CentralityKind::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            filename: None,
            title: "Network Visualizer".to_string(),
            renderer_script: "graph.js".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
