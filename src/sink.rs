use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::ExportConfig;
use crate::export;
use crate::pipeline::RenderSink;
use crate::render_model::RenderModel;

/// Writes the exported model to a file, replacing previous output.
pub struct FileSink {
    path: PathBuf,
    config: ExportConfig,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, config: ExportConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

impl RenderSink for FileSink {
    fn render(&mut self, model: &RenderModel) -> Result<()> {
        let output = export::render(model, &self.config)?;
        crate::common::write_string_to_file(&self.path, &output)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!("Wrote {:?} output to {}", self.config.format, self.path.display());
        Ok(())
    }
}

/// Writes the exported model to stdout.
pub struct StdoutSink {
    config: ExportConfig,
}

impl StdoutSink {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }
}

impl RenderSink for StdoutSink {
    fn render(&mut self, model: &RenderModel) -> Result<()> {
        let output = export::render(model, &self.config)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Keeps the most recent exported output in memory.
#[derive(Default)]
pub struct MemorySink {
    config: ExportConfig,
    pub output: Option<String>,
}

impl MemorySink {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            output: None,
        }
    }
}

impl RenderSink for MemorySink {
    fn render(&mut self, model: &RenderModel) -> Result<()> {
        self.output = Some(export::render(model, &self.config)?);
        Ok(())
    }
}
