use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use netviz::config::Config;
use netviz::export::{to_html, ExportFormat};
use netviz::metrics::CentralityKind;
use netviz::pipeline::{ErrorReporter, PipelineFailure, RenderSink};
use netviz::sink::{FileSink, StdoutSink};
use netviz::{common, GraphRegistry, RenderOptions, RenderService};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a graph and write its render model
    Render {
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Registry name; unknown names fall back to the default graph
        #[clap(short, long)]
        graph: Option<String>,
        #[clap(short, long, value_enum)]
        format: Option<ExportFormat>,
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long, value_enum)]
        centrality: Option<CentralityKind>,
        #[clap(long)]
        seed: Option<u64>,
    },
    /// List the available graph names
    List,
    /// Write a default configuration file
    Init {
        #[clap(short, long, default_value = "netviz.yaml")]
        config: PathBuf,
    },
    /// Print the HTML page template
    Template,
}

/// Shows failures to the user on stderr and records them in the log.
struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn report(&self, failure: &PipelineFailure) {
        error!("Render failed: {}", failure.message);
        eprintln!("Error rendering graph: {}", failure.message);
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Render {
            config,
            graph,
            format,
            output,
            centrality,
            seed,
        } => {
            let mut cfg = match load_config(config.as_deref()) {
                Ok(cfg) => cfg,
                Err(err) => {
                    ConsoleReporter.report(&PipelineFailure::from_error(&err));
                    std::process::exit(1);
                }
            };
            if let Some(graph) = graph {
                cfg.graph = graph;
            }
            if let Some(format) = format {
                cfg.export.format = format;
            }
            if let Some(output) = output {
                cfg.export.filename = Some(output);
            }
            if let Some(centrality) = centrality {
                cfg.centrality = centrality;
            }
            if let Some(seed) = seed {
                cfg.seed = seed;
            }

            info!("Rendering graph: {}", cfg.graph);
            let service = RenderService::new(
                GraphRegistry::with_seed(cfg.seed),
                RenderOptions {
                    centrality: cfg.centrality,
                },
            )
            .with_reporter(ConsoleReporter);

            let mut sink: Box<dyn RenderSink> = match &cfg.export.filename {
                Some(filename) => Box::new(FileSink::new(filename, cfg.export.clone())),
                None => Box::new(StdoutSink::new(cfg.export.clone())),
            };

            if service.render_by_name(&cfg.graph, sink.as_mut()).is_err() {
                std::process::exit(1);
            }
        }
        Commands::List => {
            let registry = GraphRegistry::default();
            let default = registry.default_name();
            for name in registry.names() {
                if Some(name) == default {
                    println!("{} (default)", name);
                } else {
                    println!("{}", name);
                }
            }
        }
        Commands::Init { config } => {
            info!("Initializing config: {}", config.display());
            let serialized = Config::default().to_yaml()?;
            common::write_string_to_file(&config, &serialized)?;
        }
        Commands::Template => {
            println!("{}", to_html::get_template());
        }
    }

    Ok(())
}

/// Config errors go to the same reporter as render failures.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => Ok(Config::default()),
    }
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
