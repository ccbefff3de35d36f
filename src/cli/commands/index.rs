//! Index command - run the full shortcut-generation pipeline

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexingPipeline;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Root of the markdown tree to index (defaults to configuration)
    pub source: Option<PathBuf>,

    /// Directory shortcut files are written to
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Base URL of the rendered site
    #[arg(long)]
    pub base_url: Option<String>,

    /// Rule file applied to paths when deriving shortcut file names
    #[arg(long)]
    pub path_rules: Option<PathBuf>,

    /// Rule file applied to paths when deriving URLs
    #[arg(long)]
    pub url_rules: Option<PathBuf>,

    /// Rule file applied to headings before slugification
    #[arg(long)]
    pub heading_rules: Option<PathBuf>,

    /// Separator between a page URL and a heading anchor (e.g. ".html#" or "/#")
    #[arg(long)]
    pub anchor_separator: Option<String>,

    /// Keep stale shortcuts instead of pruning them first
    #[arg(long)]
    pub no_prune: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub source: String,
    pub output: String,
    pub documents_indexed: usize,
    pub headings_indexed: usize,
    pub shortcuts_written: usize,
    pub shortcuts_pruned: usize,
    pub failures: usize,
    pub duration_secs: f64,
}

/// Merge command-line overrides into the loaded configuration
pub fn apply_overrides(config: &mut Config, args: &IndexArgs) {
    if let Some(source) = &args.source {
        config.source.root = source.clone();
    }
    if let Some(out) = &args.out {
        config.output.dir = out.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.output.base_url = base_url.clone();
    }
    if let Some(path) = &args.path_rules {
        config.rules.path_rules = Some(path.clone());
    }
    if let Some(path) = &args.url_rules {
        config.rules.url_rules = Some(path.clone());
    }
    if let Some(path) = &args.heading_rules {
        config.rules.heading_rules = Some(path.clone());
    }
    if let Some(separator) = &args.anchor_separator {
        config.naming.anchor_separator = separator.clone();
    }
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_overrides(&mut config, &args);
    config.validate()?;

    let source = config.source.root.canonicalize().map_err(|e| {
        format!(
            "Invalid source root '{}': {}. Make sure the path exists and is accessible.",
            config.source.root.display(),
            e
        )
    })?;
    if !source.is_dir() {
        return Err(format!(
            "Source root '{}' is not a directory.",
            source.display()
        )
        .into());
    }
    config.source.root = source;

    if config.output.base_url.is_empty() {
        return Err(
            "Base URL is not set. Pass --base-url or set output.base_url in the config file."
                .into(),
        );
    }

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {} into {}...",
            colors::file_path(&config.source.root.display().to_string()),
            colors::file_path(&config.output.dir.display().to_string())
        );
    }

    let pipeline = IndexingPipeline::new(&config)?;
    let stats = pipeline.run(!args.no_prune)?;

    let response = IndexResponse {
        source: config.source.root.to_string_lossy().into_owned(),
        output: config.output.dir.to_string_lossy().into_owned(),
        documents_indexed: stats.documents_indexed,
        headings_indexed: stats.headings_indexed,
        shortcuts_written: stats.shortcuts_written,
        shortcuts_pruned: stats.shortcuts_pruned,
        failures: stats.failures(),
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} shortcuts ({} documents, {} headings) in {}",
                colors::success("Wrote"),
                colors::number(&response.shortcuts_written.to_string()),
                colors::number(&response.documents_indexed.to_string()),
                colors::number(&response.headings_indexed.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Pruned {} stale shortcut(s)",
                colors::number(&response.shortcuts_pruned.to_string())
            );
            if response.failures > 0 {
                println!(
                    "{} {} file operation(s) failed; see the log",
                    colors::warning("Warning:"),
                    colors::number(&response.failures.to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
