//! Prune command - delete stale generated shortcuts

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexingPipeline;
use crate::core::types::IndexStats;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the prune command
#[derive(Args, Debug)]
pub struct PruneArgs {
    /// Directory to prune (defaults to configuration)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// Prune result response
#[derive(Debug, Serialize)]
pub struct PruneResponse {
    pub output: String,
    pub shortcuts_pruned: usize,
    pub delete_errors: usize,
}

/// Execute the prune command
pub fn execute(
    args: PruneArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(out) = args.out {
        config.output.dir = out;
    }

    if !config.output.dir.is_dir() {
        return Err(format!(
            "Output directory '{}' does not exist.",
            config.output.dir.display()
        )
        .into());
    }

    let pipeline = IndexingPipeline::new(&config)?;
    let mut stats = IndexStats::default();
    pipeline.prune_stale(&mut stats);

    let response = PruneResponse {
        output: config.output.dir.to_string_lossy().into_owned(),
        shortcuts_pruned: stats.shortcuts_pruned,
        delete_errors: stats.delete_errors,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} stale shortcut(s) from {}",
                colors::success("Pruned"),
                colors::number(&response.shortcuts_pruned.to_string()),
                colors::file_path(&response.output)
            );
            if response.delete_errors > 0 {
                println!(
                    "{} {} deletion(s) failed; see the log",
                    colors::warning("Warning:"),
                    colors::number(&response.delete_errors.to_string())
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
