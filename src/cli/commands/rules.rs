//! Check-rules command - validate the three replacement sequences
//!
//! Loads the path, URL and heading rule sequences exactly as the index
//! command would, surfacing configuration errors before a run deletes
//! anything.

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the check-rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Apply the loaded sequences to a sample input and show each result
    #[arg(long)]
    pub sample: Option<String>,
}

/// Rule check response
#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub path_rules: SequenceReport,
    pub url_rules: SequenceReport,
    pub heading_rules: SequenceReport,
}

#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub source: String,
    pub rule_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_output: Option<String>,
}

/// Execute the check-rules command
pub fn execute(
    args: RulesArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = |label: &str,
                  file: Option<&std::path::PathBuf>,
                  sequence: crate::core::rules::ReplacementSequence|
     -> SequenceReport {
        tracing::debug!("Found replacements for {}: {}", label, sequence);
        SequenceReport {
            source: file
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string()),
            rule_count: sequence.len(),
            sample_output: args.sample.as_deref().map(|s| sequence.apply(s)),
        }
    };

    let response = RulesResponse {
        path_rules: report(
            "markdown paths",
            config.rules.path_rules.as_ref(),
            config.rules.path_sequence()?,
        ),
        url_rules: report(
            "markdown URLs",
            config.rules.url_rules.as_ref(),
            config.rules.url_sequence()?,
        ),
        heading_rules: report(
            "markdown headings",
            config.rules.heading_rules.as_ref(),
            config.rules.heading_sequence()?,
        ),
    };

    match format {
        OutputFormat::Human => {
            for (name, report) in [
                ("path", &response.path_rules),
                ("url", &response.url_rules),
                ("heading", &response.heading_rules),
            ] {
                println!(
                    "{} {} rule(s) from {}",
                    colors::label(name),
                    colors::number(&report.rule_count.to_string()),
                    colors::file_path(&report.source)
                );
                if let Some(output) = &report.sample_output {
                    println!("  sample -> {output:?}");
                }
            }
            println!("{}", colors::success("All rule sequences loaded."));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
