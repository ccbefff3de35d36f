//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  source:");
            println!("    root: {}", config.source.root.display());
            println!("    document_pattern: {}", config.source.document_pattern);
            println!("    excluded_names: {:?}", config.source.excluded_names);
            println!("    excluded_suffixes: {:?}", config.source.excluded_suffixes);
            println!("    excluded_segments: {:?}", config.source.excluded_segments);
            println!("  output:");
            println!("    dir: {}", config.output.dir.display());
            println!("    base_url: {}", config.output.base_url);
            println!("  rules:");
            println!("    path_rules: {}", describe(&config.rules.path_rules));
            println!("    url_rules: {}", describe(&config.rules.url_rules));
            println!("    heading_rules: {}", describe(&config.rules.heading_rules));
            println!("  naming:");
            println!("    file_prefix: {:?}", config.naming.file_prefix);
            println!("    file_extension: {:?}", config.naming.file_extension);
            println!("    document_suffix: {:?}", config.naming.document_suffix);
            println!("    anchor_separator: {:?}", config.naming.anchor_separator);
            println!("    heading_separator: {:?}", config.naming.heading_separator);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn describe(path: &Option<std::path::PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
