//! CLI adapter for mdlaunch
//!
//! Provides the command-line interface over the core indexing
//! pipeline. This module depends on `core/` but `core/` knows nothing
//! about it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mdlaunch - Markdown Shortcut Indexer
///
/// Index a tree of markdown files as desktop shortcut files pointing
/// into a rendered site, one per document and one per heading.
#[derive(Parser, Debug)]
#[command(name = "mdlaunch")]
#[command(version)]
#[command(about = "Markdown shortcut indexer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index the markdown tree into shortcut files
    Index(commands::IndexArgs),

    /// Delete stale generated shortcuts without reindexing
    Prune(commands::PruneArgs),

    /// Load and report the three replacement-rule sequences
    #[command(name = "check-rules")]
    CheckRules(commands::RulesArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  mdlaunch completions bash > ~/.local/share/bash-completion/completions/mdlaunch
    ///   zsh:   mdlaunch completions zsh > ~/.zfunc/_mdlaunch
    ///   fish:  mdlaunch completions fish > ~/.config/fish/completions/mdlaunch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::{migrate_legacy_paths, XdgDirs};

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Run migration from legacy paths (if needed)
    if let Err(e) = migrate_legacy_paths(&xdg) {
        output::print_warning(&format!("Migration issue: {e}"));
    }

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    // Execute command
    match cli.command {
        Commands::Index(args) => commands::index::execute(args, config, cli.format),
        Commands::Prune(args) => commands::prune::execute(args, config, cli.format),
        Commands::CheckRules(args) => commands::rules::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
