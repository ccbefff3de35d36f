//! mdlaunch CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Index a markdown tree
//! mdlaunch index ~/notes --out ~/urls --base-url https://notes.example.org/
//!
//! # Delete stale shortcuts only
//! mdlaunch prune --out ~/urls
//!
//! # Validate rule files before a destructive run
//! mdlaunch check-rules --sample "guide/setup.md"
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdlaunch::cli::{output, run, Cli};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdlaunch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Per-file failures are reported in command output and never change
    // the exit status; only fatal errors (configuration, unusable
    // source root) land here.
    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
