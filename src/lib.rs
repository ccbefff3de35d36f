//! mdlaunch - Markdown Shortcut Indexer
//!
//! Indexes a directory tree of markdown files (for a renderer such as
//! Hugo) as a set of desktop shortcut files that launcher tools such as
//! Keypirinha can index and search. Every eligible document gets one
//! shortcut pointing at its rendered page, plus one shortcut per
//! heading pointing at that heading's anchor.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types, xdg
//!   - rules (ordered regex replacement sequences)
//!   - indexer (eligibility filter, headings, shortcut derivation,
//!     pipeline)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Behaviors
//!
//! - Three independently configured rule sequences (file name, URL,
//!   heading) drive all text transformation
//! - Stale shortcuts are pruned before each run
//! - Per-file failures are logged and counted, never fatal; only
//!   configuration errors abort a run

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{MdlaunchError, Result};
pub use core::indexer::IndexingPipeline;
pub use core::rules::{Replacement, ReplacementSequence};
pub use core::types::{IndexStats, Shortcut};
