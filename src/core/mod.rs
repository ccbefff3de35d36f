//! Core domain logic (interface-agnostic)
//!
//! This module contains all business logic that is independent of the
//! command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **rules**: Ordered regex replacement sequences
//! - **indexer**: Eligibility filter, heading extraction, shortcut
//!   derivation and pipeline orchestration

pub mod config;
pub mod error;
pub mod indexer;
pub mod rules;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{MdlaunchError, Result};
pub use indexer::IndexingPipeline;
