//! Document indexing module.
//!
//! Walks the markdown source tree, filters it down to the curated
//! documents, extracts headings and derives shortcut records:
//!
//! - Eligibility filtering (pattern, placeholder names, reserved
//!   suffixes and segments)
//! - Single-pass heading extraction
//! - Shortcut derivation for documents and headings
//! - Pipeline orchestration (prune, walk, derive, write)

pub mod filter;
pub mod headings;
pub mod pipeline;
pub mod shortcut;

pub use filter::EligibilityFilter;
pub use headings::{heading_lines, is_heading_line};
pub use pipeline::IndexingPipeline;
pub use shortcut::{anchor_fragment, DocumentShortcut, ShortcutDeriver};
