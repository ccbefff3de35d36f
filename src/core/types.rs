//! Core data types for mdlaunch.
//!
//! The shortcut record is the only persisted output entity; everything
//! else here is transient run bookkeeping.

use serde::{Deserialize, Serialize};

/// A single launcher shortcut: an output file name and the URL it opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// File name the shortcut is written under, inside the output directory
    pub file_name: String,

    /// URL the shortcut points at
    pub target_url: String,
}

impl Shortcut {
    /// Render the shortcut file body
    ///
    /// The two-line `[InternetShortcut]` form is the minimal desktop
    /// shortcut convention recognized by launcher indexers.
    pub fn file_contents(&self) -> String {
        format!("[InternetShortcut]\nURL={}", self.target_url)
    }
}

/// Statistics from one indexing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Eligible markdown documents processed
    pub documents_indexed: usize,

    /// Heading shortcuts derived (non-blank headings)
    pub headings_indexed: usize,

    /// Shortcut files successfully written
    pub shortcuts_written: usize,

    /// Stale shortcut files deleted during the prune phase
    pub shortcuts_pruned: usize,

    /// Documents whose contents could not be read (headings skipped)
    pub read_errors: usize,

    /// Shortcut files that could not be written
    pub write_errors: usize,

    /// Stale shortcuts that could not be deleted
    pub delete_errors: usize,

    /// Directory entries the walk could not enumerate
    pub walk_errors: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl IndexStats {
    /// Total per-file failures across all phases
    pub fn failures(&self) -> usize {
        self.read_errors + self.write_errors + self.delete_errors + self.walk_errors
    }
}
