//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end run:
//! 1. Load the three replacement sequences (fatal on failure)
//! 2. Prune stale shortcuts from the output directory
//! 3. Walk the source tree
//! 4. Filter, extract headings, derive and write shortcuts
//!
//! Per-file errors are logged and counted but never stop the run; only
//! configuration failures abort before output is touched.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::error::{MdlaunchError, Result};
use crate::core::indexer::{heading_lines, EligibilityFilter, ShortcutDeriver};
use crate::core::types::{IndexStats, Shortcut};

/// Orchestrates one indexing run
pub struct IndexingPipeline {
    source_root: PathBuf,
    output_dir: PathBuf,
    filter: EligibilityFilter,
    deriver: ShortcutDeriver,
    shortcut_pattern: Pattern,
}

impl IndexingPipeline {
    /// Build a pipeline from configuration
    ///
    /// Loads the three replacement sequences and compiles the filter
    /// and prune patterns; any failure here is fatal and happens
    /// before the output directory is touched.
    pub fn new(config: &Config) -> Result<Self> {
        let filter = EligibilityFilter::new(&config.source)?;
        let deriver = ShortcutDeriver::new(
            config.naming.clone(),
            config.output.base_url.clone(),
            config.rules.path_sequence()?,
            config.rules.url_sequence()?,
            config.rules.heading_sequence()?,
        );

        let shortcut_glob = format!(
            "{}*{}",
            config.naming.file_prefix, config.naming.file_extension
        );
        let shortcut_pattern = Pattern::new(&shortcut_glob).map_err(|e| {
            MdlaunchError::ConfigError(format!(
                "Invalid shortcut name pattern '{shortcut_glob}': {e}"
            ))
        })?;

        Ok(Self {
            source_root: config.source.root.clone(),
            output_dir: config.output.dir.clone(),
            filter,
            deriver,
            shortcut_pattern,
        })
    }

    /// Run the full pipeline: prune, walk, derive, write
    pub fn run(&self, prune: bool) -> Result<IndexStats> {
        let start = Instant::now();
        let mut stats = IndexStats::default();

        fs::create_dir_all(&self.output_dir)?;

        if prune {
            self.prune_stale(&mut stats);
        }

        if !self.source_root.is_dir() {
            return Err(MdlaunchError::WalkError(format!(
                "Source root {:?} is not a readable directory",
                self.source_root
            )));
        }

        tracing::info!("Walking source tree {:?}", self.source_root);
        for entry in WalkDir::new(&self.source_root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    if self.filter.wants(entry.path()) {
                        self.process_document(entry.path(), &mut stats);
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    stats.walk_errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Run complete: {} documents, {} headings, {} shortcuts written, \
             {} pruned, {} failures in {}ms",
            stats.documents_indexed,
            stats.headings_indexed,
            stats.shortcuts_written,
            stats.shortcuts_pruned,
            stats.failures(),
            stats.duration_ms
        );

        Ok(stats)
    }

    /// Delete every previously generated shortcut in the output directory
    ///
    /// Matches on the shortcut naming convention so documents removed
    /// from the source tree do not leave stale shortcuts. Deletion
    /// errors are logged per file and do not stop the prune.
    pub fn prune_stale(&self, stats: &mut IndexStats) {
        for entry in WalkDir::new(&self.output_dir).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error while pruning: {}", e);
                    stats.walk_errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.is_shortcut_name(entry.path()) {
                continue;
            }

            tracing::debug!("Delete file: {:?}", entry.path());
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::warn!("Failed to delete {:?}: {}", entry.path(), e);
                stats.delete_errors += 1;
            } else {
                stats.shortcuts_pruned += 1;
            }
        }
    }

    /// Does a file name follow the generated-shortcut convention?
    fn is_shortcut_name(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| self.shortcut_pattern.matches(name))
            .unwrap_or(false)
    }

    /// Derive and write shortcuts for one eligible document
    fn process_document(&self, path: &Path, stats: &mut IndexStats) {
        tracing::debug!("Processing path: {:?}", path);

        let Some(rel_path) = self.relative_path(path) else {
            tracing::warn!(
                "Skipping {:?}: not under source root {:?}",
                path,
                self.source_root
            );
            stats.walk_errors += 1;
            return;
        };

        let document = self.deriver.document(&rel_path);
        stats.documents_indexed += 1;

        match self.write_shortcut(&document.record()) {
            Ok(()) => stats.shortcuts_written += 1,
            Err(e) => {
                tracing::warn!("{}", e);
                stats.write_errors += 1;
            }
        }

        // A read failure skips the headings only; the document shortcut
        // above is already written.
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "{}",
                    MdlaunchError::ReadError {
                        path: path.to_path_buf(),
                        source: e,
                    }
                );
                stats.read_errors += 1;
                return;
            }
        };

        for line in heading_lines(&contents) {
            let Some(shortcut) = self.deriver.heading(&document, line) else {
                continue;
            };
            stats.headings_indexed += 1;
            match self.write_shortcut(&shortcut) {
                Ok(()) => stats.shortcuts_written += 1,
                Err(e) => {
                    tracing::warn!("{}", e);
                    stats.write_errors += 1;
                }
            }
        }
    }

    /// Source-root-relative path with forward-slash separators
    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.source_root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join("/"))
    }

    /// Write one shortcut file into the output directory
    fn write_shortcut(&self, shortcut: &Shortcut) -> Result<()> {
        let path = self.output_dir.join(&shortcut.file_name);
        fs::write(&path, shortcut.file_contents()).map_err(|e| MdlaunchError::WriteError {
            path,
            source: e,
        })
    }
}
