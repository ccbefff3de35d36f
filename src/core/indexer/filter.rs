//! Eligibility filter for source documents.
//!
//! A pure predicate over a path: runs once per node of the full tree
//! walk, so every check is a cheap string operation against patterns
//! compiled at construction.

use regex::Regex;
use std::path::Path;

use crate::core::config::SourceConfig;
use crate::core::error::{MdlaunchError, Result};

/// Decides which files in the source tree get indexed
#[derive(Debug)]
pub struct EligibilityFilter {
    document_pattern: Regex,
    excluded_names: Vec<String>,
    excluded_suffixes: Vec<String>,
    excluded_segments: Vec<String>,
}

impl EligibilityFilter {
    /// Build a filter from the source configuration
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let document_pattern = Regex::new(&source.document_pattern).map_err(|e| {
            MdlaunchError::ConfigError(format!(
                "Invalid document pattern '{}': {e}",
                source.document_pattern
            ))
        })?;

        Ok(Self {
            document_pattern,
            excluded_names: source.excluded_names.clone(),
            excluded_suffixes: source.excluded_suffixes.clone(),
            excluded_segments: source.excluded_segments.clone(),
        })
    }

    /// Do we want this file?
    ///
    /// A path is wanted iff it matches the document pattern, its base
    /// name is not a placeholder, it carries none of the reserved
    /// suffixes and none of its components is a reserved segment.
    pub fn wants(&self, path: &Path) -> bool {
        let normalized = normalize(path);
        tracing::trace!("Checking path: {}", normalized);

        if !self.document_pattern.is_match(&normalized) {
            return false;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if self.excluded_names.iter().any(|excluded| excluded == name) {
                return false;
            }
        }

        if self
            .excluded_suffixes
            .iter()
            .any(|suffix| normalized.ends_with(suffix.as_str()))
        {
            return false;
        }

        !path.components().any(|component| {
            component
                .as_os_str()
                .to_str()
                .map(|segment| {
                    self.excluded_segments
                        .iter()
                        .any(|excluded| excluded == segment)
                })
                .unwrap_or(false)
        })
    }
}

/// Forward-slash form of a path, so patterns match on every platform
fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
