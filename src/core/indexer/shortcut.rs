//! Shortcut derivation.
//!
//! Turns a document's source-root-relative path (and optionally one of
//! its headings) into a shortcut file name and target URL. File names
//! and URLs are derived from the same relative path through
//! independently configured rule sequences: a file name only has to be
//! filesystem-legal and readable, while the anchor fragment must
//! reproduce the renderer's heading-slug algorithm exactly or the link
//! dangles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::config::NamingConfig;
use crate::core::rules::ReplacementSequence;
use crate::core::types::Shortcut;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("literal pattern"));

/// Derives shortcut records for documents and their headings
#[derive(Debug)]
pub struct ShortcutDeriver {
    naming: NamingConfig,
    base_url: String,
    path_rules: ReplacementSequence,
    url_rules: ReplacementSequence,
    heading_rules: ReplacementSequence,
}

/// A derived document shortcut plus the stems heading shortcuts build on
#[derive(Debug, Clone)]
pub struct DocumentShortcut {
    /// Shortcut file name (stem + extension)
    pub file_name: String,

    /// Target URL (stem + document suffix)
    pub target_url: String,

    name_stem: String,
    url_stem: String,
}

impl DocumentShortcut {
    /// The writable shortcut record for the document itself
    pub fn record(&self) -> Shortcut {
        Shortcut {
            file_name: self.file_name.clone(),
            target_url: self.target_url.clone(),
        }
    }
}

impl ShortcutDeriver {
    /// Create a deriver from naming conventions and loaded rule sequences
    pub fn new(
        naming: NamingConfig,
        base_url: String,
        path_rules: ReplacementSequence,
        url_rules: ReplacementSequence,
        heading_rules: ReplacementSequence,
    ) -> Self {
        Self {
            naming,
            base_url,
            path_rules,
            url_rules,
            heading_rules,
        }
    }

    /// Derive the shortcut for a whole document
    ///
    /// `rel_path` is the document's path relative to the source root,
    /// with `/` separators.
    pub fn document(&self, rel_path: &str) -> DocumentShortcut {
        let name_stem = format!(
            "{}{}",
            self.naming.file_prefix,
            self.path_rules.apply(rel_path)
        );
        let url_stem = format!("{}{}", self.base_url, self.url_rules.apply(rel_path));

        let file_name = format!("{}{}", name_stem, self.naming.file_extension);
        let target_url = format!("{}{}", url_stem, self.naming.document_suffix);
        tracing::debug!("URL file name: {}", file_name);
        tracing::debug!("URL: {}", target_url);

        DocumentShortcut {
            file_name,
            target_url,
            name_stem,
            url_stem,
        }
    }

    /// Derive the shortcut for one heading of a document
    ///
    /// Returns `None` when the heading sanitizes to nothing worth
    /// linking: blank after the heading rules, or an empty anchor
    /// fragment (a punctuation-only heading).
    pub fn heading(&self, document: &DocumentShortcut, raw_heading: &str) -> Option<Shortcut> {
        let cleaned = self.heading_rules.apply(raw_heading);
        if cleaned.trim().is_empty() {
            tracing::debug!("Dropping blank heading: {:?}", raw_heading);
            return None;
        }

        let fragment = anchor_fragment(&cleaned);
        if fragment.is_empty() {
            tracing::debug!("Dropping heading with empty anchor: {:?}", raw_heading);
            return None;
        }

        let file_name = format!(
            "{}{}{}{}",
            document.name_stem,
            self.naming.heading_separator,
            file_name_part(&cleaned),
            self.naming.file_extension
        );
        let target_url = format!(
            "{}{}{}",
            document.url_stem, self.naming.anchor_separator, fragment
        );
        tracing::debug!("Heading file name: {}", file_name);
        tracing::debug!("Heading URL: {}", target_url);

        Some(Shortcut {
            file_name,
            target_url,
        })
    }
}

/// Slugify heading text into the renderer's anchor fragment
///
/// Trim, collapse whitespace runs to a single hyphen, lowercase, then
/// strip everything outside `[a-z0-9-]`. Idempotent on already
/// slugified input.
pub fn anchor_fragment(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text.trim(), "-")
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

/// Heading text reduced to the loose file-name character class
fn file_name_part(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect()
}
