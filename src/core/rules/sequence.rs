//! Ordered sequences of replacement rules.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::error::{MdlaunchError, Result};
use crate::core::rules::replacement::strip_markers;
use crate::core::rules::{Replacement, PREFIX_FIND, PREFIX_REPLACE};

/// An immutable, ordered list of [`Replacement`] rules
///
/// Rules apply strictly in list order, each rule's output feeding the
/// next rule's input. An empty sequence is the identity transform.
#[derive(Debug, Clone, Default)]
pub struct ReplacementSequence {
    replacements: Vec<Replacement>,
}

impl ReplacementSequence {
    /// Build a sequence from already-compiled rules
    pub fn new(replacements: Vec<Replacement>) -> Self {
        Self { replacements }
    }

    /// The identity transform
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a sequence from rule-file text lines
    ///
    /// Lines starting with `find=` or `replace=` carry rules; all other
    /// lines are free-form comments. The rule lines must alternate
    /// find/replace, so an odd count rejects the whole load.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rule_lines: Vec<&str> = lines
            .into_iter()
            .filter(|line| is_rule_line(line))
            .collect();

        if rule_lines.len() % 2 != 0 {
            return Err(MdlaunchError::ConfigError(format!(
                "Rule file has an uneven number of find/replace lines ({} found)",
                rule_lines.len()
            )));
        }

        let mut replacements = Vec::with_capacity(rule_lines.len() / 2);
        for pair in rule_lines.chunks_exact(2) {
            let (find_line, replace_line) = (pair[0], pair[1]);
            if !find_line.starts_with(PREFIX_FIND) || !replace_line.starts_with(PREFIX_REPLACE) {
                return Err(MdlaunchError::ConfigError(format!(
                    "Rule lines must alternate find/replace; got '{find_line}' then '{replace_line}'"
                )));
            }
            let replacement = Replacement::new(
                strip_markers(find_line, PREFIX_FIND),
                strip_markers(replace_line, PREFIX_REPLACE),
            )?;
            tracing::trace!(
                "Loaded rule: find [{}] replace [{}]",
                replacement.find(),
                replacement.replace()
            );
            replacements.push(replacement);
        }

        Ok(Self::new(replacements))
    }

    /// Load a sequence from a rule file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MdlaunchError::ConfigError(format!("Failed to read rule file {path:?}: {e}"))
        })?;
        Self::from_lines(contents.lines())
    }

    /// Apply every rule to `input` in list order
    pub fn apply(&self, input: &str) -> String {
        let mut result = input.to_string();
        for replacement in &self.replacements {
            result = replacement.apply(&result);
            tracing::trace!(
                "After rule [{}] value is [{}]",
                replacement.find(),
                result
            );
        }
        result
    }

    /// Number of rules in the sequence
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// True for the identity transform
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl fmt::Display for ReplacementSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rule(s)", self.replacements.len())
    }
}

/// A line carries a rule iff it opens with one of the two markers
fn is_rule_line(line: &str) -> bool {
    !line.trim().is_empty()
        && (line.starts_with(PREFIX_FIND) || line.starts_with(PREFIX_REPLACE))
}
