//! A single find/replace rule.

use regex::Regex;

use crate::core::error::{MdlaunchError, Result};
use crate::core::rules::LINE_TERMINATOR;

/// One regex find and replacement-template pair
///
/// The pattern is compiled at construction; a pattern that does not
/// compile is a configuration error, so a sequence never holds a rule
/// that can fail at apply time. Templates may use `$1`, `$2`, ...
/// back-references against the most recent match (`${1}` where a
/// following character would extend the group name).
#[derive(Debug, Clone)]
pub struct Replacement {
    find: Regex,
    replace: String,
}

impl Replacement {
    /// Compile a rule from its pattern and substitution template
    ///
    /// The pattern must be non-empty; the template may be empty (a
    /// deletion rule).
    pub fn new(find: &str, replace: &str) -> Result<Self> {
        if find.is_empty() {
            return Err(MdlaunchError::ConfigError(
                "Rule pattern must be non-empty".to_string(),
            ));
        }
        let find = Regex::new(find).map_err(|e| {
            MdlaunchError::ConfigError(format!("Invalid rule pattern '{find}': {e}"))
        })?;
        Ok(Self {
            find,
            replace: replace.to_string(),
        })
    }

    /// The source pattern this rule was compiled from
    pub fn find(&self) -> &str {
        self.find.as_str()
    }

    /// The substitution template
    pub fn replace(&self) -> &str {
        self.replace.as_str()
    }

    /// Replace all non-overlapping matches in `input`
    pub fn apply(&self, input: &str) -> String {
        self.find.replace_all(input, self.replace.as_str()).into_owned()
    }
}

/// Strip a rule-line marker prefix and the optional `;;;` terminator
///
/// Without a terminator the remainder is trimmed of trailing
/// whitespace; with one, everything before the terminator survives
/// verbatim.
pub(crate) fn strip_markers<'a>(line: &'a str, prefix: &str) -> &'a str {
    let body = line.strip_prefix(prefix).unwrap_or(line);
    match body.strip_suffix(LINE_TERMINATOR) {
        Some(kept) => kept,
        None => body.trim_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{PREFIX_FIND, PREFIX_REPLACE};

    #[test]
    fn test_literal_replace() {
        let rule = Replacement::new("test", "rob").unwrap();
        assert_eq!(rule.apply("test"), "rob");
    }

    #[test]
    fn test_replaces_all_matches() {
        let rule = Replacement::new("a", "b").unwrap();
        assert_eq!(rule.apply("banana"), "bbnbnb");
    }

    #[test]
    fn test_back_references() {
        let rule = Replacement::new(r"(\w+) (\w+) (\w+)", "$3 $2 $1").unwrap();
        assert_eq!(rule.apply("Robert Mark Bram"), "Bram Mark Robert");
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = Replacement::new("[unclosed", "x").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_pattern_is_config_error() {
        assert!(Replacement::new("", "x").unwrap_err().is_fatal());
    }

    #[test]
    fn test_empty_template_deletes() {
        let rule = Replacement::new(r"^\s*", "").unwrap();
        assert_eq!(rule.apply("   indented"), "indented");
    }

    #[test]
    fn test_strip_markers_prefix_and_trim() {
        assert_eq!(strip_markers("find=\\.md$   ", PREFIX_FIND), "\\.md$");
        assert_eq!(strip_markers("replace= - ", PREFIX_REPLACE), " -");
    }

    #[test]
    fn test_strip_markers_terminator_preserves_whitespace() {
        assert_eq!(strip_markers("replace= - ;;;", PREFIX_REPLACE), " - ");
        assert_eq!(strip_markers("find=\\s$;;;", PREFIX_FIND), "\\s$");
    }

    #[test]
    fn test_strip_markers_only_leading_prefix() {
        // A prefix marker in the middle of the pattern is content.
        assert_eq!(strip_markers("find=find=", PREFIX_FIND), "find=");
    }
}
