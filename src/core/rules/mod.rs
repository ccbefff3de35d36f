//! Ordered regex find/replace rules.
//!
//! A rule file supplies `find=`/`replace=` line pairs that are compiled
//! into a [`ReplacementSequence`], an immutable ordered list applied as
//! a fold over an input string. Three sequences drive the indexer: one
//! for shortcut file names, one for URL paths and one for headings.

mod replacement;
mod sequence;

pub use replacement::Replacement;
pub use sequence::ReplacementSequence;

/// Marker opening the pattern half of a rule line
pub const PREFIX_FIND: &str = "find=";

/// Marker opening the substitution half of a rule line
pub const PREFIX_REPLACE: &str = "replace=";

/// Optional end-of-line marker that preserves trailing whitespace
///
/// Lines without it are trimmed of trailing whitespace; a rule author
/// writes `replace=- ;;;` to keep the trailing space in `- `.
pub const LINE_TERMINATOR: &str = ";;;";
