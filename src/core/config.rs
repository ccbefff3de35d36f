//! Configuration management for mdlaunch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The anchor separator and the eligibility exclusion sets are named
//! options here rather than hard-coded in the pipeline, so the two
//! renderer conventions (`.html#` and `/#`) are a config switch.

use crate::core::error::{MdlaunchError, Result};
use crate::core::rules::ReplacementSequence;
use crate::core::xdg::XdgDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in path rules: drop the markdown extension, turn directory
/// separators into a readable ` - ` so file names are filesystem-legal.
const DEFAULT_PATH_RULES: &str = "\
Shortcut file name sanitization.
find=\\.md$
replace=
find=/
replace= - ;;;
";

/// Built-in URL rules: drop the markdown extension; the document suffix
/// is appended by the deriver.
const DEFAULT_URL_RULES: &str = "\
URL path construction.
find=\\.md$
replace=
";

/// Built-in heading rules: strip the leading markdown heading markers.
const DEFAULT_HEADING_RULES: &str = "\
Heading text cleanup.
find=^\\s*#+\\s*
replace=
";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Source tree and eligibility configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Root of the markdown tree to index
    #[serde(default = "default_source_root")]
    pub root: PathBuf,

    /// Regex a (forward-slash normalized) path must match to be indexed
    #[serde(default = "default_document_pattern")]
    pub document_pattern: String,

    /// Base file names never indexed (placeholder files)
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,

    /// Path suffixes tagging non-prose markdown
    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,

    /// Path segments whose whole subtree is skipped
    #[serde(default = "default_excluded_segments")]
    pub excluded_segments: Vec<String>,
}

/// Output directory and site configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory shortcut files are written to (and pruned from)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Base URL of the rendered site, prepended to every target URL
    #[serde(default)]
    pub base_url: String,
}

/// Rule file locations, one per semantic target
///
/// An unset entry falls back to the built-in default sequence for that
/// target.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Rules applied to the relative path when deriving file names
    #[serde(default)]
    pub path_rules: Option<PathBuf>,

    /// Rules applied to the relative path when deriving URLs
    #[serde(default)]
    pub url_rules: Option<PathBuf>,

    /// Rules applied to raw heading text before slugification
    #[serde(default)]
    pub heading_rules: Option<PathBuf>,
}

/// Shortcut naming and URL suffix conventions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Prefix of every shortcut file name
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Extension of every shortcut file name
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Suffix appended to a document's target URL (rendered page extension)
    #[serde(default = "default_document_suffix")]
    pub document_suffix: String,

    /// Separator between a document's URL stem and a heading anchor
    ///
    /// `.html#` for renderers that link `page.html#slug`; `/#` for
    /// pretty-URL renderers that link `page/#slug`.
    #[serde(default = "default_anchor_separator")]
    pub anchor_separator: String,

    /// Separator between a document file name stem and its heading part
    #[serde(default = "default_heading_separator")]
    pub heading_separator: String,
}

// Default value functions
fn default_source_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_document_pattern() -> String {
    r"(cheat_[^/]*|project-tech-tips/.*)\.md$".to_string()
}

fn default_excluded_names() -> Vec<String> {
    vec!["_index.md".to_string(), "_footer.md".to_string()]
}

fn default_excluded_suffixes() -> Vec<String> {
    vec!["java.md".to_string(), "yml.md".to_string()]
}

fn default_excluded_segments() -> Vec<String> {
    vec![".history".to_string(), "current-issue".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./urls")
}

fn default_file_prefix() -> String {
    "Hugo - ".to_string()
}

fn default_file_extension() -> String {
    ".url".to_string()
}

fn default_document_suffix() -> String {
    ".html".to_string()
}

fn default_anchor_separator() -> String {
    ".html#".to_string()
}

fn default_heading_separator() -> String {
    " - ".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_source_root(),
            document_pattern: default_document_pattern(),
            excluded_names: default_excluded_names(),
            excluded_suffixes: default_excluded_suffixes(),
            excluded_segments: default_excluded_segments(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            base_url: String::new(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
            document_suffix: default_document_suffix(),
            anchor_separator: default_anchor_separator(),
            heading_separator: default_heading_separator(),
        }
    }
}

impl RulesConfig {
    /// Load the file-name rule sequence (file or built-in default)
    pub fn path_sequence(&self) -> Result<ReplacementSequence> {
        Self::sequence(self.path_rules.as_deref(), DEFAULT_PATH_RULES, "path")
    }

    /// Load the URL rule sequence (file or built-in default)
    pub fn url_sequence(&self) -> Result<ReplacementSequence> {
        Self::sequence(self.url_rules.as_deref(), DEFAULT_URL_RULES, "url")
    }

    /// Load the heading rule sequence (file or built-in default)
    pub fn heading_sequence(&self) -> Result<ReplacementSequence> {
        Self::sequence(
            self.heading_rules.as_deref(),
            DEFAULT_HEADING_RULES,
            "heading",
        )
    }

    fn sequence(
        file: Option<&Path>,
        builtin: &str,
        label: &str,
    ) -> Result<ReplacementSequence> {
        let sequence = match file {
            Some(path) => ReplacementSequence::from_file(path)?,
            None => ReplacementSequence::from_lines(builtin.lines())?,
        };
        tracing::debug!("Loaded {} replacement sequence: {}", label, sequence);
        Ok(sequence)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MdlaunchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MDLAUNCH_CONFIG env var
    /// 2. XDG config file (~/.config/mdlaunch/config.toml)
    /// 3. Legacy ./mdlaunch.toml (for backward compatibility)
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MDLAUNCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("mdlaunch.toml").exists() {
                Self::from_file("mdlaunch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("MDLAUNCH_SOURCE_ROOT") {
            self.source.root = PathBuf::from(root);
        }
        if let Ok(pattern) = env::var("MDLAUNCH_DOCUMENT_PATTERN") {
            self.source.document_pattern = pattern;
        }
        if let Ok(dir) = env::var("MDLAUNCH_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
        if let Ok(url) = env::var("MDLAUNCH_BASE_URL") {
            self.output.base_url = url;
        }
        if let Ok(prefix) = env::var("MDLAUNCH_FILE_PREFIX") {
            self.naming.file_prefix = prefix;
        }
        if let Ok(separator) = env::var("MDLAUNCH_ANCHOR_SEPARATOR") {
            self.naming.anchor_separator = separator;
        }
        if let Ok(path) = env::var("MDLAUNCH_PATH_RULES") {
            self.rules.path_rules = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var("MDLAUNCH_URL_RULES") {
            self.rules.url_rules = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var("MDLAUNCH_HEADING_RULES") {
            self.rules.heading_rules = Some(PathBuf::from(path));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        Regex::new(&self.source.document_pattern).map_err(|e| {
            MdlaunchError::ConfigError(format!(
                "Invalid document pattern '{}': {e}",
                self.source.document_pattern
            ))
        })?;

        if self.naming.file_extension.is_empty() {
            return Err(MdlaunchError::ConfigError(
                "Shortcut file extension must be non-empty".to_string(),
            ));
        }
        if !self.naming.file_extension.starts_with('.') {
            return Err(MdlaunchError::ConfigError(format!(
                "Shortcut file extension '{}' must start with '.'",
                self.naming.file_extension
            )));
        }
        if !self.naming.anchor_separator.contains('#') {
            return Err(MdlaunchError::ConfigError(format!(
                "Anchor separator '{}' must contain '#'",
                self.naming.anchor_separator
            )));
        }
        if self.naming.file_prefix.is_empty() {
            return Err(MdlaunchError::ConfigError(
                "Shortcut file prefix must be non-empty; the prune phase \
                 matches on it"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration details
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Source root: {:?}", self.source.root);
        tracing::info!("  Document pattern: {}", self.source.document_pattern);
        tracing::info!("  Excluded names: {:?}", self.source.excluded_names);
        tracing::info!("  Excluded suffixes: {:?}", self.source.excluded_suffixes);
        tracing::info!("  Excluded segments: {:?}", self.source.excluded_segments);
        tracing::info!("  Output dir: {:?}", self.output.dir);
        tracing::info!("  Base URL: {}", self.output.base_url);
        tracing::info!("  File prefix: {:?}", self.naming.file_prefix);
        tracing::info!("  Anchor separator: {:?}", self.naming.anchor_separator);
        tracing::info!(
            "  Path rules: {}",
            describe_rules(self.rules.path_rules.as_deref())
        );
        tracing::info!(
            "  URL rules: {}",
            describe_rules(self.rules.url_rules.as_deref())
        );
        tracing::info!(
            "  Heading rules: {}",
            describe_rules(self.rules.heading_rules.as_deref())
        );
    }
}

fn describe_rules(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("{p:?}"),
        None => "built-in defaults".to_string(),
    }
}
