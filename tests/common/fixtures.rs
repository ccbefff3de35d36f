// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdlaunch::core::config::{Config, OutputConfig, SourceConfig};

/// Markdown vault fixture for creating synthetic source trees
pub struct TestVault {
    pub dir: TempDir,
    #[allow(dead_code)] // Handy when a test needs the created paths
    pub files: Vec<PathBuf>,
}

impl TestVault {
    /// A small curated vault: two eligible documents plus files every
    /// exclusion rule should skip
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "vim/cheat_vim.md",
                "# Vim\n\n## Modes\n\nNormal, insert, visual.\n\n## Registers\n",
            ),
            (
                "project-tech-tips/docker/volumes.md",
                "# Docker Volumes\n\nBind mounts vs named volumes.\n",
            ),
            ("journal.md", "# Not curated\n"),
            ("project-tech-tips/_index.md", "# Placeholder\n"),
            ("project-tech-tips/deploy.yml.md", "# Tagged\n"),
            (".history/cheat_old.md", "# Stale copy\n"),
            (
                "project-tech-tips/current-issue/notes.md",
                "# In progress\n",
            ),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the vault root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Default test configuration over a vault and output directory
pub fn test_config(source: &Path, output: &Path) -> Config {
    Config {
        source: SourceConfig {
            root: source.to_path_buf(),
            ..Default::default()
        },
        output: OutputConfig {
            dir: output.to_path_buf(),
            base_url: "https://notes.example.org/".to_string(),
        },
        ..Default::default()
    }
}
