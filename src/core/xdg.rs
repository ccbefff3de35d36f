//! XDG Base Directory Support
//!
//! Implements XDG Base Directory specification for config file
//! resolution on Linux/Unix systems, with automatic migration from the
//! legacy `./mdlaunch.toml` location.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for mdlaunch
///
/// Resolution priority (highest to lowest):
/// 1. Explicit MDLAUNCH_* env vars
/// 2. XDG_* environment variables
/// 3. XDG defaults (~/.config)
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("MDLAUNCH_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdlaunch");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("mdlaunch")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("MDLAUNCH_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Create the config directory if it doesn't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// Migrate legacy paths to XDG structure
///
/// Copies `./mdlaunch.toml` to the XDG config path when no config
/// exists there yet. Never deletes the original file.
pub fn migrate_legacy_paths(xdg: &XdgDirs) -> std::io::Result<()> {
    let legacy_config = PathBuf::from("./mdlaunch.toml");
    let new_config = xdg.config_file();

    if legacy_config.exists() && !new_config.exists() {
        fs::create_dir_all(&xdg.config_dir)?;
        fs::copy(&legacy_config, &new_config)?;
        tracing::info!("Migrated config: {:?} -> {:?}", legacy_config, new_config);
        tracing::info!(
            "Legacy config file preserved at {:?} (safe to delete after verification)",
            legacy_config
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        env::remove_var("XDG_CONFIG_HOME");
        env::remove_var("MDLAUNCH_CONFIG_DIR");
        env::remove_var("MDLAUNCH_CONFIG_FILE");
    }

    #[test]
    #[serial]
    fn test_xdg_defaults() {
        clear_env_vars();

        let xdg = XdgDirs::new();
        assert!(xdg.config_dir.ends_with(".config/mdlaunch"));
    }

    #[test]
    #[serial]
    fn test_xdg_config_home_override() {
        clear_env_vars();
        env::set_var("XDG_CONFIG_HOME", "/custom/config");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.config_dir, PathBuf::from("/custom/config/mdlaunch"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_mdlaunch_config_dir_priority() {
        clear_env_vars();
        env::set_var("XDG_CONFIG_HOME", "/xdg/config");
        env::set_var("MDLAUNCH_CONFIG_DIR", "/mdlaunch/config");

        let xdg = XdgDirs::new();
        assert_eq!(
            xdg.config_dir,
            PathBuf::from("/mdlaunch/config"),
            "MDLAUNCH_CONFIG_DIR should take priority over XDG_CONFIG_HOME"
        );

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_file_resolution() {
        clear_env_vars();

        let xdg = XdgDirs::new();
        assert!(xdg.config_file().ends_with("mdlaunch/config.toml"));
    }

    #[test]
    #[serial]
    fn test_config_file_env_override() {
        clear_env_vars();
        env::set_var("MDLAUNCH_CONFIG_FILE", "/custom/my-config.toml");

        let xdg = XdgDirs::new();
        assert_eq!(xdg.config_file(), PathBuf::from("/custom/my-config.toml"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_ensure_dirs_exist_idempotent() {
        clear_env_vars();
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path().join("cfg");

        env::set_var("MDLAUNCH_CONFIG_DIR", base.to_str().unwrap());

        let xdg = XdgDirs::new();
        xdg.ensure_dirs_exist().unwrap();
        xdg.ensure_dirs_exist().unwrap();

        assert!(base.exists());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_migrate_no_legacy_file() {
        clear_env_vars();
        let temp = tempfile::tempdir().unwrap();
        env::set_var(
            "MDLAUNCH_CONFIG_DIR",
            temp.path().join("cfg").to_str().unwrap(),
        );

        let xdg = XdgDirs::new();
        migrate_legacy_paths(&xdg).unwrap();
        assert!(!xdg.config_file().exists());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_migrate_with_legacy_file() {
        clear_env_vars();
        let temp = tempfile::tempdir().unwrap();
        let cfg_dir = temp.path().join("cfg");
        env::set_var("MDLAUNCH_CONFIG_DIR", cfg_dir.to_str().unwrap());

        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp.path()).unwrap();
        fs::write("mdlaunch.toml", "[output]\nbase_url = \"https://x/\"").unwrap();

        let xdg = XdgDirs::new();
        migrate_legacy_paths(&xdg).unwrap();

        let new_config = xdg.config_file();
        assert!(new_config.exists());
        let content = fs::read_to_string(&new_config).unwrap();
        assert!(content.contains("https://x/"));

        // Legacy file survives the copy.
        assert!(temp.path().join("mdlaunch.toml").exists());

        env::set_current_dir(original_dir).unwrap();
        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_migrate_does_not_overwrite() {
        clear_env_vars();
        let temp = tempfile::tempdir().unwrap();
        let cfg_dir = temp.path().join("cfg");
        fs::create_dir_all(&cfg_dir).unwrap();
        env::set_var("MDLAUNCH_CONFIG_DIR", cfg_dir.to_str().unwrap());

        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp.path()).unwrap();

        fs::write("mdlaunch.toml", "legacy = true").unwrap();

        let xdg = XdgDirs::new();
        fs::write(xdg.config_file(), "existing = true").unwrap();

        migrate_legacy_paths(&xdg).unwrap();

        let content = fs::read_to_string(xdg.config_file()).unwrap();
        assert_eq!(content, "existing = true");

        env::set_current_dir(original_dir).unwrap();
        clear_env_vars();
    }
}
