//! Configuration management for bolso.
//!
//! Loads configuration from ${BOLSO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the SmartBudget backend (overridden by SMARTBUDGET_API_URL).
    pub base_url: Option<String>,

    /// Request timeout in seconds. Requests that take longer are aborted.
    pub timeout_secs: u64,

    /// Period (YYYY-MM) the dashboard opens on. Current month when unset.
    pub default_period: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_period: None,
        }
    }
}

impl Config {
    /// Loads the configuration from ${BOLSO_HOME}/config.toml.
    ///
    /// Returns defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("write config at {}", path.display()))
    }

    /// Loads the configuration from an explicit path (tests use this).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parse config at {}", path.display()))
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for bolso configuration and data.
    //!
    //! BOLSO_HOME resolution order:
    //! 1. BOLSO_HOME environment variable (if set)
    //! 2. ~/.config/bolso (default)

    use std::path::PathBuf;

    /// Returns the bolso home directory.
    pub fn bolso_home() -> PathBuf {
        if let Ok(home) = std::env::var("BOLSO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("bolso"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        bolso_home().join("config.toml")
    }

    /// Returns the directory where log files are written.
    pub fn logs_dir() -> PathBuf {
        bolso_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"http://10.0.0.5:8000\"\ntimeout_secs = 3\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.default_period, None);
    }
}
