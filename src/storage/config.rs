//! Configuration handling for hn-digest
//!
//! Configuration is read from `.hn-digest.toml` in the working directory,
//! falling back to `~/.config/hn-digest/config.toml` (global). The first
//! file found wins; missing keys take their defaults.
//!
//! ```toml
//! [output]
//! dir = "output"
//!
//! [fetch]
//! reader_endpoint = "https://r.jina.ai/"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::paths::{OutputLayout, DEFAULT_OUTPUT_DIR};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = ".hn-digest.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Where digests are written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for digests and saved articles
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// How pages are fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Prefix of a service returning pages as markdown; empty fetches directly
    pub reader_endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            reader_endpoint: "https://r.jina.ai/".to_string(),
            timeout_secs: 30,
            user_agent: concat!("hn-digest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Combined configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub fetch: FetchConfig,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let project_path = std::env::current_dir()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .ok()
            .filter(|path| path.is_file());

        if let Some(path) = project_path {
            return Self::load_from(&path);
        }

        match Self::global_config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "hn-digest", "hn-digest")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Output layout rooted at the configured directory
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.fetch.reader_endpoint, "https://r.jina.ai/");
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
        assert!(config.fetch.user_agent.starts_with("hn-digest/"));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[output]
dir = "digests"

[fetch]
reader_endpoint = ""
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("digests"));
        assert_eq!(config.fetch.reader_endpoint, "");
        assert_eq!(config.fetch.timeout_secs, 30);
    }

    #[test]
    fn parse_invalid_config() {
        let err = Config::parse("[output]\ndir = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "[fetch]\ntimeout_secs = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.fetch.timeout(), Duration::from_secs(5));
        assert_eq!(config.layout().root(), Path::new("output"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }
}
