//! Configuration types and loading.
//!
//! Configuration comes from a YAML file merged over built-in defaults.
//! Discovery order: explicit `--config` path, `todo-server.yaml` in the
//! working directory, then `~/.todo-server/config.yaml`. CLI flags override
//! whatever was loaded (applied in `main`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 3000;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/todos.json";

/// Project-level config file name.
const PROJECT_CONFIG_FILE: &str = "todo-server.yaml";

/// User-level config directory name, under the home directory.
const USER_CONFIG_DIR: &str = ".todo-server";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Port the HTTP server binds on (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the JSON data file (default: data/todos.json).
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory of static client files to serve at `/`, if any.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            data_file: default_data_file(),
            static_dir: None,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Config {
    /// Load configuration, preferring an explicit path when given.
    ///
    /// An explicit path that cannot be read or parsed is an error; absent
    /// discovery candidates fall through to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in Self::discover() {
            if candidate.exists() {
                debug!("loading config from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Candidate config paths, highest priority first.
    fn discover() -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(USER_CONFIG_DIR).join("config.yaml"));
        }
        candidates
    }

    /// Parse a config file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Static directory to serve, if one is configured or the conventional
    /// `public/` directory exists next to the working directory.
    pub fn resolved_static_dir(&self) -> Option<PathBuf> {
        match &self.static_dir {
            Some(dir) => Some(dir.clone()),
            None => {
                let public = PathBuf::from("public");
                public.is_dir().then_some(public)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("port: 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn explicit_static_dir_wins() {
        let config: Config = serde_yaml::from_str("static_dir: client/dist\n").unwrap();
        assert_eq!(
            config.resolved_static_dir(),
            Some(PathBuf::from("client/dist"))
        );
    }
}
