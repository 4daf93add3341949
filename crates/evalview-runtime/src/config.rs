use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Results directory used when nothing else names one
pub const DEFAULT_RESULTS_DIR: &str = "runs";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "EVALVIEW_CONFIG";

/// Environment variable naming the results directory
pub const RESULTS_DIR_ENV: &str = "EVALVIEW_RESULTS_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub results_dir: Option<PathBuf>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: None,
            color: default_color(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// `$EVALVIEW_CONFIG`, else `<config dir>/evalview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(expand_tilde(&path));
        }
        dirs::config_dir().map(|dir| dir.join("evalview").join("config.toml"))
    }

    /// Resolve the results directory based on priority:
    /// 1. Explicit path (CLI argument)
    /// 2. EVALVIEW_RESULTS_DIR environment variable
    /// 3. `results_dir` from the config file
    /// 4. `runs` relative to the working directory
    pub fn resolve_results_dir(&self, explicit_path: Option<&str>) -> PathBuf {
        if let Some(path) = explicit_path {
            return expand_tilde(path);
        }

        if let Ok(env_path) = std::env::var(RESULTS_DIR_ENV)
            && !env_path.is_empty()
        {
            return expand_tilde(&env_path);
        }

        if let Some(path) = &self.results_dir {
            return expand_tilde(&path.to_string_lossy());
        }

        PathBuf::from(DEFAULT_RESULTS_DIR)
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
