use serde::Deserialize;
use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;

// Configuration location
const USER_CONFIG_DIR: &str = ".config/scangate";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration of the wrapper itself.
///
/// The scanner's own YAML configuration file is owned entirely by the
/// scanner; it is passed through on the command line and never parsed here.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Configuration for the scanner invocation
#[derive(Deserialize, Debug, Clone)]
pub struct ScanConfig {
    /// Scanner executable to invoke
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Directory scanned recursively
    #[serde(default = "default_scan_path")]
    pub path: String,
    /// Scanner configuration file, repository-relative by default
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Propagate the scanner's exit code instead of always reporting success
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            path: default_scan_path(),
            config_file: default_config_file(),
            strict: default_strict(),
        }
    }
}

impl Config {
    /// Load configuration from the user config file, then apply
    /// environment overrides. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let env_map: HashMap<String, String> = env::vars().collect();
        Self::from_file_and_env(&user_config_path(), &env_map)
    }

    /// Load from an explicit path plus a pre-fetched environment map.
    pub fn from_file_and_env(
        path: &Path,
        env_map: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| ConfigError::FileRead(path.display().to_string(), e))?;
            toml::from_str(&content)
                .map_err(|e| ConfigError::TomlParse(path.display().to_string(), e))?
        } else {
            Self::default()
        };

        config.scan.apply_env(env_map);
        Ok(config)
    }
}

impl ScanConfig {
    /// Environment variables take priority over values from the file.
    fn apply_env(&mut self, env_map: &HashMap<String, String>) {
        if let Some(tool) = env_map.get("SCANGATE_TOOL") {
            self.tool = tool.clone();
        }
        if let Some(path) = env_map.get("SCANGATE_PATH") {
            self.path = path.clone();
        }
        if let Some(config_file) = env_map.get("SCANGATE_CONFIG") {
            self.config_file = config_file.clone();
        }
        if let Some(strict) = env_map.get("SCANGATE_STRICT") {
            self.strict = parse_bool(strict);
        }
    }
}

/// Resolve the user configuration file path under the home directory.
fn user_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(USER_CONFIG_DIR)
        .join(CONFIG_FILE_NAME)
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// Default functions
fn default_tool() -> String {
    "bandit".to_string()
}

fn default_scan_path() -> String {
    ".".to_string()
}

fn default_config_file() -> String {
    "bandit.yaml".to_string()
}

fn default_strict() -> bool {
    // Findings do not block builds yet; flip once the backlog is triaged.
    false
}
