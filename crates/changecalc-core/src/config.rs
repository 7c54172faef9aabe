//! Configuration management for changecalc
//!
//! Supports feature-specific configuration sections:
//! - [classify] - default output format
//! - [output] - how results are emitted
//! - [log] - logging level and optional log file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

const CONFIG_DIR_NAME: &str = "changecalc";
const REPO_CONFIG_FILE: &str = ".changecalc.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub classify: Option<ClassifyConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,

    #[serde(default)]
    pub log: Option<LogConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            classify: None,
            output: None,
            log: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Output format token: csv, space_delimited or json
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// How a classification result is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitMode {
    /// A single JSON object keyed by bucket name
    #[default]
    Json,
    /// One `name=value` line per bucket
    KeyValue,
}

impl fmt::Display for EmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitMode::Json => f.write_str("json"),
            EmitMode::KeyValue => f.write_str("key-value"),
        }
    }
}

impl FromStr for EmitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(EmitMode::Json),
            "key-value" | "key_value" => Ok(EmitMode::KeyValue),
            other => Err(format!(
                "unknown emit mode '{}' (expected json or key-value)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub emit: EmitMode,

    /// Append to the output file instead of truncating it
    #[serde(default)]
    pub append: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_format() -> String {
    "csv".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Base configuration directory.
/// Respects XDG_CONFIG_HOME, falling back to ~/.config
pub fn get_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|h| h.join(".config")),
    }
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join(CONFIG_DIR_NAME))
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config ($XDG_CONFIG_HOME/changecalc/config.toml)
    /// 3. Repo config (.changecalc.toml)
    /// 4. Explicit config file
    ///
    /// Missing global and repo files are skipped, a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let global = Self::get_config_dir().map(|dir| dir.join("config.toml"));
        Self::load_layers(global.as_deref(), Path::new(REPO_CONFIG_FILE), explicit)
    }

    fn load_layers(
        global: Option<&Path>,
        repo: &Path,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(global) = global {
            if global.exists() {
                config = config.merge(Self::load_from_file(global)?);
            }
        }

        if repo.exists() {
            config = config.merge(Self::load_from_file(repo)?);
        }

        if let Some(explicit) = explicit {
            config = config.merge(Self::load_from_file(explicit)?);
        }

        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }

        if other.classify.is_some() {
            self.classify = other.classify;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        self
    }

    pub fn classify(&self) -> ClassifyConfig {
        self.classify.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }
}
