//! Service configuration
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error; a malformed one is.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::loader::DEFAULT_SOURCE_FILE;
use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 3220;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://curriculum.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_PORT: &str = "PORT";
pub const ENV_SOURCE: &str = "CURRICULUM_SOURCE";
pub const ENV_DATABASE_URL: &str = "CURRICULUM_DATABASE_URL";
pub const ENV_CONFIG: &str = "CURRICULUM_CONFIG";

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub source_file: Option<PathBuf>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub source_file: Option<PathBuf>,
    pub database_url: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub source_file: PathBuf,
    pub database_url: String,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve configuration from the command line, environment, config file and defaults
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let toml = load_toml_config(cli.config_file.as_deref())?;
        Self::from_sources(cli, &toml)
    }

    /// Resolve against an already loaded config file
    pub fn from_sources(cli: &CliOverrides, toml: &TomlConfig) -> Result<Self> {
        let port = match cli.port {
            Some(port) => port,
            None => match env_var(ENV_PORT) {
                Some(raw) => raw.trim().parse().map_err(|e| {
                    Error::Config(format!("Invalid {} value {:?}: {}", ENV_PORT, raw, e))
                })?,
                None => toml.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let source_file = cli
            .source_file
            .clone()
            .or_else(|| env_var(ENV_SOURCE).map(PathBuf::from))
            .or_else(|| toml.source_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_FILE));

        let database_url = cli
            .database_url
            .clone()
            .or_else(|| env_var(ENV_DATABASE_URL))
            .or_else(|| toml.database_url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let log_level = toml
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            port,
            source_file,
            database_url,
            log_level,
        })
    }
}

/// Load the config file
///
/// An explicit path (command line, then `CURRICULUM_CONFIG`) must exist.
/// Otherwise the platform config directory is tried and silently skipped
/// when absent.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| env_var(ENV_CONFIG).map(PathBuf::from));

    let path = match explicit {
        Some(path) => path,
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file found, using defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;

    info!("Loaded config file: {}", path.display());
    parse_toml_config(&content)
}

pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
}

/// `~/.config/curriculum/config.toml` on Linux, the platform equivalent elsewhere
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("curriculum").join("config.toml"))
}

// Empty values count as unset
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
