//! Configuration file loading
//!
//! A TOML file with optional `[search]`, `[catalog]` and `[logging]`
//! sections. Every key has a default, so an empty file is valid.

use anyhow::{Context, Result};
use ecrist_search::SearchConfig;
use ecrist_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSchema {
    pub search: SearchConfig,
    pub catalog: CatalogConfig,
    pub logging: TelemetryConfig,
}

/// Where the catalog snapshot comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of products; the demo catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path, else from the first standard location
    /// that exists, else use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        schema
            .search
            .validate()
            .with_context(|| match &config_path {
                Some(p) => format!("Invalid [search] section in {}", p.display()),
                None => "Invalid default search config".to_string(),
            })?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        ".ecrist-search.toml",
        "ecrist-search.toml",
        ".config/ecrist-search.toml",
    ];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
