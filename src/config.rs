//! Configuration loading for pdfsmith
//!
//! Values resolve in precedence order: built-in defaults, then an optional
//! TOML config file, then `PDFSMITH_*` environment variables, then CLI
//! flags. The merge produces the effective [`ServerConfig`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::web::{
    ServerConfig, DEFAULT_BIND, DEFAULT_BODY_LIMIT, DEFAULT_PDF_PATH, DEFAULT_PDF_URL,
    DEFAULT_PORT,
};

/// Config file name probed in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pdfsmith.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// File-backed configuration
///
/// Every field is optional in the file; missing values fall back to the
/// built-in defaults during [`Config::merge_with_cli`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to bind to
    pub bind: Option<String>,
    /// Port to listen on
    pub port: Option<u16>,
    /// Backing file served by the download endpoint
    pub pdf_path: Option<PathBuf>,
    /// Placeholder URL returned by the generate endpoint
    pub pdf_url: Option<String>,
    /// Maximum request body size in bytes
    pub body_limit: Option<usize>,
}

impl Config {
    /// Load configuration from the default locations
    ///
    /// Checks `./pdfsmith.toml` first, then the user config directory.
    /// Returns the empty config when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::load_from_path(LOCAL_CONFIG_FILE);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// User-level config file location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pdfsmith").join("config.toml"))
    }

    /// Apply `PDFSMITH_*` environment variables on top of file values
    ///
    /// Unparseable numeric values are ignored rather than treated as errors.
    pub fn apply_env(mut self) -> Self {
        if let Ok(bind) = std::env::var("PDFSMITH_BIND") {
            self.bind = Some(bind);
        }
        if let Some(port) = std::env::var("PDFSMITH_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.port = Some(port);
        }
        if let Ok(path) = std::env::var("PDFSMITH_PDF_PATH") {
            self.pdf_path = Some(PathBuf::from(path));
        }
        if let Ok(url) = std::env::var("PDFSMITH_PDF_URL") {
            self.pdf_url = Some(url);
        }
        if let Some(limit) = std::env::var("PDFSMITH_BODY_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.body_limit = Some(limit);
        }
        self
    }

    /// Merge config file values with CLI overrides (CLI takes precedence)
    pub fn merge_with_cli(&self, cli: &CliOverrides) -> ServerConfig {
        ServerConfig {
            bind: cli
                .bind
                .clone()
                .or_else(|| self.bind.clone())
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: cli.port.or(self.port).unwrap_or(DEFAULT_PORT),
            pdf_path: cli
                .pdf_path
                .clone()
                .or_else(|| self.pdf_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH)),
            pdf_url: cli
                .pdf_url
                .clone()
                .or_else(|| self.pdf_url.clone())
                .unwrap_or_else(|| DEFAULT_PDF_URL.to_string()),
            body_limit: cli.body_limit.or(self.body_limit).unwrap_or(DEFAULT_BODY_LIMIT),
        }
    }
}

/// CLI override values
///
/// `None` means the flag was not given and lower-precedence sources apply.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub pdf_path: Option<PathBuf>,
    pub pdf_url: Option<String>,
    pub body_limit: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }
}
