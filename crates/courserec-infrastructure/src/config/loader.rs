//! Configuration loader
//!
//! Merges configuration from defaults, an optional TOML file, and
//! prefixed environment variables, in that order (later sources win).

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use courserec_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Explicit configuration file path, when the caller supplies one
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path or discovered)
    /// 3. Environment variables with prefix (e.g. `COURSEREC__SEARCH__TOP_N`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("configuration loaded from {}", config_path.display());
            } else {
                warn!("configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("configuration loaded from {}", default_path.display());
        }

        // Double underscore separates nested keys so plain keys can keep
        // their own underscores (top_n, json_format)
        figment = figment.merge(Env::prefixed(&format!("{}__", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
            candidates.push(current_dir.join("config").join(DEFAULT_CONFIG_FILENAME));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(
                config_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.search.top_n == 0 {
        return Err(Error::config("search.top_n cannot be 0"));
    }
    if config.dataset.path.as_os_str().is_empty() {
        return Err(Error::config("dataset.path cannot be empty"));
    }
    if config.embedding.provider.is_empty() {
        return Err(Error::config("embedding.provider cannot be empty"));
    }
    if config.embedding.timeout_secs == 0 {
        return Err(Error::config("embedding.timeout_secs cannot be 0"));
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}
