//! Configuration data types

use std::path::PathBuf;

use courserec_domain::constants::DEFAULT_TOP_N;
use courserec_domain::value_objects::EmbeddingConfig;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Dataset source settings
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Embedding provider selection and tuning
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Query-time search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    /// Path to the course catalog CSV
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dataset.csv"),
        }
    }
}

/// Query-time search settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Number of recommendations returned per query
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted log lines instead of plain text
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
