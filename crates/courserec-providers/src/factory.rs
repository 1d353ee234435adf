//! Embedding provider factory
//!
//! Resolves the configured provider name to a concrete implementation.
//! An unknown name is a configuration error, surfaced before the engine
//! starts embedding anything.

use std::sync::Arc;
use std::time::Duration;

use courserec_domain::error::{Error, Result};
use courserec_domain::ports::EmbeddingProvider;
use courserec_domain::value_objects::EmbeddingConfig;

use crate::constants::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};
use crate::embedding::NullEmbeddingProvider;
use crate::embedding::OllamaEmbeddingProvider;

/// Create the embedding provider selected by `config`
pub fn create_embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.provider.as_str() {
        "ollama" => {
            let base_url = config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string());
            let model = config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());
            let timeout = Duration::from_secs(config.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::configuration_with_source("failed to build HTTP client", e))?;

            Ok(Arc::new(OllamaEmbeddingProvider::new(
                base_url, model, timeout, http_client,
            )))
        }
        "null" => Ok(Arc::new(NullEmbeddingProvider::new())),
        #[cfg(feature = "embedding-fastembed")]
        "fastembed" => {
            let model = config
                .model
                .as_deref()
                .map(crate::embedding::fastembed::parse_embedding_model)
                .unwrap_or(fastembed::EmbeddingModel::AllMiniLML6V2);
            Ok(Arc::new(crate::embedding::FastEmbedProvider::with_model(
                model,
            )?))
        }
        other => Err(Error::config(format!(
            "unknown embedding provider '{other}'"
        ))),
    }
}
