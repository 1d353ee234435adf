//! Ollama Embedding Provider
//!
//! Implements the embedding port against Ollama's local embedding API.
//! Works with local models such as nomic-embed-text and all-minilm.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use courserec_domain::error::{Error, Result};
use courserec_domain::ports::EmbeddingProvider;
use courserec_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC,
};

/// Ollama embedding provider
///
/// Sends one request per text to `{base_url}/api/embeddings`. The HTTP
/// client is injected by the constructor so the factory controls timeouts
/// and TLS setup in one place.
///
/// ## Example
///
/// ```rust,no_run
/// use courserec_providers::embedding::OllamaEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let timeout = Duration::from_secs(30);
///     let client = Client::builder().timeout(timeout).build()?;
///     let provider = OllamaEmbeddingProvider::new(
///         "http://localhost:11434".to_string(),
///         "nomic-embed-text".to_string(),
///         timeout,
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OllamaEmbeddingProvider {
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider
    pub fn new(base_url: String, model: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request the embedding for a single text
    async fn request_embedding(&self, text: &str) -> Result<Embedding> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
        });

        let response = self
            .http_client
            .post(format!(
                "{}/api/embeddings",
                self.base_url.trim_end_matches('/')
            ))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!(
                        "embedding request timed out after {:?}",
                        self.timeout
                    ))
                } else {
                    Error::embedding(format!("embedding request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "Ollama returned {status}: {body}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("invalid embedding response: {e}")))?;

        self.parse_embedding(&body)
    }

    /// Extract the embedding vector from a response body
    fn parse_embedding(&self, body: &serde_json::Value) -> Result<Embedding> {
        let vector: Vec<f32> = body["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding("response is missing the embedding array"))?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect();

        let dimensions = vector.len();
        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        // The embeddings endpoint takes one prompt at a time; keep input
        // order by processing sequentially.
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.request_embedding(text).await?);
        }
        Ok(results)
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        }
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}
