use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Contract for providers that turn text into fixed-dimension semantic
/// vectors. A provider is deterministic for a fixed model: the same text
/// always yields the same vector, and an empty input yields a valid
/// (if uninformative) vector rather than an error. Model loading happens
/// at construction, so a provider that exists can embed.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item, and
/// `health_check()` embeds a probe string. Providers only implement
/// `embed_batch()` unless they have a cheaper single-item path.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("provider returned no embedding"))
    }

    /// Get embeddings for multiple texts, preserving input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Name of this provider implementation (e.g. "ollama", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
