//! Null embedding provider for testing and development
//!
//! Produces deterministic, hash-derived embeddings with no external
//! dependencies. Always works offline.

use async_trait::async_trait;

use courserec_domain::error::Result;
use courserec_domain::ports::EmbeddingProvider;
use courserec_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider
///
/// Returns fixed-size vectors derived from an FNV-1a hash of the input
/// text. Identical text always yields a bit-identical vector, regardless
/// of batch position, so the determinism contract of the port holds
/// exactly. Useful for unit tests and development without an embedding
/// service.
///
/// # Example
///
/// ```rust
/// use courserec_providers::embedding::NullEmbeddingProvider;
/// use courserec_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        "null"
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a hash of the input bytes
fn fnv1a(text: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Deterministic embedding for one text
fn hash_embedding(text: &str) -> Embedding {
    let hash = fnv1a(text);
    let base = (hash % 1000) as f32 / 1000.0;
    let phase = ((hash >> 32) % 1000) as f32 / 1000.0;

    let vector = (0..EMBEDDING_DIMENSION_NULL)
        .map(|dim| {
            // Varied but reproducible values per dimension
            let variation = (dim as f32 * 0.37 + phase * std::f32::consts::TAU).sin();
            (base + variation * 0.25).clamp(0.0, 1.0)
        })
        .collect();

    Embedding {
        vector,
        model: "null".to_string(),
        dimensions: EMBEDDING_DIMENSION_NULL,
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|text| hash_embedding(text)).collect())
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
