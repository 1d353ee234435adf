//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A dense vector representation of text. Embeddings are produced once by
/// an [`EmbeddingProvider`](crate::ports::EmbeddingProvider) and never
/// mutated; every embedding held by a single index has the same dimension.
///
/// ## Example
///
/// ```rust
/// use courserec_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "all-minilm".to_string(),
///     dimensions: 3,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

/// Configuration for selecting and tuning an embedding provider
///
/// Lives in the domain so both the configuration layer and the provider
/// factory can speak the same type without depending on each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Provider name (`ollama`, `null`, or `fastembed` when compiled in)
    pub provider: String,
    /// Model name; provider-specific default when absent
    pub model: Option<String>,
    /// Base URL for HTTP providers; provider default when absent
    pub base_url: Option<String>,
    /// Request timeout for HTTP providers, in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: None,
            base_url: None,
            timeout_secs: 30,
        }
    }
}
