//! Embedding provider implementations
//!
//! Every provider implements the
//! [`EmbeddingProvider`](courserec_domain::ports::EmbeddingProvider) port.
//! The Ollama provider talks to a local embedding server over HTTP; the
//! null provider produces deterministic offline vectors for tests and
//! development; FastEmbed (feature `embedding-fastembed`) runs ONNX
//! inference in-process.

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;
pub mod ollama;

#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use null::NullEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
