//! Provider-level constants

/// Default Ollama server URL
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama embedding model
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text";

/// Dimension of `nomic-embed-text` embeddings
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Dimension of `all-minilm` embeddings
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Dimension of `mxbai-embed-large` embeddings
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Fallback dimension for unrecognized Ollama models
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Dimension of null provider embeddings (matches common sentence models)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Dimension of the default FastEmbed model (AllMiniLML6V2)
#[cfg(feature = "embedding-fastembed")]
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;
