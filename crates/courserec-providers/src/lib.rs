//! # Course Recommendation Providers
//!
//! Adapter implementations for the domain ports: embedding providers
//! (Ollama HTTP, deterministic null, optional local FastEmbed), the flat
//! exact-L2 vector index, and the CSV course catalog source. Provider
//! selection happens through [`factory::create_embedding_provider`].

pub mod catalog;
pub mod constants;
pub mod embedding;
pub mod factory;
pub mod index;

pub use catalog::CsvCourseCatalog;
#[cfg(feature = "embedding-fastembed")]
pub use embedding::FastEmbedProvider;
pub use embedding::{NullEmbeddingProvider, OllamaEmbeddingProvider};
pub use factory::create_embedding_provider;
pub use index::{FlatIndexFactory, FlatL2Index};
