//! Value objects shared across the engine

mod embedding;
mod search;

pub use embedding::{Embedding, EmbeddingConfig};
pub use search::{IndexMatch, RankedCourse};
