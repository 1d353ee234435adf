//! Application use cases

pub mod indexing;
pub mod recommendation;

pub use indexing::CorpusIndexer;
pub use recommendation::RecommendationEngine;
