//! # Course Recommendation Application Layer
//!
//! Use-case services composing the domain ports: the corpus indexer
//! (embed every course, build the vector index) and the recommendation
//! engine (embed a query, search the index, map hits back to courses).

pub mod use_cases;

pub use use_cases::{CorpusIndexer, RecommendationEngine};
