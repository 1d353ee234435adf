//! # Course Recommendation Engine
//!
//! Recommends courses for a free-text query by embedding course text and
//! the query into a shared vector space and retrieving exact nearest
//! neighbors.
//!
//! ## Features
//!
//! - **Semantic Search**: find courses by meaning, not keywords
//! - **Pluggable Embeddings**: Ollama HTTP, local FastEmbed (optional
//!   feature), or a deterministic offline provider
//! - **Exact Retrieval**: brute-force flat L2 index with stable ordering
//!
//! ## Example
//!
//! ```ignore
//! use courserec::infrastructure::{ConfigLoader, build_engine};
//!
//! let config = ConfigLoader::new().load()?;
//! let engine = build_engine(&config).await?;
//! for course in engine.get_recommendations("python basics").await? {
//!     println!("{} -> {}", course.name, course.url);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, port traits, error type
//! - `application` - corpus indexer and recommendation engine services
//! - `infrastructure` - configuration, logging, engine wiring
//! - `providers` - embedding, vector index, and catalog adapters

/// Domain layer - core business logic and types
pub mod domain {
    pub use courserec_domain::*;
}

/// Application layer - use-case services
pub mod application {
    pub use courserec_application::*;
}

/// Infrastructure layer - config, logging, and wiring
pub mod infrastructure {
    pub use courserec_infrastructure::*;
}

/// Provider layer - port implementations
pub mod providers {
    pub use courserec_providers::*;
}

pub mod images;

// Re-export commonly used types at the crate root
pub use application::RecommendationEngine;
pub use domain::{CourseRecord, Error, RankedCourse, Result};
pub use infrastructure::{AppConfig, ConfigLoader, build_engine, init_logging};
