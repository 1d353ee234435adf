//! # Course Recommendation Domain
//!
//! Core business logic and types for the course recommendation engine.
//! This crate holds the entities, value objects, port traits, and error
//! type shared by every other layer. It stays free of I/O concerns so
//! providers and infrastructure can be swapped behind the port traits.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::CourseRecord;
pub use error::{Error, Result};
pub use ports::{CourseCatalogSource, EmbeddingProvider, VectorIndex, VectorIndexFactory};
pub use value_objects::{Embedding, EmbeddingConfig, IndexMatch, RankedCourse};
