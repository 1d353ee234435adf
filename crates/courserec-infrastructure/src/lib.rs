//! # Course Recommendation Infrastructure
//!
//! Cross-cutting technical concerns: layered configuration (defaults,
//! TOML file, environment), logging bootstrap, error context helpers,
//! and the wiring that composes providers into a running engine.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_embedding_provider, build_engine};
pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;
