//! Engine wiring
//!
//! Composes concrete providers into a running recommendation engine
//! according to the application config. This is the only place that
//! knows both the port traits and their implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use courserec_application::RecommendationEngine;
use courserec_domain::error::Result;
use courserec_domain::ports::{CourseCatalogSource, EmbeddingProvider, VectorIndexFactory};
use courserec_providers::catalog::CsvCourseCatalog;
use courserec_providers::factory::create_embedding_provider;
use courserec_providers::index::FlatIndexFactory;

/// Create the embedding provider selected by the config
///
/// Separated from [`build_engine`] so health checks can probe the
/// provider without loading the dataset.
pub fn build_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider = create_embedding_provider(&config.embedding)?;
    info!(
        provider = provider.provider_name(),
        dimensions = provider.dimensions(),
        "embedding provider ready"
    );
    Ok(provider)
}

/// Build a fully initialized recommendation engine.
///
/// Loads the catalog and builds the index before returning; any failure
/// here aborts startup, there is no partially usable engine.
pub async fn build_engine(config: &AppConfig) -> Result<RecommendationEngine> {
    let provider = build_embedding_provider(config)?;
    let catalog = CsvCourseCatalog::new(&config.dataset.path);
    let index_factory: Arc<dyn VectorIndexFactory> = Arc::new(FlatIndexFactory);

    let engine = RecommendationEngine::with_top_n(
        catalog.load_courses()?,
        provider,
        index_factory,
        config.search.top_n,
    )
    .await?;

    info!(
        courses = engine.courses().len(),
        indexed = engine.index_len(),
        "recommendation engine ready"
    );
    Ok(engine)
}
