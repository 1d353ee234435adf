//! Recommendation Engine Use Case
//!
//! The orchestrator: owns the course catalog, the embedding provider,
//! and the current vector index. Construction loads the catalog and
//! builds the index before returning, so an engine that exists can
//! answer queries; any build failure is fatal.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::use_cases::CorpusIndexer;
use courserec_domain::constants::DEFAULT_TOP_N;
use courserec_domain::entities::CourseRecord;
use courserec_domain::error::{Error, Result};
use courserec_domain::ports::{
    CourseCatalogSource, EmbeddingProvider, VectorIndex, VectorIndexFactory,
};
use courserec_domain::value_objects::RankedCourse;

/// Recommendation engine
///
/// Queries run against an immutable `Arc` snapshot of the index taken
/// under a read lock, so searches never block each other. A rebuild
/// constructs the replacement index first and swaps it in under the
/// write lock, which serializes rebuilds against readers.
pub struct RecommendationEngine {
    courses: Vec<CourseRecord>,
    provider: Arc<dyn EmbeddingProvider>,
    index_factory: Arc<dyn VectorIndexFactory>,
    index: RwLock<Arc<dyn VectorIndex>>,
    top_n: usize,
}

impl RecommendationEngine {
    /// Build an engine from a catalog source, with the default result count
    pub async fn from_catalog_source(
        source: &dyn CourseCatalogSource,
        provider: Arc<dyn EmbeddingProvider>,
        index_factory: Arc<dyn VectorIndexFactory>,
    ) -> Result<Self> {
        Self::with_top_n(source.load_courses()?, provider, index_factory, DEFAULT_TOP_N).await
    }

    /// Build an engine over already-loaded courses with an explicit
    /// default result count
    pub async fn with_top_n(
        courses: Vec<CourseRecord>,
        provider: Arc<dyn EmbeddingProvider>,
        index_factory: Arc<dyn VectorIndexFactory>,
        top_n: usize,
    ) -> Result<Self> {
        if top_n == 0 {
            return Err(Error::invalid_argument("top_n must be greater than zero"));
        }

        let indexer = CorpusIndexer::new(provider.clone(), index_factory.clone());
        let index = indexer.build_index(&courses).await?;

        Ok(Self {
            courses,
            provider,
            index_factory,
            index: RwLock::new(index),
            top_n,
        })
    }

    /// Top recommendations for a free-text query, best match first.
    ///
    /// The query is embedded as-is; blank input is the caller's decision
    /// and still produces whatever the model and index return. An empty
    /// result means nothing is indexed, while an embedding failure is an
    /// error, so callers can tell the two apart.
    pub async fn get_recommendations(&self, query: &str) -> Result<Vec<CourseRecord>> {
        Ok(self
            .recommend(query, self.top_n)
            .await?
            .into_iter()
            .map(|ranked| ranked.course)
            .collect())
    }

    /// Recommendations with their distances exposed
    pub async fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<RankedCourse>> {
        let embedding = self.provider.embed(query).await?;
        let index = self.current_index()?;
        let matches = index.search(&embedding.vector, top_n)?;
        debug!(query, results = matches.len(), "similarity search complete");

        matches
            .into_iter()
            .map(|hit| {
                let course = self.courses.get(hit.row_id).cloned().ok_or_else(|| {
                    Error::internal(format!(
                        "index row {} has no matching course record",
                        hit.row_id
                    ))
                })?;
                Ok(RankedCourse {
                    course,
                    distance: hit.distance,
                })
            })
            .collect()
    }

    /// Re-embed the held catalog and atomically swap in the new index.
    ///
    /// This is the only way index contents change; there is no
    /// incremental update path.
    pub async fn rebuild(&self) -> Result<()> {
        let indexer = CorpusIndexer::new(self.provider.clone(), self.index_factory.clone());
        let index = indexer.build_index(&self.courses).await?;

        let mut current = self
            .index
            .write()
            .map_err(|_| Error::internal("vector index lock poisoned"))?;
        *current = index;
        Ok(())
    }

    /// The course catalog this engine owns
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Number of indexed vectors
    pub fn index_len(&self) -> usize {
        self.current_index().map_or(0, |index| index.len())
    }

    /// Default result count used by [`Self::get_recommendations`]
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Name of the embedding provider backing this engine
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    fn current_index(&self) -> Result<Arc<dyn VectorIndex>> {
        Ok(self
            .index
            .read()
            .map_err(|_| Error::internal("vector index lock poisoned"))?
            .clone())
    }
}
