//! Corpus Indexer Use Case
//!
//! Turns a loaded course catalog into a searchable vector index: derive
//! each record's embedding text, embed everything in order, hand the
//! vectors to the index factory. Runs once at engine construction and
//! again on explicit rebuilds.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use courserec_domain::entities::CourseRecord;
use courserec_domain::error::{Error, Result};
use courserec_domain::ports::{EmbeddingProvider, VectorIndex, VectorIndexFactory};
use courserec_domain::value_objects::Embedding;

/// Corpus indexer
///
/// Index position i always corresponds to catalog record i; the engine
/// relies on that mapping to resolve matches back to course records.
pub struct CorpusIndexer {
    provider: Arc<dyn EmbeddingProvider>,
    index_factory: Arc<dyn VectorIndexFactory>,
}

impl CorpusIndexer {
    /// Create an indexer from the injected provider and index factory
    pub fn new(
        provider: Arc<dyn EmbeddingProvider>,
        index_factory: Arc<dyn VectorIndexFactory>,
    ) -> Self {
        Self {
            provider,
            index_factory,
        }
    }

    /// Embed every course and build the vector index over the results.
    ///
    /// An empty catalog builds a valid empty index. A batch failure falls
    /// back to record-by-record embedding, where an individual record
    /// that cannot be embedded is substituted with the empty string and
    /// logged; only a failure of that fallback aborts the build.
    pub async fn build_index(&self, courses: &[CourseRecord]) -> Result<Arc<dyn VectorIndex>> {
        let started = Instant::now();

        if courses.is_empty() {
            info!("course catalog is empty, building an empty index");
            return self.index_factory.build(self.provider.dimensions(), &[]);
        }

        let texts: Vec<String> = courses
            .iter()
            .map(CourseRecord::embedding_text)
            .collect();

        let embeddings = match self.provider.embed_batch(&texts).await {
            Ok(embeddings) => embeddings,
            Err(error) => {
                warn!(%error, "batch embedding failed, retrying record by record");
                self.embed_each(&texts).await?
            }
        };

        if embeddings.len() != courses.len() {
            return Err(Error::embedding(format!(
                "provider returned {} embeddings for {} records",
                embeddings.len(),
                courses.len()
            )));
        }

        // Trust the vectors over the provider's advertised dimension; the
        // build validates that all rows agree.
        let dimensions = embeddings
            .first()
            .map_or(self.provider.dimensions(), |e| e.vector.len());
        let index = self.index_factory.build(dimensions, &embeddings)?;

        info!(
            records = courses.len(),
            dimensions,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "vector index built"
        );
        Ok(index)
    }

    /// Embed texts one at a time, substituting the empty string for any
    /// record the provider rejects
    async fn embed_each(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for (row_id, text) in texts.iter().enumerate() {
            match self.provider.embed(text).await {
                Ok(embedding) => embeddings.push(embedding),
                Err(error) => {
                    warn!(
                        row_id,
                        %error,
                        "embedding failed for record, substituting empty text"
                    );
                    embeddings.push(self.provider.embed("").await?);
                }
            }
        }
        Ok(embeddings)
    }
}
