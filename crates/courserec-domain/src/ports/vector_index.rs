use crate::error::Result;
use crate::value_objects::{Embedding, IndexMatch};
use std::sync::Arc;

/// Nearest-Neighbor Index Interface
///
/// Contract for an immutable-after-construction vector index. An index
/// owns a copy of every indexed vector; the row identifier of a match is
/// the vector's insertion position, which the engine maps back to its
/// course record.
///
/// ## Search contract
///
/// - Exact squared L2 distance, results ordered ascending by distance
/// - Ties broken by insertion order (stable)
/// - At most `min(limit, len)` results; an empty index returns no results
/// - A query whose dimension differs from the index is an error
pub trait VectorIndex: Send + Sync {
    /// Find the `limit` nearest indexed vectors to `query`
    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<IndexMatch>>;

    /// Number of indexed vectors
    fn len(&self) -> usize;

    /// Whether the index holds no vectors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the indexed vectors
    fn dimensions(&self) -> usize;
}

/// Factory for building vector indexes
///
/// Keeps the application layer independent of the concrete index type:
/// the corpus indexer asks the factory for a fresh index per (re)build,
/// which is the only way records enter an index.
pub trait VectorIndexFactory: Send + Sync {
    /// Build an index over `embeddings`, in insertion order.
    ///
    /// Every embedding must have exactly `dimensions` values. An empty
    /// slice builds a valid empty index.
    fn build(&self, dimensions: usize, embeddings: &[Embedding]) -> Result<Arc<dyn VectorIndex>>;
}
