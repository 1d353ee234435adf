//! Flat exact-L2 vector index
//!
//! Brute-force nearest-neighbor search over a contiguous block of
//! vectors. Exactness over approximation is a deliberate trade-off for
//! catalog-sized corpora; an approximate structure could replace this
//! behind the same port, at the cost of ranking fidelity.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use courserec_domain::error::{Error, Result};
use courserec_domain::ports::{VectorIndex, VectorIndexFactory};
use courserec_domain::value_objects::{Embedding, IndexMatch};

/// Flat L2 index
///
/// All vectors live in one contiguous row-major buffer; the row identifier
/// of a match is the vector's insertion position. The index is immutable
/// once built, so concurrent reads need no synchronization.
pub struct FlatL2Index {
    dimensions: usize,
    data: Vec<f32>,
    rows: usize,
}

impl FlatL2Index {
    /// Build an index over `embeddings`, in insertion order.
    ///
    /// An empty slice builds a valid empty index. An embedding whose
    /// dimension differs from `dimensions` fails the build.
    pub fn build(dimensions: usize, embeddings: &[Embedding]) -> Result<Self> {
        let mut data = Vec::with_capacity(dimensions * embeddings.len());
        for (row_id, embedding) in embeddings.iter().enumerate() {
            if embedding.vector.len() != dimensions {
                return Err(Error::index(format!(
                    "embedding {row_id} has {} dimensions, index expects {dimensions}",
                    embedding.vector.len()
                )));
            }
            data.extend_from_slice(&embedding.vector);
        }

        Ok(Self {
            dimensions,
            data,
            rows: embeddings.len(),
        })
    }

    /// The vector stored at `row_id`
    fn row(&self, row_id: usize) -> &[f32] {
        let start = row_id * self.dimensions;
        &self.data[start..start + self.dimensions]
    }
}

impl VectorIndex for FlatL2Index {
    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<IndexMatch>> {
        if query.len() != self.dimensions {
            return Err(Error::index(format!(
                "query has {} dimensions, index holds {}-dimensional vectors",
                query.len(),
                self.dimensions
            )));
        }
        if self.rows == 0 || limit == 0 {
            return Ok(Vec::new());
        }

        // Bounded max-heap keeps the k smallest distances: O(n log k)
        // instead of sorting all n rows.
        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::with_capacity(limit + 1);
        for row_id in 0..self.rows {
            let entry = HeapEntry {
                distance: squared_l2(query, self.row(row_id)),
                row_id,
            };

            if heap.len() < limit {
                heap.push(entry);
            } else if let Some(worst) = heap.peek() {
                // Rows are visited in insertion order, so on an exact
                // distance tie the earlier row is already in the heap and
                // the later one compares greater.
                if entry < *worst {
                    heap.pop();
                    heap.push(entry);
                }
            }
        }

        let mut matches: Vec<IndexMatch> = heap
            .into_iter()
            .map(|entry| IndexMatch {
                row_id: entry.row_id,
                distance: entry.distance,
            })
            .collect();
        matches.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.row_id.cmp(&b.row_id))
        });

        Ok(matches)
    }

    fn len(&self) -> usize {
        self.rows
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Heap entry ordered by (distance, insertion order)
///
/// The natural ordering makes `BinaryHeap` a max-heap whose top is the
/// worst candidate kept so far.
#[derive(PartialEq)]
struct HeapEntry {
    distance: f32,
    row_id: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.row_id.cmp(&other.row_id))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Squared Euclidean distance between two equal-length vectors
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Factory producing [`FlatL2Index`] instances behind the domain port
pub struct FlatIndexFactory;

impl VectorIndexFactory for FlatIndexFactory {
    fn build(&self, dimensions: usize, embeddings: &[Embedding]) -> Result<Arc<dyn VectorIndex>> {
        Ok(Arc::new(FlatL2Index::build(dimensions, embeddings)?))
    }
}
