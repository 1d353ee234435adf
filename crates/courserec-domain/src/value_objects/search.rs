//! Search-Related Value Objects

use crate::entities::CourseRecord;
use serde::{Deserialize, Serialize};

/// Value Object: Index Match
///
/// One hit from a vector index search. Carries only the row identifier
/// and the distance; mapping back to the matched record is the engine's
/// job, since only it owns the catalog.
///
/// Distances are exact squared L2, so lower means more similar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexMatch {
    /// Insertion-order row identifier of the matched vector
    pub row_id: usize,
    /// Squared L2 distance between the query and the matched vector
    pub distance: f32,
}

/// Value Object: Ranked Course
///
/// A course record paired with its distance to the query. The public
/// recommendation API strips the distance; this form keeps it available
/// for tests and for callers that want to apply their own cutoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCourse {
    /// The recommended course
    pub course: CourseRecord,
    /// Squared L2 distance between the query and this course's embedding
    pub distance: f32,
}
