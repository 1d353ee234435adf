use crate::entities::CourseRecord;
use crate::error::Result;

/// Course Catalog Source Interface
///
/// Contract for loading the full course catalog from an external source.
/// Loading happens once per engine construction (and once per explicit
/// rebuild); there is no incremental update path. Implementations assign
/// `row_id` from source order and normalize missing descriptions to the
/// empty string.
pub trait CourseCatalogSource: Send + Sync {
    /// Load every course record from the source
    fn load_courses(&self) -> Result<Vec<CourseRecord>>;
}
