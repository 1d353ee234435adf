//! Course catalog entity

use crate::constants::EMBEDDING_TEXT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Entity: Course Record
///
/// One row of the course catalog. Records are created once at load time
/// and never mutated afterwards; the vector index refers back to them by
/// `row_id`, which is the position of the row in the source dataset.
///
/// ## Example
///
/// ```rust
/// use courserec_domain::entities::CourseRecord;
///
/// let course = CourseRecord {
///     row_id: 0,
///     name: "Python for Beginners".to_string(),
///     description: "Learn Python from scratch".to_string(),
///     url: "https://example.com/python".to_string(),
///     image_url: "https://example.com/python.png".to_string(),
/// };
/// assert_eq!(course.embedding_text(), "Python for Beginners Learn Python from scratch");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecord {
    /// Position of this record in the source dataset
    pub row_id: usize,
    /// Course title (`Course_name` column)
    pub name: String,
    /// Course description; missing values are normalized to an empty string
    pub description: String,
    /// Link to the course page (`Course` column)
    pub url: String,
    /// Link to the course image (`Image_URL` column)
    pub image_url: String,
}

impl CourseRecord {
    /// Text that gets embedded for this record.
    ///
    /// Name and description joined by a single space. A record with a
    /// missing description therefore embeds exactly the same text as one
    /// with an explicitly empty description.
    pub fn embedding_text(&self) -> String {
        format!(
            "{}{}{}",
            self.name, EMBEDDING_TEXT_SEPARATOR, self.description
        )
    }
}
