//! CSV course catalog source
//!
//! Reads the course dataset from a delimited text file. The legacy
//! dataset is ISO-8859-1 encoded, so rows are read as raw bytes and
//! decoded Latin-1 into UTF-8 strings at this boundary; every byte maps
//! to the Unicode code point of the same value, which makes the decode
//! lossless for that encoding and tolerant of non-UTF8 input.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ByteRecord;
use tracing::info;

use courserec_domain::entities::CourseRecord;
use courserec_domain::error::{Error, Result};
use courserec_domain::ports::CourseCatalogSource;

/// Required header column holding the course title
pub const COLUMN_COURSE_NAME: &str = "Course_name";
/// Required header column holding the course description
pub const COLUMN_DESCRIPTION: &str = "Description";
/// Required header column holding the course page URL
pub const COLUMN_COURSE_URL: &str = "Course";
/// Required header column holding the course image URL
pub const COLUMN_IMAGE_URL: &str = "Image_URL";

/// CSV-backed course catalog
///
/// Loads the whole file on each call; the engine loads once at startup
/// and again only on an explicit rebuild.
pub struct CsvCourseCatalog {
    path: PathBuf,
}

impl CsvCourseCatalog {
    /// Create a catalog reading from `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The dataset path this catalog reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CourseCatalogSource for CsvCourseCatalog {
    fn load_courses(&self) -> Result<Vec<CourseRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::dataset(format!("cannot open dataset {}: {e}", self.path.display()))
        })?;

        // flexible: rows with trailing missing fields are legal and the
        // absent values normalize to empty strings below
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .byte_headers()
            .map_err(|e| Error::dataset(format!("cannot read dataset header: {e}")))?
            .clone();
        let columns = ColumnLayout::resolve(&headers)?;

        let mut courses = Vec::new();
        for (row_id, record) in reader.byte_records().enumerate() {
            let record = record
                .map_err(|e| Error::dataset(format!("malformed dataset row {row_id}: {e}")))?;
            courses.push(columns.course_from(row_id, &record));
        }

        info!(
            count = courses.len(),
            path = %self.path.display(),
            "course catalog loaded"
        );
        Ok(courses)
    }
}

/// Resolved positions of the required columns in the header row
struct ColumnLayout {
    name: usize,
    description: usize,
    url: usize,
    image_url: usize,
}

impl ColumnLayout {
    fn resolve(headers: &ByteRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| latin1_to_string(header) == column)
                .ok_or_else(|| {
                    Error::dataset(format!("dataset is missing required column '{column}'"))
                })
        };

        Ok(Self {
            name: find(COLUMN_COURSE_NAME)?,
            description: find(COLUMN_DESCRIPTION)?,
            url: find(COLUMN_COURSE_URL)?,
            image_url: find(COLUMN_IMAGE_URL)?,
        })
    }

    fn course_from(&self, row_id: usize, record: &ByteRecord) -> CourseRecord {
        // Absent fields (short rows) and empty fields both become ""
        let field = |index: usize| record.get(index).map(latin1_to_string).unwrap_or_default();

        CourseRecord {
            row_id,
            name: field(self.name),
            description: field(self.description),
            url: field(self.url),
            image_url: field(self.image_url),
        }
    }
}

/// Decode ISO-8859-1 bytes into a UTF-8 string
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
