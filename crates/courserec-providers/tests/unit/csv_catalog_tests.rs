//! Tests for the CSV course catalog source

use std::io::Write;

use courserec_domain::error::Error;
use courserec_domain::ports::CourseCatalogSource;
use courserec_providers::catalog::CsvCourseCatalog;
use tempfile::NamedTempFile;

// ============================================================================
// Test Helpers
// ============================================================================

fn dataset(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write dataset");
    file.flush().expect("flush dataset");
    file
}

const HEADER: &[u8] = b"Course_name,Description,Course,Image_URL\n";

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn loads_records_in_row_order() {
    let file = dataset(
        b"Course_name,Description,Course,Image_URL\n\
          Python for Beginners,Learn the basics,https://example.com/py,https://img/py.png\n\
          Advanced Python,Go deeper,https://example.com/adv,https://img/adv.png\n",
    );
    let catalog = CsvCourseCatalog::new(file.path());

    let courses = catalog.load_courses().expect("catalog loads");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].row_id, 0);
    assert_eq!(courses[0].name, "Python for Beginners");
    assert_eq!(courses[0].url, "https://example.com/py");
    assert_eq!(courses[0].image_url, "https://img/py.png");
    assert_eq!(courses[1].row_id, 1);
    assert_eq!(courses[1].name, "Advanced Python");
}

#[test]
fn decodes_latin1_bytes_losslessly() {
    // "José" with an ISO-8859-1 e-acute (0xE9), invalid as UTF-8
    let mut raw = HEADER.to_vec();
    raw.extend_from_slice(b"Curso de Python,Aprende con Jos\xe9,https://example.com/es,\n");
    let file = dataset(&raw);
    let catalog = CsvCourseCatalog::new(file.path());

    let courses = catalog.load_courses().expect("catalog loads");

    assert_eq!(courses[0].description, "Aprende con José");
}

#[test]
fn missing_description_becomes_empty_string() {
    // One row with an empty field, one short row with no field at all
    let mut raw = HEADER.to_vec();
    raw.extend_from_slice(b"Intro to SQL,,https://example.com/sql,https://img/sql.png\n");
    raw.extend_from_slice(b"Data Basics\n");
    let file = dataset(&raw);
    let catalog = CsvCourseCatalog::new(file.path());

    let courses = catalog.load_courses().expect("catalog loads");

    assert_eq!(courses[0].description, "");
    assert_eq!(courses[1].name, "Data Basics");
    assert_eq!(courses[1].description, "");
    assert_eq!(courses[1].url, "");
}

#[test]
fn header_order_does_not_matter() {
    let file = dataset(
        b"Image_URL,Course,Course_name,Description\n\
          https://img/r.png,https://example.com/r,R for Statistics,Vectors and frames\n",
    );
    let catalog = CsvCourseCatalog::new(file.path());

    let courses = catalog.load_courses().expect("catalog loads");

    assert_eq!(courses[0].name, "R for Statistics");
    assert_eq!(courses[0].description, "Vectors and frames");
    assert_eq!(courses[0].url, "https://example.com/r");
    assert_eq!(courses[0].image_url, "https://img/r.png");
}

#[test]
fn empty_dataset_yields_empty_catalog() {
    let file = dataset(HEADER);
    let catalog = CsvCourseCatalog::new(file.path());

    let courses = catalog.load_courses().expect("catalog loads");
    assert!(courses.is_empty());
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn missing_required_column_is_a_dataset_error() {
    let file = dataset(b"Course_name,Description,Course\nOrphan,No image column,https://x\n");
    let catalog = CsvCourseCatalog::new(file.path());

    let error = catalog.load_courses().expect_err("must fail");
    match error {
        Error::Dataset { message } => assert!(
            message.contains("Image_URL"),
            "error should name the missing column, got: {message}"
        ),
        other => panic!("expected dataset error, got: {other}"),
    }
}

#[test]
fn unreadable_file_is_a_dataset_error() {
    let catalog = CsvCourseCatalog::new("/nonexistent/dataset.csv");
    let error = catalog.load_courses().expect_err("must fail");
    assert!(matches!(error, Error::Dataset { .. }));
}
