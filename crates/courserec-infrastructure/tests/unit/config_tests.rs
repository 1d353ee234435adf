//! Tests for configuration loading and validation
//!
//! The environment variable test mutates process state and must run
//! sequentially:
//!
//! ```bash
//! cargo test -p courserec-infrastructure --test unit -- --test-threads=1 --ignored
//! ```

use std::io::Write;
use std::path::PathBuf;

use courserec_domain::error::Error;
use courserec_infrastructure::config::ConfigLoader;
use courserec_infrastructure::logging::parse_log_level;
use tempfile::NamedTempFile;

// ============================================================================
// Test Helpers
// ============================================================================

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file.flush().expect("flush config");
    file
}

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn defaults_load_without_any_file() {
    // A path that does not exist falls back to pure defaults
    let loader = ConfigLoader::new().with_config_path("/nonexistent/courserec.toml");

    let config = loader.load().expect("defaults load");

    assert_eq!(config.search.top_n, 10);
    assert_eq!(config.embedding.provider, "ollama");
    assert_eq!(config.embedding.timeout_secs, 30);
    assert_eq!(config.dataset.path, PathBuf::from("dataset.csv"));
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn toml_file_overrides_defaults() {
    let file = config_file(
        r#"
        [dataset]
        path = "courses.csv"

        [embedding]
        provider = "null"

        [search]
        top_n = 5
        "#,
    );
    let loader = ConfigLoader::new().with_config_path(file.path());

    let config = loader.load().expect("config loads");

    assert_eq!(config.dataset.path, PathBuf::from("courses.csv"));
    assert_eq!(config.embedding.provider, "null");
    assert_eq!(config.search.top_n, 5);
    // Untouched sections keep their defaults
    assert_eq!(config.logging.level, "info");
}

/// Verify env vars with the `COURSEREC__` prefix override file values
///
/// Run with: `cargo test -p courserec-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn env_vars_override_file_values() {
    let file = config_file("[search]\ntop_n = 5\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var("COURSEREC__SEARCH__TOP_N", "3");
    }
    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("config loads");
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var("COURSEREC__SEARCH__TOP_N");
    }

    assert_eq!(config.search.top_n, 3);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn zero_top_n_is_rejected() {
    let file = config_file("[search]\ntop_n = 0\n");
    let loader = ConfigLoader::new().with_config_path(file.path());

    let error = loader.load().expect_err("must fail validation");
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn zero_embedding_timeout_is_rejected() {
    let file = config_file("[embedding]\ntimeout_secs = 0\n");
    let loader = ConfigLoader::new().with_config_path(file.path());

    let error = loader.load().expect_err("must fail validation");
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn invalid_log_level_is_rejected() {
    let file = config_file("[logging]\nlevel = \"verbose\"\n");
    let loader = ConfigLoader::new().with_config_path(file.path());

    let error = loader.load().expect_err("must fail validation");
    assert!(matches!(error, Error::Configuration { .. }));
}

// ============================================================================
// Log Level Parsing
// ============================================================================

#[test]
fn log_levels_parse_case_insensitively() {
    assert_eq!(parse_log_level("INFO").expect("parses"), tracing::Level::INFO);
    assert_eq!(
        parse_log_level("warning").expect("parses"),
        tracing::Level::WARN
    );
    assert!(parse_log_level("loud").is_err());
}
