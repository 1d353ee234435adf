//! Tests for the corpus indexer and the recommendation engine
//!
//! The engine is exercised end to end against the real flat index and
//! either the deterministic null provider or small stub providers with
//! handcrafted vectors, so rankings are fully controlled.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use courserec_application::{CorpusIndexer, RecommendationEngine};
use courserec_domain::entities::CourseRecord;
use courserec_domain::error::{Error, Result};
use courserec_domain::ports::{CourseCatalogSource, EmbeddingProvider, VectorIndexFactory};
use courserec_domain::value_objects::Embedding;
use courserec_providers::embedding::NullEmbeddingProvider;
use courserec_providers::index::FlatIndexFactory;

// ============================================================================
// Test Helpers
// ============================================================================

fn course(row_id: usize, name: &str, description: &str) -> CourseRecord {
    CourseRecord {
        row_id,
        name: name.to_string(),
        description: description.to_string(),
        url: format!("https://example.com/{row_id}"),
        image_url: String::new(),
    }
}

fn factory() -> Arc<dyn VectorIndexFactory> {
    Arc::new(FlatIndexFactory)
}

async fn engine_with_null_provider(courses: Vec<CourseRecord>) -> RecommendationEngine {
    RecommendationEngine::with_top_n(courses, Arc::new(NullEmbeddingProvider::new()), factory(), 10)
        .await
        .expect("engine builds")
}

/// Stub provider mapping known texts to handcrafted vectors
struct FixtureEmbeddingProvider {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
}

impl FixtureEmbeddingProvider {
    fn new(entries: &[(&str, &[f32])], fallback: &[f32]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(text, vector)| (text.to_string(), vector.to_vec()))
                .collect(),
            fallback: fallback.to_vec(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for FixtureEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| {
                let vector = self
                    .vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| self.fallback.clone());
                Embedding {
                    dimensions: vector.len(),
                    vector,
                    model: "fixture".to_string(),
                }
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.fallback.len()
    }

    fn provider_name(&self) -> &str {
        "fixture"
    }
}

/// Stub provider that rejects one specific text
struct PoisonedEmbeddingProvider {
    poisoned: String,
    inner: NullEmbeddingProvider,
}

#[async_trait]
impl EmbeddingProvider for PoisonedEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.iter().any(|text| *text == self.poisoned) {
            return Err(Error::embedding("provider rejected the input"));
        }
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "poisoned"
    }
}

/// Catalog source returning a fixed set of courses
struct StaticCatalog {
    courses: Vec<CourseRecord>,
}

impl CourseCatalogSource for StaticCatalog {
    fn load_courses(&self) -> Result<Vec<CourseRecord>> {
        Ok(self.courses.clone())
    }
}

// ============================================================================
// Index Build Tests
// ============================================================================

#[tokio::test]
async fn index_size_matches_corpus_size() {
    let courses = vec![
        course(0, "Python for Beginners", ""),
        course(1, "Advanced Python", ""),
        course(2, "Intro to SQL", ""),
    ];
    let engine = engine_with_null_provider(courses).await;

    assert_eq!(engine.index_len(), engine.courses().len());
}

#[tokio::test]
async fn indexer_substitutes_empty_text_for_rejected_records() {
    let courses = vec![
        course(0, "Good Course", "fine"),
        course(1, "Bad Course", "poison"),
        course(2, "Another Course", "fine too"),
    ];
    let provider = Arc::new(PoisonedEmbeddingProvider {
        poisoned: courses[1].embedding_text(),
        inner: NullEmbeddingProvider::new(),
    });

    let indexer = CorpusIndexer::new(provider, factory());
    let index = indexer.build_index(&courses).await.expect("build succeeds");

    // The rejected record is indexed with the empty-string fallback, so
    // the index still covers the whole corpus
    assert_eq!(index.len(), 3);
}

#[tokio::test]
async fn engine_rejects_zero_top_n() {
    let result = RecommendationEngine::with_top_n(
        vec![course(0, "Anything", "")],
        Arc::new(NullEmbeddingProvider::new()),
        factory(),
        0,
    )
    .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

// ============================================================================
// Recommendation Tests
// ============================================================================

#[tokio::test]
async fn exact_title_match_ranks_first() {
    // Identical text embeds to an identical vector, so the matching
    // course sits at distance zero
    let courses = vec![
        course(0, "Intro to SQL", ""),
        course(1, "Python for Beginners", ""),
        course(2, "Data Engineering", ""),
    ];
    let engine = engine_with_null_provider(courses).await;

    // The indexed text is "Python for Beginners " (name, separator,
    // empty description)
    let ranked = engine
        .recommend("Python for Beginners ", 3)
        .await
        .expect("query succeeds");

    assert_eq!(ranked[0].course.name, "Python for Beginners");
    assert!(ranked[0].distance.abs() < f32::EPSILON);
}

#[tokio::test]
async fn python_query_ranks_python_courses_above_sql() {
    let courses = vec![
        course(0, "Python for Beginners", ""),
        course(1, "Advanced Python", ""),
        course(2, "Intro to SQL", ""),
    ];
    let provider = Arc::new(FixtureEmbeddingProvider::new(
        &[
            (&courses[0].embedding_text(), &[1.0, 0.0, 0.0]),
            (&courses[1].embedding_text(), &[0.9, 0.1, 0.0]),
            (&courses[2].embedding_text(), &[0.0, 1.0, 0.0]),
            ("python basics", &[0.95, 0.05, 0.0]),
        ],
        &[0.5, 0.5, 0.5],
    ));
    let engine = RecommendationEngine::with_top_n(courses, provider, factory(), 10)
        .await
        .expect("engine builds");

    let recommendations = engine
        .get_recommendations("python basics")
        .await
        .expect("query succeeds");

    let names: Vec<&str> = recommendations
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names[2], "Intro to SQL", "SQL must rank below both Python courses");
    assert!(names[..2].contains(&"Python for Beginners"));
    assert!(names[..2].contains(&"Advanced Python"));
}

#[tokio::test]
async fn empty_corpus_returns_no_recommendations() {
    let engine = engine_with_null_provider(Vec::new()).await;

    let recommendations = engine
        .get_recommendations("anything at all")
        .await
        .expect("query succeeds");

    assert!(recommendations.is_empty());
}

#[tokio::test]
async fn results_are_capped_at_top_n() {
    let courses: Vec<CourseRecord> = (0..12)
        .map(|i| course(i, &format!("Course {i}"), "description"))
        .collect();
    let engine = engine_with_null_provider(courses).await;

    let recommendations = engine
        .get_recommendations("Course 3")
        .await
        .expect("query succeeds");

    assert_eq!(recommendations.len(), 10);
}

#[tokio::test]
async fn missing_description_embeds_like_empty_description() {
    // Two records with the same title and an empty description (one from
    // a missing CSV field, one explicit) derive identical embedding text,
    // so they land at identical distances
    let courses = vec![
        course(0, "Shared Title", ""),
        course(1, "Shared Title", ""),
        course(2, "Unrelated Topic", "something else"),
    ];
    let engine = engine_with_null_provider(courses).await;

    let ranked = engine
        .recommend("Shared Title ", 3)
        .await
        .expect("query succeeds");

    assert_eq!(ranked[0].course.row_id, 0);
    assert_eq!(ranked[1].course.row_id, 1);
    assert!((ranked[0].distance - ranked[1].distance).abs() < f32::EPSILON);
}

#[tokio::test]
async fn query_time_embedding_failure_is_an_error_not_empty() {
    let courses = vec![course(0, "Fine Course", "ok")];
    let provider = Arc::new(PoisonedEmbeddingProvider {
        poisoned: "broken query".to_string(),
        inner: NullEmbeddingProvider::new(),
    });
    let engine = RecommendationEngine::with_top_n(courses, provider, factory(), 10)
        .await
        .expect("engine builds");

    let result = engine.get_recommendations("broken query").await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}

// ============================================================================
// Rebuild Tests
// ============================================================================

#[tokio::test]
async fn rebuild_reproduces_the_same_ranking() {
    let courses = vec![
        course(0, "Python for Beginners", "variables and loops"),
        course(1, "Advanced Python", "metaclasses"),
        course(2, "Intro to SQL", "queries"),
    ];
    let engine = engine_with_null_provider(courses).await;

    let before = engine.recommend("python", 3).await.expect("query succeeds");
    engine.rebuild().await.expect("rebuild succeeds");
    let after = engine.recommend("python", 3).await.expect("query succeeds");

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.course.row_id, a.course.row_id);
        assert!((b.distance - a.distance).abs() < 1e-6);
    }
}

// ============================================================================
// Catalog Source Construction
// ============================================================================

#[tokio::test]
async fn engine_builds_from_a_catalog_source_with_default_top_n() {
    let catalog = StaticCatalog {
        courses: vec![course(0, "Only Course", "")],
    };
    let engine = RecommendationEngine::from_catalog_source(
        &catalog,
        Arc::new(NullEmbeddingProvider::new()),
        factory(),
    )
    .await
    .expect("engine builds");

    assert_eq!(engine.top_n(), 10);
    assert_eq!(engine.index_len(), 1);
    assert_eq!(engine.provider_name(), "null");
}
