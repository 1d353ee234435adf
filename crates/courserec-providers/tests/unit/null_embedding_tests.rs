//! Tests for the deterministic null embedding provider

use courserec_domain::ports::EmbeddingProvider;
use courserec_providers::embedding::NullEmbeddingProvider;

#[tokio::test]
async fn identical_text_embeds_identically() {
    let provider = NullEmbeddingProvider::new();

    let first = provider.embed("machine learning").await.expect("embeds");
    let second = provider.embed("machine learning").await.expect("embeds");

    assert_eq!(first.vector, second.vector, "determinism must be bit-exact");
    assert_eq!(first.dimensions, second.dimensions);
}

#[tokio::test]
async fn embedding_is_independent_of_batch_position() {
    let provider = NullEmbeddingProvider::new();

    let batch = provider
        .embed_batch(&["alpha".to_string(), "beta".to_string()])
        .await
        .expect("embeds");
    let solo = provider.embed("beta").await.expect("embeds");

    assert_eq!(batch[1].vector, solo.vector);
}

#[tokio::test]
async fn distinct_texts_embed_differently() {
    let provider = NullEmbeddingProvider::new();

    let python = provider.embed("python").await.expect("embeds");
    let sql = provider.embed("sql").await.expect("embeds");

    assert_ne!(python.vector, sql.vector);
}

#[tokio::test]
async fn empty_text_embeds_without_error() {
    let provider = NullEmbeddingProvider::new();

    let embedding = provider.embed("").await.expect("empty text embeds");
    assert_eq!(embedding.vector.len(), provider.dimensions());
}

#[tokio::test]
async fn batch_preserves_input_order() {
    let provider = NullEmbeddingProvider::new();
    let texts: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

    let batch = provider.embed_batch(&texts).await.expect("embeds");

    assert_eq!(batch.len(), 3);
    for (text, embedding) in texts.iter().zip(&batch) {
        let solo = provider.embed(text).await.expect("embeds");
        assert_eq!(solo.vector, embedding.vector);
    }
}

#[tokio::test]
async fn reports_expected_metadata() {
    let provider = NullEmbeddingProvider::new();

    assert_eq!(provider.dimensions(), 384);
    assert_eq!(provider.provider_name(), "null");
    provider.health_check().await.expect("healthy");
}
