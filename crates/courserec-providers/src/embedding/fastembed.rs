//! FastEmbed Local Embedding Provider
//!
//! Runs ONNX inference in-process, no external service required. The
//! default model is AllMiniLML6V2, the same sentence-transformer family
//! the recommendation engine was designed around.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};

use courserec_domain::error::{Error, Result};
use courserec_domain::ports::EmbeddingProvider;
use courserec_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_FASTEMBED_DEFAULT;

/// One inference request for the model task
struct EmbedRequest {
    texts: Vec<String>,
    reply: oneshot::Sender<Result<Vec<Embedding>>>,
}

/// FastEmbed local embedding provider
///
/// The ONNX model is loaded once at construction and owned by a dedicated
/// task; inference requests flow over a channel, so callers never contend
/// on a lock around the model. A model that cannot be loaded fails the
/// constructor, which the engine treats as a fatal startup error.
///
/// ## Example
///
/// ```rust,no_run
/// use courserec_providers::embedding::FastEmbedProvider;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = FastEmbedProvider::new()?;
///     Ok(())
/// }
/// ```
pub struct FastEmbedProvider {
    sender: mpsc::Sender<EmbedRequest>,
    model_name: String,
}

impl FastEmbedProvider {
    /// Create a provider with the default model (AllMiniLML6V2)
    pub fn new() -> Result<Self> {
        Self::with_model(EmbeddingModel::AllMiniLML6V2)
    }

    /// Create a provider with a specific model
    pub fn with_model(model: EmbeddingModel) -> Result<Self> {
        let model_name = format!("{model:?}");
        let text_embedding = TextEmbedding::try_new(InitOptions::new(model))
            .map_err(|e| Error::embedding(format!("failed to load embedding model: {e}")))?;

        let (sender, receiver) = mpsc::channel(32);
        spawn_model_task(receiver, text_embedding, model_name.clone());

        Ok(Self { sender, model_name })
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model_name
    }
}

/// Parse a configured model name into a FastEmbed model, defaulting to
/// AllMiniLML6V2 for unrecognized names
pub fn parse_embedding_model(model_name: &str) -> EmbeddingModel {
    match model_name.to_lowercase().as_str() {
        "bgesmallen" | "bge-small-en" => EmbeddingModel::BGESmallENV15,
        "bgebaseen" | "bge-base-en" => EmbeddingModel::BGEBaseENV15,
        "multilingual-e5-small" => EmbeddingModel::MultilingualE5Small,
        _ => EmbeddingModel::AllMiniLML6V2,
    }
}

/// Run inference requests against the owned model until every sender drops
fn spawn_model_task(
    mut receiver: mpsc::Receiver<EmbedRequest>,
    mut model: TextEmbedding,
    model_name: String,
) {
    tokio::spawn(async move {
        while let Some(request) = receiver.recv().await {
            let text_refs: Vec<&str> = request.texts.iter().map(String::as_str).collect();
            let result = model
                .embed(text_refs, None)
                .map(|vectors| {
                    vectors
                        .into_iter()
                        .map(|vector| {
                            let dimensions = vector.len();
                            Embedding {
                                vector,
                                model: model_name.clone(),
                                dimensions,
                            }
                        })
                        .collect()
                })
                .map_err(|e| Error::embedding(format!("embedding inference failed: {e}")));
            let _ = request.reply.send(result);
        }
    });
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(EmbedRequest {
                texts: texts.to_vec(),
                reply,
            })
            .await
            .map_err(|_| Error::embedding("embedding model task is no longer running"))?;

        response
            .await
            .unwrap_or_else(|_| Err(Error::embedding("embedding model task dropped the request")))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_FASTEMBED_DEFAULT
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

impl Clone for FastEmbedProvider {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            model_name: self.model_name.clone(),
        }
    }
}
