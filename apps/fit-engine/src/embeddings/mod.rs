/// Embedding client — OpenAI-compatible `/embeddings` endpoint behind `SimilarityBackend`.
///
/// Like `llm_client`, this is the only module allowed to talk to the embedding provider.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::matching::backends::SimilarityBackend;
use crate::matching::error::BackendError;

pub mod cache;

pub use cache::CachedEmbeddings;

pub const DEFAULT_MODEL: &str = "text-embedding-3-small";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Embedding response contained no vectors")]
    Empty,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// HTTP embedding client with retry on 429/5xx.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl EmbeddingClient {
    pub fn new(url: String, api_key: Option<String>, model: String) -> Result<Self, EmbeddingError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            url,
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s
                let delay = std::time::Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&self.url).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Embedding API returned {}: {}", status, message);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbeddingResponse = response.json().await?;
            let vector = parsed
                .data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or(EmbeddingError::Empty)?;
            debug!("Embedded {} chars into {} dims", text.len(), vector.len());
            return Ok(vector);
        }

        Err(last_error.unwrap_or(EmbeddingError::Empty))
    }
}

#[async_trait]
impl SimilarityBackend for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, BackendError> {
        Ok(self.embed_text(text).await?)
    }
}

/// Cosine similarity in [-1, 1]. Empty, zero-norm or length-mismatched vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}
