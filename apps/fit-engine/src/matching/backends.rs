//! Capability seams for the only I/O the engine performs: embeddings and the LLM judge.
//!
//! Scorers receive these as `&dyn` references so they stay pure and can be driven by
//! deterministic stand-ins in tests. Production wiring lives in `embeddings` and `llm_client`.

use async_trait::async_trait;

use crate::embeddings::cosine_similarity;
use crate::matching::error::BackendError;

/// Text embedding + vector similarity.
#[async_trait]
pub trait SimilarityBackend: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, BackendError>;

    /// Cosine similarity in [-1, 1]. Zero-norm or mismatched vectors score 0.
    fn cosine(&self, a: &[f32], b: &[f32]) -> f64 {
        cosine_similarity(a, b)
    }
}

/// Scores how well an experience narrative supports a set of responsibilities.
#[async_trait]
pub trait JudgeBackend: Send + Sync {
    /// Returns a score in [0, 1].
    async fn evaluate(&self, responsibilities: &str, experience: &str)
        -> Result<f64, BackendError>;
}
