use thiserror::Error;

use crate::embeddings::EmbeddingError;
use crate::llm_client::LlmError;
use crate::matching::types::SubScoreKind;

/// Errors surfaced by the fit engine.
///
/// Only `MalformedExtraction`, `InsufficientSignal` and `InvalidConfiguration` ever reach a
/// caller. `BackendTimeout` is built and logged by the engine, then downgraded to an
/// unavailable sub-score.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed extraction: neither the resume nor the job description has any sections")]
    MalformedExtraction,

    #[error("Backend timed out after {budget_ms}ms while scoring {kind}")]
    BackendTimeout { kind: SubScoreKind, budget_ms: u128 },

    #[error("Insufficient signal: no sub-score had enough input to be computed")]
    InsufficientSignal,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Failure of an injected similarity or judge backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Invalid backend output: {0}")]
    InvalidOutput(String),
}
