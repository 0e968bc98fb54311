//! `JudgeBackend` over the Claude client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::llm_client::prompts::{judge_prompt, JUDGE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::matching::backends::JudgeBackend;
use crate::matching::error::BackendError;

/// Structured judge output.
#[derive(Debug, Clone, Deserialize)]
pub struct JudgeVerdict {
    pub score: f64,
    #[serde(default)]
    pub rationale: String,
}

#[async_trait]
impl JudgeBackend for LlmClient {
    async fn evaluate(&self, responsibilities: &str, experience: &str) -> Result<f64, BackendError> {
        let prompt = judge_prompt(responsibilities, experience);
        let verdict: JudgeVerdict = self.call_json(&prompt, JUDGE_SYSTEM).await?;
        debug!(
            "Judge verdict: score={:.3}, rationale={}",
            verdict.score, verdict.rationale
        );
        Ok(verdict.score)
    }
}
