//! Claude client used as the responsibility-fit judge.
//!
//! No other module may call the Anthropic API directly; the engine only sees this client
//! through `JudgeBackend` (see `judge.rs`). The request timeout comes from the scorer budget
//! and the retry backoff stays well under it.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod judge;
pub mod prompts;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every judge call.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 512;
const MAX_ATTEMPTS: u32 = 3;
/// First retry delay; doubles on each further attempt.
const BASE_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text content")]
    EmptyContent,
}

impl LlmError {
    /// Rate limits, server errors and refused connections. Timeouts are not retried.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(e) => e.is_connect(),
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            LlmError::Parse(_) | LlmError::EmptyContent => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    /// `request_timeout` bounds a single HTTP attempt. Callers pass the scorer budget.
    pub fn new(api_key: String, request_timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(request_timeout).build()?,
            api_key,
        })
    }

    /// Sends the prompt and deserializes the model's answer as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        Ok(serde_json::from_str(strip_json_fences(&text))?)
    }

    /// Returns the first text block, retrying transient failures with exponential backoff.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            match self.send(&request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    let delay = backoff(attempt);
                    warn!(
                        "Judge call attempt {attempt} failed ({e}), retrying after {}ms",
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send(&self, request: &MessagesRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        debug!(
            "Judge call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );
        first_text(parsed)
    }
}

fn first_text(response: MessagesResponse) -> Result<String, LlmError> {
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(LlmError::EmptyContent)
}

/// Delay before retry number `attempt` (1-based): 250ms, 500ms, ...
fn backoff(attempt: u32) -> Duration {
    BASE_BACKOFF * 2u32.pow(attempt.saturating_sub(1))
}

/// Removes a surrounding markdown code fence (optionally tagged `json`), if any.
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_is_unwrapped() {
        assert_eq!(strip_json_fences("```json\n{\"score\": 0.5}\n```"), "{\"score\": 0.5}");
        assert_eq!(strip_json_fences("```\n{\"score\": 0.5}\n```"), "{\"score\": 0.5}");
        assert_eq!(strip_json_fences("  {\"score\": 0.5} "), "{\"score\": 0.5}");
    }

    #[test]
    fn test_unterminated_fence_keeps_body() {
        assert_eq!(strip_json_fences("```json\n{\"score\": 0.5}"), "{\"score\": 0.5}");
    }

    #[test]
    fn test_retries_fit_inside_default_scorer_budget() {
        let total: Duration = (1..MAX_ATTEMPTS).map(backoff).sum();
        assert_eq!(total, Duration::from_millis(750));
        assert!(total < Duration::from_secs(10));
    }

    #[test]
    fn test_only_transient_api_errors_retry() {
        let api = |status| LlmError::Api {
            status,
            message: String::new(),
        };
        assert!(api(429).is_retryable());
        assert!(api(529).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(!LlmError::EmptyContent.is_retryable());
    }

    #[test]
    fn test_first_text_block_is_used() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{
                "content": [{"type": "thinking"}, {"type": "text", "text": "{\"score\": 1}"}],
                "usage": {"input_tokens": 10, "output_tokens": 4}
            }"#,
        )
        .unwrap();
        assert_eq!(first_text(response).unwrap(), "{\"score\": 1}");
    }

    #[test]
    fn test_blank_text_is_empty_content() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "  "}], "usage": {"input_tokens": 1, "output_tokens": 0}}"#,
        )
        .unwrap();
        assert!(matches!(first_text(response), Err(LlmError::EmptyContent)));
    }
}
