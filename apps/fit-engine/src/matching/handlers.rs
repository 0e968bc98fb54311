//! Axum route handlers for the Fit API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{normalize, RawJob, RawResume};
use crate::matching::engine::FitOutcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub resume: RawResume,
    #[serde(default)]
    pub job: RawJob,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub request_id: Uuid,
    pub outcome: FitOutcome,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/fit/evaluate
///
/// Normalizes the extraction payloads, scores the pair and returns either the title-gate
/// rejection or the routing decision for the email composer.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let request_id = Uuid::new_v4();
    info!("Fit evaluation {request_id} started");

    let (candidate, job) = normalize(&request.resume, &request.job)?;
    let outcome = state.engine.evaluate(&candidate, &job).await?;

    match &outcome {
        FitOutcome::Rejected { .. } => info!("Fit evaluation {request_id}: rejected by title gate"),
        FitOutcome::Routed { decision } => info!(
            "Fit evaluation {request_id}: score {:.3}, mode {:?}",
            decision.breakdown.final_score, decision.mode
        ),
    }

    Ok(Json(EvaluateResponse {
        request_id,
        outcome,
    }))
}
