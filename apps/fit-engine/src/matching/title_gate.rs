//! Title Gate — skips full scoring for jobs whose title is far from every role the candidate
//! declared they are targeting.

use serde::{Deserialize, Serialize};

use crate::matching::backends::SimilarityBackend;
use crate::matching::error::BackendError;

/// The declared role closest to the job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    pub passed: bool,
    pub alpha: f64,
    pub best_match: Option<RoleMatch>,
    /// Set when the gate passed without comparing embeddings.
    pub note: Option<String>,
}

impl GateDecision {
    pub(crate) fn open(alpha: f64, note: impl Into<String>) -> Self {
        Self {
            passed: true,
            alpha,
            best_match: None,
            note: Some(note.into()),
        }
    }
}

/// Passes iff max cosine(job_title, role) ≥ alpha over the declared roles.
///
/// No declared roles (or no job title) means nothing to filter against: the gate passes.
pub async fn passes_gate(
    job_title: &str,
    declared_roles: &[String],
    alpha: f64,
    similarity: &dyn SimilarityBackend,
) -> Result<GateDecision, BackendError> {
    if declared_roles.is_empty() {
        return Ok(GateDecision::open(alpha, "candidate declared no target roles"));
    }
    if job_title.trim().is_empty() {
        return Ok(GateDecision::open(alpha, "job has no title"));
    }

    let title_vector = similarity.embed(job_title).await?;

    let mut best: Option<RoleMatch> = None;
    for role in declared_roles {
        let role_vector = similarity.embed(role).await?;
        let score = similarity.cosine(&title_vector, &role_vector);
        if best.as_ref().map_or(true, |b| score > b.similarity) {
            best = Some(RoleMatch {
                role: role.clone(),
                similarity: score,
            });
        }
    }

    let passed = best.as_ref().is_some_and(|b| b.similarity >= alpha);
    Ok(GateDecision {
        passed,
        alpha,
        best_match: best,
        note: None,
    })
}
