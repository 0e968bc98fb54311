//! Fit Engine — orchestrates one scoring request.
//!
//! Flow: title gate → scorers (concurrently, each backend call under a timeout) →
//!       aggregate → route.
//!
//! A request owns nothing mutable: documents are borrowed read-only by every scorer, and the
//! only shared state is whatever the injected backends carry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::extraction::{CandidateProfile, JobRequirement};
use crate::matching::aggregator::aggregate;
use crate::matching::backends::{JudgeBackend, SimilarityBackend};
use crate::matching::error::{BackendError, EngineError};
use crate::matching::experience::score_experience;
use crate::matching::hard_skills::score_hard_skills;
use crate::matching::ontology::SoftSkillOntology;
use crate::matching::responsibility::score_responsibility_fit;
use crate::matching::routing::route;
use crate::matching::soft_skills::score_soft_skills;
use crate::matching::title_gate::{passes_gate, GateDecision};
use crate::matching::types::{RoutingDecision, SubScore, SubScoreKind};

/// Result of a scoring request that did not fail outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitOutcome {
    /// The title gate refused the job; no scorer ran.
    Rejected { gate: GateDecision },
    Routed { decision: RoutingDecision },
}

#[derive(Clone)]
pub struct FitEngine {
    config: EngineConfig,
    ontology: Arc<SoftSkillOntology>,
    similarity: Arc<dyn SimilarityBackend>,
    judge: Arc<dyn JudgeBackend>,
}

impl FitEngine {
    /// Validates the configuration up front so scoring never fails on it.
    pub fn new(
        config: EngineConfig,
        ontology: Arc<SoftSkillOntology>,
        similarity: Arc<dyn SimilarityBackend>,
        judge: Arc<dyn JudgeBackend>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            ontology,
            similarity,
            judge,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub async fn evaluate(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<FitOutcome, EngineError> {
        let gate = self.check_title(candidate, job).await;
        if !gate.passed {
            info!(
                "Title gate rejected '{}' (best {:?}, alpha {})",
                job.title, gate.best_match, gate.alpha
            );
            return Ok(FitOutcome::Rejected { gate });
        }

        let budget = self.config.scorer_timeout;
        let hard = score_hard_skills(candidate, job);
        let experience =
            score_experience(candidate, job, self.config.experience_gap_tolerance_years);
        let (soft, responsibility) = tokio::join!(
            guarded(
                SubScoreKind::SoftSkill,
                budget,
                score_soft_skills(candidate, job, &self.ontology, self.similarity.as_ref()),
            ),
            guarded(
                SubScoreKind::ResponsibilityFit,
                budget,
                score_responsibility_fit(candidate, job, self.judge.as_ref()),
            ),
        );

        let breakdown = aggregate(
            &[hard, soft, experience, responsibility],
            &self.config.base_weights,
        )?;
        let decision = route(breakdown, job);

        info!(
            "Scored '{}': {:.3} → {:?}. {}",
            job.title,
            decision.breakdown.final_score,
            decision.mode,
            decision.breakdown.summary()
        );

        Ok(FitOutcome::Routed { decision })
    }

    /// Runs the title gate. Backend failures and timeouts fail open.
    async fn check_title(&self, candidate: &CandidateProfile, job: &JobRequirement) -> GateDecision {
        let alpha = self.config.alpha;
        let gate = passes_gate(
            &job.title,
            &candidate.declared_roles,
            alpha,
            self.similarity.as_ref(),
        );
        match tokio::time::timeout(self.config.scorer_timeout, gate).await {
            Ok(Ok(decision)) => decision,
            Ok(Err(e)) => {
                warn!("Title gate backend failed, scoring anyway: {e}");
                GateDecision::open(alpha, format!("title gate skipped: {e}"))
            }
            Err(_) => {
                warn!(
                    "Title gate timed out after {}ms, scoring anyway",
                    self.config.scorer_timeout.as_millis()
                );
                GateDecision::open(alpha, "title gate skipped: backend timed out")
            }
        }
    }
}

/// Runs a backend-dependent scorer under its budget. Failures and timeouts are contained here
/// and become an unavailable sub-score.
async fn guarded<F>(kind: SubScoreKind, budget: Duration, scorer: F) -> SubScore
where
    F: Future<Output = Result<SubScore, BackendError>>,
{
    match tokio::time::timeout(budget, scorer).await {
        Ok(Ok(score)) => score,
        Ok(Err(e)) => {
            warn!("{kind} scorer failed, excluding it: {e}");
            SubScore::unavailable(kind, format!("backend error: {e}"))
        }
        Err(_) => {
            let err = EngineError::BackendTimeout {
                kind,
                budget_ms: budget.as_millis(),
            };
            warn!("{err}");
            SubScore::unavailable(kind, err.to_string())
        }
    }
}
