//! Aggregator — weighted combination of available sub-scores.
//!
//! Base weights are restricted to the available kinds and scaled to sum to 1, so the relative
//! weight between the signals present is preserved.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::matching::error::EngineError;
use crate::matching::types::{ScoreBreakdown, SubScore, SubScoreKind};

/// One positive weight per sub-score kind; need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWeights(BTreeMap<SubScoreKind, f64>);

impl Default for BaseWeights {
    fn default() -> Self {
        Self(BTreeMap::from([
            (SubScoreKind::HardSkill, 0.35),
            (SubScoreKind::SoftSkill, 0.15),
            (SubScoreKind::Experience, 0.20),
            (SubScoreKind::ResponsibilityFit, 0.30),
        ]))
    }
}

impl BaseWeights {
    pub fn new(weights: BTreeMap<SubScoreKind, f64>) -> Self {
        Self(weights)
    }

    pub fn get(&self, kind: SubScoreKind) -> f64 {
        self.0.get(&kind).copied().unwrap_or(0.0)
    }

    /// Every kind needs a finite, strictly positive weight.
    pub fn validate(&self) -> Result<(), EngineError> {
        for kind in SubScoreKind::ALL {
            match self.0.get(&kind) {
                Some(w) if w.is_finite() && *w > 0.0 => {}
                Some(w) => {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "weight for {kind} must be a positive number, got {w}"
                    )))
                }
                None => {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "missing weight for {kind}"
                    )))
                }
            }
        }
        Ok(())
    }
}

pub fn aggregate(
    sub_scores: &[SubScore],
    base_weights: &BaseWeights,
) -> Result<ScoreBreakdown, EngineError> {
    let mut seen = BTreeSet::new();
    let mut counted: Vec<&SubScore> = Vec::new();
    for score in sub_scores.iter().filter(|s| s.available) {
        if seen.insert(score.kind) {
            counted.push(score);
        } else {
            warn!("Duplicate {} sub-score ignored in aggregation", score.kind);
        }
    }

    let total: f64 = counted.iter().map(|s| base_weights.get(s.kind)).sum();
    if counted.is_empty() || !(total > 0.0) {
        return Err(EngineError::InsufficientSignal);
    }

    let weights_used: BTreeMap<SubScoreKind, f64> = counted
        .iter()
        .map(|s| (s.kind, base_weights.get(s.kind) / total))
        .collect();

    let final_score = counted
        .iter()
        .map(|s| weights_used[&s.kind] * s.value)
        .sum::<f64>()
        .clamp(0.0, 1.0);

    Ok(ScoreBreakdown {
        sub_scores: sub_scores.to_vec(),
        final_score,
        weights_used,
    })
}
