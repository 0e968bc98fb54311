//! Score data models shared by the scorers, the aggregator and routing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extraction::ContactPerson;

/// The four independent signals that make up a fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubScoreKind {
    HardSkill,
    SoftSkill,
    Experience,
    ResponsibilityFit,
}

impl SubScoreKind {
    pub const ALL: [SubScoreKind; 4] = [
        SubScoreKind::HardSkill,
        SubScoreKind::SoftSkill,
        SubScoreKind::Experience,
        SubScoreKind::ResponsibilityFit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubScoreKind::HardSkill => "hard_skill",
            SubScoreKind::SoftSkill => "soft_skill",
            SubScoreKind::Experience => "experience",
            SubScoreKind::ResponsibilityFit => "responsibility_fit",
        }
    }
}

impl fmt::Display for SubScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form evidence attached to a sub-score, e.g. `matched -> "python, sql"`.
pub type Evidence = BTreeMap<String, String>;

/// Evidence key holding the reason a sub-score is unavailable.
pub const UNAVAILABLE_REASON: &str = "unavailable_reason";

/// Output of a single scorer.
///
/// `available = false` means the scorer lacked the input (or backend) to produce a
/// meaningful value; such sub-scores are excluded from aggregation, never scored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub kind: SubScoreKind,
    pub value: f64, // 0.0 – 1.0
    pub evidence: Evidence,
    pub available: bool,
}

impl SubScore {
    /// Builds an available sub-score. The value is clamped into [0, 1].
    pub fn scored(kind: SubScoreKind, value: f64, evidence: Evidence) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            kind,
            value,
            evidence,
            available: true,
        }
    }

    /// Builds a sub-score that is excluded from aggregation, recording why.
    pub fn unavailable(kind: SubScoreKind, reason: impl Into<String>) -> Self {
        let mut evidence = Evidence::new();
        evidence.insert(UNAVAILABLE_REASON.to_string(), reason.into());
        Self {
            kind,
            value: 0.0,
            evidence,
            available: false,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        self.evidence.get(UNAVAILABLE_REASON).map(String::as_str)
    }
}

/// Aggregated result: every sub-score (available or not), the final score and the
/// renormalised weights actually applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sub_scores: Vec<SubScore>,
    pub final_score: f64, // 0.0 – 1.0
    pub weights_used: BTreeMap<SubScoreKind, f64>,
}

impl ScoreBreakdown {
    #[cfg(test)]
    pub fn sub_score(&self, kind: SubScoreKind) -> Option<&SubScore> {
        self.sub_scores.iter().find(|s| s.kind == kind)
    }

    /// Human-readable one-liner for logs and for the email composer.
    pub fn summary(&self) -> String {
        let percent = (self.final_score * 100.0).round() as u32;
        let unavailable: Vec<String> = self
            .sub_scores
            .iter()
            .filter(|s| !s.available)
            .map(|s| match s.unavailable_reason() {
                Some(reason) => format!("{} ({reason})", s.kind),
                None => s.kind.to_string(),
            })
            .collect();

        if unavailable.is_empty() {
            format!("Fit {percent}/100 from all {} signals.", self.sub_scores.len())
        } else {
            format!(
                "Fit {percent}/100. Not scored: {}.",
                unavailable.join("; ")
            )
        }
    }
}

/// Outreach mode handed to the email composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutreachMode {
    Personalized,
    General,
}

/// Final product of a scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub mode: OutreachMode,
    pub contact: Option<ContactPerson>,
    pub breakdown: ScoreBreakdown,
}
