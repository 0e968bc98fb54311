//! Responsibility↔Experience Fit — delegated to the judge backend.
//!
//! The engine owns only the interpretation bands; the raw judge score is always kept.

use serde::{Deserialize, Serialize};

use crate::extraction::{CandidateProfile, JobRequirement, JobSectionKind, ResumeSectionKind};
use crate::matching::backends::JudgeBackend;
use crate::matching::error::BackendError;
use crate::matching::types::{Evidence, SubScore, SubScoreKind};

/// Categorical reading of a judge score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitBand {
    /// [0, 0.4): clear mismatch
    Negative,
    /// [0.4, 0.6): inconclusive
    Neutral,
    /// [0.6, 1.0]: strong match
    Positive,
}

impl FitBand {
    pub fn from_score(score: f64) -> Self {
        if score < 0.4 {
            FitBand::Negative
        } else if score < 0.6 {
            FitBand::Neutral
        } else {
            FitBand::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitBand::Negative => "negative",
            FitBand::Neutral => "neutral",
            FitBand::Positive => "positive",
        }
    }
}

pub async fn score_responsibility_fit(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    judge: &dyn JudgeBackend,
) -> Result<SubScore, BackendError> {
    let responsibilities = job.section_text(JobSectionKind::Responsibilities);
    if responsibilities.is_empty() {
        return Ok(SubScore::unavailable(
            SubScoreKind::ResponsibilityFit,
            "job description lists no responsibilities",
        ));
    }

    let experience = candidate.section_text(ResumeSectionKind::Experience);
    let (score, judged) = if experience.is_empty() {
        (0.0, false)
    } else {
        let score = judge.evaluate(&responsibilities, &experience).await?;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(BackendError::InvalidOutput(format!(
                "judge score {score} is outside [0, 1]"
            )));
        }
        (score, true)
    };

    let band = FitBand::from_score(score);
    let mut evidence = Evidence::new();
    evidence.insert("band".to_string(), band.as_str().to_string());
    evidence.insert("judge_score".to_string(), format!("{score:.2}"));
    if !judged {
        evidence.insert(
            "note".to_string(),
            "resume has no professional experience section".to_string(),
        );
    }

    Ok(SubScore::scored(SubScoreKind::ResponsibilityFit, score, evidence))
}
