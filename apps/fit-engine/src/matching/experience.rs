//! Experience Gap scoring.
//!
//! gap = required − candidate years. gap ≤ 0 → 1.0; 0 < gap ≤ T → 1 − gap/(2T); gap > T → 0.0,
//! where T is the tolerated gap (2 years by default, giving 0.5 exactly at the boundary).

use crate::extraction::{CandidateProfile, JobRequirement};
use crate::matching::types::{Evidence, SubScore, SubScoreKind};

pub fn score_experience(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    tolerance_years: f64,
) -> SubScore {
    let Some(required) = job.years_experience_required else {
        return SubScore::unavailable(
            SubScoreKind::Experience,
            "job description states no experience requirement",
        );
    };
    let Some(actual) = candidate.years_experience else {
        return SubScore::unavailable(
            SubScoreKind::Experience,
            "candidate years of experience unknown",
        );
    };

    let gap = required - actual;
    let value = gap_score(gap, tolerance_years);

    let mut evidence = Evidence::new();
    evidence.insert("required_years".to_string(), format!("{required:.1}"));
    evidence.insert("candidate_years".to_string(), format!("{actual:.1}"));
    evidence.insert("gap_years".to_string(), format!("{:.1}", gap.max(0.0)));
    evidence.insert(
        "within_tolerance".to_string(),
        (gap <= tolerance_years).to_string(),
    );

    SubScore::scored(SubScoreKind::Experience, value, evidence)
}

fn gap_score(gap: f64, tolerance_years: f64) -> f64 {
    if gap <= 0.0 {
        1.0
    } else if gap <= tolerance_years {
        1.0 - gap / (2.0 * tolerance_years)
    } else {
        0.0
    }
}
