//! Hard Skill Overlap — |candidate ∩ required| / |required| over normalized skill names.

use crate::extraction::{CandidateProfile, JobRequirement};
use crate::matching::types::{Evidence, SubScore, SubScoreKind};

pub fn score_hard_skills(candidate: &CandidateProfile, job: &JobRequirement) -> SubScore {
    let required = &job.hard_skills_required;
    if required.is_empty() {
        return SubScore::unavailable(
            SubScoreKind::HardSkill,
            "job description lists no hard skills",
        );
    }

    let (matched, missing): (Vec<&String>, Vec<&String>) = required
        .iter()
        .partition(|skill| candidate.hard_skills.contains(*skill));

    let value = matched.len() as f64 / required.len() as f64;

    let mut evidence = Evidence::new();
    evidence.insert("matched".to_string(), join(&matched));
    evidence.insert("missing".to_string(), join(&missing));
    evidence.insert(
        "ratio".to_string(),
        format!("{}/{}", matched.len(), required.len()),
    );

    SubScore::scored(SubScoreKind::HardSkill, value, evidence)
}

fn join(skills: &[&String]) -> String {
    skills
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::testing::{candidate, job};

    #[test]
    fn test_two_of_three_required_skills() {
        let mut c = candidate();
        c.hard_skills = ["python", "sql"].map(String::from).into();
        let mut j = job();
        j.hard_skills_required = ["python", "sql", "go"].map(String::from).into();

        let s = score_hard_skills(&c, &j);
        assert!(s.available);
        assert!((s.value - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.evidence["matched"], "python, sql");
        assert_eq!(s.evidence["missing"], "go");
        assert_eq!(s.evidence["ratio"], "2/3");
    }

    #[test]
    fn test_no_required_skills_is_unavailable() {
        let mut c = candidate();
        c.hard_skills = ["rust"].map(String::from).into();
        let s = score_hard_skills(&c, &job());
        assert!(!s.available);
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn test_candidate_without_skills_scores_zero() {
        let mut j = job();
        j.hard_skills_required = ["rust"].map(String::from).into();
        let s = score_hard_skills(&candidate(), &j);
        assert!(s.available);
        assert_eq!(s.value, 0.0);
    }

    #[test]
    fn test_extra_candidate_skills_do_not_inflate_score() {
        let mut c = candidate();
        c.hard_skills = ["rust", "go", "java", "kotlin"].map(String::from).into();
        let mut j = job();
        j.hard_skills_required = ["rust", "sql"].map(String::from).into();
        assert!((score_hard_skills(&c, &j).value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_monotonic_in_overlap() {
        let required = ["a", "b", "c", "d"];
        let mut j = job();
        j.hard_skills_required = required.map(String::from).into();

        let mut previous = -1.0;
        for n in 0..=required.len() {
            let mut c = candidate();
            c.hard_skills = required[..n].iter().map(|s| s.to_string()).collect();
            let value = score_hard_skills(&c, &j).value;
            assert!(value >= previous, "overlap {n} scored {value} < {previous}");
            previous = value;
        }
        assert_eq!(previous, 1.0);
    }
}
