//! Soft Skill Semantic Similarity.
//!
//! Both sides' terms are mapped through the ontology onto canonical categories. Each required
//! category is weighted by the square of its share of the job's mapped terms, so categories the
//! job keeps repeating dominate. The candidate's strength on a category is 1.0 when they list
//! it, otherwise the best non-negative cosine similarity between an embedded candidate category
//! and that category.
//!
//! score = Σ weight·strength / Σ weight, where Σ weight is the maximum attainable dot product.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::extraction::{CandidateProfile, JobRequirement};
use crate::matching::backends::SimilarityBackend;
use crate::matching::error::BackendError;
use crate::matching::ontology::SoftSkillOntology;
use crate::matching::types::{Evidence, SubScore, SubScoreKind};

/// Strength below which a required category is reported as missing.
const COVERED_THRESHOLD: f64 = 0.5;

/// Per-category weight `(count / total)²` over the job's mapped terms.
fn requirement_weights<'a>(counts: &BTreeMap<&'a str, usize>) -> BTreeMap<&'a str, f64> {
    let total: usize = counts.values().sum();
    counts
        .iter()
        .map(|(&category, &count)| {
            let share = count as f64 / total as f64;
            (category, share * share)
        })
        .collect()
}

pub async fn score_soft_skills(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    ontology: &SoftSkillOntology,
    similarity: &dyn SimilarityBackend,
) -> Result<SubScore, BackendError> {
    let mut ignored: Vec<&str> = Vec::new();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for term in &job.soft_skills_required {
        match ontology.category_of(term) {
            Some(category) => *counts.entry(category).or_default() += 1,
            None => ignored.push(term.as_str()),
        }
    }

    let mut held: BTreeSet<&str> = BTreeSet::new();
    for term in &candidate.soft_skills {
        match ontology.category_of(term) {
            Some(category) => {
                held.insert(category);
            }
            None => ignored.push(term.as_str()),
        }
    }

    if !ignored.is_empty() {
        debug!("Soft skills outside ontology ignored: {}", ignored.join(", "));
    }

    if counts.is_empty() {
        return Ok(SubScore::unavailable(
            SubScoreKind::SoftSkill,
            "job description lists no recognised soft skills",
        ));
    }

    let mut evidence = Evidence::new();
    if !ignored.is_empty() {
        evidence.insert("ignored_terms".to_string(), ignored.join(", "));
    }

    if held.is_empty() {
        evidence.insert(
            "missing".to_string(),
            counts.keys().copied().collect::<Vec<_>>().join(", "),
        );
        return Ok(SubScore::scored(SubScoreKind::SoftSkill, 0.0, evidence));
    }

    let requirement = requirement_weights(&counts);

    // Only categories the candidate lacks need a similarity lookup.
    let unheld: Vec<&str> = requirement
        .keys()
        .copied()
        .filter(|c| !held.contains(c))
        .collect();
    let mut embeddings: HashMap<&str, Vec<f32>> = HashMap::new();
    if !unheld.is_empty() {
        for &category in unheld.iter().chain(held.iter()) {
            let vector = similarity.embed(category).await?;
            embeddings.insert(category, vector);
        }
    }

    let mut dot = 0.0;
    let mut max_dot = 0.0;
    let mut coverage = Vec::new();
    let mut covered = Vec::new();
    let mut missing = Vec::new();
    let mut weights = Vec::new();

    for (&category, &weight) in &requirement {
        let strength = if held.contains(category) {
            1.0
        } else {
            held.iter()
                .map(|h| similarity.cosine(&embeddings[h], &embeddings[category]))
                .fold(0.0_f64, f64::max)
                .clamp(0.0, 1.0)
        };

        dot += weight * strength;
        max_dot += weight;
        coverage.push(format!("{category}={strength:.2}"));
        weights.push(format!("{category}={weight:.3}"));
        if strength >= COVERED_THRESHOLD {
            covered.push(category);
        } else {
            missing.push(category);
        }
    }

    evidence.insert("coverage".to_string(), coverage.join(", "));
    evidence.insert("weights".to_string(), weights.join(", "));
    evidence.insert("matched".to_string(), covered.join(", "));
    evidence.insert("missing".to_string(), missing.join(", "));

    Ok(SubScore::scored(SubScoreKind::SoftSkill, dot / max_dot, evidence))
}
