//! Deterministic stand-ins for the embedding and judge backends, plus empty documents to
//! build test fixtures from.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::extraction::{CandidateProfile, JobRequirement};
use crate::matching::backends::{JudgeBackend, SimilarityBackend};
use crate::matching::error::BackendError;

pub(crate) fn candidate() -> CandidateProfile {
    CandidateProfile {
        sections: vec![],
        hard_skills: BTreeSet::new(),
        soft_skills: BTreeSet::new(),
        years_experience: None,
        declared_roles: vec![],
    }
}

pub(crate) fn job() -> JobRequirement {
    JobRequirement {
        sections: vec![],
        hard_skills_required: BTreeSet::new(),
        soft_skills_required: BTreeSet::new(),
        years_experience_required: None,
        title: String::new(),
        contact_person: None,
    }
}

/// Returns fixed vectors for known texts and an error for anything else.
#[derive(Default)]
pub(crate) struct StaticEmbeddings {
    vectors: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl StaticEmbeddings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SimilarityBackend for StaticEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| BackendError::InvalidOutput(format!("no embedding for '{text}'")))
    }
}

/// Never answers.
pub(crate) struct HangingEmbeddings;

#[async_trait]
impl SimilarityBackend for HangingEmbeddings {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, BackendError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(vec![])
    }
}

pub(crate) struct FixedJudge {
    score: f64,
    calls: AtomicUsize,
}

impl FixedJudge {
    pub(crate) fn new(score: f64) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeBackend for FixedJudge {
    async fn evaluate(&self, _responsibilities: &str, _experience: &str) -> Result<f64, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.score)
    }
}

pub(crate) struct FailingJudge;

#[async_trait]
impl JudgeBackend for FailingJudge {
    async fn evaluate(&self, _responsibilities: &str, _experience: &str) -> Result<f64, BackendError> {
        Err(BackendError::InvalidOutput("judge unavailable".to_string()))
    }
}

/// Never answers.
pub(crate) struct HangingJudge;

#[async_trait]
impl JudgeBackend for HangingJudge {
    async fn evaluate(&self, _responsibilities: &str, _experience: &str) -> Result<f64, BackendError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(1.0)
    }
}
