use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::embeddings;
use crate::matching::aggregator::BaseWeights;
use crate::matching::types::SubScoreKind;
use crate::matching::EngineError;

/// Title-gate threshold used by this deployment when `FIT_TITLE_GATE_ALPHA` is unset.
const DEFAULT_ALPHA: f64 = 0.6;
const DEFAULT_GAP_TOLERANCE_YEARS: f64 = 2.0;
const DEFAULT_SCORER_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_EMBEDDING_CACHE_MAX_ENTRIES: u64 = 10_000;
const DEFAULT_EMBEDDING_CACHE_IDLE_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or the engine settings are invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub embeddings_api_url: String,
    pub embeddings_api_key: Option<String>,
    pub embeddings_model: String,
    /// Upper bound on cached embeddings; least valuable entries are evicted past it.
    pub embedding_cache_max_entries: u64,
    pub embedding_cache_idle: Duration,
    pub soft_skill_ontology_path: Option<PathBuf>,
    pub engine: EngineConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            embeddings_api_url: require_env("EMBEDDINGS_API_URL")?,
            embeddings_api_key: std::env::var("EMBEDDINGS_API_KEY").ok(),
            embeddings_model: std::env::var("EMBEDDINGS_MODEL")
                .unwrap_or_else(|_| embeddings::DEFAULT_MODEL.to_string()),
            embedding_cache_max_entries: parse_env(
                "EMBEDDING_CACHE_MAX_ENTRIES",
                DEFAULT_EMBEDDING_CACHE_MAX_ENTRIES,
            )?,
            embedding_cache_idle: Duration::from_secs(parse_env(
                "EMBEDDING_CACHE_IDLE_SECS",
                DEFAULT_EMBEDDING_CACHE_IDLE_SECS,
            )?),
            soft_skill_ontology_path: std::env::var("SOFT_SKILL_ONTOLOGY_PATH")
                .ok()
                .map(PathBuf::from),
            engine: EngineConfig::from_lookup(|key| std::env::var(key).ok())
                .context("Fit engine configuration is invalid")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Scoring knobs, passed by value into the engine. Never read from the environment by the
/// engine itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Title-gate threshold, in (0, 1].
    pub alpha: f64,
    pub base_weights: BaseWeights,
    pub experience_gap_tolerance_years: f64,
    /// Budget for each backend-dependent step (title gate, soft skills, responsibility fit).
    pub scorer_timeout: Duration,
}

impl EngineConfig {
    /// Default weights, tolerance and timeout; `alpha` is a deployment decision.
    #[cfg(test)]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            base_weights: BaseWeights::default(),
            experience_gap_tolerance_years: DEFAULT_GAP_TOLERANCE_YEARS,
            scorer_timeout: Duration::from_millis(DEFAULT_SCORER_TIMEOUT_MS),
        }
    }

    /// Builds and validates a config from `FIT_*` keys resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let number = |key: &str, default: f64| -> Result<f64, EngineError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                    EngineError::InvalidConfiguration(format!("{key} must be a number, got '{raw}'"))
                }),
            }
        };

        let defaults = BaseWeights::default();
        let mut weights = std::collections::BTreeMap::new();
        for (kind, key) in [
            (SubScoreKind::HardSkill, "FIT_WEIGHT_HARD_SKILL"),
            (SubScoreKind::SoftSkill, "FIT_WEIGHT_SOFT_SKILL"),
            (SubScoreKind::Experience, "FIT_WEIGHT_EXPERIENCE"),
            (SubScoreKind::ResponsibilityFit, "FIT_WEIGHT_RESPONSIBILITY_FIT"),
        ] {
            weights.insert(kind, number(key, defaults.get(kind))?);
        }

        let timeout_ms = match lookup("FIT_SCORER_TIMEOUT_MS") {
            None => DEFAULT_SCORER_TIMEOUT_MS,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                EngineError::InvalidConfiguration(format!(
                    "FIT_SCORER_TIMEOUT_MS must be a whole number of milliseconds, got '{raw}'"
                ))
            })?,
        };

        let config = EngineConfig {
            alpha: number("FIT_TITLE_GATE_ALPHA", DEFAULT_ALPHA)?,
            base_weights: BaseWeights::new(weights),
            experience_gap_tolerance_years: number(
                "FIT_EXPERIENCE_GAP_TOLERANCE_YEARS",
                DEFAULT_GAP_TOLERANCE_YEARS,
            )?,
            scorer_timeout: Duration::from_millis(timeout_ms),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(EngineError::InvalidConfiguration(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        self.base_weights.validate()?;
        if !(self.experience_gap_tolerance_years.is_finite()
            && self.experience_gap_tolerance_years > 0.0)
        {
            return Err(EngineError::InvalidConfiguration(format!(
                "experience gap tolerance must be a positive number of years, got {}",
                self.experience_gap_tolerance_years
            )));
        }
        if self.scorer_timeout.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "scorer timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
