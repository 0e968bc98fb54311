use crate::matching::FitEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fit engine with its similarity and judge backends already wired in.
    pub engine: FitEngine,
}
