// Hybrid candidate/job fit scoring: title gate, four signal scorers, aggregation, routing.
// Embedding and LLM calls only go through the injected backends.

pub mod aggregator;
pub mod backends;
pub mod engine;
pub mod error;
pub mod experience;
pub mod handlers;
pub mod hard_skills;
pub mod ontology;
pub mod responsibility;
pub mod routing;
pub mod soft_skills;
pub mod title_gate;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{FitEngine, FitOutcome};
pub use error::{BackendError, EngineError};
