use crate::extraction::JobRequirement;
use crate::matching::types::{OutreachMode, RoutingDecision, ScoreBreakdown};

/// Chooses the outreach mode for the email composer.
///
/// Personalized iff the job names a reachable contact. The score never changes the mode; it
/// only informs the draft's content downstream.
pub fn route(breakdown: ScoreBreakdown, job: &JobRequirement) -> RoutingDecision {
    match job.contact_person.as_ref().filter(|c| c.is_reachable()) {
        Some(contact) => RoutingDecision {
            mode: OutreachMode::Personalized,
            contact: Some(contact.clone()),
            breakdown,
        },
        None => RoutingDecision {
            mode: OutreachMode::General,
            contact: None,
            breakdown,
        },
    }
}
