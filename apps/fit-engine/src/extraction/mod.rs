// Extraction Adapter: raw section/entity payloads in, canonical immutable documents out.
// Upstream parsing (PDF layout, entity extraction) happens outside this service.

pub mod adapter;
pub mod experience;
pub mod profile;
pub mod raw;

pub use adapter::normalize;
pub use profile::{
    CandidateProfile, ContactPerson, JobRequirement, JobSectionKind, ResumeSectionKind, Section,
};
pub use raw::{RawContactPerson, RawJob, RawResume};
