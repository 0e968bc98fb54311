//! Canonical, validated documents consumed by the engine.
//!
//! Built once by `adapter::normalize` and only ever borrowed afterwards; scorers running
//! concurrently share them read-only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResumeSectionKind {
    Education,
    Skills,
    Experience,
    Certificates,
    Volunteering,
    Projects,
}

impl ResumeSectionKind {
    /// Maps a free-form heading ("Professional Experience", "Certifications") to a kind.
    pub fn from_heading(heading: &str) -> Option<Self> {
        match normalize_heading(heading).as_str() {
            "education" | "education and training" | "academic background" => {
                Some(Self::Education)
            }
            "skills" | "technical skills" | "core skills" | "key skills" | "skills and tools" => {
                Some(Self::Skills)
            }
            "experience"
            | "professional experience"
            | "work experience"
            | "employment history"
            | "work history" => Some(Self::Experience),
            "certificates"
            | "certifications"
            | "licenses and certifications"
            | "certificates and licenses" => Some(Self::Certificates),
            "volunteering" | "volunteer experience" | "volunteer work" => Some(Self::Volunteering),
            "projects" | "personal projects" | "side projects" => Some(Self::Projects),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobSectionKind {
    Requirements,
    Responsibilities,
    RoleDescription,
    ContactPerson,
}

impl JobSectionKind {
    pub fn from_heading(heading: &str) -> Option<Self> {
        match normalize_heading(heading).as_str() {
            "requirements"
            | "qualifications"
            | "requirements and qualifications"
            | "what you bring"
            | "must have" => Some(Self::Requirements),
            "responsibilities"
            | "key responsibilities"
            | "duties"
            | "what you will do"
            | "what you ll do" => Some(Self::Responsibilities),
            "role description" | "about the role" | "the role" | "description"
            | "job description" | "overview" => Some(Self::RoleDescription),
            "contact person" | "contact" | "contacts" | "hiring manager" => {
                Some(Self::ContactPerson)
            }
            _ => None,
        }
    }
}

/// Lower-cases, turns `&` into "and", and reduces punctuation runs to single spaces.
fn normalize_heading(heading: &str) -> String {
    let replaced = heading.to_lowercase().replace('&', " and ");
    replaced
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A document section with its non-blank text spans, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<K> {
    pub kind: K,
    pub spans: Vec<String>,
}

impl<K> Section<K> {
    pub fn text(&self) -> String {
        self.spans.join("\n")
    }
}

/// Contact details for the person named in a job ad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub name: Option<String>,
    pub role: Option<String>,
    pub contact_method: Option<String>,
}

impl ContactPerson {
    /// A contact can be addressed personally only if we know who they are or how to reach them.
    pub fn is_reachable(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.name) || present(&self.contact_method)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub sections: Vec<Section<ResumeSectionKind>>,
    pub hard_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub years_experience: Option<f64>,
    /// Titles the candidate is targeting.
    pub declared_roles: Vec<String>,
}

impl CandidateProfile {
    pub fn section(&self, kind: ResumeSectionKind) -> Option<&Section<ResumeSectionKind>> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Section text, or an empty string when the section was not recovered.
    pub fn section_text(&self, kind: ResumeSectionKind) -> String {
        self.section(kind).map(Section::text).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub sections: Vec<Section<JobSectionKind>>,
    pub hard_skills_required: BTreeSet<String>,
    pub soft_skills_required: BTreeSet<String>,
    pub years_experience_required: Option<f64>,
    pub title: String,
    pub contact_person: Option<ContactPerson>,
}

impl JobRequirement {
    pub fn section(&self, kind: JobSectionKind) -> Option<&Section<JobSectionKind>> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_text(&self, kind: JobSectionKind) -> String {
        self.section(kind).map(Section::text).unwrap_or_default()
    }
}
