//! Extraction Adapter — turns raw extraction payloads into canonical documents.
//!
//! No business logic beyond validation and defaulting. Partial data is accepted; the scorers
//! flag what they cannot use via `available = false`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::extraction::experience::years_from_date_ranges;
use crate::extraction::profile::{
    CandidateProfile, ContactPerson, JobRequirement, JobSectionKind, ResumeSectionKind, Section,
};
use crate::extraction::raw::{spans_of, RawContactPerson, RawJob, RawResume};
use crate::matching::error::EngineError;

/// Normalizes a resume/job pair. Fails only when neither document has a single section.
pub fn normalize(
    raw_resume: &RawResume,
    raw_job: &RawJob,
) -> Result<(CandidateProfile, JobRequirement), EngineError> {
    normalize_as_of(raw_resume, raw_job, Utc::now().date_naive())
}

/// Same as `normalize`, with "today" pinned for open-ended date ranges.
pub fn normalize_as_of(
    raw_resume: &RawResume,
    raw_job: &RawJob,
    today: NaiveDate,
) -> Result<(CandidateProfile, JobRequirement), EngineError> {
    let resume_sections = collect_sections(&raw_resume.sections, ResumeSectionKind::from_heading);
    let job_sections = collect_sections(&raw_job.sections, JobSectionKind::from_heading);

    if resume_sections.is_empty() && job_sections.is_empty() {
        return Err(EngineError::MalformedExtraction);
    }

    let years_experience = valid_years(raw_resume.years_experience).or_else(|| {
        resume_sections
            .iter()
            .find(|s| s.kind == ResumeSectionKind::Experience)
            .and_then(|s| years_from_date_ranges(&s.text(), today))
    });

    let candidate = CandidateProfile {
        sections: resume_sections,
        hard_skills: normalize_skills(&raw_resume.hard_skills),
        soft_skills: normalize_skills(&raw_resume.soft_skills),
        years_experience,
        declared_roles: dedup_roles(&raw_resume.declared_roles),
    };

    let job = JobRequirement {
        sections: job_sections,
        hard_skills_required: normalize_skills(&raw_job.hard_skills_required),
        soft_skills_required: normalize_skills(&raw_job.soft_skills_required),
        years_experience_required: valid_years(raw_job.years_experience_required),
        title: raw_job
            .title
            .as_deref()
            .map(collapse_whitespace)
            .unwrap_or_default(),
        contact_person: raw_job.contact_person.as_ref().and_then(normalize_contact),
    };

    Ok((candidate, job))
}

/// Groups spans by canonical kind (aliases merge), drops unknown headings and blank spans,
/// and returns sections in canonical order.
fn collect_sections<K: Ord + Copy>(
    raw: &BTreeMap<String, serde_json::Value>,
    classify: fn(&str) -> Option<K>,
) -> Vec<Section<K>> {
    let mut grouped: BTreeMap<K, Vec<String>> = BTreeMap::new();
    for (heading, value) in raw {
        let Some(kind) = classify(heading) else {
            debug!("Dropping unrecognised section '{heading}'");
            continue;
        };
        let spans = spans_of(value)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        grouped.entry(kind).or_default().extend(spans);
    }

    grouped
        .into_iter()
        .filter(|(_, spans)| !spans.is_empty())
        .map(|(kind, spans)| Section { kind, spans })
        .collect()
}

/// Skills compare by near-exact identity: case and whitespace are not significant.
pub(crate) fn normalize_skill(skill: &str) -> String {
    collapse_whitespace(&skill.to_lowercase())
}

fn normalize_skills(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn valid_years(years: Option<f64>) -> Option<f64> {
    years.filter(|y| y.is_finite() && *y >= 0.0)
}

fn dedup_roles(roles: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    roles
        .iter()
        .map(|r| collapse_whitespace(r))
        .filter(|r| !r.is_empty())
        .filter(|r| seen.insert(r.to_lowercase()))
        .collect()
}

fn normalize_contact(raw: &RawContactPerson) -> Option<ContactPerson> {
    let clean = |v: &Option<String>| {
        v.as_deref()
            .map(collapse_whitespace)
            .filter(|s| !s.is_empty())
    };
    let contact = ContactPerson {
        name: clean(&raw.name),
        role: clean(&raw.role),
        contact_method: clean(&raw.contact_method),
    };
    if contact.name.is_none() && contact.role.is_none() && contact.contact_method.is_none() {
        None
    } else {
        Some(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn resume(value: serde_json::Value) -> RawResume {
        serde_json::from_value(value).unwrap()
    }

    fn job(value: serde_json::Value) -> RawJob {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_both_documents_empty_is_malformed() {
        let err = normalize_as_of(&RawResume::default(), &RawJob::default(), today()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedExtraction));
    }

    #[test]
    fn test_blank_sections_count_as_empty() {
        let r = resume(json!({ "sections": { "Education": ["   "], "Hobbies": ["chess"] } }));
        let err = normalize_as_of(&r, &RawJob::default(), today()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedExtraction));
    }

    #[test]
    fn test_one_sided_document_is_accepted() {
        let r = resume(json!({ "sections": { "Skills": "Rust, SQL" } }));
        let (candidate, job) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        assert_eq!(candidate.sections.len(), 1);
        assert!(job.sections.is_empty());
        assert!(job.contact_person.is_none());
        assert_eq!(job.title, "");
    }

    #[test]
    fn test_sections_are_canonically_ordered_and_aliases_merge() {
        let r = resume(json!({
            "sections": {
                "Projects": ["CLI tool"],
                "Work Experience": ["Acme Jan 2020 - Jan 2021"],
                "Professional Experience": ["Beta Feb 2021 - Feb 2023"],
                "Education": ["BSc"]
            }
        }));
        let (candidate, _) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        let kinds: Vec<_> = candidate.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResumeSectionKind::Education,
                ResumeSectionKind::Experience,
                ResumeSectionKind::Projects
            ]
        );
        assert_eq!(
            candidate.section(ResumeSectionKind::Experience).unwrap().spans.len(),
            2
        );
    }

    #[test]
    fn test_skills_are_normalized() {
        let r = resume(json!({
            "sections": { "Skills": ["x"] },
            "hard_skills": ["  Python ", "python", "Machine   Learning", ""]
        }));
        let (candidate, _) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        let skills: Vec<_> = candidate.hard_skills.iter().cloned().collect();
        assert_eq!(skills, vec!["machine learning", "python"]);
    }

    #[test]
    fn test_years_derived_from_experience_when_missing() {
        let r = resume(json!({
            "sections": { "Experience": ["Engineer Jan 2019 - Jan 2023"] }
        }));
        let (candidate, _) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        assert!((candidate.years_experience.unwrap() - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_reported_years_win_over_dates() {
        let r = resume(json!({
            "sections": { "Experience": ["Engineer Jan 2019 - Jan 2023"] },
            "years_experience": 6.5
        }));
        let (candidate, _) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        assert_eq!(candidate.years_experience, Some(6.5));
    }

    #[test]
    fn test_negative_years_treated_as_missing() {
        let j = job(json!({
            "sections": { "Requirements": ["Rust"] },
            "years_experience_required": -1.0
        }));
        let (_, job) = normalize_as_of(&RawResume::default(), &j, today()).unwrap();
        assert_eq!(job.years_experience_required, None);
    }

    #[test]
    fn test_contact_person_blank_fields_collapse() {
        let j = job(json!({
            "sections": { "Contact": ["Reach out to Jane"] },
            "contact_person": { "name": "  Jane  Doe ", "role": "", "contact_method": null }
        }));
        let (_, job) = normalize_as_of(&RawResume::default(), &j, today()).unwrap();
        let contact = job.contact_person.unwrap();
        assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(contact.role, None);

        let j = job_with_empty_contact();
        let (_, job) = normalize_as_of(&RawResume::default(), &j, today()).unwrap();
        assert!(job.contact_person.is_none());
    }

    fn job_with_empty_contact() -> RawJob {
        job(json!({
            "sections": { "Duties": ["Ship things"] },
            "contact_person": { "name": " ", "role": null }
        }))
    }

    #[test]
    fn test_declared_roles_deduplicated_in_order() {
        let r = resume(json!({
            "sections": { "Skills": ["x"] },
            "declared_roles": ["Data Engineer", " ", "data engineer", "ML Engineer"]
        }));
        let (candidate, _) = normalize_as_of(&r, &RawJob::default(), today()).unwrap();
        assert_eq!(candidate.declared_roles, vec!["Data Engineer", "ML Engineer"]);
    }
}
