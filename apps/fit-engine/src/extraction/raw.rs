//! Raw extraction payloads as produced by the upstream section parser and entity extractors.
//!
//! Everything here is lenient: absent fields, `null`s and oddly-shaped sections all
//! deserialize to empty values. Validation happens once, in `adapter::normalize`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Resume extraction output: section name → text spans, plus entity lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResume {
    /// Each value is a string, an array of strings, or anything else (treated as empty).
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hard_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub declared_roles: Vec<String>,
}

/// Job-description extraction output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hard_skills_required: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft_skills_required: Vec<String>,
    #[serde(default)]
    pub years_experience_required: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contact_person: Option<RawContactPerson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContactPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub contact_method: Option<String>,
}

/// Extracts text spans from a loosely-typed section value.
pub(crate) fn spans_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let resume: RawResume = serde_json::from_str("{}").unwrap();
        assert!(resume.sections.is_empty());
        assert!(resume.hard_skills.is_empty());
        assert!(resume.years_experience.is_none());
    }

    #[test]
    fn test_null_lists_default_to_empty() {
        let job: RawJob = serde_json::from_value(json!({
            "sections": null,
            "hard_skills_required": null,
            "soft_skills_required": null,
            "title": null,
            "contact_person": null
        }))
        .unwrap();
        assert!(job.sections.is_empty());
        assert!(job.hard_skills_required.is_empty());
        assert!(job.title.is_none());
        assert!(job.contact_person.is_none());
    }

    #[test]
    fn test_spans_of_accepts_string_array_and_junk() {
        assert_eq!(spans_of(&json!("one")), vec!["one"]);
        assert_eq!(spans_of(&json!(["a", 3, null, "b"])), vec!["a", "b"]);
        assert!(spans_of(&json!({"nested": true})).is_empty());
        assert!(spans_of(&json!(42)).is_empty());
    }
}
