//! Soft-skill ontology: maps free-text soft-skill terms onto a fixed set of canonical categories.
//!
//! Terms outside the mapping are ignored by the soft-skill scorer rather than scored as zero.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::extraction::adapter::normalize_skill;

/// Category name → member terms. Category names are themselves members.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "communication",
        &[
            "written communication",
            "verbal communication",
            "public speaking",
            "presentation",
            "presentation skills",
            "stakeholder communication",
            "stakeholder management",
            "storytelling",
            "active listening",
            "negotiation",
        ],
    ),
    (
        "leadership",
        &[
            "team leadership",
            "mentoring",
            "coaching",
            "people management",
            "decision making",
            "ownership",
            "delegation",
            "influence",
        ],
    ),
    (
        "problem solving",
        &[
            "troubleshooting",
            "debugging",
            "root cause analysis",
            "resourcefulness",
            "solution oriented",
        ],
    ),
    (
        "teamwork and collaboration",
        &[
            "teamwork",
            "collaboration",
            "cross functional collaboration",
            "team player",
            "interpersonal skills",
            "relationship building",
        ],
    ),
    (
        "analytical thinking",
        &[
            "critical thinking",
            "data driven",
            "attention to detail",
            "research",
            "logical reasoning",
        ],
    ),
    (
        "adaptability",
        &[
            "flexibility",
            "resilience",
            "learning agility",
            "fast learner",
            "growth mindset",
        ],
    ),
    (
        "creativity and innovation",
        &[
            "creativity",
            "innovation",
            "design thinking",
            "curiosity",
            "initiative",
        ],
    ),
    (
        "time management",
        &[
            "prioritisation",
            "prioritization",
            "organisation",
            "organization",
            "planning",
            "meeting deadlines",
            "multitasking",
        ],
    ),
];

/// Accepted ontology file layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OntologyFile {
    /// `{"category": ["term", ...], ...}`
    Groups(BTreeMap<String, Vec<String>>),
    /// Annotated examples: `[{"text": ..., "extractions": [{"extraction_class", "extraction_text"}]}]`.
    Examples(Vec<AnnotatedExample>),
}

#[derive(Debug, Deserialize)]
struct AnnotatedExample {
    #[serde(default)]
    extractions: Vec<Extraction>,
}

#[derive(Debug, Deserialize)]
struct Extraction {
    extraction_class: String,
    extraction_text: String,
}

impl OntologyFile {
    fn into_groups(self) -> BTreeMap<String, Vec<String>> {
        match self {
            OntologyFile::Groups(groups) => groups,
            OntologyFile::Examples(examples) => {
                let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for extraction in examples.into_iter().flat_map(|e| e.extractions) {
                    groups
                        .entry(extraction.extraction_class)
                        .or_default()
                        .push(extraction.extraction_text);
                }
                groups
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SoftSkillOntology {
    /// Normalized term → category name.
    terms: HashMap<String, String>,
}

impl Default for SoftSkillOntology {
    fn default() -> Self {
        let groups = BUILTIN
            .iter()
            .map(|(category, terms)| {
                (
                    category.to_string(),
                    terms.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        Self::from_groups(groups)
    }
}

impl SoftSkillOntology {
    pub fn from_groups(groups: BTreeMap<String, Vec<String>>) -> Self {
        let mut terms = HashMap::new();
        for (category, members) in groups {
            let category = normalize_skill(&category);
            if category.is_empty() {
                continue;
            }
            for member in members {
                let member = normalize_skill(&member);
                if !member.is_empty() {
                    terms.insert(member, category.clone());
                }
            }
            terms.insert(category.clone(), category);
        }
        Self { terms }
    }

    /// Loads either a category → terms map or a list of annotated extraction examples, where
    /// each `extraction_text` becomes a member of its `extraction_class`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read soft-skill ontology '{}'", path.display()))?;
        let file: OntologyFile = serde_json::from_str(&raw).with_context(|| {
            format!("Soft-skill ontology '{}' is not in a known format", path.display())
        })?;
        Ok(Self::from_groups(file.into_groups()))
    }

    /// Canonical category for a term, if the term is in the ontology.
    pub fn category_of(&self, term: &str) -> Option<&str> {
        self.terms.get(&normalize_skill(term)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
