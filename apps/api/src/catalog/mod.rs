//! Static reference data: skill → job titles, and job title → details.
//!
//! Built once at startup and shared read-only through `AppState`.

pub mod career_paths;
mod data;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use self::data::{JOB_SEEDS, SKILL_MAP};

/// How exposed a role is to automation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum AiImpact {
    #[default]
    Low,
    Medium,
    High,
}

impl AiImpact {
    /// Total mapping from a free-form label. Anything other than exactly
    /// `High` or `Medium` is `Low`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => AiImpact::High,
            "Medium" => AiImpact::Medium,
            _ => AiImpact::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiImpact::Low => "Low",
            AiImpact::Medium => "Medium",
            AiImpact::High => "High",
        }
    }
}

impl From<String> for AiImpact {
    fn from(label: String) -> Self {
        AiImpact::from_label(&label)
    }
}

/// Metadata shown for one job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub description: String,
    /// (min, max) in the catalog currency.
    pub salary_range: (u32, u32),
    pub certificates: Vec<String>,
    pub ai_impact: AiImpact,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Declaration order of skill keys, for listing.
    skill_keys: Vec<String>,
    skills: HashMap<String, Vec<String>>,
    jobs: HashMap<String, JobDetails>,
}

impl Catalog {
    /// Builds a catalog from raw tables. Skill keys are stored lower-cased.
    pub fn new<S, J>(skills: S, jobs: J) -> Self
    where
        S: IntoIterator<Item = (String, Vec<String>)>,
        J: IntoIterator<Item = (String, JobDetails)>,
    {
        let mut skill_keys = Vec::new();
        let mut skill_map = HashMap::new();
        for (key, titles) in skills {
            let key = key.trim().to_lowercase();
            if skill_map.insert(key.clone(), titles).is_none() {
                skill_keys.push(key);
            }
        }

        Catalog {
            skill_keys,
            skills: skill_map,
            jobs: jobs.into_iter().collect(),
        }
    }

    /// The built-in UAE market catalog.
    pub fn builtin() -> Self {
        let skills = SKILL_MAP.iter().map(|(key, titles)| {
            (
                key.to_string(),
                titles.iter().map(|t| t.to_string()).collect(),
            )
        });
        let jobs = JOB_SEEDS.iter().map(|seed| {
            (
                seed.title.to_string(),
                JobDetails {
                    description: seed.description.to_string(),
                    salary_range: seed.salary,
                    certificates: seed.certificates.iter().map(|c| c.to_string()).collect(),
                    ai_impact: seed.ai_impact,
                },
            )
        });

        let catalog = Catalog::new(skills, jobs);
        catalog.log_consistency();
        catalog
    }

    /// Job titles mapped from a normalized skill key, in declared order.
    pub fn jobs_for_skill(&self, skill: &str) -> Option<&[String]> {
        self.skills.get(skill).map(Vec::as_slice)
    }

    pub fn details(&self, title: &str) -> Option<&JobDetails> {
        self.jobs.get(title)
    }

    pub fn skill_keys(&self) -> &[String] {
        &self.skill_keys
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Titles reachable from the skill map that have no details entry,
    /// each listed once in first-reference order.
    pub fn dangling_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dangling = Vec::new();
        for key in &self.skill_keys {
            for title in &self.skills[key] {
                if !self.jobs.contains_key(title) && seen.insert(title.as_str()) {
                    dangling.push(title.as_str());
                }
            }
        }
        dangling
    }

    fn log_consistency(&self) {
        info!(
            "Catalog loaded: {} skills, {} jobs",
            self.skill_keys.len(),
            self.job_count()
        );
        for title in self.dangling_titles() {
            warn!("Catalog: job '{title}' is mapped from a skill but has no details; it will never be shown");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn details(description: &str, min: u32, max: u32, impact: AiImpact) -> JobDetails {
        JobDetails {
            description: description.to_string(),
            salary_range: (min, max),
            certificates: vec!["Cert A".to_string(), "Cert B".to_string()],
            ai_impact: impact,
        }
    }

    /// Small catalog: "rust" maps to a job that has no details.
    pub(crate) fn fixture_catalog() -> Catalog {
        Catalog::new(
            vec![
                (
                    "Rust".to_string(),
                    vec!["Systems Engineer".to_string(), "Ghost Role".to_string()],
                ),
                (
                    "go".to_string(),
                    vec!["Backend Engineer".to_string(), "Systems Engineer".to_string()],
                ),
            ],
            vec![
                (
                    "Systems Engineer".to_string(),
                    details("Keeps the lights on.", 11000, 19000, AiImpact::Medium),
                ),
                (
                    "Backend Engineer".to_string(),
                    details("Builds APIs, services, and storage.", 10000, 20000, AiImpact::Low),
                ),
            ],
        )
    }

    #[test]
    fn test_from_label_is_total() {
        assert_eq!(AiImpact::from_label("High"), AiImpact::High);
        assert_eq!(AiImpact::from_label("Medium"), AiImpact::Medium);
        assert_eq!(AiImpact::from_label("Low"), AiImpact::Low);
        assert_eq!(AiImpact::from_label("high"), AiImpact::Low);
        assert_eq!(AiImpact::from_label(""), AiImpact::Low);
        assert_eq!(AiImpact::from_label("Extreme"), AiImpact::Low);
    }

    #[test]
    fn test_unknown_label_deserializes_as_low() {
        let impact: AiImpact = serde_json::from_str(r#""Severe""#).unwrap();
        assert_eq!(impact, AiImpact::Low);
        let impact: AiImpact = serde_json::from_str(r#""High""#).unwrap();
        assert_eq!(impact, AiImpact::High);
        assert_eq!(serde_json::to_string(&AiImpact::Medium).unwrap(), r#""Medium""#);
    }

    #[test]
    fn test_skill_keys_are_normalized() {
        let catalog = fixture_catalog();
        assert!(catalog.jobs_for_skill("rust").is_some());
        assert!(catalog.jobs_for_skill("Rust").is_none());
        assert_eq!(catalog.skill_keys(), &["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn test_dangling_titles_fixture() {
        assert_eq!(fixture_catalog().dangling_titles(), vec!["Ghost Role"]);
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skill_keys().len(), 45);
        assert_eq!(catalog.job_count(), 73);
        assert_eq!(catalog.skill_keys()[0], "python");
        assert_eq!(
            catalog.jobs_for_skill("python").unwrap(),
            &[
                "Data Analyst",
                "Software Developer",
                "Data Scientist",
                "AI Researcher",
                "ML Engineer"
            ]
        );
    }

    #[test]
    fn test_builtin_catalog_has_one_known_gap() {
        assert_eq!(Catalog::builtin().dangling_titles(), vec!["Data Engineer"]);
    }

    #[test]
    fn test_builtin_details_are_well_formed() {
        let catalog = Catalog::builtin();
        let cfo = catalog.details("CFO").unwrap();
        assert_eq!(cfo.salary_range, (50000, 150000));
        assert_eq!(cfo.ai_impact, AiImpact::High);
        for key in catalog.skill_keys() {
            for title in catalog.jobs_for_skill(key).unwrap() {
                if let Some(details) = catalog.details(title) {
                    assert!(details.salary_range.0 <= details.salary_range.1, "{title}");
                    assert!(!details.certificates.is_empty(), "{title}");
                }
            }
        }
    }
}
