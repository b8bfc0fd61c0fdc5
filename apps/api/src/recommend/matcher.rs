//! Skill matching. Turns a comma-separated skill list into job titles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, JobDetails};

/// Output of a single match run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Deduplicated job titles in first-occurrence order.
    pub recommendations: Vec<String>,
    /// Input tokens (whitespace-trimmed, case preserved) with no catalog entry.
    pub unrecognized: Vec<String>,
}

/// A job title joined with its details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job: String,
    pub details: JobDetails,
}

/// Splits `raw` on commas and looks each non-empty token up, case-insensitively.
///
/// Empty or whitespace-only input yields an empty outcome; callers are expected
/// to reject it before getting here.
pub fn match_skills(catalog: &Catalog, raw: &str) -> MatchOutcome {
    let mut collected: Vec<&str> = Vec::new();
    let mut unrecognized = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match catalog.jobs_for_skill(&token.to_lowercase()) {
            Some(titles) => collected.extend(titles.iter().map(String::as_str)),
            None => unrecognized.push(token.to_string()),
        }
    }

    MatchOutcome {
        recommendations: dedup_preserving_order(collected),
        unrecognized,
    }
}

fn dedup_preserving_order(titles: Vec<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// Joins titles to their details. Titles with no details entry are dropped.
pub fn resolve(catalog: &Catalog, titles: &[String]) -> Vec<Recommendation> {
    titles
        .iter()
        .filter_map(|job| {
            catalog.details(job).map(|details| Recommendation {
                job: job.clone(),
                details: details.clone(),
            })
        })
        .collect()
}
