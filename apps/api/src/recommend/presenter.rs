//! Presenter: derives display values for one recommended job.

use serde::Serialize;

use crate::catalog::{AiImpact, JobDetails};

/// Average salary that fills the salary bar completely.
pub const SALARY_CEILING: u64 = 150_000;
pub const CURRENCY: &str = "AED";
pub const CAREER_LEVEL: &str = "Intermediate";
pub const LOCATION: &str = "UAE (Remote/On-site)";

/// Color and icon for an AI-impact tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

pub fn impact_style(impact: AiImpact) -> ImpactStyle {
    match impact {
        AiImpact::High => ImpactStyle {
            color: "#ff6b6b",
            icon: "🔴",
        },
        AiImpact::Medium => ImpactStyle {
            color: "#ffa726",
            icon: "🟠",
        },
        AiImpact::Low => ImpactStyle {
            color: "#4CAF50",
            icon: "🟢",
        },
    }
}

/// Everything a card renderer needs. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableCard {
    pub job: String,
    pub description: String,
    pub min_salary: u32,
    pub max_salary: u32,
    pub avg_salary: u32,
    /// 0–100, share of `SALARY_CEILING` covered by `avg_salary`.
    pub salary_percentage: u8,
    pub salary_display: String,
    pub certificates: String,
    pub ai_impact: AiImpact,
    pub ai_style: ImpactStyle,
    pub career_level: &'static str,
    pub location: &'static str,
}

impl RenderableCard {
    pub fn min_salary_display(&self) -> String {
        format_thousands(self.min_salary as u64)
    }

    pub fn max_salary_display(&self) -> String {
        format_thousands(self.max_salary as u64)
    }
}

pub fn present(job: &str, details: &JobDetails) -> RenderableCard {
    let (min, max) = details.salary_range;
    let avg = average_salary(min, max);

    RenderableCard {
        job: job.to_string(),
        description: details.description.clone(),
        min_salary: min,
        max_salary: max,
        avg_salary: avg,
        salary_percentage: salary_percentage(avg),
        salary_display: format!(
            "{CURRENCY} {} - {}",
            format_thousands(min as u64),
            format_thousands(max as u64)
        ),
        certificates: join_certificates(&details.certificates),
        ai_impact: details.ai_impact,
        ai_style: impact_style(details.ai_impact),
        career_level: CAREER_LEVEL,
        location: LOCATION,
    }
}

/// Truncating midpoint. Widened so `u32::MAX` bounds cannot overflow.
pub fn average_salary(min: u32, max: u32) -> u32 {
    ((min as u64 + max as u64) / 2) as u32
}

/// `round(avg / SALARY_CEILING * 100)`, saturating at 100.
pub fn salary_percentage(avg: u32) -> u8 {
    let pct = (avg as u64 * 100 + SALARY_CEILING / 2) / SALARY_CEILING;
    pct.min(100) as u8
}

pub fn join_certificates(certificates: &[String]) -> String {
    certificates.join(", ")
}

/// 1234567 → "1,234,567"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
