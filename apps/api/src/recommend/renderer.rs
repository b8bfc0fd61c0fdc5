//! Card rendering: pluggable HTML output for a `RenderableCard`.
//!
//! `TemplatedRenderer` substitutes values into `job_card.html`; `StructuredRenderer`
//! builds the same card without a template. `AppState` holds an `Arc<dyn CardRenderer>`
//! chosen once at startup by `select_renderer`.

use std::sync::Arc;

use tracing::info;

use crate::recommend::presenter::{RenderableCard, CURRENCY};

pub trait CardRenderer: Send + Sync {
    fn render(&self, card: &RenderableCard) -> String;

    /// "template" or "structured", reported in logs and API responses.
    fn backend(&self) -> &'static str;
}

/// Picks the templated renderer when a non-blank template was loaded.
pub fn select_renderer(template: Option<String>) -> Arc<dyn CardRenderer> {
    match template {
        Some(template) if !template.trim().is_empty() => {
            info!("Card renderer: template");
            Arc::new(TemplatedRenderer::new(template))
        }
        _ => {
            info!("Card template unavailable; using structured renderer");
            Arc::new(StructuredRenderer)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TemplatedRenderer
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplatedRenderer {
    template: String,
}

impl TemplatedRenderer {
    pub fn new(template: String) -> Self {
        Self { template }
    }

    fn replacements(card: &RenderableCard) -> [(&'static str, String); 11] {
        [
            ("JOB_TITLE_PLACEHOLDER", escape_html(&card.job)),
            ("JOB_DESCRIPTION_PLACEHOLDER", escape_html(&card.description)),
            ("MIN_SALARY_PLACEHOLDER", card.min_salary_display()),
            ("MAX_SALARY_PLACEHOLDER", card.max_salary_display()),
            (
                "SALARY_PERCENTAGE_PLACEHOLDER",
                card.salary_percentage.to_string(),
            ),
            ("CERTIFICATES_PLACEHOLDER", escape_html(&card.certificates)),
            ("AI_IMPACT_PLACEHOLDER", card.ai_impact.as_str().to_string()),
            ("AI_COLOR_PLACEHOLDER", card.ai_style.color.to_string()),
            ("AI_ICON_PLACEHOLDER", card.ai_style.icon.to_string()),
            ("CAREER_LEVEL_PLACEHOLDER", escape_html(card.career_level)),
            ("LOCATION_PLACEHOLDER", escape_html(card.location)),
        ]
    }
}

impl CardRenderer for TemplatedRenderer {
    fn render(&self, card: &RenderableCard) -> String {
        Self::replacements(card)
            .iter()
            .fold(self.template.clone(), |html, (key, value)| {
                html.replace(*key, value)
            })
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StructuredRenderer
// ────────────────────────────────────────────────────────────────────────────

/// Four-column card: title, salary bar, certificates, AI impact.
pub struct StructuredRenderer;

impl CardRenderer for StructuredRenderer {
    fn render(&self, card: &RenderableCard) -> String {
        format!(
            r#"<div class="job-card job-card--structured">
  <div class="job-col job-col--title">
    <strong>{job}</strong>
    <p>{description}</p>
  </div>
  <div class="job-col job-col--salary">
    <progress max="100" value="{pct}">{pct}%</progress>
    <p>💰 {currency} {min} - {max}</p>
  </div>
  <div class="job-col job-col--certs">
    <p>📜 Certificates: {certs}</p>
  </div>
  <div class="job-col job-col--impact">
    <p>🤖 AI Impact: <span style="color: {color}">{icon} {impact}</span></p>
  </div>
</div>
<hr>"#,
            job = escape_html(&card.job),
            description = escape_html(&card.description),
            pct = card.salary_percentage,
            currency = CURRENCY,
            min = card.min_salary_display(),
            max = card.max_salary_display(),
            certs = escape_html(&card.certificates),
            color = card.ai_style.color,
            icon = card.ai_style.icon,
            impact = card.ai_impact.as_str(),
        )
    }

    fn backend(&self) -> &'static str {
        "structured"
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::details;
    use crate::catalog::AiImpact;
    use crate::recommend::presenter::present;

    const TEMPLATE: &str = "<h3>JOB_TITLE_PLACEHOLDER</h3><p>JOB_DESCRIPTION_PLACEHOLDER</p>\
        <span>MIN_SALARY_PLACEHOLDER-MAX_SALARY_PLACEHOLDER</span>\
        <div style=\"width: SALARY_PERCENTAGE_PLACEHOLDER%\"></div>\
        <i style=\"color: AI_COLOR_PLACEHOLDER\">AI_ICON_PLACEHOLDER AI_IMPACT_PLACEHOLDER</i>\
        <ul>CERTIFICATES_PLACEHOLDER</ul><em>CAREER_LEVEL_PLACEHOLDER / LOCATION_PLACEHOLDER</em>";

    fn card() -> RenderableCard {
        present(
            "R&D Lead",
            &details("Builds <things>, fast.", 9000, 17000, AiImpact::High),
        )
    }

    #[test]
    fn test_template_fills_every_placeholder() {
        let html = TemplatedRenderer::new(TEMPLATE.to_string()).render(&card());
        assert!(!html.contains("PLACEHOLDER"), "{html}");
        assert!(html.contains("<h3>R&amp;D Lead</h3>"));
        assert!(html.contains("Builds &lt;things&gt;, fast."));
        assert!(html.contains("9,000-17,000"));
        assert!(html.contains("width: 9%"));
        assert!(html.contains("color: #ff6b6b"));
        assert!(html.contains("🔴 High"));
        assert!(html.contains("Cert A, Cert B"));
        assert!(html.contains("Intermediate / UAE (Remote/On-site)"));
    }

    #[test]
    fn test_structured_carries_same_values() {
        let html = StructuredRenderer.render(&card());
        assert!(html.contains("R&amp;D Lead"));
        assert!(html.contains("Builds &lt;things&gt;, fast."));
        assert!(html.contains("AED 9,000 - 17,000"));
        assert!(html.contains(r#"value="9""#));
        assert!(html.contains("color: #ff6b6b"));
        assert!(html.contains("🔴 High"));
        assert!(html.contains("Cert A, Cert B"));
    }

    #[test]
    fn test_shipped_template_has_no_leftover_placeholders() {
        let template = include_str!("../../../../assets/job_card.html");
        let html = TemplatedRenderer::new(template.to_string()).render(&card());
        assert!(!html.contains("PLACEHOLDER"));
        assert!(html.contains("R&amp;D Lead"));
    }

    #[test]
    fn test_select_renderer() {
        assert_eq!(select_renderer(None).backend(), "structured");
        assert_eq!(select_renderer(Some("  \n".to_string())).backend(), "structured");
        assert_eq!(select_renderer(Some(TEMPLATE.to_string())).backend(), "template");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
