//! Shell: the single HTML page wrapping the recommendation form.
//!
//! Layout only; every value shown comes from the recommendation pipeline or
//! the static reference tables.

pub mod handlers;

use std::fmt::Write;

use uuid::Uuid;

use crate::assets::STYLESHEET_FILE;
use crate::catalog::career_paths::{CAREER_TRACKS, HIGH_DEMAND_SKILLS, JOB_SEARCH_TIPS};
use crate::recommend::renderer::escape_html;
use crate::recommend::{RecommendationRun, EMPTY_INPUT_MESSAGE};
use crate::state::AppState;

/// What happened on the last form submission.
#[derive(Debug)]
pub enum FormOutcome {
    /// Nothing was run; the submitted session id is echoed back unchanged.
    EmptyInput { session_id: Option<Uuid> },
    Completed(RecommendationRun),
}

pub fn render_page(state: &AppState, skills_input: &str, outcome: Option<&FormOutcome>) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>AI Job Recommender</title>\n",
    );
    if let Some(css) = &state.stylesheet {
        // Operator-supplied, inlined unescaped
        let _ = write!(html, "<style>\n{css}\n</style>\n");
    }
    html.push_str("</head>\n<body>\n");

    if state.stylesheet.is_none() {
        let _ = writeln!(
            html,
            "<div class=\"notice notice--warning\">Stylesheet not found: {STYLESHEET_FILE}</div>"
        );
    }

    html.push_str(
        "<div class=\"main-header\">\n<h1>🚀 AI Job Recommender</h1>\n\
         <h2>Get personalized job recommendations with salaries, certificates, and AI impact visualization!</h2>\n\
         </div>\n",
    );

    let session_id = match outcome {
        Some(FormOutcome::Completed(run)) => Some(run.session_id),
        Some(FormOutcome::EmptyInput { session_id }) => *session_id,
        None => None,
    }
    .map(|id| id.to_string())
    .unwrap_or_default();
    write_form(&mut html, skills_input, &session_id);

    match outcome {
        Some(FormOutcome::EmptyInput { .. }) => {
            let _ = writeln!(
                html,
                "<div class=\"notice notice--warning\">⚠️ {EMPTY_INPUT_MESSAGE}</div>"
            );
        }
        Some(FormOutcome::Completed(run)) => write_results(&mut html, run),
        None => {}
    }

    write_career_paths(&mut html);
    write_tips(&mut html);
    write_skill_list(&mut html, state.catalog.skill_keys());

    html.push_str(
        "<hr>\n<footer>\n<p>© 2026 AI Job Recommender | Data based on UAE market averages | Salaries in AED</p>\n\
         </footer>\n</body>\n</html>\n",
    );
    html
}

fn write_form(html: &mut String, skills_input: &str, session_id: &str) {
    let _ = write!(
        html,
        "<form class=\"skill-form\" method=\"post\" action=\"/\">\n\
         <label for=\"skills\">Enter your skills (comma-separated, e.g., Python, Excel, Design)</label>\n\
         <input type=\"text\" id=\"skills\" name=\"skills\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"session_id\" value=\"{}\">\n\
         <button type=\"submit\">🚀 Get AI-Powered Recommendations</button>\n\
         </form>\n",
        escape_html(skills_input),
        escape_html(session_id),
    );
}

fn write_results(html: &mut String, run: &RecommendationRun) {
    html.push_str("<section class=\"results\">\n");

    if !run.cards.is_empty() {
        let _ = writeln!(
            html,
            "<div class=\"notice notice--success\">✅ Found {} Recommended Jobs:</div>",
            run.cards.len()
        );
        for rendered in &run.cards {
            html.push_str(&rendered.html);
            html.push('\n');
        }
    }

    if let Some(url) = run.export_url() {
        let _ = write!(
            html,
            "<div class=\"download\">\n\
             <a class=\"button\" href=\"{}\" download>📥 Download All Recommendations (CSV)</a>\n\
             <div class=\"notice notice--success\">✅ Ready to download {} recommendations!</div>\n\
             </div>\n",
            escape_html(&url),
            run.cards.len()
        );
    }

    if !run.unrecognized.is_empty() {
        let _ = write!(
            html,
            "<div class=\"notice notice--warning\">⚠️ Skills not recognized: {}</div>\n\
             <div class=\"notice notice--info\">💡 Try using skills from the list above or check your spelling.</div>\n",
            escape_html(&run.unrecognized.join(", "))
        );
    }

    html.push_str("</section>\n");
}

fn write_career_paths(html: &mut String) {
    html.push_str("<hr>\n<h3>🎯 Explore Career Paths</h3>\n<div class=\"career-paths\">\n");
    for (i, track) in CAREER_TRACKS.iter().enumerate() {
        let open = if i == 0 { " open" } else { "" };
        let _ = writeln!(
            html,
            "<details class=\"career-track\"{open}>\n<summary>{} {}</summary>\n<div class=\"career-levels\">",
            track.icon,
            escape_html(track.name)
        );
        for (label, roles) in track.levels() {
            let _ = writeln!(html, "<div class=\"career-level\">\n<strong>{label}:</strong>\n<ul>");
            for role in roles {
                let _ = writeln!(html, "<li>{}</li>", escape_html(role));
            }
            html.push_str("</ul>\n</div>\n");
        }
        let _ = writeln!(
            html,
            "</div>\n<p><strong>Key Certifications:</strong> {}</p>\n</details>",
            escape_html(track.key_certifications)
        );
    }
    html.push_str("</div>\n");
}

fn write_tips(html: &mut String) {
    html.push_str("<hr>\n<details class=\"tips\">\n<summary>💡 <strong>Quick Tips for Job Searching</strong></summary>\n<ol>\n");
    for tip in JOB_SEARCH_TIPS {
        let _ = writeln!(html, "<li>{}</li>", escape_html(tip));
    }
    html.push_str("</ol>\n<p><strong>High-Demand Skills for 2026:</strong></p>\n<ul>\n");
    for skill in HIGH_DEMAND_SKILLS {
        let _ = writeln!(html, "<li>{}</li>", escape_html(skill));
    }
    html.push_str("</ul>\n</details>\n");
}

fn write_skill_list(html: &mut String, skills: &[String]) {
    html.push_str("<details class=\"skill-list\">\n<summary>📋 Click to view all available skills</summary>\n<p>");
    let escaped: Vec<String> = skills.iter().map(|s| escape_html(s)).collect();
    html.push_str(&escaped.join(", "));
    html.push_str(
        "</p>\n<p>💡 <strong>Tip:</strong> Combine related skills for better matches (e.g., \"python, sql, cloud\")</p>\n\
         </details>\n",
    );
}
