//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined. The same
//! document is served on the results page and offered as a download.

use anyhow::{Context, Result};
use std::path::Path;

use tilawah_core::scoring::MAX_SCORE;
use tilawah_core::{Tone, SAFE_SCORE_THRESHOLD};

use crate::view::{ResultsView, VerseView};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "#22c55e",
        Tone::Blue => "#3b82f6",
        Tone::Amber => "#f59e0b",
        Tone::Orange => "#f97316",
        Tone::Red => "#ef4444",
    }
}

/// Generate an HTML report from a results view.
pub fn generate_html(view: &ResultsView) -> String {
    let mut html = String::new();
    let label = view.label();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Al-Fatihah assessment: {}</title>\n",
        html_escape(view.display_name())
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>Al-Fatihah assessment: {}</h1>\n",
        html_escape(view.display_name())
    ));
    html.push_str("<table class=\"details\">\n<tbody>\n");
    let details = [
        ("Code", view.unique_code.as_str()),
        ("Examiner", view.examiner.as_str()),
        ("Activity", view.activity.as_str()),
        ("Group", view.group.as_str()),
        ("Recommended track", view.recommended_track.title()),
    ];
    for (name, value) in details {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            name,
            html_escape(value)
        ));
    }
    html.push_str(&format!(
        "<tr><th>Date</th><td>{}</td></tr>\n",
        view.created_at.format("%Y-%m-%d")
    ));
    html.push_str("</tbody></table>\n");
    html.push_str("</header>\n");

    // Verdict
    html.push_str(&format!(
        "<section class=\"verdict tone-{}\">\n",
        label.tone
    ));
    html.push_str(&format!(
        "<p class=\"score\">{}<span>/{}</span></p>\n",
        view.scores.min_score.score, MAX_SCORE
    ));
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(label.title)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(label.description)));
    if view.scores.min_score.score < MAX_SCORE {
        let weakest: Vec<String> = view
            .verses
            .iter()
            .filter(|v| view.weakest_verses.contains(&v.key))
            .map(|v| html_escape(v.label))
            .collect();
        html.push_str(&format!(
            "<p class=\"meta\">Lowest score in: {}</p>\n",
            weakest.join(", ")
        ));
    }
    html.push_str("</section>\n");

    // Chart
    html.push_str("<section class=\"chart\">\n");
    html.push_str("<h2>Score per verse</h2>\n");
    html.push_str(&generate_bar_chart(&view.verses));
    html.push_str("</section>\n");

    // Per-verse detail
    html.push_str("<section class=\"verses\">\n");
    html.push_str("<h2>Errors heard</h2>\n");
    html.push_str("<table class=\"verse-table\">\n");
    html.push_str("<thead><tr><th>Verse</th><th>Obvious</th><th>Subtle</th><th>Score</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for verse in &view.verses {
        let row_class = if verse.below_safe { " class=\"below-safe\"" } else { "" };
        html.push_str(&format!(
            "<tr{}><td><strong>{}</strong><div class=\"ayah\" dir=\"rtl\" lang=\"ar\">{}</div></td><td>{}</td><td>{}</td><td class=\"tone-{}\">{}</td></tr>\n",
            row_class,
            html_escape(verse.label),
            html_escape(verse.text),
            phrase_list(&verse.obvious),
            phrase_list(&verse.subtle),
            verse.tone,
            verse.score
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} errors recorded. Verses scoring below {} are highlighted.</p>\n",
        view.total_errors, SAFE_SCORE_THRESHOLD
    ));
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn phrase_list(phrases: &[String]) -> String {
    if phrases.is_empty() {
        return "<span class=\"none\">-</span>".to_string();
    }
    let items: String = phrases
        .iter()
        .map(|p| format!("<li>{}</li>", html_escape(p)))
        .collect();
    format!("<ul>{items}</ul>")
}

/// Write an HTML report to a file.
pub fn write_html_report(view: &ResultsView, path: &Path) -> Result<()> {
    let html = generate_html(view);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

fn generate_bar_chart(verses: &[VerseView]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 10;
    let label_width = 150;
    let unit = max_width / MAX_SCORE as usize;

    let total_height = verses.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, verse) in verses.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = verse.score as usize * unit;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(verse.label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width,
            y,
            width,
            bar_height,
            tone_color(verse.tone)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            verse.score
        ));
    }

    // Safe threshold
    let x = label_width + SAFE_SCORE_THRESHOLD as usize * unit;
    svg.push_str(&format!(
        "  <line class=\"safe-line\" x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{total_height}\" stroke=\"#6b7280\" stroke-dasharray=\"6 4\"/>\n"
    ));

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --warn: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --warn: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: top; }
th { background: var(--border); }
table.details { width: auto; }
.verdict { border-radius: 8px; padding: 1rem 2rem; border-left: 8px solid currentColor; }
.verdict .score { font-size: 3rem; font-weight: bold; margin: 0; }
.verdict .score span { font-size: 1.5rem; color: #6b7280; }
.tone-green { color: #15803d; }
.tone-blue { color: #1d4ed8; }
.tone-amber { color: #b45309; }
.tone-orange { color: #c2410c; }
.tone-red { color: #b91c1c; }
.below-safe { background: var(--warn); }
.ayah { font-size: 1.4rem; margin-top: 0.5rem; }
ul { margin: 0; padding-left: 1.2rem; }
.none { color: #6b7280; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tilawah_core::catalogue;
    use tilawah_core::{EvaluationRecord, RecommendedTrack, Severity, VerseErrorSet, VerseKey};

    fn make_view() -> ResultsView {
        let obvious = catalogue::options(VerseKey::Verse2, Severity::Obvious);
        let record = EvaluationRecord::new(
            "HTML0001",
            "Ustadz <Fulan>",
            "Tahsin",
            "Ikhwan",
            RecommendedTrack::Foundation,
        )
        .with_subject_name("Ahmad & Sons")
        .with_verse(
            VerseKey::Verse2,
            VerseErrorSet::from_phrases(obvious.iter().take(4).copied(), Vec::<String>::new()),
        );
        ResultsView::from_record(&record)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let view = make_view();
        let html = generate_html(&view);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("HTML0001"));
        assert!(html.contains("Critical"));
        assert!(html.contains("tone-red"));
        assert!(html.contains("class=\"below-safe\""));
        assert!(html.contains("class=\"safe-line\""));
        assert!(html.contains(catalogue::entry(VerseKey::Verse1).text));
        assert!(html.contains("Lowest score in: Verse 2"));
    }

    #[test]
    fn html_report_escapes_user_text() {
        let html = generate_html(&make_view());
        assert!(html.contains("Ahmad &amp; Sons"));
        assert!(html.contains("Ustadz &lt;Fulan&gt;"));
        assert!(!html.contains("<Fulan>"));
    }

    #[test]
    fn chart_has_a_bar_per_verse() {
        let html = generate_html(&make_view());
        assert_eq!(html.matches("<rect ").count(), 8);
        // Safe line sits at score 3 of 5.
        assert!(html.contains("x1=\"390\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let view = make_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.html");

        write_html_report(&view, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
