//! Plain-text results summary for terminals.

use crate::view::ResultsView;

/// Render a results view as plain text.
pub fn render_text(view: &ResultsView) -> String {
    let mut out = String::new();
    let label = view.label();

    out.push_str(&format!("Assessment: {}\n", view.display_name()));
    out.push_str(&format!("Code:       {}\n", view.unique_code));
    out.push_str(&format!("Examiner:   {}\n", view.examiner));
    if !view.activity.is_empty() {
        out.push_str(&format!("Activity:   {}\n", view.activity));
    }
    out.push_str(&format!("Group:      {}\n", view.group));
    out.push_str(&format!("Track:      {}\n", view.recommended_track.title()));
    out.push_str(&format!("Date:       {}\n", view.created_at.format("%Y-%m-%d")));
    out.push('\n');
    out.push_str(&format!(
        "Overall: {}/5 {} ({})\n",
        view.scores.min_score.score, label.title, label.tone
    ));
    out.push_str(&format!("  {}\n", label.description));
    out.push('\n');

    for verse in &view.verses {
        let marker = if verse.below_safe { " !" } else { "" };
        out.push_str(&format!("{:<18} {}/5{}\n", verse.label, verse.score, marker));
        for phrase in &verse.obvious {
            out.push_str(&format!("    [obvious] {phrase}\n"));
        }
        for phrase in &verse.subtle {
            out.push_str(&format!("    [subtle]  {phrase}\n"));
        }
    }

    if view.scores.min_score.score < tilawah_core::scoring::MAX_SCORE {
        let weakest: Vec<&str> = view
            .verses
            .iter()
            .filter(|v| view.weakest_verses.contains(&v.key))
            .map(|v| v.label)
            .collect();
        out.push('\n');
        out.push_str(&format!("Focus on: {}\n", weakest.join(", ")));
    }

    out
}
