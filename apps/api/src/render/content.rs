//! Content rules shared by both renderers.
//!
//! These are the only pieces the preview and the print document are allowed
//! to share: the non-empty gate deciding whether a section renders at all,
//! the line-splitting rule for free-text fields, and the bullet/column
//! conventions. Keeping them here (and only here) is what makes the parity
//! contract hold by construction rather than by coincidence.

use serde::{Deserialize, Serialize};

use crate::document::{ResumeDocument, Section};

/// Named visual layout, applied identically by both renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Professional,
    Ats,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Professional => "professional",
            Template::Ats => "ats",
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Professional
    }
}

/// One rendered section: its heading as laid out by the renderer, plus the
/// ordered renderable units it produced. Unit counts are the parity
/// currency between preview and printable output.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub section: Section,
    pub heading: String,
    pub units: Vec<String>,
}

/// The non-empty gate: a content section renders only if at least one of its
/// records has its primary key field populated. `Personal` always renders
/// (it is the document header).
pub fn section_is_shown(doc: &ResumeDocument, section: Section) -> bool {
    match section {
        Section::Personal => true,
        Section::Education => doc.education.iter().any(|e| e.is_filled()),
        Section::Skills => !doc.filled_skills().is_empty(),
        Section::Experience => doc.experience.iter().any(|e| e.is_filled()),
        Section::Projects => doc.projects.iter().any(|p| p.is_filled()),
        Section::Achievements => doc.achievements.iter().any(|a| a.is_filled()),
        Section::Extracurricular => doc.extracurricular.iter().any(|e| e.is_filled()),
        Section::Summary => !doc.summary.trim().is_empty(),
    }
}

/// Splits a free-text field into renderable lines: one unit per non-blank
/// line, trimmed, blank lines dropped. Both renderers must emit exactly one
/// unit per returned line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// ATS bullet convention: `-- ` prefix, unless the line already carries a
/// bullet marker (avoids double-marking lines that were authored as bullets).
pub fn ats_bullet(line: &str) -> String {
    if line.starts_with("--") || line.starts_with('•') || line.starts_with('-') {
        line.to_string()
    } else {
        format!("-- {line}")
    }
}

/// Professional bullet convention: `• ` prefix with the same pass-through rule.
pub fn pro_bullet(line: &str) -> String {
    if line.starts_with('•') || line.starts_with('-') || line.starts_with('*') {
        line.to_string()
    } else {
        format!("• {line}")
    }
}

/// Two-column skills split for the professional template: ceil(n/2) skills in
/// the first column.
pub fn split_columns(skills: &[&str]) -> (Vec<String>, Vec<String>) {
    let midpoint = skills.len().div_ceil(2);
    let first = skills[..midpoint].iter().map(|s| s.to_string()).collect();
    let second = skills[midpoint..].iter().map(|s| s.to_string()).collect();
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks_and_trims() {
        let lines = split_lines("Built APIs\n\n  Cut latency  \n\t\nShipped");
        assert_eq!(lines, vec!["Built APIs", "Cut latency", "Shipped"]);
    }

    #[test]
    fn test_split_lines_empty_text_yields_nothing() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n \n").is_empty());
    }

    #[test]
    fn test_ats_bullet_passes_through_marked_lines() {
        assert_eq!(ats_bullet("-- already marked"), "-- already marked");
        assert_eq!(ats_bullet("• dot marked"), "• dot marked");
        assert_eq!(ats_bullet("- dash marked"), "- dash marked");
        assert_eq!(ats_bullet("plain line"), "-- plain line");
    }

    #[test]
    fn test_split_columns_ceil_in_first_column() {
        let (a, b) = split_columns(&["Python", "Go", "Rust", "TS", "C++"]);
        assert_eq!(a, vec!["Python", "Go", "Rust"]);
        assert_eq!(b, vec!["TS", "C++"]);
    }

    #[test]
    fn test_split_columns_degenerate_sizes() {
        let (a, b) = split_columns(&["Rust"]);
        assert_eq!(a, vec!["Rust"]);
        assert!(b.is_empty());
        let (a, b) = split_columns(&[]);
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn test_summary_gate_ignores_whitespace() {
        let mut doc = ResumeDocument::default();
        doc.summary = "   \n ".into();
        assert!(!section_is_shown(&doc, Section::Summary));
        doc.summary = "Something".into();
        assert!(section_is_shown(&doc, Section::Summary));
    }
}
