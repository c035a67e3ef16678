//! Dual template renderer.
//!
//! Two independent render paths consume the same document: an interactive
//! HTML preview and a paginated print document. They share only the content
//! rules in [`content`] — the non-empty section gate, the line-splitting
//! rule, and the bullet/column conventions. Everything else is rendered
//! separately, and the parity tests at the bottom of this module are the
//! binding contract: for any document and template, both paths must show the
//! same sections with the same number of renderable units. A user must never
//! see a section in the preview that is missing from the exported document,
//! or the reverse.

pub mod content;
mod export;
mod preview;
mod printable;

pub use content::{RenderedSection, Template};
pub use export::{export_document, ExportArtifact};
pub use preview::{render_preview, Preview};
pub use printable::{render_printable, Printable};

#[cfg(test)]
mod parity_tests {
    use super::*;
    use crate::document::{ResumeDocument, Section};

    fn sample_document() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal.full_name = "Jane Doe".into();
        doc.personal.email = "jane@example.com".into();
        doc.personal.phone = "+1 555 0100".into();
        doc.summary = "Backend engineer with a storage focus.".into();
        doc.skills = vec![
            "Python".into(),
            "Go".into(),
            "Rust".into(),
            "TS".into(),
            "C++".into(),
        ];
        doc.education[0].degree = "B.Tech".into();
        doc.education[0].institution = "State College".into();
        doc.education[0].department = "CSE".into();
        doc.education[0].year = "2024".into();
        doc.experience[0].job_title = "Intern".into();
        doc.experience[0].company = "Acme".into();
        doc.experience[0].duration = "Jun 2023-Aug 2023".into();
        doc.experience[0].description =
            "Built APIs\n\n-- Cut latency in half\nOwned the deploy pipeline".into();
        doc.projects[0].title = "Tracker".into();
        doc.projects[0].description = "Expense tracker\nSynced across devices".into();
        doc.projects[0].technologies = "Rust, Postgres".into();
        doc.achievements[0].title = "AWS SAA".into();
        doc.achievements[0].date = "2023".into();
        doc.extracurricular[0].role = "Member".into();
        doc.extracurricular[0].organization = "Robotics Club".into();
        doc.extracurricular[0].description = "Organized meetups\nMentored juniors".into();
        doc
    }

    fn mostly_blank_document() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        // Records exist but their primary key fields are blank, so no content
        // section passes the gate.
        doc.education[0].institution = "State College".into();
        doc.experience[0].description = "orphaned description".into();
        doc
    }

    fn assert_parity(doc: &ResumeDocument, template: Template) {
        let preview = render_preview(doc, template);
        let printable = render_printable(doc, template);
        assert_eq!(
            preview.sections_shown(),
            printable.sections_shown(),
            "section gate disagreement for {template:?}"
        );
        for (p, q) in preview.sections.iter().zip(printable.sections.iter()) {
            assert_eq!(p.section, q.section);
            assert_eq!(
                p.units.len(),
                q.units.len(),
                "unit count disagreement in {:?} for {template:?}",
                p.section
            );
        }
    }

    #[test]
    fn test_preview_and_printable_agree_on_full_document() {
        for template in [Template::Professional, Template::Ats] {
            assert_parity(&sample_document(), template);
        }
    }

    #[test]
    fn test_preview_and_printable_agree_on_blank_document() {
        for template in [Template::Professional, Template::Ats] {
            assert_parity(&ResumeDocument::default(), template);
            assert_parity(&mostly_blank_document(), template);
        }
    }

    #[test]
    fn test_gated_sections_absent_from_both() {
        let doc = mostly_blank_document();
        let preview = render_preview(&doc, Template::Ats);
        let shown = preview.sections_shown();
        assert!(!shown.contains(&Section::Education));
        assert!(!shown.contains(&Section::Experience));
        assert!(shown.contains(&Section::Personal));
    }

    #[test]
    fn test_description_line_counts_match_across_renderers() {
        let doc = sample_document();
        // Experience description has three non-blank lines.
        for template in [Template::Professional, Template::Ats] {
            let preview = render_preview(&doc, template);
            let printable = render_printable(&doc, template);
            let pv = preview
                .sections
                .iter()
                .find(|s| s.section == Section::Experience)
                .unwrap();
            let pr = printable
                .sections
                .iter()
                .find(|s| s.section == Section::Experience)
                .unwrap();
            assert_eq!(pv.units.len(), pr.units.len());
            // header/duration units plus exactly 3 description lines
            assert!(pv.units.iter().filter(|u| u.contains("latency")).count() == 1);
        }
    }
}
