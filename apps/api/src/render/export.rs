//! Download artifact assembly for the printable rendering.

use crate::document::ResumeDocument;
use crate::render::content::Template;
use crate::render::printable::render_printable;

/// A finished download: deterministic filename plus the body bytes.
#[derive(Debug)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export_document(
    doc: &ResumeDocument,
    template: Template,
    display_name: &str,
) -> ExportArtifact {
    let printable = render_printable(doc, template);
    ExportArtifact {
        filename: export_filename(display_name),
        content_type: "text/plain; charset=utf-8",
        bytes: printable.to_text().into_bytes(),
    }
}

/// `TalentMap_Resume_<name>` with whitespace runs collapsed to underscores.
pub fn export_filename(display_name: &str) -> String {
    let trimmed = display_name.trim();
    let name = if trimmed.is_empty() { "Student" } else { trimmed };
    let safe = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("TalentMap_Resume_{safe}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_underscores_spaces() {
        assert_eq!(
            export_filename("Jane  Mary Doe"),
            "TalentMap_Resume_Jane_Mary_Doe.txt"
        );
    }

    #[test]
    fn test_filename_falls_back_for_blank_name() {
        assert_eq!(export_filename("   "), "TalentMap_Resume_Student.txt");
    }

    #[test]
    fn test_export_carries_printable_body() {
        let mut doc = ResumeDocument::default();
        doc.personal.full_name = "Jane Doe".into();
        doc.summary = "Backend engineer.".into();
        let artifact = export_document(&doc, Template::Ats, &doc.personal.full_name);
        let body = String::from_utf8(artifact.bytes).unwrap();
        assert!(body.contains("JANE DOE"));
        assert!(body.contains("SUMMARY"));
        assert_eq!(artifact.filename, "TalentMap_Resume_Jane_Doe.txt");
    }
}
