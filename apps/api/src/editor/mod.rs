//! Section editor: the stepped editing session over one document.
//!
//! The editor owns the working document and the active step; validation is
//! computed on demand from the document. Steps follow the fixed section
//! order; navigation clamps at both ends rather than wrapping.

use serde::Serialize;

use crate::document::{EditError, FieldEdit, ResumeDocument, Section, SECTION_ORDER};

/// A failed validation rule, addressed to a section and field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub section: Section,
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct SectionEditor {
    document: ResumeDocument,
    active: usize,
}

impl SectionEditor {
    pub fn new(document: ResumeDocument) -> Self {
        SectionEditor {
            document,
            active: 0,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn active_section(&self) -> Section {
        SECTION_ORDER[self.active]
    }

    pub fn step(&self) -> usize {
        self.active
    }

    pub fn step_count(&self) -> usize {
        SECTION_ORDER.len()
    }

    /// Advances to the next step. Clamped at the last section.
    pub fn go_next(&mut self) -> Section {
        if self.active + 1 < SECTION_ORDER.len() {
            self.active += 1;
        }
        self.active_section()
    }

    /// Steps back. Clamped at the first section.
    pub fn go_prev(&mut self) -> Section {
        self.active = self.active.saturating_sub(1);
        self.active_section()
    }

    /// Jumps directly to a section's step.
    pub fn go_to(&mut self, section: Section) {
        self.active = SECTION_ORDER
            .iter()
            .position(|s| *s == section)
            .unwrap_or(self.active);
    }

    /// Applies a batch of edits atomically: they run in order against a
    /// scratch document and commit only if every edit succeeds, so a failing
    /// batch leaves the working document exactly as it was.
    pub fn apply_all(&mut self, edits: &[FieldEdit]) -> Result<(), EditError> {
        let mut doc = self.document.clone();
        for edit in edits {
            doc = edit.apply(&doc)?;
        }
        self.document = doc;
        Ok(())
    }

    /// Rules that gate the explicit save: a resume must carry a name and an
    /// email address. Everything else may stay blank.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.document.personal.full_name.trim().is_empty() {
            errors.push(ValidationError {
                section: Section::Personal,
                field: "fullName",
                message: "Full name is required",
            });
        }
        if self.document.personal.email.trim().is_empty() {
            errors.push(ValidationError {
                section: Section::Personal,
                field: "email",
                message: "Email is required",
            });
        }
        errors
    }
}
