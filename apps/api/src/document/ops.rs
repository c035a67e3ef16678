//! Pure edit operations over [`ResumeDocument`].
//!
//! Every operation takes `&self` and returns a new document value; callers
//! never share a mutably-aliased document. Removing the last record of a
//! section re-inserts one blank record (non-empty invariant).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::model::{
    AchievementEntry, EducationEntry, ExperienceEntry, ExtracurricularEntry, ProjectEntry,
    ResumeDocument, Section,
};

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("section '{0}' does not hold records")]
    NotARecordSection(&'static str),

    #[error("unknown field '{field}' in section '{section}'")]
    UnknownField {
        section: &'static str,
        field: String,
    },

    #[error("index {index} out of range for section '{section}' (len {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

/// One edit operation, as accepted over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldEdit {
    SetPersonal { field: String, value: String },
    SetSummary { value: String },
    SetSkill { index: usize, value: String },
    AddSkill,
    RemoveSkill { index: usize },
    AddRecord { section: Section },
    RemoveRecord { section: Section, index: usize },
    SetRecordField {
        section: Section,
        index: usize,
        field: String,
        value: String,
    },
}

impl FieldEdit {
    pub fn apply(&self, doc: &ResumeDocument) -> Result<ResumeDocument, EditError> {
        match self {
            FieldEdit::SetPersonal { field, value } => doc.set_personal(field, value),
            FieldEdit::SetSummary { value } => Ok(doc.set_summary(value)),
            FieldEdit::SetSkill { index, value } => doc.set_skill(*index, value),
            FieldEdit::AddSkill => Ok(doc.add_skill()),
            FieldEdit::RemoveSkill { index } => doc.remove_skill(*index),
            FieldEdit::AddRecord { section } => doc.add_record(*section),
            FieldEdit::RemoveRecord { section, index } => doc.remove_record(*section, *index),
            FieldEdit::SetRecordField {
                section,
                index,
                field,
                value,
            } => doc.set_record_field(*section, *index, field, value),
        }
    }
}

fn check_index(section: Section, index: usize, len: usize) -> Result<(), EditError> {
    if index >= len {
        return Err(EditError::IndexOutOfRange {
            section: section.as_str(),
            index,
            len,
        });
    }
    Ok(())
}

impl ResumeDocument {
    pub fn set_personal(&self, field: &str, value: &str) -> Result<ResumeDocument, EditError> {
        let mut next = self.clone();
        let slot = match field {
            "fullName" => &mut next.personal.full_name,
            "email" => &mut next.personal.email,
            "phone" => &mut next.personal.phone,
            "address" => &mut next.personal.address,
            "linkedin" => &mut next.personal.linkedin,
            "github" => &mut next.personal.github,
            "leetcode" => &mut next.personal.leetcode,
            _ => {
                return Err(EditError::UnknownField {
                    section: "personal",
                    field: field.to_string(),
                })
            }
        };
        *slot = value.to_string();
        Ok(next)
    }

    pub fn set_summary(&self, value: &str) -> ResumeDocument {
        let mut next = self.clone();
        next.summary = value.to_string();
        next
    }

    pub fn set_skill(&self, index: usize, value: &str) -> Result<ResumeDocument, EditError> {
        check_index(Section::Skills, index, self.skills.len())?;
        let mut next = self.clone();
        next.skills[index] = value.to_string();
        Ok(next)
    }

    pub fn add_skill(&self) -> ResumeDocument {
        let mut next = self.clone();
        next.skills.push(String::new());
        next
    }

    pub fn remove_skill(&self, index: usize) -> Result<ResumeDocument, EditError> {
        check_index(Section::Skills, index, self.skills.len())?;
        let mut next = self.clone();
        next.skills.remove(index);
        if next.skills.is_empty() {
            next.skills.push(String::new());
        }
        Ok(next)
    }

    /// Appends one blank record to a record-holding section.
    pub fn add_record(&self, section: Section) -> Result<ResumeDocument, EditError> {
        let mut next = self.clone();
        match section {
            Section::Education => next.education.push(EducationEntry::default()),
            Section::Experience => next.experience.push(ExperienceEntry::default()),
            Section::Projects => next.projects.push(ProjectEntry::default()),
            Section::Achievements => next.achievements.push(AchievementEntry::default()),
            Section::Extracurricular => next.extracurricular.push(ExtracurricularEntry::default()),
            other => return Err(EditError::NotARecordSection(other.as_str())),
        }
        Ok(next)
    }

    /// Removes a record; an emptied section gets one blank record back.
    pub fn remove_record(&self, section: Section, index: usize) -> Result<ResumeDocument, EditError> {
        let mut next = self.clone();
        match section {
            Section::Education => {
                check_index(section, index, next.education.len())?;
                next.education.remove(index);
            }
            Section::Experience => {
                check_index(section, index, next.experience.len())?;
                next.experience.remove(index);
            }
            Section::Projects => {
                check_index(section, index, next.projects.len())?;
                next.projects.remove(index);
            }
            Section::Achievements => {
                check_index(section, index, next.achievements.len())?;
                next.achievements.remove(index);
            }
            Section::Extracurricular => {
                check_index(section, index, next.extracurricular.len())?;
                next.extracurricular.remove(index);
            }
            other => return Err(EditError::NotARecordSection(other.as_str())),
        }
        next.ensure_padded();
        Ok(next)
    }

    pub fn set_record_field(
        &self,
        section: Section,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<ResumeDocument, EditError> {
        let mut next = self.clone();
        let value = value.to_string();
        let unknown = |field: &str| EditError::UnknownField {
            section: section.as_str(),
            field: field.to_string(),
        };
        match section {
            Section::Education => {
                check_index(section, index, next.education.len())?;
                let rec = &mut next.education[index];
                match field {
                    "degree" => rec.degree = value,
                    "institution" => rec.institution = value,
                    "department" => rec.department = value,
                    "year" => rec.year = value,
                    "cgpa" => rec.cgpa = value,
                    _ => return Err(unknown(field)),
                }
            }
            Section::Experience => {
                check_index(section, index, next.experience.len())?;
                let rec = &mut next.experience[index];
                match field {
                    "jobTitle" => rec.job_title = value,
                    "company" => rec.company = value,
                    "duration" => rec.duration = value,
                    "description" => rec.description = value,
                    _ => return Err(unknown(field)),
                }
            }
            Section::Projects => {
                check_index(section, index, next.projects.len())?;
                let rec = &mut next.projects[index];
                match field {
                    "title" => rec.title = value,
                    "description" => rec.description = value,
                    "technologies" => rec.technologies = value,
                    "link" => rec.link = value,
                    _ => return Err(unknown(field)),
                }
            }
            Section::Achievements => {
                check_index(section, index, next.achievements.len())?;
                let rec = &mut next.achievements[index];
                match field {
                    "title" => rec.title = value,
                    "description" => rec.description = value,
                    "date" => rec.date = value,
                    _ => return Err(unknown(field)),
                }
            }
            Section::Extracurricular => {
                check_index(section, index, next.extracurricular.len())?;
                let rec = &mut next.extracurricular[index];
                match field {
                    "role" => rec.role = value,
                    "organization" => rec.organization = value,
                    "duration" => rec.duration = value,
                    "description" => rec.description = value,
                    _ => return Err(unknown(field)),
                }
            }
            other => return Err(EditError::NotARecordSection(other.as_str())),
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_personal_returns_new_document() {
        let doc = ResumeDocument::default();
        let next = doc.set_personal("fullName", "Jane Doe").unwrap();
        assert_eq!(next.personal.full_name, "Jane Doe");
        assert_eq!(doc.personal.full_name, "");
    }

    #[test]
    fn test_set_personal_unknown_field_fails() {
        let doc = ResumeDocument::default();
        let err = doc.set_personal("shoeSize", "42").unwrap_err();
        assert!(matches!(err, EditError::UnknownField { .. }));
    }

    #[test]
    fn test_add_record_on_non_record_section_fails() {
        let doc = ResumeDocument::default();
        assert_eq!(
            doc.add_record(Section::Summary).unwrap_err(),
            EditError::NotARecordSection("summary")
        );
        assert_eq!(
            doc.add_record(Section::Skills).unwrap_err(),
            EditError::NotARecordSection("skills")
        );
    }

    #[test]
    fn test_remove_last_record_leaves_one_blank() {
        let doc = ResumeDocument::default()
            .set_record_field(Section::Education, 0, "degree", "B.Tech")
            .unwrap();
        let next = doc.remove_record(Section::Education, 0).unwrap();
        assert_eq!(next.education.len(), 1);
        assert!(!next.education[0].is_filled());
    }

    #[test]
    fn test_remove_middle_record_keeps_order() {
        let doc = ResumeDocument::default()
            .set_record_field(Section::Projects, 0, "title", "First")
            .unwrap()
            .add_record(Section::Projects)
            .unwrap()
            .set_record_field(Section::Projects, 1, "title", "Second")
            .unwrap()
            .add_record(Section::Projects)
            .unwrap()
            .set_record_field(Section::Projects, 2, "title", "Third")
            .unwrap();
        let next = doc.remove_record(Section::Projects, 1).unwrap();
        assert_eq!(next.projects.len(), 2);
        assert_eq!(next.projects[0].title, "First");
        assert_eq!(next.projects[1].title, "Third");
    }

    #[test]
    fn test_remove_record_out_of_range_fails() {
        let doc = ResumeDocument::default();
        let err = doc.remove_record(Section::Experience, 3).unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { index: 3, .. }));
    }

    #[test]
    fn test_remove_last_skill_leaves_one_blank_slot() {
        let doc = ResumeDocument::default().set_skill(0, "Rust").unwrap();
        let next = doc.remove_skill(0).unwrap();
        assert_eq!(next.skills, vec![String::new()]);
    }

    #[test]
    fn test_field_edit_wire_format_applies() {
        let edit: FieldEdit = serde_json::from_str(
            r#"{"op": "set_record_field", "section": "experience", "index": 0,
                "field": "jobTitle", "value": "Intern"}"#,
        )
        .unwrap();
        let next = edit.apply(&ResumeDocument::default()).unwrap();
        assert_eq!(next.experience[0].job_title, "Intern");
    }

    #[test]
    fn test_field_edit_unknown_section_rejected_at_parse() {
        let parsed: Result<FieldEdit, _> =
            serde_json::from_str(r#"{"op": "add_record", "section": "hobbies"}"#);
        assert!(parsed.is_err());
    }
}
