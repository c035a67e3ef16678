//! The canonical in-memory resume document and its field-level edit operations.

mod model;
mod ops;

pub use model::{
    AchievementEntry, EducationEntry, ExperienceEntry, ExtracurricularEntry, PersonalInfo,
    ProjectEntry, ResumeDocument, Section, SECTION_ORDER,
};
pub use ops::{EditError, FieldEdit};
