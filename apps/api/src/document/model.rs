use serde::{Deserialize, Serialize};

/// The eight top-level resume sections, in edit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Personal,
    Education,
    Skills,
    Experience,
    Projects,
    Achievements,
    Extracurricular,
    Summary,
}

/// Fixed section order for the step navigator.
pub const SECTION_ORDER: [Section; 8] = [
    Section::Personal,
    Section::Education,
    Section::Skills,
    Section::Experience,
    Section::Projects,
    Section::Achievements,
    Section::Extracurricular,
    Section::Summary,
];

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Extracurricular => "extracurricular",
            Section::Summary => "summary",
        }
    }
}

// Field names serialize camelCase so documents stay interchangeable with
// snapshots written by the web front end.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub department: String,
    pub year: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementEntry {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtracurricularEntry {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
}

impl EducationEntry {
    /// A record counts as filled once its primary key field (degree) is non-blank.
    pub fn is_filled(&self) -> bool {
        !self.degree.trim().is_empty()
    }
}

impl ExperienceEntry {
    pub fn is_filled(&self) -> bool {
        !self.job_title.trim().is_empty()
    }
}

impl ProjectEntry {
    pub fn is_filled(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl AchievementEntry {
    pub fn is_filled(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl ExtracurricularEntry {
    pub fn is_filled(&self) -> bool {
        !self.role.trim().is_empty()
    }
}

/// The aggregate resume document being edited.
///
/// Invariant: every record sequence (and `skills`) holds at least one element;
/// an empty section is represented by a single blank record so the editor
/// always has an entry to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub extracurricular: Vec<ExtracurricularEntry>,
    pub summary: String,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            personal: PersonalInfo::default(),
            education: vec![EducationEntry::default()],
            skills: vec![String::new()],
            experience: vec![ExperienceEntry::default()],
            projects: vec![ProjectEntry::default()],
            achievements: vec![AchievementEntry::default()],
            extracurricular: vec![ExtracurricularEntry::default()],
            summary: String::new(),
        }
    }
}

impl ResumeDocument {
    /// Restores the non-empty invariant on every sequence. Called after
    /// reconciliation and deserialization, where sources may supply empty arrays.
    pub fn ensure_padded(&mut self) {
        if self.education.is_empty() {
            self.education.push(EducationEntry::default());
        }
        if self.skills.is_empty() {
            self.skills.push(String::new());
        }
        if self.experience.is_empty() {
            self.experience.push(ExperienceEntry::default());
        }
        if self.projects.is_empty() {
            self.projects.push(ProjectEntry::default());
        }
        if self.achievements.is_empty() {
            self.achievements.push(AchievementEntry::default());
        }
        if self.extracurricular.is_empty() {
            self.extracurricular.push(ExtracurricularEntry::default());
        }
    }

    /// Non-blank skills, in order.
    pub fn filled_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
