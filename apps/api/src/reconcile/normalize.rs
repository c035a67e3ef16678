//! Normalization of loosely-typed source sections into canonical records.
//!
//! External producers store section arrays either as structured objects or as
//! legacy descriptive strings (older extraction runs). Everything is coerced
//! into the fixed record shapes here; a string that matches no pattern lands
//! whole in the record's `description` field, never dropped.

use serde_json::Value;

use crate::document::{
    AchievementEntry, EducationEntry, ExperienceEntry, ExtracurricularEntry, ProjectEntry,
};

/// Baseline values used to fill education fields the source omits.
#[derive(Debug, Default, Clone)]
pub struct EducationDefaults {
    pub institution: String,
    pub department: String,
    pub cgpa: String,
}

fn str_field(obj: &Value, keys: &[&str]) -> String {
    for key in keys {
        if let Some(s) = obj.get(*key).and_then(|v| v.as_str()) {
            if !s.is_empty() {
                return s.to_string();
            }
        }
    }
    String::new()
}

fn entries(raw: &Value) -> &[Value] {
    raw.as_array().map(Vec::as_slice).unwrap_or(&[])
}

pub fn skill_list(raw: &Value) -> Vec<String> {
    entries(raw)
        .iter()
        .filter_map(|v| v.as_str())
        .map(str::to_string)
        .collect()
}

pub fn education_entries(raw: &Value, defaults: &EducationDefaults) -> Vec<EducationEntry> {
    entries(raw)
        .iter()
        .map(|v| {
            let mut entry = EducationEntry {
                degree: str_field(v, &["degree"]),
                institution: str_field(v, &["institution"]),
                department: str_field(v, &["department"]),
                year: str_field(v, &["year"]),
                cgpa: str_field(v, &["cgpa"]),
            };
            if entry.institution.is_empty() {
                entry.institution = defaults.institution.clone();
            }
            if entry.department.is_empty() {
                entry.department = defaults.department.clone();
            }
            if entry.cgpa.is_empty() {
                entry.cgpa = defaults.cgpa.clone();
            }
            entry
        })
        .collect()
}

pub fn experience_entries(raw: &Value) -> Vec<ExperienceEntry> {
    entries(raw)
        .iter()
        .map(|v| match v.as_str() {
            Some(line) => parse_experience_line(line),
            None => ExperienceEntry {
                job_title: str_field(v, &["jobTitle", "position"]),
                company: str_field(v, &["company"]),
                duration: str_field(v, &["duration"]),
                description: str_field(v, &["description"]),
            },
        })
        .collect()
}

pub fn project_entries(raw: &Value) -> Vec<ProjectEntry> {
    entries(raw)
        .iter()
        .map(|v| match v.as_str() {
            Some(line) => parse_project_line(line),
            None => ProjectEntry {
                title: str_field(v, &["title"]),
                description: str_field(v, &["description"]),
                technologies: str_field(v, &["technologies"]),
                link: str_field(v, &["link"]),
            },
        })
        .collect()
}

pub fn achievement_entries(raw: &Value) -> Vec<AchievementEntry> {
    entries(raw)
        .iter()
        .map(|v| AchievementEntry {
            title: str_field(v, &["title", "name"]),
            description: str_field(v, &["description"]),
            date: str_field(v, &["date"]),
        })
        .collect()
}

pub fn extracurricular_entries(raw: &Value) -> Vec<ExtracurricularEntry> {
    entries(raw)
        .iter()
        .map(|v| ExtracurricularEntry {
            role: str_field(v, &["role"]),
            organization: str_field(v, &["organization"]),
            duration: str_field(v, &["duration"]),
            description: str_field(v, &["description"]),
        })
        .collect()
}

/// Decomposes `"<title> at <company> (<duration>): <description>"`.
/// The duration group is optional; a non-matching line becomes a record with
/// only `description` set.
fn parse_experience_line(line: &str) -> ExperienceEntry {
    try_split_experience(line).unwrap_or_else(|| ExperienceEntry {
        description: line.to_string(),
        ..Default::default()
    })
}

fn try_split_experience(line: &str) -> Option<ExperienceEntry> {
    let (head, description) = line.split_once(':')?;
    let description = description.trim();
    if description.is_empty() {
        return None;
    }
    let mut head = head.trim();
    let mut duration = String::new();
    if head.ends_with(')') {
        if let Some(open) = head.rfind('(') {
            duration = head[open + 1..head.len() - 1].trim().to_string();
            head = head[..open].trim_end();
        }
    }
    let (job_title, company) = head.split_once(" at ")?;
    let job_title = job_title.trim();
    let company = company.trim();
    if job_title.is_empty() || company.is_empty() {
        return None;
    }
    Some(ExperienceEntry {
        job_title: job_title.to_string(),
        company: company.to_string(),
        duration,
        description: description.to_string(),
    })
}

/// Decomposes `"<title>: <description> [<technologies>]"`. A non-matching line
/// keeps its first 50 characters as the title and the whole line as the
/// description.
fn parse_project_line(line: &str) -> ProjectEntry {
    try_split_project(line).unwrap_or_else(|| ProjectEntry {
        title: line.chars().take(50).collect(),
        description: line.to_string(),
        ..Default::default()
    })
}

fn try_split_project(line: &str) -> Option<ProjectEntry> {
    let (title, rest) = line.split_once(':')?;
    let title = title.trim();
    let mut description = rest.trim();
    if title.is_empty() || description.is_empty() {
        return None;
    }
    let mut technologies = String::new();
    if description.ends_with(']') {
        if let Some(open) = description.rfind('[') {
            technologies = description[open + 1..description.len() - 1].trim().to_string();
            description = description[..open].trim_end();
        }
    }
    Some(ProjectEntry {
        title: title.to_string(),
        description: description.to_string(),
        technologies,
        link: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_string_with_duration_decomposes() {
        let entry = parse_experience_line("Intern at Acme (Jun 2023-Aug 2023): Built APIs");
        assert_eq!(entry.job_title, "Intern");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.duration, "Jun 2023-Aug 2023");
        assert_eq!(entry.description, "Built APIs");
    }

    #[test]
    fn test_experience_string_without_duration_decomposes() {
        let entry = parse_experience_line("Software Engineer at ABC Company: Shipped things");
        assert_eq!(entry.job_title, "Software Engineer");
        assert_eq!(entry.company, "ABC Company");
        assert_eq!(entry.duration, "");
        assert_eq!(entry.description, "Shipped things");
    }

    #[test]
    fn test_unparseable_experience_string_kept_as_description() {
        let entry = parse_experience_line("Did various things over a summer");
        assert_eq!(entry.job_title, "");
        assert_eq!(entry.company, "");
        assert_eq!(entry.description, "Did various things over a summer");
    }

    #[test]
    fn test_experience_object_accepts_position_alias() {
        let raw = json!([{ "position": "SWE", "company": "Acme" }]);
        let entries = experience_entries(&raw);
        assert_eq!(entries[0].job_title, "SWE");
        assert_eq!(entries[0].company, "Acme");
    }

    #[test]
    fn test_project_string_with_technologies() {
        let entry = parse_project_line("Tracker: Expense tracking app [React, Rust]");
        assert_eq!(entry.title, "Tracker");
        assert_eq!(entry.description, "Expense tracking app");
        assert_eq!(entry.technologies, "React, Rust");
        assert_eq!(entry.link, "");
    }

    #[test]
    fn test_unparseable_project_string_truncates_title() {
        let long = "x".repeat(80);
        let entry = parse_project_line(&long);
        assert_eq!(entry.title.chars().count(), 50);
        assert_eq!(entry.description, long);
    }

    #[test]
    fn test_education_defaults_fill_missing_fields_only() {
        let raw = json!([{ "degree": "B.Tech", "institution": "MIT" }]);
        let defaults = EducationDefaults {
            institution: "State College".into(),
            department: "CSE".into(),
            cgpa: "8.4".into(),
        };
        let entries = education_entries(&raw, &defaults);
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].department, "CSE");
        assert_eq!(entries[0].cgpa, "8.4");
    }

    #[test]
    fn test_achievement_accepts_name_alias() {
        let raw = json!([{ "name": "AWS Certified", "date": "2023" }]);
        let entries = achievement_entries(&raw);
        assert_eq!(entries[0].title, "AWS Certified");
        assert_eq!(entries[0].date, "2023");
    }

    #[test]
    fn test_non_array_source_yields_no_entries() {
        assert!(experience_entries(&json!("not an array")).is_empty());
        assert!(skill_list(&json!({"skills": []})).is_empty());
    }
}
