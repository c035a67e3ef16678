//! Print renderer: produces the paginated plain-text document used for
//! export. Independent of the preview renderer by design — the parity tests
//! in the parent module are what keep the two in agreement.

use crate::document::{ResumeDocument, Section};
use crate::render::content::{
    self, ats_bullet, pro_bullet, split_columns, split_lines, RenderedSection, Template,
};

const PAGE_WIDTH: usize = 80;
const LINES_PER_PAGE: usize = 54;

/// Printable output: rendered sections plus the laid-out pages.
#[derive(Debug)]
pub struct Printable {
    pub template: Template,
    pub sections: Vec<RenderedSection>,
    pub pages: Vec<String>,
}

impl Printable {
    pub fn sections_shown(&self) -> Vec<Section> {
        self.sections.iter().map(|s| s.section).collect()
    }

    /// The whole document as one string, pages separated by form feeds.
    pub fn to_text(&self) -> String {
        self.pages.join("\u{c}")
    }
}

pub fn render_printable(doc: &ResumeDocument, template: Template) -> Printable {
    let order = match template {
        Template::Ats => [
            Section::Personal,
            Section::Summary,
            Section::Education,
            Section::Skills,
            Section::Projects,
            Section::Experience,
            Section::Achievements,
            Section::Extracurricular,
        ],
        Template::Professional => [
            Section::Personal,
            Section::Summary,
            Section::Skills,
            Section::Experience,
            Section::Education,
            Section::Projects,
            Section::Achievements,
            Section::Extracurricular,
        ],
    };
    let sections: Vec<RenderedSection> = order
        .iter()
        .filter(|s| content::section_is_shown(doc, **s))
        .map(|s| match template {
            Template::Ats => build_ats(doc, *s),
            Template::Professional => build_professional(doc, *s),
        })
        .collect();

    let lines = lay_out(&sections, template);
    let pages = paginate(lines);

    Printable {
        template,
        sections,
        pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section builders
// ────────────────────────────────────────────────────────────────────────────

fn build_ats(doc: &ResumeDocument, section: Section) -> RenderedSection {
    let mut units = Vec::new();
    let heading = match section {
        Section::Personal => {
            let p = &doc.personal;
            units.push(if p.full_name.trim().is_empty() {
                "YOUR NAME".to_string()
            } else {
                p.full_name.to_uppercase()
            });
            let contact: Vec<&str> = [&p.phone, &p.email, &p.linkedin, &p.leetcode]
                .into_iter()
                .filter(|f| !f.is_empty())
                .map(String::as_str)
                .collect();
            if !contact.is_empty() {
                units.push(contact.join(" | "));
            }
            if !p.address.is_empty() {
                units.push(p.address.clone());
            }
            String::new()
        }
        Section::Summary => {
            units.push(doc.summary.trim().to_string());
            "SUMMARY".to_string()
        }
        Section::Education => {
            for edu in doc.education.iter().filter(|e| e.is_filled()) {
                units.push(two_sided(
                    &format!("{} in {}", edu.degree, edu.department),
                    &edu.year,
                ));
                let mut line = edu.institution.clone();
                if !edu.cgpa.is_empty() {
                    line.push_str(&format!(" | CGPA: {}/10", edu.cgpa));
                }
                units.push(line);
            }
            "EDUCATION".to_string()
        }
        Section::Skills => {
            units.push(doc.filled_skills().join(", "));
            "SKILLS".to_string()
        }
        Section::Projects => {
            for proj in doc.projects.iter().filter(|p| p.is_filled()) {
                units.push(proj.title.clone());
                if !proj.technologies.is_empty() {
                    units.push(proj.technologies.clone());
                }
                for line in split_lines(&proj.description) {
                    units.push(ats_bullet(&line));
                }
                if !proj.link.is_empty() {
                    units.push(format!("Link: {}", proj.link));
                }
            }
            "PROJECTS".to_string()
        }
        Section::Experience => {
            for exp in doc.experience.iter().filter(|e| e.is_filled()) {
                units.push(two_sided(
                    &format!("{} at {}", exp.job_title, exp.company),
                    &exp.duration,
                ));
                for line in split_lines(&exp.description) {
                    units.push(ats_bullet(&line));
                }
            }
            "EXPERIENCE".to_string()
        }
        Section::Achievements => {
            for cert in doc.achievements.iter().filter(|a| a.is_filled()) {
                let mut line = cert.title.clone();
                if !cert.description.is_empty() {
                    line.push_str(&format!(" - {}", cert.description));
                }
                if !cert.date.is_empty() {
                    line.push_str(&format!(" ({})", cert.date));
                }
                units.push(line);
            }
            "CERTIFICATES".to_string()
        }
        Section::Extracurricular => {
            for act in doc.extracurricular.iter().filter(|e| e.is_filled()) {
                let mut line = format!("{} at {}", act.role, act.organization);
                if !act.duration.is_empty() {
                    line.push_str(&format!(" ({})", act.duration));
                }
                units.push(line);
                for desc in split_lines(&act.description) {
                    units.push(ats_bullet(&desc));
                }
            }
            "ACTIVITIES AND HONORS".to_string()
        }
    };
    RenderedSection {
        section,
        heading,
        units,
    }
}

fn build_professional(doc: &ResumeDocument, section: Section) -> RenderedSection {
    let mut units = Vec::new();
    let heading = match section {
        Section::Personal => {
            let p = &doc.personal;
            let fallback = |v: &str, d: &str| {
                if v.trim().is_empty() {
                    d.to_string()
                } else {
                    v.to_string()
                }
            };
            units.push(fallback(&p.full_name, "YOUR NAME"));
            units.push(fallback(&p.address, "Your Location"));
            units.push(fallback(&p.phone, "Your Phone"));
            units.push(fallback(&p.email, "Your Email"));
            for link in [&p.linkedin, &p.github, &p.leetcode] {
                if !link.is_empty() {
                    units.push(link.clone());
                }
            }
            String::new()
        }
        Section::Summary => {
            units.push(doc.summary.trim().to_string());
            "SUMMARY".to_string()
        }
        Section::Skills => {
            units.extend(doc.filled_skills().iter().map(|s| s.to_string()));
            "SKILLS".to_string()
        }
        Section::Experience => {
            for exp in doc.experience.iter().filter(|e| e.is_filled()) {
                units.push(format!("{} at {}", exp.job_title, exp.company));
                if !exp.duration.is_empty() {
                    units.push(exp.duration.clone());
                }
                for line in split_lines(&exp.description) {
                    units.push(pro_bullet(&line));
                }
            }
            "EXPERIENCE".to_string()
        }
        Section::Education => {
            for edu in doc.education.iter().filter(|e| e.is_filled()) {
                let mut line = edu.institution.clone();
                if !edu.year.is_empty() {
                    line.push_str(&format!(", Expected in {}", edu.year));
                }
                units.push(line);
                let mut detail = format!("{}: {}", edu.degree, edu.department);
                if !edu.cgpa.is_empty() {
                    detail.push_str(&format!(" (CGPA: {})", edu.cgpa));
                }
                units.push(detail);
            }
            "EDUCATION AND TRAINING".to_string()
        }
        Section::Projects => {
            for proj in doc.projects.iter().filter(|p| p.is_filled()) {
                let mut line = format!("• {}", proj.title);
                if !proj.technologies.is_empty() {
                    line.push_str(&format!(" [{}]", proj.technologies));
                }
                units.push(line);
                units.extend(split_lines(&proj.description));
                if !proj.link.is_empty() {
                    units.push(format!("Link: {}", proj.link));
                }
            }
            "PROJECTS".to_string()
        }
        Section::Achievements => {
            for cert in doc.achievements.iter().filter(|a| a.is_filled()) {
                let mut line = format!("• {}", cert.title);
                if !cert.date.is_empty() {
                    line.push_str(&format!(" ({})", cert.date));
                }
                units.push(line);
                units.extend(split_lines(&cert.description));
            }
            "CERTIFICATIONS".to_string()
        }
        Section::Extracurricular => {
            for act in doc.extracurricular.iter().filter(|e| e.is_filled()) {
                let mut line = format!("• {} at {}", act.role, act.organization);
                if !act.duration.is_empty() {
                    line.push_str(&format!(" ({})", act.duration));
                }
                units.push(line);
                units.extend(split_lines(&act.description));
            }
            "ACTIVITIES AND HONORS".to_string()
        }
    };
    RenderedSection {
        section,
        heading,
        units,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Pads a left and right fragment to opposite edges of the page.
fn two_sided(left: &str, right: &str) -> String {
    if right.is_empty() {
        return left.to_string();
    }
    let used = left.chars().count() + right.chars().count();
    if used + 2 > PAGE_WIDTH {
        return format!("{left} ({right})");
    }
    let gap = PAGE_WIDTH - used;
    format!("{left}{}{right}", " ".repeat(gap))
}

fn centered(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn lay_out(sections: &[RenderedSection], template: Template) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        match section.section {
            Section::Personal => {
                match template {
                    Template::Ats => {
                        for unit in &section.units {
                            lines.push(centered(unit));
                        }
                        lines.push("=".repeat(PAGE_WIDTH));
                    }
                    Template::Professional => {
                        lines.extend(section.units.iter().cloned());
                    }
                }
                lines.push(String::new());
            }
            Section::Skills if template == Template::Professional => {
                lines.push(section.heading.clone());
                lines.push("-".repeat(section.heading.chars().count()));
                // Two columns on the page; unit count is still one per skill.
                let skills: Vec<&str> = section.units.iter().map(String::as_str).collect();
                let (left, right) = split_columns(&skills);
                let col_width = PAGE_WIDTH / 2;
                for i in 0..left.len() {
                    let l = format!("• {}", left[i]);
                    match right.get(i) {
                        Some(r) => lines.push(format!("{l:<col_width$}• {r}")),
                        None => lines.push(l),
                    }
                }
                lines.push(String::new());
            }
            _ => {
                lines.push(section.heading.clone());
                lines.push("-".repeat(section.heading.chars().count().max(1)));
                lines.extend(section.units.iter().cloned());
                lines.push(String::new());
            }
        }
    }
    lines
}

fn paginate(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        return vec![String::new()];
    }
    lines
        .chunks(LINES_PER_PAGE)
        .map(|chunk| chunk.join("\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ats_header_is_uppercased_and_centered() {
        let mut doc = ResumeDocument::default();
        doc.personal.full_name = "Jane Doe".into();
        let printable = render_printable(&doc, Template::Ats);
        let first_line = printable.pages[0].lines().next().unwrap();
        assert!(first_line.contains("JANE DOE"));
        assert!(first_line.starts_with(' '));
    }

    #[test]
    fn test_professional_skills_paired_per_page_line() {
        let mut doc = ResumeDocument::default();
        doc.skills = vec!["Python".into(), "Go".into(), "Rust".into()];
        let printable = render_printable(&doc, Template::Professional);
        let text = printable.to_text();
        // ceil(3/2) = 2 in the first column, so "Python" pairs with "Rust".
        let paired = text
            .lines()
            .find(|l| l.contains("Python"))
            .unwrap();
        assert!(paired.contains("Rust"));
        assert!(!paired.contains("Go"));
    }

    #[test]
    fn test_unit_text_carries_duration_right_aligned() {
        let mut doc = ResumeDocument::default();
        doc.experience[0].job_title = "Intern".into();
        doc.experience[0].company = "Acme".into();
        doc.experience[0].duration = "2023".into();
        let printable = render_printable(&doc, Template::Ats);
        let exp = &printable.sections[1];
        assert_eq!(exp.section, Section::Experience);
        assert!(exp.units[0].starts_with("Intern at Acme"));
        assert!(exp.units[0].ends_with("2023"));
    }

    #[test]
    fn test_long_document_spills_to_second_page() {
        let mut doc = ResumeDocument::default();
        doc.experience[0].job_title = "Intern".into();
        doc.experience[0].company = "Acme".into();
        doc.experience[0].description = (0..80)
            .map(|i| format!("Line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let printable = render_printable(&doc, Template::Ats);
        assert!(printable.pages.len() >= 2);
    }

    #[test]
    fn test_blank_document_still_produces_one_page() {
        let printable = render_printable(&ResumeDocument::default(), Template::Professional);
        assert_eq!(printable.pages.len(), 1);
        assert!(printable.pages[0].contains("YOUR NAME"));
    }
}
