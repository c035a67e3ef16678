//! Interactive preview renderer: produces an HTML document for the live
//! split-pane view. Layout decisions live here; content decisions (gate,
//! line splitting, bullets, columns) come from [`content`].

use crate::document::{ResumeDocument, Section};
use crate::render::content::{
    self, ats_bullet, pro_bullet, split_columns, split_lines, RenderedSection, Template,
};

/// Preview output: the rendered sections plus the assembled HTML.
#[derive(Debug)]
pub struct Preview {
    pub template: Template,
    pub sections: Vec<RenderedSection>,
    pub html: String,
}

impl Preview {
    pub fn sections_shown(&self) -> Vec<Section> {
        self.sections.iter().map(|s| s.section).collect()
    }
}

const ATS_ORDER: [Section; 8] = [
    Section::Personal,
    Section::Summary,
    Section::Education,
    Section::Skills,
    Section::Projects,
    Section::Experience,
    Section::Achievements,
    Section::Extracurricular,
];

const PRO_ORDER: [Section; 8] = [
    Section::Personal,
    Section::Summary,
    Section::Skills,
    Section::Experience,
    Section::Education,
    Section::Projects,
    Section::Achievements,
    Section::Extracurricular,
];

pub fn render_preview(doc: &ResumeDocument, template: Template) -> Preview {
    let order = match template {
        Template::Ats => ATS_ORDER,
        Template::Professional => PRO_ORDER,
    };
    let sections: Vec<RenderedSection> = order
        .iter()
        .filter(|s| content::section_is_shown(doc, **s))
        .map(|s| build_section(doc, *s, template))
        .collect();

    let mut html = String::from("<article class=\"resume-preview\">\n");
    for section in &sections {
        if section.section == Section::Personal {
            let mut units = section.units.iter();
            if let Some(name) = units.next() {
                html.push_str(&format!("<h1>{}</h1>\n", escape(name)));
            }
            for unit in units {
                html.push_str(&format!("<p class=\"contact\">{}</p>\n", escape(unit)));
            }
            continue;
        }
        html.push_str(&format!("<h2>{}</h2>\n", escape(&section.heading)));
        match (section.section, template) {
            (Section::Skills, Template::Professional) => {
                // Two-column layout: ceil(n/2) in the left column.
                let skills: Vec<&str> = section.units.iter().map(String::as_str).collect();
                let (left, right) = split_columns(&skills);
                for column in [left, right] {
                    html.push_str("<ul class=\"skills-column\">\n");
                    for skill in column {
                        html.push_str(&format!("<li>{}</li>\n", escape(&pro_bullet(&skill))));
                    }
                    html.push_str("</ul>\n");
                }
            }
            _ => {
                for unit in &section.units {
                    html.push_str(&format!("<p>{}</p>\n", escape(unit)));
                }
            }
        }
    }
    html.push_str("</article>\n");

    Preview {
        template,
        sections,
        html,
    }
}

fn build_section(doc: &ResumeDocument, section: Section, template: Template) -> RenderedSection {
    match template {
        Template::Ats => build_ats(doc, section),
        Template::Professional => build_professional(doc, section),
    }
}

fn build_ats(doc: &ResumeDocument, section: Section) -> RenderedSection {
    let mut units = Vec::new();
    let heading = match section {
        Section::Personal => {
            let p = &doc.personal;
            units.push(or_placeholder(&p.full_name, "YOUR NAME"));
            let contact = join_present(&[&p.phone, &p.email, &p.linkedin, &p.leetcode]);
            if !contact.is_empty() {
                units.push(contact);
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
                let mut header = format!("{} in {}", edu.degree, edu.department);
                if !edu.year.is_empty() {
                    header.push_str(&format!(" ({})", edu.year));
                }
                units.push(header);
                let mut inst = edu.institution.clone();
                if !edu.cgpa.is_empty() {
                    inst.push_str(&format!(" | CGPA: {}/10", edu.cgpa));
                }
                units.push(inst);
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
                let mut header = format!("{} at {}", exp.job_title, exp.company);
                if !exp.duration.is_empty() {
                    header.push_str(&format!(" ({})", exp.duration));
                }
                units.push(header);
                for line in split_lines(&exp.description) {
                    units.push(ats_bullet(&line));
                }
            }
            "EXPERIENCE".to_string()
        }
        Section::Achievements => {
            for cert in doc.achievements.iter().filter(|a| a.is_filled()) {
                let mut unit = cert.title.clone();
                if !cert.description.is_empty() {
                    unit.push_str(&format!(" - {}", cert.description));
                }
                if !cert.date.is_empty() {
                    unit.push_str(&format!(" ({})", cert.date));
                }
                units.push(unit);
            }
            "CERTIFICATES".to_string()
        }
        Section::Extracurricular => {
            for act in doc.extracurricular.iter().filter(|e| e.is_filled()) {
                let mut header = format!("{} at {}", act.role, act.organization);
                if !act.duration.is_empty() {
                    header.push_str(&format!(" ({})", act.duration));
                }
                units.push(header);
                for line in split_lines(&act.description) {
                    units.push(ats_bullet(&line));
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
            units.push(or_placeholder(&p.full_name, "YOUR NAME"));
            units.push(or_placeholder(&p.address, "Your Location"));
            units.push(or_placeholder(&p.phone, "Your Phone"));
            units.push(or_placeholder(&p.email, "Your Email"));
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
                let mut header = edu.institution.clone();
                if !edu.year.is_empty() {
                    header.push_str(&format!(", Expected in {}", edu.year));
                }
                units.push(header);
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
                let mut header = format!("• {}", proj.title);
                if !proj.technologies.is_empty() {
                    header.push_str(&format!(" [{}]", proj.technologies));
                }
                units.push(header);
                units.extend(split_lines(&proj.description));
                if !proj.link.is_empty() {
                    units.push(format!("Link: {}", proj.link));
                }
            }
            "PROJECTS".to_string()
        }
        Section::Achievements => {
            for cert in doc.achievements.iter().filter(|a| a.is_filled()) {
                let mut header = format!("• {}", cert.title);
                if !cert.date.is_empty() {
                    header.push_str(&format!(" ({})", cert.date));
                }
                units.push(header);
                units.extend(split_lines(&cert.description));
            }
            "CERTIFICATIONS".to_string()
        }
        Section::Extracurricular => {
            for act in doc.extracurricular.iter().filter(|e| e.is_filled()) {
                let mut header = format!("• {} at {}", act.role, act.organization);
                if !act.duration.is_empty() {
                    header.push_str(&format!(" ({})", act.duration));
                }
                units.push(header);
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

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn join_present(fields: &[&String]) -> String {
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_skills_split_into_columns() {
        let mut doc = ResumeDocument::default();
        doc.skills = vec![
            "Python".into(),
            "Go".into(),
            "Rust".into(),
            "TS".into(),
            "C++".into(),
        ];
        let preview = render_preview(&doc, Template::Professional);
        let skills = preview
            .sections
            .iter()
            .find(|s| s.section == Section::Skills)
            .unwrap();
        assert_eq!(skills.units.len(), 5);
        // Column break after ceil(5/2) = 3 entries.
        let first_col = preview.html.split("</ul>").next().unwrap();
        assert!(first_col.contains("Rust"));
        assert!(!first_col.contains("TS"));
    }

    #[test]
    fn test_ats_description_lines_are_bulleted_once() {
        let mut doc = ResumeDocument::default();
        doc.experience[0].job_title = "Intern".into();
        doc.experience[0].company = "Acme".into();
        doc.experience[0].description = "Built APIs\n-- Already bulleted".into();
        let preview = render_preview(&doc, Template::Ats);
        let exp = preview
            .sections
            .iter()
            .find(|s| s.section == Section::Experience)
            .unwrap();
        assert_eq!(exp.units[1], "-- Built APIs");
        assert_eq!(exp.units[2], "-- Already bulleted");
    }

    #[test]
    fn test_blank_document_shows_personal_only() {
        let preview = render_preview(&ResumeDocument::default(), Template::Ats);
        assert_eq!(preview.sections_shown(), vec![Section::Personal]);
        assert!(preview.html.contains("YOUR NAME"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut doc = ResumeDocument::default();
        doc.personal.full_name = "Jane <script>".into();
        let preview = render_preview(&doc, Template::Professional);
        assert!(preview.html.contains("Jane &lt;script&gt;"));
        assert!(!preview.html.contains("<script>"));
    }
}
