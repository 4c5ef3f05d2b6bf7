use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::photo::Photo;
use crate::templates::TemplateType;

/// Photo/card framing treatment. Affects only the photo frame in renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Square,
    Circle,
    Squircle,
}

/// A single work-experience entry. Every field is independently optional;
/// partial entries persist as-is. Dates are ISO date strings; an absent
/// `end_date` means the position is ongoing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub major: Option<String>,
    pub school: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The canonical in-memory representation of a resume.
///
/// All string fields follow optional-string semantics: a present value is a
/// non-empty trimmed string, anything else is `None`. Collection order is
/// user-controlled and meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Absent while the draft has never been saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    pub title: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub photo: Photo,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    pub summary: Option<String>,
    pub short_term_goals: Option<String>,
    pub long_term_goals: Option<String>,

    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,

    /// Primary accent color, `#rrggbb`. Each renderer falls back to its own
    /// default when absent.
    pub color_hex: Option<String>,
    #[serde(default)]
    pub border_style: BorderStyle,
    #[serde(default)]
    pub template_type: TemplateType,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            id: None,
            title: None,
            description: None,
            photo: Photo::Empty,
            first_name: None,
            last_name: None,
            job_title: None,
            city: None,
            country: None,
            phone: None,
            email: None,
            summary: None,
            short_term_goals: None,
            long_term_goals: None,
            work_experiences: Vec::new(),
            educations: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            hobbies: Vec::new(),
            color_hex: None,
            border_style: BorderStyle::default(),
            template_type: TemplateType::default(),
        }
    }
}

impl ResumeDocument {
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (None, None) => None,
            (first, last) => Some(
                [first.as_deref(), last.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

/// Trims every entry, drops empties, and removes duplicates while keeping the
/// first occurrence of each skill. Case-sensitive; idempotent.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if skill.is_empty() || seen.iter().any(|s| s == skill) {
            continue;
        }
        seen.push(skill.to_string());
    }
    seen
}

/// Appends generated skills that are not already present, then normalizes.
/// Existing skills keep their user-specified ordering.
pub fn merge_skills(existing: &[String], generated: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = existing.to_vec();
    merged.extend(generated.iter().cloned());
    normalize_skills(&merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skills_trims_and_drops_empty() {
        let skills = vec![
            "  JavaScript ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "React.js".to_string(),
        ];
        assert_eq!(
            normalize_skills(&skills),
            vec!["JavaScript".to_string(), "React.js".to_string()]
        );
    }

    #[test]
    fn test_normalize_skills_dedupes_keeping_first() {
        let skills = vec![
            "Node.js".to_string(),
            "React.js".to_string(),
            "Node.js".to_string(),
        ];
        assert_eq!(
            normalize_skills(&skills),
            vec!["Node.js".to_string(), "React.js".to_string()]
        );
    }

    #[test]
    fn test_normalize_skills_is_case_sensitive() {
        let skills = vec!["javascript".to_string(), "JavaScript".to_string()];
        assert_eq!(normalize_skills(&skills).len(), 2);
    }

    #[test]
    fn test_normalize_skills_is_idempotent() {
        let skills = vec![
            " HTML".to_string(),
            "CSS".to_string(),
            "HTML".to_string(),
            " ".to_string(),
        ];
        let once = normalize_skills(&skills);
        let twice = normalize_skills(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_skills_dedupes_against_existing() {
        let existing = vec!["HTML".to_string(), "CSS".to_string()];
        let generated = vec![
            "JavaScript".to_string(),
            "React.js".to_string(),
            "React.js".to_string(),
            "CSS".to_string(),
        ];
        assert_eq!(
            merge_skills(&existing, &generated),
            vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "React.js".to_string(),
            ]
        );
    }

    #[test]
    fn test_full_name_joins_present_parts() {
        let mut doc = ResumeDocument::default();
        assert_eq!(doc.full_name(), None);
        doc.first_name = Some("Nguyễn".to_string());
        assert_eq!(doc.full_name().as_deref(), Some("Nguyễn"));
        doc.last_name = Some("Văn A".to_string());
        assert_eq!(doc.full_name().as_deref(), Some("Nguyễn Văn A"));
    }

    #[test]
    fn test_document_json_round_trip_preserves_all_fields() {
        let doc = ResumeDocument {
            id: Some(Uuid::new_v4()),
            title: Some("CV Chuyên nghiệp".to_string()),
            description: Some("desc".to_string()),
            photo: Photo::Remote("https://blob.example.com/p.png".to_string()),
            first_name: Some("Nguyễn".to_string()),
            last_name: Some("Văn A".to_string()),
            job_title: Some("Kỹ sư phần mềm".to_string()),
            city: Some("Hà Nội".to_string()),
            country: Some("Việt Nam".to_string()),
            phone: Some("0123456789".to_string()),
            email: Some("example@email.com".to_string()),
            summary: Some("summary".to_string()),
            short_term_goals: Some("short".to_string()),
            long_term_goals: Some("long".to_string()),
            work_experiences: vec![WorkExperience {
                position: Some("Senior Frontend Developer".to_string()),
                company: Some("Tech Company X".to_string()),
                start_date: Some("2021-01-01".to_string()),
                end_date: None,
                description: Some("bullet".to_string()),
            }],
            educations: vec![Education {
                degree: Some("Kỹ sư CNTT".to_string()),
                major: None,
                school: Some("Đại học Bách Khoa Hà Nội".to_string()),
                start_date: Some("2014-09-01".to_string()),
                end_date: Some("2018-05-31".to_string()),
            }],
            skills: vec!["HTML".to_string(), "CSS".to_string()],
            projects: vec![Project {
                name: Some("CV builder".to_string()),
                role: Some("Lead".to_string()),
                start_date: None,
                end_date: None,
                description: None,
                tech_stack: vec!["Rust".to_string()],
            }],
            hobbies: vec![Hobby {
                name: Some("Đọc sách".to_string()),
                description: None,
            }],
            color_hex: Some("#7c3aed".to_string()),
            border_style: BorderStyle::Squircle,
            template_type: TemplateType::Template1,
        };

        let json = serde_json::to_value(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
