use serde::Deserialize;

use crate::document::model::{
    normalize_skills, BorderStyle, Education, Hobby, Project, ResumeDocument, WorkExperience,
};
use crate::document::photo::Photo;
use crate::templates::TemplateType;

/// A typed partial update to a [`ResumeDocument`].
///
/// Each editor section submits only the fields it owns; fields absent from the
/// patch are left untouched and present fields overwrite (last-writer-wins,
/// no field-level conflict resolution). A present-but-empty string clears the
/// field, matching the optional-string convention. Collections replace
/// wholesale; entry order inside a patch is the order the user chose.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumePatch {
    pub title: Option<String>,
    pub description: Option<String>,

    /// `""` clears the photo; a URL points at an already-uploaded blob.
    /// Binary photo data never travels through a patch. It goes through the
    /// dedicated upload endpoint, which resolves it to a URL first.
    pub photo: Option<String>,
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

    pub work_experiences: Option<Vec<WorkExperience>>,
    pub educations: Option<Vec<Education>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub hobbies: Option<Vec<Hobby>>,

    pub color_hex: Option<String>,
    pub border_style: Option<BorderStyle>,
    pub template_type: Option<TemplateType>,
}

/// Normalizes a patched string: trimmed, empty means cleared.
fn apply_string(target: &mut Option<String>, patched: Option<&String>) {
    if let Some(value) = patched {
        let value = value.trim();
        *target = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

impl ResumePatch {
    /// Merges this patch into `doc`, field by field.
    pub fn apply(&self, doc: &mut ResumeDocument) {
        apply_string(&mut doc.title, self.title.as_ref());
        apply_string(&mut doc.description, self.description.as_ref());

        if let Some(photo) = &self.photo {
            let photo = photo.trim();
            doc.photo = if photo.is_empty() {
                Photo::Empty
            } else {
                Photo::Remote(photo.to_string())
            };
        }
        apply_string(&mut doc.first_name, self.first_name.as_ref());
        apply_string(&mut doc.last_name, self.last_name.as_ref());
        apply_string(&mut doc.job_title, self.job_title.as_ref());
        apply_string(&mut doc.city, self.city.as_ref());
        apply_string(&mut doc.country, self.country.as_ref());
        apply_string(&mut doc.phone, self.phone.as_ref());
        apply_string(&mut doc.email, self.email.as_ref());

        apply_string(&mut doc.summary, self.summary.as_ref());
        apply_string(&mut doc.short_term_goals, self.short_term_goals.as_ref());
        apply_string(&mut doc.long_term_goals, self.long_term_goals.as_ref());

        if let Some(entries) = &self.work_experiences {
            doc.work_experiences = entries.iter().map(normalize_work_experience).collect();
        }
        if let Some(entries) = &self.educations {
            doc.educations = entries.iter().map(normalize_education).collect();
        }
        if let Some(skills) = &self.skills {
            doc.skills = normalize_skills(skills);
        }
        if let Some(entries) = &self.projects {
            doc.projects = entries.iter().map(normalize_project).collect();
        }
        if let Some(entries) = &self.hobbies {
            doc.hobbies = entries.iter().map(normalize_hobby).collect();
        }

        apply_string(&mut doc.color_hex, self.color_hex.as_ref());
        if let Some(style) = self.border_style {
            doc.border_style = style;
        }
        if let Some(template) = self.template_type {
            doc.template_type = template;
        }
    }
}

fn opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn normalize_work_experience(entry: &WorkExperience) -> WorkExperience {
    WorkExperience {
        position: opt(&entry.position),
        company: opt(&entry.company),
        start_date: opt(&entry.start_date),
        end_date: opt(&entry.end_date),
        description: opt(&entry.description),
    }
}

fn normalize_education(entry: &Education) -> Education {
    Education {
        degree: opt(&entry.degree),
        major: opt(&entry.major),
        school: opt(&entry.school),
        start_date: opt(&entry.start_date),
        end_date: opt(&entry.end_date),
    }
}

fn normalize_project(entry: &Project) -> Project {
    Project {
        name: opt(&entry.name),
        role: opt(&entry.role),
        start_date: opt(&entry.start_date),
        end_date: opt(&entry.end_date),
        description: opt(&entry.description),
        tech_stack: normalize_skills(&entry.tech_stack),
    }
}

fn normalize_hobby(entry: &Hobby) -> Hobby {
    Hobby {
        name: opt(&entry.name),
        description: opt(&entry.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_doc() -> ResumeDocument {
        ResumeDocument {
            title: Some("CV của tôi".to_string()),
            job_title: Some("Kỹ sư phần mềm".to_string()),
            skills: vec!["HTML".to_string()],
            ..ResumeDocument::default()
        }
    }

    #[test]
    fn test_absent_fields_are_untouched() {
        let mut doc = base_doc();
        let patch = ResumePatch {
            city: Some("Hà Nội".to_string()),
            ..ResumePatch::default()
        };
        patch.apply(&mut doc);
        assert_eq!(doc.title.as_deref(), Some("CV của tôi"));
        assert_eq!(doc.job_title.as_deref(), Some("Kỹ sư phần mềm"));
        assert_eq!(doc.city.as_deref(), Some("Hà Nội"));
    }

    #[test]
    fn test_empty_string_clears_a_field() {
        let mut doc = base_doc();
        let patch = ResumePatch {
            title: Some("   ".to_string()),
            ..ResumePatch::default()
        };
        patch.apply(&mut doc);
        assert_eq!(doc.title, None);
    }

    #[test]
    fn test_last_writer_wins_per_field() {
        let mut doc = base_doc();
        let first = ResumePatch {
            summary: Some("bản đầu".to_string()),
            ..ResumePatch::default()
        };
        let second = ResumePatch {
            summary: Some("bản sau".to_string()),
            ..ResumePatch::default()
        };
        first.apply(&mut doc);
        second.apply(&mut doc);
        assert_eq!(doc.summary.as_deref(), Some("bản sau"));
    }

    #[test]
    fn test_collections_replace_wholesale() {
        let mut doc = base_doc();
        doc.work_experiences = vec![WorkExperience {
            position: Some("old".to_string()),
            ..WorkExperience::default()
        }];
        let patch = ResumePatch {
            work_experiences: Some(vec![
                WorkExperience {
                    position: Some("  Senior Frontend Developer ".to_string()),
                    end_date: Some("".to_string()),
                    ..WorkExperience::default()
                },
                WorkExperience::default(),
            ]),
            ..ResumePatch::default()
        };
        patch.apply(&mut doc);
        assert_eq!(doc.work_experiences.len(), 2);
        assert_eq!(
            doc.work_experiences[0].position.as_deref(),
            Some("Senior Frontend Developer")
        );
        // empty end_date normalizes to absent and renders as ongoing
        assert_eq!(doc.work_experiences[0].end_date, None);
    }

    #[test]
    fn test_skills_are_normalized_on_apply() {
        let mut doc = base_doc();
        let patch = ResumePatch {
            skills: Some(vec![
                " React.js ".to_string(),
                "React.js".to_string(),
                "".to_string(),
                "Node.js".to_string(),
            ]),
            ..ResumePatch::default()
        };
        patch.apply(&mut doc);
        assert_eq!(
            doc.skills,
            vec!["React.js".to_string(), "Node.js".to_string()]
        );
    }

    #[test]
    fn test_photo_patch_sets_remote_and_clears() {
        let mut doc = base_doc();
        let set = ResumePatch {
            photo: Some("https://blob.example.com/p.png".to_string()),
            ..ResumePatch::default()
        };
        set.apply(&mut doc);
        assert_eq!(
            doc.photo,
            Photo::Remote("https://blob.example.com/p.png".to_string())
        );

        let clear = ResumePatch {
            photo: Some("".to_string()),
            ..ResumePatch::default()
        };
        clear.apply(&mut doc);
        assert_eq!(doc.photo, Photo::Empty);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<ResumePatch, _> =
            serde_json::from_str(r#"{"titel": "typo-field"}"#);
        assert!(result.is_err());
    }
}
