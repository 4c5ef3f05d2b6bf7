//! The five content generators: summary, work experience, education, skills,
//! and goals. Each turns a validated request into one structured fragment for
//! the editor to merge into the document.
//!
//! Generation is all-or-nothing per call: an upstream failure or an empty
//! completion surfaces as a generation failure and no partial fragment is
//! returned. Parsing of the free-text response is delegated to the labeled
//! extractor so it stays testable without the network.

use crate::document::{merge_skills, Education, WorkExperience};
use crate::errors::AppError;
use crate::generation::extract::{as_iso_date, extract_labeled_fields, LabelSpec};
use crate::generation::language::detect_language;
use crate::generation::prompts;
use crate::llm_client::{ChatMessage, TextCompleter};
use crate::validation::{
    GenerateEducationInput, GenerateGoalsInput, GenerateSkillsInput, GenerateSummaryInput,
    GenerateWorkExperienceInput,
};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedGoals {
    pub short_term_goals: String,
    pub long_term_goals: String,
}

const WORK_EXPERIENCE_LABELS: &[LabelSpec] = &[
    LabelSpec {
        key: "position",
        label: "Job title",
        required: false,
    },
    LabelSpec {
        key: "company",
        label: "Company",
        required: false,
    },
    LabelSpec {
        key: "start_date",
        label: "Start date",
        required: false,
    },
    LabelSpec {
        key: "end_date",
        label: "End date",
        required: false,
    },
    LabelSpec {
        key: "description",
        label: "Description",
        required: false,
    },
];

const EDUCATION_LABELS: &[LabelSpec] = &[
    LabelSpec {
        key: "degree",
        label: "Degree",
        required: false,
    },
    LabelSpec {
        key: "major",
        label: "Major",
        required: false,
    },
    LabelSpec {
        key: "school",
        label: "School",
        required: false,
    },
    LabelSpec {
        key: "start_date",
        label: "Start date",
        required: false,
    },
    LabelSpec {
        key: "end_date",
        label: "End date",
        required: false,
    },
];

const GOALS_LABELS: &[LabelSpec] = &[
    LabelSpec {
        key: "short_term",
        label: "Short-term",
        required: true,
    },
    LabelSpec {
        key: "long_term",
        label: "Long-term",
        required: true,
    },
];

async fn complete(
    llm: &dyn TextCompleter,
    system: &str,
    user: String,
    language_source: &str,
) -> Result<String, AppError> {
    let language = detect_language(language_source);
    let messages = [ChatMessage::system(system), ChatMessage::user(user)];
    llm.complete(&messages, language)
        .await
        .map_err(|e| AppError::Llm(format!("Generation failed: {e}")))
}

/// Generates a professional introduction summary from the document's current
/// job title, work experience, education, and skills.
pub async fn generate_summary(
    llm: &dyn TextCompleter,
    input: GenerateSummaryInput,
) -> Result<String, AppError> {
    let language_source = format!(
        "{} {} {}",
        input.job_title.as_deref().unwrap_or_default(),
        input
            .work_experiences
            .iter()
            .flat_map(|exp| [
                exp.position.as_deref().unwrap_or_default(),
                exp.company.as_deref().unwrap_or_default(),
                exp.description.as_deref().unwrap_or_default(),
            ])
            .collect::<Vec<_>>()
            .join(" "),
        input.skills.join(" "),
    );
    let user = prompts::summary_user_prompt(&input);
    complete(llm, prompts::SUMMARY_SYSTEM, user, &language_source).await
}

/// Generates a single work-experience entry from a free-text description.
pub async fn generate_work_experience(
    llm: &dyn TextCompleter,
    input: GenerateWorkExperienceInput,
) -> Result<WorkExperience, AppError> {
    input.validate().map_err(AppError::Validation)?;

    let user = prompts::description_user_prompt("a work experience entry", &input.description);
    let response = complete(llm, prompts::WORK_EXPERIENCE_SYSTEM, user, &input.description).await?;
    Ok(parse_work_experience(&response))
}

/// Generates a single education entry from a free-text description.
pub async fn generate_education(
    llm: &dyn TextCompleter,
    input: GenerateEducationInput,
) -> Result<Education, AppError> {
    input.validate().map_err(AppError::Validation)?;

    let user = prompts::description_user_prompt("an education entry", &input.description);
    let response = complete(llm, prompts::EDUCATION_SYSTEM, user, &input.description).await?;
    Ok(parse_education(&response))
}

/// Generates a skill list for the profile and merges it with the skills
/// already on the document, removing duplicates.
pub async fn generate_skills(
    llm: &dyn TextCompleter,
    input: GenerateSkillsInput,
) -> Result<Vec<String>, AppError> {
    let language_source = input
        .job_title
        .as_deref()
        .or(input.work_experience.as_deref())
        .or(input.education.as_deref())
        .unwrap_or_default()
        .to_string();
    let user = prompts::skills_user_prompt(&input);
    let response = complete(llm, prompts::SKILLS_SYSTEM, user, &language_source).await?;

    let generated = parse_skills(&response);
    Ok(merge_skills(&input.skills, &generated))
}

/// Generates short-term and long-term career goals.
pub async fn generate_goals(
    llm: &dyn TextCompleter,
    input: GenerateGoalsInput,
) -> Result<GeneratedGoals, AppError> {
    let language_source = input
        .job_title
        .as_deref()
        .or(input.work_experience.as_deref())
        .or(input.current_level.as_deref())
        .unwrap_or_default()
        .to_string();
    let user = prompts::goals_user_prompt(&input);
    let response = complete(llm, prompts::GOALS_SYSTEM, user, &language_source).await?;
    Ok(parse_goals(&response))
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

fn parse_work_experience(response: &str) -> WorkExperience {
    let extraction = extract_labeled_fields(response, WORK_EXPERIENCE_LABELS);
    WorkExperience {
        position: extraction.get("position").map(str::to_string),
        company: extraction.get("company").map(str::to_string),
        start_date: as_iso_date(extraction.get("start_date")),
        end_date: as_iso_date(extraction.get("end_date")),
        description: extraction.get("description").map(str::to_string),
    }
}

fn parse_education(response: &str) -> Education {
    let extraction = extract_labeled_fields(response, EDUCATION_LABELS);
    Education {
        degree: extraction.get("degree").map(str::to_string),
        major: extraction.get("major").map(str::to_string),
        school: extraction.get("school").map(str::to_string),
        start_date: as_iso_date(extraction.get("start_date")),
        end_date: as_iso_date(extraction.get("end_date")),
    }
}

/// Splits a comma-separated flat list, trimming and dropping empties.
fn parse_skills(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the two goal paragraphs by label. When label-based extraction
/// fails for either field, falls back to splitting the raw response on line
/// breaks and assigning the first two non-empty paragraphs positionally; a
/// single recoverable paragraph becomes the short-term goal.
fn parse_goals(response: &str) -> GeneratedGoals {
    let extraction = extract_labeled_fields(response, GOALS_LABELS);
    if extraction.required_present(GOALS_LABELS) {
        if let (Some(short), Some(long)) = (
            extraction.get("short_term"),
            extraction.get("long_term"),
        ) {
            return GeneratedGoals {
                short_term_goals: short.to_string(),
                long_term_goals: long.to_string(),
            };
        }
    }

    let paragraphs: Vec<&str> = response
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    match paragraphs.as_slice() {
        [] => GeneratedGoals {
            short_term_goals: String::new(),
            long_term_goals: String::new(),
        },
        [only] => GeneratedGoals {
            short_term_goals: only.to_string(),
            long_term_goals: String::new(),
        },
        [first, second, ..] => GeneratedGoals {
            short_term_goals: first.to_string(),
            long_term_goals: second.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// A completer that replays a canned response, recording the language hint.
    struct StubCompleter {
        response: Option<String>,
        expected_language: Option<&'static str>,
    }

    impl StubCompleter {
        fn returning(response: &str) -> Self {
            StubCompleter {
                response: Some(response.to_string()),
                expected_language: None,
            }
        }

        fn failing() -> Self {
            StubCompleter {
                response: None,
                expected_language: None,
            }
        }
    }

    #[async_trait]
    impl TextCompleter for StubCompleter {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            language: Option<&str>,
        ) -> Result<String, LlmError> {
            assert!(!messages.is_empty());
            if let Some(expected) = self.expected_language {
                assert_eq!(language, Some(expected));
            }
            self.response.clone().ok_or(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_skills_scenario_merges_and_dedupes() {
        // The template_1 sample document flow: generated list contains a
        // duplicate, and the result merges with pre-existing skills.
        let stub = StubCompleter {
            response: Some("JavaScript, React.js, React.js, Node.js".to_string()),
            expected_language: Some("Vietnamese"),
        };
        let input = GenerateSkillsInput {
            job_title: Some("Kỹ sư phần mềm".to_string()),
            work_experience: Some("".to_string()),
            education: Some("".to_string()),
            skills: vec![],
        };
        let skills = generate_skills(&stub, input).await.unwrap();
        assert_eq!(
            skills,
            vec![
                "JavaScript".to_string(),
                "React.js".to_string(),
                "Node.js".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_skills_merge_keeps_existing_first() {
        let stub = StubCompleter::returning("JavaScript, React.js, Node.js");
        let input = GenerateSkillsInput {
            job_title: Some("Kỹ sư phần mềm".to_string()),
            skills: vec!["HTML".to_string(), "React.js".to_string()],
            ..GenerateSkillsInput::default()
        };
        let skills = generate_skills(&stub, input).await.unwrap();
        assert_eq!(
            skills,
            vec![
                "HTML".to_string(),
                "React.js".to_string(),
                "JavaScript".to_string(),
                "Node.js".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_work_experience_parses_labeled_response() {
        let stub = StubCompleter::returning(
            "Job title: Senior Frontend Developer\n\
             Company: Tech Company X\n\
             Start date: 2021-01-01\n\
             End date: 2023-12-31\n\
             Description: • Phát triển ứng dụng web\n• Tối ưu hiệu suất",
        );
        let input = GenerateWorkExperienceInput {
            description: "làm frontend tại công ty X từ 2021 đến 2023".to_string(),
        };
        let entry = generate_work_experience(&stub, input).await.unwrap();
        assert_eq!(entry.position.as_deref(), Some("Senior Frontend Developer"));
        assert_eq!(entry.company.as_deref(), Some("Tech Company X"));
        assert_eq!(entry.start_date.as_deref(), Some("2021-01-01"));
        assert_eq!(entry.end_date.as_deref(), Some("2023-12-31"));
        assert_eq!(
            entry.description.as_deref(),
            Some("• Phát triển ứng dụng web\n• Tối ưu hiệu suất")
        );
    }

    #[tokio::test]
    async fn test_work_experience_tolerates_omitted_fields() {
        let stub = StubCompleter::returning("Job title: Developer\nDescription: • build things");
        let input = GenerateWorkExperienceInput {
            description: "I build things for a living, twenty chars".to_string(),
        };
        let entry = generate_work_experience(&stub, input).await.unwrap();
        assert_eq!(entry.company, None);
        assert_eq!(entry.start_date, None);
        assert_eq!(entry.end_date, None);
    }

    #[tokio::test]
    async fn test_work_experience_rejects_short_description_before_any_call() {
        // A panicking stub proves validation short-circuits the external call.
        struct PanickingCompleter;
        #[async_trait]
        impl TextCompleter for PanickingCompleter {
            async fn complete(
                &self,
                _messages: &[ChatMessage],
                _language: Option<&str>,
            ) -> Result<String, LlmError> {
                panic!("completion must not be reached for invalid input");
            }
        }
        let input = GenerateWorkExperienceInput {
            description: "ngắn".to_string(),
        };
        let result = generate_work_experience(&PanickingCompleter, input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_education_parses_labeled_response() {
        let stub = StubCompleter::returning(
            "Degree: Kỹ sư Công nghệ thông tin\n\
             School: Đại học Bách Khoa Hà Nội\n\
             Start date: 2014-09-01\n\
             End date: 2018-05-31",
        );
        let input = GenerateEducationInput {
            description: "học công nghệ thông tin tại Bách Khoa 2014-2018".to_string(),
        };
        let entry = generate_education(&stub, input).await.unwrap();
        assert_eq!(entry.degree.as_deref(), Some("Kỹ sư Công nghệ thông tin"));
        assert_eq!(entry.major, None);
        assert_eq!(entry.school.as_deref(), Some("Đại học Bách Khoa Hà Nội"));
        assert_eq!(entry.end_date.as_deref(), Some("2018-05-31"));
    }

    #[tokio::test]
    async fn test_education_drops_non_date_values() {
        let stub = StubCompleter::returning(
            "Degree: Cử nhân\nSchool: X\nStart date: khoảng 2014\nEnd date: not provided",
        );
        let input = GenerateEducationInput {
            description: "tốt nghiệp cử nhân tại trường X, bốn năm học".to_string(),
        };
        let entry = generate_education(&stub, input).await.unwrap();
        assert_eq!(entry.start_date, None);
        assert_eq!(entry.end_date, None);
    }

    #[tokio::test]
    async fn test_goals_labeled_extraction() {
        let stub = StubCompleter::returning(
            "Short-term: Trở thành team lead trong 2 năm.\n\
             Long-term: Trở thành kiến trúc sư giải pháp trong 5 năm.",
        );
        let goals = generate_goals(&stub, GenerateGoalsInput::default())
            .await
            .unwrap();
        assert_eq!(goals.short_term_goals, "Trở thành team lead trong 2 năm.");
        assert_eq!(
            goals.long_term_goals,
            "Trở thành kiến trúc sư giải pháp trong 5 năm."
        );
    }

    #[tokio::test]
    async fn test_goals_fallback_assigns_paragraphs_positionally() {
        let stub = StubCompleter::returning(
            "Phát triển kỹ năng quản lý và trở thành team lead.\n\n\
             Hướng tới vị trí kỹ sư trưởng trong 5 năm.",
        );
        let goals = generate_goals(&stub, GenerateGoalsInput::default())
            .await
            .unwrap();
        assert_eq!(
            goals.short_term_goals,
            "Phát triển kỹ năng quản lý và trở thành team lead."
        );
        assert_eq!(
            goals.long_term_goals,
            "Hướng tới vị trí kỹ sư trưởng trong 5 năm."
        );
    }

    #[tokio::test]
    async fn test_goals_single_paragraph_becomes_short_term() {
        let stub = StubCompleter::returning("Chỉ có một đoạn mục tiêu duy nhất.");
        let goals = generate_goals(&stub, GenerateGoalsInput::default())
            .await
            .unwrap();
        assert_eq!(goals.short_term_goals, "Chỉ có một đoạn mục tiêu duy nhất.");
        assert_eq!(goals.long_term_goals, "");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_a_generation_failure() {
        let stub = StubCompleter::failing();
        let result = generate_summary(&stub, GenerateSummaryInput::default()).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[test]
    fn test_parse_skills_splits_trims_and_drops_empty() {
        assert_eq!(
            parse_skills(" JavaScript , React.js ,, Node.js , "),
            vec![
                "JavaScript".to_string(),
                "React.js".to_string(),
                "Node.js".to_string()
            ]
        );
    }
}
