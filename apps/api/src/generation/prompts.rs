// All LLM prompt constants and user-prompt builders for the generators.
// The labeled-line response formats here must stay in sync with the label
// tables in generator.rs.

use crate::validation::{
    GenerateGoalsInput, GenerateSkillsInput, GenerateSummaryInput,
};

/// System prompt for summary generation. Free-text single paragraph output.
pub const SUMMARY_SYSTEM: &str = "You are a job resume generator AI. Your task is to write a \
    professional introduction summary for a resume given the user's provided data. \
    Only return the summary and do not include any other information in the response. \
    Keep it concise and professional.";

/// System prompt for work-experience generation. Labeled-line output.
pub const WORK_EXPERIENCE_SYSTEM: &str = "You are a job resume generator AI. Your task is to \
    generate a single work experience entry based on the user input. \
    Your response must adhere to the following structure. You can omit fields if they can't be \
    inferred from the provided data, but don't add any new ones.\n\n\
    Job title: <job title>\n\
    Company: <company name>\n\
    Start date: <format: YYYY-MM-DD> (only if provided)\n\
    End date: <format: YYYY-MM-DD> (only if provided)\n\
    Description: <an optimized description in bullet format, might be inferred from the job title>";

/// System prompt for education generation. Labeled-line output.
pub const EDUCATION_SYSTEM: &str = "You are a job resume generator AI. Your task is to \
    generate a single education entry based on the user input. \
    Your response must adhere to the following structure. You can omit fields if they can't be \
    inferred from the provided data, but don't add any new ones.\n\n\
    Degree: <degree or certification>\n\
    Major: <major or specialization> (only if applicable)\n\
    School: <school or institution name>\n\
    Start date: <format: YYYY-MM-DD> (only if provided)\n\
    End date: <format: YYYY-MM-DD> (only if provided)";

/// System prompt for skills generation. Comma-separated flat list output.
pub const SKILLS_SYSTEM: &str = "You are a job resume generator AI. Your task is to generate a \
    list of 5-8 skills relevant to the user's profile. \
    The skills should be concise (1-3 words each) and directly relevant to the job title, work \
    experience, or education provided. \
    Return ONLY a comma-separated list of skills, with no additional explanations, prefixes or \
    styling. \
    For example: \"JavaScript, React.js, TypeScript, REST APIs, UI/UX Design, Project Management\".";

/// System prompt for goals generation. Two labeled paragraphs, in Vietnamese.
pub const GOALS_SYSTEM: &str = "Bạn là AI tư vấn nghề nghiệp. Hãy tạo mục tiêu nghề nghiệp \
    ngắn hạn (1-2 năm) và dài hạn (3-5 năm) thật ngắn gọn, mỗi mục tiêu chỉ 1-2 câu, không lặp \
    lại tiêu đề, không dùng markdown, không số thứ tự, không giải thích thêm. Chỉ trả về đúng 2 \
    đoạn văn, mỗi đoạn cho một mục tiêu, phân biệt rõ ràng.\n\
    Cấu trúc trả về:\n\
    Short-term: <mục tiêu ngắn hạn>\n\
    Long-term: <mục tiêu dài hạn>";

pub fn summary_user_prompt(input: &GenerateSummaryInput) -> String {
    let mut prompt =
        String::from("Please generate a professional resume summary from this data:\n\n");
    prompt.push_str(&format!(
        "Job title: {}\n\n",
        input.job_title.as_deref().unwrap_or("N/A")
    ));

    prompt.push_str("Work experience:\n");
    for exp in &input.work_experiences {
        prompt.push_str(&format!(
            "Position: {} at {} from {} to {}\n\nDescription:\n{}\n\n",
            exp.position.as_deref().unwrap_or("N/A"),
            exp.company.as_deref().unwrap_or("N/A"),
            exp.start_date.as_deref().unwrap_or("N/A"),
            exp.end_date.as_deref().unwrap_or("Present"),
            exp.description.as_deref().unwrap_or("N/A"),
        ));
    }

    prompt.push_str("Education:\n");
    for edu in &input.educations {
        prompt.push_str(&format!(
            "Degree: {} at {} from {} to {}\n\n",
            edu.degree.as_deref().unwrap_or("N/A"),
            edu.school.as_deref().unwrap_or("N/A"),
            edu.start_date.as_deref().unwrap_or("N/A"),
            edu.end_date.as_deref().unwrap_or("N/A"),
        ));
    }

    prompt.push_str(&format!("Skills:\n{}\n", input.skills.join(", ")));
    prompt
}

pub fn description_user_prompt(kind: &str, description: &str) -> String {
    format!("Please provide {kind} from this description:\n{description}\n")
}

pub fn skills_user_prompt(input: &GenerateSkillsInput) -> String {
    let mut prompt = String::from("Please generate relevant skills based on this information:\n");
    if let Some(job_title) = &input.job_title {
        prompt.push_str(&format!("Job Title: {job_title}\n"));
    }
    if let Some(work_experience) = &input.work_experience {
        prompt.push_str(&format!("Work Experience: {work_experience}\n"));
    }
    if let Some(education) = &input.education {
        prompt.push_str(&format!("Education: {education}\n"));
    }
    prompt
}

pub fn goals_user_prompt(input: &GenerateGoalsInput) -> String {
    let mut prompt = String::from("Hãy tạo mục tiêu nghề nghiệp dựa trên thông tin sau:\n");
    if let Some(job_title) = &input.job_title {
        prompt.push_str(&format!("Vị trí: {job_title}\n"));
    }
    if let Some(current_level) = &input.current_level {
        prompt.push_str(&format!("Cấp bậc: {current_level}\n"));
    }
    if let Some(work_experience) = &input.work_experience {
        prompt.push_str(&format!("Kinh nghiệm: {work_experience}\n"));
    }
    if !input.skills.is_empty() {
        prompt.push_str(&format!("Kỹ năng: {}\n", input.skills.join(", ")));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::WorkExperience;

    #[test]
    fn test_summary_prompt_substitutes_absent_fields() {
        let input = GenerateSummaryInput {
            job_title: None,
            work_experiences: vec![WorkExperience {
                position: Some("Web Developer".to_string()),
                ..WorkExperience::default()
            }],
            ..GenerateSummaryInput::default()
        };
        let prompt = summary_user_prompt(&input);
        assert!(prompt.contains("Job title: N/A"));
        assert!(prompt.contains("Position: Web Developer at N/A"));
        // an open-ended entry reads as Present, matching the render convention
        assert!(prompt.contains("to Present"));
    }

    #[test]
    fn test_skills_prompt_includes_only_present_fields() {
        let input = GenerateSkillsInput {
            job_title: Some("Kỹ sư phần mềm".to_string()),
            work_experience: None,
            education: None,
            skills: vec![],
        };
        let prompt = skills_user_prompt(&input);
        assert!(prompt.contains("Job Title: Kỹ sư phần mềm"));
        assert!(!prompt.contains("Work Experience:"));
        assert!(!prompt.contains("Education:"));
    }

    #[test]
    fn test_goals_prompt_lists_skills_when_present() {
        let input = GenerateGoalsInput {
            job_title: Some("Kỹ sư phần mềm".to_string()),
            skills: vec!["React.js".to_string(), "Node.js".to_string()],
            ..GenerateGoalsInput::default()
        };
        let prompt = goals_user_prompt(&input);
        assert!(prompt.contains("Kỹ năng: React.js, Node.js"));
    }
}
