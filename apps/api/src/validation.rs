//! Declarative acceptance rules for every form-backed entity.
//!
//! Validation is all-or-nothing per entity: an entity either normalizes into
//! its exact declared shape or yields a field-addressable report of every
//! violation. Independent entities validate independently, so one section's
//! invalid data never blocks another section's autosave.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::{normalize_skills, ResumeDocument, ResumePatch};

/// Per-field violation messages, keyed by field path (`"email"`,
/// `"work_experiences"`). Ordered so responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self, field: &str) -> Vec<String> {
        self.errors.get(field).cloned().unwrap_or_default()
    }

    /// `Ok(())` when clean, otherwise the report itself.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Optional-string semantics: a value is either a non-empty trimmed string or
/// absent. Present-but-empty collapses to absent.
pub fn optional_string(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared rules
// ────────────────────────────────────────────────────────────────────────────

/// Upload ceiling for a resume photo at the editor boundary.
pub const MAX_PHOTO_BYTES: usize = 4 * 1024 * 1024;
/// Upload ceiling for a profile avatar.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;
/// Upload ceiling for a blog thumbnail.
pub const MAX_THUMBNAIL_BYTES: usize = 5 * 1024 * 1024;

/// The punctuation set accepted as password symbols.
pub const PASSWORD_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn email_re() -> Regex {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex")
}

fn color_hex_re() -> Regex {
    Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex")
}

fn check_email(report: &mut ValidationReport, field: &str, email: &str) {
    if !email_re().is_match(email) {
        report.push(field, "Email không hợp lệ");
    }
}

fn check_color_hex(report: &mut ValidationReport, field: &str, value: &str) {
    if !color_hex_re().is_match(value) {
        report.push(field, "Màu phải có dạng #rrggbb");
    }
}

/// Password policy: minimum length 6, at least one uppercase letter, one
/// lowercase letter, one digit, and one symbol from [`PASSWORD_SYMBOLS`].
pub fn check_password(report: &mut ValidationReport, field: &str, password: &str) {
    if password.chars().count() < 6 {
        report.push(field, "Mật khẩu phải có ít nhất 6 ký tự");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        report.push(field, "Mật khẩu phải chứa ít nhất một chữ hoa");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        report.push(field, "Mật khẩu phải chứa ít nhất một chữ thường");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        report.push(field, "Mật khẩu phải chứa ít nhất một chữ số");
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        report.push(field, "Mật khẩu phải chứa ít nhất một ký tự đặc biệt");
    }
}

/// Checks an uploaded image payload: size ceiling first (before any transfer
/// downstream), then a header sniff. The declared content type is not
/// trusted. Returns the detected MIME type.
pub fn validate_image_upload(
    field: &str,
    bytes: &[u8],
    limit: usize,
) -> Result<&'static str, ValidationReport> {
    let mut report = ValidationReport::new();
    if bytes.len() > limit {
        report.push(
            field,
            format!("Tệp phải nhỏ hơn {}MB", limit / (1024 * 1024)),
        );
        return Err(report);
    }
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Png) => Ok("image/png"),
        Ok(image::ImageFormat::Jpeg) => Ok("image/jpeg"),
        Ok(image::ImageFormat::WebP) => Ok("image/webp"),
        _ => {
            report.push(field, "Tệp phải là hình ảnh (PNG, JPEG hoặc WebP)");
            Err(report)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume document / patch
// ────────────────────────────────────────────────────────────────────────────

/// Validates a patch before it is applied. Shape errors are caught at
/// deserialization; this checks the field-level rules.
pub fn validate_resume_patch(patch: &ResumePatch) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();
    if let Some(color) = optional_string(patch.color_hex.as_deref()) {
        check_color_hex(&mut report, "color_hex", &color);
    }
    if let Some(email) = optional_string(patch.email.as_deref()) {
        check_email(&mut report, "email", &email);
    }
    report.into_result()
}

/// Validates and normalizes a full document. A schema-conformant document
/// passes through unchanged, with no silent field loss.
pub fn validate_resume(mut doc: ResumeDocument) -> Result<ResumeDocument, ValidationReport> {
    let mut report = ValidationReport::new();

    doc.title = optional_string(doc.title.as_deref());
    doc.description = optional_string(doc.description.as_deref());
    doc.first_name = optional_string(doc.first_name.as_deref());
    doc.last_name = optional_string(doc.last_name.as_deref());
    doc.job_title = optional_string(doc.job_title.as_deref());
    doc.city = optional_string(doc.city.as_deref());
    doc.country = optional_string(doc.country.as_deref());
    doc.phone = optional_string(doc.phone.as_deref());
    doc.email = optional_string(doc.email.as_deref());
    doc.summary = optional_string(doc.summary.as_deref());
    doc.short_term_goals = optional_string(doc.short_term_goals.as_deref());
    doc.long_term_goals = optional_string(doc.long_term_goals.as_deref());
    doc.skills = normalize_skills(&doc.skills);

    if let Some(email) = &doc.email {
        check_email(&mut report, "email", email);
    }
    if let Some(color) = &doc.color_hex {
        check_color_hex(&mut report, "color_hex", color);
    }

    match report.into_result() {
        Ok(()) => Ok(doc),
        Err(report) => Err(report),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Auth inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        check_email(&mut report, "email", self.email.trim());
        check_password(&mut report, "password", &self.password);
        if self.password != self.confirm_password {
            report.push("confirm_password", "Mật khẩu xác nhận không khớp");
        }
        report.into_result()
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordInput {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        check_password(&mut report, "new_password", &self.new_password);
        if self.new_password != self.confirm_password {
            report.push("confirm_password", "Mật khẩu xác nhận không khớp");
        }
        report.into_result()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blog input
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BlogInput {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub published: bool,
}

impl BlogInput {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        if self.title.trim().chars().count() < 3 {
            report.push("title", "Tiêu đề phải có ít nhất 3 ký tự");
        }
        if self.content.trim().chars().count() < 10 {
            report.push("content", "Nội dung phải có ít nhất 10 ký tự");
        }
        if self.slug.trim().chars().count() < 3 {
            report.push("slug", "Slug phải có ít nhất 3 ký tự");
        }
        report.into_result()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateSummaryInput {
    pub job_title: Option<String>,
    #[serde(default)]
    pub work_experiences: Vec<crate::document::WorkExperience>,
    #[serde(default)]
    pub educations: Vec<crate::document::Education>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateWorkExperienceInput {
    pub description: String,
}

impl GenerateWorkExperienceInput {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validate_generation_description(&self.description)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateEducationInput {
    pub description: String,
}

impl GenerateEducationInput {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validate_generation_description(&self.description)
    }
}

fn validate_generation_description(description: &str) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();
    let trimmed = description.trim();
    if trimmed.is_empty() {
        report.push("description", "Bắt buộc");
    } else if trimmed.chars().count() < 20 {
        report.push("description", "Phải có ít nhất 20 ký tự");
    }
    report.into_result()
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateSkillsInput {
    pub job_title: Option<String>,
    pub work_experience: Option<String>,
    pub education: Option<String>,
    /// Skills already on the document; generated skills are merged against
    /// these with duplicates removed.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateGoalsInput {
    pub job_title: Option<String>,
    pub current_level: Option<String>,
    pub work_experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Photo, WorkExperience};
    use crate::templates::TemplateType;

    #[test]
    fn test_optional_string_semantics() {
        assert_eq!(optional_string(None), None);
        assert_eq!(optional_string(Some("")), None);
        assert_eq!(optional_string(Some("   ")), None);
        assert_eq!(optional_string(Some("  Hà Nội ")), Some("Hà Nội".to_string()));
    }

    #[test]
    fn test_report_collects_multiple_messages_per_field() {
        let mut report = ValidationReport::new();
        check_password(&mut report, "password", "abc");
        let messages = report.messages("password");
        assert!(messages.len() >= 3, "short all-lowercase password breaks several rules");
    }

    #[test]
    fn test_password_policy_accepts_conforming_password() {
        let mut report = ValidationReport::new();
        check_password(&mut report, "password", "Abc1d!");
        assert!(report.is_empty());
    }

    #[test]
    fn test_password_policy_requires_symbol_from_fixed_set() {
        let mut report = ValidationReport::new();
        check_password(&mut report, "password", "Abcde1");
        assert_eq!(report.messages("password").len(), 1);
    }

    #[test]
    fn test_register_requires_matching_confirmation() {
        let input = RegisterInput {
            email: "user@example.com".to_string(),
            password: "Abc1d!".to_string(),
            confirm_password: "Abc1d?".to_string(),
            first_name: None,
            last_name: None,
        };
        let report = input.validate().unwrap_err();
        assert!(!report.messages("confirm_password").is_empty());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let input = RegisterInput {
            email: "not-an-email".to_string(),
            password: "Abc1d!".to_string(),
            confirm_password: "Abc1d!".to_string(),
            first_name: None,
            last_name: None,
        };
        let report = input.validate().unwrap_err();
        assert!(!report.messages("email").is_empty());
    }

    #[test]
    fn test_generation_description_minimum_length() {
        let short = GenerateWorkExperienceInput {
            description: "quá ngắn".to_string(),
        };
        assert!(short.validate().is_err());

        let long = GenerateWorkExperienceInput {
            description: "làm việc tại công ty X từ 2020 đến 2023".to_string(),
        };
        assert!(long.validate().is_ok());
    }

    #[test]
    fn test_image_upload_size_checked_before_sniffing() {
        // 6 MiB of zeroes: over every ceiling, and not a valid image either.
        // The size rule must be the one that fires.
        let oversized = vec![0u8; 6 * 1024 * 1024];
        let report = validate_image_upload("avatar", &oversized, MAX_AVATAR_BYTES).unwrap_err();
        assert!(report.messages("avatar")[0].contains("2MB"));
    }

    #[test]
    fn test_image_upload_sniffs_content_not_extension() {
        let not_an_image = b"just some text pretending to be a picture";
        let report =
            validate_image_upload("photo", not_an_image, MAX_PHOTO_BYTES).unwrap_err();
        assert!(!report.messages("photo").is_empty());
    }

    #[test]
    fn test_image_upload_accepts_png_header() {
        let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        png.extend_from_slice(&[0; 64]);
        assert_eq!(
            validate_image_upload("photo", &png, MAX_PHOTO_BYTES),
            Ok("image/png")
        );
    }

    #[test]
    fn test_validate_resume_round_trips_conformant_document() {
        let doc = ResumeDocument {
            title: Some("CV Chuyên nghiệp".to_string()),
            photo: Photo::Remote("https://blob.example.com/p.png".to_string()),
            first_name: Some("Nguyễn".to_string()),
            email: Some("example@email.com".to_string()),
            skills: vec!["HTML".to_string(), "CSS".to_string()],
            work_experiences: vec![WorkExperience {
                position: Some("Web Developer".to_string()),
                ..WorkExperience::default()
            }],
            color_hex: Some("#7c3aed".to_string()),
            template_type: TemplateType::Template1,
            ..ResumeDocument::default()
        };
        let validated = validate_resume(doc.clone()).unwrap();
        assert_eq!(validated, doc);
    }

    #[test]
    fn test_validate_resume_rejects_malformed_color() {
        let doc = ResumeDocument {
            color_hex: Some("purple".to_string()),
            ..ResumeDocument::default()
        };
        let report = validate_resume(doc).unwrap_err();
        assert!(!report.messages("color_hex").is_empty());
    }

    #[test]
    fn test_partial_entries_are_retained() {
        let doc = ResumeDocument {
            work_experiences: vec![WorkExperience {
                company: Some("Tech Company X".to_string()),
                ..WorkExperience::default()
            }],
            ..ResumeDocument::default()
        };
        let validated = validate_resume(doc).unwrap();
        assert_eq!(validated.work_experiences.len(), 1);
        assert_eq!(validated.work_experiences[0].position, None);
    }

    #[test]
    fn test_blog_input_minimums() {
        let input = BlogInput {
            title: "ab".to_string(),
            content: "too short".to_string(),
            excerpt: None,
            thumbnail: None,
            slug: "ab".to_string(),
            published: false,
        };
        let report = input.validate().unwrap_err();
        assert!(!report.messages("title").is_empty());
        assert!(!report.messages("content").is_empty());
        assert!(!report.messages("slug").is_empty());
    }
}
