//! Two-column layout: tinted sidebar for identity and skills, main column for
//! narrative sections.

use crate::document::ResumeDocument;
use crate::render::dates::{format_range, DateStyle};
use crate::render::html::{escape, multiline, photo_img, tag_list};

const DEFAULT_COLOR: &str = "#7c3aed";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let accent = doc.color_hex.as_deref().unwrap_or(DEFAULT_COLOR);
    let mut out = String::from(
        "<div style=\"display:flex;height:100%;font-size:13px;line-height:1.5;\">",
    );

    // Sidebar
    out.push_str(
        "<div style=\"width:250px;background-color:#f4f1fa;padding:32px 24px;box-sizing:border-box;\">",
    );
    let photo = photo_img(doc, 140, "display:block;margin:0 auto 16px;");
    out.push_str(&photo);
    if let Some(name) = doc.full_name() {
        out.push_str(&format!(
            "<h1 style=\"font-size:22px;font-weight:bold;margin:0;text-align:center;color:{};\">{}</h1>",
            escape(accent),
            escape(&name)
        ));
    }
    if let Some(job_title) = &doc.job_title {
        out.push_str(&format!(
            "<p style=\"text-align:center;margin:4px 0 16px;\">{}</p>",
            escape(job_title)
        ));
    }

    let mut contact_rows = String::new();
    for value in [
        doc.phone.as_deref(),
        doc.email.as_deref(),
        doc.city.as_deref(),
        doc.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        contact_rows.push_str(&format!(
            "<p style=\"font-size:12px;margin:0 0 4px;\">{}</p>",
            escape(value)
        ));
    }
    if !contact_rows.is_empty() {
        out.push_str(&sidebar_title("Liên hệ", accent));
        out.push_str(&contact_rows);
    }

    if !doc.skills.is_empty() {
        out.push_str(&sidebar_title("Kỹ năng", accent));
        out.push_str(&tag_list(&doc.skills, accent));
    }

    if !doc.hobbies.is_empty() {
        out.push_str(&sidebar_title("Sở thích", accent));
        for hobby in &doc.hobbies {
            if let Some(name) = &hobby.name {
                out.push_str(&format!(
                    "<p style=\"font-size:12px;margin:0 0 4px;\">{}</p>",
                    escape(name)
                ));
            }
        }
    }
    out.push_str("</div>");

    // Main column
    out.push_str("<div style=\"flex:1;padding:32px 28px;box-sizing:border-box;\">");

    if let Some(summary) = &doc.summary {
        out.push_str(&main_title("Giới thiệu", accent));
        out.push_str(&format!("<p style=\"margin:0;\">{}</p>", multiline(summary)));
    }

    if !doc.work_experiences.is_empty() {
        out.push_str(&main_title("Kinh nghiệm làm việc", accent));
        for exp in &doc.work_experiences {
            out.push_str("<div style=\"margin-bottom:12px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;\">");
            if let Some(position) = &exp.position {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{}</p>",
                    escape(position)
                ));
            }
            if let Some(range) = format_range(
                exp.start_date.as_deref(),
                exp.end_date.as_deref(),
                DateStyle::MonthYear,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:#666666;margin:0;\">{}</p>",
                    escape(&range)
                ));
            }
            out.push_str("</div>");
            if let Some(company) = &exp.company {
                out.push_str(&format!(
                    "<p style=\"font-style:italic;margin:0;\">{}</p>",
                    escape(company)
                ));
            }
            if let Some(description) = &exp.description {
                out.push_str(&format!(
                    "<p style=\"margin:2px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            out.push_str("</div>");
        }
    }

    if !doc.projects.is_empty() {
        out.push_str(&main_title("Dự án", accent));
        for project in &doc.projects {
            out.push_str("<div style=\"margin-bottom:12px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;\">");
            if let Some(name) = &project.name {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{}</p>",
                    escape(name)
                ));
            }
            if let Some(range) = format_range(
                project.start_date.as_deref(),
                project.end_date.as_deref(),
                DateStyle::MonthYear,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:#666666;margin:0;\">{}</p>",
                    escape(&range)
                ));
            }
            out.push_str("</div>");
            if let Some(role) = &project.role {
                out.push_str(&format!(
                    "<p style=\"font-style:italic;margin:0;\">{}</p>",
                    escape(role)
                ));
            }
            if let Some(description) = &project.description {
                out.push_str(&format!(
                    "<p style=\"margin:2px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            if !project.tech_stack.is_empty() {
                out.push_str(&tag_list(&project.tech_stack, accent));
            }
            out.push_str("</div>");
        }
    }

    if !doc.educations.is_empty() {
        out.push_str(&main_title("Học vấn", accent));
        for edu in &doc.educations {
            out.push_str("<div style=\"margin-bottom:8px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;\">");
            if let Some(degree) = &edu.degree {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{}</p>",
                    escape(degree)
                ));
            }
            if let Some(range) = format_range(
                edu.start_date.as_deref(),
                edu.end_date.as_deref(),
                DateStyle::Year,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:#666666;margin:0;\">{}</p>",
                    escape(&range)
                ));
            }
            out.push_str("</div>");
            if let Some(major) = &edu.major {
                out.push_str(&format!("<p style=\"margin:0;\">{}</p>", escape(major)));
            }
            if let Some(school) = &edu.school {
                out.push_str(&format!(
                    "<p style=\"font-style:italic;margin:0;\">{}</p>",
                    escape(school)
                ));
            }
            out.push_str("</div>");
        }
    }

    if doc.short_term_goals.is_some() || doc.long_term_goals.is_some() {
        out.push_str(&main_title("Mục tiêu nghề nghiệp", accent));
        if let Some(goals) = &doc.short_term_goals {
            out.push_str(&format!(
                "<p style=\"margin:0 0 4px;\"><b>Ngắn hạn:</b> {}</p>",
                multiline(goals)
            ));
        }
        if let Some(goals) = &doc.long_term_goals {
            out.push_str(&format!(
                "<p style=\"margin:0;\"><b>Dài hạn:</b> {}</p>",
                multiline(goals)
            ));
        }
    }

    out.push_str("</div></div>");
    out
}

fn sidebar_title(title: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:13px;font-weight:bold;text-transform:uppercase;\
         letter-spacing:1px;color:{};margin:16px 0 6px;\">{}</h2>",
        escape(accent),
        escape(title),
    )
}

fn main_title(title: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:16px;font-weight:bold;color:{};border-bottom:2px solid {};\
         padding-bottom:2px;margin:14px 0 8px;\">{}</h2>",
        escape(accent),
        escape(accent),
        escape(title),
    )
}
