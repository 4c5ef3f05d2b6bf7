//! Modern layout: colored full-width header with photo and contacts on the
//! right, 2/3 main column and 1/3 side column below.

use crate::document::ResumeDocument;
use crate::render::dates::{format_range, DateStyle};
use crate::render::html::{escape, multiline, photo_img, tag_list};

const DEFAULT_COLOR: &str = "#1e7b77";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let accent = doc.color_hex.as_deref().unwrap_or(DEFAULT_COLOR);
    let mut out = String::from("<div style=\"font-size:13px;line-height:1.5;\">");

    // Header
    out.push_str(&format!(
        "<div style=\"background-color:{};color:#ffffff;padding:24px 32px;display:flex;\">",
        escape(accent)
    ));
    out.push_str("<div style=\"flex:1;\">");
    if let Some(name) = doc.full_name() {
        out.push_str(&format!(
            "<h1 style=\"font-size:34px;font-weight:bold;margin:0 0 4px;\">{}</h1>",
            escape(&name)
        ));
    }
    if let Some(job_title) = &doc.job_title {
        out.push_str(&format!(
            "<h2 style=\"font-size:18px;font-weight:normal;opacity:0.9;margin:0 0 12px;\">{}</h2>",
            escape(job_title)
        ));
    }
    if let Some(summary) = &doc.summary {
        out.push_str(&format!(
            "<p style=\"font-size:12px;opacity:0.95;max-width:420px;margin:0;\">{}</p>",
            multiline(summary)
        ));
    }
    out.push_str("</div>");

    out.push_str(
        "<div style=\"display:flex;flex-direction:column;align-items:flex-end;\
         gap:4px;margin-left:16px;\">",
    );
    out.push_str(&photo_img(doc, 112, "border:2px solid #ffffff;margin-bottom:8px;"));
    for value in [
        doc.phone.as_deref(),
        doc.email.as_deref(),
        doc.city.as_deref(),
        doc.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        out.push_str(&format!(
            "<p style=\"font-size:12px;margin:0;\">{}</p>",
            escape(value)
        ));
    }
    out.push_str("</div></div>");

    // Body
    out.push_str("<div style=\"display:flex;padding:20px 32px;\">");

    // Main column
    out.push_str("<div style=\"width:66%;padding-right:24px;box-sizing:border-box;\">");
    if !doc.work_experiences.is_empty() {
        out.push_str(&title("Kinh nghiệm làm việc", accent));
        for exp in &doc.work_experiences {
            out.push_str("<div style=\"margin-bottom:14px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;align-items:center;\">");
            if let Some(position) = &exp.position {
                out.push_str(&format!(
                    "<h3 style=\"font-size:14px;font-weight:bold;color:#333333;margin:0;\">{}</h3>",
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
                    "<p style=\"font-size:12px;font-style:italic;color:#555555;margin:0;\">{}</p>",
                    escape(company)
                ));
            }
            if let Some(description) = &exp.description {
                out.push_str(&format!(
                    "<p style=\"margin:4px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            out.push_str("</div>");
        }
    }

    if !doc.projects.is_empty() {
        out.push_str(&title("Dự án", accent));
        for project in &doc.projects {
            out.push_str("<div style=\"margin-bottom:14px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;align-items:center;\">");
            if let Some(name) = &project.name {
                out.push_str(&format!(
                    "<h3 style=\"font-size:14px;font-weight:bold;color:#333333;margin:0;\">{}</h3>",
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
                    "<p style=\"font-size:12px;font-style:italic;color:#555555;margin:0;\">{}</p>",
                    escape(role)
                ));
            }
            if let Some(description) = &project.description {
                out.push_str(&format!(
                    "<p style=\"margin:4px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            if !project.tech_stack.is_empty() {
                out.push_str(&tag_list(&project.tech_stack, accent));
            }
            out.push_str("</div>");
        }
    }
    out.push_str("</div>");

    // Side column
    out.push_str("<div style=\"width:34%;box-sizing:border-box;\">");
    if !doc.educations.is_empty() {
        out.push_str(&title("Học vấn", accent));
        for edu in &doc.educations {
            out.push_str("<div style=\"margin-bottom:10px;\">");
            if let Some(degree) = &edu.degree {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{}</p>",
                    escape(degree)
                ));
            }
            if let Some(major) = &edu.major {
                out.push_str(&format!("<p style=\"margin:0;\">{}</p>", escape(major)));
            }
            if let Some(school) = &edu.school {
                out.push_str(&format!(
                    "<p style=\"font-size:12px;margin:0;\">{}</p>",
                    escape(school)
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
        }
    }

    if !doc.skills.is_empty() {
        out.push_str(&title("Kỹ năng", accent));
        out.push_str(&tag_list(&doc.skills, accent));
    }

    if doc.short_term_goals.is_some() || doc.long_term_goals.is_some() {
        out.push_str(&title("Mục tiêu nghề nghiệp", accent));
        if let Some(goals) = &doc.short_term_goals {
            out.push_str(&format!(
                "<p style=\"margin:0 0 6px;\"><b>Ngắn hạn:</b> {}</p>",
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

    if !doc.hobbies.is_empty() {
        out.push_str(&title("Sở thích", accent));
        for hobby in &doc.hobbies {
            out.push_str("<div style=\"margin-bottom:4px;\">");
            if let Some(name) = &hobby.name {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{}</p>",
                    escape(name)
                ));
            }
            if let Some(description) = &hobby.description {
                out.push_str(&format!(
                    "<p style=\"font-size:12px;margin:0;\">{}</p>",
                    escape(description)
                ));
            }
            out.push_str("</div>");
        }
    }
    out.push_str("</div>");

    out.push_str("</div></div>");
    out
}

fn title(text: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:15px;font-weight:bold;text-transform:uppercase;\
         color:{};border-bottom:2px solid {};padding-bottom:3px;margin:0 0 10px;\">{}</h2>",
        escape(accent),
        escape(accent),
        escape(text),
    )
}
