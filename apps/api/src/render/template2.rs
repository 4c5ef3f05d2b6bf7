//! Creative layout: full-width accent header band, two asymmetric columns.

use crate::document::ResumeDocument;
use crate::render::dates::{format_range, DateStyle};
use crate::render::html::{contact_line, escape, multiline, photo_img, tag_list};

const DEFAULT_COLOR: &str = "#a21caf";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let accent = doc.color_hex.as_deref().unwrap_or(DEFAULT_COLOR);
    let mut out = String::from("<div style=\"font-size:13px;line-height:1.5;\">");

    // Header band
    out.push_str(&format!(
        "<div style=\"background-color:{};color:#ffffff;padding:28px 40px;\
         display:flex;justify-content:space-between;align-items:center;\">",
        escape(accent)
    ));
    out.push_str("<div>");
    if let Some(name) = doc.full_name() {
        out.push_str(&format!(
            "<h1 style=\"font-size:30px;font-weight:bold;margin:0;\">{}</h1>",
            escape(&name)
        ));
    }
    if let Some(job_title) = &doc.job_title {
        out.push_str(&format!(
            "<p style=\"font-size:16px;opacity:0.9;margin:4px 0 0;\">{}</p>",
            escape(job_title)
        ));
    }
    let contact = contact_line(
        &[
            doc.phone.as_deref(),
            doc.email.as_deref(),
            doc.city.as_deref(),
            doc.country.as_deref(),
        ],
        " • ",
    );
    if !contact.is_empty() {
        out.push_str(&format!(
            "<p style=\"font-size:12px;opacity:0.95;margin:8px 0 0;\">{contact}</p>"
        ));
    }
    out.push_str("</div>");
    out.push_str(&photo_img(doc, 110, "border:2px solid #ffffff;"));
    out.push_str("</div>");

    // Body columns
    out.push_str("<div style=\"display:flex;padding:24px 40px;gap:28px;\">");

    // Left column: narrative
    out.push_str("<div style=\"width:60%;\">");
    if let Some(summary) = &doc.summary {
        out.push_str(&title("Giới thiệu", accent));
        out.push_str(&format!("<p style=\"margin:0;\">{}</p>", multiline(summary)));
    }
    if !doc.work_experiences.is_empty() {
        out.push_str(&title("Kinh nghiệm làm việc", accent));
        for exp in &doc.work_experiences {
            out.push_str("<div style=\"margin-bottom:12px;\">");
            let heading = contact_line(&[exp.position.as_deref(), exp.company.as_deref()], " · ");
            if !heading.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{heading}</p>"
                ));
            }
            if let Some(range) = format_range(
                exp.start_date.as_deref(),
                exp.end_date.as_deref(),
                DateStyle::MonthYear,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:{};margin:0;\">{}</p>",
                    escape(accent),
                    escape(&range)
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
        out.push_str(&title("Dự án", accent));
        for project in &doc.projects {
            out.push_str("<div style=\"margin-bottom:12px;\">");
            let heading = contact_line(&[project.name.as_deref(), project.role.as_deref()], " · ");
            if !heading.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{heading}</p>"
                ));
            }
            if let Some(range) = format_range(
                project.start_date.as_deref(),
                project.end_date.as_deref(),
                DateStyle::MonthYear,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:{};margin:0;\">{}</p>",
                    escape(accent),
                    escape(&range)
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
    out.push_str("</div>");

    // Right column: facts
    out.push_str("<div style=\"width:40%;\">");
    if !doc.educations.is_empty() {
        out.push_str(&title("Học vấn", accent));
        for edu in &doc.educations {
            out.push_str("<div style=\"margin-bottom:8px;\">");
            let heading = contact_line(&[edu.degree.as_deref(), edu.major.as_deref()], " · ");
            if !heading.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{heading}</p>"
                ));
            }
            if let Some(school) = &edu.school {
                out.push_str(&format!("<p style=\"margin:0;\">{}</p>", escape(school)));
            }
            if let Some(range) = format_range(
                edu.start_date.as_deref(),
                edu.end_date.as_deref(),
                DateStyle::Year,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:{};margin:0;\">{}</p>",
                    escape(accent),
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
    if !doc.hobbies.is_empty() {
        out.push_str(&title("Sở thích", accent));
        for hobby in &doc.hobbies {
            let line = contact_line(&[hobby.name.as_deref(), hobby.description.as_deref()], ": ");
            if !line.is_empty() {
                out.push_str(&format!("<p style=\"margin:0 0 2px;\">{line}</p>"));
            }
        }
    }
    out.push_str("</div>");

    out.push_str("</div></div>");
    out
}

fn title(text: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:15px;font-weight:bold;text-transform:uppercase;\
         color:{};margin:14px 0 8px;\">{}</h2>",
        escape(accent),
        escape(text),
    )
}
