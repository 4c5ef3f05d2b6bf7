//! Minimal layout: centered identity, hairline rules, restrained color use.

use crate::document::ResumeDocument;
use crate::render::dates::{format_range, DateStyle};
use crate::render::html::{contact_line, escape, multiline, photo_img};

const DEFAULT_COLOR: &str = "#000000";

pub(super) fn render(doc: &ResumeDocument) -> String {
    let accent = doc.color_hex.as_deref().unwrap_or(DEFAULT_COLOR);
    let mut out =
        String::from("<div style=\"padding:44px 56px;font-size:13px;line-height:1.6;\">");

    // Centered header
    out.push_str("<div style=\"text-align:center;margin-bottom:12px;\">");
    let photo = photo_img(doc, 88, "display:inline-block;margin-bottom:8px;");
    out.push_str(&photo);
    if let Some(name) = doc.full_name() {
        out.push_str(&format!(
            "<h1 style=\"font-size:28px;font-weight:normal;letter-spacing:3px;\
             text-transform:uppercase;margin:0;\">{}</h1>",
            escape(&name)
        ));
    }
    if let Some(job_title) = &doc.job_title {
        out.push_str(&format!(
            "<p style=\"font-size:14px;color:{};letter-spacing:1px;margin:4px 0 0;\">{}</p>",
            escape(accent),
            escape(job_title)
        ));
    }
    let contact = contact_line(
        &[
            doc.email.as_deref(),
            doc.phone.as_deref(),
            doc.city.as_deref(),
            doc.country.as_deref(),
        ],
        "  ·  ",
    );
    if !contact.is_empty() {
        out.push_str(&format!(
            "<p style=\"font-size:11px;color:#555555;margin:6px 0 0;\">{contact}</p>"
        ));
    }
    out.push_str("</div>");

    if let Some(summary) = &doc.summary {
        out.push_str(&rule(accent));
        out.push_str(&format!(
            "<p style=\"margin:0;text-align:justify;\">{}</p>",
            multiline(summary)
        ));
    }

    if !doc.work_experiences.is_empty() {
        out.push_str(&title("Kinh nghiệm làm việc", accent));
        for exp in &doc.work_experiences {
            out.push_str("<div style=\"margin-bottom:10px;\">");
            out.push_str("<div style=\"display:flex;justify-content:space-between;\">");
            let heading = contact_line(&[exp.position.as_deref(), exp.company.as_deref()], ", ");
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
                    "<p style=\"font-size:11px;margin:0;\">{}</p>",
                    escape(&range)
                ));
            }
            out.push_str("</div>");
            if let Some(description) = &exp.description {
                out.push_str(&format!(
                    "<p style=\"margin:2px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            out.push_str("</div>");
        }
    }

    if !doc.educations.is_empty() {
        out.push_str(&title("Học vấn", accent));
        for edu in &doc.educations {
            out.push_str("<div style=\"display:flex;justify-content:space-between;margin-bottom:6px;\">");
            let heading = contact_line(
                &[edu.degree.as_deref(), edu.major.as_deref(), edu.school.as_deref()],
                ", ",
            );
            if !heading.is_empty() {
                out.push_str(&format!("<p style=\"margin:0;\">{heading}</p>"));
            }
            if let Some(range) = format_range(
                edu.start_date.as_deref(),
                edu.end_date.as_deref(),
                DateStyle::Year,
            ) {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;margin:0;\">{}</p>",
                    escape(&range)
                ));
            }
            out.push_str("</div>");
        }
    }

    if !doc.projects.is_empty() {
        out.push_str(&title("Dự án", accent));
        for project in &doc.projects {
            out.push_str("<div style=\"margin-bottom:8px;\">");
            let heading = contact_line(&[project.name.as_deref(), project.role.as_deref()], ", ");
            if !heading.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-weight:bold;margin:0;\">{heading}</p>"
                ));
            }
            if !project.tech_stack.is_empty() {
                out.push_str(&format!(
                    "<p style=\"font-size:11px;color:#555555;margin:0;\">{}</p>",
                    escape(&project.tech_stack.join(" · "))
                ));
            }
            if let Some(description) = &project.description {
                out.push_str(&format!(
                    "<p style=\"margin:2px 0 0;\">{}</p>",
                    multiline(description)
                ));
            }
            out.push_str("</div>");
        }
    }

    if !doc.skills.is_empty() {
        out.push_str(&title("Kỹ năng", accent));
        out.push_str(&format!(
            "<p style=\"margin:0;\">{}</p>",
            escape(&doc.skills.join("  ·  "))
        ));
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
        let names: Vec<String> = doc
            .hobbies
            .iter()
            .filter_map(|h| h.name.as_deref().map(str::to_string))
            .collect();
        if !names.is_empty() {
            out.push_str(&format!(
                "<p style=\"margin:0;\">{}</p>",
                escape(&names.join("  ·  "))
            ));
        }
    }

    out.push_str("</div>");
    out
}

fn title(text: &str, accent: &str) -> String {
    format!(
        "<h2 style=\"font-size:13px;font-weight:bold;text-transform:uppercase;\
         letter-spacing:2px;border-bottom:1px solid {};padding-bottom:3px;\
         margin:18px 0 8px;\">{}</h2>",
        escape(accent),
        escape(text),
    )
}

fn rule(accent: &str) -> String {
    format!(
        "<div style=\"border-top:1px solid {};margin:12px 0;\"></div>",
        escape(accent)
    )
}
