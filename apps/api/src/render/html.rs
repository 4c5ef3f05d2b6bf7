//! Small HTML construction helpers shared by the template renderers.
//! Renderers emit self-contained markup with inline styles only, so the
//! captured node prints identically outside the app shell.

use crate::document::{BorderStyle, Photo, ResumeDocument};

/// Escapes text for safe interpolation into element content or attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text and turns line breaks into `<br>` so multi-line descriptions
/// (bullet lists entered with newlines) keep their shape.
pub fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

/// CSS border-radius for the photo frame treatment.
pub fn border_radius(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Square => "0",
        BorderStyle::Circle => "9999px",
        BorderStyle::Squircle => "20%",
    }
}

/// An `<img>` for the document photo, or nothing at all when the photo is
/// absent. A local (not yet uploaded) photo has no stable URL to reference and
/// renders as absent too, never as a broken placeholder.
pub fn photo_img(doc: &ResumeDocument, size_px: u32, extra_style: &str) -> String {
    match &doc.photo {
        Photo::Remote(url) => format!(
            "<img src=\"{}\" alt=\"\" style=\"width:{}px;height:{}px;object-fit:cover;border-radius:{};{}\">",
            escape(url),
            size_px,
            size_px,
            border_radius(doc.border_style),
            extra_style,
        ),
        Photo::Empty | Photo::Local { .. } => String::new(),
    }
}

/// Renders short strings as pill-shaped tags on the accent color.
pub fn tag_list(items: &[String], accent: &str) -> String {
    let mut out = String::from("<div style=\"display:flex;flex-wrap:wrap;gap:6px;\">");
    for item in items {
        out.push_str(&format!(
            "<span style=\"background-color:{};color:#ffffff;border-radius:9999px;\
             padding:2px 10px;font-size:12px;\">{}</span>",
            escape(accent),
            escape(item),
        ));
    }
    out.push_str("</div>");
    out
}

/// Joins the present parts of the contact line with a separator.
pub fn contact_line(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| escape(p))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"A&B"</b>'s"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;&#39;s"
        );
    }

    #[test]
    fn test_multiline_converts_newlines() {
        assert_eq!(multiline("• một\n• hai"), "• một<br>• hai");
    }

    #[test]
    fn test_photo_img_absent_for_empty_and_local() {
        let mut doc = ResumeDocument::default();
        assert_eq!(photo_img(&doc, 112, ""), "");

        doc.photo = Photo::Local {
            bytes: Bytes::from_static(b"\x89PNG"),
            mime: "image/png".to_string(),
        };
        assert_eq!(photo_img(&doc, 112, ""), "");
    }

    #[test]
    fn test_photo_img_uses_border_style() {
        let doc = ResumeDocument {
            photo: Photo::Remote("https://blob.example.com/p.png".to_string()),
            border_style: BorderStyle::Circle,
            ..ResumeDocument::default()
        };
        let img = photo_img(&doc, 112, "");
        assert!(img.contains("border-radius:9999px"));
        assert!(img.contains("https://blob.example.com/p.png"));
    }

    #[test]
    fn test_contact_line_skips_absent_parts() {
        let line = contact_line(&[Some("Hà Nội"), None, Some("Việt Nam")], ", ");
        assert_eq!(line, "Hà Nội, Việt Nam");
    }
}
