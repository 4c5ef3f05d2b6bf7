//! Template renderers: pure transformations of a [`ResumeDocument`] and an
//! available width into a laid-out printable document.
//!
//! All five variants accept the identical input contract and are selected by
//! the document's own `template_type`, so switching templates requires no
//! change at the call site. Layouts are authored against a 794-unit reference
//! width (an A4 page at 96 DPI) and scaled uniformly to the requested width;
//! the overall aspect ratio is fixed at 210:297.

pub mod dates;
pub mod html;
mod template0;
mod template1;
mod template2;
mod template3;
mod template4;

use serde::Serialize;

use crate::document::ResumeDocument;
use crate::templates::TemplateType;

/// Reference layout width in px. 210mm at 96 DPI.
pub const REFERENCE_WIDTH: f32 = 794.0;
/// A4 paper proportions.
pub const A4_WIDTH: f32 = 210.0;
pub const A4_HEIGHT: f32 = 297.0;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Width actually available to the preview, in px.
    pub available_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            available_width: REFERENCE_WIDTH,
        }
    }
}

/// A rendered document: a self-contained printable HTML node plus the
/// dimensions it was scaled to. The inner `#resumePreviewContent` node is the
/// detached capture target for export flows.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

/// Renders `doc` with the renderer its `template_type` selects.
///
/// Infallible by contract: every field may be absent and every collection may
/// be empty without breaking the layout.
pub fn render(doc: &ResumeDocument, options: &RenderOptions) -> RenderedDocument {
    let width = if options.available_width.is_finite() && options.available_width > 0.0 {
        options.available_width
    } else {
        REFERENCE_WIDTH
    };
    let scale = width / REFERENCE_WIDTH;
    let height = width * A4_HEIGHT / A4_WIDTH;
    let reference_height = REFERENCE_WIDTH * A4_HEIGHT / A4_WIDTH;

    let content = match doc.template_type {
        TemplateType::Template0 => template0::render(doc),
        TemplateType::Template1 => template1::render(doc),
        TemplateType::Template2 => template2::render(doc),
        TemplateType::Template3 => template3::render(doc),
        TemplateType::Template4 => template4::render(doc),
    };

    let html = format!(
        "<div style=\"width:{width}px;height:{height}px;overflow:hidden;\
         background-color:#ffffff;color:#000000;\">\
         <div id=\"resumePreviewContent\" style=\"width:{REFERENCE_WIDTH}px;\
         height:{reference_height}px;transform:scale({scale});\
         transform-origin:top left;box-sizing:border-box;\
         font-family:Helvetica,Arial,sans-serif;\">{content}</div></div>",
    );

    RenderedDocument {
        html,
        width,
        height,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Photo, WorkExperience};
    use crate::templates;

    fn empty_doc(template: TemplateType) -> ResumeDocument {
        ResumeDocument {
            template_type: template,
            ..ResumeDocument::default()
        }
    }

    #[test]
    fn test_every_template_renders_a_fully_absent_document() {
        for template in TemplateType::ALL {
            let rendered = render(&empty_doc(template), &RenderOptions::default());
            assert!(
                !rendered.html.is_empty(),
                "{} produced empty output",
                template.id()
            );
        }
    }

    #[test]
    fn test_aspect_ratio_is_preserved_at_any_width() {
        let doc = templates::samples::professional();
        for width in [120.0, 397.0, 794.0, 1588.0] {
            let rendered = render(&doc, &RenderOptions {
                available_width: width,
            });
            let ratio = rendered.width / rendered.height;
            assert!(
                (ratio - A4_WIDTH / A4_HEIGHT).abs() < 1e-5,
                "ratio {ratio} at width {width}"
            );
            assert!((rendered.scale - width / REFERENCE_WIDTH).abs() < 1e-5);
        }
    }

    #[test]
    fn test_nonpositive_width_falls_back_to_reference() {
        let doc = templates::samples::blank();
        let rendered = render(&doc, &RenderOptions {
            available_width: 0.0,
        });
        assert!((rendered.width - REFERENCE_WIDTH).abs() < 1e-5);
        assert!((rendered.scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_absent_photo_renders_no_image_element() {
        for template in TemplateType::ALL {
            let rendered = render(&empty_doc(template), &RenderOptions::default());
            assert!(
                !rendered.html.contains("<img"),
                "{} rendered an image for an absent photo",
                template.id()
            );
        }
    }

    #[test]
    fn test_remote_photo_is_rendered() {
        let mut doc = templates::samples::professional();
        doc.photo = Photo::Remote("https://blob.example.com/p.png".to_string());
        let rendered = render(&doc, &RenderOptions::default());
        assert!(rendered.html.contains("https://blob.example.com/p.png"));
    }

    #[test]
    fn test_empty_collections_render_no_section_heading() {
        for template in TemplateType::ALL {
            let rendered = render(&empty_doc(template), &RenderOptions::default());
            assert!(
                !rendered.html.contains("Kinh nghiệm làm việc"),
                "{} rendered an empty experience section",
                template.id()
            );
            assert!(
                !rendered.html.contains("Học vấn"),
                "{} rendered an empty education section",
                template.id()
            );
        }
    }

    #[test]
    fn test_ongoing_experience_shows_marker_in_every_template() {
        for template in TemplateType::ALL {
            let mut doc = empty_doc(template);
            doc.work_experiences = vec![WorkExperience {
                position: Some("Frontend Developer".to_string()),
                start_date: Some("2022-01-01".to_string()),
                end_date: None,
                ..WorkExperience::default()
            }];
            let rendered = render(&doc, &RenderOptions::default());
            assert!(
                rendered.html.contains(dates::ONGOING),
                "{} missing ongoing marker",
                template.id()
            );
        }
    }

    #[test]
    fn test_dates_are_never_shown_in_raw_storage_form() {
        for template in TemplateType::ALL {
            let mut doc = empty_doc(template);
            doc.work_experiences = vec![WorkExperience {
                position: Some("Web Developer".to_string()),
                start_date: Some("2018-06-01".to_string()),
                end_date: Some("2020-12-31".to_string()),
                ..WorkExperience::default()
            }];
            let rendered = render(&doc, &RenderOptions::default());
            assert!(
                !rendered.html.contains("2018-06-01"),
                "{} leaked a raw date",
                template.id()
            );
            assert!(rendered.html.contains("06/2018"));
        }
    }

    #[test]
    fn test_accent_color_comes_from_the_document() {
        let mut doc = templates::samples::professional();
        doc.color_hex = Some("#12ab34".to_string());
        for template in TemplateType::ALL {
            doc.template_type = template;
            let rendered = render(&doc, &RenderOptions::default());
            assert!(
                rendered.html.contains("#12ab34"),
                "{} ignored the document color",
                template.id()
            );
        }
    }

    #[test]
    fn test_capture_node_is_present_for_export() {
        let rendered = render(
            &templates::samples::modern(),
            &RenderOptions::default(),
        );
        assert!(rendered.html.contains("id=\"resumePreviewContent\""));
    }
}
