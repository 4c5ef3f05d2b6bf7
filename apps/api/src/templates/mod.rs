//! The template catalog: the fixed set of selectable starting points.
//!
//! `TemplateType` is a closed enumeration: every template identifier used
//! anywhere in the system has exactly one catalog entry and one renderer, and
//! adding or removing one is a compile-time exhaustive-match change.

pub mod samples;

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;

/// Selects which renderer interprets a document. Unknown identifiers fail
/// deserialization, a data-integrity error rather than a silent default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    #[default]
    #[serde(rename = "template_0")]
    Template0,
    #[serde(rename = "template_1")]
    Template1,
    #[serde(rename = "template_2")]
    Template2,
    #[serde(rename = "template_3")]
    Template3,
    #[serde(rename = "template_4")]
    Template4,
}

impl TemplateType {
    pub const ALL: [TemplateType; 5] = [
        TemplateType::Template0,
        TemplateType::Template1,
        TemplateType::Template2,
        TemplateType::Template3,
        TemplateType::Template4,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateType::Template0 => "template_0",
            TemplateType::Template1 => "template_1",
            TemplateType::Template2 => "template_2",
            TemplateType::Template3 => "template_3",
            TemplateType::Template4 => "template_4",
        }
    }
}

/// One selectable starting point: identity, display metadata, and a complete
/// sample document interpreted by the template's renderer.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub template_type: TemplateType,
    pub data: ResumeDocument,
}

/// The catalog in display order: the blank template is pinned first, the rest
/// follow in identifier order.
pub fn catalog() -> Vec<TemplateEntry> {
    TemplateType::ALL.iter().map(|t| entry(*t)).collect()
}

/// Direct lookup for one template's catalog entry.
pub fn entry(template: TemplateType) -> TemplateEntry {
    match template {
        TemplateType::Template0 => TemplateEntry {
            id: template.id(),
            name: "Mặc định",
            description: "",
            thumbnail: "/templates/template_0.webp",
            template_type: template,
            data: samples::blank(),
        },
        TemplateType::Template1 => TemplateEntry {
            id: template.id(),
            name: "Mẫu 1",
            description: "",
            thumbnail: "/templates/template_1.webp",
            template_type: template,
            data: samples::professional(),
        },
        TemplateType::Template2 => TemplateEntry {
            id: template.id(),
            name: "Mẫu 2",
            description: "",
            thumbnail: "/templates/template_2.webp",
            template_type: template,
            data: samples::creative(),
        },
        TemplateType::Template3 => TemplateEntry {
            id: template.id(),
            name: "Mẫu 3",
            description: "",
            thumbnail: "/templates/template_3.webp",
            template_type: template,
            data: samples::minimal(),
        },
        TemplateType::Template4 => TemplateEntry {
            id: template.id(),
            name: "Mẫu 4",
            description: "",
            thumbnail: "/templates/template_4.webp",
            template_type: template,
            data: samples::modern(),
        },
    }
}

/// Clones a template's sample data as the starting point of a new document.
/// The clone is independent; editing it never mutates the catalog sample.
pub fn instantiate(template: TemplateType) -> ResumeDocument {
    let mut doc = entry(template).data;
    doc.id = None;
    doc.template_type = template;
    doc
}
