//! The resume document model: the canonical in-memory representation of a
//! CV, composed from the validated form sections plus presentation fields.

pub mod model;
pub mod patch;
pub mod photo;

pub use model::{
    merge_skills, normalize_skills, BorderStyle, Education, Hobby, Project, ResumeDocument,
    WorkExperience,
};
pub use patch::ResumePatch;
pub use photo::Photo;
