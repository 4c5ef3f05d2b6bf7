use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::document::ResumeDocument;
use crate::errors::AppError;

/// One persisted resume. The document itself is stored as JSONB in `data`;
/// `title`, `template_type`, and `photo_url` are mirrored into columns for
/// listings and blob cleanup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub template_type: String,
    pub photo_url: Option<String>,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Decodes the stored document, restoring the row id.
    pub fn document(&self) -> Result<ResumeDocument, AppError> {
        let mut doc: ResumeDocument = serde_json::from_value(self.data.clone())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("stored resume is corrupt: {e}")))?;
        doc.id = Some(self.id);
        Ok(doc)
    }
}
