//! Back-office dashboard statistics.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::TemplateType;

#[derive(Debug, Serialize)]
pub struct TemplateUsage {
    pub template_type: TemplateType,
    pub count: i64,
}

/// GET /api/v1/admin/dashboard/template-usage
///
/// How many stored resumes use each catalog template. Every catalog entry is
/// reported, including unused ones, in catalog order.
pub async fn handle_template_usage(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<TemplateUsage>>, AppError> {
    session.require_admin()?;

    let counts: Vec<(String, i64)> =
        sqlx::query_as("SELECT template_type, COUNT(*) FROM resumes GROUP BY template_type")
            .fetch_all(&state.db)
            .await?;

    let usage = TemplateType::ALL
        .iter()
        .map(|template| TemplateUsage {
            template_type: *template,
            count: counts
                .iter()
                .find(|(id, _)| id == template.id())
                .map(|(_, count)| *count)
                .unwrap_or(0),
        })
        .collect();

    Ok(Json(usage))
}
