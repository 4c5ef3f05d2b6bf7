//! Owner-scoped resume CRUD, the photo upload flow, and server-side rendering
//! for preview/export.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::document::{Photo, ResumeDocument, ResumePatch};
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::render::{self, RenderOptions, RenderedDocument};
use crate::state::AppState;
use crate::storage;
use crate::templates::{self, TemplateType};
use crate::validation::{
    validate_image_upload, validate_resume_patch, MAX_PHOTO_BYTES,
};

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    /// Catalog entry to clone; a blank document when absent.
    pub template_type: Option<TemplateType>,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub id: Uuid,
    pub document: ResumeDocument,
}

/// Fetches a resume owned by the caller. "Absent" and "not owned" are the
/// same not-found to the client.
async fn fetch_owned(pool: &PgPool, id: Uuid, owner: Uuid) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

async fn persist_document(
    pool: &PgPool,
    id: Uuid,
    doc: &ResumeDocument,
) -> Result<ResumeRow, AppError> {
    // Serialization rejects a still-local photo, so an unresolved upload can
    // never reach the database.
    let data = serde_json::to_value(doc)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("document serialization failed: {e}")))?;
    let photo_url = doc
        .photo
        .stored_url()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?
        .map(str::to_string);

    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET title = $1, template_type = $2, photo_url = $3, data = $4, updated_at = now()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&doc.title)
    .bind(doc.template_type.id())
    .bind(&photo_url)
    .bind(&data)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    let doc = match request.template_type {
        Some(template) => templates::instantiate(template),
        None => templates::instantiate(TemplateType::Template0),
    };

    let data = serde_json::to_value(&doc)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("document serialization failed: {e}")))?;
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, title, template_type, photo_url, data)
        VALUES ($1, $2, $3, $4, NULL, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(session.user_id)
    .bind(&doc.title)
    .bind(doc.template_type.id())
    .bind(&data)
    .fetch_one(&state.db)
    .await?;

    let document = row.document()?;
    Ok((
        StatusCode::CREATED,
        Json(ResumeResponse {
            id: row.id,
            document,
        }),
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(session.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let row = fetch_owned(&state.db, id, session.user_id).await?;
    let document = row.document()?;
    Ok(Json(ResumeResponse { id: row.id, document }))
}

/// PATCH /api/v1/resumes/:id
///
/// Applies a section's field subset to the stored document. Concurrent edits
/// follow last-write-wins at field granularity: the patch that lands last
/// overwrites only the fields it carries.
pub async fn handle_update(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(patch): Json<ResumePatch>,
) -> Result<Json<ResumeResponse>, AppError> {
    validate_resume_patch(&patch).map_err(AppError::Validation)?;

    let row = fetch_owned(&state.db, id, session.user_id).await?;
    let mut doc = row.document()?;
    let previous_photo = doc.photo.clone();
    patch.apply(&mut doc);

    let updated = persist_document(&state.db, id, &doc).await?;

    // The patch replaced or cleared an uploaded photo: drop the orphan blob.
    if let (Photo::Remote(old), Ok(new)) = (&previous_photo, doc.photo.stored_url()) {
        if new != Some(old.as_str()) {
            storage::delete_object_by_url(&state.s3, &state.config, old).await?;
        }
    }

    let document = updated.document()?;
    Ok(Json(ResumeResponse {
        id: updated.id,
        document,
    }))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let row = fetch_owned(&state.db, id, session.user_id).await?;

    if let Some(photo_url) = &row.photo_url {
        storage::delete_object_by_url(&state.s3, &state.config, photo_url).await?;
    }
    sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(row.id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub photo_url: String,
}

/// POST /api/v1/resumes/:id/photo
///
/// Resolves a freshly chosen local photo to a remote reference: the payload is
/// size-checked and sniffed before any transfer, uploaded to blob storage, and
/// only the returned URL is persisted.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, AppError> {
    let row = fetch_owned(&state.db, id, session.user_id).await?;
    let mut doc = row.document()?;

    let mut local: Option<Photo> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid("form", format!("Dữ liệu multipart không hợp lệ: {e}")))?
    {
        if field.name() == Some("photo") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid("photo", e.to_string()))?;
            let mime = validate_image_upload("photo", &bytes, MAX_PHOTO_BYTES)
                .map_err(AppError::Validation)?;
            local = Some(Photo::Local {
                bytes,
                mime: mime.to_string(),
            });
        }
    }

    let Some(Photo::Local { bytes, mime }) = local else {
        return Err(AppError::invalid("photo", "Thiếu tệp ảnh"));
    };

    let url = storage::upload_object(
        &state.s3,
        &state.config,
        "images/photos",
        storage::extension_for(&mime),
        &mime,
        bytes.to_vec(),
    )
    .await?;

    let previous = std::mem::replace(&mut doc.photo, Photo::Remote(url.clone()));
    persist_document(&state.db, id, &doc).await?;

    if let Photo::Remote(old) = previous {
        storage::delete_object_by_url(&state.s3, &state.config, &old).await?;
    }

    Ok(Json(PhotoResponse { photo_url: url }))
}

/// DELETE /api/v1/resumes/:id/photo
pub async fn handle_delete_photo(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let row = fetch_owned(&state.db, id, session.user_id).await?;
    let mut doc = row.document()?;

    let previous = std::mem::replace(&mut doc.photo, Photo::Empty);
    persist_document(&state.db, id, &doc).await?;
    if let Photo::Remote(old) = previous {
        storage::delete_object_by_url(&state.s3, &state.config, &old).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    pub width: Option<f32>,
}

/// GET /api/v1/resumes/:id/render?width=
///
/// Renders the document with its own template and returns the printable node.
pub async fn handle_render(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    let row = fetch_owned(&state.db, id, session.user_id).await?;
    let doc = row.document()?;

    let options = match query.width {
        Some(width) => RenderOptions {
            available_width: width,
        },
        None => RenderOptions::default(),
    };
    Ok(Json(render::render(&doc, &options)))
}

/// GET /api/v1/templates. Public catalog listing, blank entry first.
pub async fn handle_list_templates() -> Json<Vec<templates::TemplateEntry>> {
    Json(templates::catalog())
}
