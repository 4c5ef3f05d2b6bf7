//! Blog endpoints: admin-authored CRUD plus the public published-only surface.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::models::blog::{BlogRow, BlogSummary};
use crate::state::AppState;
use crate::storage;
use crate::validation::{
    optional_string, validate_image_upload, BlogInput, MAX_THUMBNAIL_BYTES,
};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_items: i64,
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogRow>,
    pub pagination: Pagination,
}

fn page_bounds(query: &PageQuery) -> (u32, u32, i64) {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let offset = i64::from((page - 1) * limit);
    (page, limit, offset)
}

async fn fetch_blog(pool: &PgPool, id: Uuid) -> Result<BlogRow, AppError> {
    sqlx::query_as::<_, BlogRow>("SELECT * FROM blogs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog {id} not found")))
}

async fn slug_taken(pool: &PgPool, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM blogs WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(matches!(existing, Some((id,)) if Some(id) != exclude))
}

/// GET /api/v1/admin/blogs
pub async fn handle_admin_list(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<PageQuery>,
) -> Result<Json<BlogListResponse>, AppError> {
    session.require_admin()?;
    let (page, limit, offset) = page_bounds(&query);
    let search = format!("%{}%", query.search.as_deref().unwrap_or_default());

    let blogs = sqlx::query_as::<_, BlogRow>(
        r#"
        SELECT * FROM blogs
        WHERE title ILIKE $1 OR content ILIKE $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(&search)
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(&state.db)
    .await?;

    let total_items: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blogs WHERE title ILIKE $1 OR content ILIKE $1")
            .bind(&search)
            .fetch_one(&state.db)
            .await?;

    Ok(Json(BlogListResponse {
        blogs,
        pagination: Pagination {
            page,
            limit,
            total_pages: (total_items as u64).div_ceil(u64::from(limit)) as u32,
            total_items,
        },
    }))
}

/// POST /api/v1/admin/blogs
pub async fn handle_admin_create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<BlogInput>,
) -> Result<(StatusCode, Json<BlogRow>), AppError> {
    session.require_admin()?;
    input.validate().map_err(AppError::Validation)?;

    let slug = input.slug.trim().to_string();
    if slug_taken(&state.db, &slug, None).await? {
        return Err(AppError::Conflict("Slug đã được sử dụng".to_string()));
    }

    let blog = sqlx::query_as::<_, BlogRow>(
        r#"
        INSERT INTO blogs (id, title, slug, content, excerpt, thumbnail, published, author_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(input.title.trim())
    .bind(&slug)
    .bind(&input.content)
    .bind(optional_string(input.excerpt.as_deref()))
    .bind(optional_string(input.thumbnail.as_deref()))
    .bind(input.published)
    .bind(session.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// GET /api/v1/admin/blogs/:id
pub async fn handle_admin_get(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogRow>, AppError> {
    session.require_admin()?;
    Ok(Json(fetch_blog(&state.db, id).await?))
}

/// PATCH /api/v1/admin/blogs/:id
pub async fn handle_admin_update(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(input): Json<BlogInput>,
) -> Result<Json<BlogRow>, AppError> {
    session.require_admin()?;
    input.validate().map_err(AppError::Validation)?;

    let existing = fetch_blog(&state.db, id).await?;
    let slug = input.slug.trim().to_string();
    if slug_taken(&state.db, &slug, Some(existing.id)).await? {
        return Err(AppError::Conflict("Slug đã được sử dụng".to_string()));
    }

    let thumbnail = optional_string(input.thumbnail.as_deref());
    let blog = sqlx::query_as::<_, BlogRow>(
        r#"
        UPDATE blogs
        SET title = $1, slug = $2, content = $3, excerpt = $4, thumbnail = $5,
            published = $6, updated_at = now()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(input.title.trim())
    .bind(&slug)
    .bind(&input.content)
    .bind(optional_string(input.excerpt.as_deref()))
    .bind(&thumbnail)
    .bind(input.published)
    .bind(id)
    .fetch_one(&state.db)
    .await?;

    // Replacing the thumbnail orphans the previous blob.
    if let Some(old) = existing.thumbnail {
        if thumbnail.as_deref() != Some(old.as_str()) {
            storage::delete_object_by_url(&state.s3, &state.config, &old).await?;
        }
    }

    Ok(Json(blog))
}

/// DELETE /api/v1/admin/blogs/:id
pub async fn handle_admin_delete(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    session.require_admin()?;
    let blog = fetch_blog(&state.db, id).await?;

    if let Some(thumbnail) = &blog.thumbnail {
        storage::delete_object_by_url(&state.s3, &state.config, thumbnail).await?;
    }
    sqlx::query("DELETE FROM blogs WHERE id = $1")
        .bind(blog.id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub thumbnail_url: String,
}

/// POST /api/v1/admin/blogs/thumbnail
pub async fn handle_upload_thumbnail(
    State(state): State<AppState>,
    session: AuthSession,
    mut multipart: Multipart,
) -> Result<Json<ThumbnailResponse>, AppError> {
    session.require_admin()?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid("form", format!("Dữ liệu multipart không hợp lệ: {e}")))?
    {
        if field.name() == Some("thumbnail") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid("thumbnail", e.to_string()))?;
            let mime = validate_image_upload("thumbnail", &bytes, MAX_THUMBNAIL_BYTES)
                .map_err(AppError::Validation)?;
            let url = storage::upload_object(
                &state.s3,
                &state.config,
                "images/thumbnails",
                storage::extension_for(mime),
                mime,
                bytes.to_vec(),
            )
            .await?;
            return Ok(Json(ThumbnailResponse { thumbnail_url: url }));
        }
    }

    Err(AppError::invalid("thumbnail", "Thiếu tệp ảnh"))
}

// ────────────────────────────────────────────────────────────────────────────
// Public surface
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/blogs. Published posts only.
pub async fn handle_public_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<BlogSummary>>, AppError> {
    let (_, limit, offset) = page_bounds(&query);
    let blogs = sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT id, title, slug, excerpt, thumbnail, created_at
        FROM blogs
        WHERE published = TRUE
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(blogs))
}

/// GET /api/v1/blogs/:slug returns a published post by slug. A missing or
/// unpublished slug is a 404, distinguishable from a server error.
pub async fn handle_public_get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogRow>, AppError> {
    let blog: Option<BlogRow> =
        sqlx::query_as("SELECT * FROM blogs WHERE slug = $1 AND published = TRUE")
            .bind(&slug)
            .fetch_optional(&state.db)
            .await?;
    blog.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Blog '{slug}' not found")))
}
