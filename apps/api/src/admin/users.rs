//! Admin user management. Two invariants guard the back office: a user may
//! not change their own role, and the last remaining administrator may never
//! be demoted or deleted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::handlers::fetch_user;
use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::models::user::{UserProfile, UserRole, UserRow};
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserListItem {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub resume_count: i64,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserListItem>,
    pub pagination: ListPagination,
}

#[derive(Debug, Serialize)]
pub struct ListPagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_items: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub role: UserRole,
}

async fn admin_count(pool: &PgPool) -> Result<i64, AppError> {
    Ok(
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'ADMIN'")
            .fetch_one(pool)
            .await?,
    )
}

/// GET /api/v1/admin/users
pub async fn handle_list(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<UserListQuery>,
) -> Result<Json<UserListResponse>, AppError> {
    session.require_admin()?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let offset = i64::from((page - 1) * limit);
    let search = format!("%{}%", query.search.as_deref().unwrap_or_default());

    let rows: Vec<UserRow> = sqlx::query_as(
        r#"
        SELECT * FROM users
        WHERE email ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(&search)
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(&state.db)
    .await?;

    let counts: Vec<(Uuid, i64)> =
        sqlx::query_as("SELECT user_id, COUNT(*) FROM resumes GROUP BY user_id")
            .fetch_all(&state.db)
            .await?;

    let users = rows
        .into_iter()
        .map(|user| {
            let resume_count = counts
                .iter()
                .find(|(user_id, _)| *user_id == user.id)
                .map(|(_, count)| *count)
                .unwrap_or(0);
            UserListItem {
                profile: user.into(),
                resume_count,
            }
        })
        .collect();

    let total_items: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE email ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1",
    )
    .bind(&search)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(UserListResponse {
        users,
        pagination: ListPagination {
            page,
            limit,
            total_pages: (total_items as u64).div_ceil(u64::from(limit)) as u32,
            total_items,
        },
    }))
}

/// PATCH /api/v1/admin/users/:id (role update).
pub async fn handle_update_role(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, AppError> {
    session.require_admin()?;

    let user = fetch_user(&state.db, id).await?;

    if session.user_id == id && request.role != session.role {
        return Err(AppError::Conflict(
            "Không thể thay đổi quyền của chính mình".to_string(),
        ));
    }

    // Demoting the only administrator would lock the back office.
    if user.role == UserRole::Admin
        && request.role != UserRole::Admin
        && admin_count(&state.db).await? <= 1
    {
        return Err(AppError::Conflict(
            "Không thể hạ cấp quản trị viên cuối cùng".to_string(),
        ));
    }

    let updated = sqlx::query_as::<_, UserRow>(
        "UPDATE users SET role = $1, updated_at = now() WHERE id = $2 RETURNING *",
    )
    .bind(request.role)
    .bind(id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/v1/admin/users/:id
///
/// Deletion cascades to the user's resumes; their photo blobs are removed
/// first so nothing is orphaned in storage.
pub async fn handle_delete(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    session.require_admin()?;

    let user = fetch_user(&state.db, id).await?;

    if user.role == UserRole::Admin && admin_count(&state.db).await? <= 1 {
        return Err(AppError::Conflict(
            "Không thể xóa quản trị viên cuối cùng".to_string(),
        ));
    }

    let photo_urls: Vec<(String,)> = sqlx::query_as(
        "SELECT photo_url FROM resumes WHERE user_id = $1 AND photo_url IS NOT NULL",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await?;
    for (photo_url,) in &photo_urls {
        storage::delete_object_by_url(&state.s3, &state.config, photo_url).await?;
    }
    if let Some(avatar_url) = &user.avatar_url {
        storage::delete_object_by_url(&state.s3, &state.config, avatar_url).await?;
    }

    // resumes go with the user via ON DELETE CASCADE
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
