//! Axum route handlers for registration, login, and the caller's own profile.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{jwt, AuthSession};
use crate::errors::AppError;
use crate::models::user::{UserProfile, UserRow};
use crate::state::AppState;
use crate::storage;
use crate::validation::{
    optional_string, validate_image_upload, ChangePasswordInput, LoginInput, RegisterInput,
    MAX_AVATAR_BYTES,
};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

pub async fn fetch_user(pool: &PgPool, user_id: Uuid) -> Result<UserRow, AppError> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    input.validate().map_err(AppError::Validation)?;
    let email = input.email.trim().to_lowercase();

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email đã được sử dụng".to_string()));
    }

    let password_hash = hash_password(&input.password)?;
    let user = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, email, password_hash, first_name, last_name, role)
        VALUES ($1, $2, $3, $4, $5, 'USER')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&password_hash)
    .bind(optional_string(input.first_name.as_deref()))
    .bind(optional_string(input.last_name.as_deref()))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = input.email.trim().to_lowercase();
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;

    // Same rejection for an unknown email and a wrong password.
    let user = user.ok_or(AppError::Unauthorized)?;
    if !verify_password(&input.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let token = jwt::generate_token(user.id, user.role, &state.config.jwt_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token generation failed: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/change-password
pub async fn handle_change_password(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<ChangePasswordInput>,
) -> Result<StatusCode, AppError> {
    input.validate().map_err(AppError::Validation)?;

    let user = fetch_user(&state.db, session.user_id).await?;
    if !verify_password(&input.current_password, &user.password_hash)? {
        return Err(AppError::invalid(
            "current_password",
            "Mật khẩu hiện tại không đúng",
        ));
    }

    let password_hash = hash_password(&input.new_password)?;
    sqlx::query("UPDATE users SET password_hash = $1, updated_at = now() WHERE id = $2")
        .bind(&password_hash)
        .bind(user.id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<UserProfile>, AppError> {
    let user = fetch_user(&state.db, session.user_id).await?;
    Ok(Json(user.into()))
}

/// PATCH /api/v1/auth/profile
///
/// Multipart form: optional `first_name` / `last_name` text fields and an
/// optional `avatar` image. The avatar ceiling is checked before any transfer
/// to blob storage; the previous avatar blob is deleted after the replacement
/// is stored.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    session: AuthSession,
    mut multipart: Multipart,
) -> Result<Json<UserProfile>, AppError> {
    let mut user = fetch_user(&state.db, session.user_id).await?;

    let mut avatar: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid("form", format!("Dữ liệu multipart không hợp lệ: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "first_name" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::invalid("first_name", e.to_string()))?;
                user.first_name = optional_string(Some(&value));
            }
            "last_name" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::invalid("last_name", e.to_string()))?;
                user.last_name = optional_string(Some(&value));
            }
            "avatar" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::invalid("avatar", e.to_string()))?;
                avatar = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    if let Some(bytes) = avatar {
        let content_type = validate_image_upload("avatar", &bytes, MAX_AVATAR_BYTES)
            .map_err(AppError::Validation)?;
        let url = storage::upload_object(
            &state.s3,
            &state.config,
            "images/avatars",
            storage::extension_for(content_type),
            content_type,
            bytes,
        )
        .await?;
        if let Some(old) = user.avatar_url.replace(url) {
            storage::delete_object_by_url(&state.s3, &state.config, &old).await?;
        }
    }

    let updated = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET first_name = $1, last_name = $2, avatar_url = $3, updated_at = now()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.avatar_url)
    .bind(user.id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(updated.into()))
}
