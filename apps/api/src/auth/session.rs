//! The authenticated-session extractor. The session context is resolved once
//! per request from the `Authorization` header and passed to handlers as an
//! explicit argument, never looked up ambiently.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt::validate_token;
use crate::errors::AppError;
use crate::models::user::UserRole;
use crate::state::AppState;

/// The caller's identity and role for the current request.
///
/// Using this as a handler parameter makes authentication a precondition: the
/// request is rejected with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl AuthSession {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Admin gate for back-office handlers: 403 for any other role.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims =
            validate_token(token, &state.config.jwt_secret).map_err(|_| AppError::Unauthorized)?;

        Ok(AuthSession {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin_rejects_regular_user() {
        let session = AuthSession {
            user_id: Uuid::new_v4(),
            role: UserRole::User,
        };
        assert!(matches!(session.require_admin(), Err(AppError::Forbidden)));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_require_admin_accepts_admin() {
        let session = AuthSession {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
        };
        assert!(session.require_admin().is_ok());
    }
}
