pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::admin;
use crate::auth;
use crate::blogs;
use crate::generation;
use crate::resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handlers::handle_register))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route(
            "/api/v1/auth/change-password",
            post(auth::handlers::handle_change_password),
        )
        .route("/api/v1/auth/me", get(auth::handlers::handle_me))
        .route(
            "/api/v1/auth/profile",
            patch(auth::handlers::handle_update_profile),
        )
        // Templates (public catalog)
        .route(
            "/api/v1/templates",
            get(resumes::handlers::handle_list_templates),
        )
        // Resumes (owner-scoped)
        .route(
            "/api/v1/resumes",
            get(resumes::handlers::handle_list).post(resumes::handlers::handle_create),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handlers::handle_get)
                .patch(resumes::handlers::handle_update)
                .delete(resumes::handlers::handle_delete),
        )
        .route(
            "/api/v1/resumes/:id/photo",
            post(resumes::handlers::handle_upload_photo)
                .delete(resumes::handlers::handle_delete_photo),
        )
        .route(
            "/api/v1/resumes/:id/render",
            get(resumes::handlers::handle_render),
        )
        // Generation
        .route(
            "/api/v1/generate/summary",
            post(generation::handlers::handle_generate_summary),
        )
        .route(
            "/api/v1/generate/work-experience",
            post(generation::handlers::handle_generate_work_experience),
        )
        .route(
            "/api/v1/generate/education",
            post(generation::handlers::handle_generate_education),
        )
        .route(
            "/api/v1/generate/skills",
            post(generation::handlers::handle_generate_skills),
        )
        .route(
            "/api/v1/generate/goals",
            post(generation::handlers::handle_generate_goals),
        )
        // Blog (public)
        .route("/api/v1/blogs", get(blogs::handlers::handle_public_list))
        .route(
            "/api/v1/blogs/:slug",
            get(blogs::handlers::handle_public_get),
        )
        // Admin: blog back office
        .route(
            "/api/v1/admin/blogs",
            get(blogs::handlers::handle_admin_list).post(blogs::handlers::handle_admin_create),
        )
        .route(
            "/api/v1/admin/blogs/thumbnail",
            post(blogs::handlers::handle_upload_thumbnail),
        )
        .route(
            "/api/v1/admin/blogs/:id",
            get(blogs::handlers::handle_admin_get)
                .patch(blogs::handlers::handle_admin_update)
                .delete(blogs::handlers::handle_admin_delete),
        )
        // Admin: dashboard
        .route(
            "/api/v1/admin/dashboard/template-usage",
            get(admin::dashboard::handle_template_usage),
        )
        // Admin: user management
        .route("/api/v1/admin/users", get(admin::users::handle_list))
        .route(
            "/api/v1/admin/users/:id",
            patch(admin::users::handle_update_role).delete(admin::users::handle_delete),
        )
        .with_state(state)
}
