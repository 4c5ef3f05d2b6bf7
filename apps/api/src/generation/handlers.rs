//! Axum route handlers for the five generators. Every handler takes the
//! session extractor, so an unauthenticated call fails before any prompt is
//! built or any external call is made.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::AuthSession;
use crate::document::{Education, WorkExperience};
use crate::errors::AppError;
use crate::generation::generator::{
    generate_education, generate_goals, generate_skills, generate_summary,
    generate_work_experience, GeneratedGoals,
};
use crate::state::AppState;
use crate::validation::{
    GenerateEducationInput, GenerateGoalsInput, GenerateSkillsInput, GenerateSummaryInput,
    GenerateWorkExperienceInput,
};

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/generate/summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<GenerateSummaryInput>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = generate_summary(state.llm.as_ref(), input).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/generate/work-experience
pub async fn handle_generate_work_experience(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<GenerateWorkExperienceInput>,
) -> Result<Json<WorkExperience>, AppError> {
    let entry = generate_work_experience(state.llm.as_ref(), input).await?;
    Ok(Json(entry))
}

/// POST /api/v1/generate/education
pub async fn handle_generate_education(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<GenerateEducationInput>,
) -> Result<Json<Education>, AppError> {
    let entry = generate_education(state.llm.as_ref(), input).await?;
    Ok(Json(entry))
}

/// POST /api/v1/generate/skills
pub async fn handle_generate_skills(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<GenerateSkillsInput>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills = generate_skills(state.llm.as_ref(), input).await?;
    Ok(Json(SkillsResponse { skills }))
}

/// POST /api/v1/generate/goals
pub async fn handle_generate_goals(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<GenerateGoalsInput>,
) -> Result<Json<GeneratedGoals>, AppError> {
    let goals = generate_goals(state.llm.as_ref(), input).await?;
    Ok(Json(goals))
}
