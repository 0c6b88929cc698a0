//! Axum route handlers for the Portfolio and AI assistant APIs.

use std::sync::{Arc, Mutex};

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SynthesisBackend;
use crate::errors::AppError;
use crate::models::{EducationEntry, ExperienceEntry, PortfolioRecord, Skill};
use crate::portfolio::assistant::{merge_suggested_skills, AiAssistant, Quota, RefineKind};
use crate::portfolio::classifier::{classify, ClassificationResult};
use crate::portfolio::remote::MIN_DESCRIPTION_CHARS;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Falls back to the configured default when absent.
    pub backend: Option<SynthesisBackend>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub portfolio: PortfolioRecord,
    /// Progress labels in the order the synthesizer reported them.
    pub stages: Vec<String>,
    pub backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub text: String,
    #[serde(default)]
    pub kind: RefineKind,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectDescriptionRequest {
    pub name: String,
    #[serde(default)]
    pub technologies: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectDescriptionResponse {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<Skill>,
    pub suggested: Vec<String>,
    pub added: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/portfolios/default
///
/// The fresh record a session starts with, and what "reset" returns to.
pub async fn handle_default_portfolio() -> Json<PortfolioRecord> {
    Json(PortfolioRecord::default())
}

/// POST /api/v1/portfolios/classify
pub async fn handle_classify(
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassificationResult> {
    Json(classify(&request.prompt))
}

/// POST /api/v1/portfolios/generate
///
/// Runs the requested synthesizer and returns the record with the stage
/// labels it reported.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.prompt.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Please provide a more detailed description (at least {MIN_DESCRIPTION_CHARS} characters)."
        )));
    }

    let backend = request
        .backend
        .unwrap_or(state.config.synthesis_backend);
    let synthesizer = state.synthesizer(backend)?;

    let stages = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&stages);
    let on_progress = move |label: &str| {
        if let Ok(mut stages) = sink.lock() {
            stages.push(label.to_string());
        }
    };

    let portfolio = synthesizer
        .synthesize(&request.prompt, Some(&on_progress))
        .await?;
    info!(
        "Generated portfolio via {} backend: {}",
        synthesizer.backend(),
        portfolio.personal_info.title
    );

    let stages = stages.lock().map(|s| s.clone()).unwrap_or_default();

    Ok(Json(GenerateResponse {
        portfolio,
        stages,
        backend: synthesizer.backend(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// AI assistant handlers
// ────────────────────────────────────────────────────────────────────────────

fn assistant(state: &AppState) -> Result<&AiAssistant, AppError> {
    state.assistant.as_deref().ok_or(AppError::Unavailable)
}

/// POST /api/v1/ai/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let text = assistant(&state)?
        .refine_text(&request.text, request.kind)
        .await?;
    Ok(Json(RefineResponse { text }))
}

/// POST /api/v1/ai/project-description
pub async fn handle_project_description(
    State(state): State<AppState>,
    Json(request): Json<ProjectDescriptionRequest>,
) -> Result<Json<ProjectDescriptionResponse>, AppError> {
    let description = assistant(&state)?
        .generate_project_description(&request.name, &request.technologies)
        .await?;
    Ok(Json(ProjectDescriptionResponse { description }))
}

/// POST /api/v1/ai/suggest-skills
///
/// Suggests skills from experience and education and merges them into the
/// caller's list, skipping names already present.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if request.experience.is_empty() && request.education.is_empty() {
        return Err(AppError::Validation(
            "Add experience or education first to get skill suggestions".to_string(),
        ));
    }

    let suggested = assistant(&state)?
        .suggest_skills(&request.experience, &request.education)
        .await?;

    let mut skills = request.skills;
    let added = merge_suggested_skills(&mut skills, &suggested);

    Ok(Json(SuggestSkillsResponse {
        skills,
        suggested,
        added,
    }))
}

/// GET /api/v1/ai/quota
pub async fn handle_quota(State(state): State<AppState>) -> Result<Json<Quota>, AppError> {
    Ok(Json(assistant(&state)?.quota().await))
}
