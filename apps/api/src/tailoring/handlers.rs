//! Axum route handlers for tailoring, re-analysis and chat.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::tailoring::{AnalyzeResult, TailorResult};
use crate::state::AppState;
use crate::tailoring::service::{
    run_analysis, run_chat, run_tailoring, AnalyzeRequest, ChatRequest, ChatResponse,
    TailorRequest,
};

/// POST /api/v1/tailor
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResult>, AppError> {
    let result = run_tailoring(&state.session, state.tailoring.as_ref(), request).await?;
    Ok(Json(result))
}

/// POST /api/v1/tailor/analyze
///
/// Re-scores an edited resume against the job without re-tailoring it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResult>, AppError> {
    let result = run_analysis(&state.session, state.tailoring.as_ref(), request).await?;
    Ok(Json(result))
}

/// POST /api/v1/tailor/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = run_chat(&state.session, state.tailoring.as_ref(), request).await?;
    Ok(Json(response))
}
