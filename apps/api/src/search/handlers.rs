//! Axum route handlers for search, refinement, the board and the session.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::alias::alias_email;
use crate::board::store::{AppStore, SearchPhase, StoreEvent};
use crate::errors::AppError;
use crate::models::board::{ApplicationStatus, CompanyJobs};
use crate::search::service::{run_refinement, run_search, RefineRequest, SearchRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A board entry plus the mailbox alias to apply with, when one is configured.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    #[serde(flatten)]
    pub company: CompanyJobs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub phase: SearchPhase,
    pub searching: bool,
    pub search_completed: bool,
    pub search_error: Option<String>,
    pub companies: Vec<CompanyView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub from_cache: bool,
    pub applied: bool,
    pub companies: Vec<CompanyView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineResponse {
    pub applied: bool,
    pub company: CompanyView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    pub job_id: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeResponse {
    /// Jobs whose status changed. Zero is not an error.
    pub updated: usize,
}

fn company_view(state: &AppState, company: CompanyJobs) -> CompanyView {
    let alias_email = state
        .config
        .user_email
        .as_deref()
        .and_then(|email| alias_email(email, &company.alias_identifier));
    CompanyView {
        company,
        alias_email,
    }
}

fn board_response(state: &AppState, store: &AppStore) -> BoardResponse {
    BoardResponse {
        phase: store.phase(),
        searching: store.is_searching(),
        search_completed: store.search_completed(),
        search_error: store.search_error().map(str::to_string),
        companies: store
            .board()
            .iter()
            .cloned()
            .map(|c| company_view(state, c))
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let outcome = run_search(
        &state.session,
        state.job_search.as_ref(),
        request,
        Utc::now(),
    )
    .await?;

    Ok(Json(SearchResponse {
        from_cache: outcome.from_cache,
        applied: outcome.applied,
        companies: outcome
            .board
            .into_iter()
            .map(|c| company_view(&state, c))
            .collect(),
    }))
}

/// POST /api/v1/search/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let outcome = run_refinement(&state.session, state.refinement.as_ref(), request).await?;
    Ok(Json(RefineResponse {
        applied: outcome.applied,
        company: company_view(&state, outcome.company),
    }))
}

/// GET /api/v1/board
pub async fn handle_get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let session = state.session.lock().await;
    Json(board_response(&state, &session.store))
}

/// PATCH /api/v1/board/jobs/status
///
/// The job id is an application link, so it travels in the body.
pub async fn handle_set_status(
    State(state): State<AppState>,
    Json(request): Json<StatusChangeRequest>,
) -> Json<StatusChangeResponse> {
    let mut session = state.session.lock().await;
    let updated = session.store.jobs_with_id(&request.job_id);
    let _ = session.store.apply(StoreEvent::StatusChanged {
        job_id: request.job_id,
        status: request.status,
    });
    Json(StatusChangeResponse { updated })
}

/// POST /api/v1/session/logout
///
/// Clears the board and resumes. The search cache lives as long as the process.
pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    let mut session = state.session.lock().await;
    let _ = session.store.apply(StoreEvent::LoggedOut);
    if session.cache.is_empty() {
        info!("Session logged out");
    } else {
        info!("Session logged out; keeping {} cached searches", session.cache.len());
    }
    StatusCode::NO_CONTENT
}
