pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::search::handlers as search;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Search and board
        .route("/api/v1/search", post(search::handle_search))
        .route("/api/v1/search/refine", post(search::handle_refine))
        .route("/api/v1/board", get(search::handle_get_board))
        .route("/api/v1/board/jobs/status", patch(search::handle_set_status))
        .route("/api/v1/session/logout", post(search::handle_logout))
        // Tailoring
        .route("/api/v1/tailor", post(tailoring::handle_tailor))
        .route("/api/v1/tailor/analyze", post(tailoring::handle_analyze))
        .route("/api/v1/tailor/chat", post(tailoring::handle_chat))
        .with_state(state)
}
