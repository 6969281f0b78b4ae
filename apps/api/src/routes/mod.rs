pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/chat", post(chat::handle_chat))
        // Job search API
        .route(
            "/api/jobs/search",
            get(jobs::handle_search_get).post(jobs::handle_search_post),
        )
        .route("/api/jobs/categories", get(jobs::handle_categories))
        .with_state(state)
}
