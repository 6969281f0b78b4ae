use std::sync::Arc;

use crate::chat::orchestrator::ChatOrchestrator;
use crate::jobs::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main` from `Config`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Job listings backend. Default: AdzunaClient.
    pub jobs: Arc<dyn JobSource>,
    /// Chat turn pipeline, sharing the same job source.
    pub chat: Arc<ChatOrchestrator>,
}
