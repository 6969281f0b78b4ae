use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner listing the enabled features.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Job Search AI API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "features": ["chat", "job_search", "adzuna_integration"]
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
