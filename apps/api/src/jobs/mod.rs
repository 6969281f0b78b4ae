// Job listings: the Adzuna client, its normalized data model, and the
// pass-through search endpoints. Chat-driven search goes through `chat`.

pub mod adzuna;
pub mod handlers;
pub mod models;

use async_trait::async_trait;

use crate::jobs::models::{Category, SearchQuery, SearchResult};

/// Source of job listings. `AppState` carries an `Arc<dyn JobSource>` so the
/// orchestrator and routes can run against a fake.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// One vendor request. Failures come back as the `Err` variant, never a panic.
    async fn search(&self, query: &SearchQuery) -> SearchResult;

    /// Vendor category list. Empty on any failure.
    async fn categories(&self, country: &str) -> Vec<Category>;
}
