//! Axum route handlers for direct job search. No LLM involvement.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::models::{
    Category, SearchPage, SearchQuery, DEFAULT_COUNTRY, DEFAULT_RESULTS_PER_PAGE,
};
use crate::state::AppState;

/// Search parameters shared by the GET query string and the POST body.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub what: String,
    #[serde(default, rename = "where")]
    pub location: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_results_per_page", alias = "resultsPerPage")]
    pub results_per_page: u32,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_page() -> u32 {
    1
}

fn default_results_per_page() -> u32 {
    DEFAULT_RESULTS_PER_PAGE
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        SearchQuery::new(params.what, params.location)
            .with_page(params.page)
            .with_results_per_page(params.results_per_page)
            .with_country(params.country)
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

async fn run_search(state: &AppState, params: SearchParams) -> Result<Json<SearchPage>, AppError> {
    let query = SearchQuery::from(params);
    let page = state.jobs.search(&query).await?;
    Ok(Json(page))
}

/// GET /api/jobs/search?what=&where=&page=&results_per_page=
pub async fn handle_search_get(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, AppError> {
    run_search(&state, params).await
}

/// POST /api/jobs/search
pub async fn handle_search_post(
    State(state): State<AppState>,
    Json(params): Json<SearchParams>,
) -> Result<Json<SearchPage>, AppError> {
    run_search(&state, params).await
}

/// GET /api/jobs/categories
pub async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state.jobs.categories(DEFAULT_COUNTRY).await;
    Json(CategoriesResponse { categories })
}
