//! Adzuna job search client.
//!
//! One GET per search, 10 second timeout, no retries. Every failure is folded
//! into `SearchError` so callers never see a transport error directly.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::jobs::models::{
    Category, SearchError, SearchQuery, SearchResult, VendorCategoriesResponse,
    VendorSearchResponse,
};
use crate::jobs::JobSource;

pub const DEFAULT_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
struct Credentials {
    app_id: String,
    app_key: String,
}

#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl AdzunaClient {
    pub fn new(app_id: Option<String>, app_key: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(app_id, app_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(
        app_id: Option<String>,
        app_key: Option<String>,
        base_url: String,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(app_id, app_key, base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        app_id: Option<String>,
        app_key: Option<String>,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let credentials = match (app_id, app_key) {
            (Some(app_id), Some(app_key)) => Some(Credentials { app_id, app_key }),
            _ => {
                warn!("Adzuna credentials not configured; job search will always fail");
                None
            }
        };

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            credentials,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    async fn fetch_page(
        &self,
        credentials: &Credentials,
        query: &SearchQuery,
    ) -> Result<VendorSearchResponse, SearchError> {
        let url = format!("{}/{}/search/{}", self.base_url, query.country, query.page);

        let mut params: Vec<(&str, String)> = vec![
            ("app_id", credentials.app_id.clone()),
            ("app_key", credentials.app_key.clone()),
            ("results_per_page", query.results_per_page.to_string()),
        ];
        // Empty filters over-restrict the vendor search, so leave them out entirely.
        if !query.what.is_empty() {
            params.push(("what", query.what.clone()));
        }
        if !query.location.is_empty() {
            params.push(("where", query.location.clone()));
        }

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::VendorTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::VendorHttp {
                status: status.as_u16(),
            });
        }

        response
            .json::<VendorSearchResponse>()
            .await
            .map_err(|e| SearchError::VendorTransport(e.to_string()))
    }

    async fn fetch_categories(
        &self,
        credentials: &Credentials,
        country: &str,
    ) -> Result<Vec<Category>, reqwest::Error> {
        let url = format!("{}/{}/categories", self.base_url, country);
        let body: VendorCategoriesResponse = self
            .client
            .get(url)
            .query(&[
                ("app_id", credentials.app_id.as_str()),
                ("app_key", credentials.app_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.results)
    }
}

#[async_trait]
impl JobSource for AdzunaClient {
    async fn search(&self, query: &SearchQuery) -> SearchResult {
        let Some(credentials) = &self.credentials else {
            return Err(SearchError::CredentialsMissing);
        };

        let page = self.fetch_page(credentials, query).await;
        match &page {
            Ok(body) => info!(
                what = %query.what,
                location = %query.location,
                page = query.page,
                "Adzuna search returned {} of {} jobs",
                body.results.len(),
                body.count
            ),
            Err(e) => warn!(what = %query.what, location = %query.location, "Adzuna search failed: {e}"),
        }

        page.map(|body| body.into_page(query))
    }

    async fn categories(&self, country: &str) -> Vec<Category> {
        let Some(credentials) = &self.credentials else {
            warn!("Skipping category fetch: Adzuna credentials not configured");
            return Vec::new();
        };

        match self.fetch_categories(credentials, country).await {
            Ok(categories) => categories,
            Err(e) => {
                warn!("Error fetching categories: {e}");
                Vec::new()
            }
        }
    }
}
