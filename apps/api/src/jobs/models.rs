use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_COUNTRY: &str = "ca";
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;
/// Hard cap imposed by the vendor.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;
pub const DESCRIPTION_EXCERPT_CHARS: usize = 500;
pub const TRUNCATION_MARKER: &str = "...";

/// Placeholder for vendor fields that came back empty.
const UNKNOWN: &str = "Unknown";

/// One outbound search. Construction normalizes paging into the vendor's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub what: String,
    pub location: String,
    pub country: String,
    pub page: u32,
    pub results_per_page: u32,
}

impl SearchQuery {
    pub fn new(what: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            location: location.into(),
            country: DEFAULT_COUNTRY.to_string(),
            page: 1,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_results_per_page(mut self, results_per_page: u32) -> Self {
        self.results_per_page = results_per_page.clamp(1, MAX_RESULTS_PER_PAGE);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

/// A vendor job listing, normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "description")]
    pub description_excerpt: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    #[serde(rename = "created")]
    pub created_at: Option<String>,
    #[serde(rename = "redirect_url")]
    pub apply_url: Option<String>,
    pub category: String,
}

/// Successful search: one page of jobs plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub jobs: Vec<JobRecord>,
    /// Total matches reported by the vendor, across all pages.
    pub count: u64,
    pub page: u32,
    pub results_per_page: u32,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    CredentialsMissing,
    VendorHttpError,
    VendorTransportError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Adzuna API credentials not configured")]
    CredentialsMissing,

    #[error("Adzuna API error: {status}")]
    VendorHttp { status: u16 },

    #[error("Error fetching jobs: {0}")]
    VendorTransport(String),
}

impl SearchError {
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            SearchError::CredentialsMissing => SearchErrorKind::CredentialsMissing,
            SearchError::VendorHttp { .. } => SearchErrorKind::VendorHttpError,
            SearchError::VendorTransport(_) => SearchErrorKind::VendorTransportError,
        }
    }
}

pub type SearchResult = Result<SearchPage, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub label: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Vendor payload (Adzuna) and its mapping
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct VendorSearchResponse {
    #[serde(default)]
    pub results: Vec<VendorJob>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VendorJob {
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub company: Option<VendorDisplayName>,
    pub location: Option<VendorDisplayName>,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_type: Option<String>,
    pub created: Option<String>,
    pub redirect_url: Option<String>,
    pub category: Option<VendorCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VendorDisplayName {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VendorCategory {
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VendorCategoriesResponse {
    #[serde(default)]
    pub results: Vec<Category>,
}

impl From<VendorJob> for JobRecord {
    fn from(job: VendorJob) -> Self {
        let id = match job.id {
            Some(serde_json::Value::String(id)) => id,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        JobRecord {
            id,
            title: job.title.unwrap_or_else(|| UNKNOWN.to_string()),
            company: or_unknown(job.company.and_then(|c| c.display_name)),
            location: or_unknown(job.location.and_then(|l| l.display_name)),
            description_excerpt: excerpt(job.description.as_deref().unwrap_or_default()),
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            contract_type: job.contract_type,
            created_at: job.created,
            apply_url: job.redirect_url,
            category: or_unknown(job.category.and_then(|c| c.label)),
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

/// First 500 characters followed by the marker. The marker is appended even
/// when nothing was cut, so every excerpt ends with it.
pub fn excerpt(description: &str) -> String {
    let mut out: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

/// Integer division plus one: a single full page reports two pages.
pub fn total_pages(count: u64, results_per_page: u32) -> u64 {
    count / u64::from(results_per_page.max(1)) + 1
}

impl VendorSearchResponse {
    pub(crate) fn into_page(self, query: &SearchQuery) -> SearchPage {
        SearchPage {
            jobs: self.results.into_iter().map(JobRecord::from).collect(),
            count: self.count,
            page: query.page,
            results_per_page: query.results_per_page,
            total_pages: total_pages(self.count, query.results_per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_per_page_is_clamped_to_vendor_cap() {
        let query = SearchQuery::new("rust", "").with_results_per_page(80);
        assert_eq!(query.results_per_page, 50);

        let query = SearchQuery::new("rust", "").with_results_per_page(0);
        assert_eq!(query.results_per_page, 1);

        let query = SearchQuery::new("rust", "").with_results_per_page(25);
        assert_eq!(query.results_per_page, 25);
    }

    #[test]
    fn test_page_is_at_least_one() {
        assert_eq!(SearchQuery::new("", "").with_page(0).page, 1);
        assert_eq!(SearchQuery::new("", "").with_page(4).page, 4);
    }

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("nurse", "Halifax");
        assert_eq!(query.country, "ca");
        assert_eq!(query.page, 1);
        assert_eq!(query.results_per_page, 10);
    }

    #[test]
    fn test_excerpt_always_ends_with_marker() {
        assert_eq!(excerpt(""), "...");
        assert_eq!(excerpt("Short role."), "Short role....");

        let long = "x".repeat(800);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), 503);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let accented = "é".repeat(600);
        let cut = excerpt(&accented);
        assert_eq!(cut.chars().count(), 503);
        assert!(cut.starts_with("éé"));
    }

    #[test]
    fn test_total_pages_is_floor_plus_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(9, 10), 1);
        assert_eq!(total_pages(10, 10), 2);
        assert_eq!(total_pages(101, 50), 3);
        for count in [0_u64, 1, 49, 50, 51, 999] {
            for per_page in [1_u32, 7, 10, 50] {
                assert_eq!(
                    total_pages(count, per_page),
                    count / u64::from(per_page) + 1
                );
            }
        }
    }

    #[test]
    fn test_vendor_job_maps_nested_fields() {
        let json = r#"{
            "id": "4021357812",
            "title": "Senior Rust Engineer",
            "company": {"display_name": "Northwind"},
            "location": {"display_name": "Toronto, Ontario", "area": ["Canada", "Ontario"]},
            "description": "Build things.",
            "salary_min": 120000,
            "salary_max": 150000.5,
            "contract_type": "permanent",
            "created": "2025-01-15T10:30:00Z",
            "redirect_url": "https://www.adzuna.ca/land/ad/4021357812",
            "category": {"tag": "it-jobs", "label": "IT Jobs"}
        }"#;

        let job: JobRecord = serde_json::from_str::<VendorJob>(json).unwrap().into();
        assert_eq!(job.id, "4021357812");
        assert_eq!(job.company, "Northwind");
        assert_eq!(job.location, "Toronto, Ontario");
        assert_eq!(job.description_excerpt, "Build things....");
        assert_eq!(job.salary_min, Some(120000.0));
        assert_eq!(job.salary_max, Some(150000.5));
        assert_eq!(job.category, "IT Jobs");
        assert_eq!(
            job.apply_url.as_deref(),
            Some("https://www.adzuna.ca/land/ad/4021357812")
        );
    }

    #[test]
    fn test_vendor_job_missing_fields_default() {
        let job: JobRecord = serde_json::from_str::<VendorJob>(r#"{"id": 77}"#)
            .unwrap()
            .into();
        assert_eq!(job.id, "77");
        assert_eq!(job.title, "Unknown");
        assert_eq!(job.company, "Unknown");
        assert_eq!(job.location, "Unknown");
        assert_eq!(job.category, "Unknown");
        assert_eq!(job.description_excerpt, "...");
        assert!(job.salary_min.is_none());
        assert!(job.apply_url.is_none());
    }

    #[test]
    fn test_job_record_serializes_with_wire_names() {
        let job: JobRecord = serde_json::from_str::<VendorJob>(r#"{"id": "1"}"#)
            .unwrap()
            .into();
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("description").is_some());
        assert!(value.get("redirect_url").is_some());
        assert!(value.get("created").is_some());
        assert!(value.get("description_excerpt").is_none());
    }

    #[test]
    fn test_search_error_messages_and_kinds() {
        assert_eq!(
            SearchError::VendorHttp { status: 403 }.to_string(),
            "Adzuna API error: 403"
        );
        assert_eq!(
            SearchError::CredentialsMissing.kind(),
            SearchErrorKind::CredentialsMissing
        );
        assert_eq!(
            SearchError::VendorTransport("timed out".into()).to_string(),
            "Error fetching jobs: timed out"
        );
    }
}
