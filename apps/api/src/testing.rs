//! In-crate fakes for the two vendor seams.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::jobs::models::{Category, JobRecord, SearchPage, SearchQuery, SearchResult};
use crate::jobs::JobSource;
use crate::llm_client::{LlmBackend, LlmError};

/// Replays canned replies in order; the last one repeats. `None` is a vendor failure.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn sequence<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::sequence([Some(reply)])
    }

    pub fn failing() -> Self {
        Self::sequence([None::<String>])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmBackend for ScriptedLlm {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn generate_text(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front().flatten()
        } else {
            replies.front().cloned().flatten()
        };

        reply.ok_or(LlmError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

/// Answers every search with the same result and remembers the queries.
pub struct StaticJobSource {
    result: SearchResult,
    categories: Vec<Category>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StaticJobSource {
    pub fn new(result: SearchResult) -> Self {
        Self {
            result,
            categories: Vec::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn search(&self, query: &SearchQuery) -> SearchResult {
        self.queries.lock().unwrap().push(query.clone());
        self.result.clone()
    }

    async fn categories(&self, _country: &str) -> Vec<Category> {
        self.categories.clone()
    }
}

pub fn sample_job(n: usize) -> JobRecord {
    JobRecord {
        id: format!("job-{n}"),
        title: format!("Security Engineer {n}"),
        company: format!("Company {n}"),
        location: "Remote".to_string(),
        description_excerpt: "Protect things....".to_string(),
        salary_min: Some(90_000.0 + n as f64),
        salary_max: Some(130_000.0),
        contract_type: Some("permanent".to_string()),
        created_at: Some("2025-02-01T00:00:00Z".to_string()),
        apply_url: Some(format!("https://example.com/jobs/{n}")),
        category: "IT Jobs".to_string(),
    }
}

pub fn sample_page(jobs: usize, count: u64) -> SearchPage {
    SearchPage {
        jobs: (0..jobs).map(sample_job).collect(),
        count,
        page: 1,
        results_per_page: 10,
        total_pages: count / 10 + 1,
    }
}
