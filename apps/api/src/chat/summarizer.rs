//! Result summarizer — asks the LLM for a short prose overview of a search.

use std::sync::Arc;

use serde::Serialize;

use crate::chat::prompts::SUMMARY_PROMPT_TEMPLATE;
use crate::jobs::models::JobRecord;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{LlmBackend, LlmError, MAX_TOKENS};

/// Only this many jobs are shown to the LLM, however many came back.
pub const MAX_SUMMARY_JOBS: usize = 10;

#[derive(Debug, Serialize)]
struct JobDigest<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
}

impl<'a> From<&'a JobRecord> for JobDigest<'a> {
    fn from(job: &'a JobRecord) -> Self {
        Self {
            title: &job.title,
            company: &job.company,
            location: &job.location,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
        }
    }
}

#[derive(Clone)]
pub struct ResultSummarizer {
    llm: Arc<dyn LlmBackend>,
}

impl ResultSummarizer {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm }
    }

    pub async fn summarize(
        &self,
        what: &str,
        location: &str,
        jobs: &[JobRecord],
        total_count: u64,
    ) -> Result<String, LlmError> {
        let prompt = build_summary_prompt(what, location, jobs, total_count)?;
        let text = self.llm.generate_text(&prompt, MAX_TOKENS).await?;
        Ok(text.trim().to_string())
    }
}

fn build_summary_prompt(
    what: &str,
    location: &str,
    jobs: &[JobRecord],
    total_count: u64,
) -> Result<String, LlmError> {
    let digests: Vec<JobDigest<'_>> = jobs
        .iter()
        .take(MAX_SUMMARY_JOBS)
        .map(JobDigest::from)
        .collect();
    let top_results = serde_json::to_string_pretty(&digests)?;
    let location = if location.is_empty() {
        "any location"
    } else {
        location
    };

    Ok(fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("what", what),
            ("where", location),
            ("total_count", &total_count.to_string()),
            ("top_results", &top_results),
        ],
    ))
}
