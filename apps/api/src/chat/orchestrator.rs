//! Chat orchestrator — one conversational turn:
//! interpret → (job search?) search → (any results?) summarize → reply.
//!
//! Every path ends in a `ChatReply`. Vendor failures become friendly text,
//! never an HTTP error.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::chat::interpreter::QueryInterpreter;
use crate::chat::prompts::INTRODUCTION_REPLY;
use crate::chat::summarizer::ResultSummarizer;
use crate::jobs::models::{JobRecord, SearchQuery};
use crate::jobs::JobSource;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub jobs: Vec<JobRecord>,
    #[serde(rename = "jobCount")]
    pub job_count: u64,
}

impl ChatReply {
    fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct ChatOrchestrator {
    interpreter: QueryInterpreter,
    jobs: Arc<dyn JobSource>,
    /// When absent, replies use the templated "Found N jobs" sentence.
    summarizer: Option<ResultSummarizer>,
}

impl ChatOrchestrator {
    pub fn new(interpreter: QueryInterpreter, jobs: Arc<dyn JobSource>) -> Self {
        Self {
            interpreter,
            jobs,
            summarizer: None,
        }
    }

    pub fn with_summarizer(mut self, summarizer: ResultSummarizer) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub async fn handle(&self, message: &str) -> ChatReply {
        let intent = match self.interpreter.parse_intent(message).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!("Could not interpret chat message: {e}");
                return ChatReply::text(apology_reply(&e.to_string()));
            }
        };

        if !intent.is_job_search {
            return ChatReply::text(INTRODUCTION_REPLY);
        }

        let query = SearchQuery::new(intent.what.as_str(), intent.location.as_str());
        let page = match self.jobs.search(&query).await {
            Ok(page) => page,
            Err(e) => return ChatReply::text(search_failed_reply(&e.to_string())),
        };

        if page.jobs.is_empty() {
            return ChatReply::text(no_results_reply(&intent.what, &intent.location));
        }

        info!(
            what = %intent.what,
            location = %intent.location,
            "Chat search matched {} jobs",
            page.count
        );

        let response = match &self.summarizer {
            Some(summarizer) => summarizer
                .summarize(&intent.what, &intent.location, &page.jobs, page.count)
                .await
                .unwrap_or_else(|e| {
                    warn!("Summarizer failed, using templated reply: {e}");
                    found_reply(page.count, &intent.what, &intent.location)
                }),
            None => found_reply(page.count, &intent.what, &intent.location),
        };

        ChatReply {
            response,
            jobs: page.jobs,
            job_count: page.count,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reply templates
// ────────────────────────────────────────────────────────────────────────────

fn apology_reply(detail: &str) -> String {
    format!(
        "Sorry, I had trouble understanding that request ({detail}). \
         Could you try rephrasing it, e.g. \"Find Python developer jobs in Toronto\"?"
    )
}

fn search_failed_reply(detail: &str) -> String {
    format!(
        "Sorry, I ran into a problem while searching for jobs: {detail}. \
         Please try again in a moment."
    )
}

fn no_results_reply(what: &str, location: &str) -> String {
    format!(
        "I couldn't find any jobs{}{}. Try broader terms or a different location!",
        for_clause(what),
        in_clause(location)
    )
}

fn found_reply(count: u64, what: &str, location: &str) -> String {
    format!(
        "Found {count} jobs{}{}, here are the top results:",
        for_clause(what),
        in_clause(location)
    )
}

fn for_clause(what: &str) -> String {
    if what.is_empty() {
        String::new()
    } else {
        format!(" for \"{what}\"")
    }
}

fn in_clause(location: &str) -> String {
    if location.is_empty() {
        String::new()
    } else {
        format!(" in {location}")
    }
}
