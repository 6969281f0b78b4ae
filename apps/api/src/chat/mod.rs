// Conversational job search: LLM intent parsing, Adzuna search, reply shaping.
// All LLM calls go through llm_client — no direct vendor calls here.

pub mod handlers;
pub mod interpreter;
pub mod orchestrator;
pub mod prompts;
pub mod summarizer;
