// Business analysis: twelve fixed sections generated in parallel.
// All upstream calls go through llm_client via the ChatCompletion trait.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod prompts;
pub mod sections;
