//! Section Analyzer — one chat-completion call per section.
//!
//! Never fails: any upstream problem becomes the section's fallback sentence.
//! Calls are gated by a process-wide semaphore so concurrent requests cannot
//! open an unbounded number of upstream connections.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::analysis::models::{BusinessProfile, ContentSource};
use crate::analysis::prompts::build_section_prompt;
use crate::analysis::sections::SectionSpec;
use crate::llm_client::prompts::analyst_system_prompt;
use crate::llm_client::{ChatCompletion, ChatRequest, LlmError};

/// Raw result of one section call, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Generated(String),
    Fallback(String),
}

impl SectionOutcome {
    pub fn source(&self) -> ContentSource {
        match self {
            SectionOutcome::Generated(_) => ContentSource::Generated,
            SectionOutcome::Fallback(_) => ContentSource::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SectionOutcome::Generated(text) | SectionOutcome::Fallback(text) => text,
        }
    }
}

/// The text returned in place of an analysis when the upstream call fails.
pub fn fallback_message(title: &str) -> String {
    format!("Unable to generate {title} analysis at this time. Please try again later.")
}

#[derive(Clone)]
pub struct SectionAnalyzer {
    llm: Arc<dyn ChatCompletion>,
    permits: Arc<Semaphore>,
}

impl SectionAnalyzer {
    pub fn new(llm: Arc<dyn ChatCompletion>, max_concurrent: usize) -> Self {
        Self {
            llm,
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    pub async fn analyze(&self, profile: &BusinessProfile, section: &SectionSpec) -> SectionOutcome {
        match self.request(profile, section).await {
            Ok(content) => {
                info!(
                    section = section.key,
                    "{} analysis generated ({} chars)",
                    section.title,
                    content.chars().count()
                );
                SectionOutcome::Generated(content)
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!(section = section.key, "{} analysis timed out", section.title);
                } else {
                    warn!(section = section.key, "Error in {}: {e}", section.title);
                }
                SectionOutcome::Fallback(fallback_message(section.title))
            }
        }
    }

    async fn request(
        &self,
        profile: &BusinessProfile,
        section: &SectionSpec,
    ) -> Result<String, SectionError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SectionError::PoolClosed)?;

        info!(
            section = section.key,
            prompt_type = section.prompt_type.as_str(),
            "Generating {} analysis...",
            section.title
        );

        let request = ChatRequest::new(
            analyst_system_prompt(section.title),
            build_section_prompt(profile, section.prompt_type),
        );

        Ok(self.llm.complete(&request).await?)
    }
}

#[derive(Debug, thiserror::Error)]
enum SectionError {
    #[error("upstream concurrency pool closed")]
    PoolClosed,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl SectionError {
    fn is_timeout(&self) -> bool {
        matches!(self, SectionError::Llm(e) if e.is_timeout())
    }
}
