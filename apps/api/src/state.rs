use crate::analysis::analyzer::SectionAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Section analyzer wrapping the chat-completion backend and the
    /// process-wide upstream concurrency pool.
    pub analyzer: SectionAnalyzer,
    pub config: Config,
}
