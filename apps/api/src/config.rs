use anyhow::{bail, Context, Result};

use crate::llm_client::GROQ_API_URL;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_UPSTREAM_CONCURRENCY: usize = 12;

/// Application configuration loaded from environment variables.
///
/// The Groq credential is optional: without it the server still starts and
/// every section degrades to its fallback text at request time.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub port: u16,
    /// Process-wide cap on in-flight chat-completion calls.
    pub upstream_concurrency: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream_concurrency = match optional_env("UPSTREAM_CONCURRENCY") {
            Some(raw) => raw
                .parse::<usize>()
                .context("UPSTREAM_CONCURRENCY must be a positive integer")?,
            None => DEFAULT_UPSTREAM_CONCURRENCY,
        };
        if upstream_concurrency == 0 {
            bail!("UPSTREAM_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_api_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| GROQ_API_URL.to_string()),
            port: match optional_env("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            upstream_concurrency,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.groq_api_key.is_some()
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Config used by router and handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            groq_api_key: Some("test-key".to_string()),
            groq_api_url: GROQ_API_URL.to_string(),
            port: DEFAULT_PORT,
            upstream_concurrency: DEFAULT_UPSTREAM_CONCURRENCY,
            rust_log: "info".to_string(),
        }
    }
}
