//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Groq API directly.
//! Analysis code talks to the `ChatCompletion` trait; `LlmClient` is the
//! production implementation.
//!
//! Model and sampling parameters are hardcoded here to prevent drift.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for every section analysis.
pub const MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1500;
/// Upper bound on a single upstream call, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_timeout())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI-compatible chat-completion schema)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Builds a request with the fixed model and sampling parameters.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }

    pub fn system_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "system")
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first completion choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait seam
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can turn a chat request into the first choice's text.
///
/// Carried in `AppState` as `Arc<dyn ChatCompletion>` so tests can swap in a
/// scripted backend without a network.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// HTTP client for the Groq chat-completion endpoint. No retries: a failed
/// call is reported once and the caller decides what to do with it.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Result<Self, LlmError> {
        Self::with_timeout(api_url, api_key, REQUEST_TIMEOUT)
    }

    /// Same as [`LlmClient::new`] with a custom per-call bound.
    pub fn with_timeout(
        api_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url: api_url.into(),
            api_key,
        })
    }

    /// Makes a raw call to the chat-completion API, returning the full response.
    pub async fn call(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GroqError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self.call(request).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Serves a fake chat-completion endpoint on an ephemeral port and returns
    /// its URL plus every (authorization header, body) pair it received.
    async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(seen): State<Captured>,
                          headers: axum::http::HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let auth = headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            seen.lock().unwrap().push((auth, body));
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/v1/chat/completions"), captured)
    }

    /// Serves a chat-completion endpoint that answers only after `delay`.
    pub(crate) async fn spawn_slow_upstream(delay: Duration) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move || async move {
                tokio::time::sleep(delay).await;
                Json(json!({"choices": [{"message": {"content": "too late"}}]}))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/v1/chat/completions")
    }

    #[test]
    fn test_chat_request_uses_fixed_parameters() {
        let request = ChatRequest::new("sys", "usr");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], MODEL);
        assert_eq!(value["max_tokens"], 1500);
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(request.user_content(), Some("usr"));
        assert_eq!(request.system_content(), Some("sys"));
    }

    #[test]
    fn test_response_text_reads_first_choice() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_response_text_none_without_choices() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_returns_content() {
        let (url, captured) = spawn_upstream(
            StatusCode::OK,
            json!({
                "choices": [{"message": {"role": "assistant", "content": "- grow revenue"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 4}
            }),
        )
        .await;

        let client = LlmClient::new(url, Some("secret".to_string())).unwrap();
        let text = client
            .complete(&ChatRequest::new("system", "user prompt"))
            .await
            .unwrap();

        assert_eq!(text, "- grow revenue");
        let seen = captured.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Bearer secret"));
        assert_eq!(seen[0].1["messages"][1]["content"], "user prompt");
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_api_error() {
        let (url, _) = spawn_upstream(
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "Invalid API Key"}}),
        )
        .await;

        let client = LlmClient::new(url, Some("bad".to_string())).unwrap();
        let err = client
            .complete(&ChatRequest::new("s", "u"))
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (url, _) = spawn_upstream(StatusCode::OK, json!({"unexpected": true})).await;

        let client = LlmClient::new(url, Some("k".to_string())).unwrap();
        let err = client
            .complete(&ChatRequest::new("s", "u"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_content_error() {
        let (url, _) = spawn_upstream(
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
        )
        .await;

        let client = LlmClient::new(url, Some("k".to_string())).unwrap();
        let err = client
            .complete(&ChatRequest::new("s", "u"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_slow_upstream_hits_request_timeout() {
        let url = spawn_slow_upstream(Duration::from_secs(2)).await;
        let client =
            LlmClient::with_timeout(url, Some("k".to_string()), Duration::from_millis(50)).unwrap();

        let err = client
            .complete(&ChatRequest::new("s", "u"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Http(_)));
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        // Unroutable URL: the call must short-circuit before sending anything.
        let client = LlmClient::new("http://127.0.0.1:9/never", None).unwrap();
        let err = client
            .complete(&ChatRequest::new("s", "u"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
