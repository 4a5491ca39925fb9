pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/api/test", get(health::test_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/analyze-business",
            post(handlers::handle_analyze_business),
        )
        .with_state(state)
}
