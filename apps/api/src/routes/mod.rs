pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/", get(upload::index_handler))
        .route("/health", get(health::health_handler))
        .route("/upload", post(upload::upload_handler))
        .route("/api/v1/parse", post(upload::parse_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
