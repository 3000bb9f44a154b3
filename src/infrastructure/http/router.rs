use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/holiday", get(controllers::holiday::query_holiday))
        .route("/api/holiday/:date", get(controllers::holiday::get_holiday))
        .fallback(controllers::holiday::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Chinese Holiday Query Service"
}

async fn health_handler() -> &'static str {
    "OK"
}
