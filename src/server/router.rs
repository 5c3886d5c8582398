use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // An empty id still reaches the handler so it can answer 400
        .route("/promotions/", get(handlers::get_promotion_without_id))
        .route("/promotions/{*id}", get(handlers::get_promotion))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
