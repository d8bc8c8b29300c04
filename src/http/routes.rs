use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session view
        .route("/session", get(handlers::get_session))
        // Session commands
        .route("/session/capture/start", post(handlers::start_capture))
        .route("/session/capture/stop", post(handlers::stop_capture))
        .route("/session/recording/start", post(handlers::start_recording))
        .route("/session/recording/stop", post(handlers::stop_recording))
        .route("/session/reset", post(handlers::reset))
        // The presentation layer runs in a browser on another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
