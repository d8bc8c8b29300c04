//! HTTP API for the presentation layer
//!
//! The browser front end reads the session and issues commands here:
//! - GET /session - Current session snapshot
//! - POST /session/capture/start - Acquire the camera
//! - POST /session/capture/stop - Release the camera
//! - POST /session/recording/start - Start the timed recording
//! - POST /session/recording/stop - Stop early and analyze
//! - POST /session/reset - Clear the result for a new analysis
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{CommandResponse, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
