use super::state::AppState;
use crate::session::{Command, CommandOutcome, SessionError, SessionSnapshot};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub outcome: CommandOutcome,
    pub snapshot: SessionSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<&SessionError> for ErrorResponse {
    fn from(error: &SessionError) -> Self {
        Self {
            error: error.to_string(),
            code: error.code().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn run_command(state: &AppState, command: Command) -> Response {
    info!("Received {} command", command);

    match state.controller.execute(command).await {
        Ok(outcome) => {
            let snapshot = state.controller.snapshot().await;
            (StatusCode::OK, Json(CommandResponse { outcome, snapshot })).into_response()
        }
        Err(e) => {
            warn!("{} failed: {}", command, e);
            let status = match e {
                SessionError::CaptureUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

/// GET /session
/// Current session snapshot
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.snapshot().await)
}

/// POST /session/capture/start
pub async fn start_capture(State(state): State<AppState>) -> Response {
    run_command(&state, Command::StartCapture).await
}

/// POST /session/capture/stop
pub async fn stop_capture(State(state): State<AppState>) -> Response {
    run_command(&state, Command::StopCapture).await
}

/// POST /session/recording/start
pub async fn start_recording(State(state): State<AppState>) -> Response {
    run_command(&state, Command::StartRecording).await
}

/// POST /session/recording/stop
pub async fn stop_recording(State(state): State<AppState>) -> Response {
    run_command(&state, Command::StopRecording).await
}

/// POST /session/reset
pub async fn reset(State(state): State<AppState>) -> Response {
    run_command(&state, Command::Reset).await
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
