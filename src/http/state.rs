use crate::session::CaptureSessionController;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single local capture session
    pub controller: CaptureSessionController,
}

impl AppState {
    pub fn new(controller: CaptureSessionController) -> Self {
        Self { controller }
    }
}
