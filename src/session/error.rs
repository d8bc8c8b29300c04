use thiserror::Error;

use crate::capture::CaptureError;

/// Command failures surfaced to the caller.
///
/// Every other path through the controller is total; ignored commands are
/// reported as `CommandOutcome::Ignored`, not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(#[from] CaptureError),
}

impl SessionError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::CaptureUnavailable(_) => "CAPTURE_UNAVAILABLE",
        }
    }
}
