use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::backend::{CaptureHandle, CaptureProvider};

/// Exclusive ownership of an acquired camera stream.
///
/// The handle goes back to its provider exactly once: on `release`, or
/// on drop if nobody released it first.
pub struct CaptureLease {
    handle: Option<CaptureHandle>,
    provider: Arc<dyn CaptureProvider>,
}

impl CaptureLease {
    pub fn new(handle: CaptureHandle, provider: Arc<dyn CaptureProvider>) -> Self {
        Self {
            handle: Some(handle),
            provider,
        }
    }

    /// The held stream
    pub fn handle(&self) -> Option<&CaptureHandle> {
        self.handle.as_ref()
    }

    /// Return the stream to its provider
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(
                "Releasing capture stream {} on {}",
                handle.id,
                self.provider.name()
            );
            self.provider.release(handle);
        }
    }
}

impl Drop for CaptureLease {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl fmt::Debug for CaptureLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureLease")
            .field("handle", &self.handle)
            .field("provider", &self.provider.name())
            .finish()
    }
}
