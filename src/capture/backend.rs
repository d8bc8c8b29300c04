use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use super::simulated::{SimulatedCamera, SimulatedCameraConfig};

/// Which way the requested camera should face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Front camera, facing the user
    User,
    /// Rear camera
    Environment,
}

/// What the session asks for when acquiring a camera.
///
/// These are preferences: a provider may grant other dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConstraints {
    /// Preferred frame width in pixels
    pub ideal_width: u32,
    /// Preferred frame height in pixels
    pub ideal_height: u32,
    /// Preferred camera orientation
    pub facing_mode: FacingMode,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            ideal_width: 1280,
            ideal_height: 720,
            facing_mode: FacingMode::User,
        }
    }
}

/// Why a camera could not be acquired
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device available")]
    NoDevice,

    #[error("camera is already in use")]
    Busy,
}

/// An acquired camera stream.
///
/// Not `Clone`: there is exactly one owner, and it must give the handle
/// back through `CaptureProvider::release`.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureHandle {
    /// Provider-assigned stream id
    pub id: u64,
    /// Device name for display
    pub device: String,
    /// Granted frame width
    pub width: u32,
    /// Granted frame height
    pub height: u32,
    /// Granted orientation
    pub facing_mode: FacingMode,
}

/// Camera capture provider trait
///
/// Implementations:
/// - `SimulatedCamera`: in-process stand-in with configurable availability
/// - Browser / native bindings live outside this crate
#[async_trait::async_trait]
pub trait CaptureProvider: Send + Sync {
    /// Acquire a camera stream matching `constraints` as closely as possible
    async fn acquire(&self, constraints: &CaptureConstraints) -> Result<CaptureHandle, CaptureError>;

    /// Stop the stream behind `handle`
    fn release(&self, handle: CaptureHandle);

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Capture source type
#[derive(Debug, Clone)]
pub enum CaptureSource {
    /// In-process simulated camera
    Simulated(SimulatedCameraConfig),
}

/// Capture provider factory
pub struct CaptureProviderFactory;

impl CaptureProviderFactory {
    /// Create a provider for the given source
    pub fn create(source: CaptureSource) -> Arc<dyn CaptureProvider> {
        match source {
            CaptureSource::Simulated(config) => Arc::new(SimulatedCamera::new(config)),
        }
    }
}
