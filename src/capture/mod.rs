//! Camera capture seam
//!
//! The session controller never touches a device directly. It asks a
//! `CaptureProvider` for a handle and hands it back when done:
//! - `CaptureProvider` trait for any camera source
//! - `CaptureLease` to guarantee the handle is released
//! - `SimulatedCamera` in-process provider for demos and tests

pub mod backend;
pub mod lease;
pub mod simulated;

pub use backend::{
    CaptureConstraints, CaptureError, CaptureHandle, CaptureProvider, CaptureProviderFactory,
    CaptureSource, FacingMode,
};
pub use lease::CaptureLease;
pub use simulated::{CameraAvailability, SimulatedCamera, SimulatedCameraConfig};
