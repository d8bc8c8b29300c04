use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, AtomicU8, AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{info, warn};

use super::backend::{CaptureConstraints, CaptureError, CaptureHandle, CaptureProvider};

/// How the simulated camera answers an acquire request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAvailability {
    /// Grants the stream
    Available,
    /// Behaves as if the user refused the permission prompt
    PermissionDenied,
    /// Behaves as if no camera is attached
    NoDevice,
}

impl CameraAvailability {
    fn to_u8(self) -> u8 {
        match self {
            CameraAvailability::Available => 0,
            CameraAvailability::PermissionDenied => 1,
            CameraAvailability::NoDevice => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => CameraAvailability::PermissionDenied,
            2 => CameraAvailability::NoDevice,
            _ => CameraAvailability::Available,
        }
    }
}

/// Configuration for the simulated camera
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedCameraConfig {
    pub availability: CameraAvailability,
    pub device_name: String,
    /// Largest width the device can deliver
    pub native_width: u32,
    /// Largest height the device can deliver
    pub native_height: u32,
    /// Delay before an acquire request is answered
    pub acquire_latency_ms: u64,
}

impl Default for SimulatedCameraConfig {
    fn default() -> Self {
        Self {
            availability: CameraAvailability::Available,
            device_name: "Simulated FaceTime HD Camera".to_string(),
            native_width: 1920,
            native_height: 1080,
            acquire_latency_ms: 0,
        }
    }
}

/// In-process camera provider.
///
/// Hands out at most one live stream at a time and keeps counters so
/// callers can check that every acquired stream was released.
pub struct SimulatedCamera {
    config: SimulatedCameraConfig,
    availability: AtomicU8,
    next_id: AtomicU64,
    live: AtomicUsize,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl SimulatedCamera {
    pub fn new(config: SimulatedCameraConfig) -> Self {
        let availability = AtomicU8::new(config.availability.to_u8());
        Self {
            config,
            availability,
            next_id: AtomicU64::new(1),
            live: AtomicUsize::new(0),
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Camera that refuses every request with `availability`
    pub fn unavailable(availability: CameraAvailability) -> Self {
        Self::new(SimulatedCameraConfig {
            availability,
            ..Default::default()
        })
    }

    pub fn availability(&self) -> CameraAvailability {
        CameraAvailability::from_u8(self.availability.load(Ordering::SeqCst))
    }

    /// Change how later acquire requests are answered
    pub fn set_availability(&self, availability: CameraAvailability) {
        self.availability
            .store(availability.to_u8(), Ordering::SeqCst);
    }

    /// Streams acquired and not yet released
    pub fn live_streams(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total successful acquisitions
    pub fn acquisitions(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Total releases
    pub fn releases(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CaptureProvider for SimulatedCamera {
    async fn acquire(&self, constraints: &CaptureConstraints) -> Result<CaptureHandle, CaptureError> {
        if self.config.acquire_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.acquire_latency_ms)).await;
        }

        match self.availability() {
            CameraAvailability::PermissionDenied => return Err(CaptureError::PermissionDenied),
            CameraAvailability::NoDevice => return Err(CaptureError::NoDevice),
            CameraAvailability::Available => {}
        }

        if self
            .live
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Simulated camera refused a second concurrent stream");
            return Err(CaptureError::Busy);
        }
        self.acquired.fetch_add(1, Ordering::SeqCst);

        let handle = CaptureHandle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            device: self.config.device_name.clone(),
            width: constraints.ideal_width.min(self.config.native_width),
            height: constraints.ideal_height.min(self.config.native_height),
            facing_mode: constraints.facing_mode,
        };

        info!(
            "Simulated camera stream {} opened at {}x{}",
            handle.id, handle.width, handle.height
        );

        Ok(handle)
    }

    fn release(&self, handle: CaptureHandle) {
        // Saturating: a foreign handle must not wrap the counter.
        let _ = self
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        self.released.fetch_add(1, Ordering::SeqCst);
        info!("Simulated camera stream {} closed", handle.id);
    }

    fn name(&self) -> &str {
        "simulated-camera"
    }
}
