//! Capture session management
//!
//! This module provides the `CaptureSessionController` that manages:
//! - The session phase machine (idle → capture → recording → analysis → result)
//! - Camera lease lifetime
//! - The one-second recording ticker and its hard ceiling
//! - Delayed publication of the analysis result
//! - Snapshots and change notifications for the presentation layer

mod config;
mod controller;
mod error;
mod state;

pub use config::SessionConfig;
pub use controller::CaptureSessionController;
pub use error::SessionError;
pub use state::{format_clock, CaptureInfo, Command, CommandOutcome, Phase, SessionSnapshot};
