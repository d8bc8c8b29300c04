use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::assessment::Assessment;
use crate::capture::{CaptureHandle, FacingMode};

/// Current phase of the capture session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No camera held
    #[default]
    Idle,
    /// Camera live, not recording
    CaptureActive,
    /// Recording sample, ticker running
    Recording,
    /// Waiting for the analysis result
    Analyzing,
    /// Assessment available
    ResultReady,
}

impl Phase {
    /// Whether a camera lease is held in this phase
    pub fn holds_capture(self) -> bool {
        !matches!(self, Phase::Idle)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::CaptureActive => "captureActive",
            Phase::Recording => "recording",
            Phase::Analyzing => "analyzing",
            Phase::ResultReady => "resultReady",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-issued session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    StartCapture,
    StartRecording,
    StopRecording,
    StopCapture,
    Reset,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::StartCapture => "startCapture",
            Command::StartRecording => "startRecording",
            Command::StopRecording => "stopRecording",
            Command::StopCapture => "stopCapture",
            Command::Reset => "reset",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a command did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// The command moved the session between phases
    Applied { from: Phase, to: Phase },
    /// The command is not valid in the current phase; nothing changed
    Ignored { phase: Phase },
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied { .. })
    }

    /// Phase after the command
    pub fn phase(&self) -> Phase {
        match *self {
            CommandOutcome::Applied { to, .. } => to,
            CommandOutcome::Ignored { phase } => phase,
        }
    }
}

/// Granted camera stream, as shown to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureInfo {
    pub device: String,
    pub width: u32,
    pub height: u32,
    pub facing_mode: FacingMode,
}

impl From<&CaptureHandle> for CaptureInfo {
    fn from(handle: &CaptureHandle) -> Self {
        Self {
            device: handle.device.clone(),
            width: handle.width,
            height: handle.height,
            facing_mode: handle.facing_mode,
        }
    }
}

/// Read-only view of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Minted on each successful capture start, cleared on stop
    pub session_id: Option<Uuid>,
    pub phase: Phase,
    pub elapsed_seconds: u32,
    pub max_recording_seconds: u32,
    pub capture: Option<CaptureInfo>,
    pub result: Option<Assessment>,
    pub capture_started_at: Option<DateTime<Utc>>,
    pub recording_started_at: Option<DateTime<Utc>>,
    pub result_ready_at: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    /// Recording clock, e.g. "0:07"
    pub fn recording_clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// Seconds left before the recording ceiling
    pub fn remaining_seconds(&self) -> u32 {
        self.max_recording_seconds
            .saturating_sub(self.elapsed_seconds)
    }
}

/// Format whole seconds as `m:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
