use std::time::Duration;

use crate::capture::CaptureConstraints;

/// Configuration for a capture session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Hard ceiling on a recording, in ticks
    /// Default: 10
    pub max_recording_secs: u32,

    /// Period of the recording ticker
    /// Default: 1 second
    pub tick_interval: Duration,

    /// Simulated processing latency between the end of a recording and
    /// the result becoming visible
    /// Default: 3 seconds
    pub analysis_delay: Duration,

    /// What to ask the capture provider for
    pub constraints: CaptureConstraints,

    /// Seed for the assessment draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_recording_secs: 10,
            tick_interval: Duration::from_secs(1),
            analysis_delay: Duration::from_secs(3),
            constraints: CaptureConstraints::default(),
            seed: None,
        }
    }
}
