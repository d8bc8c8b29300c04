use anyhow::{bail, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::capture::{CaptureConstraints, FacingMode, SimulatedCameraConfig};
use crate::session::SessionConfig;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub capture: SimulatedCameraConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "moodcheck".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// `[session]` section, in file-friendly units
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub max_recording_secs: u32,
    pub tick_interval_ms: u64,
    pub analysis_delay_ms: u64,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub facing_mode: FacingMode,
    pub seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            max_recording_secs: session.max_recording_secs,
            tick_interval_ms: session.tick_interval.as_millis() as u64,
            analysis_delay_ms: session.analysis_delay.as_millis() as u64,
            ideal_width: session.constraints.ideal_width,
            ideal_height: session.constraints.ideal_height,
            facing_mode: session.constraints.facing_mode,
            seed: session.seed,
        }
    }
}

impl SessionSettings {
    pub fn to_session_config(&self) -> Result<SessionConfig> {
        if self.max_recording_secs == 0 {
            bail!("session.max_recording_secs must be greater than zero");
        }
        if self.tick_interval_ms == 0 {
            bail!("session.tick_interval_ms must be greater than zero");
        }

        Ok(SessionConfig {
            max_recording_secs: self.max_recording_secs,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            analysis_delay: Duration::from_millis(self.analysis_delay_ms),
            constraints: CaptureConstraints {
                ideal_width: self.ideal_width,
                ideal_height: self.ideal_height,
                facing_mode: self.facing_mode,
            },
            seed: self.seed,
        })
    }
}

impl Config {
    /// Load `path` (extension optional) layered with `MOODCHECK__*`
    /// environment overrides, e.g. `MOODCHECK__SERVICE__HTTP__PORT=9000`
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("MOODCHECK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
