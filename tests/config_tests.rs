// Tests for layered configuration loading

use anyhow::Result;
use moodcheck::capture::{CameraAvailability, FacingMode};
use moodcheck::config::SessionSettings;
use moodcheck::Config;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_session_settings() -> Result<()> {
    let session = SessionSettings::default().to_session_config()?;

    assert_eq!(session.max_recording_secs, 10);
    assert_eq!(session.tick_interval, Duration::from_secs(1));
    assert_eq!(session.analysis_delay, Duration::from_secs(3));
    assert_eq!(session.constraints.ideal_width, 1280);
    assert_eq!(session.constraints.ideal_height, 720);
    assert_eq!(session.seed, None);
    Ok(())
}

#[test]
fn test_zero_tick_interval_is_rejected() {
    let settings = SessionSettings {
        tick_interval_ms: 0,
        ..Default::default()
    };
    assert!(settings.to_session_config().is_err());

    let settings = SessionSettings {
        max_recording_secs: 0,
        ..Default::default()
    };
    assert!(settings.to_session_config().is_err());
}

#[test]
fn test_load_file_with_partial_sections() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("moodcheck.toml");
    fs::write(
        &path,
        r#"
[service.http]
port = 9100

[session]
max_recording_secs = 5
analysis_delay_ms = 500
facing_mode = "environment"
seed = 42

[capture]
availability = "permission_denied"
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "moodcheck");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 9100);
    assert_eq!(cfg.capture.availability, CameraAvailability::PermissionDenied);
    assert_eq!(cfg.capture.native_width, 1920);

    let session = cfg.session.to_session_config()?;
    assert_eq!(session.max_recording_secs, 5);
    assert_eq!(session.tick_interval, Duration::from_secs(1));
    assert_eq!(session.analysis_delay, Duration::from_millis(500));
    assert_eq!(session.constraints.facing_mode, FacingMode::Environment);
    assert_eq!(session.seed, Some(42));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");
    assert!(Config::load(path.to_str().unwrap()).is_err());
}
