use super::config::SessionConfig;
use super::error::SessionError;
use super::state::{CaptureInfo, Command, CommandOutcome, Phase, SessionSnapshot};
use crate::assessment::{assess, Assessment, EntropySource, RngSource};
use crate::capture::{CaptureLease, CaptureProvider};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Weak};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Drives one capture session through its phases.
///
/// Cheap to clone; all clones share the same session. Commands are
/// serialized on the session lock, so a command that arrives while
/// another is acquiring the camera waits for it instead of interleaving.
#[derive(Clone)]
pub struct CaptureSessionController {
    shared: Arc<Shared>,
}

struct Shared {
    config: SessionConfig,
    provider: Arc<dyn CaptureProvider>,
    session: Mutex<Session>,
    updates: watch::Sender<SessionSnapshot>,
}

struct Session {
    id: Option<Uuid>,
    phase: Phase,
    capture: Option<CaptureLease>,
    elapsed_seconds: u32,
    result: Option<Assessment>,

    /// Bumped on entering Recording and on every exit from Recording or
    /// Analyzing. Timer tasks only act while the epoch they were spawned
    /// in is still current.
    epoch: u64,

    ticker: Option<JoinHandle<()>>,
    analysis: Option<JoinHandle<()>>,
    entropy: Box<dyn EntropySource>,
    engine_runs: u64,

    capture_started_at: Option<DateTime<Utc>>,
    recording_started_at: Option<DateTime<Utc>>,
    result_ready_at: Option<DateTime<Utc>>,
}

impl Session {
    fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self {
            id: None,
            phase: Phase::Idle,
            capture: None,
            elapsed_seconds: 0,
            result: None,
            epoch: 0,
            ticker: None,
            analysis: None,
            entropy,
            engine_runs: 0,
            capture_started_at: None,
            recording_started_at: None,
            result_ready_at: None,
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }

    fn cancel_analysis(&mut self) {
        if let Some(handle) = self.analysis.take() {
            handle.abort();
        }
    }

    fn snapshot(&self, max_recording_seconds: u32) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            phase: self.phase,
            elapsed_seconds: self.elapsed_seconds,
            max_recording_seconds,
            capture: self
                .capture
                .as_ref()
                .and_then(|lease| lease.handle())
                .map(CaptureInfo::from),
            result: self.result.clone(),
            capture_started_at: self.capture_started_at,
            recording_started_at: self.recording_started_at,
            result_ready_at: self.result_ready_at,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop_ticker();
        self.cancel_analysis();
        // The lease releases the camera when it drops.
    }
}

impl Shared {
    /// Move to `to`, log it, and notify subscribers
    fn enter(&self, session: &mut Session, to: Phase, cause: &str) -> CommandOutcome {
        let from = session.phase;
        session.phase = to;
        info!(
            session_id = ?session.id,
            "Session {} -> {} ({})",
            from,
            to,
            cause
        );
        self.publish(session);
        CommandOutcome::Applied { from, to }
    }

    fn publish(&self, session: &Session) {
        self.updates
            .send_replace(session.snapshot(self.config.max_recording_secs));
    }

    /// Recording → Analyzing. Runs the engine once and schedules the
    /// result to appear after the analysis delay.
    fn begin_analysis(self: &Arc<Self>, session: &mut Session, cause: &str) -> CommandOutcome {
        session.stop_ticker();
        session.epoch += 1;

        let assessment = assess(session.entropy.as_mut());
        session.engine_runs += 1;
        debug!(
            session_id = ?session.id,
            "Engine produced {} ({}) after {}s of recording",
            assessment.mood,
            assessment.confidence_percent(),
            session.elapsed_seconds
        );

        session.analysis = Some(spawn_analysis(
            Arc::downgrade(self),
            session.epoch,
            self.config.analysis_delay,
            assessment,
        ));

        self.enter(session, Phase::Analyzing, cause)
    }

    fn ignored(&self, session: &Session, command: Command) -> CommandOutcome {
        debug!(
            session_id = ?session.id,
            "Ignoring {} while {}",
            command,
            session.phase
        );
        CommandOutcome::Ignored {
            phase: session.phase,
        }
    }
}

fn spawn_ticker(shared: Weak<Shared>, epoch: u64, period: std::time::Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;

            let Some(shared) = shared.upgrade() else {
                break;
            };
            let mut session = shared.session.lock().await;
            if session.epoch != epoch || session.phase != Phase::Recording {
                break;
            }

            session.elapsed_seconds += 1;
            debug!(
                session_id = ?session.id,
                "Recording tick {}/{}",
                session.elapsed_seconds,
                shared.config.max_recording_secs
            );

            if session.elapsed_seconds >= shared.config.max_recording_secs {
                // This task is the ticker; let it finish instead of aborting itself.
                session.ticker = None;
                shared.begin_analysis(&mut session, "recording ceiling reached");
                break;
            }

            shared.publish(&session);
        }
    })
}

fn spawn_analysis(
    shared: Weak<Shared>,
    epoch: u64,
    delay: std::time::Duration,
    assessment: Assessment,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        time::sleep(delay).await;

        let Some(shared) = shared.upgrade() else {
            return;
        };
        let mut session = shared.session.lock().await;
        if session.epoch != epoch || session.phase != Phase::Analyzing {
            debug!(session_id = ?session.id, "Discarding stale analysis result");
            return;
        }

        session.analysis = None;
        session.result = Some(assessment);
        session.result_ready_at = Some(Utc::now());
        shared.enter(&mut session, Phase::ResultReady, "analysis complete");
    })
}

impl CaptureSessionController {
    /// Create a controller whose engine draws are seeded from
    /// `config.seed`, or from the OS when unset
    pub fn new(config: SessionConfig, provider: Arc<dyn CaptureProvider>) -> Self {
        let entropy = Box::new(RngSource::from_seed_option(config.seed));
        Self::with_entropy(config, provider, entropy)
    }

    /// Create a controller with an explicit draw source
    pub fn with_entropy(
        config: SessionConfig,
        provider: Arc<dyn CaptureProvider>,
        entropy: Box<dyn EntropySource>,
    ) -> Self {
        let session = Session::new(entropy);
        let (updates, _) = watch::channel(session.snapshot(config.max_recording_secs));

        info!(
            "Capture session controller ready (provider: {}, ceiling: {}s, analysis delay: {:?})",
            provider.name(),
            config.max_recording_secs,
            config.analysis_delay
        );

        Self {
            shared: Arc::new(Shared {
                config,
                provider,
                session: Mutex::new(session),
                updates,
            }),
        }
    }

    /// Current session state.
    ///
    /// Served from the last published snapshot, so it never waits on a
    /// command that is still in flight (e.g. an unanswered camera prompt).
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.shared.updates.borrow().clone()
    }

    pub async fn phase(&self) -> Phase {
        self.shared.updates.borrow().phase
    }

    /// Receive a fresh snapshot on every phase change and recording tick
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Number of engine runs since the controller was created
    pub async fn engine_invocations(&self) -> u64 {
        self.shared.session.lock().await.engine_runs
    }

    /// Dispatch a command by name
    pub async fn execute(&self, command: Command) -> Result<CommandOutcome, SessionError> {
        match command {
            Command::StartCapture => self.start_capture().await,
            Command::StartRecording => Ok(self.start_recording().await),
            Command::StopRecording => Ok(self.stop_recording().await),
            Command::StopCapture => Ok(self.stop_capture().await),
            Command::Reset => Ok(self.reset().await),
        }
    }

    /// Idle → CaptureActive. Acquires the camera; on failure the session
    /// stays Idle and the error is returned.
    pub async fn start_capture(&self) -> Result<CommandOutcome, SessionError> {
        let shared = &self.shared;
        let mut session = shared.session.lock().await;
        if session.phase != Phase::Idle {
            return Ok(shared.ignored(&session, Command::StartCapture));
        }

        info!("Requesting camera from {}", shared.provider.name());
        let handle = match shared.provider.acquire(&shared.config.constraints).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Camera unavailable: {}", e);
                return Err(SessionError::CaptureUnavailable(e));
            }
        };

        info!(
            "Camera granted: {} at {}x{}",
            handle.device, handle.width, handle.height
        );

        session.capture = Some(CaptureLease::new(handle, Arc::clone(&shared.provider)));
        session.id = Some(Uuid::new_v4());
        session.capture_started_at = Some(Utc::now());
        session.elapsed_seconds = 0;
        session.result = None;
        session.result_ready_at = None;

        Ok(shared.enter(&mut session, Phase::CaptureActive, "camera acquired"))
    }

    /// CaptureActive → Recording. Starts the ticker from zero.
    pub async fn start_recording(&self) -> CommandOutcome {
        let shared = &self.shared;
        let mut session = shared.session.lock().await;
        if session.phase != Phase::CaptureActive {
            return shared.ignored(&session, Command::StartRecording);
        }

        session.stop_ticker();
        session.epoch += 1;
        session.elapsed_seconds = 0;
        session.recording_started_at = Some(Utc::now());
        session.ticker = Some(spawn_ticker(
            Arc::downgrade(shared),
            session.epoch,
            shared.config.tick_interval,
        ));

        shared.enter(&mut session, Phase::Recording, "recording started")
    }

    /// Recording → Analyzing, before the ceiling
    pub async fn stop_recording(&self) -> CommandOutcome {
        let shared = &self.shared;
        let mut session = shared.session.lock().await;
        if session.phase != Phase::Recording {
            return shared.ignored(&session, Command::StopRecording);
        }

        shared.begin_analysis(&mut session, "recording stopped")
    }

    /// Any active phase → Idle. Stops timers, drops any pending analysis
    /// and releases the camera.
    pub async fn stop_capture(&self) -> CommandOutcome {
        let shared = &self.shared;
        let mut session = shared.session.lock().await;
        if session.phase == Phase::Idle {
            return shared.ignored(&session, Command::StopCapture);
        }

        if session.phase == Phase::Analyzing {
            info!(session_id = ?session.id, "Cancelling pending analysis");
        }

        session.stop_ticker();
        session.cancel_analysis();
        session.epoch += 1;

        if let Some(lease) = session.capture.take() {
            lease.release();
        }

        session.elapsed_seconds = 0;
        session.result = None;
        session.capture_started_at = None;
        session.recording_started_at = None;
        session.result_ready_at = None;

        let outcome = shared.enter(&mut session, Phase::Idle, "capture stopped");
        session.id = None;
        shared.publish(&session);
        outcome
    }

    /// ResultReady → CaptureActive. Clears the result; the camera stays live.
    pub async fn reset(&self) -> CommandOutcome {
        let shared = &self.shared;
        let mut session = shared.session.lock().await;
        if session.phase != Phase::ResultReady {
            return shared.ignored(&session, Command::Reset);
        }

        session.result = None;
        session.result_ready_at = None;

        shared.enter(&mut session, Phase::CaptureActive, "reset for a new analysis")
    }
}
