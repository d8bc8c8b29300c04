pub mod assessment;
pub mod capture;
pub mod config;
pub mod http;
pub mod report;
pub mod session;

pub use assessment::{
    assess, classify, Assessment, Emotion, EmotionScores, EntropySource, Mood, RiskLevel,
    RngSource, ScriptedSource,
};
pub use capture::{
    CameraAvailability, CaptureConstraints, CaptureError, CaptureHandle, CaptureProvider,
    CaptureProviderFactory, CaptureSource, SimulatedCamera, SimulatedCameraConfig,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use session::{
    CaptureSessionController, Command, CommandOutcome, Phase, SessionConfig, SessionError,
    SessionSnapshot,
};
