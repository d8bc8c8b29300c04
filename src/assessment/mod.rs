//! Synthetic facial-expression assessment
//!
//! This module turns a stream of random draws into a fully formed
//! `Assessment`:
//! - Emotion percentages sampled from fixed per-label ranges
//! - Mood / risk / confidence from an ordered list of threshold rules
//! - Fixed indicator, recommendation and resource bundles per mood
//! - Auxiliary analysis metrics
//!
//! Nothing here looks at pixels. The only nondeterminism is the
//! `EntropySource` handed to `assess`.

mod bundles;
mod engine;
mod entropy;
mod types;

pub use bundles::{bundle_for, MoodBundle};
pub use engine::{assess, classify, dominant_emotion, Classification};
pub use entropy::{EntropySource, RngSource, ScriptedSource};
pub use types::{
    AnalysisMetrics, Assessment, Emotion, EmotionScores, Metric, Mood, RiskLevel,
};
