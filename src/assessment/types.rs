use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall mood, ordered by severity (see `Mood::severity`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Stressed,
    Concerning,
    Critical,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Concerning,
        Mood::Critical,
    ];

    /// Severity rank, 0 (happy) through 4 (critical).
    ///
    /// Moods are ranked, not measured: use this for ordering only.
    pub fn severity(self) -> u8 {
        match self {
            Mood::Happy => 0,
            Mood::Neutral => 1,
            Mood::Stressed => 2,
            Mood::Concerning => 3,
            Mood::Critical => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
            Mood::Concerning => "concerning",
            Mood::Critical => "critical",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intervention priority attached to a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven emotion labels, in sampling and tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happiness,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    /// Fixed iteration order. Earlier labels win ties for dominance.
    pub const ALL: [Emotion; 7] = [
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    /// Half-open sampling range for this label
    pub fn sample_range(self) -> std::ops::Range<u32> {
        match self {
            Emotion::Happiness => 20..60,
            Emotion::Sadness => 10..40,
            Emotion::Anger => 5..25,
            Emotion::Fear => 5..30,
            Emotion::Surprise => 5..20,
            Emotion::Disgust => 2..12,
            Emotion::Neutral => 15..45,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happiness => "happiness",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected emotion percentages.
///
/// Each value is sampled independently, so they do not sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub happiness: u32,
    pub sadness: u32,
    pub anger: u32,
    pub fear: u32,
    pub surprise: u32,
    pub disgust: u32,
    pub neutral: u32,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Happiness => self.happiness,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
            Emotion::Neutral => self.neutral,
        }
    }

    /// Store a percentage, capped at 100
    pub fn set(&mut self, emotion: Emotion, value: u32) {
        let slot = match emotion {
            Emotion::Happiness => &mut self.happiness,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Neutral => &mut self.neutral,
        };
        *slot = value.min(100);
    }

    /// Labelled values in `Emotion::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Auxiliary metric names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    EyeContact,
    FacialTension,
    MicroExpressions,
    EmotionalStability,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::EyeContact,
        Metric::FacialTension,
        Metric::MicroExpressions,
        Metric::EmotionalStability,
    ];

    pub fn sample_range(self) -> std::ops::Range<u32> {
        match self {
            Metric::EyeContact => 40..80,
            Metric::FacialTension => 20..80,
            Metric::MicroExpressions => 30..80,
            Metric::EmotionalStability => 45..85,
        }
    }

    /// Human label, e.g. "Eye Contact"
    pub fn label(self) -> &'static str {
        match self {
            Metric::EyeContact => "Eye Contact",
            Metric::FacialTension => "Facial Tension",
            Metric::MicroExpressions => "Micro Expressions",
            Metric::EmotionalStability => "Emotional Stability",
        }
    }
}

/// Auxiliary analysis metrics, percentages in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetrics {
    pub eye_contact: u32,
    pub facial_tension: u32,
    pub micro_expressions: u32,
    pub emotional_stability: u32,
}

impl AnalysisMetrics {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::EyeContact => self.eye_contact,
            Metric::FacialTension => self.facial_tension,
            Metric::MicroExpressions => self.micro_expressions,
            Metric::EmotionalStability => self.emotional_stability,
        }
    }

    /// Store a percentage, capped at 100
    pub fn set(&mut self, metric: Metric, value: u32) {
        let slot = match metric {
            Metric::EyeContact => &mut self.eye_contact,
            Metric::FacialTension => &mut self.facial_tension,
            Metric::MicroExpressions => &mut self.micro_expressions,
            Metric::EmotionalStability => &mut self.emotional_stability,
        };
        *slot = value.min(100);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, u32)> + '_ {
        Metric::ALL.iter().map(move |&m| (m, self.get(m)))
    }
}

/// Result of one analysis pass. Always fully formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub mood: Mood,
    pub risk: RiskLevel,
    /// One of the fixed per-branch constants, never interpolated
    pub confidence: f64,
    pub emotions: EmotionScores,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
    pub resources: Vec<String>,
    pub metrics: AnalysisMetrics,
}

impl Assessment {
    /// Confidence as a one-decimal percentage, e.g. "89.0%"
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}
