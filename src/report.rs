//! Plain-text rendering of sessions and assessments for the terminal

use std::fmt;

use crate::assessment::Assessment;
use crate::session::{Phase, SessionSnapshot};

pub const DISCLAIMER: &str = "This is a demonstration of synthetic facial analysis. \
It does not look at the camera feed, has no clinical validation, and must never \
replace professional mental health care. If you are experiencing mental health \
concerns, please consult a qualified healthcare provider.";

/// One-line status, e.g. "recording REC 0:07 (3s left)"
pub fn status_line(snapshot: &SessionSnapshot) -> String {
    match snapshot.phase {
        Phase::Idle => "camera not active".to_string(),
        Phase::CaptureActive => match &snapshot.capture {
            Some(capture) => format!(
                "live camera feed: {} {}x{}",
                capture.device, capture.width, capture.height
            ),
            None => "live camera feed".to_string(),
        },
        Phase::Recording => format!(
            "REC {} ({}s left)",
            snapshot.recording_clock(),
            snapshot.remaining_seconds()
        ),
        Phase::Analyzing => "analyzing facial expressions...".to_string(),
        Phase::ResultReady => match &snapshot.result {
            Some(result) => format!("result ready: {}", result.mood),
            None => "result ready".to_string(),
        },
    }
}

fn bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

fn list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "{title}")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

/// Full results panel, rendered through `Display`
pub struct AssessmentReport<'a>(pub &'a Assessment);

impl fmt::Display for AssessmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;

        writeln!(f, "Facial Analysis Results")?;
        writeln!(f, "=======================")?;
        writeln!(
            f,
            "Overall mood:  {} (confidence {})",
            assessment.mood,
            assessment.confidence_percent()
        )?;
        writeln!(f, "Risk level:    {}", assessment.risk)?;
        writeln!(f)?;

        writeln!(f, "Detected emotions")?;
        for (emotion, value) in assessment.emotions.iter() {
            writeln!(f, "  {:<10} {:>3}% {}", emotion.as_str(), value, bar(value, 20))?;
        }
        writeln!(f)?;

        writeln!(f, "Analysis metrics")?;
        for (metric, value) in assessment.metrics.iter() {
            writeln!(f, "  {:<20} {:>3}% {}", metric.label(), value, bar(value, 20))?;
        }
        writeln!(f)?;

        list(f, "Facial indicators", &assessment.indicators)?;
        list(f, "Recommendations", &assessment.recommendations)?;
        list(f, "Support resources", &assessment.resources)?;
        writeln!(f)?;
        writeln!(f, "Important: {DISCLAIMER}")
    }
}

/// Full results panel as a string
pub fn render_assessment(assessment: &Assessment) -> String {
    AssessmentReport(assessment).to_string()
}
