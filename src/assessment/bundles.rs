use super::types::Mood;

/// Fixed indicator / recommendation / resource lists for one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodBundle {
    pub indicators: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub resources: &'static [&'static str],
}

const CRITICAL: MoodBundle = MoodBundle {
    indicators: &[
        "Persistent sad facial expressions",
        "Reduced eye contact patterns",
        "Facial muscle tension indicators",
    ],
    recommendations: &[
        "Immediate professional consultation recommended",
        "Crisis support contact suggested",
        "Emergency intervention protocols",
    ],
    resources: &[
        "National Suicide Prevention Lifeline: 988",
        "Crisis Text Line: Text HOME to 741741",
        "Emergency Services: 911",
    ],
};

const CONCERNING: MoodBundle = MoodBundle {
    indicators: &[
        "Elevated stress micro-expressions",
        "Decreased positive facial activity",
        "Emotional regulation challenges",
    ],
    recommendations: &[
        "Consider mental health professional consultation",
        "Stress management techniques",
        "Social support engagement",
    ],
    resources: &[
        "Psychology Today Therapist Finder",
        "BetterHelp Online Counseling",
        "Local Community Mental Health Centers",
    ],
};

const STRESSED: MoodBundle = MoodBundle {
    indicators: &[
        "Tension in facial muscles",
        "Rapid micro-expression changes",
        "Elevated cortisol indicators",
    ],
    recommendations: &[
        "Practice relaxation techniques",
        "Consider mindfulness exercises",
        "Evaluate stress sources",
    ],
    resources: &[
        "Headspace Meditation App",
        "Calm Stress Relief Resources",
        "Local Yoga/Meditation Classes",
    ],
};

const HAPPY: MoodBundle = MoodBundle {
    indicators: &[
        "Genuine smile patterns (Duchenne markers)",
        "Positive eye engagement",
        "Relaxed facial muscle tone",
    ],
    recommendations: &[
        "Continue current positive practices",
        "Share positivity with others",
        "Maintain healthy lifestyle habits",
    ],
    resources: &[
        "Wellness tracking apps",
        "Community volunteer opportunities",
        "Social connection platforms",
    ],
};

const NEUTRAL: MoodBundle = MoodBundle {
    indicators: &[
        "Balanced emotional expression",
        "Stable micro-expression patterns",
        "Normal facial muscle activity",
    ],
    recommendations: &[
        "Monitor for any changes",
        "Maintain regular self-care",
        "Stay connected with support network",
    ],
    resources: &[
        "Mental wellness resources",
        "Mood tracking applications",
        "Community support groups",
    ],
};

/// Bundle associated with `mood`
pub fn bundle_for(mood: Mood) -> &'static MoodBundle {
    match mood {
        Mood::Critical => &CRITICAL,
        Mood::Concerning => &CONCERNING,
        Mood::Stressed => &STRESSED,
        Mood::Happy => &HAPPY,
        Mood::Neutral => &NEUTRAL,
    }
}

impl MoodBundle {
    pub(crate) fn to_owned_lists(&self) -> (Vec<String>, Vec<String>, Vec<String>) {
        let own = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        (
            own(self.indicators),
            own(self.recommendations),
            own(self.resources),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_non_empty_bundle() {
        for mood in Mood::ALL {
            let bundle = bundle_for(mood);
            for list in [bundle.indicators, bundle.recommendations, bundle.resources] {
                assert!((2..=3).contains(&list.len()), "{mood}: {list:?}");
                assert!(list.iter().all(|entry| !entry.is_empty()));
            }
        }
    }

    #[test]
    fn critical_bundle_points_at_crisis_support() {
        let bundle = bundle_for(Mood::Critical);
        assert!(bundle
            .recommendations
            .iter()
            .any(|r| r.contains("Crisis support")));
        assert!(bundle.resources.iter().any(|r| r.contains("988")));
    }
}
