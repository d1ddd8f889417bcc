use std::fmt;

/// Generation number of a log feed. Bumped whenever a new analysis replaces the feed.
pub type FeedId = u64;

/// Identifier of one dispatched analysis request.
pub type RequestId = u64;

/// Display category of a log line. Carries no control-flow meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTone {
    #[default]
    Info,
    Muted,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub tone: LogTone,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, tone: LogTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Per-ticker verdict returned by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    Justified,
    /// Also the fallback for absent or unrecognised verdicts.
    #[default]
    Unjustified,
}

impl Decision {
    /// Maps a wire token to a decision. Only `justified` (any case) is positive.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("justified") {
            Decision::Justified
        } else {
            Decision::Unjustified
        }
    }

    pub fn is_justified(self) -> bool {
        matches!(self, Decision::Justified)
    }

    /// Log tone used when this decision is announced in the feed.
    pub fn tone(self) -> LogTone {
        match self {
            Decision::Justified => LogTone::Success,
            Decision::Unjustified => LogTone::Warning,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Justified => write!(f, "Justified"),
            Decision::Unjustified => write!(f, "Unjustified"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub ticker: String,
    pub decision: Decision,
    /// Verdict exactly as the service worded it, e.g. `Noise`. Shown verbatim.
    pub decision_label: String,
    /// Percentage, always within 0..=100.
    pub confidence: u8,
    pub summary: String,
}
