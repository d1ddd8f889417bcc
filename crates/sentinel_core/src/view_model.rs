use crate::{AnalysisResult, AppState, FeedId, LogTone, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLineView {
    /// 1-based position in the feed.
    pub number: usize,
    pub text: String,
    pub tone: LogTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub query: String,
    pub feed_id: FeedId,
    pub lines: Vec<LogLineView>,
    /// Lines appended but not yet revealed.
    pub pending_lines: usize,
    /// Blinking "awaiting" cursor under the log.
    pub show_cursor: bool,
    pub results: Vec<AnalysisResult>,
    pub submit_enabled: bool,
    /// "Run a search" hint shown when there is nothing else to show.
    pub show_placeholder: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let revealed = self.playback().revealed();
        let entries = self.feed().entries();
        let lines = entries[..revealed.min(entries.len())]
            .iter()
            .enumerate()
            .map(|(idx, entry)| LogLineView {
                number: idx + 1,
                text: entry.text.clone(),
                tone: entry.tone,
            })
            .collect::<Vec<_>>();
        let pending_lines = entries.len().saturating_sub(lines.len());

        AppViewModel {
            session: self.session(),
            query: self.query().to_string(),
            feed_id: self.feed().id(),
            lines,
            pending_lines,
            show_cursor: pending_lines > 0,
            results: self.results().to_vec(),
            submit_enabled: !self.is_loading(),
            show_placeholder: self.results().is_empty() && !self.is_loading(),
            dirty: self.is_dirty(),
        }
    }
}
