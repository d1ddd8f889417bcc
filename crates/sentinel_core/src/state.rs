use std::time::Duration;

use crate::playback::{PlaybackCursor, DEFAULT_REVEAL_DELAY};
use crate::{AnalysisResult, Effect, FeedId, LogEntry, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
}

/// Append-only log of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogFeed {
    id: FeedId,
    entries: Vec<LogEntry>,
}

impl LogFeed {
    pub fn id(&self) -> FeedId {
        self.id
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Starts a fresh, empty feed under the next generation number.
    pub(crate) fn restart(&mut self) -> FeedId {
        self.id += 1;
        self.entries.clear();
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    query: String,
    session: SessionState,
    feed: LogFeed,
    playback: PlaybackCursor,
    results: Vec<AnalysisResult>,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    reveal_delay: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            session: SessionState::Idle,
            feed: LogFeed::default(),
            playback: PlaybackCursor::default(),
            results: Vec::new(),
            in_flight: None,
            last_request_id: 0,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reveal_delay(delay: Duration) -> Self {
        Self {
            reveal_delay: delay,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_loading(&self) -> bool {
        self.session == SessionState::Loading
    }

    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }

    pub fn playback(&self) -> &PlaybackCursor {
        &self.playback
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// True once nothing is in flight and every log line has been revealed.
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && self.playback.revealed() >= self.feed.len()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Idle -> Loading. Clears the feed and the previous results.
    pub(crate) fn begin_request(&mut self) -> (RequestId, Effect) {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.session = SessionState::Loading;
        self.results.clear();
        let feed_id = self.feed.restart();
        let cancel = self.playback.reset(feed_id);
        self.mark_dirty();
        (request_id, cancel)
    }

    /// Loading -> Idle, only for the request currently in flight.
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.session = SessionState::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn replace_results(&mut self, results: Vec<AnalysisResult>) {
        self.results = results;
        self.mark_dirty();
    }

    pub(crate) fn append_log(&mut self, entry: LogEntry) {
        self.feed.push(entry);
    }

    pub(crate) fn arm_playback(&mut self) -> Option<Effect> {
        self.playback.arm_if_idle(&self.feed, self.reveal_delay)
    }

    pub(crate) fn playback_tick(&mut self, feed_id: FeedId) -> Option<Vec<Effect>> {
        let effects = self
            .playback
            .on_tick(&self.feed, feed_id, self.reveal_delay)?;
        if effects.contains(&Effect::ScrollLogToBottom) {
            self.mark_dirty();
        }
        Some(effects)
    }
}
