//! Sentinel core: pure analysis-session state machine and view-model helpers.
mod effect;
mod msg;
mod playback;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use playback::{PlaybackCursor, DEFAULT_REVEAL_DELAY};
pub use state::{AppState, LogFeed, SessionState};
pub use types::{AnalysisResult, Decision, FeedId, LogEntry, LogTone, RequestId};
pub use update::{progress_entries, update};
pub use view_model::{AppViewModel, LogLineView};
