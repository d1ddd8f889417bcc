//! Paced reveal of the log feed.
//!
//! The cursor never owns a timer. It asks for one through
//! [`Effect::ArmReveal`] and only trusts a `RevealDue` that matches both the
//! current feed and an armed tick, so a tick left over from a replaced feed
//! can never reveal anything.
use std::time::Duration;

use crate::{Effect, FeedId, LogFeed};

/// Delay between two revealed lines.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackCursor {
    feed_id: FeedId,
    revealed: usize,
    tick_armed: bool,
}

impl PlaybackCursor {
    pub fn feed_id(&self) -> FeedId {
        self.feed_id
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_tick_armed(&self) -> bool {
        self.tick_armed
    }

    /// Follow a replaced feed: back to zero with no tick outstanding.
    pub(crate) fn reset(&mut self, feed_id: FeedId) -> Effect {
        self.feed_id = feed_id;
        self.revealed = 0;
        self.tick_armed = false;
        Effect::CancelReveal
    }

    /// Arms the next tick when idle and the feed holds unrevealed entries.
    pub(crate) fn arm_if_idle(&mut self, feed: &LogFeed, delay: Duration) -> Option<Effect> {
        debug_assert_eq!(self.feed_id, feed.id());
        if self.tick_armed || self.revealed >= feed.len() {
            return None;
        }
        self.tick_armed = true;
        Some(Effect::ArmReveal {
            feed_id: self.feed_id,
            delay,
        })
    }

    /// Handles a fired tick. Returns `None` when the tick is stale or spurious.
    pub(crate) fn on_tick(
        &mut self,
        feed: &LogFeed,
        feed_id: FeedId,
        delay: Duration,
    ) -> Option<Vec<Effect>> {
        if feed_id != self.feed_id || !self.tick_armed {
            return None;
        }
        self.tick_armed = false;
        if self.revealed >= feed.len() {
            return Some(Vec::new());
        }

        self.revealed += 1;
        let mut effects = vec![Effect::ScrollLogToBottom];
        effects.extend(self.arm_if_idle(feed, delay));
        Some(effects)
    }
}
