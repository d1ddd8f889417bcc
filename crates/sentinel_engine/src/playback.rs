use std::sync::Arc;
use std::time::Duration;

use sentinel_core::FeedId;
use sentinel_logging::sentinel_trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, EventSink};

struct PendingTick {
    feed_id: FeedId,
    token: CancellationToken,
}

/// Single-slot reveal timer. Arming replaces (and cancels) whatever was pending.
pub struct PlaybackTimer {
    runtime: Handle,
    sink: Arc<dyn EventSink>,
    pending: Option<PendingTick>,
}

impl PlaybackTimer {
    pub fn new(runtime: Handle, sink: Arc<dyn EventSink>) -> Self {
        Self {
            runtime,
            sink,
            pending: None,
        }
    }

    /// Emits `EngineEvent::RevealDue { feed_id }` once `delay` has elapsed,
    /// unless cancelled or re-armed first.
    pub fn arm(&mut self, feed_id: FeedId, delay: Duration) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sink = self.sink.clone();
        sentinel_trace!("reveal tick armed feed_id={} delay_ms={}", feed_id, delay.as_millis());
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    sink.emit(EngineEvent::RevealDue { feed_id });
                }
            }
        });
        self.pending = Some(PendingTick { feed_id, token });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            sentinel_trace!("reveal tick cancelled feed_id={}", pending.feed_id);
            pending.token.cancel();
        }
    }

    /// Feed of the most recently armed tick that has not been cancelled.
    pub fn pending_feed(&self) -> Option<FeedId> {
        self.pending.as_ref().map(|pending| pending.feed_id)
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
