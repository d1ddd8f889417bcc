use std::time::Duration;

use crate::{FeedId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the query to the analysis service.
    RequestAnalysis { request_id: RequestId, query: String },
    /// Schedule a single `Msg::RevealDue { feed_id }` after `delay`.
    ArmReveal { feed_id: FeedId, delay: Duration },
    /// Drop any pending reveal tick.
    CancelReveal,
    /// The visible log grew; keep its tail in view.
    ScrollLogToBottom,
}
