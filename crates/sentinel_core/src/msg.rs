use crate::{AnalysisResult, FeedId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    QueryChanged(String),
    /// User submitted the current query for analysis.
    SubmitClicked,
    /// The remote service answered. `None` means the body was empty or null.
    AnalysisSucceeded {
        request_id: RequestId,
        results: Option<Vec<AnalysisResult>>,
    },
    /// The request could not be completed or its body could not be decoded.
    AnalysisFailed {
        request_id: RequestId,
        message: String,
    },
    /// A playback tick armed for `feed_id` fired.
    RevealDue { feed_id: FeedId },
    /// Fallback for placeholder wiring.
    NoOp,
}
