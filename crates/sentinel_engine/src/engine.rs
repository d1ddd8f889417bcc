use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use sentinel_core::{FeedId, RequestId};
use sentinel_logging::{sentinel_info, sentinel_warn};

use crate::client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient};
use crate::playback::PlaybackTimer;
use crate::{ChannelEventSink, EngineEvent, EventSink};

enum EngineCommand {
    Analyze { request_id: RequestId, query: String },
    ArmReveal { feed_id: FeedId, delay: Duration },
    CancelReveal,
}

/// Runs requests and reveal timers on a background tokio runtime.
///
/// Results come back as [`EngineEvent`]s so the caller can apply them on its
/// own dispatch loop, one at a time.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> io::Result<Self> {
        Self::with_client(Arc::new(ReqwestAnalysisClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn AnalysisClient>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("sentinel-engine".to_string())
            .spawn(move || {
                let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
                let mut timer = PlaybackTimer::new(runtime.handle().clone(), sink.clone());
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Analyze { request_id, query } => {
                            let client = client.clone();
                            let sink = sink.clone();
                            runtime.spawn(async move {
                                let result = client.analyze(&query).await;
                                match &result {
                                    Ok(outcome) => sentinel_info!(
                                        "request {} settled with {} result(s)",
                                        request_id,
                                        outcome.as_ref().map_or(0, Vec::len)
                                    ),
                                    Err(err) => {
                                        sentinel_warn!("request {} failed: {}", request_id, err)
                                    }
                                }
                                sink.emit(EngineEvent::AnalysisCompleted { request_id, result });
                            });
                        }
                        EngineCommand::ArmReveal { feed_id, delay } => timer.arm(feed_id, delay),
                        EngineCommand::CancelReveal => timer.cancel(),
                    }
                }
                drop(timer);
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            request_id,
            query: query.into(),
        });
    }

    pub fn arm_reveal(&self, feed_id: FeedId, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::ArmReveal { feed_id, delay });
    }

    pub fn cancel_reveal(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelReveal);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
