use std::io::{self, Write};
use std::time::Duration;

use sentinel_core::{Effect, Msg};
use sentinel_engine::{EngineEvent, EngineHandle};
use sentinel_logging::{sentinel_info, sentinel_warn};

use super::store::EffectSink;

/// Bridges core effects to the engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Waits up to `timeout` for the next engine event, as a message.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(into_msg)
    }
}

impl EffectSink for EffectRunner {
    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RequestAnalysis { request_id, query } => {
                sentinel_info!("RequestAnalysis request_id={} query={:?}", request_id, query);
                self.engine.analyze(request_id, query);
            }
            Effect::ArmReveal { feed_id, delay } => self.engine.arm_reveal(feed_id, delay),
            Effect::CancelReveal => self.engine.cancel_reveal(),
            Effect::ScrollLogToBottom => {
                // A terminal keeps its tail in view once output is flushed.
                if let Err(err) = io::stdout().flush() {
                    sentinel_warn!("stdout flush failed: {}", err);
                }
            }
        }
    }
}

pub fn into_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted { request_id, result } => match result {
            Ok(results) => Msg::AnalysisSucceeded {
                request_id,
                results,
            },
            Err(err) => Msg::AnalysisFailed {
                request_id,
                message: err.to_string(),
            },
        },
        EngineEvent::RevealDue { feed_id } => Msg::RevealDue { feed_id },
    }
}
