//! Sentinel engine: analysis service client, playback timer and effect execution.
mod client;
mod decode;
mod engine;
mod playback;
mod types;

pub use client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient, DEFAULT_ENDPOINT};
pub use decode::{decode_analysis, DecodeError};
pub use engine::EngineHandle;
pub use playback::PlaybackTimer;
pub use types::{
    AnalysisError, AnalysisOutcome, ChannelEventSink, EngineEvent, EventSink, FailureKind,
};
