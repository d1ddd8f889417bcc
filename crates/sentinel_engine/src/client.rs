use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use sentinel_logging::{sentinel_debug, sentinel_info};

use crate::decode::decode_analysis;
use crate::{AnalysisError, AnalysisOutcome, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/analyze";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 2 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    query: &'a str,
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    /// One atomic request/response exchange for `query`.
    async fn analyze(&self, query: &str) -> Result<AnalysisOutcome, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalysisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> AnalysisError {
        AnalysisError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_response_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, query: &str) -> Result<AnalysisOutcome, AnalysisError> {
        let endpoint = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| AnalysisError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(&AnalyzeRequest { query })
            .map_err(|err| AnalysisError::new(FailureKind::Decode, err.to_string()))?;
        let client = self.build_client()?;

        sentinel_info!("POST {} query_len={}", endpoint, query.len());
        let response = client
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_response_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_response_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        sentinel_debug!("analysis response received bytes={}", bytes.len());

        decode_analysis(&bytes)
            .map_err(|err| AnalysisError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    if err.is_timeout() {
        return AnalysisError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() || err.is_body() {
        return AnalysisError::new(FailureKind::Decode, err.to_string());
    }
    AnalysisError::new(FailureKind::Network, err.to_string())
}
