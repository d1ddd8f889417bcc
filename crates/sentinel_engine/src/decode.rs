use serde_json::{Map, Value};

use sentinel_core::{AnalysisResult, Decision};

use crate::AnalysisOutcome;

const UNKNOWN_TICKER: &str = "UNKNOWN";
const UNKNOWN_DECISION: &str = "Unknown";
const MISSING_ANALYSIS: &str = "No analysis provided.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is not a JSON list of results: {0}")]
    InvalidBody(String),
}

/// Builds one result from a response object.
///
/// Each field is read on its own: absent, null or wrongly typed values fall
/// back to a neutral default so one bad field never sinks the batch.
fn result_from_object(object: &Map<String, Value>) -> AnalysisResult {
    let decision_label = text_field(object, "decision")
        .unwrap_or_else(|| UNKNOWN_DECISION.to_string());
    AnalysisResult {
        ticker: text_field(object, "ticker").unwrap_or_else(|| UNKNOWN_TICKER.to_string()),
        decision: Decision::from_label(&decision_label),
        decision_label,
        confidence: confidence_field(object).unwrap_or(0),
        summary: text_field(object, "analysis").unwrap_or_else(|| MISSING_ANALYSIS.to_string()),
    }
}

/// Non-blank strings, trimmed. Numbers are accepted as their JSON text (`"ticker": 500325`).
fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match object.get(key)? {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Numbers or numeric strings, rounded and clamped into 0..=100.
fn confidence_field(object: &Map<String, Value>) -> Option<u8> {
    let value = match object.get("confidence")? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then(|| value.round().clamp(0.0, 100.0) as u8)
}

/// Decode a response body: empty or `null` -> `None`, a list of objects -> results in order.
pub fn decode_analysis(bytes: &[u8]) -> Result<AnalysisOutcome, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let wire: Option<Vec<Map<String, Value>>> =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidBody(err.to_string()))?;
    Ok(wire.map(|items| items.iter().map(result_from_object).collect()))
}
