use crate::{AnalysisResult, AppState, Effect, LogEntry, LogTone, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // One request at a time; a forced resubmit while loading is dropped.
            if state.is_loading() {
                return (state, Vec::new());
            }

            let (request_id, cancel) = state.begin_request();
            let query = state.query().to_string();
            for entry in progress_entries(&query) {
                state.append_log(entry);
            }

            let mut effects = vec![cancel, Effect::RequestAnalysis { request_id, query }];
            effects.extend(state.arm_playback());
            effects
        }
        Msg::AnalysisSucceeded {
            request_id,
            results,
        } => {
            if !state.settle_request(request_id) {
                return (state, Vec::new());
            }
            apply_results(&mut state, results.unwrap_or_default());
            state.arm_playback().into_iter().collect()
        }
        Msg::AnalysisFailed {
            request_id,
            message,
        } => {
            if !state.settle_request(request_id) {
                return (state, Vec::new());
            }
            state.append_log(LogEntry::new(
                format!("Error connecting to server: {message}"),
                LogTone::Error,
            ));
            state.arm_playback().into_iter().collect()
        }
        Msg::RevealDue { feed_id } => state.playback_tick(feed_id).unwrap_or_default(),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Illustrative progress lines logged as soon as a query is submitted.
///
/// They describe what the service is about to do; they are not driven by
/// remote progress.
pub fn progress_entries(query: &str) -> Vec<LogEntry> {
    vec![
        LogEntry::new("Starting Agentic Sentinel...", LogTone::Info),
        LogEntry::new(format!("User Query: \"{query}\""), LogTone::Muted),
        LogEntry::new("Translated to Screener.in syntax...", LogTone::Muted),
        LogEntry::new("Scraping target companies...", LogTone::Warning),
    ]
}

fn apply_results(state: &mut AppState, results: Vec<AnalysisResult>) {
    if results.is_empty() {
        state.append_log(LogEntry::new(
            "No companies found matching criteria.",
            LogTone::Error,
        ));
        return;
    }

    for result in &results {
        state.append_log(LogEntry::new(
            format!("[{}] Decision: {}", result.ticker, result.decision_label),
            result.decision.tone(),
        ));
    }
    state.replace_results(results);
}
