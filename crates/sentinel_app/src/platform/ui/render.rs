use std::io::Write;

use chrono::Local;
use sentinel_core::{AppViewModel, FeedId, SessionState};
use sentinel_logging::sentinel_warn;

use super::theme::{confidence_bar, paint_decision, paint_line};
use crate::platform::store::ViewObserver;

const BAR_WIDTH: usize = 20;
const PLACEHOLDER: &str = "Run a search to see AI analysis results here.";

/// Prints the log as it is revealed, then the verdicts once playback catches up.
pub struct TerminalRenderer<W: Write> {
    out: W,
    feed_id: FeedId,
    printed_lines: usize,
    results_printed: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            feed_id: 0,
            printed_lines: 0,
            results_printed: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, view: &AppViewModel) -> std::io::Result<()> {
        if view.feed_id != self.feed_id {
            self.feed_id = view.feed_id;
            self.printed_lines = 0;
            self.results_printed = false;
            writeln!(
                self.out,
                "\n== agent_executor [{}] {} ==",
                Local::now().format("%H:%M:%S"),
                view.query
            )?;
        }

        for line in view.lines.iter().skip(self.printed_lines) {
            writeln!(
                self.out,
                "{:02}  {}",
                line.number,
                paint_line(&line.text, line.tone)
            )?;
        }
        self.printed_lines = self.printed_lines.max(view.lines.len());

        let caught_up = view.session == SessionState::Idle && !view.show_cursor;
        if caught_up && !self.results_printed && view.feed_id != 0 {
            self.results_printed = true;
            if view.show_placeholder {
                writeln!(self.out, "\n{PLACEHOLDER}")?;
            }
            for result in &view.results {
                writeln!(
                    self.out,
                    "\n{} Analysis  {}",
                    result.ticker,
                    paint_decision(&result.decision_label, result.decision)
                )?;
                writeln!(
                    self.out,
                    "  confidence [{}] {}%",
                    confidence_bar(result.confidence, BAR_WIDTH),
                    result.confidence
                )?;
                writeln!(self.out, "  {}", result.summary)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> ViewObserver for TerminalRenderer<W> {
    fn on_view(&mut self, view: &AppViewModel) {
        if let Err(err) = self.render(view) {
            sentinel_warn!("render failed: {}", err);
        }
    }
}
