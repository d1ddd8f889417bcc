use colored::{ColoredString, Colorize};
use sentinel_core::{Decision, LogTone};

pub fn paint_line(text: &str, tone: LogTone) -> ColoredString {
    match tone {
        LogTone::Info => text.bright_blue(),
        LogTone::Muted => text.dimmed(),
        LogTone::Success => text.green(),
        LogTone::Warning => text.yellow(),
        LogTone::Error => text.red(),
    }
}

/// Service wording in capitals, coloured by the mapped decision.
pub fn paint_decision(label: &str, decision: Decision) -> ColoredString {
    let label = label.to_uppercase();
    if decision.is_justified() {
        label.green().bold()
    } else {
        label.yellow().bold()
    }
}

/// Fixed-width bar for a 0..=100 percentage.
pub fn confidence_bar(confidence: u8, width: usize) -> String {
    let filled = (usize::from(confidence.min(100)) * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
