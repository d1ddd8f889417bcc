use std::path::PathBuf;

use clap::Parser;

/// Ask the analysis service about a stock query and watch the agent log play back.
#[derive(Debug, Parser)]
#[command(name = "sentinel", version)]
pub struct Cli {
    /// Query to analyse. Queries are read line by line from stdin when omitted.
    pub query: Vec<String>,

    /// RON config file (defaults to $SENTINEL_CONFIG, then ./sentinel.ron).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the analysis endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the delay between revealed log lines, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The positional words joined back into one query, if any were given.
    pub fn one_shot_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
