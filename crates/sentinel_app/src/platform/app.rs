use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use sentinel_core::{AppState, Msg};
use sentinel_engine::EngineHandle;
use sentinel_logging::{sentinel_info, sentinel_warn};

use super::cli::Cli;
use super::config::SentinelConfig;
use super::effects::EffectRunner;
use super::store::Store;
use super::ui::render::TerminalRenderer;

/// Poll interval of the dispatch loop.
const POLL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_problem) = match SentinelConfig::resolve(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (SentinelConfig::default(), Some(err)),
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    sentinel_logging::initialize(config.log_destination, level, config.log_file.as_deref());
    if let Some(err) = config_problem {
        sentinel_warn!("{}; using defaults", err);
    }

    if let Some(endpoint) = cli.endpoint.clone() {
        config.endpoint = endpoint;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.reveal_delay_ms = delay_ms;
    }
    sentinel_info!(
        "endpoint={} reveal_delay_ms={}",
        config.endpoint,
        config.reveal_delay_ms
    );

    let engine = EngineHandle::new(config.client_settings()).context("starting engine runtime")?;
    let mut runner = EffectRunner::new(engine);

    let initial =
        AppState::with_reveal_delay(config.reveal_delay()).with_query(config.default_query.clone());
    let mut store = Store::new(initial);
    store.subscribe(Box::new(TerminalRenderer::new(io::stdout())));

    match cli.one_shot_query() {
        Some(query) => {
            store.dispatch(Msg::QueryChanged(query), &mut runner);
            store.dispatch(Msg::SubmitClicked, &mut runner);
            while !store.state().is_settled() {
                if let Some(msg) = runner.next_msg(POLL) {
                    store.dispatch(msg, &mut runner);
                }
            }
        }
        None => run_interactive(&mut store, &mut runner),
    }

    Ok(())
}

/// Each stdin line is one submission. Lines typed while a request is in
/// flight hit the loading guard and are dropped.
fn run_interactive(store: &mut Store, runner: &mut EffectRunner) {
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!(
        "Type a query and press Enter, e.g. \"{}\".",
        store.state().query()
    );
    let mut stdin_open = true;
    loop {
        if stdin_open {
            match line_rx.try_recv() {
                Ok(line) => {
                    store.dispatch(Msg::QueryChanged(line), runner);
                    store.dispatch(Msg::SubmitClicked, runner);
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => stdin_open = false,
            }
        } else if store.state().is_settled() {
            break;
        }

        if let Some(msg) = runner.next_msg(POLL) {
            store.dispatch(msg, runner);
        }
    }
}
