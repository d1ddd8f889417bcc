//! Terminal surface for the analysis session: config, store, effects and rendering.
mod app;
mod cli;
mod config;
mod effects;
mod store;
mod ui;

pub use app::run_app;
