//! Terminal front end: wiring between the pure core, the engine and the screen.
mod app;
mod config;
mod effects;
mod persistence;
mod ui;

use clap::Parser;

use config::AppConfig;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    stories_logging::initialize(&config.log_file, config.log_level());
    app::run(config)
}
