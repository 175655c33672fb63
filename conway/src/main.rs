// main.rs - Conway's Game of Life: seeds a board once, then steps it on a clock
// The window (ui.rs) or the terminal runner (headless.rs) decides when to step.

use std::process::ExitCode;

use clap::Parser;
use life_engine::Life;
use log::{error, info};

mod config;    // Command line flags
mod error;     // Application errors
mod headless;  // Terminal runner
mod ui;        // eframe window

use config::Config;
use error::AppError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let pattern = config.validate()?;
    let mut rng = config.rng();

    let mut life = Life::new(config.rows, config.cols);
    let anchor = life.reseed(pattern, &mut rng)?;
    info!(
        "{}x{} board seeded with {} at ({}, {})",
        config.rows, config.cols, pattern.name, anchor.row, anchor.col
    );

    if config.headless {
        headless::run(config, life)
    } else {
        ui::run(config, pattern, life, rng)
    }
}
