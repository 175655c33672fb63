// headless.rs - Terminal runner: a tokio interval drives one generation per tick

use life_engine::{History, Life};
use log::info;
use tokio::time::{self, MissedTickBehavior};

use crate::config::Config;
use crate::error::AppError;

/// Why the headless loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Limit,
    Cycle,
    Interrupted,
}

pub fn run(config: &Config, mut life: Life) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let stop = runtime.block_on(drive(config, &mut life))?;
    info!(
        "stopped ({stop:?}) at generation {} with {} live cell(s)",
        life.generation(),
        life.board().population()
    );
    Ok(())
}

async fn drive(config: &Config, life: &mut Life) -> Result<Stop, AppError> {
    let mut ticker = time::interval(config.delay());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await; // first tick completes immediately

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut history = History::new();
    history.record(life.board());
    if config.print_board {
        println!("generation: {}\n{}", life.generation(), life.board());
    }

    loop {
        if config.generations.is_some_and(|limit| life.generation() >= limit) {
            return Ok(Stop::Limit);
        }
        tokio::select! {
            _ = ticker.tick() => {}
            result = &mut shutdown => {
                result?;
                return Ok(Stop::Interrupted);
            }
        }
        if let Some(stop) = advance(config, life, &mut history) {
            return Ok(stop);
        }
    }
}

// One tick: step, report, and check for a repeat
fn advance(config: &Config, life: &mut Life, history: &mut History) -> Option<Stop> {
    let flipped = life.step();
    info!(
        "generation: {} population: {} flipped: {flipped}",
        life.generation(),
        life.board().population()
    );
    if config.print_board {
        println!("generation: {}\n{}", life.generation(), life.board());
    }
    if history.record(life.board()) {
        info!("board repeats a recent generation, stopping");
        return Some(Stop::Cycle);
    }
    None
}
