// config.rs - Command line configuration

use std::time::Duration;

use clap::Parser;
use life_engine::patterns::{self, Pattern};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::AppError;

// 1200x700 window at 20px per cell
pub const DEFAULT_ROWS: usize = 35;
pub const DEFAULT_COLS: usize = 60;
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const MAX_CELLS: usize = 4_000_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "conway", version, about = "Conway's Game of Life on a bounded grid")]
pub struct Config {
    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Starting pattern, placed once at a random anchor
    #[arg(long, default_value = "f-pentomino")]
    pub pattern: String,

    /// Delay between generations, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Fix the random anchor for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run in the terminal without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many generations (headless only)
    #[arg(long, requires = "headless")]
    pub generations: Option<u64>,

    /// Print the board after every generation (headless only)
    #[arg(long, requires = "headless")]
    pub print_board: bool,

    /// Cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,
}

impl Config {
    /// Checks ranges and resolves the pattern name.
    pub fn validate(&self) -> Result<&'static Pattern, AppError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(AppError::InvalidConfig(format!(
                "board must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(AppError::InvalidConfig(format!(
                    "a {}x{} board exceeds the {MAX_CELLS} cell limit",
                    self.rows, self.cols
                )));
            }
        }
        if self.delay_ms == 0 {
            return Err(AppError::InvalidConfig("delay must be at least 1ms".into()));
        }
        if !(self.cell_size.is_finite() && self.cell_size >= 2.0) {
            return Err(AppError::InvalidConfig(format!(
                "cell size must be at least 2px, got {}",
                self.cell_size
            )));
        }
        patterns::find(&self.pattern).ok_or_else(|| AppError::UnknownPattern(self.pattern.clone()))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
