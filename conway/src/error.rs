use life_engine::SeedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown pattern `{0}` (try one of: {names})", names = life_engine::patterns::names().collect::<Vec<_>>().join(", "))]
    UnknownPattern(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not seed the board: {0}")]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
