//! Simulation engine for Conway's Game of Life on a bounded grid.
//!
//! The engine owns no display or timing. A caller builds a [`Life`], seeds it
//! once with a [`Pattern`] from the catalog, then calls [`Life::step`] on its
//! own clock and reads the [`Board`] between steps.
//!
//! ```
//! use life_engine::{patterns, Coord, Life};
//!
//! let mut life = Life::new(5, 5);
//! life.seed_at(&patterns::BLINKER, Coord::new(2, 1)).unwrap();
//! life.step();
//! assert!(life.is_alive(1, 2) && life.is_alive(3, 2));
//! assert_eq!(life.generation(), 1);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod history;
pub mod offsets;
pub mod patterns;
pub mod seeder;

pub use board::{Board, CellState};
pub use engine::{next_state, Life};
pub use error::SeedError;
pub use history::History;
pub use offsets::{apply_offsets, bounding_box, Coord, Extent, Offset};
pub use patterns::Pattern;
