//! Error types for life_engine.

use thiserror::Error;

/// Errors raised while placing a pattern on a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The pattern has no cells to place.
    #[error("pattern has no cells")]
    EmptyPattern,

    /// A pattern cell landed outside the board for the chosen anchor.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Row of the offending cell.
        row: isize,
        /// Column of the offending cell.
        col: isize,
    },

    /// No anchor on the board can hold the whole pattern.
    #[error("pattern spans {height}x{width} and never fits a {rows}x{cols} board")]
    PatternTooLarge {
        /// Rows spanned by the pattern.
        height: usize,
        /// Columns spanned by the pattern.
        width: usize,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },
}
