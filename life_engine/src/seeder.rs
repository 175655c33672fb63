// seeder.rs - Places a pattern on the board at a random anchor

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::error::SeedError;
use crate::offsets::{apply_offsets, Coord};
use crate::patterns::Pattern;

/// Fails unless some anchor on `board` holds all of `pattern`.
pub fn check_fits(board: &Board, pattern: &Pattern) -> Result<(), SeedError> {
    let extent = pattern.extent().ok_or(SeedError::EmptyPattern)?;
    if extent.fits(board.rows(), board.cols()) {
        Ok(())
    } else {
        Err(SeedError::PatternTooLarge {
            height: extent.height(),
            width: extent.width(),
            rows: board.rows(),
            cols: board.cols(),
        })
    }
}

// Every pattern cell for `anchor`, or the first one off the board
fn placement(board: &Board, pattern: &Pattern, anchor: Coord) -> Result<Vec<(usize, usize)>, SeedError> {
    if pattern.is_empty() {
        return Err(SeedError::EmptyPattern);
    }
    apply_offsets(pattern.offsets, anchor)
        .into_iter()
        .map(|coord| {
            board
                .checked(coord)
                .ok_or(SeedError::OutOfBounds { row: coord.row, col: coord.col })
        })
        .collect()
}

/// Places `pattern` at a fixed `anchor`.
///
/// Every cell is validated before any is set, so on error the board is left
/// exactly as it was.
pub fn seed_at(board: &mut Board, pattern: &Pattern, anchor: Coord) -> Result<(), SeedError> {
    for (row, col) in placement(board, pattern, anchor)? {
        board.set_alive(row, col);
    }
    Ok(())
}

/// Places `pattern` at an anchor drawn uniformly from the whole board,
/// redrawing until every cell lands on the board. Returns the anchor used.
///
/// A pattern that cannot fit anywhere is rejected up front with
/// [`SeedError::PatternTooLarge`] rather than retried forever.
pub fn seed<R: Rng + ?Sized>(board: &mut Board, pattern: &Pattern, rng: &mut R) -> Result<Coord, SeedError> {
    check_fits(board, pattern)?;

    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let anchor = Coord::new(
            rng.gen_range(0..board.rows()) as isize,
            rng.gen_range(0..board.cols()) as isize,
        );
        match placement(board, pattern, anchor) {
            Ok(cells) => {
                for (row, col) in cells {
                    board.set_alive(row, col);
                }
                debug!(
                    "seeded {} at ({}, {}) after {attempts} attempt(s)",
                    pattern.name, anchor.row, anchor.col
                );
                return Ok(anchor);
            }
            Err(SeedError::OutOfBounds { row, col }) => {
                trace!(
                    "anchor ({}, {}) rejected for {}: cell ({row}, {col}) off the board",
                    anchor.row, anchor.col, pattern.name
                );
            }
            Err(err) => return Err(err),
        }
    }
}
