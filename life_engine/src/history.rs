// history.rs - Spots boards that repeat within the last few generations

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::board::Board;

const HISTORY_LEN: usize = 10;

/// Ring of the last [`HISTORY_LEN`] board hashes.
#[derive(Debug, Clone, Default)]
pub struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_board(board: &Board) -> u64 {
        let mut hasher = DefaultHasher::new();
        board.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns `true` if `board` matches one of the recent boards (a still
    /// life or an oscillator of period up to 10), otherwise remembers it.
    pub fn record(&mut self, board: &Board) -> bool {
        let current = Self::hash_board(board);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&current) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = current; // circular buffer
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, BLOCK, GLIDER};
    use crate::{Coord, Life};

    #[test]
    fn still_life_is_detected_after_one_step() {
        let mut life = Life::new(6, 6);
        life.seed_at(&BLOCK, Coord::new(2, 2)).unwrap();
        let mut history = History::new();

        assert!(!history.record(life.board()));
        life.step();
        assert!(history.record(life.board()));
    }

    #[test]
    fn oscillator_is_detected_after_its_period() {
        let mut life = Life::new(5, 5);
        life.seed_at(&BLINKER, Coord::new(2, 1)).unwrap();
        let mut history = History::new();

        assert!(!history.record(life.board()));
        life.step();
        assert!(!history.record(life.board()));
        life.step();
        assert!(history.record(life.board()));
    }

    #[test]
    fn moving_glider_is_not_a_cycle() {
        let mut life = Life::new(20, 20);
        life.seed_at(&GLIDER, Coord::new(15, 15)).unwrap();
        let mut history = History::new();
        for _ in 0..12 {
            assert!(!history.record(life.board()));
            life.step();
        }
    }

    #[test]
    fn clear_forgets_everything() {
        let board = Board::new(3, 3);
        let mut history = History::new();
        history.record(&board);
        history.clear();
        assert!(!history.record(&board));
    }
}
