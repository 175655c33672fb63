// engine.rs - Generation engine: the B3/S23 rule applied to a whole board at once

use log::trace;
use rand::Rng;

use crate::board::{Board, CellState};
use crate::error::SeedError;
use crate::offsets::Coord;
use crate::patterns::Pattern;
use crate::seeder;

/// Next state of a cell with `alive_neighbours` alive Moore neighbours.
pub fn next_state(state: CellState, alive_neighbours: u8) -> CellState {
    match (state, alive_neighbours) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,  // Survival
        (CellState::Dead, 3)                          => CellState::Alive,  // Birth
        _                                             => CellState::Dead,   // Death or stays dead
    }
}

/// A board plus the number of generations it has advanced.
#[derive(Debug, Clone)]
pub struct Life {
    board: Board,
    generation: u64,
}

impl Life {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_board(Board::new(rows, cols))
    }

    pub fn from_board(board: Board) -> Self {
        Self { board, generation: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.board.is_alive(row, col)
    }

    /// Clears the board and restarts the generation count.
    pub fn reset(&mut self) {
        self.board.reset();
        self.generation = 0;
    }

    /// Clears the board and places `pattern` at a random anchor.
    ///
    /// A pattern that can never fit is rejected before the board is touched.
    pub fn reseed<R: Rng + ?Sized>(&mut self, pattern: &Pattern, rng: &mut R) -> Result<Coord, SeedError> {
        seeder::check_fits(&self.board, pattern)?;
        self.reset();
        seeder::seed(&mut self.board, pattern, rng)
    }

    /// Places `pattern` at `anchor` on top of the current board.
    pub fn seed_at(&mut self, pattern: &Pattern, anchor: Coord) -> Result<(), SeedError> {
        seeder::seed_at(&mut self.board, pattern, anchor)
    }

    /// Advances one generation and returns how many cells flipped.
    ///
    /// Flips are decided against the board as it stood before the step and
    /// applied together afterwards, so no cell sees a neighbour's new state.
    pub fn step(&mut self) -> usize {
        let board = &self.board;
        let flips: Vec<(usize, usize)> = board
            .positions()
            .filter(|&(row, col)| {
                let state = board.get(row, col);
                next_state(state, board.neighbor_alive_count(row, col)) != state
            })
            .collect();

        for &(row, col) in &flips {
            self.board.toggle(row, col);
        }
        self.generation += 1;

        trace!("generation {}: {} cell(s) flipped", self.generation, flips.len());
        flips.len()
    }

    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, BLOCK, GLIDER};

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(CellState::Alive, n).is_alive(), survives, "alive with {n}");
            assert_eq!(next_state(CellState::Dead, n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn lone_cell_dies() {
        let mut life = Life::new(3, 3);
        life.board_mut().set_alive(1, 1);
        assert_eq!(life.step(), 1);
        assert_eq!(life.board().population(), 0);
    }

    #[test]
    fn empty_board_stays_empty_and_still_counts() {
        let mut life = Life::new(4, 4);
        assert_eq!(life.step(), 0);
        assert_eq!(life.generation(), 1);
        assert_eq!(life.board().population(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let mut life = Life::new(5, 5);
        life.seed_at(&BLINKER, Coord::new(2, 1)).unwrap();
        let start = life.board().clone();

        life.step();
        let vertical: Vec<_> = life.board().alive_cells().collect();
        assert_eq!(vertical, vec![(1, 2), (2, 2), (3, 2)]);

        life.step();
        assert_eq!(life.board(), &start);
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn block_is_still() {
        let mut life = Life::new(6, 6);
        life.seed_at(&BLOCK, Coord::new(2, 2)).unwrap();
        let start = life.board().clone();
        assert_eq!(life.step(), 0);
        assert_eq!(life.board(), &start);
    }

    #[test]
    fn glider_moves_diagonally() {
        let mut life = Life::new(12, 12);
        life.seed_at(&GLIDER, Coord::new(5, 5)).unwrap();

        life.steps(4);

        let mut expected = Board::new(12, 12);
        seeder::seed_at(&mut expected, &GLIDER, Coord::new(4, 4)).unwrap();
        assert_eq!(life.board(), &expected);
        assert_eq!(life.generation(), 4);
    }

    #[test]
    fn glider_at_the_corner_is_clipped_by_the_edge() {
        let mut life = Life::new(5, 5);
        life.seed_at(&GLIDER, Coord::new(0, 0)).unwrap();
        life.step();
        let alive: Vec<_> = life.board().alive_cells().collect();
        assert_eq!(alive, vec![(0, 0), (0, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn reset_clears_generation() {
        let mut life = Life::new(5, 5);
        life.seed_at(&BLINKER, Coord::new(2, 1)).unwrap();
        life.steps(3);
        life.reset();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.board().population(), 0);
    }

    #[test]
    fn reseed_keeps_board_when_pattern_cannot_fit() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut life = Life::new(2, 2);
        life.seed_at(&BLOCK, Coord::new(0, 0)).unwrap();
        life.step();

        let err = life.reseed(&GLIDER, &mut rng).unwrap_err();
        assert!(matches!(err, SeedError::PatternTooLarge { .. }));
        assert_eq!(life.board().population(), 4);
        assert_eq!(life.generation(), 1);
    }
}
