// board.rs - Fixed-size board for Conway's Game of Life

use std::fmt;

use crate::offsets::{Coord, Offset};

/// State of a single cell. Cells carry no age or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

// Moore neighbourhood, row-major, centre excluded
#[rustfmt::skip]
const NEIGHBOURS: [Offset; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A `rows x cols` grid of cells with bounded edges.
///
/// Cell accessors take `(row, col)` and panic when the position lies outside
/// the board: callers are expected to have checked bounds already, see
/// [`Board::checked`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>, // row-major
}

impl Board {
    /// An all-dead board. Panics if either dimension is zero or the cell
    /// count does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero, got {rows}x{cols}");
        let Some(len) = rows.checked_mul(cols) else {
            panic!("a {rows}x{cols} board has too many cells");
        };
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sets every cell dead.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        let index = self.index(row, col);
        self.cells[index] = state;
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    pub fn set_alive(&mut self, row: usize, col: usize) {
        self.set(row, col, CellState::Alive);
    }

    pub fn set_dead(&mut self, row: usize, col: usize) {
        self.set(row, col, CellState::Dead);
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = self.cells[index].flipped();
    }

    /// The unsigned position of `coord`, or `None` if it lies off the board.
    ///
    /// Both bounds are tested while the coordinate is still signed, so a
    /// neighbour at `-1` is rejected instead of wrapping to a huge index.
    pub fn checked(&self, coord: Coord) -> Option<(usize, usize)> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.checked(coord).is_some()
    }

    /// Alive cells among the 8 Moore neighbours of `(row, col)`.
    /// Neighbours beyond the edge do not count.
    pub fn neighbor_alive_count(&self, row: usize, col: usize) -> u8 {
        self.index(row, col); // precondition: in bounds
        let centre = Coord::new(row as isize, col as isize);
        NEIGHBOURS
            .iter()
            .filter_map(|&offset| self.checked(centre.offset(offset)))
            .filter(|&(r, c)| self.is_alive(r, c))
            .count() as u8
    }

    /// Every `(row, col)` position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Positions of alive cells, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(|(index, _)| (index / self.cols, index % self.cols))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for state in row {
                f.write_str(if state.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
