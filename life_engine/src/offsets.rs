// offsets.rs - Relative pattern offsets and their placement on the board

use std::ops::RangeInclusive;

/// A `(drow, dcol)` pair relative to a pattern's origin.
pub type Offset = (isize, isize);

/// A signed board coordinate. May lie outside the board until checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// This coordinate shifted by `offset`.
    pub const fn offset(self, (drow, dcol): Offset) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }
}

impl From<(isize, isize)> for Coord {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

/// Absolute coordinates of every offset placed at `anchor`, in input order.
///
/// No bounds checking happens here.
pub fn apply_offsets(offsets: &[Offset], anchor: Coord) -> Vec<Coord> {
    offsets.iter().map(|&offset| anchor.offset(offset)).collect()
}

/// Smallest rectangle of offsets covering a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min: Offset,
    pub max: Offset,
}

impl Extent {
    pub fn height(&self) -> usize {
        (self.max.0 - self.min.0) as usize + 1
    }

    pub fn width(&self) -> usize {
        (self.max.1 - self.min.1) as usize + 1
    }

    /// Anchor rows that keep the whole pattern inside `rows`, if any.
    pub fn anchor_rows(&self, rows: usize) -> Option<RangeInclusive<isize>> {
        anchor_span(self.min.0, self.max.0, rows)
    }

    /// Anchor columns that keep the whole pattern inside `cols`, if any.
    pub fn anchor_cols(&self, cols: usize) -> Option<RangeInclusive<isize>> {
        anchor_span(self.min.1, self.max.1, cols)
    }

    /// Whether at least one anchor on a `rows x cols` board holds the pattern.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        self.anchor_rows(rows).is_some() && self.anchor_cols(cols).is_some()
    }
}

// Anchors `a` in [0, len) with `a + lo >= 0` and `a + hi < len`.
fn anchor_span(lo: isize, hi: isize, len: usize) -> Option<RangeInclusive<isize>> {
    let last = len as isize - 1;
    let start = (-lo).max(0);
    let end = (last - hi).min(last);
    (start <= end).then_some(start..=end)
}

/// Bounding box of `offsets`, `None` when the list is empty.
pub fn bounding_box(offsets: &[Offset]) -> Option<Extent> {
    let (&first, rest) = offsets.split_first()?;
    let extent = rest.iter().fold(
        Extent { min: first, max: first },
        |acc, &(row, col)| Extent {
            min: (acc.min.0.min(row), acc.min.1.min(col)),
            max: (acc.max.0.max(row), acc.max.1.max(col)),
        },
    );
    Some(extent)
}
