// patterns.rs - Named starting patterns, as offsets from an anchor cell

use crate::offsets::{bounding_box, Extent, Offset};

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [Offset],
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn extent(&self) -> Option<Extent> {
        bounding_box(self.offsets)
    }
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    offsets: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1)],
};

// Extends one column left of its anchor
pub const F_PENTOMINO: Pattern = Pattern {
    name: "f-pentomino",
    offsets: &[(0, 0), (0, 1), (1, -1), (1, 0), (2, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    offsets: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    offsets: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    offsets: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    offsets: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    offsets: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

#[rustfmt::skip]
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    offsets: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    offsets: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
        (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    F_PENTOMINO,
    BLOCK,
    BLINKER,
    TOAD,
    BEACON,
    R_PENTOMINO,
    PULSAR,
    GOSPER_GLIDER_GUN,
];

/// Looks a pattern up by name, ignoring case and treating `_` as `-`.
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    PATTERNS.iter().find(|pattern| pattern.name == wanted)
}

/// Catalog names, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|pattern| pattern.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = names().collect();
        assert_eq!(names.len(), PATTERNS.len());
    }

    #[test]
    fn no_pattern_repeats_a_cell() {
        for pattern in PATTERNS {
            let cells: HashSet<_> = pattern.offsets.iter().collect();
            assert_eq!(cells.len(), pattern.len(), "{} repeats a cell", pattern.name);
            assert!(!pattern.is_empty());
        }
    }

    #[test]
    fn find_is_forgiving_about_spelling() {
        assert_eq!(find("glider").map(|p| p.name), Some("glider"));
        assert_eq!(find("F_Pentomino").map(|p| p.name), Some("f-pentomino"));
        assert_eq!(find(" Gosper-Glider-Gun ").map(|p| p.name), Some("gosper-glider-gun"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(GLIDER.len(), 5);
        assert_eq!(F_PENTOMINO.len(), 5);
        assert_eq!(PULSAR.len(), 48);
        assert_eq!(GOSPER_GLIDER_GUN.len(), 36);
    }

    #[test]
    fn extents_match_known_shapes() {
        let gun = GOSPER_GLIDER_GUN.extent().unwrap();
        assert_eq!((gun.height(), gun.width()), (9, 36));
        let pulsar = PULSAR.extent().unwrap();
        assert_eq!((pulsar.height(), pulsar.width()), (13, 13));
        let f = F_PENTOMINO.extent().unwrap();
        assert_eq!(f.min, (0, -1));
    }
}
