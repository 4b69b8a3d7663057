//! Static bonus-square layout.
//!
//! The layout is fixed for the lifetime of the process. Placing a tile on a
//! bonus square covers it visually but never removes it from the table.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Kind of bonus square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
    /// Centre square where the first word goes.
    Start,
}

impl BonusKind {
    /// Short label shown on an empty square.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BonusKind::TripleWord => "TW",
            BonusKind::DoubleWord => "DW",
            BonusKind::TripleLetter => "TL",
            BonusKind::DoubleLetter => "DL",
            BonusKind::Start => "STAR",
        }
    }

    /// Multiplier applied to the tile on this square.
    #[must_use]
    pub fn letter_multiplier(self) -> u32 {
        match self {
            BonusKind::TripleLetter => 3,
            BonusKind::DoubleLetter => 2,
            _ => 1,
        }
    }

    /// Multiplier applied to the whole move. The start square doubles.
    #[must_use]
    pub fn word_multiplier(self) -> u32 {
        match self {
            BonusKind::TripleWord => 3,
            BonusKind::DoubleWord | BonusKind::Start => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for BonusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[rustfmt::skip]
const TRIPLE_WORD: [(u8, u8); 8] = [
    (0, 0), (0, 7), (0, 14),
    (7, 0), (7, 14),
    (14, 0), (14, 7), (14, 14),
];

// Both diagonals, skipping the centre band.
#[rustfmt::skip]
const DOUBLE_WORD: [(u8, u8); 16] = [
    (1, 1), (2, 2), (3, 3), (4, 4),
    (10, 10), (11, 11), (12, 12), (13, 13),
    (1, 13), (2, 12), (3, 11), (4, 10),
    (10, 4), (11, 3), (12, 2), (13, 1),
];

#[rustfmt::skip]
const TRIPLE_LETTER: [(u8, u8); 12] = [
    (1, 5), (1, 9),
    (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13),
    (13, 5), (13, 9),
];

#[rustfmt::skip]
const DOUBLE_LETTER: [(u8, u8); 24] = [
    (0, 3), (0, 11),
    (2, 6), (2, 8),
    (3, 0), (3, 7), (3, 14),
    (6, 2), (6, 6), (6, 8), (6, 12),
    (7, 3), (7, 11),
    (8, 2), (8, 6), (8, 8), (8, 12),
    (11, 0), (11, 7), (11, 14),
    (12, 6), (12, 8),
    (14, 3), (14, 11),
];

/// The centre square.
pub const START: Position = Position::CENTER;

static LAYOUT: Lazy<FxHashMap<Position, BonusKind>> = Lazy::new(|| {
    let groups: [(&[(u8, u8)], BonusKind); 4] = [
        (&TRIPLE_WORD, BonusKind::TripleWord),
        (&DOUBLE_WORD, BonusKind::DoubleWord),
        (&TRIPLE_LETTER, BonusKind::TripleLetter),
        (&DOUBLE_LETTER, BonusKind::DoubleLetter),
    ];

    let mut map = FxHashMap::default();
    for (cells, kind) in groups {
        for &(row, col) in cells {
            map.insert(Position::from_raw(row, col), kind);
        }
    }
    map.insert(START, BonusKind::Start);
    map
});

/// Bonus at a position, if any.
#[must_use]
pub fn bonus_at(pos: Position) -> Option<BonusKind> {
    LAYOUT.get(&pos).copied()
}

/// Every bonus square, in no particular order.
pub fn bonus_squares() -> impl Iterator<Item = (Position, BonusKind)> {
    LAYOUT.iter().map(|(&pos, &kind)| (pos, kind))
}
