//! Letter tiles and the static letter-value table.

use serde::{Deserialize, Serialize};

/// Every letter a supply can produce, in alphabetical order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Point values, parallel to `ALPHABET`.
const VALUES: [u8; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Position of an uppercase letter in `ALPHABET`.
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

/// Point value of an uppercase letter, or `None` for anything else.
///
/// ```
/// use scrabble_engine::tiles::letter_value;
///
/// assert_eq!(letter_value('E'), Some(1));
/// assert_eq!(letter_value('Q'), Some(10));
/// assert_eq!(letter_value('e'), None);
/// ```
#[must_use]
pub fn letter_value(letter: char) -> Option<u8> {
    letter_index(letter).map(|i| VALUES[i])
}

/// Identity of one physical tile.
///
/// Two `A` tiles are different tiles; the id tells them apart when
/// checking that a tile is never on the board and in the rack at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile#{}", self.0)
    }
}

/// A letter tile. Immutable once drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    letter: char,
    value: u8,
}

impl Tile {
    /// Create a tile for an uppercase letter, valued from the letter table.
    ///
    /// Returns `None` for anything outside `A..=Z`.
    #[must_use]
    pub fn new(id: TileId, letter: char) -> Option<Self> {
        letter_index(letter).map(|i| Self::nth(id, i))
    }

    /// Tile for `ALPHABET[index]`. `index` must be below 26.
    pub(crate) fn nth(id: TileId, index: usize) -> Self {
        Self {
            id,
            letter: ALPHABET[index],
            value: VALUES[index],
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.value)
    }
}
