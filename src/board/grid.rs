//! The 15x15 board.
//!
//! Cells are stored flat, row-major (`row * 15 + col`), in an `im::Vector`
//! so a snapshot of the board is an O(1) clone.
//!
//! Decoding re-checks bounds: an off-board `Position` or a board with the
//! wrong cell count fails to deserialize.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::bonus::{bonus_at, BonusKind};
use crate::core::BoardError;
use crate::tiles::Tile;

/// Cells per side.
pub const BOARD_SIZE: usize = 15;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// An in-range board coordinate.
///
/// Only constructible (or decodable) for `row, col < 15`, so holding a `Position` means
/// the bounds check already happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = BoardError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(BoardError::OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// The centre square, (7, 7).
    pub const CENTER: Position = Position { row: 7, col: 7 };

    /// Validate a coordinate pair.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self::from_raw(row as u8, col as u8))
    }

    pub(crate) const fn from_raw(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Index into row-major storage.
    #[inline]
    fn flat(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::from_raw(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One cell as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub tile: Option<Tile>,
    pub bonus: Option<BonusKind>,
}

/// The board grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Vector<Option<Tile>>,
}

#[derive(Deserialize)]
struct RawBoard {
    cells: Vector<Option<Tile>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != CELL_COUNT {
            return Err(BoardError::CellCount {
                found: raw.cells.len(),
                expected: CELL_COUNT,
            });
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::iter::repeat(None).take(CELL_COUNT).collect(),
        }
    }

    /// Tile at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.cells[pos.flat()].as_ref()
    }

    /// Is the cell at `(row, col)` free?
    ///
    /// Returns `None` for an out-of-range coordinate.
    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> Option<bool> {
        Position::new(row, col).map(|pos| self.is_empty_at(pos))
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Put a tile on an empty cell.
    ///
    /// An occupied cell is left alone and the tile is handed back.
    pub fn place(&mut self, pos: Position, tile: Tile) -> Result<(), Tile> {
        let cell = &mut self.cells[pos.flat()];
        if cell.is_some() {
            return Err(tile);
        }
        *cell = Some(tile);
        Ok(())
    }

    /// Bonus square at `(row, col)`, if any. Out-of-range gives `None`.
    #[must_use]
    pub fn bonus_at(&self, row: usize, col: usize) -> Option<BonusKind> {
        Position::new(row, col).and_then(bonus_at)
    }

    /// All 225 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Position::all().zip(self.cells.iter()).map(|(position, tile)| Cell {
            position,
            tile: *tile,
            bonus: bonus_at(position),
        })
    }

    /// Occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        Position::all()
            .zip(self.cells.iter())
            .filter_map(|(pos, tile)| tile.as_ref().map(|t| (pos, t)))
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
