//! Board grid and bonus layout.
//!
//! - `grid`: `Board`, `Position`, `Cell`
//! - `bonus`: `BonusKind` and the static premium-square table

mod bonus;
mod grid;

pub use bonus::{bonus_at, bonus_squares, BonusKind, START};
pub use grid::{Board, Cell, Position, BOARD_SIZE, CELL_COUNT};
