//! Error types.
//!
//! `Rejection` names why a command was ignored. Commands never return it;
//! the engine logs it and leaves state untouched. `TurnEngine::check`
//! exposes it so a renderer can disable controls ahead of time.
//!
//! `ConfigError` is returned when building a game from a bad `GameConfig`.
//!
//! `BoardError` is returned when decoding a board or coordinate that does
//! not fit the 15x15 grid.

use thiserror::Error;

use crate::board::Position;

/// Why a command had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not allowed while selecting tiles to swap")]
    Swapping,

    #[error("only allowed while selecting tiles to swap")]
    NotSwapping,

    #[error("rack slot {0} is out of range")]
    SlotOutOfRange(usize),

    #[error("rack slot {0} is empty")]
    EmptySlot(usize),

    #[error("cannot move a rack slot onto itself")]
    SameSlot,

    #[error("no rack tile is being dragged")]
    NoDragSource,

    #[error("board cell ({row}, {col}) is out of range")]
    CellOutOfRange { row: usize, col: usize },

    #[error("board cell {0} is already occupied")]
    Occupied(Position),

    #[error("tiles have already been placed this turn")]
    TilesPlaced,

    #[error("no tiles selected to swap")]
    EmptySelection,
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{count} players requested, expected 1 to {max}")]
    PlayerCount { count: usize, max: usize },

    #[error("player in seat {seat} has a blank name")]
    BlankName { seat: usize },
}

/// Decoded board data that does not fit the grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position ({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("board has {found} cells, expected {expected}")]
    CellCount { found: usize, expected: usize },
}
