//! # scrabble-engine
//!
//! Game-state engine for a local, turn-based tile-placement word game.
//! Up to four players share one device, one board and one rack.
//!
//! ## Design Principles
//!
//! 1. **Engine owns state**: Renderers read `GameSnapshot`s and issue
//!    commands. Nothing outside `TurnEngine` mutates the board or rack.
//!
//! 2. **Silent rejection**: A command whose preconditions fail changes
//!    nothing and returns nothing. `TurnEngine::check` reports why.
//!
//! 3. **Injected randomness**: Tiles come from a `TileSupply`. Live play
//!    uses a seeded `RandomSupply`; tests use `ScriptedSupply`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Board, placements and history use
//!   `im-rs` vectors, so snapshots are cheap to take and never change.
//!
//! - **No word validation**: Any placement on an empty cell is accepted.
//!   Scoring is the sum of tile values unless `ScoringRule::Premium` is
//!   configured.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, commands, rejection reasons, RNG
//! - `tiles`: Tiles, letter values, tile supplies
//! - `board`: 15x15 grid and bonus layout
//! - `rack`: Seven-slot rack and swap selection
//! - `engine`: Turn state machine, scoring, snapshots

pub mod board;
pub mod core;
pub mod engine;
pub mod rack;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord,
    ConfigError, Rejection,
    GameConfig, ScoringRule, MAX_PLAYERS,
    GameRng, GameRngState,
    Player, PlayerId, PlayerMap,
};

pub use crate::tiles::{RandomSupply, ScriptedSupply, Tile, TileId, TileSupply};

pub use crate::board::{Board, BonusKind, Cell, Position, BOARD_SIZE};

pub use crate::rack::{Rack, Selection, RACK_SIZE};

pub use crate::engine::{turn_score, Controls, GameSnapshot, Mode, Placement, TurnEngine};
