//! Letter tiles and where they come from.
//!
//! - `tile`: `Tile`, `TileId`, the static letter-value table
//! - `supply`: the `TileSupply` trait and its implementations

mod supply;
mod tile;

pub use supply::{RandomSupply, ScriptedSupply, TileIds, TileSupply};
pub use tile::{letter_index, letter_value, Tile, TileId, ALPHABET};
