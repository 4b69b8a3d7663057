//! The turn engine and the views it produces.
//!
//! - `turn`: `TurnEngine`, `Mode`, `Placement`
//! - `scoring`: `turn_score` for both scoring rules
//! - `snapshot`: `GameSnapshot` and `Controls` for renderers

mod scoring;
mod snapshot;
mod turn;

pub use scoring::turn_score;
pub use snapshot::{Controls, GameSnapshot};
pub use turn::{Mode, Placement, TurnEngine};
