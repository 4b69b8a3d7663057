//! Command representation.
//!
//! The renderer translates clicks and drag/drop gestures into `Command`
//! values. Each command is one atomic transition of the engine; a command
//! whose preconditions fail is dropped without changing anything.
//!
//! Accepted commands, drag starts aside, are kept as `CommandRecord`s for
//! replay/debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single engine command.
///
/// ```
/// use scrabble_engine::core::Command;
///
/// let place = Command::PlaceTile { rack_index: 0, row: 7, col: 7 };
/// assert!(!place.ends_turn());
/// assert!(Command::PassTurn.ends_turn());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move a rack tile onto an empty board cell.
    PlaceTile { rack_index: usize, row: usize, col: usize },
    /// Swap two rack slots.
    ReorderRack { from: usize, to: usize },
    /// Remember which rack slot the player started dragging.
    BeginDrag { rack_index: usize },
    /// Start choosing tiles to swap.
    EnterSwapMode,
    /// Add or remove a rack slot from the swap selection.
    ToggleSelect { rack_index: usize },
    /// Leave swap mode without swapping.
    CancelSwap,
    /// Replace the selected tiles and end the turn.
    ConfirmSwap,
    /// Score placements, refill, and end the turn.
    EndTurn,
    /// End the turn without placing anything.
    PassTurn,
    /// Throw the whole rack away and draw seven new tiles.
    RequestNewRack,
}

impl Command {
    /// Does an accepted command of this kind hand the turn to the next seat?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Command::ConfirmSwap | Command::EndTurn | Command::PassTurn)
    }

    /// Is an accepted command of this kind kept in the engine history?
    ///
    /// Drag starts only move UI state and are left out.
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Command::BeginDrag { .. })
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::PlaceTile { .. } => "place_tile",
            Command::ReorderRack { .. } => "reorder_rack",
            Command::BeginDrag { .. } => "begin_drag",
            Command::EnterSwapMode => "enter_swap_mode",
            Command::ToggleSelect { .. } => "toggle_select",
            Command::CancelSwap => "cancel_swap",
            Command::ConfirmSwap => "confirm_swap",
            Command::EndTurn => "end_turn",
            Command::PassTurn => "pass_turn",
            Command::RequestNewRack => "request_new_rack",
        }
    }
}

/// An accepted command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The command applied.
    pub command: Command,

    /// Turn number when the command was applied (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
