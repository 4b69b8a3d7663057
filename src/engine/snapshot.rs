//! Read-only view handed to the renderer after each command.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Mode, Placement};
use crate::board::Board;
use crate::core::{Player, PlayerId};
use crate::rack::Rack;

/// Which buttons the renderer should enable.
///
/// Each flag is true when the matching command would currently be accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub swap: bool,
    pub confirm_swap: bool,
    pub cancel_swap: bool,
    pub pass: bool,
    pub end_turn: bool,
}

/// Complete game view at one point in time.
///
/// Board and placements are persistent vectors, so taking a snapshot is
/// cheap and later commands never change an already-taken one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub rack: Rack,
    /// Players in seating order.
    pub players: Vec<Player>,
    pub current_player: PlayerId,
    pub mode: Mode,
    /// Selected rack slots, in selection order.
    pub selected: Vec<usize>,
    pub drag_source: Option<usize>,
    pub placements: Vector<Placement>,
    /// Starts at 1.
    pub turn_number: u32,
    pub controls: Controls,
}

impl GameSnapshot {
    /// Whether swap mode is active.
    #[must_use]
    pub fn is_swapping(&self) -> bool {
        self.mode == Mode::Swapping
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player.index()]
    }

    /// Scores in seating order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }
}
