//! Turn engine: the only owner of game state.
//!
//! ## Modes
//!
//! - `Placing` (default): tiles can be placed, the rack reordered, the turn
//!   ended or passed, or swap mode entered.
//! - `Swapping`: rack slots are selected for exchange. Placement and
//!   reordering are disabled until the swap is confirmed or cancelled.
//!
//! ## Rejections
//!
//! A command whose preconditions fail does nothing. The reason is logged at
//! `debug` level and can be queried up front with `check`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::scoring::turn_score;
use super::snapshot::{Controls, GameSnapshot};
use crate::board::{Board, Position};
use crate::core::{
    Command, CommandRecord, ConfigError, GameConfig, Player, PlayerId, PlayerMap, Rejection,
    ScoringRule,
};
use crate::rack::{Rack, Selection, RACK_SIZE};
use crate::tiles::{RandomSupply, Tile, TileSupply};

/// Turn mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Placing,
    Swapping,
}

/// A tile put on the board during the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub tile: Tile,
}

impl Placement {
    #[must_use]
    pub fn row(&self) -> usize {
        self.position.row()
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

/// The game state machine.
///
/// Owns the board, the shared rack, the players and the tile supply. All
/// state changes go through the command methods (or `dispatch`).
///
/// ```
/// use scrabble_engine::core::GameConfig;
/// use scrabble_engine::engine::TurnEngine;
///
/// let mut engine = TurnEngine::new(GameConfig::new().with_seed(1)).unwrap();
/// engine.place_tile(0, 7, 7);
/// engine.end_turn();
///
/// assert_eq!(engine.current_player_index(), 1);
/// assert_eq!(engine.rack().tile_count(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<S = RandomSupply> {
    board: Board,
    rack: Rack,
    players: PlayerMap<Player>,
    current: PlayerId,
    mode: Mode,
    selection: Selection,
    drag_source: Option<usize>,
    placements: Vector<Placement>,
    scoring: ScoringRule,
    turn_number: u32,
    sequence: u32,
    history: Vector<CommandRecord>,
    supply: S,
}

impl TurnEngine<RandomSupply> {
    /// Start a game drawing from a seeded random supply.
    ///
    /// Without a configured seed, one is taken from the OS.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let supply = match config.seed {
            Some(seed) => RandomSupply::new(seed),
            None => RandomSupply::from_entropy(),
        };
        Self::with_supply(config, supply)
    }
}

impl<S: TileSupply> TurnEngine<S> {
    /// Start a game drawing from the given supply.
    ///
    /// The rack is filled immediately, so the first seven draws land in
    /// slots 0-6 in order.
    pub fn with_supply(config: GameConfig, mut supply: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let names = &config.player_names;
        let players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()].clone()));
        let rack = Rack::seeded(&mut supply);

        info!(
            players = names.len(),
            scoring = ?config.scoring,
            "new game"
        );

        Ok(Self {
            board: Board::new(),
            rack,
            players,
            current: PlayerId::new(0),
            mode: Mode::Placing,
            selection: Selection::new(),
            drag_source: None,
            placements: Vector::new(),
            scoring: config.scoring,
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            supply,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Players in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        (id.index() < self.players.player_count()).then(|| &self.players[id])
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current.index()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_swapping(&self) -> bool {
        self.mode == Mode::Swapping
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn drag_source(&self) -> Option<usize> {
        self.drag_source
    }

    /// Tiles placed so far this turn, in placement order.
    #[must_use]
    pub fn placements(&self) -> &Vector<Placement> {
        &self.placements
    }

    #[must_use]
    pub fn scoring_rule(&self) -> ScoringRule {
        self.scoring
    }

    /// Starts at 1, bumped by every turn-ending command.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every accepted command that changed game state, oldest first.
    ///
    /// Drag starts are not kept. The history grows with the game and is
    /// dropped with the engine.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    #[must_use]
    pub fn supply(&self) -> &S {
        &self.supply
    }

    /// Points the pending placements would earn if the turn ended now.
    #[must_use]
    pub fn pending_score(&self) -> u32 {
        turn_score(self.scoring, &self.placements)
    }

    /// Capture the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            rack: self.rack.clone(),
            players: self.players.values().cloned().collect(),
            current_player: self.current,
            mode: self.mode,
            selected: self.selection.iter().collect(),
            drag_source: self.drag_source,
            placements: self.placements.clone(),
            turn_number: self.turn_number,
            controls: self.controls(),
        }
    }

    /// Which of the button-driven commands are currently accepted.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            swap: self.check(&Command::EnterSwapMode).is_ok(),
            confirm_swap: self.check(&Command::ConfirmSwap).is_ok(),
            cancel_swap: self.check(&Command::CancelSwap).is_ok(),
            pass: self.check(&Command::PassTurn).is_ok(),
            end_turn: self.check(&Command::EndTurn).is_ok(),
        }
    }

    // === Preconditions ===

    /// Would `command` be accepted right now?
    pub fn check(&self, command: &Command) -> Result<(), Rejection> {
        match *command {
            Command::PlaceTile { rack_index, row, col } => {
                self.resolve_placement(rack_index, row, col).map(|_| ())
            }
            Command::ReorderRack { from, to } => {
                self.require(Mode::Placing)?;
                self.require_slot(from)?;
                self.require_slot(to)?;
                if from == to {
                    return Err(Rejection::SameSlot);
                }
                Ok(())
            }
            Command::BeginDrag { rack_index } => {
                self.require(Mode::Placing)?;
                self.require_tile(rack_index)
            }
            Command::EnterSwapMode => {
                self.require(Mode::Placing)?;
                self.require_no_placements()
            }
            Command::ToggleSelect { rack_index } => {
                self.require(Mode::Swapping)?;
                self.require_tile(rack_index)
            }
            Command::CancelSwap => self.require(Mode::Swapping),
            Command::ConfirmSwap => {
                self.require(Mode::Swapping)?;
                if self.selection.is_empty() {
                    return Err(Rejection::EmptySelection);
                }
                Ok(())
            }
            Command::EndTurn => self.require(Mode::Placing),
            Command::PassTurn => {
                self.require(Mode::Placing)?;
                self.require_no_placements()
            }
            Command::RequestNewRack => Ok(()),
        }
    }

    fn require(&self, mode: Mode) -> Result<(), Rejection> {
        match (mode, self.mode) {
            (Mode::Placing, Mode::Swapping) => Err(Rejection::Swapping),
            (Mode::Swapping, Mode::Placing) => Err(Rejection::NotSwapping),
            _ => Ok(()),
        }
    }

    fn require_slot(&self, index: usize) -> Result<(), Rejection> {
        if index >= RACK_SIZE {
            return Err(Rejection::SlotOutOfRange(index));
        }
        Ok(())
    }

    fn require_tile(&self, index: usize) -> Result<(), Rejection> {
        self.require_slot(index)?;
        if self.rack.get(index).is_none() {
            return Err(Rejection::EmptySlot(index));
        }
        Ok(())
    }

    fn require_no_placements(&self) -> Result<(), Rejection> {
        if !self.placements.is_empty() {
            return Err(Rejection::TilesPlaced);
        }
        Ok(())
    }

    fn resolve_placement(&self, rack_index: usize, row: usize, col: usize) -> Result<Position, Rejection> {
        self.require(Mode::Placing)?;
        self.require_tile(rack_index)?;
        let pos = Position::new(row, col).ok_or(Rejection::CellOutOfRange { row, col })?;
        if !self.board.is_empty_at(pos) {
            return Err(Rejection::Occupied(pos));
        }
        Ok(pos)
    }

    // === Commands ===

    /// Apply any command. Rejected commands change nothing.
    pub fn dispatch(&mut self, command: Command) {
        let player = self.current;
        let turn = self.turn_number;
        let sequence = self.sequence;

        match self.apply(command) {
            Ok(()) => {
                trace!(command = command.name(), %player, turn, "command applied");
                if !command.is_recorded() {
                    return;
                }
                self.history
                    .push_back(CommandRecord::new(player, command, turn, sequence));
                if !command.ends_turn() {
                    self.sequence += 1;
                }
            }
            Err(reason) => {
                debug!(command = command.name(), %player, %reason, "command ignored");
            }
        }
    }

    /// Move the tile in `rack_index` onto the board.
    pub fn place_tile(&mut self, rack_index: usize, row: usize, col: usize) {
        self.dispatch(Command::PlaceTile { rack_index, row, col });
    }

    /// Swap two rack slots.
    pub fn reorder_rack(&mut self, from: usize, to: usize) {
        self.dispatch(Command::ReorderRack { from, to });
    }

    /// Record the rack slot a drag started from.
    pub fn begin_drag(&mut self, rack_index: usize) {
        self.dispatch(Command::BeginDrag { rack_index });
    }

    /// Drop the dragged tile on a board cell.
    pub fn place_tile_from_drag(&mut self, row: usize, col: usize) {
        match self.drag_source {
            Some(rack_index) => self.place_tile(rack_index, row, col),
            None => debug!(reason = %Rejection::NoDragSource, "place from drag ignored"),
        }
    }

    /// Drop the dragged tile on another rack slot.
    pub fn reorder_from_drag(&mut self, to: usize) {
        match self.drag_source {
            Some(from) => self.reorder_rack(from, to),
            None => debug!(reason = %Rejection::NoDragSource, "reorder from drag ignored"),
        }
    }

    pub fn enter_swap_mode(&mut self) {
        self.dispatch(Command::EnterSwapMode);
    }

    pub fn toggle_select(&mut self, rack_index: usize) {
        self.dispatch(Command::ToggleSelect { rack_index });
    }

    pub fn cancel_swap(&mut self) {
        self.dispatch(Command::CancelSwap);
    }

    pub fn confirm_swap(&mut self) {
        self.dispatch(Command::ConfirmSwap);
    }

    /// Score the turn, refill the rack and hand over to the next player.
    ///
    /// With nothing placed, only the hand-over happens.
    pub fn end_turn(&mut self) {
        self.dispatch(Command::EndTurn);
    }

    pub fn pass_turn(&mut self) {
        self.dispatch(Command::PassTurn);
    }

    pub fn request_new_rack(&mut self) {
        self.dispatch(Command::RequestNewRack);
    }

    fn apply(&mut self, command: Command) -> Result<(), Rejection> {
        self.check(&command)?;

        match command {
            Command::PlaceTile { rack_index, row, col } => {
                let pos = self.resolve_placement(rack_index, row, col)?;
                let tile = *self
                    .rack
                    .get(rack_index)
                    .ok_or(Rejection::EmptySlot(rack_index))?;
                // Board first, so a refused cell leaves the rack untouched.
                self.board
                    .place(pos, tile)
                    .map_err(|_| Rejection::Occupied(pos))?;
                self.rack.remove_at(rack_index);
                self.placements.push_back(Placement { position: pos, tile });
                self.drag_source = None;
            }
            Command::ReorderRack { from, to } => {
                self.rack.reorder(from, to);
                self.drag_source = None;
            }
            Command::BeginDrag { rack_index } => {
                self.drag_source = Some(rack_index);
            }
            Command::EnterSwapMode => {
                self.mode = Mode::Swapping;
                self.selection.clear();
                self.drag_source = None;
            }
            Command::ToggleSelect { rack_index } => {
                self.selection.toggle(rack_index);
            }
            Command::CancelSwap => {
                self.mode = Mode::Placing;
                self.selection.clear();
            }
            Command::ConfirmSwap => {
                self.rack.replace_selected(&self.selection, &mut self.supply);
                info!(
                    player = %self.current,
                    swapped = self.selection.len(),
                    "tiles swapped"
                );
                self.advance_turn();
            }
            Command::EndTurn => {
                if !self.placements.is_empty() {
                    let points = turn_score(self.scoring, &self.placements);
                    let player = &mut self.players[self.current];
                    player.add_score(points);
                    info!(
                        player = %self.current,
                        tiles = self.placements.len(),
                        points,
                        total = player.score(),
                        "turn scored"
                    );
                    self.rack.refill_empties(&mut self.supply);
                }
                self.advance_turn();
            }
            Command::PassTurn => {
                info!(player = %self.current, "turn passed");
                self.advance_turn();
            }
            Command::RequestNewRack => {
                self.rack = Rack::seeded(&mut self.supply);
                self.drag_source = None;
            }
        }

        Ok(())
    }

    /// Hand over to the next seat and reset per-turn state.
    fn advance_turn(&mut self) {
        self.placements.clear();
        self.selection.clear();
        self.drag_source = None;
        self.mode = Mode::Placing;
        self.current = self.current.next(self.players.player_count());
        self.turn_number += 1;
        self.sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::ScriptedSupply;

    fn engine(script: &str) -> TurnEngine<ScriptedSupply> {
        TurnEngine::with_supply(GameConfig::new(), ScriptedSupply::new(script)).unwrap()
    }

    fn rack_letters<S: TileSupply>(engine: &TurnEngine<S>) -> String {
        engine
            .rack()
            .slots()
            .iter()
            .map(|s| s.map_or('.', |t| t.letter()))
            .collect()
    }

    #[test]
    fn test_new_game() {
        let engine = engine("ABCDEFG");

        assert_eq!(engine.player_count(), 4);
        assert_eq!(engine.current_player(), PlayerId::new(0));
        assert_eq!(engine.mode(), Mode::Placing);
        assert_eq!(engine.turn_number(), 1);
        assert_eq!(rack_letters(&engine), "ABCDEFG");
        assert!(engine.placements().is_empty());
        assert!(engine.players().all(|p| p.score() == 0));
        assert_eq!(engine.players().next().unwrap().display_name, "You");
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new().with_players(["1", "2", "3", "4", "5"]);
        assert!(TurnEngine::with_supply(config, ScriptedSupply::new("A")).is_err());
    }

    #[test]
    fn test_seeded_engines_match() {
        let a = TurnEngine::new(GameConfig::new().with_seed(8)).unwrap();
        let b = TurnEngine::new(GameConfig::new().with_seed(8)).unwrap();
        assert_eq!(a.rack(), b.rack());
    }

    #[test]
    fn test_place_tile() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(2, 7, 7);

        let pos = Position::new(7, 7).unwrap();
        assert_eq!(engine.board().get(pos).map(|t| t.letter()), Some('C'));
        assert_eq!(rack_letters(&engine), "AB.DEFG");
        assert_eq!(engine.placements().len(), 1);
        assert_eq!(engine.placements()[0].row(), 7);
        assert_eq!(engine.placements()[0].col(), 7);
    }

    #[test]
    fn test_place_from_empty_slot_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 7, 7);
        engine.place_tile(0, 7, 8);

        assert_eq!(engine.board().tile_count(), 1);
        assert_eq!(engine.placements().len(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_keeps_rack_tile() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 7, 7);
        let kept = *engine.rack().get(1).unwrap();

        engine.place_tile(1, 7, 7);

        assert_eq!(engine.rack().get(1), Some(&kept));
        assert_eq!(rack_letters(&engine), ".BCDEFG");
        assert_eq!(engine.board().get(Position::CENTER).map(|t| t.letter()), Some('A'));
        assert_eq!(engine.placements().len(), 1);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_place_out_of_range_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 15, 0);
        engine.place_tile(7, 0, 0);

        assert_eq!(engine.board().tile_count(), 0);
        assert_eq!(rack_letters(&engine), "ABCDEFG");
        assert_eq!(
            engine.check(&Command::PlaceTile { rack_index: 0, row: 15, col: 0 }),
            Err(Rejection::CellOutOfRange { row: 15, col: 0 })
        );
    }

    #[test]
    fn test_reorder_rack() {
        let mut engine = engine("ABCDEFG");
        engine.reorder_rack(0, 3);
        assert_eq!(rack_letters(&engine), "DBCAEFG");

        engine.reorder_rack(3, 3);
        engine.reorder_rack(3, 9);
        assert_eq!(rack_letters(&engine), "DBCAEFG");
    }

    #[test]
    fn test_drag_and_drop() {
        let mut engine = engine("ABCDEFG");

        engine.begin_drag(4);
        assert_eq!(engine.drag_source(), Some(4));
        engine.reorder_from_drag(0);
        assert_eq!(rack_letters(&engine), "EBCDAFG");
        assert_eq!(engine.drag_source(), None);

        engine.begin_drag(1);
        engine.place_tile_from_drag(3, 3);
        assert_eq!(rack_letters(&engine), "E.CDAFG");
        assert_eq!(engine.drag_source(), None);
        assert_eq!(engine.board().tile_count(), 1);
    }

    #[test]
    fn test_drop_without_drag_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile_from_drag(7, 7);
        engine.reorder_from_drag(2);

        assert_eq!(engine.board().tile_count(), 0);
        assert_eq!(rack_letters(&engine), "ABCDEFG");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_drag_from_empty_slot_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(5, 0, 0);
        engine.begin_drag(5);
        assert_eq!(engine.drag_source(), None);
    }

    #[test]
    fn test_swap_mode_blocks_placing_and_reorder() {
        let mut engine = engine("ABCDEFG");
        engine.enter_swap_mode();
        assert!(engine.is_swapping());

        engine.place_tile(0, 7, 7);
        engine.reorder_rack(0, 1);
        engine.begin_drag(0);

        assert_eq!(engine.board().tile_count(), 0);
        assert_eq!(rack_letters(&engine), "ABCDEFG");
        assert_eq!(engine.drag_source(), None);
    }

    #[test]
    fn test_enter_swap_after_placing_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 7, 7);
        engine.enter_swap_mode();

        assert_eq!(engine.mode(), Mode::Placing);
        assert_eq!(engine.check(&Command::EnterSwapMode), Err(Rejection::TilesPlaced));
    }

    #[test]
    fn test_toggle_outside_swap_mode_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.toggle_select(1);
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_cancel_swap_clears_selection() {
        let mut engine = engine("ABCDEFG");
        engine.enter_swap_mode();
        engine.toggle_select(1);
        engine.toggle_select(4);
        engine.cancel_swap();

        assert_eq!(engine.mode(), Mode::Placing);
        assert!(engine.selection().is_empty());
        assert_eq!(rack_letters(&engine), "ABCDEFG");
        assert_eq!(engine.current_player_index(), 0);
    }

    #[test]
    fn test_confirm_swap() {
        let mut engine = engine("ABCDEFGXY");
        engine.enter_swap_mode();
        engine.toggle_select(6);
        engine.toggle_select(0);
        engine.confirm_swap();

        assert_eq!(rack_letters(&engine), "YBCDEFX");
        assert_eq!(engine.mode(), Mode::Placing);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.current_player_index(), 1);
        assert!(engine.players().all(|p| p.score() == 0));
    }

    #[test]
    fn test_end_turn_scores_and_refills() {
        let mut engine = engine("QZAAAAAKE");
        engine.place_tile(0, 7, 7);
        engine.place_tile(1, 7, 8);
        assert_eq!(engine.pending_score(), 20);

        engine.end_turn();

        assert_eq!(engine.player(PlayerId::new(0)).unwrap().score(), 20);
        assert_eq!(rack_letters(&engine), "KEAAAAA");
        assert!(engine.placements().is_empty());
        assert_eq!(engine.current_player_index(), 1);
        assert_eq!(engine.board().tile_count(), 2);
    }

    #[test]
    fn test_end_turn_without_placements_only_advances() {
        let mut engine = engine("ABCDEFG");
        engine.end_turn();

        assert_eq!(engine.current_player_index(), 1);
        assert_eq!(engine.supply().drawn(), 7);
        assert!(engine.players().all(|p| p.score() == 0));
    }

    #[test]
    fn test_end_turn_while_swapping_ignored() {
        let mut engine = engine("ABCDEFG");
        engine.enter_swap_mode();
        engine.end_turn();

        assert_eq!(engine.current_player_index(), 0);
        assert!(engine.is_swapping());
    }

    #[test]
    fn test_pass_guard() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 7, 7);
        engine.pass_turn();

        assert_eq!(engine.current_player_index(), 0);
        assert_eq!(engine.placements().len(), 1);
        assert_eq!(engine.check(&Command::PassTurn), Err(Rejection::TilesPlaced));
    }

    #[test]
    fn test_pass_turn_advances() {
        let mut engine = engine("ABCDEFG");
        engine.begin_drag(2);
        engine.pass_turn();

        assert_eq!(engine.current_player_index(), 1);
        assert_eq!(engine.drag_source(), None);
        assert_eq!(engine.turn_number(), 2);
    }

    #[test]
    fn test_request_new_rack() {
        let mut engine = engine("ABCDEFGHIJKLMN");
        engine.place_tile(0, 7, 7);
        engine.request_new_rack();

        assert_eq!(rack_letters(&engine), "HIJKLMN");
        assert_eq!(engine.placements().len(), 1);
        assert_eq!(engine.current_player_index(), 0);
        assert_eq!(engine.board().tile_count(), 1);
    }

    #[test]
    fn test_request_new_rack_keeps_swap_mode() {
        let mut engine = engine("ABCDEFGHIJKLMN");
        engine.enter_swap_mode();
        engine.toggle_select(3);
        engine.request_new_rack();

        assert!(engine.is_swapping());
        assert!(engine.selection().contains(3));
        assert_eq!(rack_letters(&engine), "HIJKLMN");
    }

    #[test]
    fn test_rotation_wraps() {
        let mut engine = engine("ABCDEFG");
        for _ in 0..5 {
            engine.pass_turn();
        }
        assert_eq!(engine.current_player_index(), 1);
        assert_eq!(engine.turn_number(), 6);
    }

    #[test]
    fn test_history_records_accepted_commands() {
        let mut engine = engine("ABCDEFG");
        engine.place_tile(0, 7, 7);
        engine.place_tile(0, 7, 8); // ignored
        engine.reorder_rack(1, 2);
        engine.end_turn();
        engine.pass_turn();

        let history: Vec<_> = engine.history().iter().cloned().collect();
        assert_eq!(history.len(), 4);

        assert_eq!(history[0].player, PlayerId::new(0));
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[1].command, Command::ReorderRack { from: 1, to: 2 });
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[2].command, Command::EndTurn);
        assert_eq!(history[2].sequence, 2);

        assert_eq!(history[3].player, PlayerId::new(1));
        assert_eq!(history[3].turn, 2);
        assert_eq!(history[3].sequence, 0);
    }

    #[test]
    fn test_history_skips_drag_starts() {
        let mut engine = engine("ABCDEFG");
        for slot in 0..RACK_SIZE {
            engine.begin_drag(slot);
        }
        assert!(engine.history().is_empty());
        assert_eq!(engine.drag_source(), Some(6));

        engine.reorder_from_drag(0);
        let history: Vec<_> = engine.history().iter().cloned().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].command, Command::ReorderRack { from: 6, to: 0 });
        assert_eq!(history[0].sequence, 0);
    }

    #[test]
    fn test_controls() {
        let mut engine = engine("ABCDEFG");
        let controls = engine.controls();
        assert!(controls.swap && controls.pass && controls.end_turn);
        assert!(!controls.confirm_swap && !controls.cancel_swap);

        engine.place_tile(0, 7, 7);
        let controls = engine.controls();
        assert!(!controls.swap && !controls.pass && controls.end_turn);

        engine.end_turn();
        engine.enter_swap_mode();
        let controls = engine.controls();
        assert!(!controls.swap && !controls.pass && !controls.end_turn);
        assert!(controls.cancel_swap && !controls.confirm_swap);

        engine.toggle_select(0);
        assert!(engine.controls().confirm_swap);
    }

    #[test]
    fn test_dispatch_matches_methods() {
        let mut a = engine("ABCDEFGHIJ");
        let mut b = engine("ABCDEFGHIJ");

        a.place_tile(3, 1, 1);
        a.end_turn();
        b.dispatch(Command::PlaceTile { rack_index: 3, row: 1, col: 1 });
        b.dispatch(Command::EndTurn);

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_premium_scoring_opt_in() {
        let config = GameConfig::new().with_scoring(ScoringRule::Premium);
        let mut engine = TurnEngine::with_supply(config, ScriptedSupply::new("ABCDEFG")).unwrap();
        engine.place_tile(0, 7, 7);
        engine.end_turn();

        assert_eq!(engine.player(PlayerId::new(0)).unwrap().score(), 2);
    }

    #[test]
    fn test_player_lookup_out_of_range() {
        let engine = engine("A");
        assert!(engine.player(PlayerId::new(3)).is_some());
        assert!(engine.player(PlayerId::new(4)).is_none());
    }
}
