//! Tile supplies.
//!
//! The supply is inexhaustible: every draw mints a new tile. Letters are
//! picked uniformly from A-Z, so a `Q` is as likely as an `E`.
//!
//! `RandomSupply` is the live implementation. `ScriptedSupply` replays a
//! fixed letter sequence for reproducible scenarios.

use serde::{Deserialize, Serialize};

use super::tile::{letter_index, Tile, TileId, ALPHABET};
use crate::core::{GameRng, GameRngState};

/// Source of fresh tiles.
pub trait TileSupply {
    /// Mint one tile.
    fn draw(&mut self) -> Tile;
}

/// Hands out tile ids in increasing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new tile id.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// Uniform random supply backed by `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomSupply {
    rng: GameRng,
    ids: TileIds,
}

impl RandomSupply {
    /// Supply with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Supply seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            ids: TileIds::new(),
        }
    }

    /// RNG position, for reproducing the rest of the draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Number of tiles drawn so far.
    #[must_use]
    pub fn drawn(&self) -> u32 {
        self.ids.issued()
    }
}

impl TileSupply for RandomSupply {
    fn draw(&mut self) -> Tile {
        let index = self.rng.gen_index(ALPHABET.len());
        Tile::nth(self.ids.alloc(), index)
    }
}

/// Replays a fixed letter script, wrapping around when it runs out.
///
/// ```
/// use scrabble_engine::tiles::{ScriptedSupply, TileSupply};
///
/// let mut supply = ScriptedSupply::new("AB");
/// assert_eq!(supply.draw().letter(), 'A');
/// assert_eq!(supply.draw().letter(), 'B');
/// assert_eq!(supply.draw().letter(), 'A');
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSupply {
    script: Vec<usize>,
    cursor: usize,
    ids: TileIds,
}

impl ScriptedSupply {
    /// Build a supply from a string of uppercase letters.
    ///
    /// Panics if the script is empty or holds anything outside `A..=Z`.
    pub fn new(script: &str) -> Self {
        assert!(!script.is_empty(), "Script must not be empty");
        let script: Vec<usize> = script
            .chars()
            .map(|c| letter_index(c).unwrap_or_else(|| panic!("Script must contain only A-Z")))
            .collect();

        Self {
            script,
            cursor: 0,
            ids: TileIds::new(),
        }
    }

    /// Number of tiles drawn so far.
    #[must_use]
    pub fn drawn(&self) -> u32 {
        self.ids.issued()
    }
}

impl TileSupply for ScriptedSupply {
    fn draw(&mut self) -> Tile {
        let index = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        Tile::nth(self.ids.alloc(), index)
    }
}
