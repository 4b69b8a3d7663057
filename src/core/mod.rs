//! Core engine types: players, configuration, commands, errors, RNG.

pub mod command;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use command::{Command, CommandRecord};
pub use config::{GameConfig, ScoringRule, MAX_PLAYERS};
pub use error::{BoardError, ConfigError, Rejection};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
