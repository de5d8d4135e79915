//! Core types: players, RNG, configuration, commands, state and errors.
//!
//! These are the building blocks the rules operate on. Nothing here
//! knows how a round is scored or how cards are dealt.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Command, ExchangeDirection};
pub use config::{ExchangeScope, GameConfig, DEFAULT_HAND_SIZE, MAX_SUPPORTED_PLAYERS};
pub use error::GameError;
pub use player::{Hand, Player, PlayerId, HAND_INLINE};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Play, PlayedCard};
