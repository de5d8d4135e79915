//! # party-cards
//!
//! Turn-based state machine for a scenario/response party card game.
//!
//! Players are dealt hands of response cards, answer a shared scenario
//! card in turn, and a moderator awards a point to the best answer. The
//! match ends the moment any player empties their hand.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every operation maps a `GameState` to
//!    a new `GameState` or a `GameError`. A rejected operation leaves
//!    the caller's snapshot exactly as it was.
//!
//! 2. **Injected collaborators**: the card catalog, the entitlement gate
//!    and the RNG are passed in, never global. A seed fixes every shuffle
//!    and exchange.
//!
//! 3. **Configuration over convention**: deal size, player range, exchange
//!    scope and turn enforcement come from `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, commands, state, errors
//! - `cards`: Card records and the catalog
//! - `rules`: Entitlement gate, dealing and the transition functions
//! - `session`: Owns the current snapshot and dispatches commands

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Command, ExchangeDirection, ExchangeScope, GameConfig, GameError, GameRng,
    GameRngState, GameState, Hand, Play, PlayedCard, Player, PlayerId,
};

pub use crate::cards::{CardCatalog, CardId, CatalogError, ResponseCard, ScenarioCard};

pub use crate::rules::{entitlement_for, DealContext, DemoAccess, Entitlement, FullAccess, Rules};

pub use crate::session::{GameSession, RoundBoundary, RoundListener};
