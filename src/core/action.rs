//! Commands: one variant per operation the presentation layer may invoke.
//!
//! Commands are plain data. `Rules::apply` turns a state and a command
//! into the next state, and the session records every command that
//! succeeded so a match can be replayed from its seed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Which neighbour an exchange targets.
///
/// Named relative to the counterclockwise play order, so the seat
/// arithmetic is the inverse of the intuitive reading:
/// - `Previous` targets seat `(from + 1) % n`
/// - `Next` targets seat `(from + n - 1) % n`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExchangeDirection {
    Previous,
    Next,
}

impl ExchangeDirection {
    /// Seat index of the neighbour of `from` in a match of `player_count`.
    #[must_use]
    pub fn target_index(self, from: usize, player_count: usize) -> usize {
        match self {
            ExchangeDirection::Previous => (from + 1) % player_count,
            ExchangeDirection::Next => (from + player_count - 1) % player_count,
        }
    }
}

/// An operation on the match.
///
/// ## Example
///
/// ```
/// use party_cards::cards::CardId;
/// use party_cards::core::{Command, PlayerId};
///
/// let play = Command::PlayCard { player: PlayerId::new(0), card: CardId::new(4) };
/// assert!(play.is_turn_action());
/// assert!(!Command::NextRound { winner: None }.is_turn_action());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start a new match. Missing names default to "Player N".
    InitializeGame {
        player_count: usize,
        names: Vec<String>,
    },
    PlayCard {
        player: PlayerId,
        card: CardId,
    },
    PassCard {
        player: PlayerId,
    },
    /// Draw a new scenario after everyone passed, keeping the turn.
    ChangeScenarioAndContinue,
    ExchangeCard {
        player: PlayerId,
        card: CardId,
        direction: ExchangeDirection,
    },
    /// Advance to the next scenario. The winner, if any, leads.
    NextRound {
        winner: Option<PlayerId>,
    },
    AwardPoint {
        player: PlayerId,
    },
    UpdateCustomText {
        player: PlayerId,
        card: CardId,
        text: String,
    },
    ResetGame,
    RestartGameWithSamePlayers,
}

impl Command {
    /// Whether this command takes the acting player's turn.
    #[must_use]
    pub fn is_turn_action(&self) -> bool {
        matches!(self, Command::PlayCard { .. } | Command::PassCard { .. })
    }

    /// Whether this command needs the injected RNG.
    #[must_use]
    pub fn uses_rng(&self) -> bool {
        matches!(
            self,
            Command::InitializeGame { .. }
                | Command::RestartGameWithSamePlayers
                | Command::ExchangeCard { .. }
        )
    }
}

/// Historical record of an applied command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The command that was applied.
    pub command: Command,

    /// Round in which it was applied (before the command took effect).
    pub round: u32,

    /// Sequence number across the session (0-based).
    pub sequence: u32,
}
