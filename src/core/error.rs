//! Rule violations reported by transitions.
//!
//! Every variant is a caller-correctable precondition failure. A
//! transition that returns one of these has not produced a new state.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("{card} is not in the hand of {player}")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("custom card {0} has no text")]
    CustomCardEmpty(CardId),

    #[error("{0} is not a custom card")]
    NotCustomCard(CardId),

    #[error("{0} has already exchanged")]
    AlreadyExchanged(PlayerId),

    #[error("{0} has no cards to exchange with")]
    NoCardsToExchangeWith(PlayerId),

    #[error("no scenarios remain")]
    DeckExhausted,

    #[error("no match in progress")]
    GameNotStarted,

    #[error("the match is over")]
    GameOver,

    #[error("every player has already played this round")]
    RoundComplete,

    #[error("{0} has already played this round")]
    AlreadyPlayed(PlayerId),

    #[error("not the turn of {actual}; waiting on {expected}")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    #[error("the scenario can only be changed after every player passed")]
    NotAllPassed,

    #[error("invalid player count {count}: expected {min}..={max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("not enough response cards: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
}
