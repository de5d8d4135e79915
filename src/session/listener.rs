//! Round-boundary notifications.
//!
//! A monetization layer (or anything else) can register a listener to hear
//! when a new scenario is revealed. The engine does not know what the
//! listener does with it.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// A scenario transition that just happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundBoundary {
    /// `next_round` started round `round`.
    NextRound { round: u32 },
    /// Everyone passed and a new scenario was drawn within `round`.
    ScenarioChanged { round: u32 },
}

impl RoundBoundary {
    #[must_use]
    pub fn round(self) -> u32 {
        match self {
            RoundBoundary::NextRound { round } | RoundBoundary::ScenarioChanged { round } => round,
        }
    }
}

/// Receives round-boundary signals from a `GameSession`.
pub trait RoundListener {
    fn on_round_boundary(&mut self, boundary: RoundBoundary, state: &GameState);
}

impl<F> RoundListener for F
where
    F: FnMut(RoundBoundary, &GameState),
{
    fn on_round_boundary(&mut self, boundary: RoundBoundary, state: &GameState) {
        self(boundary, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_accessor() {
        assert_eq!(RoundBoundary::NextRound { round: 4 }.round(), 4);
        assert_eq!(RoundBoundary::ScenarioChanged { round: 2 }.round(), 2);
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |b: RoundBoundary, _: &GameState| seen.push(b);
            listener.on_round_boundary(RoundBoundary::NextRound { round: 2 }, &GameState::empty());
        }
        assert_eq!(seen, vec![RoundBoundary::NextRound { round: 2 }]);
    }
}
