//! Match configuration.
//!
//! The rules read these knobs instead of hardcoding them:
//! - deal size and allowed player counts
//! - how long an exchange right lasts
//! - whether turn order is enforced
//! - whether an under-filled deal is an error

use serde::{Deserialize, Serialize};

/// Default number of response cards dealt to each player.
pub const DEFAULT_HAND_SIZE: usize = 6;

/// Seats are numbered with a `u8`.
pub const MAX_SUPPORTED_PLAYERS: usize = u8::MAX as usize;

/// How long a player's single exchange right lasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeScope {
    /// One exchange for the whole match. `next_round` leaves the flag set.
    #[default]
    PerMatch,
    /// One exchange per round. `next_round` clears every flag.
    PerRound,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Response cards dealt to each player.
    pub hand_size: usize,

    /// Fewest players a match may start with.
    pub min_players: usize,

    /// Most players a match may start with. Counts above
    /// `MAX_SUPPORTED_PLAYERS` are rejected regardless.
    pub max_players: usize,

    /// Scope of the exchange right.
    pub exchange_scope: ExchangeScope,

    /// Only the current player may play or pass.
    pub enforce_turn_order: bool,

    /// Fail the deal instead of under-filling hands when the catalog is short.
    pub strict_deal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            min_players: 2,
            max_players: 10,
            exchange_scope: ExchangeScope::default(),
            enforce_turn_order: true,
            strict_deal: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt per player.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min_players must not exceed max_players");
        assert!(max <= MAX_SUPPORTED_PLAYERS, "At most 255 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the exchange scope.
    #[must_use]
    pub fn with_exchange_scope(mut self, scope: ExchangeScope) -> Self {
        self.exchange_scope = scope;
        self
    }

    /// Allow any player to act regardless of whose turn it is.
    #[must_use]
    pub fn without_turn_order(mut self) -> Self {
        self.enforce_turn_order = false;
        self
    }

    /// Reject deals that cannot fill every hand.
    #[must_use]
    pub fn strict_deal(mut self) -> Self {
        self.strict_deal = true;
        self
    }

    /// Whether `count` players may start a match.
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        count <= MAX_SUPPORTED_PLAYERS && (self.min_players..=self.max_players).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.hand_size, 6);
        assert_eq!(config.exchange_scope, ExchangeScope::PerMatch);
        assert!(config.enforce_turn_order);
        assert!(!config.strict_deal);
        assert!(config.accepts_player_count(2));
        assert!(config.accepts_player_count(10));
        assert!(!config.accepts_player_count(1));
        assert!(!config.accepts_player_count(11));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_hand_size(4)
            .with_player_range(3, 5)
            .with_exchange_scope(ExchangeScope::PerRound)
            .without_turn_order()
            .strict_deal();

        assert_eq!(config.hand_size, 4);
        assert!(!config.accepts_player_count(2));
        assert!(config.accepts_player_count(5));
        assert_eq!(config.exchange_scope, ExchangeScope::PerRound);
        assert!(!config.enforce_turn_order);
        assert!(config.strict_deal);
    }

    #[test]
    fn test_seat_limit_ignores_raw_max() {
        let config = GameConfig {
            max_players: 300,
            ..GameConfig::default()
        };

        assert!(config.accepts_player_count(MAX_SUPPORTED_PLAYERS));
        assert!(!config.accepts_player_count(256));
        assert!(!config.accepts_player_count(300));
    }

    #[test]
    #[should_panic(expected = "min_players must not exceed max_players")]
    fn test_inverted_range() {
        let _ = GameConfig::new().with_player_range(6, 2);
    }
}
