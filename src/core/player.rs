//! Player identification and per-player match data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 255 players. A player's id
//! is its seat in the turn order, so `PlayerId(2)` is always `players[2]`.
//!
//! ## Player
//!
//! Name, hand, score and the exchange flag for one seat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, ResponseCard};

/// Inline capacity of a hand. Matches the default deal size.
pub const HAND_INLINE: usize = 6;

/// A player's hand, in deal order.
pub type Hand = SmallVec<[ResponseCard; HAND_INLINE]>;

/// Seat identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    ///
    /// ```
    /// use party_cards::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize + 1)).map(|i| PlayerId(i as u8))
    }

    /// Name used when none was entered for this seat ("Player 1" for seat 0).
    #[must_use]
    pub fn default_name(self) -> String {
        format!("Player {}", self.index() + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One seat in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Response cards held, in deal order.
    pub hand: Hand,
    pub score: u32,
    /// Whether this player has spent their exchange.
    pub has_exchanged: bool,
}

impl Player {
    /// Create a player with an empty hand and no score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            has_exchanged: false,
        }
    }

    /// Set the starting hand (builder pattern).
    #[must_use]
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    /// Position of a card in this player's hand.
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    /// Get a card from this player's hand.
    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&ResponseCard> {
        self.hand.iter().find(|c| c.id == card)
    }

    /// Whether this player holds a card.
    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.position_of(card).is_some()
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Seat 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_default_name_is_one_based() {
        assert_eq!(PlayerId::new(0).default_name(), "Player 1");
        assert_eq!(PlayerId::new(9).default_name(), "Player 10");
    }

    #[test]
    fn test_player_hand_lookup() {
        let mut hand = Hand::new();
        hand.push(ResponseCard::new(CardId::new(4), "A goose"));
        hand.push(ResponseCard::custom(CardId::new(7)));

        let player = Player::new(PlayerId::new(1), "Ada").with_hand(hand);

        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.position_of(CardId::new(7)), Some(1));
        assert!(player.holds(CardId::new(4)));
        assert!(!player.holds(CardId::new(99)));
        assert_eq!(player.card(CardId::new(4)).map(|c| c.text.as_str()), Some("A goose"));
        assert_eq!(player.score, 0);
        assert!(!player.has_exchanged);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), "Grace");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
