//! Game state: the single snapshot the presentation layer renders.
//!
//! `GameState` is a value. Transitions in `rules` take a reference and
//! return a new snapshot; they never patch one in place. Collections are
//! `im` persistent structures, so the clone each transition starts from
//! shares structure with the previous snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::cards::{ResponseCard, ScenarioCard};

/// What a player contributed to the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    /// A response card taken from the player's hand.
    Card(ResponseCard),
    /// The player had no fitting response.
    Pass,
}

/// One entry of the per-round play log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub player_id: PlayerId,
    pub play: Play,
}

impl PlayedCard {
    #[must_use]
    pub fn card(player_id: PlayerId, card: ResponseCard) -> Self {
        Self {
            player_id,
            play: Play::Card(card),
        }
    }

    #[must_use]
    pub fn pass(player_id: PlayerId) -> Self {
        Self {
            player_id,
            play: Play::Pass,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self.play, Play::Pass)
    }
}

/// Complete match state.
///
/// ## Defaults
///
/// The empty state (before `initialize_game` and after `reset_game`) has
/// no players and no decks, `round` 1 and every flag cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed seats for the match, in turn order.
    pub players: Vector<Player>,

    /// Seat whose turn is active.
    pub current_player_index: usize,

    pub current_scenario: Option<ScenarioCard>,

    /// Remaining scenarios, drawn from the front.
    pub scenario_deck: Vector<ScenarioCard>,

    /// Response cards left over after the deal.
    pub response_deck: Vector<ResponseCard>,

    /// Current round's submissions, in play order.
    pub played_cards: Vector<PlayedCard>,

    /// Round number (starts at 1).
    pub round: u32,

    pub game_started: bool,

    /// Every player has played or passed this round.
    pub round_complete: bool,

    /// Some player has emptied their hand.
    pub game_complete: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: Vector::new(),
            current_player_index: 0,
            current_scenario: None,
            scenario_deck: Vector::new(),
            response_deck: Vector::new(),
            played_cards: Vector::new(),
            round: 1,
            game_started: false,
            round_complete: false,
            game_complete: false,
        }
    }
}

impl GameState {
    /// The empty pre-match state.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id == id)
    }

    /// The player whose turn it is. `None` before the match starts.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Whether a player already has an entry this round.
    #[must_use]
    pub fn has_played(&self, id: PlayerId) -> bool {
        self.played_cards.iter().any(|p| p.player_id == id)
    }

    /// Whether the round has entries and every one of them is a pass.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.played_cards.is_empty() && self.played_cards.iter().all(PlayedCard::is_pass)
    }

    /// Whether any player's hand is empty.
    #[must_use]
    pub fn any_hand_empty(&self) -> bool {
        self.players.iter().any(|p| p.hand.is_empty())
    }

    /// Players ordered by score (highest first), ties by seat.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        ranked
    }

    /// Every player sharing the top score. Empty before the match starts.
    #[must_use]
    pub fn leaders(&self) -> Vec<&Player> {
        let Some(top) = self.players.iter().map(|p| p.score).max() else {
            return Vec::new();
        };
        self.players.iter().filter(|p| p.score == top).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn three_players() -> GameState {
        let mut state = GameState::empty();
        for (i, name) in ["Ann", "Bo", "Cy"].iter().enumerate() {
            let id = PlayerId::new(i as u8);
            let mut player = Player::new(id, *name);
            player.hand.push(ResponseCard::new(CardId::new(i as u32), "card"));
            state.players.push_back(player);
        }
        state.game_started = true;
        state
    }

    #[test]
    fn test_empty_state() {
        let state = GameState::empty();

        assert_eq!(state.player_count(), 0);
        assert_eq!(state.round, 1);
        assert!(!state.game_started);
        assert!(state.current_player().is_none());
        assert!(state.leaders().is_empty());
        assert!(!state.all_passed());
    }

    #[test]
    fn test_player_lookup() {
        let state = three_players();

        assert_eq!(state.player(PlayerId::new(1)).map(|p| p.name.as_str()), Some("Bo"));
        assert!(state.player(PlayerId::new(3)).is_none());
        assert_eq!(state.current_player().map(|p| p.id), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_all_passed() {
        let mut state = three_players();
        state.played_cards.push_back(PlayedCard::pass(PlayerId::new(0)));
        state.played_cards.push_back(PlayedCard::pass(PlayerId::new(2)));
        assert!(state.all_passed());
        assert!(state.has_played(PlayerId::new(2)));
        assert!(!state.has_played(PlayerId::new(1)));

        state
            .played_cards
            .push_back(PlayedCard::card(PlayerId::new(1), ResponseCard::new(CardId::new(1), "x")));
        assert!(!state.all_passed());
    }

    #[test]
    fn test_standings_and_leaders() {
        let mut state = three_players();
        state.players[1].score = 2;
        state.players[2].score = 2;

        let order: Vec<_> = state.standings().iter().map(|p| p.id.0).collect();
        assert_eq!(order, vec![1, 2, 0]);

        let leaders: Vec<_> = state.leaders().iter().map(|p| p.id.0).collect();
        assert_eq!(leaders, vec![1, 2]);
    }

    #[test]
    fn test_any_hand_empty() {
        let mut state = three_players();
        assert!(!state.any_hand_empty());

        state.players[2].hand.clear();
        assert!(state.any_hand_empty());
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let original = three_players();
        let mut next = original.clone();
        next.players[0].score += 1;

        assert_eq!(original.players[0].score, 0);
        assert_ne!(original, next);
    }

    #[test]
    fn test_state_serde() {
        let mut state = three_players();
        state.current_scenario = Some(ScenarioCard::new(CardId::new(8), "The boss walks in"));
        state.played_cards.push_back(PlayedCard::pass(PlayerId::new(0)));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
