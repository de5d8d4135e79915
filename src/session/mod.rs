//! Session: the adapter between the presentation layer and the rules.
//!
//! `GameSession` owns the current snapshot together with everything the
//! rules need (catalog, entitlement gate, RNG) and dispatches commands.
//! A successful command replaces the snapshot and is appended to the
//! history; a failed one changes nothing.
//!
//! ## Example
//!
//! ```
//! use party_cards::cards::{CardCatalog, CardId, ResponseCard, ScenarioCard};
//! use party_cards::core::{GameConfig, GameRng, PlayerId};
//! use party_cards::rules::FullAccess;
//! use party_cards::session::GameSession;
//!
//! let catalog = CardCatalog::new(
//!     (0..5).map(|i| ScenarioCard::new(CardId::new(i), "prompt")).collect(),
//!     (0..20).map(|i| ResponseCard::new(CardId::new(i), "answer")).collect(),
//! )
//! .unwrap();
//!
//! let mut session = GameSession::new(GameConfig::default(), catalog, FullAccess, GameRng::new(1));
//! session.initialize_game(3, &["Ann".to_string()]).unwrap();
//!
//! let state = session.pass_card(PlayerId::new(0)).unwrap();
//! assert_eq!(state.current_player_index, 2);
//! ```

mod listener;

pub use listener::{RoundBoundary, RoundListener};

use im::Vector;

use crate::cards::{CardCatalog, CardId};
use crate::core::{
    ActionRecord, Command, ExchangeDirection, GameConfig, GameError, GameRng, GameState, PlayerId,
};
use crate::rules::{DealContext, Entitlement, Rules};

/// Owns the current match and dispatches commands against it.
pub struct GameSession {
    rules: Rules,
    catalog: CardCatalog,
    entitlement: Box<dyn Entitlement>,
    rng: GameRng,
    state: GameState,
    history: Vector<ActionRecord>,
    listeners: Vec<Box<dyn RoundListener>>,
}

impl GameSession {
    /// Create a session with no match in progress.
    pub fn new(
        config: GameConfig,
        catalog: CardCatalog,
        entitlement: impl Entitlement + 'static,
        rng: GameRng,
    ) -> Self {
        Self::with_boxed_entitlement(config, catalog, Box::new(entitlement), rng)
    }

    /// Create a session from an already boxed gate (see `entitlement_for`).
    pub fn with_boxed_entitlement(
        config: GameConfig,
        catalog: CardCatalog,
        entitlement: Box<dyn Entitlement>,
        rng: GameRng,
    ) -> Self {
        Self {
            rules: Rules::new(config),
            catalog,
            entitlement,
            rng,
            state: GameState::empty(),
            history: Vector::new(),
            listeners: Vec::new(),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Every command applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The seed this session's RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replace the entitlement gate. Applies from the next deal.
    pub fn set_entitlement(&mut self, entitlement: impl Entitlement + 'static) {
        self.entitlement = Box::new(entitlement);
    }

    /// Register a listener for round boundaries.
    pub fn add_listener(&mut self, listener: impl RoundListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a command to the current snapshot.
    pub fn dispatch(&mut self, command: Command) -> Result<&GameState, GameError> {
        let mut ctx = DealContext::new(&self.catalog, self.entitlement.as_ref(), &mut self.rng);
        let next = self.rules.apply(&self.state, &command, &mut ctx)?;

        let boundary = match command {
            Command::NextRound { .. } => Some(RoundBoundary::NextRound { round: next.round }),
            Command::ChangeScenarioAndContinue => {
                Some(RoundBoundary::ScenarioChanged { round: next.round })
            }
            _ => None,
        };

        self.history.push_back(ActionRecord {
            command,
            round: self.state.round,
            sequence: self.history.len() as u32,
        });
        self.state = next;

        if let Some(boundary) = boundary {
            for listener in &mut self.listeners {
                listener.on_round_boundary(boundary, &self.state);
            }
        }
        Ok(&self.state)
    }

    // === Operations ===

    pub fn initialize_game(
        &mut self,
        player_count: usize,
        names: &[String],
    ) -> Result<&GameState, GameError> {
        self.dispatch(Command::InitializeGame {
            player_count,
            names: names.to_vec(),
        })
    }

    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<&GameState, GameError> {
        self.dispatch(Command::PlayCard { player, card })
    }

    pub fn pass_card(&mut self, player: PlayerId) -> Result<&GameState, GameError> {
        self.dispatch(Command::PassCard { player })
    }

    pub fn change_scenario_and_continue(&mut self) -> Result<&GameState, GameError> {
        self.dispatch(Command::ChangeScenarioAndContinue)
    }

    pub fn exchange_card(
        &mut self,
        player: PlayerId,
        card: CardId,
        direction: ExchangeDirection,
    ) -> Result<&GameState, GameError> {
        self.dispatch(Command::ExchangeCard {
            player,
            card,
            direction,
        })
    }

    pub fn next_round(&mut self, winner: Option<PlayerId>) -> Result<&GameState, GameError> {
        self.dispatch(Command::NextRound { winner })
    }

    pub fn award_point(&mut self, player: PlayerId) -> Result<&GameState, GameError> {
        self.dispatch(Command::AwardPoint { player })
    }

    pub fn update_custom_text(
        &mut self,
        player: PlayerId,
        card: CardId,
        text: impl Into<String>,
    ) -> Result<&GameState, GameError> {
        self.dispatch(Command::UpdateCustomText {
            player,
            card,
            text: text.into(),
        })
    }

    pub fn reset_game(&mut self) -> Result<&GameState, GameError> {
        self.dispatch(Command::ResetGame)
    }

    pub fn restart_game_with_same_players(&mut self) -> Result<&GameState, GameError> {
        self.dispatch(Command::RestartGameWithSamePlayers)
    }
}
