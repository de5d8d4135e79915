//! Transition functions for the match.
//!
//! Each operation reads a snapshot and returns either the next snapshot
//! or the rule it violated:
//!
//! ```text
//! (&GameState, command) -> Result<GameState, GameError>
//! ```
//!
//! All validation happens before the clone that becomes the next state,
//! so a failed call leaves nothing behind.
//!
//! ## Turn order
//!
//! Play moves counterclockwise: after seat `i` acts, seat `(i + n - 1) % n`
//! is up. Exchange directions are named relative to that order (see
//! `ExchangeDirection`).

use super::deal::{self, DealContext};
use crate::cards::CardId;
use crate::core::{
    Command, ExchangeDirection, ExchangeScope, GameConfig, GameError, GameRng, GameState,
    PlayedCard, PlayerId,
};

/// The rules of the game, parameterized by `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct Rules {
    config: GameConfig,
}

impl Rules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply any command.
    ///
    /// Commands that do not need the deal context ignore it.
    pub fn apply(
        &self,
        state: &GameState,
        command: &Command,
        ctx: &mut DealContext<'_>,
    ) -> Result<GameState, GameError> {
        let result = match command {
            Command::InitializeGame {
                player_count,
                names,
            } => self.initialize_game(*player_count, names, ctx),
            Command::PlayCard { player, card } => self.play_card(state, *player, *card),
            Command::PassCard { player } => self.pass_card(state, *player),
            Command::ChangeScenarioAndContinue => self.change_scenario_and_continue(state),
            Command::ExchangeCard {
                player,
                card,
                direction,
            } => self.exchange_card(state, *player, *card, *direction, ctx.rng),
            Command::NextRound { winner } => self.next_round(state, *winner),
            Command::AwardPoint { player } => self.award_point(state, *player),
            Command::UpdateCustomText { player, card, text } => {
                self.update_custom_text(state, *player, *card, text)
            }
            Command::ResetGame => Ok(self.reset_game()),
            Command::RestartGameWithSamePlayers => self.restart_game_with_same_players(state, ctx),
        };

        match &result {
            Ok(next) => tracing::debug!(?command, round = next.round, "applied"),
            Err(err) => tracing::debug!(?command, %err, "rejected"),
        }
        result
    }

    // === Match lifecycle ===

    /// Start a new match with `player_count` seats.
    ///
    /// Missing or blank names become "Player N". The previous state is
    /// irrelevant: the result replaces it wholesale.
    pub fn initialize_game(
        &self,
        player_count: usize,
        names: &[String],
        ctx: &mut DealContext<'_>,
    ) -> Result<GameState, GameError> {
        if !self.config.accepts_player_count(player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }

        let names = deal::resolve_names(player_count, names);
        let deal = deal::deal(&self.config, &names, ctx)?;

        let mut scenario_deck = deal.scenarios;
        let current_scenario = scenario_deck.pop_front();

        tracing::info!(
            players = player_count,
            scenarios = scenario_deck.len() + usize::from(current_scenario.is_some()),
            leftover = deal.response_deck.len(),
            "match started"
        );

        Ok(GameState {
            players: deal.players,
            current_player_index: 0,
            current_scenario,
            scenario_deck,
            response_deck: deal.response_deck,
            played_cards: im::Vector::new(),
            round: 1,
            game_started: true,
            round_complete: false,
            game_complete: false,
        })
    }

    /// Deal a fresh match for the same seats and names. Scores reset.
    pub fn restart_game_with_same_players(
        &self,
        state: &GameState,
        ctx: &mut DealContext<'_>,
    ) -> Result<GameState, GameError> {
        if state.players.is_empty() {
            return Err(GameError::GameNotStarted);
        }

        let names: Vec<String> = state.players.iter().map(|p| p.name.clone()).collect();
        tracing::info!(players = names.len(), "restarting with same players");
        self.initialize_game(names.len(), &names, ctx)
    }

    /// The empty pre-match state.
    #[must_use]
    pub fn reset_game(&self) -> GameState {
        tracing::info!("match reset");
        GameState::empty()
    }

    // === Turn actions ===

    /// Play a card from `player`'s hand against the scenario.
    pub fn play_card(
        &self,
        state: &GameState,
        player: PlayerId,
        card: CardId,
    ) -> Result<GameState, GameError> {
        let seat = self.check_turn(state, player)?;

        let pos = state.players[seat]
            .position_of(card)
            .ok_or(GameError::CardNotInHand { player, card })?;
        if !state.players[seat].hand[pos].is_playable() {
            return Err(GameError::CustomCardEmpty(card));
        }

        let mut next = state.clone();
        let played = next.players[seat].hand.remove(pos);
        next.played_cards.push_back(PlayedCard::card(player, played));
        self.advance_turn(&mut next);
        next.game_complete = next.any_hand_empty();

        if next.game_complete {
            tracing::debug!(%player, "hand emptied, match complete");
        }
        Ok(next)
    }

    /// Record a pass for `player`. Their hand is untouched.
    pub fn pass_card(&self, state: &GameState, player: PlayerId) -> Result<GameState, GameError> {
        self.check_turn(state, player)?;

        let mut next = state.clone();
        next.played_cards.push_back(PlayedCard::pass(player));
        self.advance_turn(&mut next);
        Ok(next)
    }

    /// Everyone passed: draw a new scenario and keep going from the
    /// current seat. The round number does not change.
    pub fn change_scenario_and_continue(&self, state: &GameState) -> Result<GameState, GameError> {
        self.check_in_play(state)?;
        if !state.round_complete || !state.all_passed() {
            return Err(GameError::NotAllPassed);
        }

        let mut next = state.clone();
        let scenario = next
            .scenario_deck
            .pop_front()
            .ok_or(GameError::DeckExhausted)?;
        next.current_scenario = Some(scenario);
        next.played_cards.clear();
        next.round_complete = false;
        Ok(next)
    }

    /// Swap `card` with a random card from the neighbour in `direction`.
    pub fn exchange_card(
        &self,
        state: &GameState,
        player: PlayerId,
        card: CardId,
        direction: ExchangeDirection,
        rng: &mut GameRng,
    ) -> Result<GameState, GameError> {
        self.check_in_play(state)?;
        let from = seat_of(state, player)?;

        if state.players[from].has_exchanged {
            return Err(GameError::AlreadyExchanged(player));
        }
        let given_pos = state.players[from]
            .position_of(card)
            .ok_or(GameError::CardNotInHand { player, card })?;

        let to = direction.target_index(from, state.player_count());
        if to == from {
            return Err(GameError::NoCardsToExchangeWith(player));
        }
        let target = &state.players[to];
        let taken_pos = rng
            .gen_index(target.hand.len())
            .ok_or(GameError::NoCardsToExchangeWith(target.id))?;

        let mut next = state.clone();
        let taken = next.players[to].hand.remove(taken_pos);
        let given = next.players[from].hand.remove(given_pos);

        tracing::debug!(
            from = %player,
            to = %next.players[to].id,
            given = %given.id,
            taken = %taken.id,
            "cards exchanged"
        );

        next.players[from].hand.push(taken);
        next.players[to].hand.push(given);
        next.players[from].has_exchanged = true;
        Ok(next)
    }

    // === Round flow ===

    /// Draw the next scenario and start a new round.
    ///
    /// The winner, if given, leads the new round; otherwise the turn stays
    /// where it is. Under `ExchangeScope::PerRound` exchange rights return.
    pub fn next_round(
        &self,
        state: &GameState,
        winner: Option<PlayerId>,
    ) -> Result<GameState, GameError> {
        self.check_in_play(state)?;
        let leader = winner.map(|w| seat_of(state, w)).transpose()?;

        let mut next = state.clone();
        let scenario = next
            .scenario_deck
            .pop_front()
            .ok_or(GameError::DeckExhausted)?;
        next.current_scenario = Some(scenario);
        next.played_cards.clear();
        next.round_complete = false;
        next.round += 1;

        if self.config.exchange_scope == ExchangeScope::PerRound {
            for p in next.players.iter_mut() {
                p.has_exchanged = false;
            }
        }
        if let Some(seat) = leader {
            next.current_player_index = seat;
        }
        Ok(next)
    }

    /// Give `player` one point.
    pub fn award_point(&self, state: &GameState, player: PlayerId) -> Result<GameState, GameError> {
        self.check_started(state)?;
        let seat = seat_of(state, player)?;

        let mut next = state.clone();
        next.players[seat].score += 1;
        Ok(next)
    }

    /// Write the text of a custom card held by `player`.
    pub fn update_custom_text(
        &self,
        state: &GameState,
        player: PlayerId,
        card: CardId,
        text: &str,
    ) -> Result<GameState, GameError> {
        self.check_started(state)?;
        let seat = seat_of(state, player)?;
        let pos = state.players[seat]
            .position_of(card)
            .ok_or(GameError::CardNotInHand { player, card })?;
        if !state.players[seat].hand[pos].is_custom {
            return Err(GameError::NotCustomCard(card));
        }

        let mut next = state.clone();
        next.players[seat].hand[pos].custom_text = Some(text.to_string());
        Ok(next)
    }

    // === Helpers ===

    /// Scoring and custom text stay open after the match completes.
    fn check_started(&self, state: &GameState) -> Result<(), GameError> {
        if !state.game_started {
            return Err(GameError::GameNotStarted);
        }
        Ok(())
    }

    fn check_in_play(&self, state: &GameState) -> Result<(), GameError> {
        self.check_started(state)?;
        if state.game_complete {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Shared preconditions for play and pass. Returns the actor's seat.
    fn check_turn(&self, state: &GameState, player: PlayerId) -> Result<usize, GameError> {
        self.check_in_play(state)?;
        let seat = seat_of(state, player)?;

        if state.round_complete || state.played_cards.len() >= state.player_count() {
            return Err(GameError::RoundComplete);
        }
        if state.has_played(player) {
            return Err(GameError::AlreadyPlayed(player));
        }
        if self.config.enforce_turn_order && seat != state.current_player_index {
            return Err(GameError::OutOfTurn {
                expected: state.players[state.current_player_index].id,
                actual: player,
            });
        }
        Ok(seat)
    }

    /// Counterclockwise turn advance plus round-complete bookkeeping.
    fn advance_turn(&self, state: &mut GameState) {
        let n = state.player_count();
        state.current_player_index = (state.current_player_index + n - 1) % n;
        state.round_complete = state.played_cards.len() == n;
    }
}

fn seat_of(state: &GameState, player: PlayerId) -> Result<usize, GameError> {
    state
        .player(player)
        .map(|p| p.id.index())
        .ok_or(GameError::UnknownPlayer(player))
}
