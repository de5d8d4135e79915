//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use party_cards::{
    CardCatalog, CardId, GameConfig, GameRng, GameSession, GameState, PlayerId, ResponseCard,
    ScenarioCard,
};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn scenarios(n: u32) -> Vec<ScenarioCard> {
    (0..n)
        .map(|i| ScenarioCard::new(CardId::new(i), format!("Scenario {i}")))
        .collect()
}

pub fn responses(n: u32) -> Vec<ResponseCard> {
    (0..n)
        .map(|i| ResponseCard::new(CardId::new(100 + i), format!("Response {i}")))
        .collect()
}

pub fn catalog(scenario_count: u32, response_count: u32) -> CardCatalog {
    CardCatalog::new(scenarios(scenario_count), responses(response_count)).unwrap()
}

/// A session over a roomy catalog with full access.
pub fn session(config: GameConfig, seed: u64) -> GameSession {
    init_logging();
    GameSession::new(config, catalog(20, 120), party_cards::FullAccess, GameRng::new(seed))
}

/// A started session with `players` seats and default config.
pub fn started(players: usize, seed: u64) -> GameSession {
    let mut session = session(GameConfig::default(), seed);
    session.initialize_game(players, &[]).unwrap();
    session
}

/// The player whose turn it is.
pub fn current(state: &GameState) -> PlayerId {
    state.players[state.current_player_index].id
}

/// Play the first card of whoever is up.
pub fn play_current(session: &mut GameSession) -> PlayerId {
    let player = current(session.state());
    let card = session.state().players[player.index()].hand[0].id;
    session.play_card(player, card).unwrap();
    player
}

/// Pass for whoever is up.
pub fn pass_current(session: &mut GameSession) -> PlayerId {
    let player = current(session.state());
    session.pass_card(player).unwrap();
    player
}
