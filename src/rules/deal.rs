//! Dealing: gate, shuffle and split the catalog into a fresh match.

use im::Vector;

use super::entitlement::Entitlement;
use crate::cards::{CardCatalog, ResponseCard, ScenarioCard};
use crate::core::{GameConfig, GameError, GameRng, Hand, Player, PlayerId};

/// Everything a deal reads besides the config.
pub struct DealContext<'a> {
    pub catalog: &'a CardCatalog,
    pub entitlement: &'a dyn Entitlement,
    pub rng: &'a mut GameRng,
}

impl<'a> DealContext<'a> {
    pub fn new(
        catalog: &'a CardCatalog,
        entitlement: &'a dyn Entitlement,
        rng: &'a mut GameRng,
    ) -> Self {
        Self {
            catalog,
            entitlement,
            rng,
        }
    }
}

/// Result of dealing a match.
#[derive(Debug)]
pub struct Deal {
    pub players: Vector<Player>,
    pub scenarios: Vector<ScenarioCard>,
    pub response_deck: Vector<ResponseCard>,
}

/// Gate and shuffle both catalogs, then deal `config.hand_size` cards to
/// each seat in turn: seat 0 takes the first block, seat 1 the next.
///
/// Scenarios are shuffled before responses so a seed fixes both.
pub fn deal(
    config: &GameConfig,
    names: &[String],
    ctx: &mut DealContext<'_>,
) -> Result<Deal, GameError> {
    let player_count = names.len();

    let mut scenarios = ctx.entitlement.limit_scenarios(ctx.catalog.scenarios());
    let mut responses = ctx.entitlement.limit_response_cards(ctx.catalog.responses());

    // Reject before shuffling: a failed deal must not advance the RNG.
    let needed = player_count * config.hand_size;
    if responses.len() < needed {
        if config.strict_deal {
            return Err(GameError::InsufficientCards {
                needed,
                available: responses.len(),
            });
        }
        tracing::warn!(
            needed,
            available = responses.len(),
            "response deck too small, late hands are under-filled"
        );
    }

    ctx.rng.shuffle(&mut scenarios);
    ctx.rng.shuffle(&mut responses);

    let mut cards = responses.into_iter();
    let players = names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let hand: Hand = cards.by_ref().take(config.hand_size).collect();
            Player::new(PlayerId::new(seat as u8), name.clone()).with_hand(hand)
        })
        .collect();

    Ok(Deal {
        players,
        scenarios: scenarios.into_iter().collect(),
        response_deck: cards.collect(),
    })
}

/// Fill in "Player N" for every seat without a usable name.
#[must_use]
pub fn resolve_names(player_count: usize, names: &[String]) -> Vec<String> {
    PlayerId::all(player_count)
        .map(|id| {
            names
                .get(id.index())
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map_or_else(|| id.default_name(), str::to_string)
        })
        .collect()
}
