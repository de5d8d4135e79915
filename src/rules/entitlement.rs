//! Entitlement gate: slices the catalog before every deal.
//!
//! The purchase flag lives outside the engine. The engine only sees a
//! capability object with two pure filters, consulted once per
//! initialize/restart.

use crate::cards::{ResponseCard, ScenarioCard};

/// Scenarios available without a purchase.
pub const DEMO_SCENARIO_LIMIT: usize = 3;

/// Response cards available without a purchase.
pub const DEMO_RESPONSE_LIMIT: usize = 3;

/// Capability deciding which catalog cards a match may use.
///
/// Implementations must be pure: the same input gives the same output,
/// and filtering an already-filtered list changes nothing.
pub trait Entitlement {
    fn limit_scenarios(&self, cards: &[ScenarioCard]) -> Vec<ScenarioCard>;

    fn limit_response_cards(&self, cards: &[ResponseCard]) -> Vec<ResponseCard>;
}

/// Purchased: the whole catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullAccess;

impl Entitlement for FullAccess {
    fn limit_scenarios(&self, cards: &[ScenarioCard]) -> Vec<ScenarioCard> {
        cards.to_vec()
    }

    fn limit_response_cards(&self, cards: &[ResponseCard]) -> Vec<ResponseCard> {
        cards.to_vec()
    }
}

/// Demo mode: the first few cards of each list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoAccess {
    pub scenario_limit: usize,
    pub response_limit: usize,
}

impl Default for DemoAccess {
    fn default() -> Self {
        Self {
            scenario_limit: DEMO_SCENARIO_LIMIT,
            response_limit: DEMO_RESPONSE_LIMIT,
        }
    }
}

impl DemoAccess {
    #[must_use]
    pub fn new(scenario_limit: usize, response_limit: usize) -> Self {
        Self {
            scenario_limit,
            response_limit,
        }
    }
}

impl Entitlement for DemoAccess {
    fn limit_scenarios(&self, cards: &[ScenarioCard]) -> Vec<ScenarioCard> {
        cards.iter().take(self.scenario_limit).cloned().collect()
    }

    fn limit_response_cards(&self, cards: &[ResponseCard]) -> Vec<ResponseCard> {
        cards.iter().take(self.response_limit).cloned().collect()
    }
}

/// Map the purchase flag to the matching gate.
#[must_use]
pub fn entitlement_for(purchased: bool) -> Box<dyn Entitlement> {
    if purchased {
        Box::new(FullAccess)
    } else {
        Box::new(DemoAccess::default())
    }
}
