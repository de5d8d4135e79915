//! Card catalog: the full scenario and response lists.
//!
//! Built once at startup and read-only afterwards. The entitlement gate
//! slices these lists before every deal.

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

use super::definition::{CardId, ResponseCard, ScenarioCard};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate scenario id: {0}")]
    DuplicateScenarioId(CardId),

    #[error("duplicate response id: {0}")]
    DuplicateResponseId(CardId),
}

/// Ordered scenario and response lists with unique ids.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{CardCatalog, CardId, ResponseCard, ScenarioCard};
///
/// let catalog = CardCatalog::new(
///     vec![ScenarioCard::new(CardId::new(1), "Your flight is cancelled")],
///     vec![ResponseCard::new(CardId::new(1), "Sleep at the gate")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.scenarios().len(), 1);
/// assert!(catalog.response(CardId::new(1)).is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardCatalog {
    scenarios: Vec<ScenarioCard>,
    responses: Vec<ResponseCard>,
}

impl CardCatalog {
    /// Build a catalog, rejecting duplicate ids within either list.
    pub fn new(
        scenarios: Vec<ScenarioCard>,
        responses: Vec<ResponseCard>,
    ) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        if let Some(dup) = scenarios.iter().find(|c| !seen.insert(c.id)) {
            return Err(CatalogError::DuplicateScenarioId(dup.id));
        }

        seen.clear();
        if let Some(dup) = responses.iter().find(|c| !seen.insert(c.id)) {
            return Err(CatalogError::DuplicateResponseId(dup.id));
        }

        Ok(Self {
            scenarios,
            responses,
        })
    }

    /// All scenario cards, in catalog order.
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioCard] {
        &self.scenarios
    }

    /// All response cards, in catalog order.
    #[must_use]
    pub fn responses(&self) -> &[ResponseCard] {
        &self.responses
    }

    #[must_use]
    pub fn scenario(&self, id: CardId) -> Option<&ScenarioCard> {
        self.scenarios.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn response(&self, id: CardId) -> Option<&ResponseCard> {
        self.responses.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_scenario_rejected() {
        let result = CardCatalog::new(
            vec![
                ScenarioCard::new(CardId::new(1), "a"),
                ScenarioCard::new(CardId::new(1), "b"),
            ],
            vec![],
        );
        assert_eq!(result, Err(CatalogError::DuplicateScenarioId(CardId::new(1))));
    }

    #[test]
    fn test_duplicate_response_rejected() {
        let result = CardCatalog::new(
            vec![],
            vec![
                ResponseCard::new(CardId::new(3), "a"),
                ResponseCard::new(CardId::new(4), "b"),
                ResponseCard::custom(CardId::new(3)),
            ],
        );
        assert_eq!(result, Err(CatalogError::DuplicateResponseId(CardId::new(3))));
    }

    #[test]
    fn test_ids_may_repeat_across_lists() {
        let catalog = CardCatalog::new(
            vec![ScenarioCard::new(CardId::new(1), "prompt")],
            vec![ResponseCard::new(CardId::new(1), "answer")],
        )
        .unwrap();

        assert_eq!(catalog.scenario(CardId::new(1)).unwrap().text, "prompt");
        assert_eq!(catalog.response(CardId::new(1)).unwrap().text, "answer");
        assert!(catalog.response(CardId::new(2)).is_none());
    }
}
