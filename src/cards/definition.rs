//! Card records: scenario prompts and response cards.
//!
//! Both are content data loaded once from the catalog. The only mutable
//! field is `ResponseCard::custom_text`, which the rules touch only on
//! custom cards held in a hand.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within its catalog list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The shared prompt for a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioCard {
    pub id: CardId,
    pub text: String,
}

impl ScenarioCard {
    #[must_use]
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A card a player can play against the scenario.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{CardId, ResponseCard};
///
/// let printed = ResponseCard::new(CardId::new(1), "Pretend it never happened");
/// assert!(printed.is_playable());
///
/// let mut blank = ResponseCard::custom(CardId::new(2));
/// assert!(!blank.is_playable());
///
/// blank.custom_text = Some("Call my mother".into());
/// assert!(blank.is_playable());
/// assert_eq!(blank.display_text(), "Call my mother");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseCard {
    pub id: CardId,
    pub text: String,
    /// Text is supplied by the player at play time.
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl ResponseCard {
    /// Create a printed response card.
    #[must_use]
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_custom: false,
            custom_text: None,
        }
    }

    /// Create a blank custom card.
    #[must_use]
    pub fn custom(id: CardId) -> Self {
        Self {
            id,
            text: String::new(),
            is_custom: true,
            custom_text: None,
        }
    }

    /// Printed cards are always playable; custom cards need non-blank text.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.is_custom
            || self
                .custom_text
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }

    /// The text shown when the card is played.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match (&self.custom_text, self.is_custom) {
            (Some(text), true) => text,
            _ => &self.text,
        }
    }
}
