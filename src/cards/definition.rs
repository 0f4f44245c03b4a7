//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its element,
//! type, base cost, and the numeric parameters its resolution rule reads.
//! Each rule uses only the parameters it needs; the rest stay at zero.
//!
//! Instance-specific data (the current, possibly discounted cost) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use super::kind::CardKind;
use crate::core::config::NEUTRAL_PCT;
use crate::elements::Element;

/// Identifier for a card definition, as it appears in authored data.
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

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Attack,
    AttackDebuff,
    Skill,
    Defense,
    Heal,
    Utility,
}

/// Numeric parameters read by the resolution rules.
///
/// Missing fields deserialize to zero, except `heal_multiplier_pct` which
/// defaults to 100 (no bonus).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CardParams {
    pub base_damage: u32,
    pub bonus_damage: u32,
    pub base_block: u32,
    pub heal: u32,
    pub burn_tick: u32,
    pub burn_turns: u32,
    pub wet_turns: u32,
    pub weak_turns: u32,
    pub vulnerable_turns: u32,
    pub shield_hits: u32,
    pub shield_reduce_per_hit: u32,
    /// Heal scaling while the user is debuffed (x100).
    pub heal_multiplier_pct: u32,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            base_damage: 0,
            bonus_damage: 0,
            base_block: 0,
            heal: 0,
            burn_tick: 0,
            burn_turns: 0,
            wet_turns: 0,
            weak_turns: 0,
            vulnerable_turns: 0,
            shield_hits: 0,
            shield_reduce_per_hit: 0,
            heal_multiplier_pct: NEUTRAL_PCT,
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use wuxing_combat::cards::{CardDefinition, CardId, CardParams, CardType};
/// use wuxing_combat::elements::{Element, ElementKind};
///
/// let slash = CardDefinition::new(
///     CardId::new(3),
///     "Heartflame Slash",
///     Element::yang(ElementKind::Fire),
///     CardType::Attack,
/// )
/// .with_cost(1)
/// .with_params(CardParams { base_damage: 8, bonus_damage: 4, ..CardParams::default() });
///
/// assert_eq!(slash.params.base_damage, 8);
/// assert!(slash.kind().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Printed element.
    pub element: Element,

    /// Card category.
    pub card_type: CardType,

    /// Energy cost before any discount.
    #[serde(default)]
    pub base_cost: u32,

    /// Rule parameters.
    #[serde(default)]
    pub params: CardParams,
}

impl CardDefinition {
    /// Create a new card definition with zeroed parameters.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, element: Element, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            card_type,
            base_cost: 0,
            params: CardParams::default(),
        }
    }

    /// Create a definition for a known card, taking its canonical name,
    /// element and type.
    #[must_use]
    pub fn for_kind(kind: CardKind) -> Self {
        Self::new(kind.id(), kind.name(), kind.element(), kind.card_type())
    }

    /// Set the base cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.base_cost = cost;
        self
    }

    /// Set the rule parameters (builder pattern).
    #[must_use]
    pub fn with_params(mut self, params: CardParams) -> Self {
        self.params = params;
        self
    }

    /// The resolution rule this definition maps to, if any.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        CardKind::from_id(self.id)
    }
}
