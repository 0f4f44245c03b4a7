//! Card registry for definition lookup.
//!
//! Stores definitions behind `Arc` so instances can share them. Definitions
//! come from `standard()` (the built-in ten-card set) or from authored JSON.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use super::definition::{CardDefinition, CardId, CardParams, CardType};
use super::instance::CardInstance;
use super::kind::CardKind;
use crate::core::error::CombatError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use wuxing_combat::cards::{CardKind, CardRegistry};
///
/// let registry = CardRegistry::standard();
/// assert_eq!(registry.len(), 10);
///
/// let card = registry.instantiate(CardKind::VineSurge.id()).unwrap();
/// assert_eq!(card.definition().params.base_damage, 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set, one definition per `CardKind`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in CardKind::iter() {
            registry.cards.insert(kind.id(), Arc::new(standard_definition(kind)));
        }
        registry
    }

    /// Load definitions from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        let definitions: Vec<CardDefinition> =
            serde_json::from_str(json).map_err(|e| CombatError::CardData(e.to_string()))?;

        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CombatError> {
        if self.cards.contains_key(&card.id) {
            return Err(CombatError::DuplicateCard(card.id));
        }
        if card.kind().is_none() {
            tracing::warn!(id = %card.id, name = %card.name, "registered card has no resolution rule");
        }
        self.cards.insert(card.id, Arc::new(card));
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Create an instance of a registered card.
    #[must_use]
    pub fn instantiate(&self, id: CardId) -> Option<CardInstance> {
        self.get(id).map(|definition| CardInstance::new(Arc::clone(definition)))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|c| c.as_ref())
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.card_type == card_type)
    }
}

fn standard_definition(kind: CardKind) -> CardDefinition {
    let params = match kind {
        CardKind::VineSurge => CardParams {
            base_damage: 10,
            bonus_damage: 6,
            vulnerable_turns: 2,
            ..CardParams::default()
        },
        CardKind::SpiritMend => CardParams {
            heal: 8,
            heal_multiplier_pct: 150,
            ..CardParams::default()
        },
        CardKind::HeartflameSlash => CardParams {
            base_damage: 8,
            bonus_damage: 4,
            ..CardParams::default()
        },
        CardKind::ScorchMark => CardParams {
            base_damage: 4,
            burn_tick: 3,
            burn_turns: 3,
            ..CardParams::default()
        },
        CardKind::RockBulwark => CardParams { base_block: 8, ..CardParams::default() },
        CardKind::EarthenSeal => CardParams { weak_turns: 1, ..CardParams::default() },
        CardKind::GildedEdge => CardParams {
            base_damage: 7,
            bonus_damage: 5,
            ..CardParams::default()
        },
        CardKind::Refine => CardParams::default(),
        CardKind::TideCalling => CardParams {
            base_damage: 6,
            wet_turns: 2,
            ..CardParams::default()
        },
        CardKind::FlowingVeil => CardParams {
            shield_hits: 2,
            shield_reduce_per_hit: 5,
            ..CardParams::default()
        },
    };

    CardDefinition::for_kind(kind).with_cost(1).with_params(params)
}
