//! Card instances - runtime card state.
//!
//! A `CardInstance` shares its definition through an `Arc` and carries its
//! own cost. Discounts change the instance's cost only; the definition is
//! never mutated.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use super::kind::CardKind;
use crate::elements::Element;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    definition: Arc<CardDefinition>,
    cost: u32,
}

impl CardInstance {
    /// Create an instance at the definition's base cost.
    #[must_use]
    pub fn new(definition: Arc<CardDefinition>) -> Self {
        let cost = definition.base_cost;
        Self { definition, cost }
    }

    /// The shared definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    /// Current cost of this instance.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Set the cost directly.
    pub fn set_cost(&mut self, cost: u32) {
        self.cost = cost;
    }

    /// Reduce the cost, floored at zero. Returns the new cost.
    pub fn discount(&mut self, amount: u32) -> u32 {
        self.cost = self.cost.saturating_sub(amount);
        self.cost
    }

    /// Restore the definition's base cost.
    pub fn reset_cost(&mut self) {
        self.cost = self.definition.base_cost;
    }

    /// Printed element.
    #[must_use]
    pub fn element(&self) -> Element {
        self.definition.element
    }

    /// Resolution rule, if the id is known.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        self.definition.kind()
    }
}

impl From<CardDefinition> for CardInstance {
    fn from(definition: CardDefinition) -> Self {
        Self::new(Arc::new(definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refine() -> Arc<CardDefinition> {
        Arc::new(CardDefinition::for_kind(CardKind::Refine).with_cost(2))
    }

    #[test]
    fn test_instance_starts_at_base_cost() {
        let instance = CardInstance::new(refine());
        assert_eq!(instance.cost(), 2);
        assert_eq!(instance.kind(), Some(CardKind::Refine));
    }

    #[test]
    fn test_discount_is_instance_local() {
        let definition = refine();
        let mut a = CardInstance::new(Arc::clone(&definition));
        let b = CardInstance::new(Arc::clone(&definition));

        assert_eq!(a.discount(1), 1);
        assert_eq!(a.discount(5), 0);
        assert_eq!(b.cost(), 2);
        assert_eq!(definition.base_cost, 2);

        a.reset_cost();
        assert_eq!(a.cost(), 2);
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut instance = CardInstance::new(refine());
        instance.set_cost(1);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
