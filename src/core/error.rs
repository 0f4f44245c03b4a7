//! Combat error taxonomy.
//!
//! Clamping (HP, block, status counters, card cost) is the normal recovery
//! path for numeric drift and never produces an error. The variants here
//! cover inputs the core refuses to act on.

use crate::cards::CardId;

/// Errors surfaced by the combat core.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// No resolution rule exists for this card id.
    #[error("no resolution rule for {0}")]
    UnknownCard(CardId),

    /// A card definition with this id is already registered.
    #[error("{0} already registered")]
    DuplicateCard(CardId),

    /// Combatant construction with impossible resources.
    #[error("invalid combatant: hp {hp} / max {max_hp}")]
    InvalidCombatant { hp: u32, max_hp: u32 },

    /// Not enough energy to pay a cost.
    #[error("insufficient energy: required {required}, available {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    /// Malformed card definition data.
    #[error("invalid card data: {0}")]
    CardData(String),

    /// Malformed combat configuration.
    #[error("invalid combat config: {0}")]
    Config(String),
}
