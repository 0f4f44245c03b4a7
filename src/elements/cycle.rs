//! Overcoming (Ke) cycle and damage multipliers.
//!
//! Wood > Earth > Water > Fire > Metal > Wood.
//! Multipliers are integer percentages so `apply` rounds exactly.

use serde::{Deserialize, Serialize};

use super::element::{Element, ElementKind};
use crate::core::config::{CombatConfig, NEUTRAL_PCT};

/// True iff `a` overcomes `b`. A kind never overcomes itself.
#[must_use]
pub fn overcomes(a: ElementKind, b: ElementKind) -> bool {
    a.overcomes_kind() == b
}

/// Relation of an attacking element to a defending element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Attacker overcomes defender.
    Advantage,
    /// Defender overcomes attacker.
    Disadvantage,
    /// Same kind, or no overcoming edge between the kinds.
    Neutral,
}

/// Relation between two kinds. Same-kind pairs are always neutral.
#[must_use]
pub fn relation(attacker: ElementKind, defender: ElementKind) -> ElementRelation {
    if overcomes(attacker, defender) {
        ElementRelation::Advantage
    } else if overcomes(defender, attacker) {
        ElementRelation::Disadvantage
    } else {
        ElementRelation::Neutral
    }
}

/// Damage multiplier stored as a percentage (x100).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplier(pub u32);

impl Multiplier {
    pub const NEUTRAL: Multiplier = Multiplier(NEUTRAL_PCT);

    /// Raw percentage.
    #[must_use]
    pub const fn pct(self) -> u32 {
        self.0
    }

    /// Multiplier as a float (1.5, 0.75, ...).
    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32 / NEUTRAL_PCT as f32
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{:.2}", self.as_f32())
    }
}

/// Multiplier for a card of `card_element` hitting a target whose current
/// element is `target_element`.
///
/// A target that has not acted yet (`None`) is neutral.
#[must_use]
pub fn multiplier(
    config: &CombatConfig,
    card_element: Element,
    target_element: Option<Element>,
) -> Multiplier {
    let Some(target) = target_element else {
        return Multiplier::NEUTRAL;
    };

    match relation(card_element.kind, target.kind) {
        ElementRelation::Advantage => Multiplier(config.advantage_pct),
        ElementRelation::Disadvantage => Multiplier(config.disadvantage_pct),
        ElementRelation::Neutral => Multiplier::NEUTRAL,
    }
}

/// Scale `base` by `multiplier`, rounding up (in the attacker's favor).
#[must_use]
pub fn apply(base: u32, multiplier: Multiplier) -> u32 {
    scale_ceil(base, multiplier.pct())
}

/// `ceil(value * pct / 100)` without float error, saturating at `u32::MAX`.
pub(crate) fn scale_ceil(value: u32, pct: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(pct)).div_ceil(u64::from(NEUTRAL_PCT));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
