//! # wuxing-combat
//!
//! Combat resolution engine for a two-combatant, five-element card battle.
//!
//! ## Design Principles
//!
//! 1. **Closed card set**: the ten playable cards are a `CardKind` enum and
//!    the resolver matches it exhaustively. A card id without a rule is an
//!    error, never a silent gap.
//!
//! 2. **Owned combatant records**: each fighter is one `CombatantState`.
//!    Presentation code reads accessors; only the resolver and the state's
//!    own primitives mutate it, through `&mut` borrows passed per call.
//!
//! 3. **Exact arithmetic**: multipliers are integer percentages and every
//!    scaled value is rounded up, so results never drift with float error.
//!
//! ## Modules
//!
//! - `core`: Combat configuration and error types
//! - `elements`: Element kinds, the overcoming cycle, damage multipliers
//! - `combatant`: Combatant resources and the status table
//! - `cards`: Card definitions, instances, and registry
//! - `effects`: The card resolver
//!
//! ## Example
//!
//! ```
//! use wuxing_combat::{CardKind, CardRegistry, CardResolver, CombatConfig};
//! use wuxing_combat::elements::{Element, ElementKind};
//!
//! let config = CombatConfig::default();
//! let resolver = CardResolver::new(config).unwrap();
//! let registry = CardRegistry::standard();
//!
//! let mut player = config.combatant().unwrap();
//! let mut enemy = config.combatant().unwrap().with_element(Element::yang(ElementKind::Water));
//!
//! // Water overcomes Fire, so Scorch Mark is at a disadvantage
//! let mut scorch = registry.instantiate(CardKind::ScorchMark.id()).unwrap();
//! resolver.play(&mut scorch, &mut player, &mut enemy).unwrap();
//!
//! assert_eq!(enemy.hp(), 97);
//! assert_eq!(enemy.status_summary(), "Burn 3/3");
//! ```

pub mod core;
pub mod elements;
pub mod combatant;
pub mod cards;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{CombatConfig, CombatError};

pub use crate::elements::{
    Element, ElementKind, ElementRelation, Multiplier, Polarity,
    apply, multiplier, overcomes, relation,
};

pub use crate::combatant::{
    CombatantState, DamageReport, StatusEntry, StatusKind, StatusTable, TickReport,
};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardKind, CardParams, CardRegistry, CardType,
};

pub use crate::effects::CardResolver;
