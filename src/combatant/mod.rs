//! Combatant state: resources plus the status table.
//!
//! ## Key Types
//!
//! - `StatusKind`: Burn, Wet, Weak, Vulnerable, Shield
//! - `StatusTable`: fixed-size table of duration/magnitude entries
//! - `CombatantState`: HP, block, energy, current element, statuses
//!
//! Presentation layers read combatants through accessors only. Mutation
//! happens through the primitives on `CombatantState`, called either by
//! `CardResolver` or by the external turn controller at turn boundaries.

pub mod status;
pub mod state;

pub use status::{StatusEntry, StatusKind, StatusTable, CLEANSE_PRIORITY};
pub use state::{CombatantState, DamageReport, TickReport};
