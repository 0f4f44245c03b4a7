//! Card effect resolution.
//!
//! `CardResolver::play` is the single entry point the battle controller
//! calls once per played card. It picks the rule for the card's kind,
//! computes the elemental multiplier once, and mutates the two combatants
//! in place.
//!
//! The resolver never spends energy, checks playability, or decides turn
//! order; those belong to the caller.

mod resolver;

pub use resolver::CardResolver;
