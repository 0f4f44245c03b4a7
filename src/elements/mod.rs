//! Five-element (Wuxing) system.
//!
//! - `ElementKind`: the five base kinds that take part in the overcoming cycle
//! - `Polarity`: Yang (offense-leaning) or Yin (utility-leaning)
//! - `Element`: a concrete kind + polarity pair
//! - `overcomes` / `relation` / `multiplier` / `apply`: advantage math

mod element;
mod cycle;

pub use element::{Element, ElementKind, Polarity};
pub use cycle::{apply, multiplier, overcomes, relation, ElementRelation, Multiplier};
pub(crate) use cycle::scale_ceil;
