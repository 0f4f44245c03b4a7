//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Raw identifier from authored card data
//! - `CardKind`: The ten cards the resolver knows how to play
//! - `CardDefinition`: Immutable card data (element, type, parameters)
//! - `CardInstance`: A definition plus an instance-local cost
//! - `CardRegistry`: Definition lookup and the built-in card set

pub mod definition;
pub mod instance;
pub mod kind;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardParams, CardType};
pub use instance::CardInstance;
pub use kind::CardKind;
pub use registry::CardRegistry;
