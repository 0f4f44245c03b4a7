//! Core types shared by every combat module: configuration and errors.

pub mod config;
pub mod error;

pub use config::{CombatConfig, DEFAULT_VULNERABLE_PCT, NEUTRAL_PCT};
pub use error::CombatError;
