//! Combat configuration.
//!
//! Numeric constants that the rules read but never hardcode:
//! elemental multipliers, vulnerable scaling, the Earthen Seal block strip,
//! and default combatant resources.
//!
//! Percentages are stored as integers (x100) so that ceiling rounding is
//! exact: `150` means 1.5x.

use serde::{Deserialize, Serialize};

use crate::combatant::CombatantState;
use crate::core::error::CombatError;

/// Multiplier applied when neither element overcomes the other.
pub const NEUTRAL_PCT: u32 = 100;

/// Default incoming damage scaling while vulnerable.
pub const DEFAULT_VULNERABLE_PCT: u32 = 150;

/// Complete combat configuration.
///
/// Every field has a default, so partial JSON documents deserialize:
///
/// ```
/// use wuxing_combat::core::CombatConfig;
///
/// let config: CombatConfig = serde_json::from_str(r#"{ "advantage_pct": 200 }"#).unwrap();
/// assert_eq!(config.advantage_pct, 200);
/// assert_eq!(config.disadvantage_pct, 75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Damage scaling when the card's element overcomes the target's (> 100).
    pub advantage_pct: u32,

    /// Damage scaling when the target's element overcomes the card's (< 100).
    pub disadvantage_pct: u32,

    /// Incoming damage scaling while a combatant is vulnerable.
    pub vulnerable_pct: u32,

    /// Block removed from the target by Earthen Seal.
    pub block_strip: u32,

    /// Max HP for combatants built with `combatant()`.
    pub default_max_hp: u32,

    /// Max energy for combatants built with `combatant()`.
    pub default_max_energy: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            advantage_pct: 150,
            disadvantage_pct: 75,
            vulnerable_pct: DEFAULT_VULNERABLE_PCT,
            block_strip: 5,
            default_max_hp: 100,
            default_max_energy: 3,
        }
    }
}

impl CombatConfig {
    /// Set the advantage multiplier (x100).
    #[must_use]
    pub fn with_advantage(mut self, pct: u32) -> Self {
        self.advantage_pct = pct;
        self
    }

    /// Set the disadvantage multiplier (x100).
    #[must_use]
    pub fn with_disadvantage(mut self, pct: u32) -> Self {
        self.disadvantage_pct = pct;
        self
    }

    /// Set the vulnerable damage multiplier (x100).
    #[must_use]
    pub fn with_vulnerable(mut self, pct: u32) -> Self {
        self.vulnerable_pct = pct;
        self
    }

    /// Set the block removed by Earthen Seal.
    #[must_use]
    pub fn with_block_strip(mut self, amount: u32) -> Self {
        self.block_strip = amount;
        self
    }

    /// Check that every value is in range.
    ///
    /// Advantage must scale up, disadvantage must scale down without
    /// reaching zero, vulnerable must not reduce damage, and default
    /// combatants must have HP.
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.advantage_pct <= NEUTRAL_PCT {
            return Err(CombatError::Config(format!(
                "advantage_pct must exceed {NEUTRAL_PCT}, got {}",
                self.advantage_pct
            )));
        }
        if self.disadvantage_pct == 0 || self.disadvantage_pct >= NEUTRAL_PCT {
            return Err(CombatError::Config(format!(
                "disadvantage_pct must be between 1 and {}, got {}",
                NEUTRAL_PCT - 1,
                self.disadvantage_pct
            )));
        }
        if self.vulnerable_pct < NEUTRAL_PCT {
            return Err(CombatError::Config(format!(
                "vulnerable_pct must be at least {NEUTRAL_PCT}, got {}",
                self.vulnerable_pct
            )));
        }
        if self.default_max_hp == 0 {
            return Err(CombatError::Config("default_max_hp must be positive".into()));
        }
        Ok(())
    }

    /// Build a combatant with the default resources.
    pub fn combatant(&self) -> Result<CombatantState, CombatError> {
        self.combatant_with(self.default_max_hp, self.default_max_energy)
    }

    /// Build a combatant at full HP and energy.
    pub fn combatant_with(
        &self,
        max_hp: u32,
        max_energy: u32,
    ) -> Result<CombatantState, CombatError> {
        CombatantState::new(max_hp, max_energy)?.with_vulnerable_pct(self.vulnerable_pct)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CombatError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CombatConfig::default();
        assert!(config.advantage_pct > NEUTRAL_PCT);
        assert!(config.disadvantage_pct < NEUTRAL_PCT);
        assert_eq!(config.block_strip, 5);
    }

    #[test]
    fn test_config_builder() {
        let config = CombatConfig::default()
            .with_advantage(200)
            .with_disadvantage(50)
            .with_vulnerable(125)
            .with_block_strip(3);

        assert_eq!(config.advantage_pct, 200);
        assert_eq!(config.disadvantage_pct, 50);
        assert_eq!(config.vulnerable_pct, 125);
        assert_eq!(config.block_strip, 3);
    }

    #[test]
    fn test_combatant_from_config() {
        let config = CombatConfig::default().with_vulnerable(200);
        let fighter = config.combatant().unwrap();

        assert_eq!(fighter.max_hp(), 100);
        assert_eq!(fighter.hp(), 100);
        assert_eq!(fighter.max_energy(), 3);
        assert_eq!(fighter.vulnerable_pct(), 200);
    }

    #[test]
    fn test_combatant_zero_hp_rejected() {
        let config = CombatConfig::default();
        assert!(config.combatant_with(0, 3).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config = CombatConfig::from_json(r#"{ "block_strip": 8 }"#).unwrap();
        assert_eq!(config.block_strip, 8);
        assert_eq!(config.advantage_pct, 150);

        assert!(CombatConfig::from_json(r#"{ "block_strip": -1 }"#).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(CombatConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let base = CombatConfig::default();
        assert!(base.with_advantage(100).validate().is_err());
        assert!(base.with_advantage(50).validate().is_err());
        assert!(base.with_disadvantage(100).validate().is_err());
        assert!(base.with_disadvantage(200).validate().is_err());
        assert!(base.with_disadvantage(0).validate().is_err());
        assert!(base.with_vulnerable(99).validate().is_err());
        assert!(CombatConfig { default_max_hp: 0, ..base }.validate().is_err());

        assert!(base.with_advantage(101).with_disadvantage(99).validate().is_ok());
        assert!(base.with_vulnerable(100).validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_inverted_multipliers() {
        let result = CombatConfig::from_json(r#"{ "advantage_pct": 50, "disadvantage_pct": 200 }"#);
        assert!(matches!(result, Err(CombatError::Config(_))));
    }

    #[test]
    fn test_combatant_rejects_low_vulnerable() {
        let config = CombatConfig::default().with_vulnerable(50);
        assert!(matches!(config.combatant(), Err(CombatError::Config(_))));
    }
}
