//! Mutable record of one fighter.
//!
//! Created once per participant at battle start. Fields are private;
//! presentation code polls the accessors after every play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::status::{StatusEntry, StatusKind, StatusTable};
use crate::core::config::{DEFAULT_VULNERABLE_PCT, NEUTRAL_PCT};
use crate::core::error::CombatError;
use crate::elements::{scale_ceil, Element};

/// Breakdown of one damage instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage as requested by the caller.
    pub incoming: u32,
    /// Damage after vulnerable scaling.
    pub scaled: u32,
    /// Damage removed by one shield hit.
    pub shield_absorbed: u32,
    /// Damage soaked by block.
    pub block_absorbed: u32,
    /// HP actually lost.
    pub hp_lost: u32,
}

/// Result of a turn-boundary status tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// HP lost to burn.
    pub burn_damage: u32,
    /// Statuses that ran out this tick.
    pub expired: SmallVec<[StatusKind; 4]>,
}

/// One combatant's resources and statuses.
///
/// Deserialization runs the same checks as the constructors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CombatantStateRaw")]
pub struct CombatantState {
    hp: u32,
    max_hp: u32,
    block: u32,
    energy: u32,
    max_energy: u32,
    current_element: Option<Element>,
    vulnerable_pct: u32,
    statuses: StatusTable,
}

/// Unchecked wire form of [`CombatantState`].
#[derive(Deserialize)]
struct CombatantStateRaw {
    hp: u32,
    max_hp: u32,
    block: u32,
    energy: u32,
    max_energy: u32,
    current_element: Option<Element>,
    vulnerable_pct: u32,
    statuses: StatusTable,
}

impl TryFrom<CombatantStateRaw> for CombatantState {
    type Error = CombatError;

    fn try_from(raw: CombatantStateRaw) -> Result<Self, Self::Error> {
        let mut state = Self::new(raw.max_hp, raw.max_energy)?
            .with_hp(raw.hp)?
            .with_vulnerable_pct(raw.vulnerable_pct)?;
        state.block = raw.block;
        state.energy = raw.energy;
        state.current_element = raw.current_element;
        state.statuses = raw.statuses;
        Ok(state)
    }
}

impl CombatantState {
    /// Create a combatant at full HP and energy.
    ///
    /// Fails if `max_hp` is zero.
    pub fn new(max_hp: u32, max_energy: u32) -> Result<Self, CombatError> {
        if max_hp == 0 {
            return Err(CombatError::InvalidCombatant { hp: 0, max_hp });
        }
        Ok(Self {
            hp: max_hp,
            max_hp,
            block: 0,
            energy: max_energy,
            max_energy,
            current_element: None,
            vulnerable_pct: DEFAULT_VULNERABLE_PCT,
            statuses: StatusTable::new(),
        })
    }

    /// Start at a specific HP. Fails if `hp > max_hp`.
    pub fn with_hp(mut self, hp: u32) -> Result<Self, CombatError> {
        if hp > self.max_hp {
            return Err(CombatError::InvalidCombatant { hp, max_hp: self.max_hp });
        }
        self.hp = hp;
        Ok(self)
    }

    /// Set the element of this combatant's most recent action.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.current_element = Some(element);
        self
    }

    /// Set the incoming damage scaling used while vulnerable (x100).
    /// Fails if `pct` is below 100.
    pub fn with_vulnerable_pct(mut self, pct: u32) -> Result<Self, CombatError> {
        if pct < NEUTRAL_PCT {
            return Err(CombatError::Config(format!(
                "vulnerable_pct must be at least {NEUTRAL_PCT}, got {pct}"
            )));
        }
        self.vulnerable_pct = pct;
        Ok(self)
    }

    // === Accessors ===

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// HP as a fraction of max HP (for bar fills).
    #[must_use]
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    #[must_use]
    pub fn block(&self) -> u32 {
        self.block
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    #[must_use]
    pub fn current_element(&self) -> Option<Element> {
        self.current_element
    }

    #[must_use]
    pub fn vulnerable_pct(&self) -> u32 {
        self.vulnerable_pct
    }

    /// Get one status entry.
    #[must_use]
    pub fn status(&self, kind: StatusKind) -> StatusEntry {
        self.statuses.get(kind)
    }

    /// Check if a status is active.
    #[must_use]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.is_active(kind)
    }

    /// The full status table.
    #[must_use]
    pub fn statuses(&self) -> &StatusTable {
        &self.statuses
    }

    /// Check if any of burn, weak, wet or vulnerable is active.
    #[must_use]
    pub fn has_debuff(&self) -> bool {
        self.statuses.has_debuff()
    }

    /// HP has reached zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Status line for HUD display.
    #[must_use]
    pub fn status_summary(&self) -> String {
        self.statuses.summary()
    }

    // === Damage and healing ===

    /// Take one instance of damage.
    ///
    /// Mitigation order: vulnerable scaling, then one shield hit, then
    /// block, then HP. A zero-damage instance changes nothing.
    pub fn take_damage(&mut self, amount: u32) -> DamageReport {
        let mut report = DamageReport { incoming: amount, ..DamageReport::default() };
        if amount == 0 {
            return report;
        }

        let mut remaining = if self.has_status(StatusKind::Vulnerable) {
            scale_ceil(amount, self.vulnerable_pct)
        } else {
            amount
        };
        report.scaled = remaining;

        if let Some(shield) = self.statuses.consume_one(StatusKind::Shield) {
            report.shield_absorbed = remaining.min(shield.magnitude);
            remaining -= report.shield_absorbed;
        }

        report.block_absorbed = remaining.min(self.block);
        self.block -= report.block_absorbed;
        remaining -= report.block_absorbed;

        report.hp_lost = remaining.min(self.hp);
        self.hp -= report.hp_lost;

        tracing::trace!(
            incoming = report.incoming,
            scaled = report.scaled,
            shield = report.shield_absorbed,
            block = report.block_absorbed,
            hp_lost = report.hp_lost,
            hp = self.hp,
            "damage taken"
        );
        report
    }

    /// Restore HP, clamped to max. Returns HP gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp - self.hp);
        self.hp += gained;
        gained
    }

    /// Add block. No upper cap.
    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Remove block, floored at zero. Returns the block removed.
    pub fn strip_block(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.block);
        self.block -= removed;
        removed
    }

    /// Drop all block (start-of-turn reset).
    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    // === Statuses ===

    /// Burn for `turns` turns at `tick_damage` per turn.
    pub fn apply_burn(&mut self, tick_damage: u32, turns: u32) {
        self.statuses.apply_max(StatusKind::Burn, turns, tick_damage);
    }

    pub fn apply_wet(&mut self, turns: u32) {
        self.statuses.apply_max(StatusKind::Wet, turns, 0);
    }

    pub fn apply_weak(&mut self, turns: u32) {
        self.statuses.apply_max(StatusKind::Weak, turns, 0);
    }

    pub fn apply_vulnerable(&mut self, turns: u32) {
        self.statuses.apply_max(StatusKind::Vulnerable, turns, 0);
    }

    /// Replace any shield with a new one.
    pub fn apply_shield(&mut self, reduce_per_hit: u32, hit_count: u32) {
        self.statuses.set(StatusKind::Shield, hit_count, reduce_per_hit);
    }

    /// Remove a status entirely.
    pub fn clear_status(&mut self, kind: StatusKind) {
        self.statuses.clear(kind);
    }

    /// Remove the highest-priority debuff (burn > weak > wet > vulnerable).
    pub fn cleanse_one(&mut self) -> Option<StatusKind> {
        self.statuses.cleanse_one()
    }

    // === Turn boundary ===

    /// Resolve burn and count down turn-based statuses.
    ///
    /// Burn damage goes straight to HP: shield, block and vulnerable do not
    /// apply.
    pub fn tick_statuses(&mut self) -> TickReport {
        let burn = self.status(StatusKind::Burn);
        let burn_damage = if burn.is_active() {
            let lost = burn.magnitude.min(self.hp);
            self.hp -= lost;
            lost
        } else {
            0
        };

        TickReport { burn_damage, expired: self.statuses.tick_down() }
    }

    /// Pay an energy cost.
    pub fn spend_energy(&mut self, amount: u32) -> Result<(), CombatError> {
        if amount > self.energy {
            return Err(CombatError::InsufficientEnergy {
                required: amount,
                available: self.energy,
            });
        }
        self.energy -= amount;
        Ok(())
    }

    /// Refill energy to max.
    pub fn restore_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Record the element of this combatant's latest action.
    pub fn set_current_element(&mut self, element: Element) {
        self.current_element = Some(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementKind;

    fn fighter() -> CombatantState {
        CombatantState::new(50, 3).unwrap()
    }

    #[test]
    fn test_new_combatant() {
        let c = fighter();
        assert_eq!(c.hp(), 50);
        assert_eq!(c.max_hp(), 50);
        assert_eq!(c.block(), 0);
        assert_eq!(c.energy(), 3);
        assert_eq!(c.current_element(), None);
        assert_eq!(c.status_summary(), "—");
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            CombatantState::new(0, 3),
            Err(CombatError::InvalidCombatant { hp: 0, max_hp: 0 })
        );
        assert!(fighter().with_hp(51).is_err());
        assert_eq!(fighter().with_hp(20).unwrap().hp(), 20);
    }

    #[test]
    fn test_damage_hits_block_then_hp() {
        let mut c = fighter();
        c.gain_block(6);

        let report = c.take_damage(10);
        assert_eq!(report.block_absorbed, 6);
        assert_eq!(report.hp_lost, 4);
        assert_eq!(c.block(), 0);
        assert_eq!(c.hp(), 46);
    }

    #[test]
    fn test_damage_floors_hp_at_zero() {
        let mut c = fighter();
        let report = c.take_damage(500);
        assert_eq!(report.hp_lost, 50);
        assert_eq!(c.hp(), 0);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_vulnerable_scales_damage() {
        let mut c = fighter();
        c.apply_vulnerable(2);

        let report = c.take_damage(7);
        assert_eq!(report.scaled, 11); // 10.5 rounds up
        assert_eq!(c.hp(), 39);
    }

    #[test]
    fn test_shield_consumption() {
        let mut c = fighter();
        c.apply_shield(5, 2);

        let first = c.take_damage(8);
        assert_eq!(first.shield_absorbed, 5);
        assert_eq!(first.hp_lost, 3);
        assert_eq!(c.status(StatusKind::Shield).turns, 1);

        let second = c.take_damage(8);
        assert_eq!(second.hp_lost, 3);
        assert_eq!(c.status(StatusKind::Shield).turns, 0);

        let third = c.take_damage(8);
        assert_eq!(third.shield_absorbed, 0);
        assert_eq!(third.hp_lost, 8);
        assert_eq!(c.hp(), 50 - 14);
    }

    #[test]
    fn test_shield_before_block() {
        let mut c = fighter();
        c.apply_shield(5, 1);
        c.gain_block(2);

        let report = c.take_damage(4);
        assert_eq!(report.shield_absorbed, 4);
        assert_eq!(report.block_absorbed, 0);
        assert_eq!(c.block(), 2);
    }

    #[test]
    fn test_zero_damage_keeps_shield() {
        let mut c = fighter();
        c.apply_shield(5, 1);
        c.take_damage(0);
        assert_eq!(c.status(StatusKind::Shield).turns, 1);
    }

    #[test]
    fn test_heal_clamps() {
        let mut c = fighter().with_hp(45).unwrap();
        assert_eq!(c.heal(10), 5);
        assert_eq!(c.hp(), 50);
    }

    #[test]
    fn test_strip_block() {
        let mut c = fighter();
        c.gain_block(3);
        assert_eq!(c.strip_block(5), 3);
        assert_eq!(c.block(), 0);
    }

    #[test]
    fn test_reapply_never_shortens() {
        let mut c = fighter();
        c.apply_weak(3);
        c.apply_weak(1);
        assert_eq!(c.status(StatusKind::Weak).turns, 3);

        c.apply_burn(2, 2);
        c.apply_burn(4, 1);
        assert_eq!(c.status(StatusKind::Burn), StatusEntry { turns: 2, magnitude: 4 });
    }

    #[test]
    fn test_shield_replaces() {
        let mut c = fighter();
        c.apply_shield(5, 3);
        c.apply_shield(2, 1);
        assert_eq!(c.status(StatusKind::Shield), StatusEntry { turns: 1, magnitude: 2 });
    }

    #[test]
    fn test_tick_statuses() {
        let mut c = fighter();
        c.apply_burn(4, 2);
        c.apply_vulnerable(1);
        c.gain_block(10);

        let tick = c.tick_statuses();
        assert_eq!(tick.burn_damage, 4);
        assert_eq!(c.hp(), 46); // block ignored
        assert_eq!(tick.expired.as_slice(), &[StatusKind::Vulnerable]);

        let tick = c.tick_statuses();
        assert_eq!(tick.burn_damage, 4);
        assert!(!c.has_status(StatusKind::Burn));

        assert_eq!(c.tick_statuses().burn_damage, 0);
    }

    #[test]
    fn test_energy() {
        let mut c = fighter();
        c.spend_energy(2).unwrap();
        assert_eq!(c.energy(), 1);
        assert_eq!(
            c.spend_energy(2),
            Err(CombatError::InsufficientEnergy { required: 2, available: 1 })
        );
        c.restore_energy();
        assert_eq!(c.energy(), 3);
    }

    #[test]
    fn test_current_element() {
        let mut c = fighter().with_element(Element::yang(ElementKind::Fire));
        assert_eq!(c.current_element(), Some(Element::yang(ElementKind::Fire)));
        c.set_current_element(Element::yin(ElementKind::Water));
        assert_eq!(c.current_element().map(|e| e.kind), Some(ElementKind::Water));
    }

    #[test]
    fn test_serialization() {
        let mut c = fighter();
        c.apply_burn(3, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: CombatantState = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn test_deserialize_rejects_hp_above_max() {
        let mut json = serde_json::to_value(fighter()).unwrap();
        json["hp"] = serde_json::json!(150);
        json["max_hp"] = serde_json::json!(100);
        let result: Result<CombatantState, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_max_hp() {
        let mut json = serde_json::to_value(fighter()).unwrap();
        json["hp"] = serde_json::json!(0);
        json["max_hp"] = serde_json::json!(0);
        assert!(serde_json::from_value::<CombatantState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_low_vulnerable_pct() {
        let mut json = serde_json::to_value(fighter()).unwrap();
        json["vulnerable_pct"] = serde_json::json!(50);
        assert!(serde_json::from_value::<CombatantState>(json).is_err());
    }

    #[test]
    fn test_deserialized_state_heals_safely() {
        let mut c = fighter().with_hp(40).unwrap();
        c.gain_block(3);
        c.set_current_element(Element::yin(ElementKind::Fire));
        let json = serde_json::to_string(&c).unwrap();
        let mut back: CombatantState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.heal(100), 10);
        assert_eq!(back.hp(), 50);
    }

    #[test]
    fn test_vulnerable_pct_below_neutral_rejected() {
        assert!(matches!(
            fighter().with_vulnerable_pct(50),
            Err(CombatError::Config(_))
        ));
        let c = fighter().with_vulnerable_pct(200).unwrap();
        assert_eq!(c.vulnerable_pct(), 200);
    }
}
