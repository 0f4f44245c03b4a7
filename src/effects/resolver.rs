//! Per-card resolution rules.

use crate::cards::{CardInstance, CardKind, CardParams};
use crate::combatant::{CombatantState, StatusKind};
use crate::core::{CombatConfig, CombatError};
use crate::elements::{apply, multiplier, scale_ceil, ElementKind, Multiplier};

/// Resolves played cards against a pair of combatants.
#[derive(Clone, Debug, Default)]
pub struct CardResolver {
    config: CombatConfig,
}

impl CardResolver {
    /// Create a resolver with the given configuration.
    ///
    /// Fails if the configuration does not pass [`CombatConfig::validate`].
    pub fn new(config: CombatConfig) -> Result<Self, CombatError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Play `card` from `user` against `target`.
    ///
    /// Runs exactly one rule, chosen by the card's id. The multiplier of the
    /// card's element against the target's current element is computed once
    /// and shared by every damage term of the rule. On success the card's
    /// element becomes the user's current element.
    ///
    /// A card id without a rule leaves the card and both combatants
    /// untouched and returns `CombatError::UnknownCard`.
    pub fn play(
        &self,
        card: &mut CardInstance,
        user: &mut CombatantState,
        target: &mut CombatantState,
    ) -> Result<CardKind, CombatError> {
        let id = card.definition().id;
        let Some(kind) = card.kind() else {
            tracing::warn!(%id, name = %card.definition().name, "card has no resolution rule");
            return Err(CombatError::UnknownCard(id));
        };

        let element = card.element();
        let params = card.definition().params;
        let m = multiplier(&self.config, element, target.current_element());

        match kind {
            CardKind::VineSurge => {
                target.apply_vulnerable(params.vulnerable_turns);
                strike_with_block_bonus(&params, m, user, target);
            }

            CardKind::SpiritMend => {
                let mut heal = params.heal;
                if user.has_debuff() {
                    heal = scale_ceil(heal, params.heal_multiplier_pct);
                    let cleansed = user.cleanse_one();
                    tracing::debug!(?cleansed, "debuff cleansed");
                }
                user.heal(heal);
            }

            CardKind::HeartflameSlash => {
                target.take_damage(apply(params.base_damage, m));
                if target.has_status(StatusKind::Wet) {
                    // Flat bonus, not elementally scaled
                    target.take_damage(params.bonus_damage);
                }
            }

            CardKind::ScorchMark => {
                target.take_damage(apply(params.base_damage, m));
                target.apply_burn(params.burn_tick, params.burn_turns);
            }

            CardKind::RockBulwark => {
                user.gain_block(params.base_block);
            }

            CardKind::EarthenSeal => {
                if params.weak_turns > 0 {
                    target.apply_weak(params.weak_turns);
                }
                target.strip_block(self.config.block_strip);
            }

            CardKind::GildedEdge => {
                strike_with_block_bonus(&params, m, user, target);
            }

            CardKind::Refine => {
                // No hand selection yet: the played card discounts itself.
                let reduction = if element.kind == ElementKind::Metal { 2 } else { 1 };
                card.discount(reduction);
            }

            CardKind::TideCalling => {
                target.take_damage(apply(params.base_damage, m));
                target.apply_wet(params.wet_turns);
            }

            CardKind::FlowingVeil => {
                user.apply_shield(params.shield_reduce_per_hit, params.shield_hits);
            }
        }

        user.set_current_element(element);

        tracing::debug!(
            card = %kind,
            multiplier = %m,
            user_hp = user.hp(),
            user_block = user.block(),
            target_hp = target.hp(),
            target_block = target.block(),
            "card resolved"
        );
        Ok(kind)
    }
}

/// Base hit, plus a bonus hit while the user holds block. Both scaled.
fn strike_with_block_bonus(
    params: &CardParams,
    m: Multiplier,
    user: &CombatantState,
    target: &mut CombatantState,
) {
    target.take_damage(apply(params.base_damage, m));
    if user.block() > 0 {
        target.take_damage(apply(params.bonus_damage, m));
    }
}
