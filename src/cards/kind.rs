//! The closed set of playable cards.
//!
//! One card per element and polarity. Adding a card means adding a variant
//! here and a rule in the resolver's match.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::definition::{CardId, CardType};
use crate::elements::{Element, ElementKind};

/// Card with a resolution rule.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, IntoStaticStr,
)]
pub enum CardKind {
    /// Yang Wood: vulnerable + attack, bonus hit while the user has block.
    #[strum(serialize = "Vine Surge")]
    VineSurge,
    /// Yin Wood: heal, stronger and cleansing while debuffed.
    #[strum(serialize = "Spirit Mend")]
    SpiritMend,
    /// Yang Fire: attack, flat bonus against wet targets.
    #[strum(serialize = "Heartflame Slash")]
    HeartflameSlash,
    /// Yin Fire: attack + burn.
    #[strum(serialize = "Scorch Mark")]
    ScorchMark,
    /// Yang Earth: gain block.
    #[strum(serialize = "Rock Bulwark")]
    RockBulwark,
    /// Yin Earth: weak + strip target block.
    #[strum(serialize = "Earthen Seal")]
    EarthenSeal,
    /// Yang Metal: attack, bonus hit while the user has block.
    #[strum(serialize = "Gilded Edge")]
    GildedEdge,
    /// Yin Metal: discount a card.
    Refine,
    /// Yang Water: attack + wet.
    #[strum(serialize = "Tide Calling")]
    TideCalling,
    /// Yin Water: per-hit shield.
    #[strum(serialize = "Flowing Veil")]
    FlowingVeil,
}

impl CardKind {
    /// Card id used in authored data.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId::new(self as u32 + 1)
    }

    /// Look up the kind for an authored id.
    #[must_use]
    pub fn from_id(id: CardId) -> Option<Self> {
        CardKind::iter().find(|kind| kind.id() == id)
    }

    /// Element the card is printed with.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            CardKind::VineSurge => Element::yang(ElementKind::Wood),
            CardKind::SpiritMend => Element::yin(ElementKind::Wood),
            CardKind::HeartflameSlash => Element::yang(ElementKind::Fire),
            CardKind::ScorchMark => Element::yin(ElementKind::Fire),
            CardKind::RockBulwark => Element::yang(ElementKind::Earth),
            CardKind::EarthenSeal => Element::yin(ElementKind::Earth),
            CardKind::GildedEdge => Element::yang(ElementKind::Metal),
            CardKind::Refine => Element::yin(ElementKind::Metal),
            CardKind::TideCalling => Element::yang(ElementKind::Water),
            CardKind::FlowingVeil => Element::yin(ElementKind::Water),
        }
    }

    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            CardKind::VineSurge | CardKind::HeartflameSlash | CardKind::GildedEdge => {
                CardType::Attack
            }
            CardKind::ScorchMark | CardKind::TideCalling => CardType::AttackDebuff,
            CardKind::EarthenSeal | CardKind::FlowingVeil => CardType::Skill,
            CardKind::RockBulwark => CardType::Defense,
            CardKind::SpiritMend => CardType::Heal,
            CardKind::Refine => CardType::Utility,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::elements::Polarity;

    #[test]
    fn test_id_round_trip() {
        for kind in CardKind::iter() {
            assert_eq!(CardKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CardKind::from_id(CardId::new(0)), None);
        assert_eq!(CardKind::from_id(CardId::new(11)), None);
    }

    #[test]
    fn test_one_card_per_element() {
        let elements: HashSet<_> = CardKind::iter().map(CardKind::element).collect();
        assert_eq!(elements.len(), 10);
        assert!(Element::all().all(|e| elements.contains(&e)));
    }

    #[test]
    fn test_yang_cards_lean_offensive() {
        assert_eq!(CardKind::VineSurge.element().polarity, Polarity::Yang);
        assert_eq!(CardKind::Refine.element().polarity, Polarity::Yin);
        assert_eq!(CardKind::VineSurge.card_type(), CardType::Attack);
        assert_eq!(CardKind::Refine.card_type(), CardType::Utility);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CardKind::VineSurge.to_string(), "Vine Surge");
        assert_eq!(CardKind::Refine.to_string(), "Refine");
        assert_eq!(CardKind::FlowingVeil.name(), "Flowing Veil");
        assert!(CardKind::iter().all(|kind| kind.name() == kind.to_string()));
    }
}
