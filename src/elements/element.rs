//! Element values.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Base element kind.
///
/// Only the kind takes part in the overcoming cycle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, IntoStaticStr,
)]
pub enum ElementKind {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ElementKind {
    /// The kind this kind overcomes.
    #[must_use]
    pub const fn overcomes_kind(self) -> ElementKind {
        match self {
            ElementKind::Wood => ElementKind::Earth,
            ElementKind::Earth => ElementKind::Water,
            ElementKind::Water => ElementKind::Fire,
            ElementKind::Fire => ElementKind::Metal,
            ElementKind::Metal => ElementKind::Wood,
        }
    }

    /// The kind that overcomes this kind.
    #[must_use]
    pub fn overcome_by(self) -> ElementKind {
        ElementKind::iter()
            .find(|k| k.overcomes_kind() == self)
            .unwrap_or(self)
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Element polarity. Distinguishes two cards of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Polarity {
    Yang,
    Yin,
}

/// A concrete element: kind plus polarity (ten values).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub polarity: Polarity,
}

impl Element {
    /// Create an element.
    #[must_use]
    pub const fn new(kind: ElementKind, polarity: Polarity) -> Self {
        Self { kind, polarity }
    }

    /// Yang variant of a kind.
    #[must_use]
    pub const fn yang(kind: ElementKind) -> Self {
        Self::new(kind, Polarity::Yang)
    }

    /// Yin variant of a kind.
    #[must_use]
    pub const fn yin(kind: ElementKind) -> Self {
        Self::new(kind, Polarity::Yin)
    }

    /// All ten concrete elements.
    pub fn all() -> impl Iterator<Item = Element> {
        ElementKind::iter()
            .flat_map(|kind| Polarity::iter().map(move |polarity| Element::new(kind, polarity)))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}-{}", self.polarity, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_elements() {
        let all: Vec<_> = Element::all().collect();
        assert_eq!(all.len(), 10);
        assert!(all.contains(&Element::yin(ElementKind::Metal)));
    }

    #[test]
    fn test_overcome_by_inverts_overcomes() {
        for kind in ElementKind::iter() {
            assert_eq!(kind.overcomes_kind().overcome_by(), kind);
        }
        assert_eq!(ElementKind::Wood.overcome_by(), ElementKind::Metal);
    }

    #[test]
    fn test_element_display() {
        assert_eq!(Element::yang(ElementKind::Wood).to_string(), "Yang-Wood");
        assert_eq!(Element::yin(ElementKind::Water).to_string(), "Yin-Water");
        assert_eq!(ElementKind::Metal.to_string(), "Metal");
        assert_eq!(ElementKind::Earth.name(), "Earth");
    }
}
