//! Status effects keyed by kind.
//!
//! Each entry holds a duration and a magnitude:
//!
//! | Kind       | `turns`          | `magnitude`         |
//! |------------|------------------|---------------------|
//! | Burn       | turns remaining  | damage per turn     |
//! | Wet        | turns remaining  | unused              |
//! | Weak       | turns remaining  | unused              |
//! | Vulnerable | turns remaining  | unused              |
//! | Shield     | hits remaining   | reduction per hit   |
//!
//! `turns == 0` means inactive, and an inactive entry always has zero
//! magnitude.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Status effect kind.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
pub enum StatusKind {
    Burn,
    Wet,
    Weak,
    Vulnerable,
    Shield,
}

/// Order in which a cleanse removes debuffs.
pub const CLEANSE_PRIORITY: [StatusKind; 4] = [
    StatusKind::Burn,
    StatusKind::Weak,
    StatusKind::Wet,
    StatusKind::Vulnerable,
];

impl StatusKind {
    /// Slot in the status table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Burn, Wet, Weak and Vulnerable are debuffs. Shield is not.
    #[must_use]
    pub const fn is_debuff(self) -> bool {
        !matches!(self, StatusKind::Shield)
    }

    /// Shield is spent per hit rather than per turn.
    #[must_use]
    pub const fn ticks_per_turn(self) -> bool {
        !matches!(self, StatusKind::Shield)
    }
}

/// Duration and magnitude of one status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEntry {
    pub turns: u32,
    pub magnitude: u32,
}

impl StatusEntry {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.turns > 0
    }
}

/// Fixed-size table of statuses, one entry per `StatusKind`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusTable {
    entries: [StatusEntry; StatusKind::COUNT],
}

impl StatusTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> StatusEntry {
        self.entries[kind.index()]
    }

    /// Check if a status is active.
    #[must_use]
    pub fn is_active(&self, kind: StatusKind) -> bool {
        self.get(kind).is_active()
    }

    /// Apply a status, keeping the larger duration and the larger magnitude.
    ///
    /// Zero turns is ignored.
    pub fn apply_max(&mut self, kind: StatusKind, turns: u32, magnitude: u32) {
        if turns == 0 {
            return;
        }
        let entry = &mut self.entries[kind.index()];
        entry.turns = entry.turns.max(turns);
        entry.magnitude = entry.magnitude.max(magnitude);
    }

    /// Replace a status outright. Zero turns clears it.
    pub fn set(&mut self, kind: StatusKind, turns: u32, magnitude: u32) {
        self.entries[kind.index()] = if turns == 0 {
            StatusEntry::default()
        } else {
            StatusEntry { turns, magnitude }
        };
    }

    /// Clear a status (duration and magnitude).
    pub fn clear(&mut self, kind: StatusKind) {
        self.entries[kind.index()] = StatusEntry::default();
    }

    /// Spend one unit of a status (one shield hit). Returns the entry as it
    /// was before spending, or `None` if inactive.
    pub fn consume_one(&mut self, kind: StatusKind) -> Option<StatusEntry> {
        let before = self.get(kind);
        if !before.is_active() {
            return None;
        }
        let entry = &mut self.entries[kind.index()];
        entry.turns -= 1;
        if entry.turns == 0 {
            entry.magnitude = 0;
        }
        Some(before)
    }

    /// Iterate over active statuses in table order.
    pub fn active(&self) -> impl Iterator<Item = (StatusKind, StatusEntry)> + '_ {
        StatusKind::iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, entry)| entry.is_active())
    }

    /// Active debuffs in cleanse priority order.
    #[must_use]
    pub fn active_debuffs(&self) -> SmallVec<[StatusKind; 4]> {
        CLEANSE_PRIORITY
            .iter()
            .copied()
            .filter(|kind| self.is_active(*kind))
            .collect()
    }

    /// Check if any debuff is active.
    #[must_use]
    pub fn has_debuff(&self) -> bool {
        CLEANSE_PRIORITY.iter().any(|kind| self.is_active(*kind))
    }

    /// Clear the highest-priority active debuff.
    pub fn cleanse_one(&mut self) -> Option<StatusKind> {
        let kind = CLEANSE_PRIORITY
            .iter()
            .copied()
            .find(|kind| self.is_active(*kind))?;
        self.clear(kind);
        Some(kind)
    }

    /// Decrement every turn-based status by one. Returns the kinds that
    /// expired.
    pub fn tick_down(&mut self) -> SmallVec<[StatusKind; 4]> {
        let mut expired = SmallVec::new();
        for kind in StatusKind::iter().filter(|k| k.ticks_per_turn()) {
            if self.consume_one(kind).is_some() && !self.is_active(kind) {
                expired.push(kind);
            }
        }
        expired
    }

    /// Short summary for status displays, e.g. `Burn 3/2 | Wet 1`.
    ///
    /// Returns `"—"` when nothing is active.
    #[must_use]
    pub fn summary(&self) -> String {
        let parts: SmallVec<[String; 5]> = self
            .active()
            .filter_map(|(kind, entry)| match kind {
                StatusKind::Burn if entry.magnitude > 0 => {
                    Some(format!("Burn {}/{}", entry.magnitude, entry.turns))
                }
                StatusKind::Burn => Some(format!("Burn {}", entry.turns)),
                StatusKind::Wet => Some(format!("Wet {}", entry.turns)),
                StatusKind::Weak => Some(format!("Weak {}", entry.turns)),
                StatusKind::Vulnerable => Some(format!("Vuln {}", entry.turns)),
                StatusKind::Shield if entry.magnitude > 0 => {
                    Some(format!("Shield -{} x{}", entry.magnitude, entry.turns))
                }
                StatusKind::Shield => None,
            })
            .collect();

        if parts.is_empty() {
            "—".to_string()
        } else {
            parts.join(" | ")
        }
    }
}
