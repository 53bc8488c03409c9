//! Identifiers and small value types shared by every module.

use std::fmt;

/// Network handle of any replicated entity (characters, pick-ups, props).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier of an entry in the action catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action:{}", self.0)
    }
}

/// Life state mirrored from the authoritative simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    #[default]
    Alive,
    Fainted,
    Dead,
}

/// One of the three skill slots exposed to the player.
///
/// `Basic` is the contextual slot: its meaning changes with the selected
/// target and the held item. The other two always hold the innate skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotIndex {
    Basic,
    Second,
    Third,
}

impl SlotIndex {
    pub const fn index(self) -> usize {
        match self {
            SlotIndex::Basic => 0,
            SlotIndex::Second => 1,
            SlotIndex::Third => 2,
        }
    }
}
