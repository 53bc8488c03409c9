//! Mirrored state of the locally controlled character.

use glam::Vec3;

use crate::types::{ActionId, EntityId, SlotIndex};

/// Authoritative-mirrored record of the local character.
///
/// The sender only reads these fields; they are written by replication.
pub trait CharacterRecord: Send + Sync {
    fn id(&self) -> EntityId;

    /// Current world position of the character's physics body.
    fn position(&self) -> Vec3;

    /// Persistent target selection.
    fn selected_target(&self) -> Option<EntityId>;

    /// Item currently carried.
    fn held_item(&self) -> Option<EntityId>;

    /// Innate skill of the character class bound to `slot`.
    fn skill(&self, slot: SlotIndex) -> Option<ActionId>;
}
