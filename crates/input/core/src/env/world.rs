//! Replicated entity lookup and target validation.

use glam::Vec3;

use crate::types::{EntityId, LifeState};

/// What kind of replicated object an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Character { npc: bool, life: LifeState },
    /// Object that can be picked up.
    PickUp,
    Prop,
}

/// Snapshot of a spawned entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Vec3,
    pub kind: EntityKind,
}

impl EntityView {
    /// Returns `(npc, life)` when the entity is a character.
    pub fn as_character(&self) -> Option<(bool, LifeState)> {
        match self.kind {
            EntityKind::Character { npc, life } => Some((npc, life)),
            _ => None,
        }
    }

    pub fn is_pick_up(&self) -> bool {
        matches!(self.kind, EntityKind::PickUp)
    }

    /// True for player-controlled characters.
    pub fn is_player_character(&self) -> bool {
        matches!(self.kind, EntityKind::Character { npc: false, .. })
    }
}

/// Lookup of currently spawned entities.
pub trait WorldView: Send + Sync {
    fn entity(&self, id: EntityId) -> Option<EntityView>;

    fn is_spawned(&self, id: EntityId) -> bool {
        self.entity(id).is_some()
    }
}

/// Predicate deciding whether an entity may currently be targeted by an action.
pub trait TargetValidator: Send + Sync {
    fn is_valid_target(&self, id: EntityId) -> bool;
}
