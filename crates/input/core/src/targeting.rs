//! Context-dependent target resolution.
//!
//! Picks the entity an intent acts on: the explicit target named by the input
//! source, else the nearest entity under the pointer, else (for actions that
//! are not general-target) the character's persistent selection. The basic
//! skill clicked on a fainted ally turns into a revive.

use glam::Vec3;

use crate::action::{ActionDescriptor, TriggerKind};
use crate::env::{
    ActionCatalog, CharacterRecord, RayHit, TargetValidator, WorldView, first_entity, first_ground,
};
use crate::intent::ActionIntent;
use crate::types::{ActionId, EntityId, LifeState, SlotIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no target candidate for {action}")]
    NoCandidate { action: ActionId },

    #[error("{target} is not a valid target for {action}")]
    InvalidTarget { action: ActionId, target: EntityId },

    #[error("{target} was validated but is no longer spawned")]
    Despawned { target: EntityId },
}

/// Successful resolution: the action to send (possibly substituted) and the
/// entity it acts on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTarget {
    pub action: ActionId,
    pub target: EntityId,
    /// Reference point handed to the request builder.
    pub position: Vec3,
}

/// Read-only view over the collaborators needed to resolve a target.
#[derive(Clone, Copy)]
pub struct TargetResolver<'a> {
    catalog: &'a dyn ActionCatalog,
    character: &'a dyn CharacterRecord,
    world: &'a dyn WorldView,
    validator: &'a dyn TargetValidator,
}

impl<'a> TargetResolver<'a> {
    pub fn new(
        catalog: &'a dyn ActionCatalog,
        character: &'a dyn CharacterRecord,
        world: &'a dyn WorldView,
        validator: &'a dyn TargetValidator,
    ) -> Self {
        Self {
            catalog,
            character,
            world,
            validator,
        }
    }

    /// Resolves the target of `intent`.
    ///
    /// `hits` must be sorted nearest-first and is only non-empty for pointer
    /// clicks.
    pub fn resolve(
        &self,
        intent: &ActionIntent,
        descriptor: &ActionDescriptor,
        hits: &[RayHit],
    ) -> Result<ResolvedTarget, ResolveError> {
        let candidate = intent
            .explicit_target
            .filter(|&id| self.world.is_spawned(id))
            .or_else(|| first_entity(hits))
            .or_else(|| {
                if descriptor.general_target {
                    None
                } else {
                    self.character
                        .selected_target()
                        .filter(|&id| self.world.is_spawned(id))
                }
            })
            .ok_or(ResolveError::NoCandidate {
                action: intent.action,
            })?;

        if !self.validator.is_valid_target(candidate) {
            return Err(ResolveError::InvalidTarget {
                action: intent.action,
                target: candidate,
            });
        }

        let view = self
            .world
            .entity(candidate)
            .ok_or(ResolveError::Despawned { target: candidate })?;

        let action = if self.revives(intent, view.as_character()) {
            let revive = self.catalog.well_known().revive;
            tracing::trace!(
                from = %intent.action,
                to = %revive,
                target = %candidate,
                "substituting revive"
            );
            revive
        } else {
            intent.action
        };

        Ok(ResolvedTarget {
            action,
            target: candidate,
            position: view.position,
        })
    }

    /// Ground point for an untargeted general-target request.
    ///
    /// `None` when nothing was hit or only entities were hit.
    pub fn ground_fallback(&self, hits: &[RayHit]) -> Option<Vec3> {
        first_ground(hits)
    }

    fn revives(&self, intent: &ActionIntent, character: Option<(bool, LifeState)>) -> bool {
        intent.trigger == TriggerKind::PointerClick
            && self.character.skill(SlotIndex::Basic) == Some(intent.action)
            && matches!(character, Some((false, LifeState::Fainted)))
    }
}

impl std::fmt::Debug for TargetResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetResolver")
            .field("character", &self.character.id())
            .finish_non_exhaustive()
    }
}
