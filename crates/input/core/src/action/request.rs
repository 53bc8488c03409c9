//! Outbound action request record.

use arrayvec::ArrayVec;
use glam::Vec3;

use crate::config::InputConfig;
use crate::types::{ActionId, EntityId};

/// Ordered set of target handles; keeps insertion order, rejects duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSet(ArrayVec<EntityId, { InputConfig::MAX_REQUEST_TARGETS }>);

impl TargetSet {
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    /// Inserts a target, returning false when it was already present or the
    /// set is full.
    pub fn insert(&mut self, target: EntityId) -> bool {
        if self.0.contains(&target) {
            return false;
        }
        self.0.try_push(target).is_ok()
    }

    pub fn contains(&self, target: EntityId) -> bool {
        self.0.contains(&target)
    }

    pub fn first(&self) -> Option<EntityId> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[EntityId] {
        &self.0
    }
}

impl FromIterator<EntityId> for TargetSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        let mut set = TargetSet::new();
        for target in iter {
            set.insert(target);
        }
        set
    }
}

/// Finalized request delivered to the authoritative simulation.
///
/// `targets` is filled by the resolver before parameters are populated and is
/// never cleared afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRequest {
    pub action: ActionId,
    pub targets: TargetSet,
    /// Horizontal unit direction, for directional logic.
    pub direction: Option<Vec3>,
    /// World point, for positional logic.
    pub position: Option<Vec3>,
    /// Whether the character should walk into range before acting.
    pub should_close: bool,
    /// Whether the character's current movement should stop.
    pub cancel_movement: bool,
    /// Whether the action queues behind running actions instead of replacing them.
    pub should_queue: bool,
}

impl ActionRequest {
    pub fn new(action: ActionId) -> Self {
        Self {
            action,
            targets: TargetSet::new(),
            direction: None,
            position: None,
            should_close: false,
            cancel_movement: false,
            should_queue: false,
        }
    }

    /// Request aimed at a single entity.
    pub fn targeting(action: ActionId, target: EntityId) -> Self {
        let mut request = Self::new(action);
        request.targets.insert(target);
        request
    }

    pub fn is_targeted(&self) -> bool {
        !self.targets.is_empty()
    }
}
