//! Stub collaborators backing a replay.
//!
//! The world is a flat walkable plane at `y = 0` bounded by a square; every
//! entity is a sphere collider resting on the plane.

use std::collections::HashMap;
use std::sync::Mutex;

use glam::Vec3;
use input_core::{
    ActionId, ActionRequest, ActionSlotState, CharacterRecord, EntityId, EntityKind, EntityView,
    GroundProjector, HitBuffer, InputObserver, LayerMask, LifeState, LifeStateFeed, Ray, RayHit,
    RequestChannel, SlotIndex, SpatialQuery, TargetValidator, WatchHandle, WorldView,
};
use serde::Serialize;

use crate::scenario::{CharacterSpec, EntitySpec, EntitySpecKind};

const HERO: EntityId = EntityId(0);
const CHARACTER_RADIUS: f32 = 0.6;
const ITEM_RADIUS: f32 = 0.4;

// ============================================================================
// World state
// ============================================================================

#[derive(Debug)]
struct State {
    position: Vec3,
    selected: Option<EntityId>,
    held_item: Option<EntityId>,
    entities: HashMap<EntityId, EntityView>,
}

/// Mirrored world, local character and physics of a replay.
#[derive(Debug)]
pub struct ReplayWorld {
    skills: [Option<ActionId>; 3],
    half_extent: f32,
    state: Mutex<State>,
}

impl ReplayWorld {
    pub fn new(
        skills: [Option<ActionId>; 3],
        character: &CharacterSpec,
        entities: &[EntitySpec],
        half_extent: f32,
    ) -> Self {
        let entities = entities
            .iter()
            .map(|spec| {
                let kind = match spec.kind {
                    EntitySpecKind::Player(life) => EntityKind::Character { npc: false, life },
                    EntitySpecKind::Npc => EntityKind::Character {
                        npc: true,
                        life: LifeState::Alive,
                    },
                    EntitySpecKind::PickUp => EntityKind::PickUp,
                    EntitySpecKind::Prop => EntityKind::Prop,
                };
                let view = EntityView {
                    id: spec.id,
                    position: spec.position,
                    kind,
                };
                (spec.id, view)
            })
            .collect();

        Self {
            skills,
            half_extent,
            state: Mutex::new(State {
                position: character.position,
                selected: character.selected,
                held_item: character.held_item,
                entities,
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        // a poisoned lock only means a previous replay step panicked
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn select(&self, target: Option<EntityId>) {
        self.state().selected = target;
    }

    pub fn hold(&self, item: Option<EntityId>) {
        self.state().held_item = item;
    }

    pub fn move_character(&self, position: Vec3) {
        self.state().position = position;
    }

    pub fn despawn(&self, id: EntityId) -> bool {
        self.state().entities.remove(&id).is_some()
    }

    /// Updates the life state of a character; false when `id` is not one.
    pub fn set_life(&self, id: EntityId, life: LifeState) -> bool {
        match self.state().entities.get_mut(&id) {
            Some(EntityView {
                kind: EntityKind::Character { life: current, .. },
                ..
            }) => {
                *current = life;
                true
            }
            _ => false,
        }
    }

    fn on_layers(kind: EntityKind, layers: LayerMask) -> bool {
        match kind {
            EntityKind::Character { npc: true, .. } => layers.contains(LayerMask::NPCS),
            EntityKind::Character { npc: false, .. } => layers.contains(LayerMask::PLAYERS),
            EntityKind::PickUp | EntityKind::Prop => {
                layers.intersects(LayerMask::PLAYERS | LayerMask::NPCS)
            }
        }
    }

    fn within_bounds(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_extent && point.z.abs() <= self.half_extent
    }
}

impl CharacterRecord for ReplayWorld {
    fn id(&self) -> EntityId {
        HERO
    }

    fn position(&self) -> Vec3 {
        self.state().position
    }

    fn selected_target(&self) -> Option<EntityId> {
        self.state().selected
    }

    fn held_item(&self) -> Option<EntityId> {
        self.state().held_item
    }

    fn skill(&self, slot: SlotIndex) -> Option<ActionId> {
        self.skills[slot.index()]
    }
}

impl WorldView for ReplayWorld {
    fn entity(&self, id: EntityId) -> Option<EntityView> {
        self.state().entities.get(&id).copied()
    }
}

impl TargetValidator for ReplayWorld {
    fn is_valid_target(&self, id: EntityId) -> bool {
        match self.entity(id).map(|view| view.kind) {
            Some(EntityKind::Character { life, .. }) => life != LifeState::Dead,
            Some(EntityKind::PickUp) => true,
            Some(EntityKind::Prop) | None => false,
        }
    }
}

impl SpatialQuery for ReplayWorld {
    /// Keeps the nearest hits when more colliders lie on the ray than fit.
    fn raycast(&self, ray: Ray, max_distance: f32, layers: LayerMask, hits: &mut HitBuffer) {
        let direction = ray.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }

        let mut found: Vec<RayHit> = self
            .state()
            .entities
            .values()
            .filter(|view| Self::on_layers(view.kind, layers))
            .filter_map(|view| {
                let radius = match view.kind {
                    EntityKind::Character { .. } => CHARACTER_RADIUS,
                    _ => ITEM_RADIUS,
                };
                let center = view.position + Vec3::Y * radius;
                let distance = sphere_hit(ray.origin, direction, center, radius)?;
                (distance <= max_distance)
                    .then(|| RayHit::entity(view.id, ray.origin + direction * distance, distance))
            })
            .collect();

        if layers.contains(LayerMask::GROUND) && direction.y < 0.0 && ray.origin.y >= 0.0 {
            let distance = ray.origin.y / -direction.y;
            let point = ray.origin + direction * distance;
            if distance <= max_distance && self.within_bounds(point) {
                found.push(RayHit::ground(point, distance));
            }
        }

        // ties broken by entity id so the result never depends on map order
        found.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.entity.cmp(&b.entity))
        });
        let room = hits.remaining_capacity();
        hits.extend(found.into_iter().take(room));
    }
}

impl GroundProjector for ReplayWorld {
    fn project(&self, point: Vec3, max_distance: f32) -> Option<Vec3> {
        if point.y.abs() > max_distance {
            return None;
        }
        let ground = Vec3::new(point.x, 0.0, point.z);
        self.within_bounds(ground).then_some(ground)
    }
}

/// Distance along a normalized ray to the first intersection with a sphere.
fn sphere_hit(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let offset = origin - center;
    let b = offset.dot(direction);
    let c = offset.length_squared() - radius * radius;
    if c > 0.0 && b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    Some((-b - discriminant.sqrt()).max(0.0))
}

// ============================================================================
// Outbound log
// ============================================================================

/// Something the sender produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outbound {
    Action { request: ActionRequest },
    Move { destination: Vec3 },
    Slot { slot: SlotIndex, state: Option<ActionSlotState> },
}

/// Request channel and slot observer collecting outbound traffic.
#[derive(Debug, Default)]
pub struct ReplayLog {
    pending: Mutex<Vec<Outbound>>,
}

impl ReplayLog {
    fn push(&self, entry: Outbound) {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
    }

    /// Takes everything recorded since the last call.
    pub fn drain(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

impl RequestChannel for ReplayLog {
    fn send_action(&self, request: &ActionRequest) {
        self.push(Outbound::Action {
            request: request.clone(),
        });
    }

    fn send_move(&self, destination: Vec3) {
        self.push(Outbound::Move { destination });
    }
}

/// Forwards slot changes into a [`ReplayLog`].
pub struct SlotFeedback<'a>(pub &'a ReplayLog);

impl InputObserver for SlotFeedback<'_> {
    fn slot_changed(&mut self, slot: SlotIndex, state: Option<ActionSlotState>) {
        self.0.push(Outbound::Slot { slot, state });
    }
}

// ============================================================================
// Life-state feed
// ============================================================================

#[derive(Debug, Default)]
pub struct ReplayFeed {
    watches: Mutex<HashMap<u64, EntityId>>,
    next: Mutex<u64>,
}

impl ReplayFeed {
    pub fn is_watching(&self, target: EntityId) -> bool {
        self.watches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .any(|&id| id == target)
    }
}

impl LifeStateFeed for ReplayFeed {
    fn watch(&self, target: EntityId) -> Option<WatchHandle> {
        let mut next = self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *next += 1;
        self.watches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(*next, target);
        tracing::debug!(%target, handle = *next, "watching life state");
        Some(WatchHandle(*next))
    }

    fn unwatch(&self, handle: WatchHandle) {
        self.watches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> ReplayWorld {
        let entities = [
            EntitySpec {
                id: EntityId(1),
                position: Vec3::new(0.0, 0.0, 5.0),
                kind: EntitySpecKind::Npc,
            },
            EntitySpec {
                id: EntityId(2),
                position: Vec3::new(3.0, 0.0, 0.0),
                kind: EntitySpecKind::Prop,
            },
        ];
        ReplayWorld::new([None; 3], &CharacterSpec::default(), &entities, 10.0)
    }

    #[test]
    fn ray_hits_sphere_before_ground() {
        let world = world();
        let mut hits = HitBuffer::new();
        let ray = Ray::new(Vec3::new(0.0, 0.6, -5.0), Vec3::Z);
        world.raycast(ray, 100.0, LayerMask::ACTION, &mut hits);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entity, Some(EntityId(1)));
        assert!((hits[0].distance - 9.4).abs() < 1e-4);
    }

    #[test]
    fn crowded_ray_keeps_the_nearest_hits() {
        let entities: Vec<EntitySpec> = (1..=6)
            .map(|n| EntitySpec {
                id: EntityId(n),
                position: Vec3::new(0.0, 0.0, n as f32 * 2.0),
                kind: EntitySpecKind::Npc,
            })
            .collect();
        let world = ReplayWorld::new([None; 3], &CharacterSpec::default(), &entities, 50.0);

        let mut hits = HitBuffer::new();
        let ray = Ray::new(Vec3::new(0.0, 0.6, -1.0), Vec3::Z);
        world.raycast(ray, 100.0, LayerMask::ACTION, &mut hits);
        let kept: Vec<Option<EntityId>> = hits.iter().map(|hit| hit.entity).collect();
        assert_eq!(
            kept,
            vec![Some(EntityId(1)), Some(EntityId(2)), Some(EntityId(3)), Some(EntityId(4))]
        );

        // a sloping ray meets the ground after two of the crowd
        let mut hits = HitBuffer::new();
        let ray = Ray::new(Vec3::new(0.0, 0.9, -1.0), Vec3::new(0.0, -0.15, 1.0));
        world.raycast(ray, 100.0, LayerMask::ACTION, &mut hits);
        let kept: Vec<Option<EntityId>> = hits.iter().map(|hit| hit.entity).collect();
        assert_eq!(kept, vec![Some(EntityId(1)), Some(EntityId(2)), None]);
    }

    #[test]
    fn ground_layer_ignores_entities() {
        let world = world();
        let mut hits = HitBuffer::new();
        world.raycast(Ray::downward(Vec3::new(0.0, 3.0, 5.0)), 100.0, LayerMask::GROUND, &mut hits);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entity, None);
        assert_eq!(hits[0].point, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn projection_respects_bounds_and_tolerance() {
        let world = world();
        assert_eq!(world.project(Vec3::new(1.0, 0.5, 1.0), 1.0), Some(Vec3::new(1.0, 0.0, 1.0)));
        assert_eq!(world.project(Vec3::new(1.0, 2.0, 1.0), 1.0), None);
        assert_eq!(world.project(Vec3::new(11.0, 0.0, 1.0), 1.0), None);
    }

    #[test]
    fn props_and_dead_characters_are_not_targets() {
        let world = world();
        assert!(world.is_valid_target(EntityId(1)));
        assert!(!world.is_valid_target(EntityId(2)));
        assert!(world.set_life(EntityId(1), LifeState::Dead));
        assert!(!world.is_valid_target(EntityId(1)));
        assert!(!world.set_life(EntityId(2), LifeState::Alive));
    }
}
