//! Shared fakes for the input sender integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use glam::Vec3;
use input_core::{
    ActionCatalog, ActionDescriptor, ActionId, ActionLogic, ActionRequest, ActionSlotState,
    BuiltinInputs, CharacterRecord, ContinuousInputKind, EntityId, EntityKind, EntityView, Env,
    GroundProjector, HitBuffer, InputConfig, InputObserver, InputSender, LayerMask, LifeState,
    LifeStateFeed, Ray, RayHit, RequestChannel, SlotIndex, SpatialQuery, TargetValidator,
    WatchHandle, WellKnownActions, WorldView,
};

pub const STRIKE: ActionId = ActionId(1);
pub const VOLLEY: ActionId = ActionId(2);
pub const SHIELD: ActionId = ActionId(3);
pub const QUAKE: ActionId = ActionId(4);
pub const BLINK: ActionId = ActionId(5);
pub const GENERAL: ActionId = ActionId(10);
pub const REVIVE: ActionId = ActionId(11);
pub const PICK_UP: ActionId = ActionId(12);
pub const DROP: ActionId = ActionId(13);
pub const WAVE: ActionId = ActionId(20);

pub const HERO: EntityId = EntityId(100);

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// ============================================================================
// Catalog
// ============================================================================

pub struct Catalog {
    descriptors: Vec<ActionDescriptor>,
    well_known: WellKnownActions,
}

impl Default for Catalog {
    fn default() -> Self {
        let descriptors = vec![
            ActionDescriptor::new(STRIKE, "Strike", ActionLogic::Melee),
            ActionDescriptor::new(VOLLEY, "Volley", ActionLogic::Projectile),
            ActionDescriptor::new(SHIELD, "Shield", ActionLogic::ChargedShield)
                .with_continuous_input(ContinuousInputKind::Charged),
            ActionDescriptor::new(QUAKE, "Quake", ActionLogic::TargetedAreaEffect)
                .with_continuous_input(ContinuousInputKind::AreaTarget { max_range: 20.0 }),
            ActionDescriptor::new(BLINK, "Blink", ActionLogic::Dash).general_target(),
            ActionDescriptor::new(GENERAL, "General", ActionLogic::Target).general_target(),
            ActionDescriptor::new(REVIVE, "Revive", ActionLogic::Revive),
            ActionDescriptor::new(PICK_UP, "PickUp", ActionLogic::PickUp),
            ActionDescriptor::new(DROP, "Drop", ActionLogic::Drop),
            ActionDescriptor::new(WAVE, "Wave", ActionLogic::Emote),
            ActionDescriptor::new(ActionId(21), "Cheer", ActionLogic::Emote),
            ActionDescriptor::new(ActionId(22), "Bow", ActionLogic::Emote),
            ActionDescriptor::new(ActionId(23), "Dance", ActionLogic::Emote),
        ];
        Self {
            descriptors,
            well_known: WellKnownActions {
                revive: REVIVE,
                pick_up: PICK_UP,
                drop: DROP,
                general_target: GENERAL,
                emotes: [WAVE, ActionId(21), ActionId(22), ActionId(23)],
            },
        }
    }
}

impl ActionCatalog for Catalog {
    fn descriptor(&self, id: ActionId) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.id == id)
    }

    fn well_known(&self) -> &WellKnownActions {
        &self.well_known
    }
}

// ============================================================================
// Character
// ============================================================================

#[derive(Default)]
struct CharacterState {
    position: Vec3,
    selected: Option<EntityId>,
    held: Option<EntityId>,
    unowned: Vec<SlotIndex>,
}

#[derive(Default)]
pub struct Character {
    state: Mutex<CharacterState>,
}

impl Character {
    pub fn select(&self, target: Option<EntityId>) {
        self.state.lock().unwrap().selected = target;
    }

    pub fn hold(&self, item: Option<EntityId>) {
        self.state.lock().unwrap().held = item;
    }

    pub fn move_to(&self, position: Vec3) {
        self.state.lock().unwrap().position = position;
    }

    /// Removes the class skill of `slot`.
    pub fn disown(&self, slot: SlotIndex) {
        self.state.lock().unwrap().unowned.push(slot);
    }
}

impl CharacterRecord for Character {
    fn id(&self) -> EntityId {
        HERO
    }

    fn position(&self) -> Vec3 {
        self.state.lock().unwrap().position
    }

    fn selected_target(&self) -> Option<EntityId> {
        self.state.lock().unwrap().selected
    }

    fn held_item(&self) -> Option<EntityId> {
        self.state.lock().unwrap().held
    }

    fn skill(&self, slot: SlotIndex) -> Option<ActionId> {
        if self.state.lock().unwrap().unowned.contains(&slot) {
            return None;
        }
        Some(match slot {
            SlotIndex::Basic => STRIKE,
            SlotIndex::Second => VOLLEY,
            SlotIndex::Third => SHIELD,
        })
    }
}

// ============================================================================
// World
// ============================================================================

#[derive(Default)]
pub struct World {
    entities: Mutex<HashMap<EntityId, EntityView>>,
    invalid: Mutex<HashSet<EntityId>>,
}

impl World {
    pub fn spawn(&self, id: EntityId, position: Vec3, kind: EntityKind) {
        self.entities
            .lock()
            .unwrap()
            .insert(id, EntityView { id, position, kind });
    }

    pub fn spawn_ally(&self, id: EntityId, position: Vec3, life: LifeState) {
        self.spawn(id, position, EntityKind::Character { npc: false, life });
    }

    pub fn spawn_enemy(&self, id: EntityId, position: Vec3) {
        self.spawn(
            id,
            position,
            EntityKind::Character {
                npc: true,
                life: LifeState::Alive,
            },
        );
    }

    pub fn despawn(&self, id: EntityId) {
        self.entities.lock().unwrap().remove(&id);
    }

    pub fn invalidate(&self, id: EntityId) {
        self.invalid.lock().unwrap().insert(id);
    }
}

impl WorldView for World {
    fn entity(&self, id: EntityId) -> Option<EntityView> {
        self.entities.lock().unwrap().get(&id).copied()
    }
}

impl TargetValidator for World {
    fn is_valid_target(&self, id: EntityId) -> bool {
        self.is_spawned(id) && !self.invalid.lock().unwrap().contains(&id)
    }
}

// ============================================================================
// Physics: flat ground at y = 0 plus scripted entity colliders
// ============================================================================

#[derive(Default)]
pub struct Physics {
    entity_hits: Mutex<Vec<RayHit>>,
    unwalkable: Mutex<bool>,
}

impl Physics {
    /// Every pick ray also reports `entity` at `distance`.
    pub fn put_under_pointer(&self, entity: EntityId, point: Vec3, distance: f32) {
        self.entity_hits
            .lock()
            .unwrap()
            .push(RayHit::entity(entity, point, distance));
    }

    pub fn clear_pointer(&self) {
        self.entity_hits.lock().unwrap().clear();
    }

    pub fn set_unwalkable(&self, unwalkable: bool) {
        *self.unwalkable.lock().unwrap() = unwalkable;
    }
}

impl SpatialQuery for Physics {
    fn raycast(&self, ray: Ray, max_distance: f32, layers: LayerMask, hits: &mut HitBuffer) {
        if layers.intersects(LayerMask::PLAYERS | LayerMask::NPCS) {
            for hit in self.entity_hits.lock().unwrap().iter() {
                if hit.distance <= max_distance && !hits.is_full() {
                    hits.push(*hit);
                }
            }
        }
        if layers.contains(LayerMask::GROUND) && !hits.is_full() {
            let direction = ray.direction.normalize_or_zero();
            if direction.y < 0.0 && ray.origin.y >= 0.0 {
                let distance = ray.origin.y / -direction.y;
                if distance <= max_distance {
                    hits.push(RayHit::ground(ray.point_at(distance), distance));
                }
            }
        }
    }
}

impl GroundProjector for Physics {
    fn project(&self, point: Vec3, _max_distance: f32) -> Option<Vec3> {
        if *self.unwalkable.lock().unwrap() {
            None
        } else {
            Some(Vec3::new(point.x, 0.0, point.z))
        }
    }
}

/// Ray from 10 units above `point` straight down onto it.
pub fn ray_onto(point: Vec3) -> Ray {
    Ray::downward(point + Vec3::Y * 10.0)
}

// ============================================================================
// Channel & feed
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Sent {
    Action(ActionRequest),
    Move(Vec3),
}

#[derive(Default)]
pub struct Channel {
    sent: Mutex<Vec<Sent>>,
}

impl Channel {
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn actions(&self) -> Vec<ActionRequest> {
        self.take()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Action(request) => Some(request),
                Sent::Move(_) => None,
            })
            .collect()
    }

    pub fn moves(&self) -> Vec<Vec3> {
        self.take()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Move(destination) => Some(destination),
                Sent::Action(_) => None,
            })
            .collect()
    }
}

impl RequestChannel for Channel {
    fn send_action(&self, request: &ActionRequest) {
        self.sent.lock().unwrap().push(Sent::Action(request.clone()));
    }

    fn send_move(&self, destination: Vec3) {
        self.sent.lock().unwrap().push(Sent::Move(destination));
    }
}

#[derive(Default)]
pub struct Feed {
    watched: Mutex<Vec<EntityId>>,
}

impl Feed {
    pub fn watched(&self) -> Vec<EntityId> {
        self.watched.lock().unwrap().clone()
    }
}

impl LifeStateFeed for Feed {
    fn watch(&self, target: EntityId) -> Option<WatchHandle> {
        self.watched.lock().unwrap().push(target);
        Some(WatchHandle(target.0))
    }

    fn unwatch(&self, handle: WatchHandle) {
        self.watched.lock().unwrap().retain(|id| id.0 != handle.0);
    }
}

// ============================================================================
// Observer
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    Action(ActionId),
    Move(Vec3),
    Slot(SlotIndex, Option<ActionSlotState>),
}

/// Observer writing into a shared log.
pub struct Recorder<'a>(pub &'a Mutex<Vec<Feedback>>);

impl InputObserver for Recorder<'_> {
    fn action_sent(&mut self, request: &ActionRequest) {
        self.0.lock().unwrap().push(Feedback::Action(request.action));
    }

    fn move_sent(&mut self, destination: Vec3) {
        self.0.lock().unwrap().push(Feedback::Move(destination));
    }

    fn slot_changed(&mut self, slot: SlotIndex, state: Option<ActionSlotState>) {
        self.0.lock().unwrap().push(Feedback::Slot(slot, state));
    }
}

// ============================================================================
// Harness
// ============================================================================

#[derive(Default)]
pub struct Harness {
    pub catalog: Catalog,
    pub character: Character,
    pub world: World,
    pub physics: Physics,
    pub channel: Channel,
    pub feed: Feed,
    pub inputs: BuiltinInputs,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> Env<'_> {
        Env {
            catalog: &self.catalog,
            character: &self.character,
            world: &self.world,
            validator: &self.world,
            spatial: &self.physics,
            ground: &self.physics,
            channel: &self.channel,
            life_feed: &self.feed,
            inputs: &self.inputs,
        }
    }

    pub fn sender(&self) -> InputSender<'_> {
        InputSender::new(self.env(), InputConfig::default())
    }
}
