//! Ray picking and walkable-ground projection.

use arrayvec::ArrayVec;
use glam::Vec3;

use crate::config::InputConfig;
use crate::types::EntityId;

bitflags::bitflags! {
    /// Physics layers a pick ray may hit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayerMask: u8 {
        /// Player characters.
        const PLAYERS = 1 << 0;
        /// Non-player characters.
        const NPCS = 1 << 1;
        /// Walkable ground.
        const GROUND = 1 << 2;
    }
}

impl LayerMask {
    /// Layers considered when picking the target of an action.
    pub const ACTION: Self = Self::PLAYERS.union(Self::NPCS).union(Self::GROUND);
}

/// Half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vec3,
    /// Not required to be normalized.
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray pointing straight down from `origin`.
    pub const fn downward(origin: Vec3) -> Self {
        Self::new(origin, Vec3::NEG_Y)
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction.normalize_or_zero() * distance
    }
}

/// One intersection reported by [`SpatialQuery`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    /// Replicated entity owning the hit collider, `None` for level geometry.
    pub entity: Option<EntityId>,
}

impl RayHit {
    pub const fn ground(point: Vec3, distance: f32) -> Self {
        Self {
            point,
            distance,
            entity: None,
        }
    }

    pub const fn entity(entity: EntityId, point: Vec3, distance: f32) -> Self {
        Self {
            point,
            distance,
            entity: Some(entity),
        }
    }
}

/// Fixed-capacity hit arena reused across queries.
pub type HitBuffer = ArrayVec<RayHit, { InputConfig::MAX_RAY_HITS }>;

/// Physics ray casts against replicated colliders and level geometry.
pub trait SpatialQuery: Send + Sync {
    /// Appends up to `hits.remaining_capacity()` intersections along `ray`
    /// within `max_distance` on the given layers. Order is unspecified.
    fn raycast(&self, ray: Ray, max_distance: f32, layers: LayerMask, hits: &mut HitBuffer);
}

/// Walkable-surface projection.
pub trait GroundProjector: Send + Sync {
    /// Nearest walkable point within `max_distance` of `point`.
    fn project(&self, point: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Casts `ray` and leaves `hits` sorted nearest-first.
pub fn pick(
    spatial: &dyn SpatialQuery,
    ray: Ray,
    max_distance: f32,
    layers: LayerMask,
    hits: &mut HitBuffer,
) {
    hits.clear();
    spatial.raycast(ray, max_distance, layers, hits);
    if hits.len() > 1 {
        hits.sort_unstable_by(|a, b| a.distance.total_cmp(&b.distance));
    }
}

/// Nearest hit carrying an entity handle.
pub fn first_entity(hits: &[RayHit]) -> Option<EntityId> {
    hits.iter().find_map(|hit| hit.entity)
}

/// Nearest hit on level geometry.
pub fn first_ground(hits: &[RayHit]) -> Option<Vec3> {
    hits.iter().find(|hit| hit.entity.is_none()).map(|hit| hit.point)
}
