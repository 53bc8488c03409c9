//! Traits describing the collaborators of the input sender.
//!
//! Oracles expose the action catalog, the mirrored character record, spawned
//! entities and physics queries; the request channel and life-state feed are
//! the only outward-facing seams. The [`Env`] aggregate bundles them so the
//! sender receives everything it needs at construction without reaching for
//! global registries.
mod catalog;
mod channel;
mod character;
mod feed;
mod spatial;
mod world;

pub use catalog::{ActionCatalog, WellKnownActions};
pub use channel::RequestChannel;
pub use character::CharacterRecord;
pub use feed::{LifeStateFeed, LifeStateSubscription, WatchHandle};
pub use spatial::{
    GroundProjector, HitBuffer, LayerMask, Ray, RayHit, SpatialQuery, first_entity, first_ground,
    pick,
};
pub use world::{EntityKind, EntityView, TargetValidator, WorldView};

use crate::session::ContinuousInputFactory;

/// Aggregates the collaborators required by the input sender.
///
/// All references are read-only from the sender's point of view; the request
/// channel and life-state feed take `&self` and handle their own interior
/// state.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub catalog: &'a dyn ActionCatalog,
    pub character: &'a dyn CharacterRecord,
    pub world: &'a dyn WorldView,
    pub validator: &'a dyn TargetValidator,
    pub spatial: &'a dyn SpatialQuery,
    pub ground: &'a dyn GroundProjector,
    pub channel: &'a dyn RequestChannel,
    pub life_feed: &'a dyn LifeStateFeed,
    pub inputs: &'a dyn ContinuousInputFactory,
}

impl<'a> Env<'a> {
    /// Looks up a descriptor that callers guarantee exists.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the catalog; every id reaching the sender is
    /// validated on enqueue.
    pub fn descriptor(&self, id: crate::types::ActionId) -> &'a crate::action::ActionDescriptor {
        self.catalog
            .descriptor(id)
            .unwrap_or_else(|| panic!("action {id} is missing from the catalog"))
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("character", &self.character.id())
            .finish_non_exhaustive()
    }
}
