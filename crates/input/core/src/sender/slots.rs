//! Reactive recomputation of the basic slot.

use crate::env::LifeStateSubscription;
use crate::slot::{BasicSlotContext, resolve_basic_slot};
use crate::types::{EntityId, LifeState, SlotIndex};

use super::InputSender;

impl InputSender<'_> {
    /// The character picked up or dropped an item.
    pub fn held_item_changed(&mut self) {
        self.refresh_basic_slot();
    }

    /// The character's selected target changed; moves the life-state watch to
    /// the new target.
    pub fn selected_target_changed(&mut self) {
        self.rebind_life_watch();
        self.refresh_basic_slot();
    }

    /// Life-state change forwarded from the feed. Ignored unless it concerns
    /// the watched target.
    pub fn target_life_state_changed(&mut self, target: EntityId, life: LifeState) {
        let watched = self.life_watch.as_ref().map(LifeStateSubscription::target);
        if watched != Some(target) {
            tracing::trace!(%target, "life state of unwatched entity ignored");
            return;
        }
        self.reported_life = Some(life);
        self.refresh_basic_slot();
    }

    /// Entity whose life state is currently watched.
    pub fn watched_target(&self) -> Option<EntityId> {
        self.life_watch.as_ref().map(LifeStateSubscription::target)
    }

    pub(super) fn rebind_life_watch(&mut self) {
        let selected = self.env.character.selected_target();
        if self.watched_target() == selected {
            return;
        }
        // drop the old guard first so the feed never holds two watches
        self.life_watch = None;
        self.reported_life = None;
        self.life_watch =
            selected.and_then(|target| LifeStateSubscription::acquire(self.env.life_feed, target));
    }

    pub(super) fn refresh_basic_slot(&mut self) {
        let env = self.env;
        let character = env.character;
        let ctx = BasicSlotContext {
            well_known: env.catalog.well_known(),
            character: character.id(),
            innate: character.skill(SlotIndex::Basic),
            holding_item: character.held_item().is_some_and(|item| env.world.is_spawned(item)),
            selected: character.selected_target().and_then(|id| env.world.entity(id)),
            reported_life: self.reported_life,
        };
        let state = resolve_basic_slot(&ctx);
        if self.slots.set_basic(state) {
            tracing::trace!(?state, "basic slot changed");
        }
        self.notify_slot(SlotIndex::Basic);
    }
}
