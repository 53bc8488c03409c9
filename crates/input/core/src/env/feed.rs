//! Life-state change notifications for the selected target.

use crate::types::EntityId;

/// Registration token handed out by a [`LifeStateFeed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub u64);

/// Source of life-state change notifications.
///
/// While a watch is registered the owner of the feed is expected to forward
/// changes of that target to `InputSender::target_life_state_changed`.
pub trait LifeStateFeed: Send + Sync {
    /// Starts watching `target`; `None` when the entity has no life state.
    fn watch(&self, target: EntityId) -> Option<WatchHandle>;

    fn unwatch(&self, handle: WatchHandle);
}

/// Scoped watch registration, released on drop.
pub struct LifeStateSubscription<'a> {
    feed: &'a dyn LifeStateFeed,
    handle: WatchHandle,
    target: EntityId,
}

impl<'a> LifeStateSubscription<'a> {
    /// Registers a watch on `target`, if the feed supports it.
    pub fn acquire(feed: &'a dyn LifeStateFeed, target: EntityId) -> Option<Self> {
        let handle = feed.watch(target)?;
        Some(Self {
            feed,
            handle,
            target,
        })
    }

    pub fn target(&self) -> EntityId {
        self.target
    }
}

impl Drop for LifeStateSubscription<'_> {
    fn drop(&mut self) {
        self.feed.unwatch(self.handle);
    }
}

impl std::fmt::Debug for LifeStateSubscription<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeStateSubscription")
            .field("handle", &self.handle)
            .field("target", &self.target)
            .finish()
    }
}
