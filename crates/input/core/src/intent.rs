//! Bounded FIFO of raw action intents accumulated between simulation ticks.
//!
//! Intents are captured at input rate but resolved at tick rate: picking has
//! to observe the same physics state the simulation step sees. The queue is a
//! fixed arena so a burst of input can never grow memory or tick latency;
//! intents beyond capacity within one tick are dropped.

use arrayvec::ArrayVec;

use crate::action::TriggerKind;
use crate::config::InputConfig;
use crate::types::{ActionId, EntityId};

/// Not-yet-resolved request to perform an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionIntent {
    pub action: ActionId,
    pub trigger: TriggerKind,
    /// Entity named by the input source (e.g. a party-frame button).
    pub explicit_target: Option<EntityId>,
}

impl ActionIntent {
    pub const fn new(action: ActionId, trigger: TriggerKind) -> Self {
        Self {
            action,
            trigger,
            explicit_target: None,
        }
    }

    pub const fn with_target(mut self, target: EntityId) -> Self {
        self.explicit_target = Some(target);
        self
    }
}

/// Intents drained in one tick.
pub type IntentBatch = ArrayVec<ActionIntent, { InputConfig::INTENT_CAPACITY }>;

/// Per-tick intent buffer.
#[derive(Clone, Debug, Default)]
pub struct IntentQueue {
    entries: IntentBatch,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `intent`; returns false when the queue was full and the intent
    /// was dropped.
    pub fn enqueue(&mut self, intent: ActionIntent) -> bool {
        match self.entries.try_push(intent) {
            Ok(()) => true,
            Err(_) => {
                tracing::trace!(
                    action = %intent.action,
                    trigger = %intent.trigger,
                    "intent queue full, dropping"
                );
                false
            }
        }
    }

    /// Takes every buffered intent, in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> IntentBatch {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(id: u32) -> ActionIntent {
        ActionIntent::new(ActionId(id), TriggerKind::KeyPress)
    }

    #[test]
    fn overflow_is_dropped_and_order_kept() {
        let mut queue = IntentQueue::new();
        let accepted: Vec<bool> = (1..=6).map(|id| queue.enqueue(intent(id))).collect();
        assert_eq!(accepted, vec![true, true, true, true, true, false]);
        assert!(queue.is_full());

        let drained: Vec<u32> = queue.drain().into_iter().map(|intent| intent.action.0).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_accepts_again_after_drain() {
        let mut queue = IntentQueue::new();
        for id in 0..InputConfig::INTENT_CAPACITY as u32 {
            queue.enqueue(intent(id));
        }
        queue.drain();
        assert!(queue.enqueue(intent(99).with_target(EntityId(1))));
        assert_eq!(queue.len(), 1);
    }
}
