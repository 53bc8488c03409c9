//! Capture-phase entry points.

use glam::Vec3;

use crate::action::TriggerKind;
use crate::env::Ray;
use crate::intent::ActionIntent;
use crate::movement::MoveSource;
use crate::types::{ActionId, EntityId};

use super::InputSender;

impl InputSender<'_> {
    /// Queues `action` for resolution on the next tick.
    ///
    /// Returns false when the intent was dropped because the queue is full.
    ///
    /// # Panics
    ///
    /// Panics if `action` is not in the catalog.
    pub fn request_action(&mut self, action: ActionId, trigger: TriggerKind) -> bool {
        self.enqueue(ActionIntent::new(action, trigger))
    }

    /// Queues `action` aimed at `target`, e.g. from a party-frame button.
    ///
    /// # Panics
    ///
    /// Panics if `action` is not in the catalog.
    pub fn request_action_on(
        &mut self,
        action: ActionId,
        trigger: TriggerKind,
        target: EntityId,
    ) -> bool {
        self.enqueue(ActionIntent::new(action, trigger).with_target(target))
    }

    /// Queues a raw intent.
    ///
    /// # Panics
    ///
    /// Panics if the intent's action is not in the catalog.
    pub fn enqueue(&mut self, intent: ActionIntent) -> bool {
        assert!(
            self.env.catalog.contains(intent.action),
            "requested {} which is not in the action catalog",
            intent.action
        );
        self.queue.enqueue(intent)
    }

    /// Marks a move as pending for the next tick.
    pub fn request_move(&mut self, source: MoveSource) {
        self.throttle.request(source);
    }

    /// Latest pointer ray in world space.
    pub fn set_pointer_ray(&mut self, ray: Ray) {
        self.pointer_ray = Some(ray);
    }

    /// World point the analog stick currently aims at.
    pub fn set_analog_aim(&mut self, aim: Vec3) {
        self.analog_aim = Some(aim);
    }

    /// While the UI owns focus, pending moves are discarded.
    pub fn set_ui_focus(&mut self, focused: bool) {
        self.ui_focus = focused;
    }

    /// While the pointer hovers UI, pointer buttons do not reach the world.
    pub fn set_pointer_over_ui(&mut self, over: bool) {
        self.pointer_over_ui = over;
    }
}
