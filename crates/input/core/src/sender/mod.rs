//! Input sender: the single entry point of the crate.
//!
//! Work is split into two phases joined only by the bounded intent queue:
//!
//! - **Capture**: called any number of times per frame by device
//!   bindings or UI. Only records intents and pointer/analog state.
//! - **Tick**: called once per simulation step. Drains the queue
//!   through the skill session gate, resolves targets, builds requests, sends
//!   them and runs the movement throttle.
//!
//! Slot reactivity is driven by change notifications from the
//! character record and the life-state feed.

mod capture;
mod observer;
mod slots;
mod tick;

pub use observer::InputObserver;

use glam::Vec3;

use crate::action::ActionRequest;
use crate::config::InputConfig;
use crate::env::{Env, HitBuffer, LifeStateSubscription, Ray};
use crate::intent::IntentQueue;
use crate::movement::MovementThrottle;
use crate::session::SkillSessionGate;
use crate::slot::{ActionSlotState, ActionSlots};
use crate::types::{LifeState, SlotIndex};

/// Translates player input of one local character into outbound requests.
pub struct InputSender<'a> {
    env: Env<'a>,
    config: InputConfig,
    queue: IntentQueue,
    gate: SkillSessionGate,
    throttle: MovementThrottle,
    slots: ActionSlots,
    life_watch: Option<LifeStateSubscription<'a>>,
    reported_life: Option<LifeState>,
    pointer_ray: Option<Ray>,
    analog_aim: Option<Vec3>,
    ui_focus: bool,
    pointer_over_ui: bool,
    hits: HitBuffer,
    observers: Vec<Box<dyn InputObserver + 'a>>,
}

impl<'a> InputSender<'a> {
    pub fn new(env: Env<'a>, config: InputConfig) -> Self {
        let slots = ActionSlots::innate(|slot| env.character.skill(slot));
        let mut sender = Self {
            env,
            throttle: MovementThrottle::new(config.move_send_interval),
            config,
            queue: IntentQueue::new(),
            gate: SkillSessionGate::new(),
            slots,
            life_watch: None,
            reported_life: None,
            pointer_ray: None,
            analog_aim: None,
            ui_focus: false,
            pointer_over_ui: false,
            hits: HitBuffer::new(),
            observers: Vec::new(),
        };
        sender.rebind_life_watch();
        sender.refresh_basic_slot();
        tracing::debug!(character = %env.character.id(), "input sender ready");
        sender
    }

    pub fn add_observer(&mut self, observer: Box<dyn InputObserver + 'a>) {
        self.observers.push(observer);
    }

    /// Collaborators this sender was built with.
    pub fn env(&self) -> Env<'a> {
        self.env
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Current contents of `slot`.
    pub fn slot(&self, slot: SlotIndex) -> Option<ActionSlotState> {
        self.slots.get(slot)
    }

    /// True while a skill session owns the input.
    pub fn has_active_session(&self) -> bool {
        self.gate.is_active()
    }

    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }

    pub fn ui_focus(&self) -> bool {
        self.ui_focus
    }

    pub fn pointer_over_ui(&self) -> bool {
        self.pointer_over_ui
    }

    fn dispatch(&mut self, request: &ActionRequest) {
        tracing::trace!(
            action = %request.action,
            targets = request.targets.len(),
            "sending action request"
        );
        self.env.channel.send_action(request);
        for observer in &mut self.observers {
            observer.action_sent(request);
        }
    }

    fn notify_slot(&mut self, slot: SlotIndex) {
        let state = self.slots.get(slot);
        for observer in &mut self.observers {
            observer.slot_changed(slot, state);
        }
    }
}

impl std::fmt::Debug for InputSender<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSender")
            .field("env", &self.env)
            .field("queue", &self.queue)
            .field("gate", &self.gate)
            .field("throttle", &self.throttle)
            .field("slots", &self.slots)
            .field("ui_focus", &self.ui_focus)
            .finish_non_exhaustive()
    }
}
