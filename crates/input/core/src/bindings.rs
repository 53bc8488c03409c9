//! Device-agnostic input events and their default bindings.
//!
//! Platform layers translate raw device state into [`InputEvent`]s and feed
//! them to [`InputSender::handle_event`] during the capture phase.

use glam::Vec3;

use crate::action::TriggerKind;
use crate::env::Ray;
use crate::movement::MoveSource;
use crate::sender::InputSender;
use crate::types::SlotIndex;

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// Click to move or select.
    Primary,
    /// Click to use the basic skill.
    Secondary,
}

/// One input event produced by a device binding.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerPressed(PointerButton),
    /// Button kept down this frame.
    PointerHeld(PointerButton),
    /// New pointer ray in world space.
    PointerMoved(Ray),
    SkillPressed(SlotIndex),
    SkillReleased(SlotIndex),
    /// On-screen slot button.
    SlotButtonPressed(SlotIndex),
    SlotButtonReleased(SlotIndex),
    /// Emote key `0..4`.
    EmotePressed(u8),
    /// Analog stick aims at a world point.
    AnalogMoved(Vec3),
    PointerOverUi(bool),
    UiFocus(bool),
}

impl InputSender<'_> {
    /// Applies the default binding of `event`.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed(button) => {
                if !self.pointer_reaches_world() {
                    return;
                }
                let action = match button {
                    PointerButton::Primary => Some(self.env().catalog.well_known().general_target),
                    PointerButton::Secondary => self.env().character.skill(SlotIndex::Basic),
                };
                if let Some(action) = action {
                    self.request_action(action, TriggerKind::PointerClick);
                }
            }
            InputEvent::PointerHeld(PointerButton::Primary) => {
                if self.pointer_reaches_world() {
                    self.request_move(MoveSource::Pointer);
                }
            }
            InputEvent::PointerHeld(PointerButton::Secondary) => {}
            InputEvent::PointerMoved(ray) => self.set_pointer_ray(ray),
            InputEvent::SkillPressed(slot) => self.request_slot(slot, TriggerKind::KeyPress),
            InputEvent::SkillReleased(slot) => self.request_slot(slot, TriggerKind::KeyRelease),
            InputEvent::SlotButtonPressed(slot) => self.request_slot(slot, TriggerKind::UiPress),
            InputEvent::SlotButtonReleased(slot) => self.request_slot(slot, TriggerKind::UiRelease),
            InputEvent::EmotePressed(index) => {
                let emotes = self.env().catalog.well_known().emotes;
                match emotes.get(usize::from(index)) {
                    Some(&emote) => {
                        self.request_action(emote, TriggerKind::KeyPress);
                    }
                    None => tracing::debug!(index, "no such emote"),
                }
            }
            InputEvent::AnalogMoved(aim) => {
                self.set_analog_aim(aim);
                self.request_move(MoveSource::Analog);
            }
            InputEvent::PointerOverUi(over) => self.set_pointer_over_ui(over),
            InputEvent::UiFocus(focused) => self.set_ui_focus(focused),
        }
    }

    fn pointer_reaches_world(&self) -> bool {
        !self.has_active_session() && !self.pointer_over_ui()
    }

    /// Slot keys only work for slots the character class has a skill in,
    /// even when the basic slot currently offers pick up or drop.
    fn request_slot(&mut self, slot: SlotIndex, trigger: TriggerKind) {
        if self.env().character.skill(slot).is_none() {
            tracing::trace!(%slot, "character does not own slot");
            return;
        }
        match self.slot(slot) {
            Some(state) => {
                self.request_action(state.action, trigger);
            }
            None => tracing::trace!(%slot, "slot is empty"),
        }
    }
}
