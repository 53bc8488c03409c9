use glam::Vec3;

use crate::action::ActionRequest;
use crate::slot::ActionSlotState;
use crate::types::SlotIndex;

/// Local feedback hooks (cursor effects, slot widgets, logging).
///
/// Every method defaults to a no-op so observers implement only what they use.
pub trait InputObserver {
    /// An action request was handed to the channel.
    fn action_sent(&mut self, _request: &ActionRequest) {}

    /// A movement destination was handed to the channel.
    fn move_sent(&mut self, _destination: Vec3) {}

    /// A slot was recomputed. `None` means the slot is empty.
    fn slot_changed(&mut self, _slot: SlotIndex, _state: Option<ActionSlotState>) {}
}
