//! Outbound delivery to the authoritative simulation.

use glam::Vec3;

use crate::action::ActionRequest;

/// Fire-and-forget transport towards the authoritative simulation.
///
/// Delivery failures belong to the channel; the sender never observes them.
pub trait RequestChannel: Send + Sync {
    fn send_action(&self, request: &ActionRequest);

    fn send_move(&self, destination: Vec3);
}
