//! Action catalog oracle.
//!
//! Provides access to static action descriptors by identifier.

use crate::action::ActionDescriptor;
use crate::types::ActionId;

/// Actions the sender refers to by role rather than by slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellKnownActions {
    /// Replaces the basic action on a fainted ally.
    pub revive: ActionId,
    pub pick_up: ActionId,
    pub drop: ActionId,
    /// Click-to-move / click-to-select action of the primary pointer button.
    pub general_target: ActionId,
    pub emotes: [ActionId; 4],
}

/// Read-only catalog of action descriptors.
pub trait ActionCatalog: Send + Sync {
    /// Returns the descriptor registered under `id`.
    fn descriptor(&self, id: ActionId) -> Option<&ActionDescriptor>;

    /// Identifiers of the role-based actions.
    fn well_known(&self) -> &WellKnownActions;

    fn contains(&self, id: ActionId) -> bool {
        self.descriptor(id).is_some()
    }
}
