//! Static action descriptors and the way an action was triggered.

use crate::types::ActionId;

// ============================================================================
// Trigger Kind
// ============================================================================

/// Input modality that produced an intent.
///
/// Pointer clicks resolve their target by picking under the pointer; every
/// other trigger uses the stateful selected target of the character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerKind {
    /// Nothing was triggered.
    #[default]
    None,
    /// Pointer click in the world; picks a target under the pointer.
    PointerClick,
    /// Key (or gamepad button) pressed.
    KeyPress,
    /// Key (or gamepad button) released.
    KeyRelease,
    /// On-screen button pressed.
    UiPress,
    /// On-screen button released.
    UiRelease,
}

impl TriggerKind {
    /// Returns true for the kinds that end a held input.
    #[inline]
    pub const fn is_release(self) -> bool {
        matches!(self, TriggerKind::KeyRelease | TriggerKind::UiRelease)
    }
}

// ============================================================================
// Action Logic
// ============================================================================

/// Logic category of an action; selects how request parameters are populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionLogic {
    /// Launches a projectile along a direction.
    Projectile,
    Melee,
    /// Acts on the target only (selection, buffs).
    Target,
    Emote,
    /// Effect centred on a point near the target.
    TargetedAreaEffect,
    /// Dashes to a point.
    Dash,
    PickUp,
    Drop,
    Revive,
    Chase,
    Trample,
    ChargedShield,
    ChargedProjectile,
    Stealth,
}

// ============================================================================
// Continuous Input
// ============================================================================

/// Multi-tick input an action needs before its final request is built.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContinuousInputKind {
    /// Hold to charge, release to fire.
    Charged,
    /// Aim at the ground under the pointer, release to place.
    AreaTarget {
        /// Maximum distance between the caster and the placed point.
        max_range: f32,
    },
}

// ============================================================================
// Action Descriptor
// ============================================================================

/// Read-only catalog entry describing one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDescriptor {
    pub id: ActionId,
    /// Human-readable name.
    pub name: String,
    pub logic: ActionLogic,
    /// Present when the action runs a skill session before sending.
    #[cfg_attr(feature = "serde", serde(default))]
    pub continuous_input: Option<ContinuousInputKind>,
    /// General-target actions never fall back to the selected target and
    /// degrade to a ground-point request when nothing valid was picked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub general_target: bool,
}

impl ActionDescriptor {
    pub fn new(id: ActionId, name: impl Into<String>, logic: ActionLogic) -> Self {
        Self {
            id,
            name: name.into(),
            logic,
            continuous_input: None,
            general_target: false,
        }
    }

    pub fn with_continuous_input(mut self, kind: ContinuousInputKind) -> Self {
        self.continuous_input = Some(kind);
        self
    }

    pub fn general_target(mut self) -> Self {
        self.general_target = true;
        self
    }
}
