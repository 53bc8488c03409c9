//! Contents of the three skill slots.
//!
//! Slots 2 and 3 are the character's innate skills and never change. The
//! basic slot is context dependent: it becomes *drop* while an item is held,
//! *pick up* when a pick-up is selected and *revive* when another player
//! character is selected.

use strum::IntoEnumIterator;

use crate::env::{EntityView, WellKnownActions};
use crate::types::{ActionId, EntityId, LifeState, SlotIndex};

/// Action currently bound to a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSlotState {
    pub action: ActionId,
    /// Whether the slot can be activated right now.
    pub selectable: bool,
}

impl ActionSlotState {
    pub const fn selectable(action: ActionId) -> Self {
        Self {
            action,
            selectable: true,
        }
    }
}

/// Inputs of the basic slot.
#[derive(Clone, Copy, Debug)]
pub struct BasicSlotContext<'a> {
    pub well_known: &'a WellKnownActions,
    /// The local character.
    pub character: EntityId,
    /// Innate slot-1 skill of the character class.
    pub innate: Option<ActionId>,
    /// True when the held item is still spawned.
    pub holding_item: bool,
    /// Selected target, when spawned.
    pub selected: Option<EntityView>,
    /// Life state last reported for the selected target; overrides the one
    /// carried by `selected`.
    pub reported_life: Option<LifeState>,
}

/// Computes the basic slot.
pub fn resolve_basic_slot(ctx: &BasicSlotContext<'_>) -> Option<ActionSlotState> {
    if ctx.holding_item {
        return Some(ActionSlotState::selectable(ctx.well_known.drop));
    }

    if let Some(target) = ctx.selected {
        if target.is_pick_up() {
            return Some(ActionSlotState::selectable(ctx.well_known.pick_up));
        }
        if target.id != ctx.character
            && let Some((false, life)) = target.as_character()
        {
            let life = ctx.reported_life.unwrap_or(life);
            return Some(ActionSlotState {
                action: ctx.well_known.revive,
                selectable: life != LifeState::Alive,
            });
        }
    }

    ctx.innate.map(ActionSlotState::selectable)
}

/// The three slots of the local character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionSlots {
    slots: [Option<ActionSlotState>; 3],
}

impl ActionSlots {
    /// Slots holding the innate skills.
    pub fn innate(skills: impl Fn(SlotIndex) -> Option<ActionId>) -> Self {
        let mut slots = Self::default();
        for slot in SlotIndex::iter() {
            slots.slots[slot.index()] = skills(slot).map(ActionSlotState::selectable);
        }
        slots
    }

    pub fn get(&self, slot: SlotIndex) -> Option<ActionSlotState> {
        self.slots[slot.index()]
    }

    /// Replaces the basic slot; returns true when it changed.
    pub fn set_basic(&mut self, state: Option<ActionSlotState>) -> bool {
        let entry = &mut self.slots[SlotIndex::Basic.index()];
        let changed = *entry != state;
        *entry = state;
        changed
    }
}
