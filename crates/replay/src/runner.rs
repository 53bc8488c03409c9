//! Drives an [`InputSender`] through a scenario timeline.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use input_content::{ActionRegistry, ClassRegistry};
use input_core::{BuiltinInputs, Env, InputConfig, InputEvent, InputSender, SlotIndex};
use serde::Serialize;

use crate::scenario::{Scenario, WorldChange};
use crate::world::{Outbound, ReplayFeed, ReplayLog, ReplayWorld, SlotFeedback};

/// Half the side length of the walkable square.
const ARENA_HALF_EXTENT: f32 = 50.0;

/// Outbound traffic of one replay, in send order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub class: String,
    pub entries: Vec<ReplayEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEntry {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: Outbound,
}

impl Report {
    pub fn actions(&self) -> impl Iterator<Item = (u64, &input_core::ActionRequest)> + '_ {
        self.entries.iter().filter_map(|entry| match &entry.event {
            Outbound::Action { request } => Some((entry.at_ms, request)),
            _ => None,
        })
    }

    pub fn moves(&self) -> impl Iterator<Item = (u64, glam::Vec3)> + '_ {
        self.entries.iter().filter_map(|entry| match entry.event {
            Outbound::Move { destination } => Some((entry.at_ms, destination)),
            _ => None,
        })
    }
}

/// Replays `scenario` against the given content.
pub fn run(
    scenario: &Scenario,
    actions: &ActionRegistry,
    classes: &ClassRegistry,
    config: InputConfig,
) -> Result<Report> {
    let Some(class) = classes.get(&scenario.class) else {
        bail!(
            "Unknown class '{}' (available: {})",
            scenario.class,
            classes.names().join(", ")
        );
    };
    classes
        .validate(actions)
        .context("Class skills do not match the action catalog")?;

    let skills =
        [SlotIndex::Basic, SlotIndex::Second, SlotIndex::Third].map(|slot| class.skill(slot));
    let world = ReplayWorld::new(
        skills,
        &scenario.character,
        &scenario.entities,
        ARENA_HALF_EXTENT,
    );
    let log = ReplayLog::default();
    let feed = ReplayFeed::default();
    let inputs = BuiltinInputs;

    let env = Env {
        catalog: actions,
        character: &world,
        world: &world,
        validator: &world,
        spatial: &world,
        ground: &world,
        channel: &log,
        life_feed: &feed,
        inputs: &inputs,
    };

    let mut sender = InputSender::new(env, config);
    sender.add_observer(Box::new(SlotFeedback(&log)));
    tracing::info!(class = %class.name, steps = scenario.steps.len(), "replay started");

    let mut entries = Vec::new();
    for step in &scenario.steps {
        for change in &step.changes {
            apply_change(*change, &world, &feed, &mut sender);
        }
        if let Some(point) = step.point_at {
            sender.handle_event(InputEvent::PointerMoved(scenario.pointer_ray(point)));
        }
        for event in &step.events {
            sender.handle_event(*event);
        }

        sender.tick(Duration::from_millis(step.at_ms));

        let drained = log.drain();
        tracing::debug!(at_ms = step.at_ms, sent = drained.len(), "step replayed");
        entries.extend(drained.into_iter().map(|event| ReplayEntry {
            at_ms: step.at_ms,
            event,
        }));
    }

    tracing::info!(entries = entries.len(), "replay finished");
    Ok(Report {
        class: class.name.clone(),
        entries,
    })
}

fn apply_change(
    change: WorldChange,
    world: &ReplayWorld,
    feed: &ReplayFeed,
    sender: &mut InputSender<'_>,
) {
    match change {
        WorldChange::Select(target) => {
            world.select(target);
            sender.selected_target_changed();
        }
        WorldChange::Hold(item) => {
            world.hold(item);
            sender.held_item_changed();
        }
        WorldChange::SetLife(target, life) => {
            if !world.set_life(target, life) {
                tracing::warn!(%target, "life change on an entity that is not a character");
                return;
            }
            if feed.is_watching(target) {
                sender.target_life_state_changed(target, life);
            }
        }
        WorldChange::Despawn(target) => {
            let selected = sender.env().character.selected_target() == Some(target);
            if !world.despawn(target) {
                tracing::warn!(%target, "despawn of an unknown entity");
            }
            if selected {
                world.select(None);
                sender.selected_target_changed();
            }
        }
        WorldChange::MoveCharacter(position) => world.move_character(position),
    }
}
