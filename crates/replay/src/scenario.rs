//! Scripted input timelines.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use input_core::{EntityId, InputEvent, LifeState, Ray};
use serde::Deserialize;

/// One replay: the world, the local character and the input timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Character class name from the class registry.
    pub class: String,
    /// Eye point of pointer rays generated by `Step::point_at`.
    #[serde(default = "default_camera")]
    pub camera: Vec3,
    #[serde(default)]
    pub character: CharacterSpec,
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
    pub steps: Vec<Step>,
}

fn default_camera() -> Vec3 {
    Vec3::new(0.0, 15.0, -10.0)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterSpec {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub selected: Option<EntityId>,
    #[serde(default)]
    pub held_item: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpec {
    pub id: EntityId,
    pub position: Vec3,
    pub kind: EntitySpecKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EntitySpecKind {
    Player(LifeState),
    Npc,
    PickUp,
    Prop,
}

/// Changes to the mirrored state applied before the step's input.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum WorldChange {
    Select(Option<EntityId>),
    Hold(Option<EntityId>),
    SetLife(EntityId, LifeState),
    Despawn(EntityId),
    MoveCharacter(Vec3),
}

/// Everything that happens in one simulation tick.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(default)]
    pub changes: Vec<WorldChange>,
    /// Moves the pointer so that it looks at this world point.
    #[serde(default)]
    pub point_at: Option<Vec3>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_ron(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn from_ron(source: &str) -> Result<Self> {
        let scenario: Scenario = ron::from_str(source).context("Failed to parse scenario RON")?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if let Some(pair) = self.steps.windows(2).find(|pair| pair[1].at_ms < pair[0].at_ms) {
            anyhow::bail!(
                "steps must be in time order: {}ms follows {}ms",
                pair[1].at_ms,
                pair[0].at_ms
            );
        }
        Ok(())
    }

    /// Pointer ray from the camera through `point`.
    pub fn pointer_ray(&self, point: Vec3) -> Ray {
        Ray::new(self.camera, point - self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::{PointerButton, SlotIndex};

    #[test]
    fn bundled_scenario_parses() {
        let scenario = Scenario::from_ron(include_str!("../scenarios/basic.ron")).unwrap();
        assert_eq!(scenario.class, "Tank");
        assert!(!scenario.steps.is_empty());
        assert!(
            scenario.steps[0]
                .events
                .contains(&InputEvent::PointerHeld(PointerButton::Primary))
        );
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let scenario = Scenario::from_ron(
            r#"Scenario(class: "Mage", steps: [Step(at_ms: 5, events: [SkillPressed(Second)])])"#,
        )
        .unwrap();
        assert_eq!(scenario.camera, default_camera());
        assert!(scenario.entities.is_empty());
        assert_eq!(scenario.steps[0].events, vec![InputEvent::SkillPressed(SlotIndex::Second)]);
    }

    #[test]
    fn out_of_order_steps_are_rejected() {
        let err = Scenario::from_ron(
            r#"Scenario(class: "Mage", steps: [Step(at_ms: 50), Step(at_ms: 10)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("time order"));
    }
}
