//! Built-in continuous-input handlers.

use std::time::Duration;

use glam::Vec3;

use crate::action::{ActionRequest, ContinuousInputKind};
use crate::types::ActionId;

use super::{ContinuousInput, ContinuousInputFactory, SessionContext, SessionOutcome, SpawnContext};

/// Factory for the handlers shipped with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinInputs;

impl ContinuousInputFactory for BuiltinInputs {
    fn spawn(&self, kind: ContinuousInputKind, ctx: SpawnContext) -> Box<dyn ContinuousInput> {
        match kind {
            ContinuousInputKind::Charged => Box::new(ChargedInput::new(ctx)),
            ContinuousInputKind::AreaTarget { max_range } => {
                Box::new(AreaTargetInput::new(ctx, max_range))
            }
        }
    }
}

// ============================================================================
// Charged
// ============================================================================

/// Hold to charge; the release fires the action from where the character
/// stands.
#[derive(Clone, Debug)]
pub struct ChargedInput {
    action: ActionId,
    started_at: Duration,
}

impl ChargedInput {
    pub fn new(ctx: SpawnContext) -> Self {
        Self {
            action: ctx.action,
            started_at: ctx.started_at,
        }
    }

    /// Time spent charging up to `now`.
    pub fn charged_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }
}

impl ContinuousInput for ChargedInput {
    fn action(&self) -> ActionId {
        self.action
    }

    fn on_release(&mut self, ctx: &SessionContext) -> SessionOutcome {
        tracing::trace!(
            action = %self.action,
            charged_ms = self.charged_for(ctx.now).as_millis() as u64,
            "charge released"
        );
        let mut request = ActionRequest::new(self.action);
        request.position = Some(ctx.origin);
        SessionOutcome::send_and_finish(request)
    }
}

// ============================================================================
// Area target
// ============================================================================

/// Follows the ground point under the pointer; the release places the effect
/// there if it is within range of where the session started.
#[derive(Clone, Debug)]
pub struct AreaTargetInput {
    action: ActionId,
    origin: Vec3,
    max_range: f32,
    aim: Option<Vec3>,
}

impl AreaTargetInput {
    pub fn new(ctx: SpawnContext, max_range: f32) -> Self {
        Self {
            action: ctx.action,
            origin: ctx.origin,
            max_range,
            aim: None,
        }
    }

    pub fn aim(&self) -> Option<Vec3> {
        self.aim
    }

    fn in_range(&self, point: Vec3) -> bool {
        let offset = point - self.origin;
        Vec3::new(offset.x, 0.0, offset.z).length() <= self.max_range
    }
}

impl ContinuousInput for AreaTargetInput {
    fn action(&self) -> ActionId {
        self.action
    }

    fn on_tick(&mut self, ctx: &SessionContext) -> SessionOutcome {
        if ctx.pointer_ground.is_some() {
            self.aim = ctx.pointer_ground;
        }
        SessionOutcome::pending()
    }

    fn on_release(&mut self, ctx: &SessionContext) -> SessionOutcome {
        let aim = ctx.pointer_ground.or(self.aim);
        match aim {
            Some(point) if self.in_range(point) => {
                let mut request = ActionRequest::new(self.action);
                request.position = Some(point);
                SessionOutcome::send_and_finish(request)
            }
            Some(point) => {
                tracing::debug!(action = %self.action, ?point, "area target out of range");
                SessionOutcome::finished()
            }
            None => {
                tracing::debug!(action = %self.action, "area target released without aim");
                SessionOutcome::finished()
            }
        }
    }
}
