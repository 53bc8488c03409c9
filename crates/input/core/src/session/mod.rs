//! Multi-tick skill input sessions.
//!
//! Some actions need sustained input (charging, aiming) before their final
//! request can be built. Such an action declares a [`ContinuousInputKind`];
//! when triggered, the sender spawns a handler through the injected
//! [`ContinuousInputFactory`] and hands it to the [`SkillSessionGate`], which
//! keeps at most one session alive and swallows every other intent until the
//! handler reports completion.

mod gate;
mod handlers;

pub use gate::SkillSessionGate;
pub use handlers::{AreaTargetInput, BuiltinInputs, ChargedInput};

use std::time::Duration;

use glam::Vec3;

use crate::action::{ActionRequest, ContinuousInputKind};
use crate::types::ActionId;

/// Data available to a handler when its session starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnContext {
    pub action: ActionId,
    /// Character position at the moment the session started.
    pub origin: Vec3,
    pub started_at: Duration,
}

/// Per-call view of the world handed to a live session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub now: Duration,
    /// Current character position.
    pub origin: Vec3,
    /// Walkable point under the pointer this tick, if any.
    pub pointer_ground: Option<Vec3>,
}

/// What a handler wants done after an event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionOutcome {
    /// Request to send through the regular outbound path.
    pub request: Option<ActionRequest>,
    /// The handler is done; the session is cleared.
    pub finished: bool,
}

impl SessionOutcome {
    /// Keep the session alive, send nothing.
    pub fn pending() -> Self {
        Self::default()
    }

    /// End the session without sending.
    pub fn finished() -> Self {
        Self {
            request: None,
            finished: true,
        }
    }

    /// Send `request` and end the session.
    pub fn send_and_finish(request: ActionRequest) -> Self {
        Self {
            request: Some(request),
            finished: true,
        }
    }
}

/// Interactive phase of an action that needs sustained input.
pub trait ContinuousInput: Send {
    /// Action this session was started for.
    fn action(&self) -> ActionId;

    /// Called for each release-kind intent drained while the session is live.
    fn on_release(&mut self, ctx: &SessionContext) -> SessionOutcome;

    /// Called once per simulation tick after the intent drain.
    fn on_tick(&mut self, _ctx: &SessionContext) -> SessionOutcome {
        SessionOutcome::pending()
    }
}

/// Instantiates handlers for the continuous-input kinds of the catalog.
pub trait ContinuousInputFactory: Send + Sync {
    fn spawn(&self, kind: ContinuousInputKind, ctx: SpawnContext) -> Box<dyn ContinuousInput>;
}
