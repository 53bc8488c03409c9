use crate::action::ActionRequest;
use crate::types::ActionId;

use super::{ContinuousInput, SessionContext, SessionOutcome};

/// Holds the single live skill session, if any.
#[derive(Default)]
pub struct SkillSessionGate {
    active: Option<Box<dyn ContinuousInput>>,
}

impl SkillSessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Action of the live session.
    pub fn active_action(&self) -> Option<ActionId> {
        self.active.as_ref().map(|session| session.action())
    }

    /// Installs `session`. Returns false, dropping `session`, when another
    /// session is still live.
    pub fn begin(&mut self, session: Box<dyn ContinuousInput>) -> bool {
        if let Some(current) = &self.active {
            tracing::debug!(
                live = %current.action(),
                rejected = %session.action(),
                "skill session already active"
            );
            return false;
        }
        tracing::trace!(action = %session.action(), "skill session started");
        self.active = Some(session);
        true
    }

    /// Forwards a release to the live session.
    pub fn release(&mut self, ctx: &SessionContext) -> Option<ActionRequest> {
        let outcome = self.active.as_mut()?.on_release(ctx);
        self.apply(outcome)
    }

    /// Gives the live session its per-tick update.
    pub fn tick(&mut self, ctx: &SessionContext) -> Option<ActionRequest> {
        let outcome = self.active.as_mut()?.on_tick(ctx);
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: SessionOutcome) -> Option<ActionRequest> {
        if outcome.finished
            && let Some(session) = self.active.take()
        {
            tracing::trace!(action = %session.action(), "skill session finished");
        }
        outcome.request
    }
}

impl std::fmt::Debug for SkillSessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillSessionGate")
            .field("active", &self.active_action())
            .finish()
    }
}
