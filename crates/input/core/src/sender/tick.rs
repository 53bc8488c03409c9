//! Tick-phase processing: intent drain, live session update, movement.

use std::time::Duration;

use glam::Vec3;

use crate::action::{ActionDescriptor, ActionRequest, TriggerKind, populate};
use crate::env::{LayerMask, Ray, pick};
use crate::intent::ActionIntent;
use crate::movement::MoveSource;
use crate::session::{SessionContext, SpawnContext};
use crate::targeting::TargetResolver;

use super::InputSender;

impl InputSender<'_> {
    /// Runs one simulation step at time `now`.
    ///
    /// Every intent captured since the previous tick is processed in arrival
    /// order, then the live skill session (if any) is updated, then the
    /// pending move is considered.
    pub fn tick(&mut self, now: Duration) {
        for intent in self.queue.drain() {
            self.process_intent(intent, now);
        }
        self.tick_session(now);
        self.step_movement(now);
    }

    fn process_intent(&mut self, intent: ActionIntent, now: Duration) {
        if self.gate.is_active() {
            if intent.trigger.is_release() {
                let ctx = self.session_context(now);
                if let Some(request) = self.gate.release(&ctx) {
                    self.dispatch(&request);
                }
            } else {
                tracing::trace!(action = %intent.action, "skill session active, intent discarded");
            }
            return;
        }

        if intent.trigger.is_release() {
            tracing::trace!(action = %intent.action, "release without live session ignored");
            return;
        }

        let descriptor = self.env.descriptor(intent.action);
        if let Some(kind) = descriptor.continuous_input {
            let session = self.env.inputs.spawn(
                kind,
                SpawnContext {
                    action: intent.action,
                    origin: self.env.character.position(),
                    started_at: now,
                },
            );
            self.gate.begin(session);
            return;
        }

        self.perform(intent, descriptor, now);
    }

    fn perform(&mut self, intent: ActionIntent, descriptor: &ActionDescriptor, now: Duration) {
        let env = self.env;
        self.hits.clear();
        if intent.trigger == TriggerKind::PointerClick
            && let Some(ray) = self.pointer_ray
        {
            pick(
                env.spatial,
                ray,
                self.config.pointer_ray_distance,
                LayerMask::ACTION,
                &mut self.hits,
            );
        }

        let resolver = TargetResolver::new(env.catalog, env.character, env.world, env.validator);
        let origin = env.character.position();

        match resolver.resolve(&intent, descriptor, &self.hits) {
            Ok(resolved) => {
                let logic = env
                    .catalog
                    .descriptor(resolved.action)
                    .map_or(descriptor.logic, |substituted| substituted.logic);
                let mut request = ActionRequest::targeting(resolved.action, resolved.target);
                populate(&mut request, logic, origin, resolved.position);
                self.throttle.hold_off(now + self.config.target_move_timeout);
                self.dispatch(&request);
            }
            Err(err) if descriptor.general_target => match resolver.ground_fallback(&self.hits) {
                Some(point) => {
                    tracing::trace!(
                        %err,
                        ?point,
                        "general-target action falls back to ground point"
                    );
                    let mut request = ActionRequest::new(intent.action);
                    populate(&mut request, descriptor.logic, origin, point);
                    self.dispatch(&request);
                }
                None => {
                    tracing::debug!(%err, "general-target action hit no ground");
                }
            },
            Err(err) => {
                tracing::debug!(%err, "action dropped");
            }
        }
    }

    fn tick_session(&mut self, now: Duration) {
        if !self.gate.is_active() {
            return;
        }
        let ctx = self.session_context(now);
        if let Some(request) = self.gate.tick(&ctx) {
            self.dispatch(&request);
        }
    }

    fn session_context(&mut self, now: Duration) -> SessionContext {
        let ray = self.pointer_ray;
        let pointer_ground = ray.and_then(|ray| self.ground_along(ray));
        SessionContext {
            now,
            origin: self.env.character.position(),
            pointer_ground,
        }
    }

    fn step_movement(&mut self, now: Duration) {
        if self.ui_focus {
            if let Some(source) = self.throttle.pending() {
                tracing::trace!(%source, "ui has focus, move discarded");
            }
            self.throttle.clear();
            return;
        }

        let Some(source) = self.throttle.take_ready(now) else {
            return;
        };

        let ray = match source {
            MoveSource::Pointer => self.pointer_ray,
            MoveSource::Analog => self.analog_aim.map(Ray::downward),
        };
        let Some(destination) = ray.and_then(|ray| self.ground_along(ray)) else {
            tracing::debug!(%source, "no walkable destination");
            return;
        };

        self.env.channel.send_move(destination);
        self.throttle.record_send(now);
        for observer in &mut self.observers {
            observer.move_sent(destination);
        }
    }

    /// Nearest ground hit along `ray`, projected onto walkable ground.
    fn ground_along(&mut self, ray: Ray) -> Option<Vec3> {
        pick(
            self.env.spatial,
            ray,
            self.config.pointer_ray_distance,
            LayerMask::GROUND,
            &mut self.hits,
        );
        let point = self.hits.first()?.point;
        self.env.ground.project(point, self.config.max_ground_distance)
    }
}
