//! Request parameter population keyed by logic category.

use glam::Vec3;

use super::descriptor::ActionLogic;
use super::request::ActionRequest;

/// Fills direction, position and flags of `request` for the given logic.
///
/// `origin` is the acting character's position and `reference` the target
/// position or the picked ground point. `targets` are left untouched.
///
/// | Logic              | direction | position  | should_close | cancel_movement | should_queue |
/// |--------------------|-----------|-----------|--------------|-----------------|--------------|
/// | Projectile         | toward    | -         | false        | -               | -            |
/// | Melee              | toward    | -         | true         | -               | -            |
/// | Target             | -         | -         | false        | -               | -            |
/// | Emote              | -         | -         | true         | true            | -            |
/// | TargetedAreaEffect | -         | reference | true         | -               | -            |
/// | Dash               | -         | reference | true         | -               | -            |
/// | PickUp             | -         | -         | true         | true            | false        |
///
/// Every other category only gets `should_close = true`.
pub fn populate(request: &mut ActionRequest, logic: ActionLogic, origin: Vec3, reference: Vec3) {
    // most logic closes distance implicitly; the exceptions are set below
    request.should_close = true;

    match logic {
        ActionLogic::Projectile => {
            request.direction = Some(horizontal_direction(origin, reference));
            // lining up a shot should not drag the character forward
            request.should_close = false;
        }
        ActionLogic::Melee => {
            request.direction = Some(horizontal_direction(origin, reference));
        }
        ActionLogic::Target => {
            request.should_close = false;
        }
        ActionLogic::Emote => {
            request.cancel_movement = true;
        }
        ActionLogic::TargetedAreaEffect | ActionLogic::Dash => {
            request.position = Some(reference);
        }
        ActionLogic::PickUp => {
            request.cancel_movement = true;
            request.should_queue = false;
        }
        ActionLogic::Drop
        | ActionLogic::Revive
        | ActionLogic::Chase
        | ActionLogic::Trample
        | ActionLogic::ChargedShield
        | ActionLogic::ChargedProjectile
        | ActionLogic::Stealth => {}
    }
}

/// Unit vector from `origin` toward `reference` in the horizontal plane.
///
/// The vertical component is discarded before normalizing; a degenerate
/// displacement yields `Vec3::ZERO`.
pub fn horizontal_direction(origin: Vec3, reference: Vec3) -> Vec3 {
    let mut offset = reference - origin;
    offset.y = 0.0;
    offset.normalize_or_zero()
}
