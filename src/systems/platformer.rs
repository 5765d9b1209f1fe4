//! Keyboard-driven platformer movement.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! turns it into velocity on entities with a
//! [`PlatformerController`](crate::components::inputcontrolled::PlatformerController).
use bevy_ecs::prelude::*;

use crate::components::grounded::Grounded;
use crate::components::inputcontrolled::PlatformerController;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Horizontal input in `{-1, 0, 1}`; the primary bindings win over the
/// alternative ones.
pub fn horizontal_axis(controller: &PlatformerController, input: &InputState) -> f32 {
    let primary = input.axis(controller.left, controller.right);
    if primary != 0.0 {
        primary
    } else {
        input.axis(controller.alt_left, controller.alt_right)
    }
}

/// Set horizontal velocity from the axis and start a jump on a fresh press
/// while grounded.
///
/// `Grounded` still holds last frame's result at this point.
pub fn platformer_controller(
    mut query: Query<(&PlatformerController, &mut RigidBody, &mut Grounded)>,
    input_state: Res<InputState>,
) {
    for (controller, mut rigidbody, mut grounded) in query.iter_mut() {
        rigidbody.velocity.x = horizontal_axis(controller, &input_state) * controller.speed;

        if grounded.0 && input_state.is_pressed(controller.jump) {
            rigidbody.velocity.y = controller.jump_velocity;
            grounded.0 = false;
        }
    }
}
