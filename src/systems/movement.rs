use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Apply gravity to velocity, then velocity to position.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        rigidbody.velocity.y += rigidbody.gravity * dt;
        position.translate(rigidbody.velocity.scale_by(dt));
    }
}
