//! World collision systems.
//!
//! - [`platform_landing`] resolves top-only landings of falling bodies on the
//!   [`PlatformRow`] and recomputes [`Grounded`].
//! - [`keep_in_world_bounds`] clamps or bounces entities at the edges of
//!   [`WorldBounds`].
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::grounded::Grounded;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::worldbound::WorldBound;
use crate::physics;
use crate::resources::platformrow::PlatformRow;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Land falling bodies on top of platform tiles.
///
/// A body is grounded this frame only if it crossed a tile's top edge from
/// above during this tick; it is then snapped onto the tile and its vertical
/// velocity zeroed. See [`physics::landed_on`] for the limits of the test.
pub fn platform_landing(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider, &mut Grounded)>,
    row: Res<PlatformRow>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, collider, mut grounded) in query.iter_mut() {
        grounded.0 = false;

        let mut body = collider.rect(position.pos);
        for index in row.tiles_near(body.x) {
            let tile = row.tile_rect(index);
            if physics::landed_on(&body, rigidbody.velocity.y, dt, &tile) {
                position.pos.y = tile.y - collider.size.y - collider.offset.y;
                rigidbody.velocity.y = 0.0;
                grounded.0 = true;
                body = collider.rect(position.pos);
            }
        }
    }
}

/// Keep bodies inside the world.
pub fn keep_in_world_bounds(
    mut query: Query<(&mut MapPosition, &BoxCollider, &WorldBound, Option<&mut RigidBody>)>,
    bounds: Res<WorldBounds>,
) {
    let bounds = bounds.as_vector();
    for (mut position, collider, mode, rigidbody) in query.iter_mut() {
        let mut min = position.pos + collider.offset;
        match (mode, rigidbody) {
            (WorldBound::Bounce, Some(mut rigidbody)) => {
                physics::bounce_off_bounds(&mut min, &mut rigidbody.velocity, collider.size, bounds);
            }
            _ => physics::clamp_to_bounds(&mut min, collider.size, bounds),
        }
        position.pos = min - collider.offset;
    }
}
