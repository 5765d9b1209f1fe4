//! Frame clock update.
//!
//! Runs outside the schedule, straight from the main loop, before any system
//! reads [`WorldTime`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Feed the raw frame delta `dt` (seconds) into the world clock.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
