//! Animation systems.
//!
//! - [`animation_controller`] picks the clip for each entity's movement state
//!   and (re)plays it on its [`Sprite`]. Re-playing the running clip is free,
//!   so the choice is simply recomputed every frame.
//! - [`animation`] advances every sprite's animation by the frame delta.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – playback cursor
//! - [`crate::components::animationset::AnimationSet`] – clips per state
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animationset::{AnimationSet, MoveState};
use crate::components::grounded::Grounded;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn animation_controller(
    mut query: Query<(Entity, &AnimationSet, &RigidBody, &Grounded, &mut Sprite)>,
) {
    for (entity, set, rigidbody, grounded, mut sprite) in query.iter_mut() {
        let state = MoveState::classify(grounded.0, rigidbody.velocity.x);
        let clip = set.clip(state);
        if !sprite.animation.is_same(clip.frames, clip.fps) {
            debug!("{:?} animation -> {:?}", entity, state);
        }
        sprite.play(clip.frames, clip.fps);
    }
}

/// Advance animation playback and refresh the displayed texture.
pub fn animation(mut query: Query<&mut Sprite>, time: Res<WorldTime>) {
    for mut sprite in query.iter_mut() {
        sprite.update(time.delta);
    }
}
