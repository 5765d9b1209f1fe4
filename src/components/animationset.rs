//! Movement-driven animation selection.
//!
//! An [`AnimationSet`] names one clip per movement state. The
//! [`crate::systems::animation::animation_controller`] system picks the clip
//! matching the entity's state every frame and hands it to
//! [`Sprite::play`](super::sprite::Sprite::play), which only restarts playback
//! when the clip actually changes.

use bevy_ecs::prelude::Component;

use crate::resources::texturestore::TexKey;

/// A frame list together with its playback rate.
#[derive(Debug, Clone, Copy)]
pub struct AnimClip {
    pub frames: &'static [TexKey],
    pub fps: f32,
}

impl AnimClip {
    pub const fn new(frames: &'static [TexKey], fps: f32) -> Self {
        Self { frames, fps }
    }
}

/// Movement state an entity can be animated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Idle,
    Walk,
    Airborne,
}

impl MoveState {
    /// Airborne wins over walking; walking needs a non-zero horizontal velocity.
    pub fn classify(grounded: bool, velocity_x: f32) -> Self {
        if !grounded {
            MoveState::Airborne
        } else if velocity_x != 0.0 {
            MoveState::Walk
        } else {
            MoveState::Idle
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct AnimationSet {
    pub idle: AnimClip,
    pub walk: AnimClip,
    pub jump: AnimClip,
}

impl AnimationSet {
    pub fn clip(&self, state: MoveState) -> AnimClip {
        match state {
            MoveState::Idle => self.idle,
            MoveState::Walk => self.walk,
            MoveState::Airborne => self.jump,
        }
    }
}
