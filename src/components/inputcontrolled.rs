//! Input-controlled movement components.
//!
//! [`PlatformerController`] describes how an entity responds to the keyboard:
//! the horizontal axis sets its run velocity and the jump key launches it while
//! it is [`Grounded`](super::grounded::Grounded). The
//! [`crate::systems::platformer::platformer_controller`] system applies it.

use bevy_ecs::prelude::Component;
use raylib::prelude::KeyboardKey;

/// Movement intent derived from player keyboard input.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlatformerController {
    /// Horizontal speed in world units per second at full axis deflection.
    pub speed: f32,
    /// Vertical velocity applied on jump (negative is up).
    pub jump_velocity: f32,
    pub left: KeyboardKey,
    pub right: KeyboardKey,
    /// Alternative horizontal bindings.
    pub alt_left: KeyboardKey,
    pub alt_right: KeyboardKey,
    pub jump: KeyboardKey,
}

impl PlatformerController {
    /// Controller bound to A/D (and the arrow keys) with Space to jump.
    pub fn new(speed: f32, jump_velocity: f32) -> Self {
        Self {
            speed,
            jump_velocity,
            left: KeyboardKey::KEY_A,
            right: KeyboardKey::KEY_D,
            alt_left: KeyboardKey::KEY_LEFT,
            alt_right: KeyboardKey::KEY_RIGHT,
            jump: KeyboardKey::KEY_SPACE,
        }
    }
}
