//! Debug overlay toggle.
//!
//! While this resource exists the renderer outlines colliders and prints the
//! camera, FPS and mouse position, and left clicks are logged in world space.
//! F11 inserts or removes it at runtime.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
