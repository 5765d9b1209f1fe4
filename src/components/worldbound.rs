//! Keeps entities inside the world rectangle.

use bevy_ecs::prelude::Component;

/// How an entity reacts when it leaves [`WorldBounds`](crate::resources::worldbounds::WorldBounds).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldBound {
    /// Push the collider back inside; velocity is untouched.
    Clamp,
    /// Push back inside and reflect the velocity on the corrected axis.
    Bounce,
}

/// Marker for the entity the camera follows.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
