//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity of an entity and a constant downward
//! acceleration. The movement system integrates both into
//! [`MapPosition`](super::mapposition::MapPosition) each frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity and gravity.
///
/// # Example
/// ```ignore
/// let rb = RigidBody::with_gravity(1800.0);
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no gravity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            gravity: 0.0,
        }
    }

    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::new()
        }
    }

    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }
}
