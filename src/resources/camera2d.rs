//! Shared 2D camera resource.
//!
//! The camera position is the world-space top-left corner of the visible
//! viewport. Drawing code converts world positions to screen positions with
//! [`Camera::world_to_screen`]; there is no zoom or rotation.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Camera {
    pub pos: Vector2,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        world - self.pos
    }

    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        screen + self.pos
    }

    /// Center the view on `target`. No smoothing: the camera snaps.
    pub fn follow(&mut self, target: Vector2, view: Vector2) {
        self.pos = target - view.scale_by(0.5);
    }

    /// Keep the view inside `[0, 0]-[world.x, world.y]`.
    ///
    /// On an axis where the world is not larger than the view the camera is
    /// pinned to 0, so nothing past the far edge of the world is shown.
    pub fn clamp(&mut self, view: Vector2, world: Vector2) {
        self.pos.x = clamp_axis(self.pos.x, view.x, world.x);
        self.pos.y = clamp_axis(self.pos.y, view.y, world.y);
    }
}

fn clamp_axis(cam: f32, view: f32, world: f32) -> f32 {
    if world <= view {
        0.0
    } else {
        cam.clamp(0.0, world - view)
    }
}
