use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Extent of the playable world, from `(0, 0)` to `(w, h)`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldBounds {
    pub w: f32,
    pub h: f32,
}

impl WorldBounds {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub fn as_vector(&self) -> Vector2 {
        Vector2::new(self.w, self.h)
    }
}
