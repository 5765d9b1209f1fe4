//! Screen size resource.
//!
//! Stores the game's internal render resolution in pixels. It is also the
//! size of the camera view.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Internal render size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vector(&self) -> Vector2 {
        Vector2::new(self.w as f32, self.h as f32)
    }
}
