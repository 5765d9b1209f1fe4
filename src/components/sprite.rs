use bevy_ecs::prelude::Component;

use crate::components::animation::Animation;
use crate::resources::texturestore::TexKey;

/// What an entity draws this frame and how that choice is animated.
///
/// `texture` is a non-owning key into the
/// [`TextureStore`](crate::resources::texturestore::TextureStore). It is either
/// set directly with [`Sprite::set_texture`] (which drops any animation) or
/// republished from the animation cursor by [`Sprite::play`],
/// [`Sprite::reset`] and [`Sprite::update`].
#[derive(Component, Clone, Debug, Default)]
pub struct Sprite {
    pub texture: Option<TexKey>,
    pub animation: Animation<'static, TexKey>,
}

impl Sprite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprite showing a single texture.
    pub fn with_texture(texture: TexKey) -> Self {
        Self {
            texture: Some(texture),
            animation: Animation::new(),
        }
    }

    /// Show `texture` directly; any active animation is cleared.
    pub fn set_texture(&mut self, texture: TexKey) {
        self.texture = Some(texture);
        self.animation.clear();
    }

    /// Play `frames` at `fps`. Safe to call every frame with the same
    /// animation: playback only restarts when the animation changes.
    pub fn play(&mut self, frames: &'static [TexKey], fps: f32) {
        if let Some(frame) = self.animation.play(frames, fps) {
            self.texture = Some(frame);
        }
    }

    /// Pause on the current frame; the displayed texture stays.
    pub fn stop(&mut self) {
        self.animation.stop();
    }

    pub fn reset(&mut self) {
        if let Some(frame) = self.animation.reset() {
            self.texture = Some(frame);
        }
    }

    /// Advance the animation by `dt` seconds and refresh the displayed texture.
    pub fn update(&mut self, dt: f32) {
        if let Some(frame) = self.animation.advance(dt) {
            self.texture = Some(frame);
        }
    }
}
