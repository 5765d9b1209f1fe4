//! Loaded textures and their draw sizes.
//!
//! [`GameTexture`] wraps a raylib [`Texture2D`] together with its natural pixel
//! size and a separate draw size (the on-screen footprint). Scaling only ever
//! changes the draw size; the GPU texture is untouched.
//!
//! [`TextureStore`] owns every texture the game loaded, keyed by a static
//! string. Sprites refer to textures by key only.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::resources::renderwindow::RenderWindow;

/// Key of a texture in the [`TextureStore`].
pub type TexKey = &'static str;

pub struct GameTexture {
    texture: Option<Texture2D>,
    pub width: i32,
    pub height: i32,
    pub draw_w: i32,
    pub draw_h: i32,
}

impl GameTexture {
    /// Decode the image at `path` into a GPU texture.
    ///
    /// The draw size starts equal to the natural size. On failure nothing is
    /// kept and the error carries raylib's reason.
    pub fn load(window: &mut RenderWindow, path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let texture = window
            .load_texture(path)
            .map_err(|reason| EngineError::TextureLoad {
                path: path.to_path_buf(),
                reason,
            })?;

        let (width, height) = (texture.width, texture.height);
        debug!("Loaded texture {:?} ({}x{})", path, width, height);

        Ok(Self::from_texture(texture, width, height))
    }

    fn from_texture(texture: Texture2D, width: i32, height: i32) -> Self {
        Self {
            texture: Some(texture),
            width,
            height,
            draw_w: width,
            draw_h: height,
        }
    }

    /// Texture with a size but no GPU resource; draws nothing.
    pub fn placeholder(width: i32, height: i32) -> Self {
        Self {
            texture: None,
            width,
            height,
            draw_w: width,
            draw_h: height,
        }
    }

    /// Set the draw size in pixels.
    pub fn scale(&mut self, w: i32, h: i32) {
        self.draw_w = w;
        self.draw_h = h;
    }

    /// Set the draw size as a fraction of the natural size (truncated).
    pub fn scale_fraction(&mut self, sx: f32, sy: f32) {
        self.draw_w = (self.width as f32 * sx) as i32;
        self.draw_h = (self.height as f32 * sy) as i32;
    }

    pub fn draw_size(&self) -> Vector2 {
        Vector2::new(self.draw_w as f32, self.draw_h as f32)
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Release the GPU texture. Calling it again does nothing.
    pub fn destroy(&mut self) {
        // Texture2D unloads itself on drop
        self.texture.take();
    }

    /// Blit at integer device coordinates using the draw size.
    pub fn draw<D: RaylibDraw>(&self, d: &mut D, x: i32, y: i32) {
        let Some(texture) = self.texture.as_ref() else {
            return;
        };
        let src = Rectangle::new(0.0, 0.0, self.width as f32, self.height as f32);
        let dest = Rectangle::new(x as f32, y as f32, self.draw_w as f32, self.draw_h as f32);
        d.draw_texture_pro(texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    /// Draw `count` copies side by side, stepping by the draw width.
    pub fn draw_row<D: RaylibDraw>(&self, d: &mut D, x: f32, y: f32, count: usize) {
        self.draw_grid(d, x, y, count, 1);
    }

    /// Draw a `cols` by `rows` grid, stepping by the draw size.
    pub fn draw_grid<D: RaylibDraw>(&self, d: &mut D, x: f32, y: f32, cols: usize, rows: usize) {
        for (cx, cy) in self.grid_positions(x, y, cols, rows) {
            self.draw(d, cx, cy);
        }
    }

    /// Top-left corners of a `cols` by `rows` grid starting at `(x, y)`,
    /// row by row.
    pub fn grid_positions(
        &self,
        x: f32,
        y: f32,
        cols: usize,
        rows: usize,
    ) -> impl Iterator<Item = (i32, i32)> {
        let (sx, sy) = (self.draw_w as f32, self.draw_h as f32);
        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| ((x + col as f32 * sx) as i32, (y + row as f32 * sy) as i32))
        })
    }
}

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<TexKey, GameTexture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and store it under `key`, replacing any previous texture.
    pub fn load(
        &mut self,
        window: &mut RenderWindow,
        key: TexKey,
        path: impl AsRef<Path>,
    ) -> Result<&mut GameTexture, EngineError> {
        let texture = GameTexture::load(window, path)?;
        info!("Texture '{}' ready ({}x{})", key, texture.width, texture.height);
        Ok(self.map.entry(key).insert_entry(texture).into_mut())
    }

    pub fn insert(&mut self, key: TexKey, texture: GameTexture) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: TexKey) -> Option<&GameTexture> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: TexKey) -> Option<&mut GameTexture> {
        self.map.get_mut(key)
    }

    /// Release every GPU texture. Must run before the window closes.
    pub fn destroy_all(&mut self) {
        for texture in self.map.values_mut() {
            texture.destroy();
        }
        info!("Released {} textures", self.map.len());
    }
}
