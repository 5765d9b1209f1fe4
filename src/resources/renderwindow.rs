//! Window and fixed-resolution render target.
//!
//! [`RenderWindow`] owns the raylib window handle and a render texture at the
//! game's internal resolution. Each frame the game draws into the render
//! texture, which is then scaled into the window with letterboxing.
//!
//! Creation happens in two stages (window, then render target). A window that
//! fails to open is fatal inside raylib itself, which panics. If the render
//! target fails the window is closed again before the error is returned, so a
//! caller never sees a half-built `RenderWindow`.
//!
//! # Note
//! This is a NonSend resource: raylib handles must stay on the main thread.

use std::path::Path;

use log::{info, warn};
use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::error::EngineError;
use crate::resources::gameconfig::GameConfig;

/// Color the game area is cleared to every frame.
pub const BACKGROUND: Color = Color::new(20, 20, 20, 255);

pub struct RenderWindow {
    // Field order is drop order: the render texture must be unloaded while the
    // window (and its GL context) is still alive.
    target: RenderTexture2D,
    rl: RaylibHandle,
    thread: RaylibThread,
    pub title: String,
    /// Game's internal render width in pixels.
    pub game_width: u32,
    /// Game's internal render height in pixels.
    pub game_height: u32,
}

impl RenderWindow {
    /// Open the window and create the render target described by `config`.
    pub fn create(config: &GameConfig) -> Result<Self, EngineError> {
        let mut builder = raylib::init();
        builder
            .size(config.window_width as i32, config.window_height as i32)
            .resizable()
            .title(&config.title);
        if config.vsync {
            builder.vsync();
        }
        // raylib panics itself if the window does not come up.
        let (mut rl, thread) = builder.build();

        let target = match rl.load_render_texture(&thread, config.render_width, config.render_height)
        {
            Ok(target) => target,
            Err(e) => {
                warn!("Render target failed, closing window '{}'", config.title);
                // Dropping the handle closes the window again.
                drop(rl);
                return Err(EngineError::RenderTargetCreation(format!("{}", e)));
            }
        };
        unsafe {
            ffi::SetTextureFilter(target.texture, TextureFilter::TEXTURE_FILTER_POINT as i32);
        }

        rl.set_target_fps(config.target_fps);

        info!(
            "Window '{}' ready: {}x{} window, {}x{} render",
            config.title,
            config.window_width,
            config.window_height,
            config.render_width,
            config.render_height
        );

        Ok(Self {
            target,
            rl,
            thread,
            title: config.title.clone(),
            game_width: config.render_width,
            game_height: config.render_height,
        })
    }

    pub fn handle(&self) -> &RaylibHandle {
        &self.rl
    }

    pub fn handle_mut(&mut self) -> &mut RaylibHandle {
        &mut self.rl
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    /// Seconds the last frame took.
    pub fn frame_time(&self) -> f32 {
        self.rl.get_frame_time()
    }

    /// Current window size in pixels.
    pub fn window_size(&self) -> (i32, i32) {
        (self.rl.get_screen_width(), self.rl.get_screen_height())
    }

    pub fn load_texture(&mut self, path: &Path) -> Result<Texture2D, String> {
        self.rl
            .load_texture(&self.thread, &path.to_string_lossy())
            .map_err(|e| format!("{}", e))
    }

    /// Draw one frame.
    ///
    /// The game area is cleared to [`BACKGROUND`], `draw` paints into it, and
    /// the result is presented letterboxed in the window. Presenting waits for
    /// vsync when it is enabled.
    pub fn render<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut RaylibTextureMode<RaylibDrawHandle>),
    {
        let (window_w, window_h) = self.window_size();
        let dest = letterbox(
            window_w as f32,
            window_h as f32,
            self.game_width as f32,
            self.game_height as f32,
        );
        let src = self.source_rect();

        let mut d = self.rl.begin_drawing(&self.thread);
        {
            let mut game = d.begin_texture_mode(&self.thread, &mut self.target);
            game.clear_background(BACKGROUND);
            draw(&mut game);
        }
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(&self.target, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        // EndDrawing (and the buffer swap) happens when `d` drops.
    }

    /// Map a window pixel position into game-area coordinates.
    pub fn window_to_game(&self, point: Vector2) -> Vector2 {
        let (window_w, window_h) = self.window_size();
        let dest = letterbox(
            window_w as f32,
            window_h as f32,
            self.game_width as f32,
            self.game_height as f32,
        );
        window_to_game(point, dest, self.game_width as f32, self.game_height as f32)
    }

    /// Source rectangle for the render texture.
    ///
    /// Negative height flips the Y axis, compensating for OpenGL's inverted
    /// texture coordinates.
    fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Release the render target, then close the window.
    pub fn destroy(self) {
        info!("Closing window '{}'", self.title);
        drop(self);
    }
}

/// Destination rectangle that fits a `game_w` x `game_h` image into the window
/// while keeping its aspect ratio, centered (pillarbox or letterbox bars).
pub fn letterbox(window_w: f32, window_h: f32, game_w: f32, game_h: f32) -> Rectangle {
    let game_aspect = game_w / game_h;
    let window_aspect = window_w / window_h;

    if window_aspect > game_aspect {
        // Window is wider than game - bars on the sides
        let scale = window_h / game_h;
        let scaled_w = game_w * scale;
        Rectangle {
            x: (window_w - scaled_w) / 2.0,
            y: 0.0,
            width: scaled_w,
            height: window_h,
        }
    } else {
        // Window is taller than game - bars top and bottom
        let scale = window_w / game_w;
        let scaled_h = game_h * scale;
        Rectangle {
            x: 0.0,
            y: (window_h - scaled_h) / 2.0,
            width: window_w,
            height: scaled_h,
        }
    }
}

/// Inverse of the letterbox mapping for a single point.
pub fn window_to_game(point: Vector2, dest: Rectangle, game_w: f32, game_h: f32) -> Vector2 {
    Vector2 {
        x: (point.x - dest.x) * game_w / dest.width,
        y: (point.y - dest.y) * game_h / dest.height,
    }
}
