//! Game configuration resource.
//!
//! Settings are loaded from an INI file. Every key is optional: anything
//! missing keeps its default, and a missing file leaves the defaults intact.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = Camera + Animation Test
//! target_fps = 60
//! vsync = true
//!
//! [render]
//! width = 800
//! height = 600
//!
//! [world]
//! width = 3000
//! height = 600
//! platform_y = 450
//! tile_size = 64
//!
//! [player]
//! speed = 220
//! gravity = 1800
//! jump_velocity = -650
//!
//! [assets]
//! dir = res/gfx
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::EngineError;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TITLE: &str = "Camera + Animation Test";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_WORLD_WIDTH: f32 = 3000.0;
const DEFAULT_WORLD_HEIGHT: f32 = 600.0;
const DEFAULT_PLATFORM_Y: f32 = 450.0;
const DEFAULT_TILE_SIZE: i32 = 64;
const DEFAULT_PLAYER_SPEED: f32 = 220.0;
const DEFAULT_GRAVITY: f32 = 1800.0;
const DEFAULT_JUMP_VELOCITY: f32 = -650.0;
const DEFAULT_ASSETS_DIR: &str = "res/gfx";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Internal render width in pixels; also the camera view width.
    pub render_width: u32,
    /// Internal render height in pixels; also the camera view height.
    pub render_height: u32,
    pub world_width: f32,
    pub world_height: f32,
    /// World-space y of the top edge of the platform row.
    pub platform_y: f32,
    /// Edge length tiles and characters are scaled to.
    pub tile_size: i32,
    pub player_speed: f32,
    pub gravity: f32,
    /// Vertical velocity on jump; negative is up.
    pub jump_velocity: f32,
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            render_width: DEFAULT_WINDOW_WIDTH,
            render_height: DEFAULT_WINDOW_HEIGHT,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            platform_y: DEFAULT_PLATFORM_Y,
            tile_size: DEFAULT_TILE_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            EngineError::Config(format!("failed to load {:?}: {}", self.config_path, e))
        })?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, {}x{} render, world {}x{}, fps={}, vsync={}",
            self.window_width,
            self.window_height,
            self.render_width,
            self.render_height,
            self.world_width,
            self.world_height,
            self.target_fps,
            self.vsync
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| EngineError::Config(format!("failed to parse config: {}", e)))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
            // Render size follows the window unless [render] says otherwise
            self.render_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
            self.render_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [render] section
        if let Some(width) = uint("render", "width") {
            self.render_width = width as u32;
        }
        if let Some(height) = uint("render", "height") {
            self.render_height = height as u32;
        }

        // [world] section
        if let Some(width) = float("world", "width") {
            self.world_width = width as f32;
        }
        if let Some(height) = float("world", "height") {
            self.world_height = height as f32;
        }
        if let Some(y) = float("world", "platform_y") {
            self.platform_y = y as f32;
        }
        match uint("world", "tile_size") {
            Some(0) => warn!("Ignoring tile_size = 0, keeping {}", self.tile_size),
            Some(size) => self.tile_size = size.min(i32::MAX as u64) as i32,
            None => {}
        }

        // [player] section
        if let Some(speed) = float("player", "speed") {
            self.player_speed = speed as f32;
        }
        if let Some(gravity) = float("player", "gravity") {
            self.gravity = gravity as f32;
        }
        if let Some(jump) = float("player", "jump_velocity") {
            self.jump_velocity = jump as f32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), EngineError> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));
        config.set("world", "platform_y", Some(self.platform_y.to_string()));
        config.set("world", "tile_size", Some(self.tile_size.to_string()));

        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "gravity", Some(self.gravity.to_string()));
        config.set("player", "jump_velocity", Some(self.jump_velocity.to_string()));

        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        config.write(&self.config_path).map_err(|e| {
            EngineError::Config(format!("failed to save {:?}: {}", self.config_path, e))
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
