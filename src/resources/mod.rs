//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles, asset stores, and level description.
//!
//! Overview
//! - `camera2d` – viewport position and world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – double-buffered keyboard/mouse snapshot with edge detection
//! - `platformrow` – the row of ground tiles of the level
//! - `renderwindow` – raylib window plus fixed-resolution render target
//! - `screensize` – internal render resolution (camera view size)
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldbounds` – extent of the playable world
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod platformrow;
pub mod renderwindow;
pub mod screensize;
pub mod texturestore;
pub mod worldbounds;
pub mod worldtime;
