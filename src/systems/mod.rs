//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering. [`crate::game`] wires them into one schedule in frame order.
//!
//! Submodules overview
//! - [`animation`] – pick clips from movement state and advance sprite animations
//! - [`camera`] – follow the camera target and clamp to the world
//! - [`collision`] – platform landing and world-bounds clamping/bouncing
//! - [`input`] – sample raylib into [`crate::resources::input::InputState`], debug toggles
//! - [`movement`] – integrate gravity and velocity
//! - [`platformer`] – translate input into run/jump velocity
//! - [`render`] – draw the level, sprites and debug overlay
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod collision;
pub mod input;
pub mod movement;
pub mod platformer;
pub mod render;
pub mod time;
