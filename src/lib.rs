//! tilehop library.
//!
//! A small 2D engine scaffold on top of raylib and bevy_ecs: animation
//! cursors, AABB helpers, a double-buffered input snapshot, camera
//! follow/clamp, textures with a logical draw size and a window wrapper.
//! Exposed as a library for the demo binary and the integration tests.

pub mod components;
pub mod error;
pub mod game;
pub mod physics;
pub mod resources;
pub mod systems;
