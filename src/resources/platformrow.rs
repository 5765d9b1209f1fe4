//! The single row of ground tiles the demo level stands on.
//!
//! Tiles are not entities: the row is fully described by its origin, the tile
//! size and the tile count, and both collision and drawing only ever look at
//! a small index window of it.

use std::ops::Range;

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::texturestore::TexKey;

/// Tiles examined around a body for landing, starting two tiles to its left.
const COLLISION_WINDOW: i64 = 6;

#[derive(Resource, Clone, Copy, Debug)]
pub struct PlatformRow {
    /// World position of the first tile's top-left corner.
    pub origin: Vector2,
    pub tile_size: Vector2,
    pub count: usize,
    pub texture: TexKey,
}

impl PlatformRow {
    /// A row starting at `(0, y)` with enough tiles to span `world_width`.
    pub fn spanning(world_width: f32, y: f32, tile_size: Vector2, texture: TexKey) -> Self {
        let count = if tile_size.x > 0.0 {
            (world_width / tile_size.x) as usize
        } else {
            0
        };
        Self {
            origin: Vector2::new(0.0, y),
            tile_size,
            count,
            texture,
        }
    }

    /// World rectangle of tile `index`.
    pub fn tile_rect(&self, index: usize) -> Rectangle {
        Rectangle::new(
            self.origin.x + index as f32 * self.tile_size.x,
            self.origin.y,
            self.tile_size.x,
            self.tile_size.y,
        )
    }

    /// Tiles worth testing against a body whose left edge is at `x`.
    pub fn tiles_near(&self, x: f32) -> Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        let first = (((x - self.origin.x) / self.tile_size.x) as i64).saturating_sub(2);
        self.clamped(first, first.saturating_add(COLLISION_WINDOW))
    }

    /// Tiles that may be on screen for a camera at `cam_x` with a view
    /// `view_w` wide, with a margin on both sides.
    pub fn visible(&self, cam_x: f32, view_w: f32) -> Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        let first = ((cam_x / self.tile_size.x) as i64).saturating_sub(2);
        let last = first
            .saturating_add((view_w / self.tile_size.x) as i64)
            .saturating_add(6);
        self.clamped(first, last)
    }

    /// No tiles, or a tile width that cannot index anything.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || !(self.tile_size.x > 0.0)
    }

    fn clamped(&self, first: i64, last: i64) -> Range<usize> {
        let count = self.count as i64;
        let first = first.clamp(0, count);
        let last = last.clamp(first, count);
        first as usize..last as usize
    }
}
