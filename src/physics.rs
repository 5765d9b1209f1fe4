//! Axis-aligned collision and bounds helpers.
//!
//! All rectangles are `raylib` [`Rectangle`]s in world units with `x`/`y` at the
//! top-left corner. Every test here is half-open: a rectangle covers
//! `[x, x + width)` by `[y, y + height)`, so two rectangles that only share an
//! edge do not overlap.

use raylib::prelude::{Rectangle, Vector2};

/// AABB vs AABB overlap test.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    !(a.x + a.width <= b.x
        || a.x >= b.x + b.width
        || a.y + a.height <= b.y
        || a.y >= b.y + b.height)
}

/// Point containment, half-open on all four edges.
pub fn point_in_rect(point: Vector2, rect: &Rectangle) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Keep a `size` rectangle at `position` inside `[0, 0]-[bounds.x, bounds.y]`.
///
/// Only the position changes. Axes are independent; the left/top edge is fixed
/// first, then the right/bottom edge.
pub fn clamp_to_bounds(position: &mut Vector2, size: Vector2, bounds: Vector2) {
    if position.x < 0.0 {
        position.x = 0.0;
    }
    if position.y < 0.0 {
        position.y = 0.0;
    }

    if position.x + size.x > bounds.x {
        position.x = bounds.x - size.x;
    }
    if position.y + size.y > bounds.y {
        position.y = bounds.y - size.y;
    }
}

/// Like [`clamp_to_bounds`], but any axis that gets corrected also has its
/// velocity component negated.
pub fn bounce_off_bounds(
    position: &mut Vector2,
    velocity: &mut Vector2,
    size: Vector2,
    bounds: Vector2,
) {
    if position.x < 0.0 {
        position.x = 0.0;
        velocity.x = -velocity.x;
    } else if position.x + size.x > bounds.x {
        position.x = bounds.x - size.x;
        velocity.x = -velocity.x;
    }

    if position.y < 0.0 {
        position.y = 0.0;
        velocity.y = -velocity.y;
    } else if position.y + size.y > bounds.y {
        position.y = bounds.y - size.y;
        velocity.y = -velocity.y;
    }
}

/// Top-only landing test used by platform collision.
///
/// `body` has already been moved this tick by `velocity_y * dt`. The body lands
/// on `tile` when it overlaps it, is falling, and its bottom edge one tick ago
/// was at or above the tile's top edge.
///
/// The previous bottom edge is reconstructed from the current velocity, so a
/// fast fall (or a long frame) can skip over a tile entirely.
pub fn landed_on(body: &Rectangle, velocity_y: f32, dt: f32, tile: &Rectangle) -> bool {
    if !overlaps(body, tile) || velocity_y <= 0.0 {
        return false;
    }
    let previous_bottom = body.y + body.height - velocity_y * dt;
    previous_bottom <= tile.y
}
