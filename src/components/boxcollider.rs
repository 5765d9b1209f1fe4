use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::physics;

/// Axis-aligned box attached to an entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle of the collider for a given entity position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        let min = position + self.offset;
        Rectangle::new(min.x, min.y, self.size.x, self.size.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        physics::overlaps(&self.rect(position), &other.rect(other_position))
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        physics::point_in_rect(point, &self.rect(position))
    }

    /// World-space center of the collider.
    pub fn center(&self, position: Vector2) -> Vector2 {
        position + self.offset + self.size.scale_by(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_applies_offset() {
        let c = BoxCollider::new(10.0, 20.0).with_offset(Vector2::new(2.0, 3.0));
        let r = c.rect(Vector2::new(100.0, 50.0));
        assert_eq!((r.x, r.y, r.width, r.height), (102.0, 53.0, 10.0, 20.0));
    }

    #[test]
    fn test_touching_colliders_do_not_overlap() {
        let c = BoxCollider::new(10.0, 10.0);
        assert!(!c.overlaps(Vector2::new(0.0, 0.0), &c, Vector2::new(10.0, 0.0)));
        assert!(c.overlaps(Vector2::new(0.0, 0.0), &c, Vector2::new(9.5, 0.0)));
    }

    #[test]
    fn test_contains_point_uses_position() {
        let c = BoxCollider::new(10.0, 10.0);
        let pos = Vector2::new(5.0, 5.0);
        assert!(c.contains_point(pos, Vector2::new(5.0, 5.0)));
        assert!(!c.contains_point(pos, Vector2::new(15.0, 5.0)));
    }

    #[test]
    fn test_center() {
        let c = BoxCollider::new(64.0, 32.0);
        let center = c.center(Vector2::new(100.0, 0.0));
        assert_eq!((center.x, center.y), (132.0, 16.0));
    }
}
