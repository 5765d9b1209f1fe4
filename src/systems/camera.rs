use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::worldbound::CameraTarget;
use crate::resources::camera2d::Camera;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldbounds::WorldBounds;

/// Center the camera on the [`CameraTarget`]'s collider, then clamp it to the
/// world. Without a target the camera stays where it is.
pub fn camera_follow(
    query: Query<(&MapPosition, &BoxCollider), With<CameraTarget>>,
    mut camera: ResMut<Camera>,
    screen: Res<ScreenSize>,
    bounds: Res<WorldBounds>,
) {
    let Some((position, collider)) = query.iter().next() else {
        return;
    };
    let view = screen.as_vector();
    camera.follow(collider.center(position.pos), view);
    camera.clamp(view, bounds.as_vector());
}
