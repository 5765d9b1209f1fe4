//! Render system.
//!
//! Draws the visible part of the platform row, then every sprite in
//! [`ZIndex`] order, all shifted by the camera. In debug mode collider
//! outlines and a text overlay are drawn on top.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::platformrow::PlatformRow;
use crate::resources::renderwindow::RenderWindow;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut window: NonSendMut<RenderWindow>,
    textures: Res<TextureStore>,
    camera: Res<Camera>,
    row: Res<PlatformRow>,
    screen: Res<ScreenSize>,
    input: Res<InputState>,
    sprites: Query<(&MapPosition, &Sprite, Option<&ZIndex>)>,
    colliders: Query<(&MapPosition, &BoxCollider)>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let cam = *camera;

    let mut to_draw: Vec<(MapPosition, &Sprite, ZIndex)> = sprites
        .iter()
        .filter(|(_, sprite, _)| sprite.texture.is_some())
        .map(|(p, s, z)| (*p, s, z.copied().unwrap_or_default()))
        .collect();
    to_draw.sort_by_key(|(_, _, z)| *z);

    // Debug text is prepared before drawing starts; it needs the window.
    let overlay = debug_mode.is_some().then(|| {
        let mouse_screen = window.window_to_game(input.mouse_position());
        let mouse_world = cam.screen_to_world(mouse_screen);
        [
            format!(
                "DEBUG MODE (F11) | FPS: {}",
                window.handle().get_fps()
            ),
            format!("Camera pos: ({:.1}, {:.1})", cam.pos.x, cam.pos.y),
            format!(
                "Mouse screen: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
                mouse_screen.x, mouse_screen.y, mouse_world.x, mouse_world.y
            ),
        ]
    });

    window.render(|d| {
        if let Some(tile) = textures.get(row.texture) {
            let visible = row.visible(cam.pos.x, screen.w as f32);
            let first = row.tile_rect(visible.start);
            let at = cam.world_to_screen(Vector2::new(first.x, first.y));
            tile.draw_row(d, at.x, at.y, visible.len());
        }

        for (position, sprite, _z) in to_draw.iter() {
            let Some(texture) = sprite.texture.and_then(|key| textures.get(key)) else {
                continue;
            };
            let at = cam.world_to_screen(position.pos);
            texture.draw(d, at.x as i32, at.y as i32);
        }

        if let Some(lines) = overlay {
            for (position, collider) in colliders.iter() {
                let rect = collider.rect(position.pos);
                let at = cam.world_to_screen(Vector2::new(rect.x, rect.y));
                d.draw_rectangle_lines(
                    at.x as i32,
                    at.y as i32,
                    rect.width as i32,
                    rect.height as i32,
                    Color::RED,
                );
            }
            for (i, line) in lines.iter().enumerate() {
                d.draw_text(line, 10, 10 + 20 * i as i32, 10, Color::RAYWHITE);
            }
        }
    });
}
