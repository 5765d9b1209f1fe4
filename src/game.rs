//! Demo level: a side-scrolling platformer.
//!
//! A character runs and jumps on a single row of grass tiles spanning a world
//! wider than the window, with the camera following it. A second character
//! wanders freely and bounces off the world edges.
//!
//! [`build_frame_schedule`] wires every system in frame order:
//! input → controller → movement → landing → bounds → animation selection →
//! animation → camera → render.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::animationset::{AnimClip, AnimationSet};
use crate::components::boxcollider::BoxCollider;
use crate::components::grounded::Grounded;
use crate::components::inputcontrolled::PlatformerController;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::worldbound::{CameraTarget, WorldBound};
use crate::components::zindex::ZIndex;
use crate::error::EngineError;
use crate::resources::camera2d::Camera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::platformrow::PlatformRow;
use crate::resources::renderwindow::RenderWindow;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{TexKey, TextureStore};
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_controller};
use crate::systems::camera::camera_follow;
use crate::systems::collision::{keep_in_world_bounds, platform_landing};
use crate::systems::input::{log_world_clicks, switch_debug, update_input_state};
use crate::systems::movement::movement;
use crate::systems::platformer::platformer_controller;
use crate::systems::render::render_system;

pub const GRASS: TexKey = "ground_grass_1";
pub const CHR_FRONT: TexKey = "character_green_front";
pub const CHR_IDLE: TexKey = "character_green_idle";
pub const CHR_WALK_A: TexKey = "character_green_walk_a";
pub const CHR_WALK_B: TexKey = "character_green_walk_b";
pub const CHR_JUMP: TexKey = "character_green_jump";

const CHARACTER_TEXTURES: [TexKey; 5] = [CHR_FRONT, CHR_IDLE, CHR_WALK_A, CHR_WALK_B, CHR_JUMP];

// Statics, not consts: animation identity is the address of the frame list.
pub static ANIM_IDLE: [TexKey; 1] = [CHR_IDLE];
pub static ANIM_WALK: [TexKey; 2] = [CHR_WALK_A, CHR_WALK_B];
pub static ANIM_JUMP: [TexKey; 1] = [CHR_JUMP];

pub const PLAYER_START: Vector2 = Vector2 { x: 200.0, y: 100.0 };
const CRITTER_START: Vector2 = Vector2 { x: 600.0, y: 150.0 };
const CRITTER_VELOCITY: Vector2 = Vector2 { x: 140.0, y: 90.0 };

/// Clips used by the player character.
pub fn player_animations() -> AnimationSet {
    AnimationSet {
        idle: AnimClip::new(&ANIM_IDLE, 1.0),
        walk: AnimClip::new(&ANIM_WALK, 8.0),
        jump: AnimClip::new(&ANIM_JUMP, 1.0),
    }
}

/// Load every texture of the level from the assets directory.
///
/// The grass tile is scaled to the configured tile size and all character
/// sprites to the tile's draw size. Any failure aborts the whole load.
pub fn load_textures(
    window: &mut RenderWindow,
    config: &GameConfig,
) -> Result<TextureStore, EngineError> {
    let mut store = TextureStore::new();
    let path = |key: TexKey| config.assets_dir.join(format!("{}.png", key));

    let grass = store.load(window, GRASS, path(GRASS))?;
    grass.scale(config.tile_size, config.tile_size);
    let (tile_w, tile_h) = (grass.draw_w, grass.draw_h);

    for key in CHARACTER_TEXTURES {
        store.load(window, key, path(key))?.scale(tile_w, tile_h);
    }

    Ok(store)
}

/// Insert the level resources into `world` and spawn its entities.
///
/// `tile` is the on-screen size of one ground tile; characters use the same
/// size for their colliders.
pub fn setup_world(world: &mut World, config: &GameConfig, tile: Vector2) {
    let row = PlatformRow::spanning(config.world_width, config.platform_y, tile, GRASS);
    info!(
        "Level: world {}x{}, {} tiles at y={}",
        config.world_width, config.world_height, row.count, config.platform_y
    );

    let controller = PlatformerController::new(config.player_speed, config.jump_velocity);
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::new());
    world.insert_resource(Camera::default());
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(WorldBounds::new(config.world_width, config.world_height));
    world.insert_resource(row);

    spawn_player(world, PLAYER_START, tile, config.gravity, controller);
    spawn_critter(world, CRITTER_START, tile, CRITTER_VELOCITY);
}

pub fn spawn_player(
    world: &mut World,
    at: Vector2,
    size: Vector2,
    gravity: f32,
    controller: PlatformerController,
) -> Entity {
    let animations = player_animations();
    let mut sprite = Sprite::new();
    sprite.play(animations.idle.frames, animations.idle.fps);

    world
        .spawn((
            MapPosition::new(at.x, at.y),
            RigidBody::with_gravity(gravity),
            BoxCollider::new(size.x, size.y),
            Grounded::default(),
            controller,
            animations,
            sprite,
            WorldBound::Clamp,
            CameraTarget,
            ZIndex(1),
        ))
        .id()
}

/// A character with a fixed texture that roams and bounces off the world edges.
pub fn spawn_critter(world: &mut World, at: Vector2, size: Vector2, velocity: Vector2) -> Entity {
    let mut sprite = Sprite::new();
    sprite.set_texture(CHR_FRONT);

    world
        .spawn((
            MapPosition::new(at.x, at.y),
            RigidBody::with_velocity(velocity),
            BoxCollider::new(size.x, size.y),
            sprite,
            WorldBound::Bounce,
            ZIndex(0),
        ))
        .id()
}

/// Systems that advance the simulation, chained in frame order. They need no
/// window, so tests can run them directly.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            platformer_controller,
            movement,
            platform_landing,
            keep_in_world_bounds,
            animation_controller,
            animation,
            camera_follow,
        )
            .chain(),
    );
}

/// Full per-frame schedule: input sampling, simulation, then drawing.
pub fn build_frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (update_input_state, switch_debug, log_world_clicks)
            .chain()
            .before(platformer_controller),
    );
    add_simulation_systems(&mut schedule);
    schedule.add_systems(render_system.after(camera_follow));
    schedule
}
