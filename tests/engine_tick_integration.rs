//! Engine tick integration tests for movement, landing, animation, bounds and camera.

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};

use tilehop::components::boxcollider::BoxCollider;
use tilehop::components::grounded::Grounded;
use tilehop::components::inputcontrolled::PlatformerController;
use tilehop::components::mapposition::MapPosition;
use tilehop::components::rigidbody::RigidBody;
use tilehop::components::sprite::Sprite;
use tilehop::components::worldbound::WorldBound;
use tilehop::game::{self, CHR_FRONT, CHR_IDLE, CHR_JUMP, CHR_WALK_A, CHR_WALK_B, GRASS};
use tilehop::resources::camera2d::Camera;
use tilehop::resources::input::{InputDevice, InputState};
use tilehop::resources::platformrow::PlatformRow;
use tilehop::resources::screensize::ScreenSize;
use tilehop::resources::worldbounds::WorldBounds;
use tilehop::resources::worldtime::WorldTime;
use tilehop::systems::movement::movement;
use tilehop::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

/// 1/64 s keeps every per-tick step exactly representable.
const DT: f32 = 1.0 / 64.0;
const GRAVITY: f32 = 1024.0;
const SPEED: f32 = 220.0;
const JUMP: f32 = -650.0;
const PLATFORM_Y: f32 = 450.0;
const TILE: Vector2 = Vector2 { x: 64.0, y: 64.0 };
/// Player y with its bottom edge exactly on the platform.
const RESTING_Y: f32 = PLATFORM_Y - TILE.y;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Keyboard that reports exactly the listed keys as held.
#[derive(Default)]
struct Keys(Vec<KeyboardKey>);

impl InputDevice for Keys {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.0.contains(&key)
    }

    fn mouse_button_down(&self, _button: MouseButton) -> bool {
        false
    }

    fn mouse_position(&self) -> Vector2 {
        Vector2::zero()
    }
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(WorldBounds::new(3000.0, 600.0));
    world.insert_resource(Camera::default());
    world.insert_resource(PlatformRow::spanning(3000.0, PLATFORM_Y, TILE, GRASS));
    world.insert_resource(InputState::new());
    world
}

fn controller() -> PlatformerController {
    PlatformerController::new(SPEED, JUMP)
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    game::spawn_player(world, Vector2::new(x, y), TILE, GRAVITY, controller())
}

/// One simulation frame with `keys` held.
fn tick(world: &mut World, keys: &[KeyboardKey]) {
    world
        .resource_mut::<InputState>()
        .update(&Keys(keys.to_vec()));
    let mut schedule = Schedule::default();
    game::add_simulation_systems(&mut schedule);
    schedule.run(world);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn position(world: &World, entity: Entity) -> Vector2 {
    world.get::<MapPosition>(entity).map(|p| p.pos).unwrap()
}

fn velocity(world: &World, entity: Entity) -> Vector2 {
    world.get::<RigidBody>(entity).map(|rb| rb.velocity).unwrap()
}

fn grounded(world: &World, entity: Entity) -> bool {
    world.get::<Grounded>(entity).unwrap().0
}

fn texture(world: &World, entity: Entity) -> Option<&'static str> {
    world.get::<Sprite>(entity).unwrap().texture
}

// ==================== MOVEMENT ====================

#[test]
fn movement_applies_gravity_before_velocity() {
    let mut world = make_world(0.5);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody {
                velocity: Vector2::new(10.0, 0.0),
                gravity: 4.0,
            },
        ))
        .id();

    tick_movement(&mut world);

    assert!(approx_eq(velocity(&world, entity).y, 2.0));
    let pos = position(&world, entity);
    assert!(approx_eq(pos.x, 5.0));
    assert!(approx_eq(pos.y, 1.0));
}

#[test]
fn movement_without_gravity_is_linear() {
    let mut world = make_world(0.25);
    let entity = world
        .spawn((
            MapPosition::new(100.0, 100.0),
            RigidBody::with_velocity(Vector2::new(-40.0, 8.0)),
        ))
        .id();

    tick_movement(&mut world);
    tick_movement(&mut world);

    let pos = position(&world, entity);
    assert!(approx_eq(pos.x, 80.0));
    assert!(approx_eq(pos.y, 104.0));
}

// ==================== LANDING ====================

#[test]
fn falling_player_lands_on_platform() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 200.0, 300.0);

    let mut frames = 0;
    while !grounded(&world, player) {
        tick(&mut world, &[]);
        frames += 1;
        assert!(frames < 200, "player never landed");
    }

    assert!(approx_eq(position(&world, player).y, RESTING_Y));
    assert_eq!(velocity(&world, player).y, 0.0);
    assert_eq!(texture(&world, player), Some(CHR_IDLE));
}

#[test]
fn resting_player_stays_grounded_and_idle() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 200.0, RESTING_Y);

    for _ in 0..120 {
        tick(&mut world, &[]);
        assert!(grounded(&world, player));
        assert_eq!(position(&world, player).y, RESTING_Y);
        assert_eq!(velocity(&world, player).y, 0.0);
        assert_eq!(texture(&world, player), Some(CHR_IDLE));
    }
}

#[test]
fn player_beside_the_row_keeps_falling() {
    let mut world = make_world(DT);
    // Ten tiles, ending at x = 640.
    world.insert_resource(PlatformRow::spanning(640.0, PLATFORM_Y, TILE, GRASS));
    let player = spawn_player(&mut world, 1000.0, 300.0);

    for _ in 0..30 {
        tick(&mut world, &[]);
    }

    assert!(!grounded(&world, player));
    assert!(velocity(&world, player).y > 0.0);
    assert_eq!(texture(&world, player), Some(CHR_JUMP));
}

#[test]
fn zero_width_row_lets_player_fall() {
    let mut world = make_world(DT);
    world.insert_resource(PlatformRow::spanning(3000.0, PLATFORM_Y, Vector2::zero(), GRASS));
    let player = spawn_player(&mut world, 200.0, RESTING_Y);

    for _ in 0..10 {
        tick(&mut world, &[]);
    }

    assert!(!grounded(&world, player));
    assert!(position(&world, player).y > RESTING_Y);
}

#[test]
fn unbound_keys_are_sampled_too() {
    let mut world = make_world(DT);
    tick(&mut world, &[KeyboardKey::KEY_Q]);
    let input = world.resource::<InputState>();
    assert!(input.is_pressed(KeyboardKey::KEY_Q));
    assert!(!input.is_down(KeyboardKey::KEY_E));
}

// ==================== CONTROLLER ====================

#[test]
fn jump_only_from_the_ground() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 200.0, RESTING_Y);
    tick(&mut world, &[]);
    assert!(grounded(&world, player));

    tick(&mut world, &[KeyboardKey::KEY_SPACE]);
    let vy = velocity(&world, player).y;
    assert!(approx_eq(vy, JUMP + GRAVITY * DT));
    assert!(!grounded(&world, player));
    assert!(position(&world, player).y < RESTING_Y);
    assert_eq!(texture(&world, player), Some(CHR_JUMP));

    // A second press in mid-air does nothing.
    tick(&mut world, &[]);
    tick(&mut world, &[KeyboardKey::KEY_SPACE]);
    assert!(velocity(&world, player).y > vy);
}

#[test]
fn holding_jump_does_not_repeat() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 200.0, RESTING_Y);
    tick(&mut world, &[]);

    tick(&mut world, &[KeyboardKey::KEY_SPACE]);
    let mut vy = velocity(&world, player).y;
    for _ in 0..10 {
        tick(&mut world, &[KeyboardKey::KEY_SPACE]);
        let next = velocity(&world, player).y;
        assert!(next > vy);
        vy = next;
    }
}

#[test]
fn horizontal_keys_set_run_velocity() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 1000.0, RESTING_Y);
    tick(&mut world, &[]);

    tick(&mut world, &[KeyboardKey::KEY_D]);
    assert_eq!(velocity(&world, player).x, SPEED);
    assert!(approx_eq(position(&world, player).x, 1000.0 + SPEED * DT));

    tick(&mut world, &[KeyboardKey::KEY_LEFT]);
    assert_eq!(velocity(&world, player).x, -SPEED);

    // Both directions held cancel out.
    tick(&mut world, &[KeyboardKey::KEY_A, KeyboardKey::KEY_D]);
    assert_eq!(velocity(&world, player).x, 0.0);

    tick(&mut world, &[]);
    assert_eq!(velocity(&world, player).x, 0.0);
}

// ==================== ANIMATION ====================

#[test]
fn walking_cycles_walk_frames() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 200.0, RESTING_Y);
    tick(&mut world, &[]);

    let right = [KeyboardKey::KEY_D];
    tick(&mut world, &right);
    assert!(grounded(&world, player));
    assert_eq!(texture(&world, player), Some(CHR_WALK_A));

    // 8 fps: the second frame shows once 1/8 s has accumulated.
    for _ in 0..6 {
        tick(&mut world, &right);
        assert_eq!(texture(&world, player), Some(CHR_WALK_A));
    }
    tick(&mut world, &right);
    assert_eq!(texture(&world, player), Some(CHR_WALK_B));

    for _ in 0..8 {
        tick(&mut world, &right);
    }
    assert_eq!(texture(&world, player), Some(CHR_WALK_A));

    tick(&mut world, &[]);
    assert_eq!(texture(&world, player), Some(CHR_IDLE));
}

#[test]
fn critter_keeps_its_fixed_texture() {
    let mut world = make_world(DT);
    let critter = game::spawn_critter(
        &mut world,
        Vector2::new(600.0, 150.0),
        TILE,
        Vector2::new(140.0, 90.0),
    );

    for _ in 0..10 {
        tick(&mut world, &[]);
    }

    assert_eq!(texture(&world, critter), Some(CHR_FRONT));
}

// ==================== WORLD BOUNDS ====================

#[test]
fn player_is_clamped_to_world() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 2990.0, RESTING_Y);

    tick(&mut world, &[KeyboardKey::KEY_D]);
    assert_eq!(position(&world, player).x, 3000.0 - TILE.x);

    let left = spawn_player(&mut world, -30.0, RESTING_Y);
    tick(&mut world, &[]);
    assert_eq!(position(&world, left).x, 0.0);
}

#[test]
fn clamped_body_without_rigidbody() {
    let mut world = make_world(DT);
    let entity = world
        .spawn((
            MapPosition::new(-5.0, 590.0),
            BoxCollider::new(20.0, 20.0),
            WorldBound::Clamp,
        ))
        .id();

    tick(&mut world, &[]);

    let pos = position(&world, entity);
    assert_eq!((pos.x, pos.y), (0.0, 580.0));
}

#[test]
fn critter_bounces_off_right_edge() {
    let mut world = make_world(DT);
    let critter = game::spawn_critter(
        &mut world,
        Vector2::new(2935.0, 100.0),
        TILE,
        Vector2::new(140.0, 0.0),
    );

    tick(&mut world, &[]);

    assert_eq!(position(&world, critter).x, 3000.0 - TILE.x);
    assert_eq!(velocity(&world, critter).x, -140.0);

    tick(&mut world, &[]);
    assert!(position(&world, critter).x < 3000.0 - TILE.x);
}

#[test]
fn critter_bounces_off_top_edge() {
    let mut world = make_world(DT);
    let critter = game::spawn_critter(
        &mut world,
        Vector2::new(600.0, 1.0),
        TILE,
        Vector2::new(0.0, -128.0),
    );

    tick(&mut world, &[]);

    assert_eq!(position(&world, critter).y, 0.0);
    assert_eq!(velocity(&world, critter).y, 128.0);
}

// ==================== CAMERA ====================

#[test]
fn camera_centers_on_player() {
    let mut world = make_world(DT);
    spawn_player(&mut world, 1500.0, RESTING_Y);

    tick(&mut world, &[]);

    let cam = world.resource::<Camera>().pos;
    // Center x 1532 minus half the view; y is pinned because world == view.
    assert_eq!((cam.x, cam.y), (1132.0, 0.0));
}

#[test]
fn camera_clamps_at_world_edges() {
    let mut world = make_world(DT);
    let player = spawn_player(&mut world, 10.0, RESTING_Y);

    tick(&mut world, &[]);
    assert_eq!(world.resource::<Camera>().pos.x, 0.0);

    world.get_mut::<MapPosition>(player).unwrap().pos.x = 2936.0;
    tick(&mut world, &[]);
    assert_eq!(world.resource::<Camera>().pos.x, 3000.0 - 800.0);
}

#[test]
fn camera_pinned_when_world_smaller_than_view() {
    let mut world = make_world(DT);
    world.insert_resource(WorldBounds::new(500.0, 400.0));
    world.insert_resource(PlatformRow::spanning(500.0, 300.0, TILE, GRASS));
    spawn_player(&mut world, 400.0, 236.0);

    tick(&mut world, &[]);

    let cam = world.resource::<Camera>().pos;
    assert_eq!((cam.x, cam.y), (0.0, 0.0));
}

#[test]
fn camera_without_target_stays_put() {
    let mut world = make_world(DT);
    world.insert_resource(Camera::new(42.0, 7.0));

    tick(&mut world, &[]);

    let cam = world.resource::<Camera>().pos;
    assert_eq!((cam.x, cam.y), (42.0, 7.0));
}

// ==================== TIME ====================

#[test]
fn world_time_applies_time_scale() {
    let mut world = make_world(0.0);
    world.resource_mut::<WorldTime>().time_scale = 2.0;

    update_world_time(&mut world, 0.5);
    update_world_time(&mut world, 0.25);

    let time = *world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.5));
    assert!(approx_eq(time.elapsed, 1.5));
    assert_eq!(time.frame_count, 2);
}
