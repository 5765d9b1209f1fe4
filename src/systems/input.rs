//! Input systems.
//!
//! - [`update_input_state`] samples raylib once per frame into
//!   [`InputState`](crate::resources::input::InputState).
//! - [`switch_debug`] toggles [`DebugMode`] on F11.
//! - [`log_world_clicks`] logs the world position of left clicks while in
//!   debug mode.
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::resources::camera2d::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::renderwindow::RenderWindow;

pub const DEBUG_TOGGLE_KEY: KeyboardKey = KeyboardKey::KEY_F11;

/// Poll raylib and shift the input snapshot by one frame.
pub fn update_input_state(mut input: ResMut<InputState>, window: NonSend<RenderWindow>) {
    input.update(window.handle());
}

pub fn switch_debug(
    mut commands: Commands,
    input: Res<InputState>,
    debug_mode: Option<Res<DebugMode>>,
) {
    if !input.is_pressed(DEBUG_TOGGLE_KEY) {
        return;
    }
    if debug_mode.is_some() {
        info!("Debug mode off");
        commands.remove_resource::<DebugMode>();
    } else {
        info!("Debug mode on");
        commands.insert_resource(DebugMode);
    }
}

pub fn log_world_clicks(
    input: Res<InputState>,
    camera: Res<Camera>,
    window: NonSend<RenderWindow>,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_none() || !input.is_mouse_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        return;
    }
    let screen = window.window_to_game(input.mouse_position());
    let world = camera.screen_to_world(screen);
    debug!(
        "Click at screen ({:.1}, {:.1}) world ({:.1}, {:.1})",
        screen.x, screen.y, world.x, world.y
    );
}
