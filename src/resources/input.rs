//! Per-frame keyboard and mouse input resource.
//!
//! [`InputState`] keeps two snapshots of the input devices: the one sampled
//! this frame and the one from the frame before. "Pressed" and "released" are
//! the rising and falling edges between the two. The state is refreshed once
//! per frame by [`crate::systems::input::update_input_state`] and read by
//! gameplay systems as a normal ECS resource.
//!
//! Every key code raylib knows is sampled, so any key can be queried without
//! prior setup.
use bevy_ecs::prelude::*;
use raylib::core::input::key_from_i32;
use raylib::prelude::*;
use smallvec::SmallVec;

/// Number of key slots tracked. Raylib key codes stay below this.
const KEY_SLOTS: usize = 512;

/// Source of raw device state, sampled once per frame.
///
/// Raylib's [`RaylibHandle`] is the production device; tests feed scripted
/// states instead.
pub trait InputDevice {
    fn key_down(&self, key: KeyboardKey) -> bool;
    fn mouse_button_down(&self, button: MouseButton) -> bool;
    fn mouse_position(&self) -> Vector2;
}

impl InputDevice for RaylibHandle {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.is_key_down(key)
    }

    fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.is_mouse_button_down(button)
    }

    fn mouse_position(&self) -> Vector2 {
        self.get_mouse_position()
    }
}

/// Every mouse button raylib reports.
pub const MOUSE_BUTTONS: [MouseButton; 7] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_RIGHT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
    MouseButton::MOUSE_BUTTON_SIDE,
    MouseButton::MOUSE_BUTTON_EXTRA,
    MouseButton::MOUSE_BUTTON_FORWARD,
    MouseButton::MOUSE_BUTTON_BACK,
];

/// Every raylib key code, in code order.
fn all_keys() -> SmallVec<[KeyboardKey; 128]> {
    (1..KEY_SLOTS as i32)
        .filter_map(key_from_i32)
        .filter(|&key| key != KeyboardKey::KEY_NULL)
        .collect()
}

/// Double-buffered keyboard and mouse snapshot.
#[derive(Resource, Clone)]
pub struct InputState {
    keys: SmallVec<[KeyboardKey; 128]>,
    current_keys: Box<[bool; KEY_SLOTS]>,
    previous_keys: Box<[bool; KEY_SLOTS]>,
    current_mouse: u32,
    previous_mouse: u32,
    mouse_position: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn key_slot(key: KeyboardKey) -> Option<usize> {
    let slot = key as usize;
    (slot < KEY_SLOTS).then_some(slot)
}

fn mouse_mask(button: MouseButton) -> u32 {
    1u32 << (button as u32)
}

impl InputState {
    /// Input state with every key and button up.
    pub fn new() -> Self {
        Self {
            keys: all_keys(),
            current_keys: Box::new([false; KEY_SLOTS]),
            previous_keys: Box::new([false; KEY_SLOTS]),
            current_mouse: 0,
            previous_mouse: 0,
            mouse_position: Vector2::zero(),
        }
    }

    /// Key codes sampled on every update.
    pub fn sampled_keys(&self) -> &[KeyboardKey] {
        &self.keys
    }

    /// Shift this frame's snapshot into the previous buffer and sample the
    /// device again. Call exactly once per frame.
    pub fn update(&mut self, device: &impl InputDevice) {
        *self.previous_keys = *self.current_keys;
        self.previous_mouse = self.current_mouse;

        for &key in &self.keys {
            if let Some(slot) = key_slot(key) {
                self.current_keys[slot] = device.key_down(key);
            }
        }

        self.current_mouse = MOUSE_BUTTONS
            .iter()
            .filter(|&&button| device.mouse_button_down(button))
            .fold(0, |mask, &button| mask | mouse_mask(button));

        self.mouse_position = device.mouse_position();
    }

    pub fn is_down(&self, key: KeyboardKey) -> bool {
        key_slot(key).is_some_and(|slot| self.current_keys[slot])
    }

    /// Down this frame, up the frame before.
    pub fn is_pressed(&self, key: KeyboardKey) -> bool {
        key_slot(key).is_some_and(|slot| self.current_keys[slot] && !self.previous_keys[slot])
    }

    /// Up this frame, down the frame before.
    pub fn is_released(&self, key: KeyboardKey) -> bool {
        key_slot(key).is_some_and(|slot| !self.current_keys[slot] && self.previous_keys[slot])
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.current_mouse & mouse_mask(button) != 0
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        let mask = mouse_mask(button);
        self.current_mouse & mask != 0 && self.previous_mouse & mask == 0
    }

    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        let mask = mouse_mask(button);
        self.current_mouse & mask == 0 && self.previous_mouse & mask != 0
    }

    /// Latest cursor position in window pixels.
    pub fn mouse_position(&self) -> Vector2 {
        self.mouse_position
    }

    /// `-1.0` while only `negative` is held, `1.0` while only `positive` is
    /// held, `0.0` otherwise.
    pub fn axis(&self, negative: KeyboardKey, positive: KeyboardKey) -> f32 {
        let mut value = 0.0;
        if self.is_down(negative) {
            value -= 1.0;
        }
        if self.is_down(positive) {
            value += 1.0;
        }
        value
    }
}
