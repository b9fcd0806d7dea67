// Input manager - keyboard and mouse state for the single viewer user

use super::action::{default_bindings, Action};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which actions are held and which fired this frame.
///
/// Presses are edge-triggered: a physical key press produces exactly one
/// `just_pressed` event, no matter how long the key stays down or how many
/// OS repeats arrive. Discrete commands (record a keyframe, start playback,
/// toggle an animator) key off `just_pressed`; continuous ones (camera
/// movement, vendor walking) key off `is_pressed`.
pub struct InputManager {
    /// Key to action mapping
    bindings: HashMap<KeyCode, Action>,

    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last update
    just_pressed: HashSet<Action>,

    /// Mouse movement accumulated since the last update
    mouse_delta: (f32, f32),

    /// Scroll wheel movement accumulated since the last update
    scroll_delta: f32,

    /// First mouse event seeds the cursor position without a jump
    last_cursor: Option<(f32, f32)>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            last_cursor: None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                // Ignore OS key repeats so one press fires one event
                if !event.repeat && self.pressed.insert(action) {
                    self.just_pressed.insert(action);
                }
            }
            ElementState::Released => {
                self.pressed.remove(&action);
            }
        }
    }

    /// Process a cursor position event, accumulating a look delta
    pub fn process_cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.mouse_delta.0 += x - last_x;
            // Reversed: screen y grows downward
            self.mouse_delta.1 += last_y - y;
        }
        self.last_cursor = Some((x, y));
    }

    /// Process a scroll wheel event
    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
        };
    }

    /// Clear per-frame state. Call once per frame after all events have
    /// been consumed.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action fired this frame (once per physical press)
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Mouse look delta accumulated this frame
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Scroll delta accumulated this frame
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// True while any vendor drive key is held
    pub fn vendor_driving(&self) -> bool {
        self.is_pressed(Action::VendorForward)
            || self.is_pressed(Action::VendorBackward)
            || self.is_pressed(Action::VendorLeft)
            || self.is_pressed(Action::VendorRight)
            || self.is_pressed(Action::VendorTurnLeft)
            || self.is_pressed(Action::VendorTurnRight)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
