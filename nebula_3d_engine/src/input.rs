//! Input state tracking
//!
//! Engine-level key/mouse-button codes and the per-application
//! [`InputState`] tracker. The window shell feeds press/release
//! transitions in; per-frame logic polls "is currently held".

/// Keyboard key codes understood by the engine
///
/// A deliberately small, dense set: enough for first-person camera
/// controls and editor hotkeys. Window backends translate their own
/// codes into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeyCode {
    Space = 0,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    LeftShift,
    LeftControl,
    LeftAlt,
    RightShift,
    RightControl,
    RightAlt,
}

impl KeyCode {
    /// Number of key codes (size of the held-state table)
    pub const COUNT: usize = KeyCode::RightAlt as usize + 1;
}

/// Mouse button codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum MouseButton {
    Left = 0,
    Right,
    Middle,
}

impl MouseButton {
    /// Number of mouse buttons tracked
    pub const COUNT: usize = MouseButton::Middle as usize + 1;
}

/// Held-state tracker for keyboard and mouse
///
/// A plain owned struct: the application owns one and shares it with its
/// event listeners. No global state.
#[derive(Debug, Clone)]
pub struct InputState {
    keys_pressed: [bool; KeyCode::COUNT],
    mouse_buttons_pressed: [bool; MouseButton::COUNT],
    cursor_x: f64,
    cursor_y: f64,
}

impl InputState {
    /// Create a tracker with nothing held and the cursor at the origin
    pub fn new() -> Self {
        Self {
            keys_pressed: [false; KeyCode::COUNT],
            mouse_buttons_pressed: [false; MouseButton::COUNT],
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    /// Is the key currently held?
    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.keys_pressed[key_code as usize]
    }

    /// Mark a key as held
    pub fn press_key(&mut self, key_code: KeyCode) {
        self.keys_pressed[key_code as usize] = true;
    }

    /// Mark a key as released
    pub fn release_key(&mut self, key_code: KeyCode) {
        self.keys_pressed[key_code as usize] = false;
    }

    /// Is the mouse button currently held?
    pub fn is_mouse_button_pressed(&self, mouse_button: MouseButton) -> bool {
        self.mouse_buttons_pressed[mouse_button as usize]
    }

    /// Mark a mouse button as held
    pub fn press_mouse_button(&mut self, mouse_button: MouseButton) {
        self.mouse_buttons_pressed[mouse_button as usize] = true;
    }

    /// Mark a mouse button as released
    pub fn release_mouse_button(&mut self, mouse_button: MouseButton) {
        self.mouse_buttons_pressed[mouse_button as usize] = false;
    }

    /// Record the last known cursor position (window coordinates)
    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Last known cursor position as (x, y)
    pub fn cursor_position(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
