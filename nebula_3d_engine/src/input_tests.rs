//! Unit tests for input state tracking

use super::*;

// ============================================================================
// Key codes
// ============================================================================

#[test]
fn test_key_code_count_covers_last_variant() {
    assert_eq!(KeyCode::COUNT, KeyCode::RightAlt as usize + 1);
    assert!(KeyCode::COUNT > KeyCode::Z as usize);
}

#[test]
fn test_mouse_button_count_covers_last_variant() {
    assert_eq!(MouseButton::COUNT, 3);
}

// ============================================================================
// Keyboard state
// ============================================================================

#[test]
fn test_keys_start_released() {
    let input = InputState::new();
    assert!(!input.is_key_pressed(KeyCode::W));
    assert!(!input.is_key_pressed(KeyCode::Space));
    assert!(!input.is_key_pressed(KeyCode::RightAlt));
}

#[test]
fn test_press_and_release_key() {
    let mut input = InputState::new();

    input.press_key(KeyCode::W);
    assert!(input.is_key_pressed(KeyCode::W));
    // Other keys unaffected
    assert!(!input.is_key_pressed(KeyCode::S));

    input.release_key(KeyCode::W);
    assert!(!input.is_key_pressed(KeyCode::W));
}

#[test]
fn test_multiple_keys_held_simultaneously() {
    let mut input = InputState::new();

    input.press_key(KeyCode::W);
    input.press_key(KeyCode::D);
    input.press_key(KeyCode::LeftShift);

    assert!(input.is_key_pressed(KeyCode::W));
    assert!(input.is_key_pressed(KeyCode::D));
    assert!(input.is_key_pressed(KeyCode::LeftShift));

    input.release_key(KeyCode::D);
    assert!(input.is_key_pressed(KeyCode::W));
    assert!(!input.is_key_pressed(KeyCode::D));
}

#[test]
fn test_release_without_press_is_noop() {
    let mut input = InputState::new();
    input.release_key(KeyCode::Q);
    assert!(!input.is_key_pressed(KeyCode::Q));
}

// ============================================================================
// Mouse state
// ============================================================================

#[test]
fn test_press_and_release_mouse_button() {
    let mut input = InputState::new();

    input.press_mouse_button(MouseButton::Left);
    assert!(input.is_mouse_button_pressed(MouseButton::Left));
    assert!(!input.is_mouse_button_pressed(MouseButton::Right));

    input.release_mouse_button(MouseButton::Left);
    assert!(!input.is_mouse_button_pressed(MouseButton::Left));
}

#[test]
fn test_cursor_position_tracking() {
    let mut input = InputState::new();
    assert_eq!(input.cursor_position(), (0.0, 0.0));

    input.set_cursor_position(120.5, 48.0);
    assert_eq!(input.cursor_position(), (120.5, 48.0));
}
