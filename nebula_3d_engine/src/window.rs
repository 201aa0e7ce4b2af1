//! Window shell over winit
//!
//! Owns the native window and translates winit events into engine
//! [`Event`]s. The event loop itself is driven by
//! [`Application`](crate::application::Application).

use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window as WinitWindow;

use crate::error::{Error, Result};
use crate::event::Event;
use crate::input::{KeyCode, MouseButton};
use crate::{engine_critical, engine_info};

/// Window settings
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nebula3D".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Engine window wrapping the native one
pub struct Window {
    inner: WinitWindow,
    title: String,
    width: u32,
    height: u32,
}

impl Window {
    /// Create the native window
    ///
    /// # Errors
    ///
    /// Logs and returns [`Error::WindowCreationFailed`] if the platform
    /// refuses the window.
    pub(crate) fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        engine_info!(
            "nebula3d::Window",
            "Creating window '{}' with size {}x{}",
            config.title,
            config.width,
            config.height
        );

        let attributes = WinitWindow::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let inner = event_loop.create_window(attributes).map_err(|error| {
            engine_critical!(
                "nebula3d::Window",
                "Can't create window '{}': {}",
                config.title,
                error
            );
            Error::WindowCreationFailed(error.to_string())
        })?;

        Ok(Self {
            inner,
            title: config.title.clone(),
            width: config.width,
            height: config.height,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ask the platform for another redraw
    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// The wrapped winit window (for backends that need native handles)
    pub fn winit_window(&self) -> &WinitWindow {
        &self.inner
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// Translate a winit window event into an engine event
///
/// `cursor` is the last known cursor position, attached to mouse-button
/// events. Events the engine does not model translate to `None`.
pub(crate) fn translate_window_event(event: &WindowEvent, cursor: (f64, f64)) -> Option<Event> {
    match event {
        WindowEvent::Resized(size) => Some(Event::WindowResize {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CloseRequested => Some(Event::WindowClose),
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let key = translate_key(code)?;
            Some(match event.state {
                ElementState::Pressed => Event::KeyPressed {
                    key,
                    repeated: event.repeat,
                },
                ElementState::Released => Event::KeyReleased { key },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = translate_mouse_button(*button)?;
            let (x, y) = cursor;
            Some(match state {
                ElementState::Pressed => Event::MouseButtonPressed { button, x, y },
                ElementState::Released => Event::MouseButtonReleased { button, x, y },
            })
        }
        _ => None,
    }
}

/// Map a winit key code onto the engine's key set
fn translate_key(code: winit::keyboard::KeyCode) -> Option<KeyCode> {
    use winit::keyboard::KeyCode as Winit;

    Some(match code {
        Winit::Space => KeyCode::Space,
        Winit::Digit0 => KeyCode::Digit0,
        Winit::Digit1 => KeyCode::Digit1,
        Winit::Digit2 => KeyCode::Digit2,
        Winit::Digit3 => KeyCode::Digit3,
        Winit::Digit4 => KeyCode::Digit4,
        Winit::Digit5 => KeyCode::Digit5,
        Winit::Digit6 => KeyCode::Digit6,
        Winit::Digit7 => KeyCode::Digit7,
        Winit::Digit8 => KeyCode::Digit8,
        Winit::Digit9 => KeyCode::Digit9,
        Winit::KeyA => KeyCode::A,
        Winit::KeyB => KeyCode::B,
        Winit::KeyC => KeyCode::C,
        Winit::KeyD => KeyCode::D,
        Winit::KeyE => KeyCode::E,
        Winit::KeyF => KeyCode::F,
        Winit::KeyG => KeyCode::G,
        Winit::KeyH => KeyCode::H,
        Winit::KeyI => KeyCode::I,
        Winit::KeyJ => KeyCode::J,
        Winit::KeyK => KeyCode::K,
        Winit::KeyL => KeyCode::L,
        Winit::KeyM => KeyCode::M,
        Winit::KeyN => KeyCode::N,
        Winit::KeyO => KeyCode::O,
        Winit::KeyP => KeyCode::P,
        Winit::KeyQ => KeyCode::Q,
        Winit::KeyR => KeyCode::R,
        Winit::KeyS => KeyCode::S,
        Winit::KeyT => KeyCode::T,
        Winit::KeyU => KeyCode::U,
        Winit::KeyV => KeyCode::V,
        Winit::KeyW => KeyCode::W,
        Winit::KeyX => KeyCode::X,
        Winit::KeyY => KeyCode::Y,
        Winit::KeyZ => KeyCode::Z,
        Winit::Escape => KeyCode::Escape,
        Winit::Enter => KeyCode::Enter,
        Winit::Tab => KeyCode::Tab,
        Winit::Backspace => KeyCode::Backspace,
        Winit::Insert => KeyCode::Insert,
        Winit::Delete => KeyCode::Delete,
        Winit::ArrowRight => KeyCode::Right,
        Winit::ArrowLeft => KeyCode::Left,
        Winit::ArrowDown => KeyCode::Down,
        Winit::ArrowUp => KeyCode::Up,
        Winit::ShiftLeft => KeyCode::LeftShift,
        Winit::ControlLeft => KeyCode::LeftControl,
        Winit::AltLeft => KeyCode::LeftAlt,
        Winit::ShiftRight => KeyCode::RightShift,
        Winit::ControlRight => KeyCode::RightControl,
        Winit::AltRight => KeyCode::RightAlt,
        _ => return None,
    })
}

/// Map a winit mouse button onto the engine's button set
fn translate_mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
