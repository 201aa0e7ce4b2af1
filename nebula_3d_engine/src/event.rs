//! Window events and the event dispatcher
//!
//! Events are a tagged union ([`Event`]) keyed by [`EventType`]. The
//! [`EventDispatcher`] is an enum-indexed table of handler closures:
//! one slot per event type, no runtime type inspection.

use crate::input::{KeyCode, MouseButton};

/// Discriminant for every event the window shell can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum EventType {
    WindowResize = 0,
    WindowClose,
    KeyPressed,
    KeyReleased,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
}

impl EventType {
    /// Number of event types (size of the dispatch table)
    pub const COUNT: usize = EventType::MouseMoved as usize + 1;
}

/// A window event with its payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The window surface changed size
    WindowResize { width: u32, height: u32 },
    /// The user asked to close the window
    WindowClose,
    /// A key transitioned to held (or auto-repeated while held)
    KeyPressed { key: KeyCode, repeated: bool },
    /// A key transitioned to released
    KeyReleased { key: KeyCode },
    /// A mouse button was pressed at the given cursor position
    MouseButtonPressed { button: MouseButton, x: f64, y: f64 },
    /// A mouse button was released at the given cursor position
    MouseButtonReleased { button: MouseButton, x: f64, y: f64 },
    /// The cursor moved to the given position
    MouseMoved { x: f64, y: f64 },
}

impl Event {
    /// The discriminant used to route this event through the dispatcher
    pub fn event_type(&self) -> EventType {
        match self {
            Event::WindowResize { .. } => EventType::WindowResize,
            Event::WindowClose => EventType::WindowClose,
            Event::KeyPressed { .. } => EventType::KeyPressed,
            Event::KeyReleased { .. } => EventType::KeyReleased,
            Event::MouseButtonPressed { .. } => EventType::MouseButtonPressed,
            Event::MouseButtonReleased { .. } => EventType::MouseButtonReleased,
            Event::MouseMoved { .. } => EventType::MouseMoved,
        }
    }
}

type EventCallback = Box<dyn FnMut(&Event)>;

/// Single-dispatch event table
///
/// Holds at most one handler per [`EventType`]. Registering a handler for
/// a type that already has one replaces it; dispatching an event with no
/// handler drops the event.
#[derive(Default)]
pub struct EventDispatcher {
    callbacks: [Option<EventCallback>; EventType::COUNT],
}

impl EventDispatcher {
    /// Create a dispatcher with no handlers registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for one event type
    pub fn add_listener<F>(&mut self, event_type: EventType, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.callbacks[event_type as usize] = Some(Box::new(callback));
    }

    /// Remove the handler for one event type, returning whether one existed
    pub fn remove_listener(&mut self, event_type: EventType) -> bool {
        self.callbacks[event_type as usize].take().is_some()
    }

    /// Is a handler registered for this event type?
    pub fn has_listener(&self, event_type: EventType) -> bool {
        self.callbacks[event_type as usize].is_some()
    }

    /// Route an event to the handler registered for its type, if any
    pub fn dispatch(&mut self, event: &Event) {
        if let Some(callback) = &mut self.callbacks[event.event_type() as usize] {
            callback(event);
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
