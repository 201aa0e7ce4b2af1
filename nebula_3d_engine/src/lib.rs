/*!
# Nebula 3D Engine

Core of the Nebula3D educational rendering framework: a window/event
shell, an input-state tracker, a first-person camera, and trait-based
wrappers around a graphics backend's buffer/shader/texture objects.

## Architecture

- **Camera**: eye transform + projection parameters in, view/projection
  matrices out (the mathematical core)
- **Application / Window**: winit-driven shell with a per-frame tick
- **EventDispatcher**: enum-keyed single-dispatch event table
- **InputState**: "is key X currently held" tracker
- **GraphicsDevice**: factory trait for GPU resources; backends are
  plugins, with the headless null device shipped as the reference

The engine performs no drawing itself: the per-frame logic reads the
camera's matrices and uploads them through the shader seam before
issuing draws.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod application;
pub mod camera;
pub mod event;
pub mod graphics_device;
pub mod input;
pub mod resource;
pub mod window;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (logger management, version)
    pub use crate::engine::Engine;

    // Camera
    pub use crate::camera::{Camera, ProjectionMode};

    // Shell
    pub use crate::application::{AppHandler, Application, DeviceFactory, FrameContext};
    pub use crate::event::{Event, EventDispatcher, EventType};
    pub use crate::input::{InputState, KeyCode, MouseButton};
    pub use crate::window::{Window, WindowConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Render sub-module with the device and resource traits
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
