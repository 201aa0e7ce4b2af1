//! Graphics device module — device and resource traits for rendering backends
//!
//! The engine is backend-agnostic: GPU resources are reached through the
//! traits defined here, and concrete backends implement them. The crate
//! ships one reference backend, the headless [`NullGraphicsDevice`].

// Module declarations
pub mod graphics_device;
pub mod buffer;
pub mod shader;
pub mod texture;
pub mod vertex_array;
pub mod null_device;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use buffer::*;
pub use shader::*;
pub use texture::*;
pub use vertex_array::*;

pub use null_device::NullGraphicsDevice;
