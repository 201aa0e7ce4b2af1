/// GraphicsDevice trait - main resource factory and frame surface

use std::sync::Arc;

use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, ShaderProgram, ShaderProgramDesc, Texture, TextureDesc, VertexArray,
    VertexArrayDesc,
};

/// Identification strings of the backend in use
#[derive(Debug, Clone)]
pub struct BackendInfo {
    /// GPU vendor (e.g., "NVIDIA Corporation")
    pub vendor: String,
    /// Renderer/device name
    pub renderer: String,
    /// API version string
    pub version: String,
}

/// Main graphics device trait
///
/// The central factory for GPU resources plus the per-frame drawing
/// surface. Implemented by backend-specific devices; the crate ships the
/// headless [`NullGraphicsDevice`](super::NullGraphicsDevice) as the
/// reference implementation.
///
/// A device is owned by the [`Application`](crate::application::Application)
/// and driven from the thread running the frame loop; no internal
/// synchronization is provided or required.
pub trait GraphicsDevice {
    // ===== RESOURCE CREATION =====

    /// Create a buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is rejected by the backend.
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a vertex array binding buffers into one drawable unit
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is inconsistent (e.g., zero
    /// vertices, or an index count without an index buffer).
    fn create_vertex_array(&mut self, desc: VertexArrayDesc) -> Result<Arc<dyn VertexArray>>;

    /// Compile and link a shader program
    ///
    /// # Errors
    ///
    /// Returns an error if compilation or linking fails; the failure is
    /// logged and no program object is handed out.
    fn create_shader_program(&mut self, desc: ShaderProgramDesc)
        -> Result<Arc<dyn ShaderProgram>>;

    /// Create a 2D texture from RGBA8 pixel data
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel data does not match the dimensions.
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    // ===== FRAME SURFACE =====

    /// Set the color used by [`clear`](GraphicsDevice::clear)
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clear the backbuffer to the current clear color
    fn clear(&mut self);

    /// Set the drawing viewport
    fn set_viewport(&mut self, width: u32, height: u32, left_offset: u32, bottom_offset: u32);

    /// Draw a vertex array with a shader program
    ///
    /// Uniforms previously uploaded through the program apply to this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is rejected by the backend.
    fn draw(
        &mut self,
        vertex_array: &dyn VertexArray,
        shader_program: &dyn ShaderProgram,
    ) -> Result<()>;

    /// Finish the frame and present it
    ///
    /// # Errors
    ///
    /// Returns an error if presentation fails.
    fn present(&mut self) -> Result<()>;

    // ===== INTROSPECTION =====

    /// Identification strings of this backend
    fn backend_info(&self) -> BackendInfo;
}
