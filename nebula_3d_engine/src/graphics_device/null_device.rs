//! Headless reference backend (no GPU required)
//!
//! The null device creates inert resources and records every operation
//! performed on it. It backs the test suites and lets the engine and the
//! editor run on machines without a usable GPU; real backends are
//! expected to live in separate plugin crates.

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::graphics_device::{
    BackendInfo, Buffer, BufferDesc, GraphicsDevice, ShaderProgram, ShaderProgramDesc, Texture,
    TextureDesc, TextureInfo, VertexArray, VertexArrayDesc,
};
use crate::{engine_bail, engine_error};
use glam::Mat4;

// ============================================================================
// Null Buffer
// ============================================================================

/// Buffer backed by host memory
pub struct NullBuffer {
    size: u64,
    contents: Mutex<Vec<u8>>,
}

impl NullBuffer {
    fn new(size: u64) -> Self {
        Self {
            size,
            contents: Mutex::new(vec![0; size as usize]),
        }
    }

    /// Snapshot of the buffer contents (for assertions)
    pub fn contents(&self) -> Vec<u8> {
        self.contents.lock().unwrap().clone()
    }
}

impl Buffer for NullBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset + data.len() as u64;
        if end > self.size {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Buffer update range [{}, {}) exceeds buffer size {}",
                offset,
                end,
                self.size
            );
        }
        let mut contents = self.contents.lock().unwrap();
        contents[offset as usize..end as usize].copy_from_slice(data);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}

// ============================================================================
// Null ShaderProgram
// ============================================================================

/// Shader program that stores uploaded uniforms instead of compiling
pub struct NullShaderProgram {
    uniforms: Mutex<FxHashMap<String, Mat4>>,
    upload_log: Arc<Mutex<Vec<String>>>,
}

impl NullShaderProgram {
    fn new(upload_log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            uniforms: Mutex::new(FxHashMap::default()),
            upload_log,
        }
    }

    /// Last value uploaded for a uniform, if any (for assertions)
    pub fn matrix4(&self, name: &str) -> Option<Mat4> {
        self.uniforms.lock().unwrap().get(name).copied()
    }
}

impl ShaderProgram for NullShaderProgram {
    fn set_matrix4(&self, name: &str, matrix: &Mat4) -> Result<()> {
        self.uniforms
            .lock()
            .unwrap()
            .insert(name.to_string(), *matrix);
        self.upload_log.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

// ============================================================================
// Null Texture
// ============================================================================

/// Texture that keeps its descriptor and nothing else
pub struct NullTexture {
    info: TextureInfo,
}

impl Texture for NullTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Null VertexArray
// ============================================================================

/// Vertex array that records its counts
pub struct NullVertexArray {
    vertex_count: u32,
    index_count: u32,
    indexed: bool,
}

impl VertexArray for NullVertexArray {
    fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }

    fn is_indexed(&self) -> bool {
        self.indexed
    }
}

// ============================================================================
// Null GraphicsDevice
// ============================================================================

/// Headless device recording the operation stream
///
/// Every resource creation and frame operation is appended to an
/// inspectable log, the way a command recorder would see it.
pub struct NullGraphicsDevice {
    ops: Vec<String>,
    clear_color: [f32; 4],
    viewport: (u32, u32, u32, u32),
    uniform_uploads: Arc<Mutex<Vec<String>>>,
}

impl NullGraphicsDevice {
    /// Create a device with an empty operation log
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            viewport: (0, 0, 0, 0),
            uniform_uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Recorded operations, oldest first
    pub fn ops(&self) -> &[String] {
        &self.ops
    }

    /// Current clear color
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Current viewport as (width, height, left offset, bottom offset)
    pub fn viewport(&self) -> (u32, u32, u32, u32) {
        self.viewport
    }

    /// Names of uniforms uploaded through programs of this device, in order
    pub fn uniform_uploads(&self) -> Vec<String> {
        self.uniform_uploads.lock().unwrap().clone()
    }
}

impl Default for NullGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for NullGraphicsDevice {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        if desc.size == 0 {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Cannot create a zero-sized {:?} buffer",
                desc.usage
            );
        }
        self.ops.push(format!("create_buffer:{}", desc.size));
        Ok(Arc::new(NullBuffer::new(desc.size)))
    }

    fn create_vertex_array(&mut self, desc: VertexArrayDesc) -> Result<Arc<dyn VertexArray>> {
        if desc.vertex_count == 0 {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Vertex array needs at least one vertex"
            );
        }
        let stride = desc.layout.stride() as u64;
        if desc.vertex_buffer.size() < desc.vertex_count as u64 * stride {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Vertex buffer of {} bytes cannot hold {} vertices with stride {}",
                desc.vertex_buffer.size(),
                desc.vertex_count,
                stride
            );
        }
        if desc.index_count > 0 && desc.index_buffer.is_none() {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Index count {} given without an index buffer",
                desc.index_count
            );
        }
        self.ops.push(format!(
            "create_vertex_array:v{}:i{}",
            desc.vertex_count, desc.index_count
        ));
        Ok(Arc::new(NullVertexArray {
            vertex_count: desc.vertex_count,
            index_count: desc.index_count,
            indexed: desc.index_buffer.is_some(),
        }))
    }

    fn create_shader_program(
        &mut self,
        desc: ShaderProgramDesc,
    ) -> Result<Arc<dyn ShaderProgram>> {
        if desc.vertex_src.trim().is_empty() || desc.fragment_src.trim().is_empty() {
            engine_error!(
                "nebula3d::NullGraphicsDevice",
                "Shader compilation failed: empty stage source"
            );
            return Err(Error::ShaderCompilationFailed(
                "empty stage source".to_string(),
            ));
        }
        self.ops.push("create_shader_program".to_string());
        Ok(Arc::new(NullShaderProgram::new(
            self.uniform_uploads.clone(),
        )))
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Texture dimensions {}x{} are degenerate",
                desc.width,
                desc.height
            );
        }
        let expected = desc.width as usize * desc.height as usize * 4;
        if desc.data.len() != expected {
            engine_bail!(
                "nebula3d::NullGraphicsDevice",
                "Texture data is {} bytes, expected {} for {}x{} RGBA8",
                desc.data.len(),
                expected,
                desc.width,
                desc.height
            );
        }
        self.ops
            .push(format!("create_texture:{}x{}", desc.width, desc.height));
        Ok(Arc::new(NullTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
            },
        }))
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    fn clear(&mut self) {
        self.ops.push("clear".to_string());
    }

    fn set_viewport(&mut self, width: u32, height: u32, left_offset: u32, bottom_offset: u32) {
        self.viewport = (width, height, left_offset, bottom_offset);
        self.ops.push(format!("set_viewport:{}x{}", width, height));
    }

    fn draw(
        &mut self,
        vertex_array: &dyn VertexArray,
        _shader_program: &dyn ShaderProgram,
    ) -> Result<()> {
        let count = if vertex_array.is_indexed() {
            vertex_array.index_count()
        } else {
            vertex_array.vertex_count()
        };
        self.ops.push(format!("draw:{}", count));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push("present".to_string());
        Ok(())
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            vendor: "Nebula3D".to_string(),
            renderer: "Null device".to_string(),
            version: crate::engine::Engine::VERSION.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "null_device_tests.rs"]
mod tests;
