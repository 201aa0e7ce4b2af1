/// Shader program trait and descriptor

use crate::error::Result;
use glam::Mat4;

/// Descriptor for creating a shader program
///
/// Carries the vertex and fragment stage sources. Compilation happens at
/// creation; a program that fails to compile is never handed out (the
/// device logs and aborts construction instead).
#[derive(Debug, Clone)]
pub struct ShaderProgramDesc {
    /// Vertex stage source
    pub vertex_src: String,
    /// Fragment stage source
    pub fragment_src: String,
}

/// Shader program resource trait
///
/// This is the seam the camera's matrices cross: the per-frame logic
/// uploads the view-projection and model matrices as named uniforms
/// before each draw.
pub trait ShaderProgram: Send + Sync {
    /// Upload a 4×4 matrix uniform by name
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the uniform.
    fn set_matrix4(&self, name: &str, matrix: &Mat4) -> Result<()>;
}
