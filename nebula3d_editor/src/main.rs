//! Nebula3D editor — demo application
//!
//! Drives the engine the way an editor does: a first-person camera moved
//! from held keys, a projection toggle, and the built-in primitives drawn
//! through the shader seam every frame.
//!
//! Controls: W/S forward/back, A/D strafe, Q/E down/up,
//! arrow keys pitch/yaw, P toggles perspective/orthographic.

use std::sync::Arc;

use nebula_3d_engine::engine_info;
use nebula_3d_engine::glam::{Mat4, Vec3};
use nebula_3d_engine::nebula3d::render::{
    GraphicsDevice, ShaderProgram, ShaderProgramDesc, VertexArray,
};
use nebula_3d_engine::nebula3d::{
    resource, AppHandler, Application, Camera, Event, FrameContext, KeyCode, ProjectionMode,
    Result, WindowConfig,
};

const VERTEX_SHADER_SRC: &str = r#"
#version 460
layout(location = 0) in vec3 vertex_position;
layout(location = 1) in vec3 vertex_color;
layout(location = 2) in vec2 vertex_uv;
uniform mat4 view_projection_matrix;
uniform mat4 model_matrix;
out vec3 color;
out vec2 uv;
void main() {
    color = vertex_color;
    uv = vertex_uv;
    gl_Position = view_projection_matrix * model_matrix * vec4(vertex_position, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"
#version 460
in vec3 color;
in vec2 uv;
out vec4 frag_color;
void main() {
    frag_color = vec4(color, 1.0);
}
"#;

/// Per-frame camera step sizes
const CAMERA_MOVE_STEP: f32 = 0.01;
const CAMERA_ROTATE_STEP: f32 = 0.5;

struct EditorScene {
    shader: Arc<dyn ShaderProgram>,
    triangle: Arc<dyn VertexArray>,
    quad: Arc<dyn VertexArray>,
    cube: Arc<dyn VertexArray>,
}

struct EditorApp {
    camera: Camera,
    scene: Option<EditorScene>,
}

impl EditorApp {
    fn new() -> Self {
        // Back off along world-forward so the primitives at the origin
        // are in view
        Self {
            camera: Camera::new(
                Vec3::new(-5.0, 0.0, 0.0),
                Vec3::ZERO,
                ProjectionMode::Perspective,
            ),
            scene: None,
        }
    }

    /// Collect this frame's movement/rotation deltas from held keys
    fn camera_deltas(frame: &FrameContext<'_>) -> (Vec3, Vec3) {
        let input = frame.input;
        let mut movement_delta = Vec3::ZERO; // x forward, y right, z up
        let mut rotation_delta = Vec3::ZERO; // roll, pitch, yaw

        if input.is_key_pressed(KeyCode::W) {
            movement_delta.x += CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::S) {
            movement_delta.x -= CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::D) {
            movement_delta.y += CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::A) {
            movement_delta.y -= CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::E) {
            movement_delta.z += CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::Q) {
            movement_delta.z -= CAMERA_MOVE_STEP;
        }
        if input.is_key_pressed(KeyCode::Up) {
            rotation_delta.y += CAMERA_ROTATE_STEP;
        }
        if input.is_key_pressed(KeyCode::Down) {
            rotation_delta.y -= CAMERA_ROTATE_STEP;
        }
        if input.is_key_pressed(KeyCode::Left) {
            rotation_delta.z += CAMERA_ROTATE_STEP;
        }
        if input.is_key_pressed(KeyCode::Right) {
            rotation_delta.z -= CAMERA_ROTATE_STEP;
        }

        (movement_delta, rotation_delta)
    }
}

impl AppHandler for EditorApp {
    fn on_setup(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let shader = device.create_shader_program(ShaderProgramDesc {
            vertex_src: VERTEX_SHADER_SRC.to_string(),
            fragment_src: FRAGMENT_SHADER_SRC.to_string(),
        })?;

        let triangle = resource::create_vertex_array(device, &resource::triangle())?;
        let quad = resource::create_vertex_array(device, &resource::quad())?;
        let cube = resource::create_vertex_array(device, &resource::cube())?;

        device.set_clear_color([0.33, 0.33, 0.33, 1.0]);

        let info = device.backend_info();
        engine_info!(
            "nebula3d_editor",
            "Rendering with {} ({})",
            info.renderer,
            info.version
        );

        self.scene = Some(EditorScene {
            shader,
            triangle,
            quad,
            cube,
        });
        Ok(())
    }

    fn on_update(&mut self, frame: &mut FrameContext<'_>) {
        let (movement_delta, rotation_delta) = Self::camera_deltas(frame);
        self.camera.add_movement_and_rotation(movement_delta, rotation_delta);

        let (viewport_width, viewport_height) =
            (frame.window_width as f32, frame.window_height as f32);
        if self.camera.viewport_size() != (viewport_width, viewport_height) {
            self.camera.set_viewport_size(viewport_width, viewport_height);
        }

        let Some(scene) = &self.scene else {
            return;
        };

        if scene
            .shader
            .set_matrix4("view_projection_matrix", &self.camera.view_projection_matrix())
            .is_err()
        {
            return;
        }

        let draws = [
            (&scene.triangle, Mat4::from_translation(Vec3::new(0.0, -2.0, 0.0))),
            (&scene.quad, Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0))),
            (&scene.cube, Mat4::IDENTITY),
        ];
        for (vertex_array, model_matrix) in draws {
            if scene.shader.set_matrix4("model_matrix", &model_matrix).is_ok() {
                let _ = frame
                    .device
                    .draw(vertex_array.as_ref(), scene.shader.as_ref());
            }
        }
    }

    fn on_event(&mut self, event: &Event) {
        if let Event::KeyPressed {
            key: KeyCode::P,
            repeated: false,
        } = event
        {
            let next_mode = match self.camera.projection_mode() {
                ProjectionMode::Perspective => ProjectionMode::Orthographic,
                ProjectionMode::Orthographic => ProjectionMode::Perspective,
            };
            engine_info!("nebula3d_editor", "Projection mode: {:?}", next_mode);
            self.camera.set_projection_mode(next_mode);
        }
    }
}

fn main() -> Result<()> {
    let config = WindowConfig {
        title: "Nebula3D Editor".to_string(),
        width: 1024,
        height: 768,
    };

    Application::new(config, EditorApp::new()).run()
}
