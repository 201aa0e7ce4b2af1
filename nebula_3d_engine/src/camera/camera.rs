//! First-person camera: position + Euler orientation in, view and
//! projection matrices out.
//!
//! Orientation is three Euler angles in degrees (x = roll, y = pitch,
//! z = yaw) composed extrinsically about the fixed world axes, in
//! yaw ∘ pitch ∘ roll order. Gimbal lock at pitch = ±90° is inherent to
//! this representation and preserved.
//!
//! Both matrices are cached and recomputed eagerly inside every mutator,
//! so getters are plain reads and never observe stale state.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Projection mode of a [`Camera`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

/// Eye transform and projection parameters for a single viewpoint
///
/// The camera performs no drawing and no I/O. The rendering collaborator
/// reads [`view_matrix`](Camera::view_matrix) and
/// [`projection_matrix`](Camera::projection_matrix) once per frame and
/// uploads them (or their product) as shader uniforms.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space eye position
    position: Vec3,
    /// Euler angles in degrees: x = roll, y = pitch, z = yaw
    rotation: Vec3,
    projection_mode: ProjectionMode,

    // Orthonormal basis derived from `rotation`. `up` is always
    // `right × direction`, never stored independently.
    direction: Vec3,
    right: Vec3,
    up: Vec3,

    // Projection parameters. Each one only ever invalidates the
    // projection matrix, never the view matrix.
    far_clip_plane: f32,
    near_clip_plane: f32,
    viewport_width: f32,
    viewport_height: f32,
    field_of_view: f32,

    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Reference frame before any rotation is applied
    pub const WORLD_FORWARD: Vec3 = Vec3::X;
    pub const WORLD_RIGHT: Vec3 = Vec3::NEG_Y;
    pub const WORLD_UP: Vec3 = Vec3::Z;

    /// Create a camera and derive the basis and both matrices immediately,
    /// so first-frame reads are valid without a prior mutator call.
    pub fn new(position: Vec3, rotation: Vec3, projection_mode: ProjectionMode) -> Self {
        let mut camera = Self {
            position,
            rotation,
            projection_mode,
            direction: Self::WORLD_FORWARD,
            right: Self::WORLD_RIGHT,
            up: Self::WORLD_UP,
            far_clip_plane: 100.0,
            near_clip_plane: 0.1,
            viewport_width: 800.0,
            viewport_height: 600.0,
            field_of_view: 60.0,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_view_matrix();
        camera.update_projection_matrix();
        camera
    }

    // ===== MATRIX DERIVATION =====

    /// Rebuild the orthonormal basis from the Euler angles, then the view
    /// matrix from position + basis.
    fn update_view_matrix(&mut self) {
        let roll_in_radians = self.rotation.x.to_radians();
        let pitch_in_radians = self.rotation.y.to_radians();
        let yaw_in_radians = self.rotation.z.to_radians();

        // Extrinsic composition: every elementary rotation is taken about
        // the constant world axes, not the camera's own evolving frame.
        let euler_rotate_matrix = Mat3::from_rotation_z(yaw_in_radians)
            * Mat3::from_rotation_y(pitch_in_radians)
            * Mat3::from_rotation_x(roll_in_radians);

        self.direction = (euler_rotate_matrix * Self::WORLD_FORWARD).normalize();
        self.right = (euler_rotate_matrix * Self::WORLD_RIGHT).normalize();
        self.up = self.right.cross(self.direction);

        self.view_matrix =
            Mat4::look_at_rh(self.position, self.position + self.direction, self.up);
    }

    /// Rebuild the projection matrix from the stored projection parameters.
    ///
    /// Both modes consume the same near/far/fov/viewport fields; the
    /// near-plane footprint stays continuous across a mode switch.
    fn update_projection_matrix(&mut self) {
        let n = self.near_clip_plane;
        let f = self.far_clip_plane;
        let aspect = self.viewport_width / self.viewport_height;

        // Near-plane half-extents shared by both modes
        let t = n * (self.field_of_view.to_radians() * 0.5).tan();
        let r = t * aspect;

        self.projection_matrix = match self.projection_mode {
            ProjectionMode::Perspective => Mat4::from_cols(
                Vec4::new(n / r, 0.0, 0.0, 0.0),
                Vec4::new(0.0, n / t, 0.0, 0.0),
                Vec4::new(0.0, 0.0, (-f - n) / (f - n), -1.0),
                Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
            ),
            ProjectionMode::Orthographic => Mat4::from_cols(
                Vec4::new(1.0 / r, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0 / t, 0.0, 0.0),
                Vec4::new(0.0, 0.0, -2.0 / (f - n), 0.0),
                Vec4::new(0.0, 0.0, (-f - n) / (f - n), 1.0),
            ),
        };
    }

    // ===== STATE MUTATORS =====

    /// Replace the eye position. The basis is position-independent, so
    /// only the lookAt computation reruns.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view_matrix();
    }

    /// Replace the Euler angles (degrees), rebuilding basis and view.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.update_view_matrix();
    }

    /// Replace position and rotation atomically with a single recompute.
    pub fn set_position_rotation(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
        self.update_view_matrix();
    }

    /// Switch between perspective and orthographic projection.
    ///
    /// The projection is a pure function of the mode and the stored
    /// parameters: switching away and back restores the exact matrix.
    pub fn set_projection_mode(&mut self, projection_mode: ProjectionMode) {
        self.projection_mode = projection_mode;
        self.update_projection_matrix();
    }

    /// Set the far clip distance (projection only).
    pub fn set_far_clip_plane(&mut self, far: f32) {
        self.far_clip_plane = far;
        self.update_projection_matrix();
    }

    /// Set the near clip distance (projection only).
    pub fn set_near_clip_plane(&mut self, near: f32) {
        self.near_clip_plane = near;
        self.update_projection_matrix();
    }

    /// Set the viewport dimensions used for the aspect ratio (projection only).
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_projection_matrix();
    }

    /// Set the vertical field of view in degrees (projection only).
    pub fn set_field_of_view(&mut self, fov: f32) {
        self.field_of_view = fov;
        self.update_projection_matrix();
    }

    // ===== MOVEMENT =====

    /// Translate along the current `direction` vector.
    pub fn move_forward(&mut self, delta: f32) {
        self.position += self.direction * delta;
        self.update_view_matrix();
    }

    /// Translate along the current `right` vector.
    pub fn move_right(&mut self, delta: f32) {
        self.position += self.right * delta;
        self.update_view_matrix();
    }

    /// Translate along the current `up` vector.
    pub fn move_up(&mut self, delta: f32) {
        self.position += self.up * delta;
        self.update_view_matrix();
    }

    /// Apply a combined movement and rotation step with one recompute.
    ///
    /// `movement_delta.x` translates along `direction`, `.y` along `right`,
    /// `.z` along `up`, using the basis as it was *before* this call's
    /// rotation is added, so strafing follows the previous frame's
    /// orientation. `rotation_delta` is (roll, pitch, yaw) in degrees.
    pub fn add_movement_and_rotation(&mut self, movement_delta: Vec3, rotation_delta: Vec3) {
        self.position += self.direction * movement_delta.x;
        self.position += self.right * movement_delta.y;
        self.position += self.up * movement_delta.z;
        self.rotation += rotation_delta;
        self.update_view_matrix();
    }

    // ===== GETTERS =====

    /// View matrix, fresh relative to the last mutator call.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix, fresh relative to the last mutator call.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in degrees (roll, pitch, yaw).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Current projection mode.
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Unit forward vector of the current orientation.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit right vector of the current orientation.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector (`right × direction`).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn far_clip_plane(&self) -> f32 {
        self.far_clip_plane
    }

    pub fn near_clip_plane(&self) -> f32 {
        self.near_clip_plane
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Viewport dimensions as (width, height).
    pub fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }
}

impl Default for Camera {
    /// Camera at the origin, zero rotation, perspective projection.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, ProjectionMode::Perspective)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
