//! Free-fly camera with mouse look, WASD movement, and scroll zoom

use glam::{Mat4, Vec3};

use super::CameraConfig;

/// Movement direction for keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera.
///
/// `yaw` and `pitch` are the independent degrees of freedom; the
/// `front`/`up`/`right` basis is recomputed from them after every look
/// update and stays orthonormal and right-handed.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// Configuration
    pub config: CameraConfig,
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    /// Yaw angle in degrees (horizontal)
    yaw: f32,
    /// Pitch angle in degrees (vertical, clamped)
    pitch: f32,
    /// Field-of-view angle in degrees (clamped)
    zoom: f32,
}

impl FlyCamera {
    /// Create a camera at the given position, facing -Z
    pub fn new(position: Vec3) -> Self {
        Self::with_config(position, CameraConfig::default())
    }

    /// Create a camera with custom config
    pub fn with_config(position: Vec3, config: CameraConfig) -> Self {
        let zoom = config.fov_max;
        let mut camera = Self {
            config,
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            yaw: -90.0,
            pitch: 0.0,
            zoom,
        };
        camera.update_basis();
        camera
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit vector the camera looks along
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector of the camera basis
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector of the camera basis
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Yaw angle in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field-of-view angle in degrees, for the renderer's projection
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Move the camera directly
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Orient the camera along a direction vector.
    ///
    /// Yaw and pitch are derived from the direction (pitch clamped as
    /// usual) so later mouse input continues from this orientation.
    pub fn look_toward(&mut self, direction: Vec3) {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.pitch = dir
            .y
            .asin()
            .to_degrees()
            .clamp(self.config.pitch_min, self.config.pitch_max);
        self.yaw = dir.z.atan2(dir.x).to_degrees();
        self.update_basis();
    }

    /// Handle a keyboard movement input.
    ///
    /// Displacement is `movement_speed * delta_time` along the basis
    /// vector, so movement is linear in `delta_time` and frame-rate
    /// independent.
    pub fn process_keyboard(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.config.movement_speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
            MoveDirection::Up => self.position += self.up * velocity,
            MoveDirection::Down => self.position -= self.up * velocity,
        }
    }

    /// Handle a mouse look delta.
    ///
    /// Pitch is clamped rather than rejected; out-of-range motion is an
    /// expected part of live input, not a fault.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.config.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.config.mouse_sensitivity)
            .clamp(self.config.pitch_min, self.config.pitch_max);
        self.update_basis();
    }

    /// Handle a scroll wheel delta, zooming the field of view
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(self.config.fov_min, self.config.fov_max);
    }

    /// View transform for the current state: eye at `position`, looking
    /// toward `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Recompute the orthonormal basis from yaw and pitch
    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.config.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_orthonormal(camera: &FlyCamera) {
        assert!((camera.front().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.up().length() - 1.0).abs() < TOLERANCE);
        assert!((camera.right().length() - 1.0).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.up()).abs() < TOLERANCE);
        assert!(camera.front().dot(camera.right()).abs() < TOLERANCE);
        assert!(camera.up().dot(camera.right()).abs() < TOLERANCE);
        // Right-handed: front x up = -right would be left-handed.
        assert!((camera.right().cross(camera.front()).dot(camera.up()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_initial_orientation_faces_negative_z() {
        let camera = FlyCamera::new(Vec3::ZERO);
        assert!((camera.front() - Vec3::NEG_Z).length() < TOLERANCE);
        assert!((camera.right() - Vec3::X).length() < TOLERANCE);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_basis_stays_orthonormal_under_mouse_input() {
        let mut camera = FlyCamera::new(Vec3::ZERO);
        let deltas = [
            (35.0, 12.0),
            (-160.0, 48.5),
            (7.25, -300.0),
            (999.0, 999.0),
            (-0.1, 0.1),
        ];
        for (dx, dy) in deltas {
            camera.process_mouse_movement(dx, dy);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_pitch_clamps_at_89_degrees() {
        let mut camera = FlyCamera::new(Vec3::ZERO);
        for _ in 0..4 {
            camera.process_mouse_movement(0.0, 1_000_000.0);
        }
        assert_eq!(camera.pitch(), 89.0);
        assert_orthonormal(&camera);

        for _ in 0..4 {
            camera.process_mouse_movement(0.0, -1_000_000.0);
        }
        assert_eq!(camera.pitch(), -89.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_zoom_clamps_to_fov_range() {
        let mut camera = FlyCamera::new(Vec3::ZERO);
        for _ in 0..100 {
            camera.process_mouse_scroll(-1000.0);
        }
        assert_eq!(camera.zoom(), 45.0);

        for _ in 0..100 {
            camera.process_mouse_scroll(1000.0);
        }
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_movement_is_linear_in_delta_time() {
        let mut once = FlyCamera::new(Vec3::ZERO);
        once.process_keyboard(MoveDirection::Forward, 0.4);

        let mut twice = FlyCamera::new(Vec3::ZERO);
        twice.process_keyboard(MoveDirection::Forward, 0.2);
        twice.process_keyboard(MoveDirection::Forward, 0.2);

        assert!((once.position() - twice.position()).length() < TOLERANCE);
        assert!((once.position().length() - 2.5 * 0.4).abs() < TOLERANCE);
    }

    #[test]
    fn test_strafe_moves_along_right_vector() {
        let mut camera = FlyCamera::new(Vec3::ZERO);
        camera.process_keyboard(MoveDirection::Right, 1.0);
        let expected = camera.right() * camera.config.movement_speed;
        assert!((camera.position() - expected).length() < TOLERANCE);
    }

    #[test]
    fn test_look_toward_round_trips_through_yaw_pitch() {
        let mut camera = FlyCamera::new(Vec3::ZERO);
        let dir = Vec3::new(0.0, -1.0, -2.0).normalize();
        camera.look_toward(dir);
        assert!((camera.front() - dir).length() < TOLERANCE);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_view_matrix_maps_front_to_negative_z() {
        let mut camera = FlyCamera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.process_mouse_movement(123.0, -45.0);
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.position());
        assert!(eye.length() < TOLERANCE);

        let ahead = view.transform_point3(camera.position() + camera.front());
        assert!((ahead - Vec3::NEG_Z).length() < TOLERANCE);
    }
}
