// Free-fly and isometric camera

use crate::core::math::clamp;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera movement directions, decoupled from key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMove {
    Forward,
    Backward,
    Left,
    Right,
}

/// Default yaw looks down negative z
const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_PITCH: f32 = 0.0;
/// Free-fly speed in world units per second
const MOVE_SPEED: f32 = 50.0;
/// Mouse look sensitivity in degrees per pixel
const LOOK_SENSITIVITY: f32 = 0.7;
/// Perspective field of view bounds, degrees
const DEFAULT_FOV: f32 = 45.0;
const MIN_FOV: f32 = 1.0;
const MAX_FOV: f32 = 45.0;
/// Pitch bound that keeps the view from flipping
const PITCH_LIMIT: f32 = 89.0;

/// Isometric half-extent bounds (orthographic zoom)
const MIN_ISO_ZOOM: f32 = 2.0;
const MAX_ISO_ZOOM: f32 = 30.0;
/// Isometric pan step per key press and its bounds
const ISO_PAN_STEP: f32 = 0.5;
const ISO_PAN_RIGHT_LIMIT: f32 = 20.0;
const ISO_PAN_UP_MAX: f32 = 20.0;
const ISO_PAN_UP_MIN: f32 = -25.0;
/// Orthographic near/far planes for the isometric view
const ISO_NEAR: f32 = -30.0;
const ISO_FAR: f32 = 40.0;
/// Model-space tilt that gives the isometric look: 45 degrees around x,
/// then atan(1/sqrt 2) around z
const ISO_TILT_X: f32 = 45.0;
const ISO_TILT_Z: f32 = 35.2644;

/// Camera for the diorama: a mouse-look free-fly perspective view, or an
/// orthographic isometric view panned with the movement keys.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    fov: f32,
    aspect: f32,

    isometric: bool,
    iso_zoom: f32,
    iso_right: f32,
    iso_up: f32,
}

impl Camera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            fov: DEFAULT_FOV,
            aspect,
            isometric: false,
            iso_zoom: MIN_ISO_ZOOM,
            iso_right: 0.0,
            iso_up: 0.0,
        };
        camera.update_vectors();
        camera
    }

    /// View matrix for the current mode
    pub fn view_matrix(&self) -> Mat4 {
        if self.isometric {
            let eye = Vec3::new(self.iso_right, self.iso_up, self.iso_right);
            Mat4::look_at_rh(eye, eye + Vec3::new(1.0, 0.0, -1.0), Vec3::Y)
        } else {
            Mat4::look_at_rh(self.position, self.position + self.front, self.up)
        }
    }

    /// Projection matrix for the current mode
    pub fn projection_matrix(&self) -> Mat4 {
        if self.isometric {
            Mat4::orthographic_rh(
                -self.iso_zoom,
                self.iso_zoom,
                -self.iso_zoom,
                self.iso_zoom,
                ISO_NEAR,
                ISO_FAR,
            )
        } else {
            Mat4::perspective_rh(self.fov.to_radians(), self.aspect, 0.1, 10000.0)
        }
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Extra model-space tilt every object gets in isometric mode
    pub fn iso_model_tilt(&self) -> Option<Mat4> {
        if self.isometric {
            Some(
                Mat4::from_rotation_x(ISO_TILT_X.to_radians())
                    * Mat4::from_rotation_z(ISO_TILT_Z.to_radians()),
            )
        } else {
            None
        }
    }

    /// Move the camera. Free-fly in perspective mode; in isometric mode the
    /// same keys pan the view inside fixed bounds.
    pub fn process_movement(&mut self, direction: CameraMove, dt: f32) {
        if self.isometric {
            match direction {
                CameraMove::Forward => {
                    self.iso_up = clamp(self.iso_up + ISO_PAN_STEP, ISO_PAN_UP_MIN, ISO_PAN_UP_MAX)
                }
                CameraMove::Backward => {
                    self.iso_up = clamp(self.iso_up - ISO_PAN_STEP, ISO_PAN_UP_MIN, ISO_PAN_UP_MAX)
                }
                CameraMove::Left => {
                    self.iso_right = clamp(
                        self.iso_right - ISO_PAN_STEP,
                        -ISO_PAN_RIGHT_LIMIT,
                        ISO_PAN_RIGHT_LIMIT,
                    )
                }
                CameraMove::Right => {
                    self.iso_right = clamp(
                        self.iso_right + ISO_PAN_STEP,
                        -ISO_PAN_RIGHT_LIMIT,
                        ISO_PAN_RIGHT_LIMIT,
                    )
                }
            }
        } else {
            let velocity = MOVE_SPEED * dt;
            match direction {
                CameraMove::Forward => self.position += self.front * velocity,
                CameraMove::Backward => self.position -= self.front * velocity,
                CameraMove::Left => self.position -= self.right * velocity,
                CameraMove::Right => self.position += self.right * velocity,
            }
        }
    }

    /// Mouse look; ignored in isometric mode
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        if self.isometric {
            return;
        }
        self.yaw += dx * LOOK_SENSITIVITY;
        self.pitch = clamp(self.pitch + dy * LOOK_SENSITIVITY, -PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Scroll wheel narrows or widens the perspective field of view
    pub fn process_scroll(&mut self, dy: f32) {
        self.fov = clamp(self.fov - dy, MIN_FOV, MAX_FOV);
    }

    /// Grow or shrink the isometric view volume
    pub fn adjust_iso_zoom(&mut self, delta: f32) {
        self.iso_zoom = clamp(self.iso_zoom + delta, MIN_ISO_ZOOM, MAX_ISO_ZOOM);
    }

    pub fn set_isometric(&mut self, isometric: bool) {
        self.isometric = isometric;
    }

    pub fn is_isometric(&self) -> bool {
        self.isometric
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Recompute the basis vectors from yaw and pitch
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Camera uniform for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// World position, w unused
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        let position = camera.position();
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
            position: [position.x, position.y, position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 15.0, 350.0), 16.0 / 9.0);
        assert_relative_eq!(camera.front().x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front().z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_forward_movement_follows_front() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.process_movement(CameraMove::Forward, 1.0);
        assert_relative_eq!(camera.position().z, -MOVE_SPEED, epsilon = 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.process_mouse(0.0, 10_000.0);
        // Front must still have a horizontal component
        assert!(camera.front().y < 1.0);
        assert!(camera.front().y > 0.99);
    }

    #[test]
    fn test_scroll_zoom_clamped() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.process_scroll(100.0);
        let narrow = camera.view_proj_matrix();
        camera.process_scroll(100.0);
        // Already at the minimum fov, nothing changes
        assert_eq!(narrow, camera.view_proj_matrix());

        camera.process_scroll(-100.0);
        camera.process_scroll(-100.0);
        assert_ne!(narrow, camera.view_proj_matrix());
    }

    #[test]
    fn test_iso_zoom_clamped() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.set_isometric(true);
        for _ in 0..1000 {
            camera.adjust_iso_zoom(0.5);
        }
        // The ortho volume stops growing at the zoom cap
        let capped = camera.projection_matrix();
        camera.adjust_iso_zoom(0.5);
        assert_eq!(capped, camera.projection_matrix());
    }

    #[test]
    fn test_iso_pan_clamped() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.set_isometric(true);
        for _ in 0..1000 {
            camera.process_movement(CameraMove::Forward, 1.0);
        }
        let at_limit = camera.view_matrix();
        camera.process_movement(CameraMove::Forward, 1.0);
        assert_eq!(at_limit, camera.view_matrix());
    }

    #[test]
    fn test_mouse_ignored_in_isometric() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        camera.set_isometric(true);
        let before = camera.front();
        camera.process_mouse(100.0, 50.0);
        assert_eq!(camera.front(), before);
    }

    #[test]
    fn test_iso_tilt_only_in_iso_mode() {
        let mut camera = Camera::new(Vec3::ZERO, 1.0);
        assert!(camera.iso_model_tilt().is_none());
        camera.set_isometric(true);
        assert!(camera.iso_model_tilt().is_some());
    }
}
