// Scene lighting uniforms

use super::camera::Camera;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Direction of the sun light
const SUN_DIRECTION: Vec3 = Vec3::new(0.0, -1.0, -1.0);
/// Warm light over the stage
const STAGE_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 4.0, -10.0);
const STAGE_LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
/// Cool accent light over the bar
const BAR_LIGHT_POSITION: Vec3 = Vec3::new(-80.0, 0.0, 0.0);
const BAR_LIGHT_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Flashlight cone carried by the camera, degrees
const SPOT_INNER_DEG: f32 = 10.0;
const SPOT_OUTER_DEG: f32 = 20.0;

/// GPU lighting state, rebuilt every frame. The ambient term is the only
/// dynamic channel; it carries the day/night cycle into the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LightsUniform {
    /// Shared ambient brightness in rgb, w unused
    pub ambient: [f32; 4],
    pub sun_direction: [f32; 4],
    pub point_position: [[f32; 4]; 2],
    pub point_color: [[f32; 4]; 2],
    pub spot_position: [f32; 4],
    pub spot_direction: [f32; 4],
    /// x = inner cutoff cosine, y = outer cutoff cosine
    pub spot_params: [f32; 4],
}

impl LightsUniform {
    /// Build the frame's lighting from the day/night ambient level and the
    /// camera-held spotlight.
    pub fn new(ambient: f32, camera: &Camera) -> Self {
        let position = camera.position();
        let front = camera.front();
        Self {
            ambient: [ambient, ambient, ambient, 1.0],
            sun_direction: extend(SUN_DIRECTION),
            point_position: [extend(STAGE_LIGHT_POSITION), extend(BAR_LIGHT_POSITION)],
            point_color: [extend(STAGE_LIGHT_COLOR), extend(BAR_LIGHT_COLOR)],
            spot_position: extend(position),
            spot_direction: extend(front),
            spot_params: [
                SPOT_INNER_DEG.to_radians().cos(),
                SPOT_OUTER_DEG.to_radians().cos(),
                0.0,
                0.0,
            ],
        }
    }
}

fn extend(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_fills_all_channels() {
        let camera = Camera::new(Vec3::ZERO, 1.0);
        let lights = LightsUniform::new(0.35, &camera);
        assert_eq!(lights.ambient[0], 0.35);
        assert_eq!(lights.ambient[1], 0.35);
        assert_eq!(lights.ambient[2], 0.35);
    }

    #[test]
    fn test_spot_follows_camera() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let lights = LightsUniform::new(0.5, &camera);
        assert_eq!(lights.spot_position[0], 1.0);
        assert_eq!(lights.spot_position[1], 2.0);
        assert_eq!(lights.spot_position[2], 3.0);
        // Inner cone is tighter than the outer cone
        assert!(lights.spot_params[0] > lights.spot_params[1]);
    }
}
