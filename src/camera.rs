//! Orbit camera circling the island.

use glam::{Mat4, Vec3};

use crate::params::{GridSpec, OrbitCamera, RenderConfig};

/// Camera system orbiting the center of the terrain
pub struct CameraSystem {
    params: OrbitCamera,
    yaw_degrees: f32,
    pitch_degrees: f32,
}

impl CameraSystem {
    pub fn new(params: OrbitCamera) -> Self {
        let (min_pitch, max_pitch) = params.pitch_limits;
        Self {
            yaw_degrees: params.yaw_degrees,
            pitch_degrees: params.pitch_degrees.clamp(min_pitch, max_pitch),
            params,
        }
    }

    /// Rotate around the island by `steps` key presses (negative = clockwise)
    pub fn rotate(&mut self, steps: f32) {
        self.yaw_degrees = (self.yaw_degrees + steps * self.params.key_step_degrees) % 360.0;
    }

    /// Tilt up or down by `steps` key presses, clamped to the pitch limits
    pub fn tilt(&mut self, steps: f32) {
        let (min_pitch, max_pitch) = self.params.pitch_limits;
        self.pitch_degrees =
            (self.pitch_degrees + steps * self.params.key_step_degrees).clamp(min_pitch, max_pitch);
    }

    /// Compute eye and look-at target for the given time
    ///
    /// The target sits above the island center at a fraction of the
    /// terrain height; the orbit radius scales with terrain length.
    pub fn compute_position_and_target(&self, time_s: f32, grid: &GridSpec) -> (Vec3, Vec3) {
        let half = grid.length_m * 0.5;
        let target = Vec3::new(half, grid.height_m * 0.25, half);

        let yaw = (self.yaw_degrees + time_s * self.params.auto_rotate_deg_per_s).to_radians();
        let pitch = self.pitch_degrees.to_radians();
        let distance = grid.length_m * self.params.distance_factor;

        let offset = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        ) * distance;

        (target + offset, target)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        grid: &GridSpec,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s, grid);

        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }
}
