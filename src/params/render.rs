//! Viewer window and camera configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Direction the sunlight travels from (normalized in the shader)
    pub sun_direction: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane_m: 0.5,
            far_plane_m: 4000.0, // Covers the default island at max orbit distance
            sun_direction: [0.4, 1.0, 0.3],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Orbit camera circling the island center
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Initial heading around the island (degrees)
    pub yaw_degrees: f32,

    /// Elevation angle above the horizon (degrees, clamped to pitch_limits)
    pub pitch_degrees: f32,

    /// Allowed pitch range (degrees)
    pub pitch_limits: (f32, f32),

    /// Orbit radius as a multiple of the terrain length
    pub distance_factor: f32,

    /// Automatic rotation speed (degrees per second, 0 = still)
    pub auto_rotate_deg_per_s: f32,

    /// Manual rotation step per key press (degrees)
    pub key_step_degrees: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw_degrees: 45.0,
            pitch_degrees: 35.0,
            pitch_limits: (5.0, 85.0),
            distance_factor: 1.1,
            auto_rotate_deg_per_s: 6.0,
            key_step_degrees: 5.0,
        }
    }
}
