//! Noise and grid parameters for island generation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::IslandError;

/// Slider range for per-octave amplitude gain
pub const GAIN_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Slider range for per-octave frequency growth
pub const LACUNARITY_RANGE: RangeInclusive<f32> = 1.0..=3.0;

/// Slider range for octave count
pub const OCTAVES_RANGE: RangeInclusive<u32> = 1..=8;

/// Fractal noise parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Amplitude multiplier applied after each octave (persistence, UI range 0..1)
    pub gain: f32,

    /// Frequency multiplier applied after each octave (UI range 1..3)
    pub lacunarity: f32,

    /// Number of octaves summed (at least 1, UI range 1..8)
    pub octaves: u32,

    /// Base sampling scale (noise cycles across the whole grid)
    pub scale: f32,

    /// Offset added to every sample coordinate
    pub shift: [f32; 2],

    /// Seed, added to both sample coordinates
    pub seed: i32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            gain: 0.1,
            lacunarity: 1.0,
            octaves: 1,
            scale: 5.0,
            shift: [0.0, 0.0],
            seed: 0,
        }
    }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<(), IslandError> {
        if self.octaves < 1 {
            return Err(IslandError::NoOctaves);
        }
        Ok(())
    }
}

/// Heightfield grid layout in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Vertices per side (256 = 65,536 vertices)
    pub resolution: usize,

    /// Side length of the square terrain (meters)
    pub length_m: f32,

    /// Vertical scale applied to elevation (meters at elevation 1.0)
    pub height_m: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            resolution: 256,
            length_m: 256.0,
            height_m: 50.0,
        }
    }
}

impl GridSpec {
    /// Largest resolution whose vertices are all addressable by a `u32` index
    pub const MAX_RESOLUTION: usize = 1 << 16;

    pub fn vertex_count(&self) -> usize {
        self.resolution * self.resolution
    }

    pub fn validate(&self) -> Result<(), IslandError> {
        if self.resolution < 2 {
            return Err(IslandError::ResolutionTooSmall(self.resolution));
        }
        if self.resolution > Self::MAX_RESOLUTION {
            return Err(IslandError::ResolutionTooLarge(self.resolution));
        }
        Ok(())
    }
}

/// Complete parameter set for one island
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandParams {
    pub noise: NoiseParams,
    pub grid: GridSpec,
}

impl IslandParams {
    pub fn validate(&self) -> Result<(), IslandError> {
        self.grid.validate()?;
        self.noise.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor_values() {
        let params = IslandParams::default();
        assert_eq!(params.noise.octaves, 1);
        assert_eq!(params.noise.gain, 0.1);
        assert_eq!(params.noise.scale, 5.0);
        assert_eq!(params.grid.resolution, 256);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_counts() {
        let grid = GridSpec {
            resolution: 4,
            ..GridSpec::default()
        };
        assert_eq!(grid.vertex_count(), 16);
    }

    #[test]
    fn test_validate_rejects_degenerate_input() {
        let mut params = IslandParams::default();
        params.grid.resolution = 1;
        assert!(matches!(
            params.validate(),
            Err(IslandError::ResolutionTooSmall(1))
        ));

        params.grid.resolution = GridSpec::MAX_RESOLUTION + 1;
        assert!(matches!(
            params.validate(),
            Err(IslandError::ResolutionTooLarge(_))
        ));

        params.grid.resolution = 2;
        params.noise.octaves = 0;
        assert!(matches!(params.validate(), Err(IslandError::NoOctaves)));
    }
}
