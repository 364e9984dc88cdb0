//! Island terrain state with dirty-flag regeneration.

use std::time::Instant;

use tracing::debug;

use super::fractal::{CoherentNoise, PerlinSource};
use super::mesh::{Heightfield, MeshData};
use crate::error::IslandError;
use crate::palette::Gradient;
use crate::params::{IslandParams, GAIN_RANGE, LACUNARITY_RANGE, OCTAVES_RANGE};

/// Owns the island parameters and the most recently generated mesh
///
/// Parameter changes only mark the terrain dirty. The host calls
/// [`IslandTerrain::regenerate_if_dirty`] once per frame, so any number of
/// changes between frames collapse into a single rebuild.
pub struct IslandTerrain<N = PerlinSource> {
    noise: N,
    params: IslandParams,
    palette: Gradient,
    mesh: MeshData,
    dirty: bool,
    generation: u64,
}

impl IslandTerrain<PerlinSource> {
    /// Create terrain using Perlin noise and build the initial mesh
    pub fn new(params: IslandParams, palette: Gradient) -> Result<Self, IslandError> {
        Self::with_noise(PerlinSource::default(), params, palette)
    }
}

impl<N: CoherentNoise> IslandTerrain<N> {
    pub fn with_noise(
        noise: N,
        params: IslandParams,
        palette: Gradient,
    ) -> Result<Self, IslandError> {
        let mut terrain = Self {
            noise,
            params,
            palette,
            mesh: MeshData::default(),
            dirty: false,
            generation: 0,
        };
        terrain.regenerate()?;
        Ok(terrain)
    }

    pub fn params(&self) -> &IslandParams {
        &self.params
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Number of successful rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Edit parameters in place and schedule a rebuild
    pub fn update(&mut self, edit: impl FnOnce(&mut IslandParams)) {
        edit(&mut self.params);
        self.dirty = true;
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.update(|p| p.noise.gain = gain.clamp(*GAIN_RANGE.start(), *GAIN_RANGE.end()));
    }

    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.update(|p| {
            p.noise.lacunarity =
                lacunarity.clamp(*LACUNARITY_RANGE.start(), *LACUNARITY_RANGE.end())
        });
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.update(|p| {
            p.noise.octaves = octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end())
        });
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.update(|p| p.noise.seed = seed);
    }

    /// Rebuild if anything changed since the last rebuild
    ///
    /// Returns `Ok(true)` when a new mesh was produced. A rejected parameter
    /// set clears the flag and keeps the previous mesh.
    pub fn regenerate_if_dirty(&mut self) -> Result<bool, IslandError> {
        if !self.dirty {
            return Ok(false);
        }
        self.dirty = false;
        self.regenerate()?;
        Ok(true)
    }

    /// Rebuild the mesh unconditionally
    pub fn regenerate(&mut self) -> Result<(), IslandError> {
        let start = Instant::now();
        let field = Heightfield::generate(&self.params.grid, &self.params.noise, &self.noise)?;
        let palette = &self.palette;
        self.mesh = MeshData::from_heightfield(&field, &self.params.grid, |e| palette.evaluate(e));
        self.dirty = false;
        self.generation += 1;

        debug!(
            generation = self.generation,
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            peak = field.max_elevation(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "regenerated island mesh"
        );
        Ok(())
    }
}
