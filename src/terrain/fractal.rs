//! Fractal (multi-octave) noise built on a coherent 2D noise primitive.

use glam::Vec2;
use noise::{NoiseFn, Perlin};

use crate::params::NoiseParams;

/// Deterministic 2D coherent noise with output in [0, 1]
pub trait CoherentNoise {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Perlin gradient noise remapped to [0, 1]
///
/// Integer lattice points sample to exactly 0.5.
#[derive(Debug, Clone)]
pub struct PerlinSource {
    perlin: Perlin,
}

impl PerlinSource {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinSource {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoherentNoise for PerlinSource {
    fn sample(&self, x: f64, y: f64) -> f64 {
        ((self.perlin.get([x, y]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Sum `params.octaves` layers of coherent noise at `coord`
///
/// Each layer samples at `scale * frequency * coord + seed + shift` and
/// contributes `amplitude * (2n - 1)`. Amplitude and frequency start at 1
/// and are multiplied by gain and lacunarity after each layer. The total is
/// floored at zero so terrain never dips below sea level.
pub fn fractal_noise<N>(noise: &N, coord: Vec2, params: &NoiseParams) -> f32
where
    N: CoherentNoise + ?Sized,
{
    let seed = params.seed as f64;
    let offset = [
        seed + params.shift[0] as f64,
        seed + params.shift[1] as f64,
    ];
    let (x, y) = (coord.x as f64, coord.y as f64);
    let mut sum = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;

    for _ in 0..params.octaves {
        let step = (params.scale * frequency) as f64;
        let n = noise.sample(step * x + offset[0], step * y + offset[1]) as f32;
        sum += amplitude * (2.0 * n - 1.0);
        amplitude *= params.gain;
        frequency *= params.lacunarity;
    }

    sum.max(0.0)
}
