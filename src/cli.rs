//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::IslandError;
use crate::params::TerrainConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "islandgen")]
#[command(about = "Procedural fractal-noise island generator", long_about = None)]
pub struct Args {
    /// JSON file with noise, grid and palette settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Per-octave amplitude gain (0..1)
    #[arg(long)]
    pub gain: Option<f32>,

    /// Per-octave frequency growth (1..3)
    #[arg(long)]
    pub lacunarity: Option<f32>,

    /// Number of noise octaves (1..8)
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Noise seed
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Base noise scale
    #[arg(long)]
    pub scale: Option<f32>,

    /// Noise-space offset along X
    #[arg(long, allow_negative_numbers = true)]
    pub shift_x: Option<f32>,

    /// Noise-space offset along Y
    #[arg(long, allow_negative_numbers = true)]
    pub shift_y: Option<f32>,

    /// Grid vertices per side
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Terrain side length (meters)
    #[arg(long, value_name = "METERS")]
    pub length: Option<f32>,

    /// Vertical scale (meters)
    #[arg(long, value_name = "METERS")]
    pub height: Option<f32>,

    /// Write a 16-bit grayscale heightmap PNG and exit
    #[arg(long, value_name = "PNG")]
    pub heightmap: Option<PathBuf>,

    /// Write a palette-colored map PNG and exit
    #[arg(long, value_name = "PNG")]
    pub colormap: Option<PathBuf>,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn terrain_config(&self) -> Result<TerrainConfig, IslandError> {
        let mut config = match &self.config {
            Some(path) => TerrainConfig::load(path)?,
            None => TerrainConfig::default(),
        };

        let noise = &mut config.noise;
        if let Some(gain) = self.gain {
            noise.gain = gain;
        }
        if let Some(lacunarity) = self.lacunarity {
            noise.lacunarity = lacunarity;
        }
        if let Some(octaves) = self.octaves {
            noise.octaves = octaves;
        }
        if let Some(seed) = self.seed {
            noise.seed = seed;
        }
        if let Some(scale) = self.scale {
            noise.scale = scale;
        }
        if let Some(x) = self.shift_x {
            noise.shift[0] = x;
        }
        if let Some(y) = self.shift_y {
            noise.shift[1] = y;
        }

        let grid = &mut config.grid;
        if let Some(resolution) = self.resolution {
            grid.resolution = resolution;
        }
        if let Some(length) = self.length {
            grid.length_m = length;
        }
        if let Some(height) = self.height {
            grid.height_m = height;
        }

        Ok(config)
    }

    /// True when only image export was requested
    pub fn is_headless(&self) -> bool {
        self.heightmap.is_some() || self.colormap.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = Args::parse_from([
            "islandgen",
            "--octaves",
            "6",
            "--seed",
            "-3",
            "--resolution",
            "64",
            "--heightmap",
            "out.png",
        ]);
        let config = args.terrain_config().unwrap();

        assert_eq!(config.noise.octaves, 6);
        assert_eq!(config.noise.seed, -3);
        assert_eq!(config.grid.resolution, 64);
        assert_eq!(config.grid.length_m, 256.0);
        assert!(args.is_headless());
    }

    #[test]
    fn test_shift_override_keeps_other_axis() {
        let args = Args::parse_from(["islandgen", "--shift-x", "-12.5"]);
        let config = args.terrain_config().unwrap();
        assert_eq!(config.noise.shift, [-12.5, 0.0]);

        let args = Args::parse_from(["islandgen", "--shift-x", "4", "--shift-y", "-0.25"]);
        let config = args.terrain_config().unwrap();
        assert_eq!(config.noise.shift, [4.0, -0.25]);
    }

    #[test]
    fn test_no_export_opens_viewer() {
        let args = Args::parse_from(["islandgen"]);
        assert!(!args.is_headless());
        assert_eq!(args.terrain_config().unwrap(), TerrainConfig::default());
    }
}
