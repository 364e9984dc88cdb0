//! Islandgen library - Fractal-noise island terrain generation

pub mod camera;
pub mod cli;
pub mod error;
pub mod export;
pub mod palette;
pub mod params;
pub mod rendering;
pub mod terrain;

pub use error::IslandError;
