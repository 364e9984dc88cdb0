//! Parameter definitions with physical units and documented semantics.
//!
//! Defaults reproduce the island editor's initial settings.

mod config;
mod render;
mod terrain;

// Re-export all types
pub use config::TerrainConfig;
pub use render::{OrbitCamera, RenderConfig};
pub use terrain::{
    GridSpec, IslandParams, NoiseParams, GAIN_RANGE, LACUNARITY_RANGE, OCTAVES_RANGE,
};
