//! Island terrain generation: fractal noise, island falloff and mesh building.

pub mod fractal;
pub mod island;
pub mod mesh;
pub mod system;

pub use fractal::{fractal_noise, CoherentNoise, PerlinSource};
pub use island::{falloff, shape_island};
pub use mesh::{
    build_mesh, build_mesh_with, grid_coord, grid_indices, Heightfield, MeshData,
    ELEVATION_STRETCH,
};
pub use system::IslandTerrain;
