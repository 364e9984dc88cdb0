//! Heightfield sampling and grid triangulation.

use glam::Vec2;

use super::fractal::{fractal_noise, CoherentNoise, PerlinSource};
use super::island::shape_island;
use crate::error::IslandError;
use crate::palette::Rgba;
use crate::params::{GridSpec, NoiseParams};

/// Stretches the fractal sum, which clusters low, over more of [0, 1]
pub const ELEVATION_STRETCH: f32 = 1.414214;

/// Island-shaped elevations on a square grid, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Heightfield {
    resolution: usize,
    elevations: Vec<f32>,
}

impl Heightfield {
    /// Sample noise and apply the island falloff at every grid vertex
    pub fn generate<N>(
        grid: &GridSpec,
        params: &NoiseParams,
        noise: &N,
    ) -> Result<Self, IslandError>
    where
        N: CoherentNoise + ?Sized,
    {
        grid.validate()?;
        params.validate()?;

        let resolution = grid.resolution;
        let mut elevations = Vec::with_capacity(grid.vertex_count());
        for i in 0..resolution {
            for j in 0..resolution {
                let coord = grid_coord(i, j, resolution);
                let raw = ELEVATION_STRETCH * fractal_noise(noise, coord, params);
                elevations.push(shape_island(coord, resolution, raw));
            }
        }

        Ok(Self {
            resolution,
            elevations,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn elevations(&self) -> &[f32] {
        &self.elevations
    }

    /// Elevation at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.elevations[i * self.resolution + j]
    }

    pub fn max_elevation(&self) -> f32 {
        self.elevations.iter().copied().fold(0.0, f32::max)
    }
}

/// Normalized coordinate of grid vertex (i, j)
pub fn grid_coord(i: usize, j: usize, resolution: usize) -> Vec2 {
    let span = (resolution - 1) as f32;
    Vec2::new(i as f32 / span, j as f32 / span)
}

/// Renderable island surface as index-aligned arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<Rgba>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Place heightfield vertices in world space and color them by elevation
    ///
    /// X and Z span `[0, length_m]`, Y is elevation times `height_m`.
    pub fn from_heightfield<C>(field: &Heightfield, grid: &GridSpec, color_of: C) -> Self
    where
        C: Fn(f32) -> Rgba,
    {
        let resolution = field.resolution();
        let mut positions = Vec::with_capacity(field.elevations.len());
        let mut colors = Vec::with_capacity(field.elevations.len());

        for i in 0..resolution {
            for j in 0..resolution {
                let coord = grid_coord(i, j, resolution);
                let elevation = field.get(i, j);
                positions.push([
                    grid.length_m * coord.x,
                    grid.height_m * elevation,
                    grid.length_m * coord.y,
                ]);
                colors.push(color_of(elevation));
            }
        }

        Self {
            positions,
            colors,
            indices: grid_indices(resolution),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Triangle list covering a `resolution` x `resolution` vertex grid
///
/// Cells are visited row-major; the last column and last row never start a
/// cell, so no triangle wraps across a row boundary. For a cell whose first
/// vertex is `v` the two triangles are `(v, v+1, v+res)` and
/// `(v+res+1, v+res, v+1)`, both wound counter-clockwise seen from +Y.
pub fn grid_indices(resolution: usize) -> Vec<u32> {
    let cells = resolution.saturating_sub(1);
    let mut indices = Vec::with_capacity(cells * cells * 6);
    let stride = resolution as u32;

    for row in 0..cells {
        for col in 0..cells {
            let v = (row * resolution + col) as u32;
            indices.extend_from_slice(&[
                v,
                v + 1,
                v + stride,
                v + stride + 1,
                v + stride,
                v + 1,
            ]);
        }
    }

    indices
}

/// Build the island mesh using Perlin noise
pub fn build_mesh<C>(
    grid: &GridSpec,
    params: &NoiseParams,
    color_of: C,
) -> Result<MeshData, IslandError>
where
    C: Fn(f32) -> Rgba,
{
    build_mesh_with(grid, params, &PerlinSource::default(), color_of)
}

/// Build the island mesh from an arbitrary coherent noise source
///
/// Parameters are validated before any buffer is allocated.
pub fn build_mesh_with<N, C>(
    grid: &GridSpec,
    params: &NoiseParams,
    noise: &N,
    color_of: C,
) -> Result<MeshData, IslandError>
where
    N: CoherentNoise + ?Sized,
    C: Fn(f32) -> Rgba,
{
    let field = Heightfield::generate(grid, params, noise)?;
    Ok(MeshData::from_heightfield(&field, grid, color_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Gradient;
    use crate::terrain::island::falloff;

    fn scenario_grid() -> GridSpec {
        GridSpec {
            resolution: 4,
            length_m: 10.0,
            height_m: 5.0,
        }
    }

    fn scenario_noise() -> NoiseParams {
        NoiseParams {
            gain: 0.1,
            lacunarity: 1.0,
            octaves: 1,
            scale: 1.0,
            shift: [0.0, 0.0],
            seed: 0,
        }
    }

    fn gray(elevation: f32) -> Rgba {
        Gradient::grayscale().evaluate(elevation)
    }

    /// Constant-valued noise for exact elevation checks
    struct Flat(f64);

    impl CoherentNoise for Flat {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_small_grid_scenario() {
        let mesh = build_mesh(&scenario_grid(), &scenario_noise(), gray).unwrap();

        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.colors.len(), 16);
        assert_eq!(mesh.triangle_count(), 18);
        assert_eq!(mesh.indices.len(), 54);

        let first = mesh.positions[0];
        assert_eq!((first[0], first[2]), (0.0, 0.0));
        let last = mesh.positions[3 * 4 + 3];
        assert_eq!((last[0], last[2]), (10.0, 10.0));
    }

    #[test]
    fn test_counts_and_index_bounds() {
        for resolution in [2, 3, 7, 16, 33] {
            let grid = GridSpec {
                resolution,
                ..scenario_grid()
            };
            let mesh = build_mesh(&grid, &NoiseParams::default(), gray).unwrap();
            let vertex_count = resolution * resolution;

            assert_eq!(mesh.vertex_count(), vertex_count);
            assert_eq!(mesh.indices.len(), 6 * (resolution - 1).pow(2));
            assert!(mesh.indices.iter().all(|&i| (i as usize) < vertex_count));
        }
    }

    #[test]
    fn test_first_cell_winding() {
        assert_eq!(grid_indices(3)[..6], [0, 1, 3, 4, 3, 1]);
    }

    #[test]
    fn test_no_triangle_wraps_across_rows() {
        let resolution = 5;
        let indices = grid_indices(resolution);
        for triangle in indices.chunks(3) {
            let columns: Vec<usize> = triangle.iter().map(|&v| v as usize % resolution).collect();
            let rows: Vec<usize> = triangle.iter().map(|&v| v as usize / resolution).collect();
            let col_span = columns.iter().max().unwrap() - columns.iter().min().unwrap();
            let row_span = rows.iter().max().unwrap() - rows.iter().min().unwrap();
            assert_eq!(col_span, 1, "triangle {:?} wraps a row", triangle);
            assert_eq!(row_span, 1);
        }
        // Second row of cells starts on the next row, not the last column
        assert_eq!(indices[6 * 4], 5);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let tiny = GridSpec {
            resolution: 1,
            ..scenario_grid()
        };
        assert!(matches!(
            build_mesh(&tiny, &scenario_noise(), gray),
            Err(IslandError::ResolutionTooSmall(1))
        ));

        let silent = NoiseParams {
            octaves: 0,
            ..scenario_noise()
        };
        assert!(matches!(
            build_mesh(&scenario_grid(), &silent, gray),
            Err(IslandError::NoOctaves)
        ));
    }

    #[test]
    fn test_corner_is_sea_level_and_center_is_raw() {
        let grid = GridSpec {
            resolution: 9,
            ..scenario_grid()
        };
        let noise = Flat(0.9);
        let field = Heightfield::generate(&grid, &scenario_noise(), &noise).unwrap();

        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(8, 8), 0.0);

        let raw = ELEVATION_STRETCH * (2.0 * 0.9f64 as f32 - 1.0);
        assert!(falloff(grid_coord(4, 4, 9), 9) >= 1.0);
        assert_eq!(field.get(4, 4), raw);
    }

    #[test]
    fn test_vertex_height_and_color_follow_elevation() {
        let grid = GridSpec {
            resolution: 9,
            length_m: 8.0,
            height_m: 20.0,
        };
        let mesh = build_mesh_with(&grid, &scenario_noise(), &Flat(0.75), gray).unwrap();
        let center = 4 * 9 + 4;
        let elevation = ELEVATION_STRETCH * 0.5;

        assert_eq!(mesh.positions[center], [4.0, 20.0 * elevation, 4.0]);
        assert_eq!(mesh.colors[center], gray(elevation));
        assert_eq!(mesh.positions[0][1], 0.0);
    }

    #[test]
    fn test_rebuild_is_bit_identical() {
        let params = NoiseParams {
            octaves: 5,
            gain: 0.45,
            lacunarity: 2.1,
            seed: 17,
            ..NoiseParams::default()
        };
        let grid = GridSpec {
            resolution: 32,
            ..GridSpec::default()
        };
        let a = build_mesh(&grid, &params, gray).unwrap();
        let b = build_mesh(&grid, &params, gray).unwrap();

        assert_eq!(a.indices, b.indices);
        let bits = |mesh: &MeshData| -> Vec<u32> {
            mesh.positions
                .iter()
                .flatten()
                .chain(mesh.colors.iter().flatten())
                .map(|v| v.to_bits())
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_max_elevation() {
        let grid = GridSpec {
            resolution: 9,
            ..scenario_grid()
        };
        let field = Heightfield::generate(&grid, &scenario_noise(), &Flat(1.0)).unwrap();
        assert_eq!(field.max_elevation(), ELEVATION_STRETCH);
        assert_eq!(field.elevations().len(), 81);
    }
}
