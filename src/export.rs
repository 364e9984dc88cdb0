//! PNG export of generated heightfields.
//!
//! Pixel (x, y) holds grid vertex (i = x, j = y), so image axes follow
//! world X and Z.

use std::path::Path;

use image::{ImageBuffer, Luma, Rgba as RgbaPixel, RgbaImage};
use tracing::info;

use crate::error::IslandError;
use crate::palette::Gradient;
use crate::terrain::Heightfield;

/// Write a 16-bit grayscale heightmap; elevations are clamped to [0, 1]
pub fn save_heightmap(field: &Heightfield, path: impl AsRef<Path>) -> Result<(), IslandError> {
    let size = field.resolution() as u32;
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_fn(size, size, |x, y| {
        let elevation = field.get(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(elevation * u16::MAX as f32).round() as u16])
    });

    img.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), size, "saved heightmap");
    Ok(())
}

/// Write the palette-colored elevation map
pub fn save_color_map(
    field: &Heightfield,
    palette: &Gradient,
    path: impl AsRef<Path>,
) -> Result<(), IslandError> {
    let size = field.resolution() as u32;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let color = palette.evaluate(field.get(x as usize, y as usize));
        RgbaPixel(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
    });

    img.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), size, "saved color map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{GridSpec, NoiseParams};
    use crate::terrain::PerlinSource;

    fn sample_field() -> Heightfield {
        let grid = GridSpec {
            resolution: 33,
            ..GridSpec::default()
        };
        let params = NoiseParams {
            octaves: 3,
            gain: 0.5,
            lacunarity: 2.0,
            ..NoiseParams::default()
        };
        Heightfield::generate(&grid, &params, &PerlinSource::default()).unwrap()
    }

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("islandgen-{}-{}.png", name, std::process::id()))
    }

    #[test]
    fn test_heightmap_round_trips_through_png() {
        let field = sample_field();
        let path = temp_png("height");
        save_heightmap(&field, &path).unwrap();

        let img = image::open(&path).unwrap().into_luma16();
        std::fs::remove_file(&path).ok();

        assert_eq!(img.dimensions(), (33, 33));
        // Corners are below the island rim
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        let expected = (field.get(16, 16).clamp(0.0, 1.0) * u16::MAX as f32).round() as u16;
        assert_eq!(img.get_pixel(16, 16)[0], expected);
    }

    #[test]
    fn test_color_map_uses_palette() {
        let field = sample_field();
        let palette = Gradient::island();
        let path = temp_png("color");
        save_color_map(&field, &palette, &path).unwrap();

        let img = image::open(&path).unwrap().into_rgba8();
        std::fs::remove_file(&path).ok();

        let sea = palette.evaluate(0.0).map(|c| (c * 255.0).round() as u8);
        assert_eq!(img.get_pixel(0, 0).0, sea);
    }
}
