//! Radial falloff that sculpts the heightfield into a single island.

use glam::Vec2;

/// Falloff factor `p` for a normalized grid coordinate
///
/// The grid position is measured from vertex `resolution / 2` (floor
/// division) and scaled so that `r = 1` at half the grid width. The falloff
/// is `(1 - r) * 3`: at least 1 inside the inner third of the radius,
/// negative beyond the rim.
pub fn falloff(coord: Vec2, resolution: usize) -> f32 {
    let half = (resolution / 2) as f32;
    let span = (resolution - 1) as f32;
    let offset = coord * span - Vec2::splat(half);
    let r = offset.length() / half;
    (1.0 - r) * 3.0
}

/// Attenuate `elevation` by the island falloff at `coord`
///
/// Flat core where `p >= 1`, linear ring where `0 <= p < 1`, sea floor
/// beyond the rim.
pub fn shape_island(coord: Vec2, resolution: usize, elevation: f32) -> f32 {
    let p = falloff(coord, resolution);
    if p < 0.0 {
        0.0
    } else if p >= 1.0 {
        elevation
    } else {
        p * elevation
    }
}
