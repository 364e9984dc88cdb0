//! Elevation-to-color gradients.

use serde::{Deserialize, Serialize};

use crate::error::IslandError;

/// Linear RGBA color
pub type Rgba = [f32; 4];

/// A color pinned to a position in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: f32,
    pub color: Rgba,
}

impl ColorKey {
    pub const fn new(time: f32, color: Rgba) -> Self {
        Self { time, color }
    }
}

/// Piecewise-linear color gradient over [0, 1]
///
/// Inputs outside [0, 1] are clamped, so elevations above 1.0 take the
/// last key's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorKey>", into = "Vec<ColorKey>")]
pub struct Gradient {
    keys: Vec<ColorKey>,
}

impl Gradient {
    /// Build a gradient from unordered keys
    pub fn new(mut keys: Vec<ColorKey>) -> Result<Self, IslandError> {
        if keys.is_empty() {
            return Err(IslandError::EmptyGradient);
        }
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(Self { keys })
    }

    /// Sea floor to snow caps, tuned for island elevations
    pub fn island() -> Self {
        Self {
            keys: vec![
                ColorKey::new(0.00, [0.05, 0.16, 0.42, 1.0]), // Deep water
                ColorKey::new(0.04, [0.16, 0.45, 0.70, 1.0]), // Shallows
                ColorKey::new(0.08, [0.87, 0.80, 0.55, 1.0]), // Sand
                ColorKey::new(0.20, [0.30, 0.62, 0.22, 1.0]), // Grass
                ColorKey::new(0.55, [0.18, 0.40, 0.15, 1.0]), // Forest
                ColorKey::new(0.75, [0.45, 0.40, 0.36, 1.0]), // Rock
                ColorKey::new(0.92, [0.96, 0.96, 0.98, 1.0]), // Snow
            ],
        }
    }

    pub fn grayscale() -> Self {
        Self {
            keys: vec![
                ColorKey::new(0.0, [0.0, 0.0, 0.0, 1.0]),
                ColorKey::new(1.0, [1.0, 1.0, 1.0, 1.0]),
            ],
        }
    }

    pub fn keys(&self) -> &[ColorKey] {
        &self.keys
    }

    /// Sample the gradient at `t`
    pub fn evaluate(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let first = self.keys[0];
        if t <= first.time {
            return first.color;
        }

        for pair in self.keys.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.time {
                let span = hi.time - lo.time;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                let blend = (t - lo.time) / span;
                return std::array::from_fn(|c| lo.color[c] + (hi.color[c] - lo.color[c]) * blend);
            }
        }

        self.keys[self.keys.len() - 1].color
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::island()
    }
}

impl TryFrom<Vec<ColorKey>> for Gradient {
    type Error = IslandError;

    fn try_from(keys: Vec<ColorKey>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<Gradient> for Vec<ColorKey> {
    fn from(gradient: Gradient) -> Self {
        gradient.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_and_clamping() {
        let gray = Gradient::grayscale();
        assert_eq!(gray.evaluate(0.0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(gray.evaluate(1.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(gray.evaluate(-3.0), gray.evaluate(0.0));
        assert_eq!(gray.evaluate(1.7), gray.evaluate(1.0));
    }

    #[test]
    fn test_linear_blend_between_keys() {
        let gray = Gradient::grayscale();
        let mid = gray.evaluate(0.25);
        assert_relative_eq!(mid[0], 0.25, epsilon = 1e-6);
        assert_relative_eq!(mid[2], 0.25, epsilon = 1e-6);
        assert_relative_eq!(mid[3], 1.0);
    }

    #[test]
    fn test_keys_are_sorted_on_construction() {
        let gradient = Gradient::new(vec![
            ColorKey::new(1.0, [1.0, 0.0, 0.0, 1.0]),
            ColorKey::new(0.5, [0.0, 1.0, 0.0, 1.0]),
        ])
        .unwrap();
        assert_eq!(gradient.keys()[0].time, 0.5);
        // Below the first key the first color holds
        assert_eq!(gradient.evaluate(0.1), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_empty_gradient_rejected() {
        assert!(matches!(
            Gradient::new(Vec::new()),
            Err(IslandError::EmptyGradient)
        ));
    }

    #[test]
    fn test_island_preset_starts_with_water() {
        let island = Gradient::island();
        let sea = island.evaluate(0.0);
        assert!(sea[2] > sea[0] && sea[2] > sea[1]);
    }
}
