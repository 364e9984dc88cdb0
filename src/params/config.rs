//! JSON configuration file support.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::terrain::{GridSpec, IslandParams, NoiseParams};
use crate::error::IslandError;
use crate::palette::Gradient;

/// Everything needed to generate and color an island, as stored on disk
///
/// Every field is optional in the file; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub noise: NoiseParams,
    pub grid: GridSpec,
    pub palette: Gradient,
}

impl TerrainConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IslandError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| IslandError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn island(&self) -> IslandParams {
        IslandParams {
            noise: self.noise,
            grid: self.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TerrainConfig =
            serde_json::from_str(r#"{ "noise": { "octaves": 4, "seed": 7 } }"#).unwrap();
        assert_eq!(config.noise.octaves, 4);
        assert_eq!(config.noise.seed, 7);
        assert_eq!(config.noise.gain, NoiseParams::default().gain);
        assert_eq!(config.grid, GridSpec::default());
        assert_eq!(config.palette, Gradient::island());
    }

    #[test]
    fn test_palette_from_keys() {
        let config: TerrainConfig = serde_json::from_str(
            r#"{ "palette": [
                { "time": 1.0, "color": [1.0, 1.0, 1.0, 1.0] },
                { "time": 0.0, "color": [0.0, 0.0, 0.0, 1.0] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.palette, Gradient::grayscale());
    }

    #[test]
    fn test_empty_palette_is_a_parse_error() {
        let result: Result<TerrainConfig, _> = serde_json::from_str(r#"{ "palette": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let path = std::env::temp_dir().join(format!("islandgen-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = TerrainConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, IslandError::Config { .. }));
        assert!(err.to_string().contains("islandgen-bad-"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TerrainConfig::load("/nonexistent/islandgen.json").unwrap_err();
        assert!(matches!(err, IslandError::Io(_)));
    }
}
