//! Error type shared by terrain generation, configuration and export.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IslandError {
    #[error("grid resolution must be at least 2 vertices per side, got {0}")]
    ResolutionTooSmall(usize),

    #[error("grid resolution {0} exceeds the u32 index range")]
    ResolutionTooLarge(usize),

    #[error("fractal noise needs at least one octave")]
    NoOctaves,

    #[error("color gradient has no keys")]
    EmptyGradient,

    #[error("failed to parse config {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
