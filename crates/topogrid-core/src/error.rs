use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal to a run: there is no partial grid.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("failed to decode image: {source}")]
    ImageDecode {
        #[from]
        source: image::ImageError,
    },

    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },
}
