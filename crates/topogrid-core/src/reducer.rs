//! Image Reducer: decode a source raster and resample it to a W×H grid of
//! RGB samples.
//!
//! Resampling uses Catmull-Rom (bicubic) filtering, which is deterministic
//! for a given source image and target size.

use std::io::ErrorKind;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::MapError;
use crate::grid::Grid;
use crate::sample::RgbSample;

pub const DEFAULT_WIDTH: u32 = 128;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Largest accepted grid side. Keeps the resize buffer allocatable.
pub const MAX_SIDE: u32 = 16_384;

const FILTER: FilterType = FilterType::CatmullRom;

/// Target grid size. Both sides are always in `1..=MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate caller-supplied sizes. Zero, negative, or above `MAX_SIDE` is rejected.
    pub fn new(width: i64, height: i64) -> Result<Self, MapError> {
        let valid = 1..=i64::from(MAX_SIDE);
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(MapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Decode an image file, detecting the format from its contents rather than
/// its extension. A missing file is reported as `ImageNotFound`.
pub fn load_image(path: &Path) -> Result<DynamicImage, MapError> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MapError::ImageNotFound {
            path: path.to_path_buf(),
        },
        _ => MapError::from(ImageError::IoError(e)),
    })?;
    let reader = reader.with_guessed_format().map_err(ImageError::IoError)?;
    Ok(reader.decode()?)
}

/// Decode an in-memory byte stream; the format is guessed from its header.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, MapError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Resample `source` to exactly `dims` and collect one RGB sample per cell.
///
/// Alpha is dropped and grayscale expanded before resampling.
pub fn reduce(source: &DynamicImage, dims: Dimensions) -> Grid<RgbSample> {
    debug!(
        src_width = source.width(),
        src_height = source.height(),
        width = dims.width,
        height = dims.height,
        "resampling"
    );
    let rgb = DynamicImage::ImageRgb8(source.to_rgb8())
        .resize_exact(dims.width, dims.height, FILTER)
        .into_rgb8();

    Grid::from_fn(dims.width as usize, dims.height as usize, |col, row| {
        RgbSample::from(*rgb.get_pixel(col as u32, row as u32))
    })
}
