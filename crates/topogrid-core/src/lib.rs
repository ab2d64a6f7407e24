//! Raster-to-terrain-grid encoding.
//!
//! Pipeline:
//!   image → `reducer::reduce` (W×H RGB samples) → `pipeline::classify_grid`
//!   (one `TerrainClass` per cell) → `render::render` (text for embedding).

pub mod error;
pub mod grid;
pub mod pipeline;
pub mod reducer;
pub mod render;
pub mod sample;
pub mod terrain;

pub use image;

pub use error::MapError;
pub use grid::Grid;
pub use pipeline::{classify_grid, encode_image, ClassHistogram};
pub use reducer::{decode_bytes, load_image, reduce, Dimensions};
pub use render::{render, Template};
pub use sample::RgbSample;
pub use terrain::{classify, TerrainClass};
