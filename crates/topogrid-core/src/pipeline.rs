//! Reducer → Classifier wiring, plus a per-class summary for run logs.

use image::DynamicImage;
use tracing::debug;

use crate::grid::Grid;
use crate::reducer::{reduce, Dimensions};
use crate::sample::RgbSample;
use crate::terrain::{classify, TerrainClass};

/// Classify every cell exactly once.
///
/// Cells are independent, so with the `threading` feature they are
/// classified in parallel; the result is identical either way.
pub fn classify_grid(samples: &Grid<RgbSample>) -> Grid<TerrainClass> {
    #[cfg(feature = "threading")]
    {
        samples.par_map(|&s| classify(s))
    }
    #[cfg(not(feature = "threading"))]
    {
        samples.map(|&s| classify(s))
    }
}

/// Reduce `source` to `dims` and classify the result.
pub fn encode_image(source: &DynamicImage, dims: Dimensions) -> Grid<TerrainClass> {
    let samples = reduce(source, dims);
    let classes = classify_grid(&samples);
    debug!(cells = classes.as_slice().len(), "classified grid");
    classes
}

/// Cell counts per terrain class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassHistogram {
    counts: [usize; 5],
}

impl ClassHistogram {
    pub fn from_grid(grid: &Grid<TerrainClass>) -> Self {
        let mut hist = Self::default();
        for &c in grid.cells() {
            hist.counts[c as usize] += 1;
        }
        hist
    }

    pub fn count(&self, class: TerrainClass) -> usize {
        self.counts[class as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of cells in `class`, 0–1. Zero for an empty grid.
    pub fn fraction(&self, class: TerrainClass) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.count(class) as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(px: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 32, Rgb(px)))
    }

    #[test]
    fn solid_images_map_to_single_class() {
        let dims = Dimensions::new(8, 4).unwrap();
        let cases = [
            ([255, 255, 255], TerrainClass::Ice),
            ([0, 0, 139], TerrainClass::Ocean),
            ([194, 178, 128], TerrainClass::Desert),
            ([34, 139, 34], TerrainClass::Land),
            ([60, 60, 60], TerrainClass::Mountain),
        ];
        for (px, expected) in cases {
            let g = encode_image(&solid(px), dims);
            assert!(g.cells().all(|&c| c == expected), "{px:?} -> {g:?}");
        }
    }

    #[test]
    fn classify_grid_matches_per_cell_classify() {
        let samples = Grid::from_fn(16, 16, |c, r| {
            RgbSample::new((c * 16) as u8, (r * 16) as u8, ((c + r) * 8) as u8)
        });
        let classes = classify_grid(&samples);
        assert_eq!((classes.width(), classes.height()), (16, 16));
        for (s, c) in samples.cells().zip(classes.cells()) {
            assert_eq!(classify(*s), *c);
        }
    }

    /// Ocean on the left half, vegetation on the right: the outer columns
    /// keep their class after resampling.
    #[test]
    fn halves_keep_their_class() {
        let img = RgbImage::from_fn(80, 40, |x, _| {
            if x < 40 {
                Rgb([0, 0, 200])
            } else {
                Rgb([0, 200, 0])
            }
        });
        let dims = Dimensions::new(8, 4).unwrap();
        let g = encode_image(&DynamicImage::ImageRgb8(img), dims);
        for row in g.rows() {
            assert_eq!(row[0], TerrainClass::Ocean);
            assert_eq!(row[7], TerrainClass::Land);
        }
    }

    #[test]
    fn histogram_counts_every_cell() {
        let g = Grid::from_fn(4, 2, |c, _| TerrainClass::ALL[c % 2]);
        let h = ClassHistogram::from_grid(&g);
        assert_eq!(h.total(), 8);
        assert_eq!(h.count(TerrainClass::Ocean), 4);
        assert_eq!(h.count(TerrainClass::Land), 4);
        assert_eq!(h.count(TerrainClass::Ice), 0);
        assert!((h.fraction(TerrainClass::Land) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_histogram_fraction_is_zero() {
        assert_eq!(ClassHistogram::default().fraction(TerrainClass::Ocean), 0.0);
    }
}
