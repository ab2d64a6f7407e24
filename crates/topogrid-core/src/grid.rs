/// Fixed-size rectangular grid, row-major. Row 0 is the top of the image.
///
/// `data.len() == width * height` always holds, so every row has exactly
/// `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(col, row)` for every cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.width + col]
    }

    /// Row slices, top to bottom. Yields `height` slices of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on 0; a zero-width grid has no cells to yield anyway.
        self.data.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// Row-major cell iterator.
    pub fn cells(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Apply `f` to every cell, preserving shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Parallel `map`; cell order and shape are preserved.
    #[cfg(feature = "threading")]
    pub fn par_map<U: Send>(&self, f: impl Fn(&T) -> U + Sync + Send) -> Grid<U>
    where
        T: Sync,
    {
        use rayon::prelude::*;
        Grid {
            data: self.data.par_iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}
