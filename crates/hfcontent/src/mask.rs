//! Radial high-pass mask over a center-shifted spectrum.

/// Low-frequency cutoff radius for an `rows x cols` grid:
/// `min(rows / 2, cols / 2) / divisor`, integer division at every step.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub fn cutoff_radius(rows: usize, cols: usize, divisor: usize) -> usize {
    (rows / 2).min(cols / 2) / divisor
}

/// Boolean grid marking coordinates strictly farther than the cutoff radius
/// from the spectrum center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighPassMask {
    rows: usize,
    cols: usize,
    center: [usize; 2],
    cutoff: usize,
    bits: Vec<bool>,
}

impl HighPassMask {
    /// Build the mask for an `rows x cols` grid centered at
    /// `(rows / 2, cols / 2)` with the given cutoff radius.
    pub fn new(rows: usize, cols: usize, cutoff: usize) -> Self {
        let center = [rows / 2, cols / 2];
        // dist > cutoff  <=>  dist^2 > cutoff^2 for integer coordinates.
        let cutoff_sq = cutoff * cutoff;
        let mut bits = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let di = i.abs_diff(center[0]);
            for j in 0..cols {
                let dj = j.abs_diff(center[1]);
                bits.push(di * di + dj * dj > cutoff_sq);
            }
        }
        Self {
            rows,
            cols,
            center,
            cutoff,
            bits,
        }
    }

    /// Build the mask using [`cutoff_radius`] with `divisor`.
    pub fn with_divisor(rows: usize, cols: usize, divisor: usize) -> Self {
        Self::new(rows, cols, cutoff_radius(rows, cols, divisor))
    }

    /// `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// `[row, col]` of the zero-frequency coefficient.
    pub fn center(&self) -> [usize; 2] {
        self.center
    }

    /// Cutoff radius in frequency bins.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Row-major mask values.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether `(i, j)` is in the high-frequency region. Out-of-range
    /// coordinates are not.
    pub fn is_high(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.bits[i * self.cols + j]
    }

    /// Number of marked coordinates.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Sum of `values` at marked coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have `rows * cols` elements.
    pub fn masked_sum(&self, values: &[f64]) -> f64 {
        assert_eq!(
            values.len(),
            self.bits.len(),
            "values must match mask shape {}x{}",
            self.rows,
            self.cols
        );
        values
            .iter()
            .zip(&self.bits)
            .filter(|&(_, &b)| b)
            .map(|(v, _)| v)
            .sum()
    }
}
