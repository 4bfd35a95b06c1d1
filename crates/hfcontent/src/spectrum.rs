//! 2D discrete Fourier transform of intensity grids.
//!
//! Grids are stored row-major: element `(i, j)` (row `i`, column `j`) lives at
//! `i * cols + j`. The transform is unnormalized, so the zero-frequency
//! coefficient equals the sum of all samples.

use image::GrayImage;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// Complex frequency grid with the same shape as its source image.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Spectrum {
    /// Number of rows (image height).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major coefficients.
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Coefficient at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<Complex64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.data[i * self.cols + j])
    }

    /// Copy with the zero-frequency term moved to `(rows / 2, cols / 2)`.
    pub fn shifted(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: fft_shift(self.rows, self.cols, &self.data),
        }
    }

    /// Elementwise complex modulus, row-major.
    pub fn magnitude(&self) -> Vec<f64> {
        self.data.iter().map(|c| c.norm()).collect()
    }
}

/// Forward 2D DFT of an 8-bit intensity image.
///
/// Rows are transformed in place, then the grid is transposed so columns can
/// be processed as contiguous runs, then transposed back.
pub fn fft_2d(image: &GrayImage) -> Spectrum {
    let (w, h) = image.dimensions();
    let (rows, cols) = (h as usize, w as usize);
    let mut data: Vec<Complex64> = image
        .as_raw()
        .iter()
        .map(|&v| Complex64::new(v as f64, 0.0))
        .collect();

    if rows == 0 || cols == 0 {
        return Spectrum { rows, cols, data };
    }

    let mut planner = FftPlanner::<f64>::new();

    let row_fft = planner.plan_fft_forward(cols);
    let mut scratch = vec![Complex64::default(); row_fft.get_inplace_scratch_len()];
    row_fft.process_with_scratch(&mut data, &mut scratch);

    let mut transposed = transpose(rows, cols, &data);
    let col_fft = planner.plan_fft_forward(rows);
    scratch.resize(col_fft.get_inplace_scratch_len(), Complex64::default());
    col_fft.process_with_scratch(&mut transposed, &mut scratch);

    Spectrum {
        rows,
        cols,
        data: transpose(cols, rows, &transposed),
    }
}

/// Move the zero-frequency term of a row-major `rows x cols` grid to the
/// center.
///
/// Along an axis of length `n`, index `k` moves to `(k + n / 2) % n`. For odd
/// lengths this differs from the inverse shift.
pub fn fft_shift<T: Copy>(rows: usize, cols: usize, grid: &[T]) -> Vec<T> {
    assert_eq!(grid.len(), rows * cols, "grid length must equal rows * cols");
    if grid.is_empty() {
        return Vec::new();
    }
    let half_rows = rows / 2;
    let half_cols = cols / 2;
    let mut out = grid.to_vec();
    for (i, src_row) in grid.chunks_exact(cols).enumerate() {
        let di = (i + half_rows) % rows;
        let dst_row = &mut out[di * cols..(di + 1) * cols];
        // Rotating right by half_cols puts src[0] at half_cols.
        dst_row[half_cols..].copy_from_slice(&src_row[..cols - half_cols]);
        dst_row[..half_cols].copy_from_slice(&src_row[cols - half_cols..]);
    }
    out
}

fn transpose<T: Copy>(rows: usize, cols: usize, grid: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(grid.len());
    for j in 0..cols {
        out.extend((0..rows).map(|i| grid[i * cols + j]));
    }
    out
}
