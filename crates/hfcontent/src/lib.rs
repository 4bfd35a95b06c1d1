//! hfcontent — high-frequency content score for a single image.
//!
//! The score is the total Fourier magnitude lying outside a low-frequency
//! disk. The stages are:
//!
//! 1. **Decode** – open the file (or bytes) with the `image` crate.
//! 2. **Luma** – collapse to one 8-bit intensity channel.
//! 3. **Spectrum** – unnormalized 2D DFT, then quadrant shift so the
//!    zero-frequency term sits at `(R/2, C/2)`.
//! 4. **Mask** – mark coordinates farther than `min(R/2, C/2) / 4` from the
//!    center.
//! 5. **Score** – sum the magnitudes under the mask.
//!
//! # Public API
//! - [`Scorer`] and [`ScoreConfig`] as primary entry points
//! - [`measure_high_frequency_content`] for the one-shot default case
//! - [`ScoreError`] / [`ErrorKind`] to tell a missing file from any other
//!   failure
//!
//! The building blocks ([`spectrum`], [`mask`], [`luma`], [`decode`]) are
//! public so each stage can be used and tested on its own.

mod api;
mod config;
pub mod decode;
mod error;
pub mod luma;
pub mod mask;
pub mod spectrum;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{measure_high_frequency_content, Scorer};
pub use config::{ScoreConfig, DEFAULT_CUTOFF_DIVISOR};
pub use error::{ErrorKind, ScoreError};
pub use luma::Luminance;

/// Result of scoring one image.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpectralReport {
    /// Sum of magnitudes in the high-frequency region.
    pub score: f64,
    /// Image dimensions [width, height].
    pub image_size: [u32; 2],
    /// Zero-frequency position [row, col] in the shifted spectrum.
    pub center: [usize; 2],
    /// Low-frequency cutoff radius in frequency bins.
    pub cutoff_radius: usize,
    /// Number of spectrum coordinates counted as high frequency.
    pub n_high_frequency: usize,
    /// Sum of magnitudes over the whole spectrum, DC included.
    pub total_magnitude: f64,
    /// `score / total_magnitude`, or 0 when the spectrum is all zero.
    pub high_frequency_ratio: f64,
}
