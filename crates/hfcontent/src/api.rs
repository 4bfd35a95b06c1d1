//! High-level scoring API.
//!
//! [`Scorer`] is the primary entry point. It wraps a [`ScoreConfig`] and
//! scores images given as paths, encoded bytes, or decoded buffers.

use std::path::Path;

use image::{DynamicImage, GrayImage};

use crate::config::ScoreConfig;
use crate::decode;
use crate::error::ScoreError;
use crate::luma;
use crate::mask::HighPassMask;
use crate::spectrum;
use crate::SpectralReport;

/// Spectral energy scorer.
///
/// Create once, score many images. Each call is independent and allocates its
/// own buffers, so a shared `&Scorer` may be used from several threads.
///
/// # Examples
///
/// ```no_run
/// use hfcontent::Scorer;
/// use std::path::Path;
///
/// let scorer = Scorer::new();
/// match scorer.score_path(Path::new("photo.jpg")) {
///     Ok(score) => println!("High-frequency content measure: {score}"),
///     Err(e) if e.is_not_found() => eprintln!("no such file"),
///     Err(e) => eprintln!("failed: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoreConfig,
}

impl Scorer {
    /// Scorer with the default cutoff policy and Rec. 601 luminance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with full config control.
    pub fn with_config(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut ScoreConfig {
        &mut self.config
    }

    /// Score the image file at `path`.
    pub fn score_path(&self, path: &Path) -> Result<f64, ScoreError> {
        self.analyze_path(path).map(|r| r.score)
    }

    /// Score an encoded image held in memory.
    pub fn score_bytes(&self, bytes: &[u8]) -> Result<f64, ScoreError> {
        self.analyze_bytes(bytes).map(|r| r.score)
    }

    /// Score an already decoded image.
    pub fn score_image(&self, image: &DynamicImage) -> Result<f64, ScoreError> {
        self.analyze_image(image).map(|r| r.score)
    }

    /// Score an intensity image.
    pub fn score_gray(&self, gray: &GrayImage) -> Result<f64, ScoreError> {
        self.analyze_gray(gray).map(|r| r.score)
    }

    /// Full report for the image file at `path`.
    pub fn analyze_path(&self, path: &Path) -> Result<SpectralReport, ScoreError> {
        self.config.validate()?;
        let image = decode::load_image(path)?;
        self.analyze_image(&image)
    }

    /// Full report for an encoded image held in memory.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<SpectralReport, ScoreError> {
        self.config.validate()?;
        let image = decode::decode_bytes(bytes)?;
        self.analyze_image(&image)
    }

    /// Full report for an already decoded image.
    pub fn analyze_image(&self, image: &DynamicImage) -> Result<SpectralReport, ScoreError> {
        let gray = luma::to_intensity(image, self.config.luminance);
        self.analyze_gray(&gray)
    }

    /// Full report for an intensity image.
    pub fn analyze_gray(&self, gray: &GrayImage) -> Result<SpectralReport, ScoreError> {
        self.config.validate()?;
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Err(ScoreError::EmptyImage { width, height });
        }

        let spectrum = spectrum::fft_2d(gray).shifted();
        let magnitude = spectrum.magnitude();
        let mask = HighPassMask::with_divisor(
            spectrum.rows(),
            spectrum.cols(),
            self.config.cutoff_divisor,
        );
        debug_assert_eq!(magnitude.len(), mask.bits().len());

        let n_high_frequency = mask.count();
        tracing::trace!(
            "mask {}x{}: center={:?} cutoff={} marked={}",
            spectrum.rows(),
            spectrum.cols(),
            mask.center(),
            mask.cutoff(),
            n_high_frequency
        );

        let score = mask.masked_sum(&magnitude);
        let total_magnitude: f64 = magnitude.iter().sum();
        let high_frequency_ratio = if total_magnitude > 0.0 {
            score / total_magnitude
        } else {
            0.0
        };

        tracing::debug!(
            "{}x{} image: high-frequency score {:.6e} ({:.2}% of spectrum)",
            width,
            height,
            score,
            high_frequency_ratio * 100.0
        );

        Ok(SpectralReport {
            score,
            image_size: [width, height],
            center: mask.center(),
            cutoff_radius: mask.cutoff(),
            n_high_frequency,
            total_magnitude,
            high_frequency_ratio,
        })
    }
}

/// Score the image at `path` with the default configuration.
pub fn measure_high_frequency_content(path: &Path) -> Result<f64, ScoreError> {
    Scorer::new().score_path(path)
}
