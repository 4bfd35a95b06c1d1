//! Shared synthetic images for unit tests.

use image::{GrayImage, Luma};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Constant-intensity image.
pub(crate) fn uniform_image(w: u32, h: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(w, h, Luma([value]))
}

/// Constant `background` with a single pixel at `xy` set to `value`.
pub(crate) fn impulse_on_constant(
    w: u32,
    h: u32,
    background: u8,
    value: u8,
    xy: [u32; 2],
) -> GrayImage {
    let mut img = uniform_image(w, h, background);
    img.put_pixel(xy[0], xy[1], Luma([value]));
    img
}

/// Uniform random noise, deterministic per `seed`.
pub(crate) fn noise_image(w: u32, h: u32, seed: u64) -> GrayImage {
    let mut rng = StdRng::seed_from_u64(seed);
    GrayImage::from_fn(w, h, |_, _| Luma([rng.gen::<u8>()]))
}

/// Gaussian-blur a `GrayImage` via `imageproc`.
pub(crate) fn blur_gray(img: &GrayImage, sigma: f32) -> GrayImage {
    imageproc::filter::gaussian_blur_f32(img, sigma)
}
