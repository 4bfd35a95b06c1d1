//! Color to single-channel intensity conversion.

use image::{DynamicImage, GrayImage, Luma};
use serde::{Deserialize, Serialize};

/// Luminance mapping used to collapse color images to one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Luminance {
    /// ITU-R 601-2: `L = R*299/1000 + G*587/1000 + B*114/1000`, rounded.
    #[default]
    Rec601,
    /// ITU-R BT.709 weights, as implemented by [`DynamicImage::to_luma8`].
    Rec709,
}

// 601 weights scaled by 2^16; they sum to exactly 65536 so gray input is preserved.
const R601: u32 = 19_595;
const G601: u32 = 38_470;
const B601: u32 = 7_471;

/// Convert any decoded image to an 8-bit intensity grid. Alpha is ignored.
pub fn to_intensity(image: &DynamicImage, luminance: Luminance) -> GrayImage {
    match (luminance, image) {
        (_, DynamicImage::ImageLuma8(gray)) => gray.clone(),
        (Luminance::Rec709, _) => image.to_luma8(),
        (Luminance::Rec601, _) => rgb_to_rec601(image),
    }
}

fn rgb_to_rec601(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut out = GrayImage::new(w, h);
    for (dst, src) in out.pixels_mut().zip(rgb.pixels()) {
        let [r, g, b] = src.0;
        let l = (r as u32 * R601 + g as u32 * G601 + b as u32 * B601 + 0x8000) >> 16;
        *dst = Luma([l as u8]);
    }
    out
}
