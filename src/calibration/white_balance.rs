//! Gray-world white balance in Lab space
//!
//! Estimates the global color cast as the mean of the a and b chroma
//! channels and pulls every pixel back toward neutral. The correction is
//! weighted by each pixel's lightness so shadows are shifted less than
//! highlights.

use image::RgbImage;
use tracing::debug;

use crate::color::{ColorConverter, EncodedLab};
use crate::constants::lab8;

/// Global color cast measured over an image, in 8-bit Lab units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCast {
    pub mean_a: f32,
    pub mean_b: f32,
}

impl ColorCast {
    pub const NEUTRAL: ColorCast = ColorCast {
        mean_a: lab8::NEUTRAL,
        mean_b: lab8::NEUTRAL,
    };

    /// Offset of the cast from neutral along (a, b)
    pub fn offset(&self) -> (f32, f32) {
        (self.mean_a - lab8::NEUTRAL, self.mean_b - lab8::NEUTRAL)
    }
}

/// Illumination normalizer using the gray-world assumption
#[derive(Debug, Clone, Copy)]
pub struct WhiteBalanceNormalizer {
    enabled: bool,
    converter: ColorConverter,
}

impl WhiteBalanceNormalizer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            converter: ColorConverter::new(),
        }
    }

    /// Normalizer that passes images through unchanged when `enabled` is false
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Remove the global color cast from an image
    ///
    /// Never fails; empty, all-black and all-white images are handled.
    ///
    /// # Arguments
    ///
    /// * `image` - Portrait in RGB order
    ///
    /// # Returns
    ///
    /// A new image of the same dimensions where each pixel's a and b are
    /// shifted by `(mean - 128) * L / 255`, or a plain copy when disabled
    pub fn normalize(&self, image: &RgbImage) -> RgbImage {
        if !self.enabled || image.width() == 0 || image.height() == 0 {
            return image.clone();
        }

        let lab_pixels = self.to_lab_pixels(image);
        let cast = Self::cast_of(&lab_pixels);
        debug!(
            mean_a = cast.mean_a,
            mean_b = cast.mean_b,
            "estimated gray-world color cast"
        );
        self.apply_correction(image.width(), image.height(), &lab_pixels, cast)
    }

    /// Estimate the gray-world color cast of an image
    pub fn estimate_cast(&self, image: &RgbImage) -> ColorCast {
        if image.width() == 0 || image.height() == 0 {
            return ColorCast::NEUTRAL;
        }
        Self::cast_of(&self.to_lab_pixels(image))
    }

    fn to_lab_pixels(&self, image: &RgbImage) -> Vec<EncodedLab> {
        image
            .pixels()
            .map(|p| self.converter.rgb_to_encoded(p.0))
            .collect()
    }

    fn cast_of(pixels: &[EncodedLab]) -> ColorCast {
        if pixels.is_empty() {
            return ColorCast::NEUTRAL;
        }
        let (sum_a, sum_b) = pixels.iter().fold((0.0f64, 0.0f64), |(sa, sb), p| {
            (sa + p.a as f64, sb + p.b as f64)
        });
        let n = pixels.len() as f64;
        ColorCast {
            mean_a: (sum_a / n) as f32,
            mean_b: (sum_b / n) as f32,
        }
    }

    /// Shift each pixel's chroma against the cast, scaled by its lightness fraction
    fn apply_correction(
        &self,
        width: u32,
        height: u32,
        pixels: &[EncodedLab],
        cast: ColorCast,
    ) -> RgbImage {
        let (offset_a, offset_b) = cast.offset();
        let mut raw = Vec::with_capacity(pixels.len() * 3);
        for lab in pixels {
            let weight = lab.l / lab8::MAX;
            let corrected = EncodedLab::new(
                lab.l,
                lab.a - offset_a * weight,
                lab.b - offset_b * weight,
            );
            raw.extend_from_slice(&self.converter.encoded_to_rgb(corrected));
        }

        // Buffer length always matches width * height * 3
        RgbImage::from_raw(width, height, raw).unwrap_or_else(|| RgbImage::new(width, height))
    }
}

impl Default for WhiteBalanceNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
