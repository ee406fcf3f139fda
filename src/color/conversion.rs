//! Color space conversion utilities
//!
//! Provides conversions between the representations used by the pipeline:
//! - 8-bit RGB to CIE Lab (D65) and back, with gamut clamping
//! - CIE Lab to the 8-bit Lab encoding (L in [0, 255], a/b centered on 128)
//! - Hex color strings (`#RRGGBB`) to RGB and back

use palette::{FromColor, Lab, Srgb};
use serde::{Deserialize, Serialize};

use crate::constants::lab8;
use crate::{AnalysisError, Result};

/// Lab color in the 8-bit encoding
///
/// `l` spans [0, 255]; `a` and `b` are centered on 128. Values are kept
/// as floats so intermediate math does not quantize; call
/// [`EncodedLab::quantized`] for the integer form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodedLab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl EncodedLab {
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Round each channel and clamp to [0, 255], as an 8-bit buffer would store it
    pub fn quantized(self) -> Self {
        let q = |v: f32| v.round().clamp(0.0, lab8::MAX);
        Self::new(q(self.l), q(self.a), q(self.b))
    }

    /// Distance of (a, b) from the neutral axis
    pub fn chroma(&self) -> f32 {
        let da = self.a - lab8::NEUTRAL;
        let db = self.b - lab8::NEUTRAL;
        (da * da + db * db).sqrt()
    }
}

/// Stateless converter between RGB, Lab and hex representations
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to CIE Lab under D65
    pub fn rgb_to_lab(&self, rgb: [u8; 3]) -> Lab {
        let srgb = Srgb::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        );
        Lab::from_color(srgb)
    }

    /// Convert CIE Lab to RGB (0-255), clamped to the sRGB gamut
    pub fn lab_to_rgb(&self, lab: Lab) -> [u8; 3] {
        let srgb: Srgb = Srgb::from_color(lab);
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(srgb.red), channel(srgb.green), channel(srgb.blue)]
    }

    /// Map CIE Lab into the 8-bit encoding (unrounded)
    pub fn encode_lab(&self, lab: Lab) -> EncodedLab {
        EncodedLab::new(
            lab.l * lab8::L_SCALE,
            lab.a + lab8::NEUTRAL,
            lab.b + lab8::NEUTRAL,
        )
    }

    /// Inverse of [`ColorConverter::encode_lab`]
    pub fn decode_lab(&self, encoded: EncodedLab) -> Lab {
        Lab::new(
            encoded.l / lab8::L_SCALE,
            encoded.a - lab8::NEUTRAL,
            encoded.b - lab8::NEUTRAL,
        )
    }

    /// RGB straight to the 8-bit Lab encoding
    pub fn rgb_to_encoded(&self, rgb: [u8; 3]) -> EncodedLab {
        self.encode_lab(self.rgb_to_lab(rgb))
    }

    /// 8-bit Lab encoding straight back to RGB
    pub fn encoded_to_rgb(&self, encoded: EncodedLab) -> [u8; 3] {
        self.lab_to_rgb(self.decode_lab(encoded))
    }

    /// Format RGB as an uppercase hex string (e.g. "#FF0000")
    pub fn rgb_to_hex(&self, rgb: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
    }

    /// Parse a hex color string ("#FF0000" or "FF0000") to RGB
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorSpec` unless the string holds exactly six hex digits.
    pub fn hex_to_rgb(&self, hex: &str) -> Result<[u8; 3]> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 {
            return Err(AnalysisError::invalid_color(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(AnalysisError::invalid_color(hex, "non-hex character"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| AnalysisError::invalid_color(hex, e.to_string()))
        };
        Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
    }

    /// Check whether a string is a strict `#RRGGBB` color
    pub fn is_hex_color(&self, value: &str) -> bool {
        value.len() == 7 && value.starts_with('#') && self.hex_to_rgb(value).is_ok()
    }
}
