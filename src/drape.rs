//! Drape preview rendering
//!
//! Simulates holding a fabric swatch near the face by painting a solid
//! border of the swatch color around the portrait. No face-aware
//! composition is attempted.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::warn;

use crate::color::ColorConverter;
use crate::constants::drape;
use crate::{AnalysisError, Result};

const WHITE: [u8; 3] = [255, 255, 255];

/// The swatch currently chosen for one user session
///
/// Each session owns its own value; nothing is shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrapeSelection {
    color: String,
}

impl Default for DrapeSelection {
    fn default() -> Self {
        Self {
            color: drape::DEFAULT_COLOR.to_string(),
        }
    }
}

impl DrapeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected swatch as `#RRGGBB`
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Select a new swatch
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorSpec` and keeps the previous selection if `hex`
    /// does not parse.
    pub fn select(&mut self, hex: &str) -> Result<()> {
        let rgb = ColorConverter::new().hex_to_rgb(hex)?;
        self.color = ColorConverter::new().rgb_to_hex(rgb);
        Ok(())
    }

    /// Return to the default white swatch
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Paints a swatch-colored frame around an image
#[derive(Debug, Clone, Copy)]
pub struct DrapeRenderer {
    border_fraction: f32,
    fallback: [u8; 3],
    converter: ColorConverter,
}

impl Default for DrapeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrapeRenderer {
    pub fn new() -> Self {
        Self {
            border_fraction: drape::BORDER_FRACTION,
            fallback: WHITE,
            converter: ColorConverter::new(),
        }
    }

    /// Renderer with a custom border fraction and fallback swatch
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 < border_fraction <= 0.5`, or
    /// `InvalidColorSpec` if `fallback_hex` does not parse.
    pub fn with_params(border_fraction: f32, fallback_hex: &str) -> Result<Self> {
        if !(border_fraction > 0.0 && border_fraction <= 0.5) {
            return Err(AnalysisError::InvalidParameter {
                parameter: "border_fraction".to_string(),
                value: border_fraction.to_string(),
            });
        }
        let converter = ColorConverter::new();
        Ok(Self {
            border_fraction,
            fallback: converter.hex_to_rgb(fallback_hex)?,
            converter,
        })
    }

    /// Border thickness in pixels for an image of the given width
    pub fn border_thickness(&self, width: u32) -> u32 {
        (width as f32 * self.border_fraction) as u32
    }

    /// Resolve a swatch string, substituting the fallback when it does not parse
    pub fn swatch_color(&self, swatch_hex: Option<&str>) -> [u8; 3] {
        match swatch_hex.map(|hex| self.converter.hex_to_rgb(hex)) {
            Some(Ok(rgb)) => rgb,
            Some(Err(err)) => {
                warn!(error = %err, "invalid drape color, using fallback swatch");
                self.fallback
            }
            None => self.fallback,
        }
    }

    /// Render a preview with the swatch painted as a border on all four edges
    ///
    /// The input is left untouched; an invalid or missing swatch renders
    /// with the fallback color.
    ///
    /// # Arguments
    ///
    /// * `image` - Normalized portrait to frame
    /// * `swatch_hex` - Drape color as `#RRGGBB`, `None` for the fallback
    ///
    /// # Returns
    ///
    /// A copy of `image` with a border `floor(width * border_fraction)`
    /// pixels thick drawn inside all four edges
    pub fn render(&self, image: &RgbImage, swatch_hex: Option<&str>) -> RgbImage {
        let color = Rgb(self.swatch_color(swatch_hex));
        let mut preview = image.clone();
        let (width, height) = preview.dimensions();
        let thickness = self.border_thickness(width);
        if thickness == 0 || height == 0 {
            return preview;
        }

        let horizontal = thickness.min(height);
        let vertical = thickness.min(width);
        let edges = [
            Rect::at(0, 0).of_size(width, horizontal),
            Rect::at(0, (height - horizontal) as i32).of_size(width, horizontal),
            Rect::at(0, 0).of_size(vertical, height),
            Rect::at((width - vertical) as i32, 0).of_size(vertical, height),
        ];
        for edge in edges {
            draw_filled_rect_mut(&mut preview, edge, color);
        }
        preview
    }

    /// Render using a session's current selection
    pub fn render_selection(&self, image: &RgbImage, selection: &DrapeSelection) -> RgbImage {
        self.render(image, Some(selection.color()))
    }
}
