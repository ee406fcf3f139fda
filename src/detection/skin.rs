//! Skin-tone sampling inside the face oval
//!
//! Rasterizes the face-oval contour into a binary mask and averages the
//! image color over the masked pixels.

use image::{GrayImage, Luma, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{ColorConverter, SeasonClassifier, Season};
use crate::detection::landmarks::FaceLandmarks;
use crate::{AnalysisError, Result};

const MASK_ON: Luma<u8> = Luma([255]);

/// Average skin color in RGB order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTone {
    pub rgb: [u8; 3],
}

impl SkinTone {
    pub fn new(rgb: [u8; 3]) -> Self {
        Self { rgb }
    }

    /// Lowercase `#rrggbb` form used for display
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// CIE Lab (D65) of the tone
    pub fn lab(&self) -> palette::Lab {
        ColorConverter::new().rgb_to_lab(self.rgb)
    }

    pub fn season(&self) -> Season {
        SeasonClassifier::new().classify(self.rgb)
    }
}

/// Result of sampling one face
#[derive(Debug, Clone, PartialEq)]
pub struct SkinSample {
    pub tone: SkinTone,
    /// Pixels that contributed to the average
    pub pixel_count: usize,
    /// True when the contour had no area and the whole image was averaged
    pub used_fallback: bool,
}

/// Samples average skin color from the face-oval region
#[derive(Debug, Clone, Copy, Default)]
pub struct SkinSampler;

impl SkinSampler {
    pub fn new() -> Self {
        Self
    }

    /// Average the image color inside the face oval
    ///
    /// Contour points outside the frame are kept as-is and the polygon is
    /// clipped to the image, so a partly cropped face still samples every
    /// visible skin pixel.
    ///
    /// # Arguments
    ///
    /// * `image` - White-balanced portrait in RGB order
    /// * `landmarks` - Face-mesh keypoints, `None` when no face was found
    ///
    /// # Returns
    ///
    /// Truncated channel means of the masked pixels. When the contour has
    /// no area or covers no visible pixel, the image-wide mean with
    /// `used_fallback` set.
    ///
    /// # Errors
    ///
    /// - `NoFaceDetected` when `landmarks` is `None`
    /// - `InsufficientLandmarks` when the set lacks face-oval indices
    pub fn sample(
        &self,
        image: &RgbImage,
        landmarks: Option<&FaceLandmarks>,
    ) -> Result<SkinSample> {
        let landmarks = landmarks.ok_or(AnalysisError::NoFaceDetected)?;
        let (width, height) = image.dimensions();
        let contour = landmarks.face_oval_pixels(width, height)?;

        if polygon_area2(&contour) == 0 {
            warn!("face oval has zero area, averaging whole image");
            return Ok(Self::whole_image(image));
        }

        let mask = self.rasterize(width, height, &contour);
        match masked_mean(image, &mask) {
            Some((rgb, pixel_count)) => {
                debug!(pixel_count, r = rgb[0], g = rgb[1], b = rgb[2], "sampled skin tone");
                Ok(SkinSample {
                    tone: SkinTone::new(rgb),
                    pixel_count,
                    used_fallback: false,
                })
            }
            None => {
                warn!("face mask selected no pixels, averaging whole image");
                Ok(Self::whole_image(image))
            }
        }
    }

    /// Binary mask of the face oval (255 inside, 0 outside)
    pub fn face_mask(&self, image: &RgbImage, landmarks: &FaceLandmarks) -> Result<GrayImage> {
        let (width, height) = image.dimensions();
        let contour = landmarks.face_oval_pixels(width, height)?;
        Ok(self.rasterize(width, height, &contour))
    }

    fn rasterize(&self, width: u32, height: u32, contour: &[(i32, i32)]) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        if width == 0 || height == 0 {
            return mask;
        }
        // draw_polygon_mut clips the fill to the canvas; vertices may lie outside it
        let polygon = closed_polygon(contour);
        if polygon.len() >= 3 {
            draw_polygon_mut(&mut mask, &polygon, MASK_ON);
        }
        mask
    }

    fn whole_image(image: &RgbImage) -> SkinSample {
        let (rgb, pixel_count) = image_mean(image);
        SkinSample {
            tone: SkinTone::new(rgb),
            pixel_count,
            used_fallback: true,
        }
    }
}

/// Polygon vertices with consecutive duplicates and the closing repeat removed
fn closed_polygon(contour: &[(i32, i32)]) -> Vec<Point<i32>> {
    let mut polygon: Vec<Point<i32>> = Vec::with_capacity(contour.len());
    for &(x, y) in contour {
        let p = Point::new(x, y);
        if polygon.last() != Some(&p) {
            polygon.push(p);
        }
    }
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    polygon
}

/// Twice the signed shoelace area
fn polygon_area2(contour: &[(i32, i32)]) -> i64 {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let (x0, y0) = contour[i];
            let (x1, y1) = contour[(i + 1) % n];
            x0 as i64 * y1 as i64 - x1 as i64 * y0 as i64
        })
        .sum()
}

fn masked_mean(image: &RgbImage, mask: &GrayImage) -> Option<([u8; 3], usize)> {
    let mut sum = [0u64; 3];
    let mut count = 0usize;
    for (pixel, m) in image.pixels().zip(mask.pixels()) {
        if m.0[0] > 0 {
            for c in 0..3 {
                sum[c] += pixel.0[c] as u64;
            }
            count += 1;
        }
    }
    (count > 0).then(|| (mean_of(sum, count), count))
}

fn image_mean(image: &RgbImage) -> ([u8; 3], usize) {
    let mut sum = [0u64; 3];
    for pixel in image.pixels() {
        for c in 0..3 {
            sum[c] += pixel.0[c] as u64;
        }
    }
    let count = (image.width() as usize) * (image.height() as usize);
    if count == 0 {
        return ([0, 0, 0], 0);
    }
    (mean_of(sum, count), count)
}

/// Channel means truncated toward zero
fn mean_of(sum: [u64; 3], count: usize) -> [u8; 3] {
    let n = count as u64;
    [(sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8]
}
