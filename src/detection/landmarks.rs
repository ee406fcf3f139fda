//! Facial landmark provider seam
//!
//! Landmark detection itself is an external capability. The pipeline only
//! needs an ordered set of normalized keypoints for the single best face,
//! or nothing when no face is found.

use std::path::Path;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::constants::face_mesh;
use crate::{AnalysisError, Result};

/// One keypoint as fractions of image width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel coordinates, truncated toward zero
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.x * width as f32) as i32,
            (self.y * height as f32) as i32,
        )
    }
}

/// Ordered keypoints for one face, valid only for the image they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub points: Vec<NormalizedPoint>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Face-oval contour in pixel coordinates, in contour order
    ///
    /// # Errors
    ///
    /// Returns `InsufficientLandmarks` if any oval index is missing.
    pub fn face_oval_pixels(&self, width: u32, height: u32) -> Result<Vec<(i32, i32)>> {
        face_mesh::FACE_OVAL
            .iter()
            .map(|&idx| {
                self.points
                    .get(idx)
                    .map(|p| p.to_pixel(width, height))
                    .ok_or_else(|| AnalysisError::InsufficientLandmarks {
                        required: face_mesh::MIN_LANDMARKS,
                        found: self.points.len(),
                    })
            })
            .collect()
    }

    /// Read landmarks from a JSON file (`{"points": [{"x": .., "y": ..}, ..]}`)
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read landmarks: {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse landmarks: {}", path.display()), e)
        })
    }
}

/// External face-landmark detector
///
/// Implementations are shared read-only across requests, so `detect` must
/// be safe to call concurrently.
pub trait LandmarkProvider: Send + Sync {
    /// Detect the single best face; `None` when no face is found
    fn detect(&self, image: &RgbImage) -> Option<FaceLandmarks>;
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for &P {
    fn detect(&self, image: &RgbImage) -> Option<FaceLandmarks> {
        (**self).detect(image)
    }
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for std::sync::Arc<P> {
    fn detect(&self, image: &RgbImage) -> Option<FaceLandmarks> {
        (**self).detect(image)
    }
}

/// Provider returning a fixed landmark set regardless of the image
///
/// Useful when landmarks were computed out of process, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLandmarks {
    landmarks: Option<FaceLandmarks>,
}

impl StaticLandmarks {
    pub fn new(landmarks: FaceLandmarks) -> Self {
        Self {
            landmarks: Some(landmarks),
        }
    }

    /// Provider that never finds a face
    pub fn none() -> Self {
        Self { landmarks: None }
    }
}

impl LandmarkProvider for StaticLandmarks {
    fn detect(&self, _image: &RgbImage) -> Option<FaceLandmarks> {
        self.landmarks.clone().filter(|l| !l.is_empty())
    }
}
