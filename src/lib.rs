//! # Season Scan
//!
//! A Rust crate for seasonal color analysis of portrait photographs.
//!
//! This library classifies a subject's skin tone into one of twelve color
//! seasons by:
//! - Removing the lighting color cast with a gray-world white balance in Lab space
//! - Sampling the average skin color inside the face-oval landmarks
//! - Thresholding lightness, chroma and warmth into a season
//! - Looking up the season's best and avoid palettes
//!
//! It also renders drape previews: the portrait framed by a chosen swatch color.
//!
//! Face landmark detection is not part of this crate; supply any
//! [`LandmarkProvider`] implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use season_scan::{analyze_portrait, DrapeSelection, FaceLandmarks, StaticLandmarks};
//! use std::path::Path;
//!
//! let landmarks = FaceLandmarks::from_json_file(Path::new("landmarks.json"))?;
//! let analysis = analyze_portrait(Path::new("portrait.jpg"), StaticLandmarks::new(landmarks))?;
//! println!("{} (skin {})", analysis.season, analysis.skin_tone().hex());
//!
//! let mut drape = DrapeSelection::new();
//! drape.select(analysis.best()[0])?;
//! let preview = analysis.preview_selection(&drape);
//! # Ok::<(), season_scan::AnalysisError>(())
//! ```

use std::path::Path;

pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod drape;
pub mod error;
pub mod image_loader;
pub mod pipeline;
pub mod report;

pub use calibration::WhiteBalanceNormalizer;
pub use color::{lookup, Season, SeasonClassifier, SeasonPalette};
pub use config::AnalysisConfig;
pub use detection::{FaceLandmarks, LandmarkProvider, NormalizedPoint, SkinSampler, SkinTone, StaticLandmarks};
pub use drape::{DrapeRenderer, DrapeSelection};
pub use error::{AnalysisError, Result};
pub use pipeline::{SeasonAnalysis, SeasonAnalyzer};
pub use report::{DirectoryPresenter, Presenter, SeasonReport};

/// Analyze a portrait file with default settings
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The file cannot be read (`ImageIoError`) or decoded (`DecodeFailure`)
/// - No face is found (`NoFaceDetected`)
/// - The landmarks do not cover the face oval (`InsufficientLandmarks`)
pub fn analyze_portrait<P: LandmarkProvider>(image_path: &Path, provider: P) -> Result<SeasonAnalysis> {
    SeasonAnalyzer::new(provider).analyze_path(image_path)
}
