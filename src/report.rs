//! Presentation adapter
//!
//! The pipeline never renders UI itself. A [`Presenter`] receives the
//! finished season, palettes, drape preview and skin tone, and decides how
//! to show or store them.

use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::{Season, SeasonPalette};
use crate::detection::SkinTone;
use crate::image_loader::{self, ImageFormat};
use crate::{AnalysisError, Result};

/// Consumer of a finished analysis
pub trait Presenter {
    fn present(
        &mut self,
        season: Season,
        best: &[&str],
        avoid: &[&str],
        preview: &RgbImage,
        skin: SkinTone,
    ) -> Result<()>;
}

/// Serializable summary of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub season: Season,
    pub skin_hex: String,
    pub skin_rgb: [u8; 3],
    pub best: Vec<String>,
    pub avoid: Vec<String>,
}

impl SeasonReport {
    pub fn new(season: Season, palette: &SeasonPalette, skin: SkinTone) -> Self {
        Self::from_parts(season, &palette.best, &palette.avoid, skin)
    }

    fn from_parts(season: Season, best: &[&str], avoid: &[&str], skin: SkinTone) -> Self {
        Self {
            season,
            skin_hex: skin.hex(),
            skin_rgb: skin.rgb,
            best: best.iter().map(|c| c.to_string()).collect(),
            avoid: avoid.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::serialization("Failed to serialize report", e))
    }
}

/// Writes `report.json` and a `preview.<ext>` image into a directory
#[derive(Debug, Clone)]
pub struct DirectoryPresenter {
    output_dir: PathBuf,
    format: ImageFormat,
}

impl DirectoryPresenter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ImageFormat::Png,
        }
    }

    /// Encode the preview in `format` instead of PNG
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("report.json")
    }

    pub fn preview_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("preview.{}", self.format.extension()))
    }
}

impl Presenter for DirectoryPresenter {
    fn present(
        &mut self,
        season: Season,
        best: &[&str],
        avoid: &[&str],
        preview: &RgbImage,
        skin: SkinTone,
    ) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            AnalysisError::image_io(
                format!("Failed to create output directory: {}", self.output_dir.display()),
                e,
            )
        })?;

        let report = SeasonReport::from_parts(season, best, avoid, skin);
        let report_path = self.report_path();
        std::fs::write(&report_path, report.to_json()?).map_err(|e| {
            AnalysisError::image_io(format!("Failed to write report: {}", report_path.display()), e)
        })?;

        let preview_path = self.preview_path();
        image_loader::save_image(preview, &preview_path, self.format)?;

        info!(
            report = %report_path.display(),
            preview = %preview_path.display(),
            "wrote season report"
        );
        Ok(())
    }
}
