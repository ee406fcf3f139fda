//! Configuration for the season analysis pipeline.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use season_scan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), season_scan::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`WhiteBalanceConfig`]: illumination normalization switch
//! - [`DrapeConfig`]: preview border width and fallback swatch
//! - [`ReportConfig`]: where the presentation adapter writes its output
//!
//! Classifier thresholds are fixed constants, not configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorConverter;
use crate::constants::drape;
use crate::drape::DrapeRenderer;
use crate::{AnalysisError, Result};

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub white_balance: WhiteBalanceConfig,

    #[serde(default)]
    pub drape: DrapeConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Illumination normalization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiteBalanceConfig {
    /// Apply gray-world correction before sampling
    pub enabled: bool,
}

/// Drape preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrapeConfig {
    /// Border thickness as a fraction of image width, in (0, 0.5]
    pub border_fraction: f32,

    /// Swatch used when the selection is missing or invalid (`#RRGGBB`)
    pub default_color: String,
}

/// Presentation output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory receiving the report and preview image
    pub output_dir: PathBuf,
}

impl Default for WhiteBalanceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for DrapeConfig {
    fn default() -> Self {
        Self {
            border_fraction: drape::BORDER_FRACTION,
            default_color: drape::DEFAULT_COLOR.to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("season_report"),
        }
    }
}

impl AnalysisConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        let fraction = self.drape.border_fraction;
        if !(fraction > 0.0 && fraction <= 0.5) {
            return Err(AnalysisError::InvalidParameter {
                parameter: "drape.border_fraction".to_string(),
                value: fraction.to_string(),
            });
        }
        if !ColorConverter::new().is_hex_color(&self.drape.default_color) {
            return Err(AnalysisError::InvalidParameter {
                parameter: "drape.default_color".to_string(),
                value: self.drape.default_color.clone(),
            });
        }
        Ok(())
    }

    /// Build the drape renderer described by this configuration
    pub fn drape_renderer(&self) -> Result<DrapeRenderer> {
        self.validate()?;
        DrapeRenderer::with_params(self.drape.border_fraction, &self.drape.default_color)
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read config: {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse config: {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize config", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write config: {}", path.display()), e)
        })
    }
}
