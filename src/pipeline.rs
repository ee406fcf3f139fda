//! End-to-end season analysis
//!
//! Runs normalize → detect landmarks → sample skin → classify → palette
//! lookup synchronously on the calling thread. Results are all-or-nothing:
//! when no face is found, no season, palette or preview is produced.

use std::path::Path;

use image::RgbImage;
use tracing::{info, warn};

use crate::calibration::WhiteBalanceNormalizer;
use crate::color::{lookup, Season, SeasonClassifier, SeasonPalette};
use crate::config::AnalysisConfig;
use crate::detection::{LandmarkProvider, SkinSample, SkinSampler, SkinTone};
use crate::drape::{DrapeRenderer, DrapeSelection};
use crate::image_loader::{self, ImageFormat};
use crate::report::{Presenter, SeasonReport};
use crate::{AnalysisError, Result};

/// Season analysis pipeline with an injected landmark provider
///
/// The analyzer holds no per-request state; one instance can serve
/// concurrent requests when `P` is shared (e.g. `Arc<dyn LandmarkProvider>`).
pub struct SeasonAnalyzer<P> {
    provider: P,
    normalizer: WhiteBalanceNormalizer,
    sampler: SkinSampler,
    classifier: SeasonClassifier,
    renderer: DrapeRenderer,
}

impl<P: LandmarkProvider> SeasonAnalyzer<P> {
    /// Analyzer with default settings
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            normalizer: WhiteBalanceNormalizer::new(),
            sampler: SkinSampler::new(),
            classifier: SeasonClassifier::new(),
            renderer: DrapeRenderer::new(),
        }
    }

    /// Analyzer configured from an [`AnalysisConfig`]
    pub fn with_config(provider: P, config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            provider,
            normalizer: WhiteBalanceNormalizer::with_enabled(config.white_balance.enabled),
            sampler: SkinSampler::new(),
            classifier: SeasonClassifier::new(),
            renderer: config.drape_renderer()?,
        })
    }

    /// Analyze a decoded RGB portrait
    ///
    /// # Errors
    ///
    /// - `NoFaceDetected` when the provider finds no face
    /// - `InsufficientLandmarks` when the keypoints do not cover the face oval
    pub fn analyze(&self, image: &RgbImage) -> Result<SeasonAnalysis> {
        self.run(image, None)
    }

    /// Decode and analyze uploaded image bytes
    ///
    /// # Errors
    ///
    /// Additionally returns `DecodeFailure` for bytes that are not an image.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<SeasonAnalysis> {
        let (image, format) = image_loader::decode_image(bytes)?;
        self.run(&image, Some(format))
    }

    /// Load and analyze an image file
    pub fn analyze_path(&self, path: &Path) -> Result<SeasonAnalysis> {
        let (image, format) = image_loader::load_image(path)?;
        self.run(&image, Some(format))
    }

    fn run(&self, image: &RgbImage, format: Option<ImageFormat>) -> Result<SeasonAnalysis> {
        let normalized = self.normalizer.normalize(image);

        let landmarks = self.provider.detect(&normalized);
        if landmarks.is_none() {
            warn!("landmark provider found no face");
            return Err(AnalysisError::NoFaceDetected);
        }

        let skin = self.sampler.sample(&normalized, landmarks.as_ref())?;
        let season = self.classifier.classify(skin.tone.rgb);
        info!(
            season = season.label(),
            skin = %skin.tone.hex(),
            pixels = skin.pixel_count,
            "season analysis complete"
        );

        Ok(SeasonAnalysis {
            skin,
            season,
            palette: lookup(season),
            normalized,
            format,
            renderer: self.renderer,
        })
    }
}

/// Complete result for one portrait
#[derive(Debug, Clone)]
pub struct SeasonAnalysis {
    pub skin: SkinSample,
    pub season: Season,
    pub palette: &'static SeasonPalette,
    /// White-balanced image the skin was sampled from
    pub normalized: RgbImage,
    /// Encoding of the uploaded image, when it came from bytes or a file
    pub format: Option<ImageFormat>,
    renderer: DrapeRenderer,
}

impl SeasonAnalysis {
    pub fn skin_tone(&self) -> SkinTone {
        self.skin.tone
    }

    pub fn best(&self) -> &'static [&'static str; 4] {
        &self.palette.best
    }

    pub fn avoid(&self) -> &'static [&'static str; 4] {
        &self.palette.avoid
    }

    /// Drape preview over the normalized image; invalid or missing swatches render white
    pub fn preview(&self, swatch_hex: Option<&str>) -> RgbImage {
        self.renderer.render(&self.normalized, swatch_hex)
    }

    pub fn preview_selection(&self, selection: &DrapeSelection) -> RgbImage {
        self.renderer.render_selection(&self.normalized, selection)
    }

    /// Encode a preview in the same format the portrait arrived in (PNG otherwise)
    pub fn encoded_preview(&self, selection: &DrapeSelection) -> Result<Vec<u8>> {
        let format = self.format.unwrap_or(ImageFormat::Png);
        image_loader::encode_image(&self.preview_selection(selection), format)
    }

    pub fn report(&self) -> SeasonReport {
        SeasonReport::new(self.season, self.palette, self.skin.tone)
    }

    /// Hand the result and a drape preview to a presentation adapter
    pub fn present<R: Presenter + ?Sized>(
        &self,
        presenter: &mut R,
        selection: &DrapeSelection,
    ) -> Result<()> {
        let preview = self.preview_selection(selection);
        presenter.present(
            self.season,
            &self.palette.best,
            &self.palette.avoid,
            &preview,
            self.skin.tone,
        )
    }
}
