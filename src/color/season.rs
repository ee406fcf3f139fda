//! Twelve-season classification of skin tones
//!
//! Maps an average skin color into one of the twelve seasonal labels using
//! lightness, chroma and warmth measured in the 8-bit Lab encoding.
//!
//! Branch order is a fixed priority: depth, then lightness, then clarity,
//! then softness. A color that is both deep and clear is classified deep.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::conversion::{ColorConverter, EncodedLab};
use crate::constants::thresholds;
use crate::AnalysisError;

/// Seasonal color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "Deep Winter")]
    DeepWinter,
    #[serde(rename = "Cool Winter")]
    CoolWinter,
    #[serde(rename = "Clear Winter")]
    ClearWinter,
    #[serde(rename = "Deep Autumn")]
    DeepAutumn,
    #[serde(rename = "Warm Autumn")]
    WarmAutumn,
    #[serde(rename = "Soft Autumn")]
    SoftAutumn,
    #[serde(rename = "Warm Spring")]
    WarmSpring,
    #[serde(rename = "Light Spring")]
    LightSpring,
    #[serde(rename = "Clear Spring")]
    ClearSpring,
    #[serde(rename = "Light Summer")]
    LightSummer,
    #[serde(rename = "Cool Summer")]
    CoolSummer,
    #[serde(rename = "Soft Summer")]
    SoftSummer,
}

impl Season {
    pub const ALL: [Season; 12] = [
        Season::DeepWinter,
        Season::CoolWinter,
        Season::ClearWinter,
        Season::DeepAutumn,
        Season::WarmAutumn,
        Season::SoftAutumn,
        Season::WarmSpring,
        Season::LightSpring,
        Season::ClearSpring,
        Season::LightSummer,
        Season::CoolSummer,
        Season::SoftSummer,
    ];

    /// Display label, e.g. "Deep Winter"
    pub fn label(&self) -> &'static str {
        match self {
            Season::DeepWinter => "Deep Winter",
            Season::CoolWinter => "Cool Winter",
            Season::ClearWinter => "Clear Winter",
            Season::DeepAutumn => "Deep Autumn",
            Season::WarmAutumn => "Warm Autumn",
            Season::SoftAutumn => "Soft Autumn",
            Season::WarmSpring => "Warm Spring",
            Season::LightSpring => "Light Spring",
            Season::ClearSpring => "Clear Spring",
            Season::LightSummer => "Light Summer",
            Season::CoolSummer => "Cool Summer",
            Season::SoftSummer => "Soft Summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .iter()
            .copied()
            .find(|season| season.label() == s)
            .ok_or_else(|| AnalysisError::InvalidParameter {
                parameter: "season".to_string(),
                value: s.to_string(),
            })
    }
}

/// Perceptual attributes the classifier branches on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneTraits {
    pub lab: EncodedLab,
    pub chroma: f32,
    pub is_warm: bool,
    pub is_deep: bool,
    pub is_light: bool,
    pub is_clear: bool,
    pub is_soft: bool,
}

impl ToneTraits {
    pub fn from_lab(lab: EncodedLab) -> Self {
        let chroma = lab.chroma();
        Self {
            lab,
            chroma,
            is_warm: lab.b > thresholds::WARM_B_ABOVE,
            is_deep: lab.l < thresholds::DEEP_BELOW,
            is_light: lab.l > thresholds::LIGHT_ABOVE,
            is_clear: chroma > thresholds::CLEAR_ABOVE,
            is_soft: chroma < thresholds::SOFT_BELOW,
        }
    }
}

/// Deterministic skin-tone to season classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonClassifier {
    converter: ColorConverter,
}

impl SeasonClassifier {
    pub fn new() -> Self {
        Self {
            converter: ColorConverter::new(),
        }
    }

    /// Classify an average RGB skin color
    ///
    /// The color is converted to Lab and quantized to the 8-bit encoding
    /// before thresholds are applied.
    ///
    /// # Arguments
    ///
    /// * `rgb` - Average skin color in RGB order
    ///
    /// # Returns
    ///
    /// The first matching season in the order deep, light, clear, soft,
    /// then the warm or cool default
    pub fn classify(&self, rgb: [u8; 3]) -> Season {
        let lab = self.converter.rgb_to_encoded(rgb).quantized();
        self.classify_lab(lab)
    }

    /// Classify a color already in the 8-bit Lab encoding
    pub fn classify_lab(&self, lab: EncodedLab) -> Season {
        let traits = ToneTraits::from_lab(lab);
        let season = Self::season_for(&traits);
        debug!(
            l = traits.lab.l,
            chroma = traits.chroma,
            warm = traits.is_warm,
            season = season.label(),
            "classified skin tone"
        );
        season
    }

    fn season_for(t: &ToneTraits) -> Season {
        if t.is_warm {
            if t.is_deep {
                Season::DeepAutumn
            } else if t.is_light {
                Season::LightSpring
            } else if t.is_clear {
                Season::ClearSpring
            } else if t.is_soft {
                Season::SoftAutumn
            } else {
                Season::WarmAutumn
            }
        } else if t.is_deep {
            Season::DeepWinter
        } else if t.is_light {
            Season::LightSummer
        } else if t.is_clear {
            Season::ClearWinter
        } else if t.is_soft {
            Season::SoftSummer
        } else {
            Season::CoolWinter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(l: f32, a: f32, b: f32) -> EncodedLab {
        EncodedLab::new(l, a, b)
    }

    #[test]
    fn test_deep_takes_priority_over_clear() {
        let classifier = SeasonClassifier::new();
        // L=100 deep, chroma 30 clear, b > 128 warm
        let color = lab(100.0, 128.0, 158.0);
        assert!((color.chroma() - 30.0).abs() < 1e-5);
        assert_eq!(classifier.classify_lab(color), Season::DeepAutumn);
    }

    #[test]
    fn test_light_takes_priority_over_soft() {
        let classifier = SeasonClassifier::new();
        assert_eq!(classifier.classify_lab(lab(200.0, 128.0, 120.0)), Season::LightSummer);
        assert_eq!(classifier.classify_lab(lab(200.0, 128.0, 131.0)), Season::LightSpring);
    }

    #[test]
    fn test_warm_branch_labels() {
        let classifier = SeasonClassifier::new();
        assert_eq!(classifier.classify_lab(lab(60.0, 130.0, 140.0)), Season::DeepAutumn);
        assert_eq!(classifier.classify_lab(lab(180.0, 130.0, 140.0)), Season::LightSpring);
        assert_eq!(classifier.classify_lab(lab(130.0, 150.0, 150.0)), Season::ClearSpring);
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 138.0)), Season::SoftAutumn);
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 148.0)), Season::WarmAutumn);
    }

    #[test]
    fn test_cool_branch_labels() {
        let classifier = SeasonClassifier::new();
        assert_eq!(classifier.classify_lab(lab(60.0, 130.0, 120.0)), Season::DeepWinter);
        assert_eq!(classifier.classify_lab(lab(180.0, 130.0, 120.0)), Season::LightSummer);
        assert_eq!(classifier.classify_lab(lab(130.0, 160.0, 100.0)), Season::ClearWinter);
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 118.0)), Season::SoftSummer);
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 108.0)), Season::CoolWinter);
    }

    #[test]
    fn test_neutral_b_is_cool() {
        let classifier = SeasonClassifier::new();
        // b == 128 is not warm
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 128.0)), Season::SoftSummer);
    }

    #[test]
    fn test_lightness_boundaries_fall_through() {
        let classifier = SeasonClassifier::new();
        // chroma 20: neither clear nor soft
        assert_eq!(classifier.classify_lab(lab(115.0, 128.0, 148.0)), Season::WarmAutumn);
        assert_eq!(classifier.classify_lab(lab(150.0, 128.0, 148.0)), Season::WarmAutumn);
        assert_eq!(classifier.classify_lab(lab(115.0, 128.0, 108.0)), Season::CoolWinter);
        assert_eq!(classifier.classify_lab(lab(150.0, 128.0, 108.0)), Season::CoolWinter);
    }

    #[test]
    fn test_chroma_boundaries_fall_through() {
        let classifier = SeasonClassifier::new();
        // chroma exactly 25 (15-20-25 triangle) is not clear
        assert_eq!(classifier.classify_lab(lab(130.0, 143.0, 148.0)), Season::WarmAutumn);
        // chroma exactly 18 is not soft
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 146.0)), Season::WarmAutumn);
        assert_eq!(classifier.classify_lab(lab(130.0, 128.0, 110.0)), Season::CoolWinter);
    }

    #[test]
    fn test_classify_rgb_regression() {
        let classifier = SeasonClassifier::new();
        // warm beige, L8 ~ 191
        assert_eq!(classifier.classify([210, 180, 140]), Season::LightSpring);
        assert_eq!(classifier.classify([90, 60, 40]), Season::DeepAutumn);
        assert_eq!(classifier.classify([180, 120, 90]), Season::ClearSpring);
        assert_eq!(classifier.classify([60, 60, 80]), Season::DeepWinter);
        assert_eq!(classifier.classify([120, 120, 140]), Season::SoftSummer);
        assert_eq!(classifier.classify([128, 128, 128]), Season::SoftSummer);
    }

    #[test]
    fn test_classify_is_total_and_deterministic() {
        let classifier = SeasonClassifier::new();
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let first = classifier.classify(rgb);
                    assert!(Season::ALL.contains(&first));
                    assert_eq!(first, classifier.classify(rgb));
                }
            }
        }
    }

    #[test]
    fn test_season_label_roundtrip() {
        for season in Season::ALL {
            assert_eq!(season.label().parse::<Season>().unwrap(), season);
            assert_eq!(season.to_string(), season.label());
        }
        assert!("Midwinter".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_serializes_as_label() {
        let json = serde_json::to_string(&Season::ClearSpring).unwrap();
        assert_eq!(json, "\"Clear Spring\"");
        let back: Season = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Season::ClearSpring);
    }
}
