//! Color conversion, season classification and palette lookup
//!
//! This module handles color space conversions, maps an average skin
//! color onto one of twelve seasons, and serves each season's palettes.

pub mod catalog;
pub mod conversion;
pub mod season;

pub use catalog::{lookup, SeasonPalette};
pub use conversion::{ColorConverter, EncodedLab};
pub use season::{Season, SeasonClassifier};
