//! Illumination normalization
//!
//! Removes the color cast introduced by ambient lighting before skin
//! sampling, so the classifier sees the subject's own tone.

pub mod white_balance;

pub use white_balance::{ColorCast, WhiteBalanceNormalizer};
