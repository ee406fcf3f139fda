//! Face detection seam and skin sampling
//!
//! The landmark detector is injected through [`LandmarkProvider`]; the
//! sampler turns its keypoints into an average skin tone.

pub mod landmarks;
pub mod skin;

pub use landmarks::{FaceLandmarks, LandmarkProvider, NormalizedPoint, StaticLandmarks};
pub use skin::{SkinSample, SkinSampler, SkinTone};
