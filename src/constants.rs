//! Classification thresholds and fixed reference values
//!
//! Perceptual thresholds are expressed in the 8-bit Lab encoding used
//! throughout the crate: L in [0, 255], a and b centered on 128.

/// 8-bit Lab encoding parameters
pub mod lab8 {
    /// Neutral value of the a and b chroma axes
    pub const NEUTRAL: f32 = 128.0;

    /// Scale from CIE L* [0, 100] to the 8-bit lightness channel
    pub const L_SCALE: f32 = 255.0 / 100.0;

    /// Maximum channel value
    pub const MAX: f32 = 255.0;
}

/// Season classifier thresholds
pub mod thresholds {
    /// Lightness strictly below this is "deep"
    pub const DEEP_BELOW: f32 = 115.0;

    /// Lightness strictly above this is "light"
    pub const LIGHT_ABOVE: f32 = 150.0;

    /// Chroma strictly above this is "clear"
    pub const CLEAR_ABOVE: f32 = 25.0;

    /// Chroma strictly below this is "soft"
    pub const SOFT_BELOW: f32 = 18.0;

    /// b strictly above this is warm (yellow-leaning)
    pub const WARM_B_ABOVE: f32 = super::lab8::NEUTRAL;
}

/// Drape preview parameters
pub mod drape {
    /// Border thickness as a fraction of image width
    pub const BORDER_FRACTION: f32 = 0.08;

    /// Swatch used when no valid selection exists
    pub const DEFAULT_COLOR: &str = "#FFFFFF";
}

/// Face-mesh landmark topology
pub mod face_mesh {
    /// Closed face-oval contour, clockwise from the forehead center
    pub const FACE_OVAL: [usize; 36] = [
        10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377,
        152, 148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
    ];

    /// Smallest keypoint count that covers every face-oval index
    pub const MIN_LANDMARKS: usize = 455;
}
