//! Error types for the season_scan library

use thiserror::Error;

/// Result type alias for season_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error types for portrait color analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The landmark provider found no face in the image
    #[error("No face detected in image")]
    NoFaceDetected,

    /// Uploaded bytes are not a decodable image
    #[error("Failed to decode image: {message}")]
    DecodeFailure {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A swatch color string is not a `#RRGGBB` hex color
    #[error("Invalid color '{value}': {reason}")]
    InvalidColorSpec { value: String, reason: String },

    /// The keypoint set does not cover every face-oval index
    #[error("Landmark set too small: need at least {required} points, got {found}")]
    InsufficientLandmarks { required: usize, found: usize },

    /// Reading or writing an image file failed
    #[error("Image I/O error: {message}")]
    ImageIoError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A report could not be serialized
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image I/O error with context
    pub fn image_io<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageIoError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a serialization error with context
    pub fn serialization<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorSpec {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Only a bad swatch color is recovered locally (the drape falls back to white).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::InvalidColorSpec { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoFaceDetected => {
                "Face not found. Please use a clearer photo.".to_string()
            }
            AnalysisError::DecodeFailure { .. } => {
                "Could not read the image. Please upload a JPEG or PNG photo.".to_string()
            }
            AnalysisError::InvalidColorSpec { value, .. } => {
                format!("'{}' is not a valid color; showing a white drape instead.", value)
            }
            AnalysisError::InsufficientLandmarks { .. } => {
                "Face landmarks were incomplete. Please try a clearer, front-facing photo.".to_string()
            }
            _ => "Color analysis failed. Please try with a different image.".to_string(),
        }
    }
}
