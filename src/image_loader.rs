//! Image decoding and encoding at the pipeline boundary
//!
//! All images inside the crate are `RgbImage` in RGB channel order. This
//! module is the only place bytes become pixels and pixels become bytes,
//! so channel order never needs to be swapped anywhere else.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, BMP, WebP, TIFF and GIF (first frame only), via the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat as CodecFormat, RgbImage};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// BMP image
    Bmp,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// GIF image (first frame only)
    Gif,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::WebP => "webp",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Gif => "gif",
        }
    }

    fn codec(&self) -> CodecFormat {
        match self {
            ImageFormat::Jpeg => CodecFormat::Jpeg,
            ImageFormat::Png => CodecFormat::Png,
            ImageFormat::Bmp => CodecFormat::Bmp,
            ImageFormat::WebP => CodecFormat::WebP,
            ImageFormat::Tiff => CodecFormat::Tiff,
            ImageFormat::Gif => CodecFormat::Gif,
        }
    }

    fn from_codec(format: CodecFormat) -> Option<ImageFormat> {
        match format {
            CodecFormat::Jpeg => Some(ImageFormat::Jpeg),
            CodecFormat::Png => Some(ImageFormat::Png),
            CodecFormat::Bmp => Some(ImageFormat::Bmp),
            CodecFormat::WebP => Some(ImageFormat::WebP),
            CodecFormat::Tiff => Some(ImageFormat::Tiff),
            CodecFormat::Gif => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

/// Decode uploaded bytes to an RGB image
///
/// The format is sniffed from the content, not from any file name.
///
/// # Errors
///
/// Returns `DecodeFailure` if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<(RgbImage, ImageFormat)> {
    let codec = image::guess_format(bytes)
        .map_err(|e| AnalysisError::decode("Unrecognized image data", e))?;
    let format = ImageFormat::from_codec(codec).ok_or_else(|| AnalysisError::DecodeFailure {
        message: format!("Unsupported image format: {:?}", codec),
        source: None,
    })?;

    let img: DynamicImage = image::load_from_memory_with_format(bytes, codec)
        .map_err(|e| AnalysisError::decode("Failed to decode image", e))?;
    let rgb = img.to_rgb8();
    debug!(width = rgb.width(), height = rgb.height(), ?format, "decoded image");
    Ok((rgb, format))
}

/// Load an image file as RGB
///
/// # Errors
///
/// - `ImageIoError` if the file cannot be read
/// - `DecodeFailure` if its content is not a supported image
pub fn load_image(path: &Path) -> Result<(RgbImage, ImageFormat)> {
    let bytes = std::fs::read(path).map_err(|e| {
        AnalysisError::image_io(format!("Failed to open image file: {}", path.display()), e)
    })?;
    decode_image(&bytes)
}

/// Encode an RGB image in the given format
pub fn encode_image(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format.codec())
        .map_err(|e| AnalysisError::image_io(format!("Failed to encode {:?} image", format), e))?;
    Ok(buffer.into_inner())
}

/// Encode and write an RGB image to disk
pub fn save_image(image: &RgbImage, path: &Path, format: ImageFormat) -> Result<()> {
    let bytes = encode_image(image, format)?;
    std::fs::write(path, bytes).map_err(|e| {
        AnalysisError::image_io(format!("Failed to write image: {}", path.display()), e)
    })
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "bmp", "webp", "tiff", "tif", "gif"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
