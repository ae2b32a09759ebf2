//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify (JPEG, PNG) | `image::ImageReader::into_dimensions` (header only) |
//! | Decode | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::NormalizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image from an in-memory encoded buffer, guessing the format
/// from its magic bytes.
fn load_image(data: &[u8]) -> Result<DynamicImage, BackendError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| BackendError::Decode(format!("Unrecognized image data: {}", e)))?
        .decode()
        .map_err(|e| BackendError::Decode(e.to_string()))
}

impl ImageBackend for RustBackend {
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError> {
        let (width, height) = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| BackendError::Decode(format!("Unrecognized image data: {}", e)))?
            .into_dimensions()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, data: &[u8], params: &NormalizeParams) -> Result<Vec<u8>, BackendError> {
        let img = load_image(data)?;

        // Exact dimensions: the fit calculation upstream already preserved
        // the aspect ratio.
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);

        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, params.quality.value() as u8);
        resized
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode(e.to_string()))?;

        if out.is_empty() {
            return Err(BackendError::Encode("encoder produced no output".into()));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;
    use image::{ExtendedColorType, ImageEncoder, RgbImage};

    /// Encode a small valid JPEG buffer with the given dimensions.
    fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut out = Vec::new();
        JpegEncoder::new(&mut out)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .unwrap();
        out
    }

    /// Encode a small valid PNG buffer with the given dimensions.
    fn create_test_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, 0, (y % 256) as u8])
        });
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .unwrap();
        out
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let data = create_test_jpeg(200, 150);
        let backend = RustBackend::new();
        let dims = backend.identify(&data).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_synthetic_png() {
        let data = create_test_png(64, 48);
        let backend = RustBackend::new();
        let dims = backend.identify(&data).unwrap();
        assert_eq!(dims.width, 64);
        assert_eq!(dims.height, 48);
    }

    #[test]
    fn identify_garbage_bytes_errors() {
        let backend = RustBackend::new();
        let result = backend.identify(b"definitely not an image");
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn identify_empty_buffer_errors() {
        let backend = RustBackend::new();
        assert!(backend.identify(&[]).is_err());
    }

    #[test]
    fn resize_jpeg_produces_decodable_jpeg_at_target_dimensions() {
        let data = create_test_jpeg(400, 300);
        let backend = RustBackend::new();
        let out = backend
            .resize(
                &data,
                &NormalizeParams {
                    width: 200,
                    height: 150,
                    quality: Quality::new(100),
                },
            )
            .unwrap();

        assert!(!out.is_empty());
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 150);
        assert_eq!(
            image::guess_format(&out).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn resize_png_input_reencodes_as_jpeg() {
        let data = create_test_png(100, 100);
        let backend = RustBackend::new();
        let out = backend
            .resize(
                &data,
                &NormalizeParams {
                    width: 50,
                    height: 50,
                    quality: Quality::new(85),
                },
            )
            .unwrap();

        assert_eq!(
            image::guess_format(&out).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn resize_garbage_bytes_errors() {
        let backend = RustBackend::new();
        let result = backend.resize(
            b"not pixels",
            &NormalizeParams {
                width: 10,
                height: 10,
                quality: Quality::default(),
            },
        );
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }
}
