//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a raw encoded buffer, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_fit_dimensions;
use super::params::{NormalizeParams, Quality};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, data: &[u8]) -> Result<(u32, u32)> {
    let dims = backend.identify(data)?;
    Ok((dims.width, dims.height))
}

/// A normalized image: re-encoded bytes plus the dimensions they decode to.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Normalize a raw captured/selected image for storage and display.
///
/// Computes the largest rectangle with the source aspect ratio that fits
/// inside `bounds`, resamples the source into it, and re-encodes as JPEG
/// at the given quality. Synchronous and blocking.
pub fn normalize(
    backend: &impl ImageBackend,
    data: &[u8],
    bounds: (u32, u32),
    quality: Quality,
) -> Result<NormalizedImage> {
    let dims = backend.identify(data)?;
    let (width, height) = calculate_fit_dimensions((dims.width, dims.height), bounds);

    let encoded = backend.resize(
        data,
        &NormalizeParams {
            width,
            height,
            quality,
        },
    )?;

    Ok(NormalizedImage {
        data: encoded,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    #[test]
    fn get_dimensions_calls_backend() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1920,
            height: 1080,
        }]);

        let dims = get_dimensions(&backend, &[1, 2, 3]).unwrap();
        assert_eq!(dims, (1920, 1080));
    }

    #[test]
    fn normalize_fits_landscape_source_into_bounds() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 4032,
            height: 3024,
        }]);

        let result = normalize(&backend, &[0; 100], (414, 896), Quality::default()).unwrap();

        // 4:3 source into a 414x896 box: width pins at 414, height = 311
        assert_eq!(result.width, 414);
        assert_eq!(result.height, 311);
        assert_eq!(result.data, MockBackend::encoded(414, 311, 100));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify { input_len: 100 }));
        assert!(matches!(
            &ops[1],
            RecordedOp::Resize {
                input_len: 100,
                width: 414,
                height: 311,
                quality: 100,
            }
        ));
    }

    #[test]
    fn normalize_fits_portrait_source_into_bounds() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 3024,
            height: 4032,
        }]);

        let result = normalize(&backend, &[0; 10], (414, 896), Quality::default()).unwrap();

        // 3:4 source into a 414x896 box: width pins at 414, height = 552
        assert_eq!(result.width, 414);
        assert_eq!(result.height, 552);
    }

    #[test]
    fn normalize_passes_quality_through() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 100,
            height: 100,
        }]);

        normalize(&backend, &[0; 4], (50, 50), Quality::new(80)).unwrap();

        assert!(matches!(
            backend.get_operations()[1],
            RecordedOp::Resize { quality: 80, .. }
        ));
    }

    #[test]
    fn normalize_propagates_decode_failure_without_resizing() {
        let backend = MockBackend::new(); // no prepared dimensions → identify fails

        let result = normalize(&backend, &[0; 4], (414, 896), Quality::default());
        assert!(result.is_err());
        assert_eq!(backend.get_operations().len(), 1);
    }
}
