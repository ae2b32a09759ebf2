//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize. Both work on in-memory encoded byte buffers
//! — the platform hands the normalizer a raw captured image, never a path.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked, built on the `image` crate.

use super::params::NormalizeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode source image: {0}")]
    Decode(String),
    #[error("Failed to encode output image: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations so the rest of the codebase
/// is backend-agnostic.
pub trait ImageBackend {
    /// Get the pixel dimensions of an encoded image buffer.
    fn identify(&self, data: &[u8]) -> Result<Dimensions, BackendError>;

    /// Resample an encoded image buffer to the exact target dimensions and
    /// re-encode it as JPEG at the given quality.
    fn resize(&self, data: &[u8], params: &NormalizeParams) -> Result<Vec<u8>, BackendError>;
}
