//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the output dimensions) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping
//! backends (e.g. for testing with a mock) without changing operation logic.

/// Quality setting for lossy image encoding (1-100).
///
/// Defaults to 100 — stored photos are re-encoded at maximum quality, so the
/// resize itself is the only loss the normalizer introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(100)
    }
}

/// Parameters for a normalize operation: exact target dimensions plus
/// encoding quality. Dimensions are computed upstream by
/// [`calculate_fit_dimensions`](super::calculate_fit_dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeParams {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
