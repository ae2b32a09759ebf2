//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the largest dimensions that fit inside a bounding box while
/// preserving the source aspect ratio ("fit" scaling, not "fill"/crop).
///
/// One output dimension always matches the corresponding bound exactly;
/// the other shrinks to preserve the ratio. Sources smaller than the box
/// are scaled up — the result always fills one axis of the box.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Bounding box dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Fit dimensions, each at least 1 and at most the bound
///
/// # Examples
/// ```
/// # use camroll::imaging::calculate_fit_dimensions;
/// // 4:3 landscape into a portrait box: width pins, height shrinks
/// assert_eq!(calculate_fit_dimensions((800, 600), (400, 500)), (400, 300));
///
/// // 3:4 portrait into a landscape box: height pins, width shrinks
/// assert_eq!(calculate_fit_dimensions((600, 800), (500, 400)), (300, 400));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    let src_aspect = src_w as f64 / src_h as f64;
    let bounds_aspect = max_w as f64 / max_h as f64;

    if src_aspect >= bounds_aspect {
        // Source is wider than the box: width is the limiting axis
        let w = max_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h.clamp(1, max_h))
    } else {
        // Source is taller than the box: height is the limiting axis
        let h = max_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w.clamp(1, max_w), h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_landscape_source_into_portrait_box() {
        // 800x600 (4:3) → 400x500 box: width pins at 400, height = 400 / (4/3) = 300
        assert_eq!(calculate_fit_dimensions((800, 600), (400, 500)), (400, 300));
    }

    #[test]
    fn fit_portrait_source_into_landscape_box() {
        // 600x800 (3:4) → 500x400 box: height pins at 400, width = 400 * (3/4) = 300
        assert_eq!(calculate_fit_dimensions((600, 800), (500, 400)), (300, 400));
    }

    #[test]
    fn fit_same_aspect_ratio_matches_box() {
        assert_eq!(calculate_fit_dimensions((800, 600), (400, 300)), (400, 300));
    }

    #[test]
    fn fit_square_source_into_portrait_box() {
        // 400x400 (1:1) → 200x300 box: width pins at 200
        assert_eq!(calculate_fit_dimensions((400, 400), (200, 300)), (200, 200));
    }

    #[test]
    fn fit_scales_small_source_up() {
        // 100x75 → 800x800 box: fills the width axis
        assert_eq!(calculate_fit_dimensions((100, 75), (800, 800)), (800, 600));
    }

    #[test]
    fn fit_extreme_panorama_never_collapses_to_zero() {
        // 10000x10 into a 100x100 box: raw height would round to 0
        let (w, h) = calculate_fit_dimensions((10000, 10), (100, 100));
        assert_eq!(w, 100);
        assert_eq!(h, 1);
    }

    #[test]
    fn fit_output_never_exceeds_bounds() {
        for &source in &[(3000, 2000), (2000, 3000), (414, 896), (1, 1), (7, 5000)] {
            for &bounds in &[(414, 896), (896, 414), (100, 100)] {
                let (w, h) = calculate_fit_dimensions(source, bounds);
                assert!(w >= 1 && w <= bounds.0, "{source:?} in {bounds:?} gave width {w}");
                assert!(h >= 1 && h <= bounds.1, "{source:?} in {bounds:?} gave height {h}");
            }
        }
    }

    #[test]
    fn fit_preserves_aspect_ratio_within_rounding() {
        let source = (1234, 789);
        let bounds = (414, 896);
        let (w, h) = calculate_fit_dimensions(source, bounds);
        let src_ratio = source.0 as f64 / source.1 as f64;
        let out_ratio = w as f64 / h as f64;
        // One rounded pixel on the short axis bounds the ratio error
        assert!((src_ratio - out_ratio).abs() < src_ratio / h as f64);
    }
}
