//! Geometry for the video-in-text wordmark.

/// Destination rect `(x, y, width, height)` that scales a `src` frame to
/// cover `dst` completely, centered, cropping the overflow.
pub fn cover_rect(src_width: f64, src_height: f64, dst_width: f64, dst_height: f64) -> (f64, f64, f64, f64) {
    if src_width <= 0.0 || src_height <= 0.0 {
        return (0.0, 0.0, dst_width, dst_height);
    }
    let scale = (dst_width / src_width).max(dst_height / src_height);
    let width = src_width * scale;
    let height = src_height * scale;
    ((dst_width - width) / 2.0, (dst_height - height) / 2.0, width, height)
}

/// Font size that makes text measured at `base_px` span `target_width`,
/// capped so a single line still fits `target_height`.
pub fn fit_font_px(measured_width: f64, base_px: f64, target_width: f64, target_height: f64) -> f64 {
    let by_height = target_height.max(0.0);
    if measured_width <= 0.0 {
        return by_height;
    }
    (base_px * target_width / measured_width).min(by_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_wider_source_crops_sides() {
        let (x, y, w, h) = cover_rect(1920.0, 1080.0, 1000.0, 1000.0);
        assert!((h - 1000.0).abs() < 1e-9);
        assert!((w - 1777.777_777_777_777_7).abs() < 1e-6);
        assert!(x < 0.0);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_cover_without_metadata_fills_target() {
        assert_eq!(cover_rect(0.0, 0.0, 800.0, 300.0), (0.0, 0.0, 800.0, 300.0));
    }

    #[test]
    fn test_fit_font_scales_to_width() {
        // "HACKTROPICA" at 100px measured 600px wide, 1200px canvas
        assert!((fit_font_px(600.0, 100.0, 1200.0, 1000.0) - 200.0).abs() < 1e-9);
        // short canvas caps the size
        assert!((fit_font_px(600.0, 100.0, 1200.0, 150.0) - 150.0).abs() < 1e-9);
        assert_eq!(fit_font_px(0.0, 100.0, 1200.0, 150.0), 150.0);
    }
}
