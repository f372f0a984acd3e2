//! Scroll-driven progress and the per-token reveal windows built on top of it.
//!
//! Progress is always a pure function of the current scroll offset, so
//! scrolling back up walks every derived value back to where it started.

/// Absolute scroll offsets between which a pinned region is traversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub start: f64,
    pub end: f64,
}

impl ScrollRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Region for a tall element whose content stays pinned while the page
    /// scrolls past it: progress is 0 when its top meets the viewport top and
    /// 1 when its bottom meets the viewport bottom.
    ///
    /// `rect_top` is the element's top relative to the viewport, as reported by
    /// `getBoundingClientRect`.
    pub fn from_rect(scroll_y: f64, rect_top: f64, rect_height: f64, viewport_height: f64) -> Self {
        let start = scroll_y + rect_top;
        let end = start + rect_height - viewport_height;
        Self { start, end }
    }

    /// Normalized position of `scroll` inside the region, clamped to [0, 1].
    pub fn progress_at(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll < self.start { 0.0 } else { 1.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Map `progress` from `input` onto `output`, clamping outside the input range.
pub fn interpolate(progress: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    let t = if span <= 0.0 {
        if progress < in_start { 0.0 } else { 1.0 }
    } else {
        ((progress - in_start) / span).clamp(0.0, 1.0)
    };
    lerp(out_start, out_end, t)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Slice of global progress over which one token goes from dim to full.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealWindow {
    pub start: f64,
    pub end: f64,
}

impl RevealWindow {
    /// Window `[index / total, (index + 1) / total)`.
    pub fn for_token(index: usize, total: usize) -> Self {
        let total = total.max(1) as f64;
        Self {
            start: index as f64 / total,
            end: (index as f64 + 1.0) / total,
        }
    }

    /// Local progress through this window, clamped to [0, 1].
    pub fn local(&self, progress: f64) -> f64 {
        interpolate(progress, (self.start, self.end), (0.0, 1.0))
    }

    pub fn value(&self, progress: f64, dim: f64, full: f64) -> f64 {
        interpolate(progress, (self.start, self.end), (dim, full))
    }

    pub fn color(&self, progress: f64, dim: Rgb, full: Rgb) -> Rgb {
        dim.lerp(full, self.local(progress))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round() as u8;
        Rgb(channel(self.0, to.0), channel(self.1, to.1), channel(self.2, to.2))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Visual state of one intro word at a given progress.
#[derive(Clone, Debug, PartialEq)]
pub struct WordStyle {
    pub opacity: f64,
    pub color: Rgb,
}

pub const WORD_DIM_OPACITY: f64 = 0.12;
pub const WORD_FULL_OPACITY: f64 = 1.0;
pub const WORD_DIM_COLOR: Rgb = Rgb(0xaa, 0xaa, 0xaa);
pub const WORD_FULL_COLOR: Rgb = Rgb(0x11, 0x11, 0x11);

pub fn word_style(index: usize, total: usize, progress: f64) -> WordStyle {
    let window = RevealWindow::for_token(index, total);
    WordStyle {
        opacity: window.value(progress, WORD_DIM_OPACITY, WORD_FULL_OPACITY),
        color: window.color(progress, WORD_DIM_COLOR, WORD_FULL_COLOR),
    }
}

/// Tagline fade-in and rise, shared by the sub-phrase and the wordmark.
pub fn tagline_style(progress: f64) -> (f64, f64) {
    let opacity = interpolate(progress, (0.55, 0.72), (0.0, 1.0));
    let offset_px = interpolate(progress, (0.55, 0.72), (30.0, 0.0));
    (opacity, offset_px)
}

/// Landscape image opacity and parallax offset in percent of its height.
pub fn parallax_image_style(progress: f64) -> (f64, f64) {
    let opacity = interpolate(progress, (0.65, 0.8), (0.0, 1.0));
    let offset_pct = interpolate(progress, (0.7, 1.0), (0.0, -10.0));
    (opacity, offset_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_region_progress_is_clamped() {
        let region = ScrollRegion::new(1000.0, 4000.0);
        assert!((region.progress_at(0.0) - 0.0).abs() < EPS);
        assert!((region.progress_at(1000.0) - 0.0).abs() < EPS);
        assert!((region.progress_at(2500.0) - 0.5).abs() < EPS);
        assert!((region.progress_at(4000.0) - 1.0).abs() < EPS);
        assert!((region.progress_at(9000.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_region_from_rect_pins_four_viewports() {
        // 800px viewport, 3200px tall section starting 500px below the top of the page
        let at_top = ScrollRegion::from_rect(0.0, 500.0, 3200.0, 800.0);
        let scrolled = ScrollRegion::from_rect(1200.0, -700.0, 3200.0, 800.0);
        assert_eq!(at_top, scrolled);
        assert!((at_top.start - 500.0).abs() < EPS);
        assert!((at_top.end - 2900.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_region() {
        let region = ScrollRegion::new(100.0, 100.0);
        assert_eq!(region.progress_at(99.0), 0.0);
        assert_eq!(region.progress_at(100.0), 1.0);
    }

    #[test]
    fn test_token_window_endpoints() {
        let total = 20;
        for i in 0..total {
            let window = RevealWindow::for_token(i, total);
            let at_start = window.value(i as f64 / total as f64, 0.12, 1.0);
            let at_end = window.value((i + 1) as f64 / total as f64, 0.12, 1.0);
            assert!((at_start - 0.12).abs() < EPS, "token {} at window start", i);
            assert!((at_end - 1.0).abs() < EPS, "token {} at window end", i);
        }
    }

    #[test]
    fn test_token_window_clamps_outside() {
        let window = RevealWindow::for_token(5, 10);
        assert!((window.value(0.0, 0.12, 1.0) - 0.12).abs() < EPS);
        assert!((window.value(0.49, 0.12, 1.0) - 0.12).abs() < EPS);
        assert!((window.value(0.61, 0.12, 1.0) - 1.0).abs() < EPS);
        assert!((window.value(1.0, 0.12, 1.0) - 1.0).abs() < EPS);
        assert!((window.value(0.55, 0.0, 1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_color_endpoints() {
        let window = RevealWindow::for_token(0, 4);
        assert_eq!(window.color(0.0, WORD_DIM_COLOR, WORD_FULL_COLOR), WORD_DIM_COLOR);
        assert_eq!(window.color(0.25, WORD_DIM_COLOR, WORD_FULL_COLOR), WORD_FULL_COLOR);
        assert_eq!(WORD_FULL_COLOR.to_hex(), "#111111");
        assert_eq!(Rgb(0, 0, 0).lerp(Rgb(255, 255, 255), 0.5).to_hex(), "#808080");
    }

    #[test]
    fn test_progress_monotonic_in_scroll() {
        let region = ScrollRegion::new(0.0, 3000.0);
        let mut prev = -1.0;
        for step in 0..=60 {
            let p = region.progress_at(step as f64 * 60.0);
            assert!(p >= prev, "progress went backwards at step {}", step);
            prev = p;
        }
    }

    #[test]
    fn test_reveal_is_reversible() {
        let region = ScrollRegion::new(0.0, 3000.0);
        let styles_at = |scroll: f64| {
            let p = region.progress_at(scroll);
            (0..20).map(|i| word_style(i, 20, p)).collect::<Vec<_>>()
        };
        let before = styles_at(300.0);
        let _forward = styles_at(2700.0);
        let back = styles_at(300.0);
        assert_eq!(before, back);
        assert!((before[19].opacity - WORD_DIM_OPACITY).abs() < EPS);
    }

    #[test]
    fn test_tagline_and_parallax_ranges() {
        assert_eq!(tagline_style(0.0), (0.0, 30.0));
        assert_eq!(tagline_style(0.72), (1.0, 0.0));
        let (opacity, offset) = parallax_image_style(0.7);
        assert!((opacity - 1.0 / 3.0).abs() < 1e-6);
        assert!(offset.abs() < EPS);
        assert_eq!(parallax_image_style(1.0), (1.0, -10.0));
    }
}
