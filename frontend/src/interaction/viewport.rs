//! Small viewport rules shared by the entrance animations and the navbar.

/// True when an element spanning `[top, bottom]` (viewport coordinates)
/// overlaps the viewport shrunk by `margin` pixels at both edges.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    bottom > margin && top < viewport_height - margin
}

/// One-shot latch behind the entrance animations: reports the first visible
/// observation and ignores everything after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    seen: bool,
}

impl EntranceLatch {
    pub fn new(seen: bool) -> Self {
        Self { seen }
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Returns true only for the observation that flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.seen || !visible {
            return false;
        }
        self.seen = true;
        true
    }
}

/// Entrance delay in seconds for the `index`-th item of a staggered group.
pub fn stagger_delay(index: usize, step: f64, base: f64) -> f64 {
    base + index as f64 * step
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_view_with_margin() {
        // element just below the fold
        assert!(!in_view(820.0, 1200.0, 800.0, 0.0));
        assert!(in_view(780.0, 1200.0, 800.0, 0.0));
        // needs to be 60px in before it counts
        assert!(!in_view(780.0, 1200.0, 800.0, 60.0));
        assert!(in_view(700.0, 1200.0, 800.0, 60.0));
        // scrolled past
        assert!(!in_view(-500.0, -10.0, 800.0, 0.0));
    }

    #[test]
    fn test_entrance_latch_fires_once() {
        let mut latch = EntranceLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_seen());
        assert!(latch.observe(true));
        assert!(latch.is_seen());
        // scrolling back out and in again changes nothing
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_seen());
    }

    #[test]
    fn test_entrance_latch_already_seen() {
        let mut latch = EntranceLatch::new(true);
        assert!(!latch.observe(true));
        assert!(latch.is_seen());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.08, 0.0), 0.0);
        assert!((stagger_delay(3, 0.08, 0.0) - 0.24).abs() < 1e-9);
        assert!((stagger_delay(2, 0.07, 0.25) - 0.39).abs() < 1e-9);
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!is_scrolled(0.0, 60.0));
        assert!(!is_scrolled(60.0, 60.0));
        assert!(is_scrolled(61.0, 60.0));
    }
}
