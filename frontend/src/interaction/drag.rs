//! Drag-to-scroll for horizontal card tracks.
//!
//! The controller only produces offsets; the element it is attached to
//! clamps them to its own scrollable range when they are written back.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_x: f64,
    pub origin_scroll_offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragScroll {
    gain: f64,
    session: Option<DragSession>,
}

impl DragScroll {
    pub fn new(gain: f64) -> Self {
        Self { gain, session: None }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Start a session, replacing any stale one left behind by a lost pointer-up.
    pub fn pointer_down(&mut self, x: f64, track_scroll_offset: f64) {
        self.session = Some(DragSession {
            origin_x: x,
            origin_scroll_offset: track_scroll_offset,
        });
    }

    /// New track offset for pointer position `x`, or `None` outside a session.
    pub fn pointer_move(&self, x: f64) -> Option<f64> {
        self.session.map(|session| {
            let delta = (x - session.origin_x) * self.gain;
            session.origin_scroll_offset - delta
        })
    }

    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    pub fn pointer_leave(&mut self) {
        self.session = None;
    }
}

/// Offset after a smooth arrow-button step of `step` pixels in `direction`.
pub fn step_offset(current: f64, direction: i8, step: f64) -> f64 {
    current + f64::from(direction.signum()) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_applies_gain() {
        let mut drag = DragScroll::new(1.3);
        drag.pointer_down(100.0, 50.0);
        let offset = drag.pointer_move(150.0).unwrap();
        assert!((offset - -15.0).abs() < 1e-9);
        // host clamps negative offsets to the start of the track
        assert_eq!(offset.max(0.0), 0.0);
    }

    #[test]
    fn test_drag_left_scrolls_forward() {
        let mut drag = DragScroll::new(1.5);
        drag.pointer_down(400.0, 200.0);
        let offset = drag.pointer_move(300.0).unwrap();
        assert!((offset - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_is_relative_to_origin() {
        let mut drag = DragScroll::new(1.5);
        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(-10.0);
        drag.pointer_move(-20.0);
        assert!((drag.pointer_move(-40.0).unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_up_without_session_is_noop() {
        let mut drag = DragScroll::new(1.3);
        let before = drag.clone();
        drag.pointer_up();
        drag.pointer_leave();
        assert_eq!(drag, before);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_move_without_session_leaves_track_alone() {
        let drag = DragScroll::new(1.3);
        assert_eq!(drag.pointer_move(500.0), None);
    }

    #[test]
    fn test_session_ends_on_up_and_leave() {
        let mut drag = DragScroll::new(1.3);
        drag.pointer_down(10.0, 0.0);
        assert!(drag.is_active());
        drag.pointer_up();
        assert_eq!(drag.pointer_move(20.0), None);

        drag.pointer_down(10.0, 0.0);
        drag.pointer_leave();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_second_down_replaces_session() {
        let mut drag = DragScroll::new(2.0);
        drag.pointer_down(0.0, 0.0);
        drag.pointer_down(100.0, 30.0);
        assert_eq!(
            drag.session(),
            Some(DragSession { origin_x: 100.0, origin_scroll_offset: 30.0 })
        );
    }

    #[test]
    fn test_step_offset() {
        assert_eq!(step_offset(100.0, 1, 420.0), 520.0);
        assert_eq!(step_offset(100.0, -1, 420.0), -320.0);
    }
}
