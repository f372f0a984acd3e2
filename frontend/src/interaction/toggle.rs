//! Independent expand/collapse state for a list of cards.

/// Whether a click handler lets the event continue to outer handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Innermost element a click landed on inside an expandable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Card,
    ExpandControl,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandableSet {
    open: Vec<bool>,
}

impl ExpandableSet {
    pub fn new(len: usize) -> Self {
        Self { open: vec![false; len] }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one card. Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.open.get_mut(index) {
            *open = !*open;
        }
    }

    /// Nested control handler: toggles and swallows the click.
    pub fn on_control_click(&mut self, index: usize) -> Propagation {
        self.toggle(index);
        Propagation::Stop
    }

    /// Card-level handler.
    pub fn on_card_click(&mut self, index: usize) -> Propagation {
        self.toggle(index);
        Propagation::Continue
    }

    /// Run the handlers a click passes through, innermost first.
    pub fn dispatch_click(&mut self, index: usize, origin: ClickOrigin) {
        if origin == ClickOrigin::ExpandControl
            && self.on_control_click(index) == Propagation::Stop
        {
            return;
        }
        self.on_card_click(index);
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_independent() {
        let mut cards = ExpandableSet::new(6);
        cards.dispatch_click(2, ClickOrigin::Card);
        assert!(cards.is_open(2));
        for i in [0, 1, 3, 4, 5] {
            assert!(!cards.is_open(i), "card {} changed", i);
        }
    }

    #[test]
    fn test_multiple_cards_open_at_once() {
        let mut cards = ExpandableSet::new(6);
        cards.toggle(0);
        cards.toggle(4);
        assert_eq!(cards.open_count(), 2);
        cards.toggle(0);
        assert!(!cards.is_open(0));
        assert!(cards.is_open(4));
    }

    #[test]
    fn test_control_click_toggles_once() {
        let mut cards = ExpandableSet::new(6);
        cards.dispatch_click(3, ClickOrigin::ExpandControl);
        assert!(cards.is_open(3));
        cards.dispatch_click(3, ClickOrigin::ExpandControl);
        assert!(!cards.is_open(3));
    }

    #[test]
    fn test_control_stops_propagation() {
        let mut cards = ExpandableSet::new(1);
        assert_eq!(cards.on_control_click(0), Propagation::Stop);
        assert_eq!(cards.on_card_click(0), Propagation::Continue);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut cards = ExpandableSet::new(2);
        cards.toggle(9);
        assert!(!cards.is_open(9));
        assert_eq!(cards, ExpandableSet::new(2));
    }
}
