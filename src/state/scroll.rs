//! Scroll-to-top button visibility.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToTopState {
    threshold: f64,
    visible: bool,
}

impl ScrollToTopState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update from the current vertical offset. Shown strictly above the threshold.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > self.threshold;
        self.visible
    }

    /// CSS `display` value for the button
    pub fn display(&self) -> &'static str {
        if self.is_visible() { "block" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_sequence() {
        let mut state = ScrollToTopState::new(300.0);
        let seen: Vec<bool> = [0.0, 350.0, 250.0].iter().map(|y| state.on_scroll(*y)).collect();
        assert_eq!(seen, vec![false, true, false]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut state = ScrollToTopState::new(300.0);
        assert!(!state.on_scroll(300.0));
        assert_eq!(state.display(), "none");
        assert!(state.on_scroll(300.5));
        assert!(state.is_visible());
        assert_eq!(state.display(), "block");
    }
}
