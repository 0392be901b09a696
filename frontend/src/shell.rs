use crate::config::SCROLL_THRESHOLD;

// Transient view state for the nav bar. Always reflects the last event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns true when the scrolled flag actually changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

// Which service card the pointer is over, if any
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    active: Option<usize>,
}

impl HoverState {
    pub fn enter(&mut self, idx: usize) {
        self.active = Some(idx);
    }

    pub fn leave(&mut self, idx: usize) {
        // a late leave from the previous card must not wipe the new one
        if self.active == Some(idx) {
            self.active = None;
        }
    }

    pub fn is_active(&self, idx: usize) -> bool {
        self.active == Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.toggle_menu();
        assert!(!nav.menu_open);
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn scroll_flag_follows_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(10.0));
        assert!(!nav.on_scroll(SCROLL_THRESHOLD));
        assert!(nav.on_scroll(SCROLL_THRESHOLD + 1.0));
        assert!(nav.scrolled);
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled);
    }

    #[test]
    fn scrolling_keeps_menu_state() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.on_scroll(300.0);
        assert!(nav.menu_open);
    }

    #[test]
    fn hover_tracks_last_card() {
        let mut hover = HoverState::default();
        hover.enter(1);
        assert!(hover.is_active(1));
        hover.enter(2);
        hover.leave(1);
        assert!(hover.is_active(2));
        hover.leave(2);
        assert!(!hover.is_active(2));
    }
}
