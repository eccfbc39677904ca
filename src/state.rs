/// A navigation request, produced by whichever input source fired
/// (button, key, swipe, menu item, progress bar).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavAction {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    ToggleMenu,
    CloseMenu,
}

/// Owns the current slide index and the menu overlay flag.
///
/// The index is clamped to `[0, total)` at all times; out-of-range
/// requests are silently ignored rather than reported.
pub struct Navigator {
    current: usize,
    total: usize,
    menu_open: bool,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            menu_open: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current == self.total - 1
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn next(&mut self) {
        if self.current < self.total - 1 {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Dispatch one action. Returns true if the current slide changed,
    /// so the caller knows to re-sync the active flags.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = self.current;
        match action {
            NavAction::Next => self.next(),
            NavAction::Previous => self.previous(),
            NavAction::First => self.go_to(0),
            NavAction::Last => self.go_to(self.total - 1),
            NavAction::GoTo(index) => self.go_to(index),
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::CloseMenu => self.close_menu(),
        }
        self.current != before
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }

    /// Progress fill, 0..=100.
    pub fn progress_percent(&self) -> f32 {
        (self.current + 1) as f32 / self.total as f32 * 100.0
    }
}

/// Map a click at `fraction` (0..1) of the progress bar's width to a
/// slide index: floor(fraction * total), clamped to the last slide.
pub fn slide_at_fraction(fraction: f32, total: usize) -> usize {
    let target = (fraction.max(0.0) * total as f32).floor() as usize;
    target.min(total - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_clamps_at_last_slide() {
        let mut nav = Navigator::new(3);
        nav.go_to(2);
        nav.next();
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn previous_clamps_at_first_slide() {
        let mut nav = Navigator::new(3);
        nav.previous();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut nav = Navigator::new(4);
        nav.go_to(2);
        nav.go_to(7);
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn counter_text_is_one_based() {
        let mut nav = Navigator::new(5);
        nav.go_to(1);
        assert_eq!(nav.counter_text(), "2 / 5");
    }

    #[test]
    fn progress_percent_matches_position() {
        let mut nav = Navigator::new(5);
        nav.go_to(2);
        assert_eq!(nav.progress_percent(), 60.0);
        nav.go_to(4);
        assert_eq!(nav.progress_percent(), 100.0);
    }

    #[test]
    fn apply_reports_index_changes_only() {
        let mut nav = Navigator::new(2);
        assert!(nav.apply(NavAction::Next));
        assert!(!nav.apply(NavAction::Next)); // already at the end
        assert!(!nav.apply(NavAction::ToggleMenu));
        assert!(nav.menu_open());
        assert!(!nav.apply(NavAction::CloseMenu));
        assert!(!nav.menu_open());
    }

    #[test]
    fn home_and_end_actions() {
        let mut nav = Navigator::new(6);
        nav.apply(NavAction::Last);
        assert_eq!(nav.current(), 5);
        nav.apply(NavAction::First);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn progress_click_maps_and_clamps() {
        assert_eq!(slide_at_fraction(0.0, 5), 0);
        assert_eq!(slide_at_fraction(0.45, 5), 2);
        assert_eq!(slide_at_fraction(1.0, 5), 4); // exact right edge clamps
        assert_eq!(slide_at_fraction(-0.2, 5), 0);
    }
}
