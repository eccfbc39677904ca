use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Swipe {
    Forward,  // dragged leftwards: advance
    Backward, // dragged rightwards: go back
}

/// Tracks one pointer press/release pair and decides whether it was a
/// horizontal swipe. The horizontal delta must dominate the vertical
/// one and exceed the threshold; anything smaller is left for the
/// click hit-testing to consume.
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { start: None }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub fn finish(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let (start_x, start_y) = self.start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;
        if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
            if dx > 0.0 {
                Some(Swipe::Forward)
            } else {
                Some(Swipe::Backward)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_drag_past_threshold_is_a_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.finish(120.0, 110.0), Some(Swipe::Forward));

        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.finish(280.0, 110.0), Some(Swipe::Backward));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.finish(170.0, 100.0), None);
    }

    #[test]
    fn vertical_drag_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.finish(120.0, 300.0), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(0.0, 0.0), None);
    }

    #[test]
    fn press_point_is_consumed_by_release() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0, 100.0);
        tracker.finish(100.0, 100.0);
        // A second release must not reuse the old start point
        assert_eq!(tracker.finish(0.0, 0.0), None);
    }
}
