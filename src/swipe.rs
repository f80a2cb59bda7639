use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SwipeDirection {
    /// Pointer moved leftward (start > end): advance to the next slide.
    Left,
    /// Pointer moved rightward: go back to the previous slide.
    Right,
}

impl SwipeDirection {
    pub fn step(self) -> i32 {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
        }
    }
}

/// Classifies a press/release pair as a horizontal swipe. Displacements at or
/// below the threshold are rejected as noise; there is no velocity tracking.
#[derive(Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Returns the swipe direction when the horizontal
    /// displacement exceeds the threshold, `None` otherwise (including a
    /// release with no matching press).
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() > SWIPE_THRESHOLD {
            if diff > 0.0 {
                Some(SwipeDirection::Left)
            } else {
                Some(SwipeDirection::Right)
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
    fn displacement_at_threshold_is_rejected() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.end(250.0), None);
    }

    #[test]
    fn displacement_just_past_threshold_is_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.end(249.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn leftward_drag_advances_forward() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        let dir = tracker.end(200.0).unwrap();
        assert_eq!(dir, SwipeDirection::Left);
        assert_eq!(dir.step(), 1);
    }

    #[test]
    fn rightward_drag_goes_backward() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        let dir = tracker.end(300.0).unwrap();
        assert_eq!(dir, SwipeDirection::Right);
        assert_eq!(dir.step(), -1);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(500.0), None);
    }

    #[test]
    fn gesture_is_consumed_on_release() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(400.0);
        assert!(tracker.end(200.0).is_some());
        // A stray second release must not reuse the old start point.
        assert_eq!(tracker.end(0.0), None);
    }
}
