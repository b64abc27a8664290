use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// One completed horizontal drag, measured in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub start_x: f32,
    pub end_x: f32,
}

impl Swipe {
    pub fn new(start_x: f32, end_x: f32) -> Self {
        Self { start_x, end_x }
    }

    /// Swiping left advances, swiping right goes back. Travel must exceed the
    /// threshold strictly.
    pub fn direction(&self) -> Option<SwipeDirection> {
        if self.start_x - self.end_x > SWIPE_THRESHOLD {
            Some(SwipeDirection::Next)
        } else if self.end_x - self.start_x > SWIPE_THRESHOLD {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }
}

/// Pairs a touch start with the matching touch end.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f32) -> Option<Swipe> {
        self.start_x.take().map(|start_x| Swipe::new(start_x, x))
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(Swipe::new(100.0, 50.0).direction(), None);
        assert_eq!(Swipe::new(100.0, 49.0).direction(), Some(SwipeDirection::Next));
        assert_eq!(Swipe::new(50.0, 100.0).direction(), None);
        assert_eq!(Swipe::new(50.0, 101.0).direction(), Some(SwipeDirection::Prev));
    }

    #[test]
    fn test_small_drag_is_ignored() {
        assert_eq!(Swipe::new(200.0, 190.0).direction(), None);
        assert_eq!(Swipe::new(200.0, 200.0).direction(), None);
    }

    #[test]
    fn test_tracker_pairs_start_and_end() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_end(10.0), None);

        tracker.touch_start(300.0);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.touch_end(120.0), Some(Swipe::new(300.0, 120.0)));
        assert!(!tracker.is_tracking());
    }
}
