/// Autoplay cadence, driven by per-frame time deltas instead of an OS timer.
/// The accumulator only advances while `running`, so a stopped cadence costs
/// nothing and a restarted one always waits a full interval.
pub struct Autoplay {
    interval: f32,
    elapsed: f32,
    running: bool,
}

impl Autoplay {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Begins a fresh countdown. Calling while already running restarts it.
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed = 0.0;
    }

    /// Idempotent: stopping an already-stopped cadence is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    /// Advances the countdown by `dt` seconds. Returns true when the interval
    /// expires; the countdown then continues on the same cadence without
    /// needing a reset.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// The carousel's only mutable state: which slide is current and whether the
/// autoplay cadence is live. Index arithmetic lives here so the wrap-around
/// invariant (`0 <= current < len` whenever `len > 0`) cannot be bypassed.
///
/// With zero slides the controller is disabled: every operation returns `None`
/// and changes nothing.
pub struct CarouselState {
    current: usize,
    len: usize,
    pub autoplay: Autoplay,
}

impl CarouselState {
    pub fn new(len: usize, interval: f32) -> Self {
        let mut autoplay = Autoplay::new(interval);
        if len > 0 {
            autoplay.start();
        }
        Self {
            current: 0,
            len,
            autoplay,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Steps forward or backward one slide with wrap-around and restarts the
    /// autoplay countdown, so manual navigation always earns a full interval
    /// before the next automatic advance. Returns the new current index.
    pub fn change(&mut self, direction: i32) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = self.len as i64;
        let next = (self.current as i64 + direction as i64).rem_euclid(len);
        self.current = next as usize;
        self.autoplay.reset();
        Some(self.current)
    }

    /// Jumps straight to `index` (an indicator click) and restarts the
    /// autoplay countdown. Out-of-range indices are ignored: callers are
    /// expected to supply validated values, this is only a backstop.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        self.autoplay.reset();
        Some(self.current)
    }

    /// Feeds the autoplay cadence. When the interval expires the index
    /// advances by one with wrap-around and the cadence keeps its schedule
    /// (no reset). Returns the new current index on an expiry.
    pub fn tick(&mut self, dt: f32) -> Option<usize> {
        if self.len == 0 || !self.autoplay.tick(dt) {
            return None;
        }
        self.current = (self.current + 1) % self.len;
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: f32 = 6.0;

    #[test]
    fn forward_full_cycle_returns_to_start() {
        for len in 1..=5 {
            let mut state = CarouselState::new(len, INTERVAL);
            for _ in 0..len {
                state.change(1);
            }
            assert_eq!(state.current(), 0, "cycle of length {}", len);
        }
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let mut state = CarouselState::new(4, INTERVAL);
        assert_eq!(state.change(-1), Some(3));
    }

    #[test]
    fn forward_from_last_wraps_to_zero() {
        let mut state = CarouselState::new(3, INTERVAL);
        state.go_to(2);
        assert_eq!(state.change(1), Some(0));
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_navigation() {
        let mut state = CarouselState::new(3, INTERVAL);
        let moves = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, 1];
        for m in moves {
            state.change(m);
            assert!(state.current() < state.len());
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut state = CarouselState::new(3, INTERVAL);
        state.go_to(1);
        assert_eq!(state.go_to(3), None);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn empty_state_is_inert() {
        let mut state = CarouselState::new(0, INTERVAL);
        assert_eq!(state.change(1), None);
        assert_eq!(state.change(-1), None);
        assert_eq!(state.go_to(0), None);
        assert_eq!(state.tick(100.0), None);
        // Autoplay never starts for an empty set.
        assert!(!state.autoplay.tick(100.0));
    }

    #[test]
    fn autoplay_expiry_advances_with_wrap() {
        let mut state = CarouselState::new(2, INTERVAL);
        assert_eq!(state.tick(INTERVAL), Some(1));
        assert_eq!(state.tick(INTERVAL), Some(0));
    }

    #[test]
    fn autoplay_keeps_cadence_without_reset() {
        let mut state = CarouselState::new(3, INTERVAL);
        assert_eq!(state.tick(INTERVAL), Some(1));
        // A second full interval expires on schedule after the first.
        assert_eq!(state.tick(INTERVAL - 0.1), None);
        assert_eq!(state.tick(0.1), Some(2));
    }

    #[test]
    fn manual_change_pushes_back_next_expiry() {
        let mut state = CarouselState::new(3, INTERVAL);
        assert_eq!(state.tick(INTERVAL - 0.5), None);
        // Manual navigation with half a second left on the clock.
        state.change(1);
        // The old remainder must not fire; a full interval is required.
        assert_eq!(state.tick(INTERVAL - 0.1), None);
        assert_eq!(state.tick(0.1), Some(2));
    }

    #[test]
    fn reset_always_restarts_from_zero() {
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.start();
        assert!(!autoplay.tick(5.9));
        autoplay.reset();
        assert!(!autoplay.tick(5.9));
        assert!(autoplay.tick(0.2));
    }

    #[test]
    fn stop_is_idempotent_and_halts_ticking() {
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.stop();
        autoplay.stop();
        assert!(!autoplay.tick(INTERVAL * 3.0));
        autoplay.start();
        autoplay.stop();
        assert!(!autoplay.tick(INTERVAL * 3.0));
    }

    #[test]
    fn stopped_autoplay_does_not_advance_slides() {
        let mut state = CarouselState::new(3, INTERVAL);
        state.autoplay.stop();
        assert_eq!(state.tick(INTERVAL * 2.0), None);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn tick_then_arrow_then_swipe_scenario() {
        // N = 3, start at 0: expiry -> 1, right arrow -> 2, leftward
        // swipe -> wraps to 0.
        let mut state = CarouselState::new(3, INTERVAL);
        assert_eq!(state.tick(INTERVAL), Some(1));
        assert_eq!(state.change(1), Some(2));
        assert_eq!(state.change(1), Some(0));
    }

    #[test]
    fn indicator_jump_restarts_autoplay() {
        let mut state = CarouselState::new(3, INTERVAL);
        assert_eq!(state.tick(INTERVAL - 1.0), None);
        assert_eq!(state.go_to(2), Some(2));
        assert_eq!(state.tick(INTERVAL - 0.1), None);
        assert_eq!(state.tick(0.1), Some(0));
    }
}
