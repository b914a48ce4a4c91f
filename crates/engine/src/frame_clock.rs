//! Frame pacing for the loop driver.
//!
//! Decides whether a redraw is due or how long the driver may wait for input
//! before the next one is.

use std::time::Duration;

use crate::types::MAX_FPS;

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_frame: Option<Duration>,
}

impl FrameClock {
    /// Pace frames at `fps` per second, clamped to `1..=MAX_FPS`.
    pub fn new(fps: u32) -> Self {
        let fps = u64::from(fps.clamp(1, MAX_FPS));
        Self {
            interval: Duration::from_nanos((1_000_000_000 / fps).max(1)),
            last_frame: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// A frame is due when none was drawn yet or a full interval has passed.
    pub fn is_due(&self, now: Duration) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Duration) {
        self.last_frame = Some(now);
    }

    /// How long input polling may block before the next frame is due.
    pub fn poll_timeout(&self, now: Duration) -> Duration {
        match self.last_frame {
            None => Duration::ZERO,
            Some(last) => self.interval.saturating_sub(now.saturating_sub(last)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let clock = FrameClock::new(10);
        assert!(clock.is_due(Duration::ZERO));
        assert_eq!(clock.poll_timeout(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn next_frame_waits_one_interval() {
        let mut clock = FrameClock::new(10);
        clock.mark(ms(1000));
        assert!(!clock.is_due(ms(1099)));
        assert_eq!(clock.poll_timeout(ms(1040)), ms(60));
        assert!(clock.is_due(ms(1100)));
        assert_eq!(clock.poll_timeout(ms(1300)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_clamped() {
        assert_eq!(FrameClock::new(0).interval(), Duration::from_secs(1));
        assert_eq!(FrameClock::new(60).interval(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn huge_fps_still_leaves_time_to_poll() {
        let mut clock = FrameClock::new(u32::MAX);
        assert_eq!(clock.interval(), Duration::from_millis(1));
        clock.mark(ms(5));
        assert!(!clock.is_due(ms(5)));
        assert_eq!(clock.poll_timeout(ms(5)), ms(1));
    }
}
