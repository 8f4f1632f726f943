// Frame pacing
// Converts wall-clock instants into animation time and schedules the next frame.

use std::time::{Duration, Instant};

/// Time handed to the state machines each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub now: f64, // Seconds since the animation started
    pub dt: f64,  // Seconds since the previous frame
}

impl FrameTime {
    pub fn new(now: f64, dt: f64) -> Self {
        Self { now, dt: dt.max(0.0) }
    }
}

pub struct FramePacer {
    started: Instant,
    last_frame: Instant,
    frame_interval: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(now: Instant, frame_rate: u32) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);
        Self {
            started: now,
            last_frame: now,
            frame_interval,
            deadline: now,
        }
    }

    /// Start a frame at `now` and schedule the following one
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        self.deadline += self.frame_interval;
        if self.deadline <= now {
            // Fell behind, don't try to catch up with a burst of frames
            self.deadline = now + self.frame_interval;
        }

        FrameTime::new(
            now.saturating_duration_since(self.started).as_secs_f64(),
            dt.as_secs_f64(),
        )
    }

    pub fn next_deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// How long to wait before the next frame is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    #[cfg(test)]
    pub(crate) fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_has_zero_delta() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start, 60);
        let frame = pacer.tick(start);
        assert_eq!(frame.now, 0.0);
        assert_eq!(frame.dt, 0.0);
    }

    #[test]
    fn test_tick_reports_elapsed_and_delta() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start, 60);
        pacer.tick(start + Duration::from_millis(100));
        let frame = pacer.tick(start + Duration::from_millis(150));
        assert!((frame.now - 0.15).abs() < 1e-9);
        assert!((frame.dt - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_deadline_is_one_interval_ahead() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start, 60);
        pacer.tick(start);
        assert_eq!(pacer.next_deadline(), start + pacer.frame_interval());
        assert!(!pacer.is_due(start));
        assert!(pacer.is_due(start + pacer.frame_interval()));
    }

    #[test]
    fn test_late_frame_reschedules_from_now() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start, 60);
        let late = start + Duration::from_secs(1);
        pacer.tick(late);
        assert_eq!(pacer.next_deadline(), late + pacer.frame_interval());
        assert_eq!(pacer.remaining(late + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_negative_delta_is_clamped() {
        assert_eq!(FrameTime::new(1.0, -0.5).dt, 0.0);
    }
}
