// Timing and layout tunables
// Every value here is a compile-time default; nothing is read from disk or the command line.

use rand::Rng;

/// Closed interval of seconds that random waits are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondsRange {
    pub min: f64,
    pub max: f64,
}

impl SecondsRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a value uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Durations driving the gaze, blink and mode state machines
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    pub rest: SecondsRange,              // Pause between gaze moves
    pub move_duration: f64,              // Length of one gaze move
    pub blink_interval: SecondsRange,    // Pause between blinks
    pub blink_duration: f64,             // Time for the lid to fully close (and again to open)
    pub distortion_duration: SecondsRange,
    pub mode_check: SecondsRange,        // Gap between mode re-rolls
    pub first_mode_check: SecondsRange,  // Delay before the very first re-roll
    pub frame_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            rest: SecondsRange::new(4.0, 7.0),
            move_duration: 0.6,
            blink_interval: SecondsRange::new(3.0, 6.0),
            blink_duration: 0.1,
            // 3s base plus 0.5..1.5s of jitter
            distortion_duration: SecondsRange::new(3.5, 4.5),
            mode_check: SecondsRange::new(10.0, 15.0),
            first_mode_check: SecondsRange::new(6.0, 12.0),
            frame_rate: 60,
        }
    }
}

/// Horizontal gaze offsets in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeOffsets {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl Default for GazeOffsets {
    fn default() -> Self {
        Self {
            left: -40.0,
            center: 0.0,
            right: 40.0,
        }
    }
}

/// Eye size and placement on screen
#[derive(Debug, Clone, Copy)]
pub struct EyeLayout {
    pub eye_width: i32,
    pub eye_height: i32,
    pub corner_radius: i32,
    pub spacing: i32,      // Distance from screen center to each eye's anchor
    pub enlarge: f64,      // Scale of the enlarged rounded eye
    pub gaze: GazeOffsets,
}

impl Default for EyeLayout {
    fn default() -> Self {
        Self {
            eye_width: 180,
            eye_height: 180,
            corner_radius: 45,
            spacing: 300,
            enlarge: 1.3,
            gaze: GazeOffsets::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = SecondsRange::new(4.0, 7.0);
        for _ in 0..1000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(SecondsRange::new(2.0, 2.0).sample(&mut rng), 2.0);
    }

    #[test]
    fn test_default_distortion_window() {
        let timing = TimingConfig::default();
        assert_eq!(timing.distortion_duration, SecondsRange::new(3.5, 4.5));
        assert_eq!(timing.frame_rate, 60);
    }
}
