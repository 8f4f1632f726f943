use rand::Rng;
use tracing::debug;

use crate::config::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Normal,
    /// Eye shapes are swapped regardless of gaze
    Distortion,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Normal, Mode::Distortion];

    pub(crate) fn index(self) -> usize {
        match self {
            Mode::Normal => 0,
            Mode::Distortion => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeState {
    pub mode: Mode,
    pub started: f64,
    pub duration: f64,    // Only meaningful in distortion
    pub next_check: f64,
}

impl ModeState {
    pub fn new<R: Rng + ?Sized>(now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        Self {
            mode: Mode::Normal,
            started: now,
            duration: 0.0,
            next_check: now + timing.first_mode_check.sample(rng),
        }
    }

    /// Re-roll the mode and schedule the next check
    pub fn randomize<R: Rng + ?Sized>(mut self, now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        self.mode = if rng.gen_bool(0.5) { Mode::Distortion } else { Mode::Normal };
        self.started = now;
        self.duration = match self.mode {
            Mode::Distortion => timing.distortion_duration.sample(rng),
            Mode::Normal => 0.0,
        };
        self.next_check = now + timing.mode_check.sample(rng);
        debug!(mode = ?self.mode, duration = self.duration, next_check = self.next_check, "mode rolled");
        self
    }

    pub fn advance<R: Rng + ?Sized>(mut self, now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        if now > self.next_check {
            self = self.randomize(now, timing, rng);
        }

        if self.mode == Mode::Distortion && now - self.started > self.duration {
            self.mode = Mode::Normal;
            debug!(lasted = now - self.started, "distortion ended");
        }

        self
    }
}
