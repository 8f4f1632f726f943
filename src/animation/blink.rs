use rand::Rng;
use tracing::debug;

use crate::config::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidDirection {
    Closing,
    Opening,
}

impl LidDirection {
    pub fn sign(self) -> f64 {
        match self {
            LidDirection::Closing => 1.0,
            LidDirection::Opening => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkState {
    pub blinking: bool,
    pub progress: f64,        // 0.0 open .. 1.0 fully closed
    pub direction: LidDirection,
    pub last_blink: f64,      // When the previous blink ended
    pub interval: f64,
}

impl BlinkState {
    pub fn new<R: Rng + ?Sized>(now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        Self {
            blinking: false,
            progress: 0.0,
            direction: LidDirection::Closing,
            last_blink: now,
            interval: timing.blink_interval.sample(rng),
        }
    }

    /// Start closing the lids right away
    pub fn begin(mut self) -> Self {
        self.blinking = true;
        self.progress = 0.0;
        self.direction = LidDirection::Closing;
        self
    }

    pub fn advance<R: Rng + ?Sized>(
        mut self,
        now: f64,
        dt: f64,
        timing: &TimingConfig,
        rng: &mut R,
    ) -> Self {
        if !self.blinking && now - self.last_blink > self.interval {
            debug!(interval = self.interval, "blink started");
            self = self.begin();
        }

        if !self.blinking {
            return self;
        }

        let step = if timing.blink_duration > 0.0 {
            dt.max(0.0) / timing.blink_duration
        } else {
            1.0
        };
        self.progress += self.direction.sign() * step;

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.direction = LidDirection::Opening;
        } else if self.progress <= 0.0 {
            self.progress = 0.0;
            self.blinking = false;
            self.last_blink = now;
            self.interval = timing.blink_interval.sample(rng);
            debug!(next_interval = self.interval, "blink finished");
        }

        self
    }
}
