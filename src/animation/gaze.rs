use rand::Rng;
use tracing::debug;

use crate::config::{GazeOffsets, TimingConfig};

/// Where the eyes are looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GazeDirection {
    Center,
    Left,
    Right,
}

impl GazeDirection {
    pub const ALL: [GazeDirection; 3] = [GazeDirection::Center, GazeDirection::Left, GazeDirection::Right];

    pub fn offset(self, offsets: &GazeOffsets) -> f64 {
        match self {
            GazeDirection::Center => offsets.center,
            GazeDirection::Left => offsets.left,
            GazeDirection::Right => offsets.right,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            GazeDirection::Center => 0,
            GazeDirection::Left => 1,
            GazeDirection::Right => 2,
        }
    }
}

/// Fixed order the gaze walks through, wrapping back to the start
pub const MOVEMENT_ORDER: [GazeDirection; 5] = [
    GazeDirection::Center,
    GazeDirection::Left,
    GazeDirection::Center,
    GazeDirection::Right,
    GazeDirection::Center,
];

/// Linear blend from `start` to `target` at fraction `t`.
/// `t` is clamped to [0, 1] and the result never leaves the start..target span.
pub fn interpolate(start: f64, target: f64, t: f64) -> f64 {
    if t >= 1.0 {
        return target;
    }
    if t <= 0.0 {
        return start;
    }
    let value = start + (target - start) * t;
    value.clamp(start.min(target), start.max(target))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeState {
    pub index: usize,       // Position in MOVEMENT_ORDER of the current target
    pub offset: f64,
    pub start_offset: f64,
    pub move_start: f64,
    pub moving: bool,
    pub last_change: f64,   // When the previous move finished
    pub rest: f64,          // How long to stay put before the next move
}

impl GazeState {
    pub fn new<R: Rng + ?Sized>(now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        Self {
            index: 0,
            offset: 0.0,
            start_offset: 0.0,
            move_start: now,
            moving: false,
            last_change: now,
            rest: timing.rest.sample(rng),
        }
    }

    /// Direction of the current (or last finished) move
    pub fn direction(&self) -> GazeDirection {
        MOVEMENT_ORDER[self.index % MOVEMENT_ORDER.len()]
    }

    pub fn target(&self, offsets: &GazeOffsets) -> f64 {
        self.direction().offset(offsets)
    }

    pub fn advance<R: Rng + ?Sized>(
        mut self,
        now: f64,
        timing: &TimingConfig,
        offsets: &GazeOffsets,
        rng: &mut R,
    ) -> Self {
        if !self.moving && now - self.last_change >= self.rest {
            self.index = (self.index + 1) % MOVEMENT_ORDER.len();
            self.start_offset = self.offset;
            self.move_start = now;
            self.moving = true;
            debug!(direction = ?self.direction(), from = self.offset, "gaze move started");
        }

        if self.moving {
            let target = self.target(offsets);
            let t = if timing.move_duration > 0.0 {
                (now - self.move_start) / timing.move_duration
            } else {
                1.0
            };

            if t >= 1.0 {
                self.offset = target;
                self.moving = false;
                self.last_change = now;
                self.rest = timing.rest.sample(rng);
                debug!(direction = ?self.direction(), rest = self.rest, "gaze move finished");
            } else {
                self.offset = interpolate(self.start_offset, target, t);
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_until_moves(seed: u64, moves: usize) -> Vec<GazeDirection> {
        let timing = TimingConfig::default();
        let offsets = GazeOffsets::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut gaze = GazeState::new(0.0, &timing, &mut rng);
        let mut seen = Vec::new();
        let mut now = 0.0;

        while seen.len() < moves {
            now += 1.0 / 60.0;
            let was_moving = gaze.moving;
            gaze = gaze.advance(now, &timing, &offsets, &mut rng);
            if was_moving && !gaze.moving {
                seen.push(gaze.direction());
            }
        }
        seen
    }

    #[test]
    fn test_sequence_cycles_in_fixed_order() {
        use GazeDirection::*;
        let expected = [Left, Center, Right, Center, Center, Left, Center, Right, Center, Center];
        for seed in [1, 42, 9001] {
            assert_eq!(run_until_moves(seed, expected.len()), expected);
        }
    }

    #[test]
    fn test_rests_before_first_move() {
        let timing = TimingConfig::default();
        let offsets = GazeOffsets::default();
        let mut rng = StdRng::seed_from_u64(3);
        let gaze = GazeState::new(0.0, &timing, &mut rng);
        let rest = gaze.rest;

        let gaze = gaze.advance(rest - 0.01, &timing, &offsets, &mut rng);
        assert!(!gaze.moving);
        assert_eq!(gaze.offset, 0.0);
        assert_eq!(gaze.direction(), GazeDirection::Center);
    }

    #[test]
    fn test_move_interpolates_then_snaps() {
        let timing = TimingConfig::default();
        let offsets = GazeOffsets::default();
        let mut rng = StdRng::seed_from_u64(5);
        let gaze = GazeState::new(0.0, &timing, &mut rng);
        let start = gaze.rest;

        let gaze = gaze.advance(start, &timing, &offsets, &mut rng);
        assert!(gaze.moving);
        assert_eq!(gaze.offset, 0.0);
        assert_eq!(gaze.direction(), GazeDirection::Left);

        let gaze = gaze.advance(start + 0.3, &timing, &offsets, &mut rng);
        assert!(gaze.moving);
        assert!((gaze.offset - -20.0).abs() < 1e-9);

        let gaze = gaze.advance(start + 0.7, &timing, &offsets, &mut rng);
        assert!(!gaze.moving);
        assert_eq!(gaze.offset, -40.0);
        assert!(timing.rest.contains(gaze.rest));
        assert_eq!(gaze.last_change, start + 0.7);
    }

    #[test]
    fn test_wrap_to_first_center_still_takes_full_move() {
        let timing = TimingConfig::default();
        let offsets = GazeOffsets::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut gaze = GazeState::new(0.0, &timing, &mut rng);
        gaze.index = MOVEMENT_ORDER.len() - 1;
        gaze.offset = 0.0;
        let start = gaze.rest;

        let gaze = gaze.advance(start, &timing, &offsets, &mut rng);
        assert!(gaze.moving);
        assert_eq!(gaze.index, 0);
        assert_eq!(gaze.direction(), GazeDirection::Center);

        let mid = gaze.advance(start + 0.3, &timing, &offsets, &mut rng);
        assert!(mid.moving);
        assert_eq!(mid.offset, 0.0);

        let almost = gaze.advance(start + 0.59, &timing, &offsets, &mut rng);
        assert!(almost.moving);

        let done = gaze.advance(start + timing.move_duration + 1e-9, &timing, &offsets, &mut rng);
        assert!(!done.moving);
        assert_eq!(done.index, 0);
        assert_eq!(done.offset, 0.0);
    }

    #[test]
    fn test_offset_unchanged_while_resting() {
        let timing = TimingConfig::default();
        let offsets = GazeOffsets::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut gaze = GazeState::new(0.0, &timing, &mut rng);
        gaze.offset = -40.0;
        gaze.index = 1;

        let later = gaze.advance(gaze.rest / 2.0, &timing, &offsets, &mut rng);
        assert_eq!(later.offset, -40.0);
        assert_eq!(later.index, 1);
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(-40.0, 40.0, 0.0), -40.0);
        assert_eq!(interpolate(-40.0, 40.0, 1.0), 40.0);
        assert_eq!(interpolate(-40.0, 40.0, 0.5), 0.0);
        assert_eq!(interpolate(0.0, 40.0, 3.0), 40.0);
    }

    proptest! {
        #[test]
        fn prop_interpolate_never_overshoots(
            start in -500.0f64..500.0,
            target in -500.0f64..500.0,
            t in -1.0f64..2.0,
        ) {
            let value = interpolate(start, target, t);
            prop_assert!(value >= start.min(target));
            prop_assert!(value <= start.max(target));
            if t >= 1.0 {
                prop_assert_eq!(value, target);
            }
        }
    }
}
