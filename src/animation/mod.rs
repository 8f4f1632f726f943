// Animation state machines
// Each machine is a plain value: it is passed into an update step and the
// updated copy is handed back, so a frame never mutates shared state.

pub mod blink;
pub mod gaze;
pub mod mode;

pub use blink::{BlinkState, LidDirection};
pub use gaze::{interpolate, GazeDirection, GazeState, MOVEMENT_ORDER};
pub use mode::{Mode, ModeState};

use rand::Rng;

use crate::config::{GazeOffsets, TimingConfig};
use crate::pacer::FrameTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub gaze: GazeState,
    pub blink: BlinkState,
    pub mode: ModeState,
}

impl AnimationState {
    pub fn new<R: Rng + ?Sized>(now: f64, timing: &TimingConfig, rng: &mut R) -> Self {
        Self {
            gaze: GazeState::new(now, timing, rng),
            blink: BlinkState::new(now, timing, rng),
            mode: ModeState::new(now, timing, rng),
        }
    }

    /// Advance every timer by one frame
    pub fn advance<R: Rng + ?Sized>(
        self,
        frame: FrameTime,
        timing: &TimingConfig,
        offsets: &GazeOffsets,
        rng: &mut R,
    ) -> Self {
        let mode = self.mode.advance(frame.now, timing, rng);
        let gaze = self.gaze.advance(frame.now, timing, offsets, rng);
        let blink = self.blink.advance(frame.now, frame.dt, timing, rng);
        Self { gaze, blink, mode }
    }
}
