// Face management module
// Owns the animation state and turns it into draw calls each frame.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::animation::{AnimationState, GazeDirection, Mode};
use crate::color::Palette;
use crate::config::{EyeLayout, TimingConfig};
use crate::display::raster::PixelRect;
use crate::display::Canvas;
use crate::elements::{shape_for, EyeAnchor, EyeShape, EyeSide, Eyelid};
use crate::pacer::FrameTime;

/// Where and how one eye is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePlacement {
    pub side: EyeSide,
    pub shape: EyeShape,
    pub rect: PixelRect,
}

pub struct EyesFace {
    state: AnimationState,
    timing: TimingConfig,
    layout: EyeLayout,
    palette: Palette,
    rng: StdRng,
}

impl EyesFace {
    /// Face with default tunables and an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_config(
            TimingConfig::default(),
            EyeLayout::default(),
            Palette::default(),
            StdRng::from_entropy(),
        )
    }

    pub fn with_config(timing: TimingConfig, layout: EyeLayout, palette: Palette, mut rng: StdRng) -> Self {
        let state = AnimationState::new(0.0, &timing, &mut rng);
        Self {
            state,
            timing,
            layout,
            palette,
            rng,
        }
    }

    /// Deterministic face for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(
            TimingConfig::default(),
            EyeLayout::default(),
            Palette::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: AnimationState) {
        self.state = state;
    }

    pub fn frame_rate(&self) -> u32 {
        self.timing.frame_rate
    }

    pub fn update(&mut self, frame: FrameTime) {
        let before = self.shapes();
        self.state = self.state.advance(frame, &self.timing, &self.layout.gaze, &mut self.rng);

        let [left, right] = self.shapes();
        if before != [left, right] {
            debug!(left = left.element().name(), right = right.element().name(), "eye shapes changed");
        }
    }

    /// Shape of the left and right eye for the current mode and gaze
    pub fn shapes(&self) -> [EyeShape; 2] {
        let (mode, gaze) = (self.mode(), self.gaze_direction());
        EyeSide::BOTH.map(|side| shape_for(mode, gaze, side))
    }

    pub fn mode(&self) -> Mode {
        self.state.mode.mode
    }

    pub fn gaze_direction(&self) -> GazeDirection {
        self.state.gaze.direction()
    }

    /// Shape and screen rect of both eyes for the current state
    pub fn placements(&self, screen_width: u32, screen_height: u32) -> [EyePlacement; 2] {
        let layout = &self.layout;
        let shapes = self.shapes();
        let half_width = (screen_width / 2) as i32;
        let eye_y = (screen_height / 2) as i32 - layout.eye_height / 2;

        EyeSide::BOTH.map(|side| {
            let eye_x = (half_width + side.sign() * layout.spacing - layout.eye_width / 2) as f64
                + self.state.gaze.offset;
            let shape = shapes[side.index()];
            let rect = shape.element().bounds(EyeAnchor::new(eye_x, eye_y as f64), layout);
            EyePlacement { side, shape, rect }
        })
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill(self.palette.background);

        let blink = &self.state.blink;
        for placement in self.placements(canvas.width(), canvas.height()) {
            placement
                .shape
                .element()
                .draw(canvas, placement.rect, &self.layout, self.palette.eye);

            if blink.blinking {
                Eyelid.draw(
                    canvas,
                    placement.rect,
                    blink.progress,
                    self.layout.corner_radius,
                    self.palette.lid,
                );
            }
        }
    }
}

impl Default for EyesFace {
    fn default() -> Self {
        Self::new()
    }
}
