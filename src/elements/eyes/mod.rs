// Eye base trait and placement types
pub mod base;

// Individual eye shapes
mod circle;
mod rounded;

pub use base::{Eye, EyeAnchor, EyeSide};
pub use circle::CircleEye;
pub use rounded::RoundedEye;

use crate::animation::{GazeDirection, Mode};

static ROUNDED: RoundedEye = RoundedEye::normal();
static ENLARGED: RoundedEye = RoundedEye::enlarged();
static CIRCLE: CircleEye = CircleEye::new();

/// Shape drawn for one eye
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeShape {
    Rounded,
    Enlarged,
    Circle,
}

impl EyeShape {
    pub fn element(self) -> &'static dyn Eye {
        match self {
            EyeShape::Rounded => &ROUNDED,
            EyeShape::Enlarged => &ENLARGED,
            EyeShape::Circle => &CIRCLE,
        }
    }
}

use EyeShape::{Circle, Enlarged, Rounded};

// [mode][gaze][side], indexed by Mode::index, GazeDirection::index and EyeSide::index
//                             left      right
const SHAPE_TABLE: [[[EyeShape; 2]; 3]; 2] = [
    // Normal
    [
        [Rounded, Rounded],   // center
        [Circle, Enlarged],   // left
        [Enlarged, Circle],   // right
    ],
    // Distortion ignores gaze
    [
        [Enlarged, Circle],
        [Enlarged, Circle],
        [Enlarged, Circle],
    ],
];

pub fn shape_for(mode: Mode, gaze: GazeDirection, side: EyeSide) -> EyeShape {
    SHAPE_TABLE[mode.index()][gaze.index()][side.index()]
}
