use crate::color::Rgb;
use crate::config::EyeLayout;
use crate::display::raster::PixelRect;
use crate::display::Canvas;

/// Base trait for all eye shapes
/// Every shape is placed relative to where a normal-sized eye would sit
pub trait Eye: Send + Sync {
    /// Get the name of this eye shape
    fn name(&self) -> &str;

    /// Screen rectangle of this shape for a normal eye anchored at `anchor`
    fn bounds(&self, anchor: EyeAnchor, layout: &EyeLayout) -> PixelRect;

    /// Draw the eye into `rect`
    fn draw(&self, canvas: &mut dyn Canvas, rect: PixelRect, layout: &EyeLayout, color: Rgb);
}

/// Top-left corner of a normal-sized eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeAnchor {
    pub x: f64,
    pub y: f64,
}

impl EyeAnchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pixel rect at this anchor, shifted by `(dx, dy)`
    pub(crate) fn rect(&self, dx: i32, dy: i32, width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            (self.x + dx as f64).floor() as i32,
            (self.y + dy as f64).floor() as i32,
            width,
            height,
        )
    }
}

/// Which eye on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeSide {
    Left,
    Right,
}

impl EyeSide {
    pub const BOTH: [EyeSide; 2] = [EyeSide::Left, EyeSide::Right];

    /// Direction from screen center to this eye
    pub fn sign(self) -> i32 {
        match self {
            EyeSide::Left => -1,
            EyeSide::Right => 1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            EyeSide::Left => 0,
            EyeSide::Right => 1,
        }
    }
}
