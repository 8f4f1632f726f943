use crate::color::Rgb;
use crate::display::raster::{fill_rounded_rect, PixelRect};
use crate::display::Canvas;

/// Blink overlay: two bars sliding in from the top and bottom of an eye
#[derive(Debug, Clone, Copy, Default)]
pub struct Eyelid;

impl Eyelid {
    /// Height of each bar for a given closure
    pub fn bar_height(eye_height: i32, progress: f64) -> i32 {
        (eye_height as f64 * progress.clamp(0.0, 1.0)) as i32
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, eye: PixelRect, progress: f64, radius: i32, color: Rgb) {
        let lid_height = Self::bar_height(eye.height, progress);
        if lid_height <= 0 {
            return;
        }

        let upper = PixelRect::new(eye.x, eye.y, eye.width, lid_height);
        let lower = PixelRect::new(eye.x, eye.bottom() - lid_height, eye.width, lid_height);
        fill_rounded_rect(canvas, upper, radius, color);
        fill_rounded_rect(canvas, lower, radius, color);
    }
}
