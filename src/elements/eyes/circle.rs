use super::base::{Eye, EyeAnchor};
use crate::color::Rgb;
use crate::config::EyeLayout;
use crate::display::raster::{fill_ellipse, PixelRect};
use crate::display::Canvas;

/// Circle eye inscribed in the normal eye's box
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleEye;

impl CircleEye {
    pub const fn new() -> Self {
        Self
    }
}

impl Eye for CircleEye {
    fn name(&self) -> &str {
        "O Eye"
    }

    fn bounds(&self, anchor: EyeAnchor, layout: &EyeLayout) -> PixelRect {
        let (w, h) = (layout.eye_width, layout.eye_height);
        let d = w.min(h);
        anchor.rect((w - d) / 2, (h - d) / 2, d, d)
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: PixelRect, _layout: &EyeLayout, color: Rgb) {
        fill_ellipse(canvas, rect, color);
    }
}
