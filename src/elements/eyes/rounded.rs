use super::base::{Eye, EyeAnchor};
use crate::color::Rgb;
use crate::config::EyeLayout;
use crate::display::raster::{fill_rounded_rect, PixelRect};
use crate::display::Canvas;

/// Rounded-rectangle eye, either at normal size or enlarged around the same center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedEye {
    enlarged: bool,
}

impl RoundedEye {
    pub const fn normal() -> Self {
        Self { enlarged: false }
    }

    pub const fn enlarged() -> Self {
        Self { enlarged: true }
    }
}

impl Eye for RoundedEye {
    fn name(&self) -> &str {
        if self.enlarged {
            "Enlarged Eye"
        } else {
            "Rounded Eye"
        }
    }

    fn bounds(&self, anchor: EyeAnchor, layout: &EyeLayout) -> PixelRect {
        let (w, h) = (layout.eye_width, layout.eye_height);
        if !self.enlarged {
            return anchor.rect(0, 0, w, h);
        }

        let ew = (w as f64 * layout.enlarge) as i32;
        let eh = (h as f64 * layout.enlarge) as i32;
        anchor.rect(-((ew - w) / 2), -((eh - h) / 2), ew, eh)
    }

    fn draw(&self, canvas: &mut dyn Canvas, rect: PixelRect, layout: &EyeLayout, color: Rgb) {
        fill_rounded_rect(canvas, rect, layout.corner_radius, color);
    }
}
