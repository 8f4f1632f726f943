// Per-pixel shape fills
// Each pixel is tested at its center against the shape's edge equations.

use super::Canvas;
use crate::color::Rgb;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y as f64 + self.height as f64 / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Fill a rectangle whose corners are rounded with `radius`.
/// The radius is clamped to half the shorter side.
pub fn fill_rounded_rect(canvas: &mut dyn Canvas, rect: PixelRect, radius: i32, color: Rgb) {
    if rect.is_empty() {
        return;
    }

    let radius = radius.clamp(0, rect.width.min(rect.height) / 2) as f64;
    let left = rect.x as f64 + radius;
    let right = rect.right() as f64 - radius;
    let top = rect.y as f64 + radius;
    let bottom = rect.bottom() as f64 - radius;

    for y in rect.y..rect.bottom() {
        let py = y as f64 + 0.5;
        for x in rect.x..rect.right() {
            let px = x as f64 + 0.5;

            // Distance past the inner (unrounded) box, zero along the straight edges
            let dx = (left - px).max(px - right).max(0.0);
            let dy = (top - py).max(py - bottom).max(0.0);

            if dx * dx + dy * dy <= radius * radius {
                canvas.set(x, y, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in `rect` (a circle when the rect is square)
pub fn fill_ellipse(canvas: &mut dyn Canvas, rect: PixelRect, color: Rgb) {
    if rect.is_empty() {
        return;
    }

    let cx = rect.center_x();
    let cy = rect.center_y();
    let rx = rect.width as f64 / 2.0;
    let ry = rect.height as f64 / 2.0;

    for y in rect.y..rect.bottom() {
        let ny = (y as f64 + 0.5 - cy) / ry;
        for x in rect.x..rect.right() {
            let nx = (x as f64 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                canvas.set(x, y, color);
            }
        }
    }
}

/// Downsampling: the cell of a `scale`-sized grid that pixel (x, y) stands in for.
/// Only each block's center pixel maps to a cell, every other pixel yields `None`.
pub fn block_center(x: u32, y: u32, scale: u32) -> Option<(u32, u32)> {
    if scale == 0 || x % scale != scale / 2 || y % scale != scale / 2 {
        return None;
    }
    Some((x / scale, y / scale))
}
