// Drawing surfaces
// Window frames, LED panels and in-memory buffers all implement Canvas.

pub mod raster;
pub mod window;
#[cfg(feature = "led-matrix")]
pub mod matrix;

use crate::color::Rgb;

pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Write a pixel that is known to be inside the canvas
    fn put(&mut self, x: u32, y: u32, color: Rgb);

    /// Write a pixel, silently clipping anything off-canvas
    fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.put(x as u32, y as u32, color);
    }

    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.put(x, y, color);
            }
        }
    }
}

/// Canvas over a borrowed RGBA byte frame, as handed out by the pixel surface
pub struct RgbaFrame<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaFrame<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self { frame, width, height }
    }
}

impl Canvas for RgbaFrame<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = ((y * self.width + x) * 4) as usize;
        if let Some(pixel) = self.frame.get_mut(idx..idx + 4) {
            pixel.copy_from_slice(&color.to_rgba());
        }
    }

    fn fill(&mut self, color: Rgb) {
        let rgba = color.to_rgba();
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }
}

/// Owned pixel buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Number of pixels holding exactly `color`
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl Canvas for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = (y * self.width + x) as usize;
        if let Some(pixel) = self.pixels.get_mut(idx) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
