// LED matrix backend
// Renders the face on a virtual screen and samples it down onto two chained 64x32 panels.

use std::thread;
use std::time::Instant;

use rpi_led_matrix::{LedCanvas, LedMatrix, LedMatrixOptions};
use tracing::info;

use super::raster::block_center;
use super::Canvas;
use crate::color::Rgb;
use crate::error::EyesError;
use crate::face::EyesFace;
use crate::pacer::FramePacer;

// Hardware constants
const PANEL_WIDTH: u32 = 64;
const PANEL_HEIGHT: u32 = 32;
const CHAIN_LENGTH: u32 = 2;

// Each panel pixel covers a SCALE x SCALE block of the virtual screen
const SCALE: u32 = 8;

/// Canvas adapter mapping virtual-screen pixels onto matrix pixels
pub struct MatrixCanvas<'a> {
    canvas: &'a mut LedCanvas,
}

impl<'a> MatrixCanvas<'a> {
    pub fn new(canvas: &'a mut LedCanvas) -> Self {
        Self { canvas }
    }
}

impl Canvas for MatrixCanvas<'_> {
    fn width(&self) -> u32 {
        PANEL_WIDTH * CHAIN_LENGTH * SCALE
    }

    fn height(&self) -> u32 {
        PANEL_HEIGHT * SCALE
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some((cell_x, cell_y)) = block_center(x, y, SCALE) {
            self.canvas.set(cell_x as i32, cell_y as i32, &color.into());
        }
    }

    fn fill(&mut self, color: Rgb) {
        if color == Rgb::BLACK {
            self.canvas.clear();
        } else {
            self.canvas.fill(&color.into());
        }
    }
}

/// Drive the LED panels until the process is interrupted
pub fn run(mut face: EyesFace) -> Result<(), EyesError> {
    let mut options = LedMatrixOptions::new();
    options.set_rows(PANEL_HEIGHT);
    options.set_cols(PANEL_WIDTH);
    options.set_chain_length(CHAIN_LENGTH);
    options.set_hardware_mapping("adafruit-hat");

    let matrix = LedMatrix::new(Some(options), None).map_err(|e| EyesError::Matrix(e.to_string()))?;
    info!(
        panels = CHAIN_LENGTH,
        width = PANEL_WIDTH * CHAIN_LENGTH,
        height = PANEL_HEIGHT,
        "✅ LED matrix initialized"
    );

    let mut pacer = FramePacer::new(Instant::now(), face.frame_rate());
    let mut canvas = matrix.offscreen_canvas();
    info!(fps = face.frame_rate(), "🚀 Starting animation loop (Ctrl+C to stop)");

    loop {
        let frame = pacer.tick(Instant::now());
        face.update(frame);
        face.render(&mut MatrixCanvas::new(&mut canvas));
        canvas = matrix.swap(canvas);

        thread::sleep(pacer.remaining(Instant::now()));
    }
}
