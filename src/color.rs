#[cfg(feature = "led-matrix")]
use rpi_led_matrix::LedColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Opaque RGBA bytes for the window surface
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

#[cfg(feature = "led-matrix")]
impl From<Rgb> for LedColor {
    fn from(color: Rgb) -> Self {
        LedColor {
            red: color.red,
            green: color.green,
            blue: color.blue,
        }
    }
}

// Colors used by a face render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub eye: Rgb,
    pub lid: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            eye: Rgb::new(0, 136, 255), // Ocean blue
            lid: Rgb::BLACK,
            background: Rgb::BLACK,
        }
    }
}
