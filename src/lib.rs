//! Animated fullscreen eyes.
//!
//! Two stylized eyes drift through a fixed gaze cycle, blink at random
//! intervals and now and then switch into a "distortion" look where their
//! shapes swap. The timers live in [`animation`], the shapes in
//! [`elements`], and [`face::EyesFace`] ties them together and draws onto any
//! [`display::Canvas`].

pub mod animation;
pub mod color;
pub mod config;
pub mod display;
pub mod elements;
pub mod error;
pub mod face;
pub mod pacer;

pub use error::EyesError;
pub use face::EyesFace;
