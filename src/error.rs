use thiserror::Error;

/// Fatal display errors. Any of these ends the program.
#[derive(Debug, Error)]
pub enum EyesError {
    #[error("no display detected")]
    NoMonitor,

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),

    #[error("failed to resize pixel surface: {0}")]
    Resize(#[from] pixels::TextureError),

    #[cfg(feature = "led-matrix")]
    #[error("failed to initialize LED matrix: {0}")]
    Matrix(String),
}
