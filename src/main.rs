use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lifelike_eyes::{display, EyesFace};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> anyhow::Result<()> {
    init_logging();

    let face = EyesFace::new();

    #[cfg(not(feature = "led-matrix"))]
    display::window::run(face).context("failed to start fullscreen display")?;

    #[cfg(feature = "led-matrix")]
    display::matrix::run(face).context("failed to start LED matrix display")?;

    Ok(())
}
