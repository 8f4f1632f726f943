// Fullscreen window backend
// One borderless fullscreen window on the primary monitor, drawn through a CPU pixel buffer.

use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, WindowBuilder};

use super::RgbaFrame;
use crate::error::EyesError;
use crate::face::EyesFace;
use crate::pacer::FramePacer;

pub const WINDOW_TITLE: &str = "Lifelike Eye Simulator";

/// Quit on Escape
fn is_quit_key(input: &KeyboardInput) -> bool {
    input.state == ElementState::Pressed && input.virtual_keycode == Some(VirtualKeyCode::Escape)
}

/// Open the fullscreen window and run the animation until the user quits.
/// Only returns early if the display could not be set up.
pub fn run(mut face: EyesFace) -> Result<(), EyesError> {
    let event_loop = EventLoop::new();
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(EyesError::NoMonitor)?;
    let resolution = monitor.size();
    info!(
        width = resolution.width,
        height = resolution.height,
        monitor = %monitor.name().unwrap_or_default(),
        "🖥️  Detected display"
    );

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(resolution)
        .with_fullscreen(Some(Fullscreen::Borderless(Some(monitor))))
        .build(&event_loop)?;
    window.set_cursor_visible(false);

    let mut size: PhysicalSize<u32> = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    let mut pacer = FramePacer::new(Instant::now(), face.frame_rate());
    info!(fps = face.frame_rate(), "🚀 Starting animation loop (Esc to quit)");

    event_loop.run(move |event, _, control_flow| match event {
        Event::NewEvents(StartCause::Init) => {
            window.request_redraw();
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                info!("window closed, exiting");
                control_flow.set_exit();
            }
            WindowEvent::KeyboardInput { input, .. } if is_quit_key(&input) => {
                info!("escape pressed, exiting");
                control_flow.set_exit();
            }
            WindowEvent::Resized(new_size) if new_size.width > 0 && new_size.height > 0 => {
                debug!(width = new_size.width, height = new_size.height, "surface resized");
                let resized = pixels
                    .resize_surface(new_size.width, new_size.height)
                    .and_then(|_| pixels.resize_buffer(new_size.width, new_size.height));
                if let Err(err) = resized {
                    error!("{}", EyesError::from(err));
                    control_flow.set_exit();
                    return;
                }
                size = new_size;
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            if pacer.is_due(Instant::now()) {
                window.request_redraw();
            } else {
                control_flow.set_wait_until(pacer.next_deadline());
            }
        }
        Event::RedrawRequested(_) => {
            let frame = pacer.tick(Instant::now());
            face.update(frame);

            let mut canvas = RgbaFrame::new(pixels.frame_mut(), size.width, size.height);
            face.render(&mut canvas);

            if let Err(err) = pixels.render() {
                error!("{}", EyesError::from(err));
                control_flow.set_exit();
                return;
            }
            control_flow.set_wait_until(pacer.next_deadline());
        }
        _ => {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn key(state: ElementState, keycode: Option<VirtualKeyCode>) -> KeyboardInput {
        KeyboardInput {
            scancode: 0,
            state,
            virtual_keycode: keycode,
            modifiers: Default::default(),
        }
    }

    #[test]
    fn test_escape_press_quits() {
        assert!(is_quit_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Escape))));
    }

    #[test]
    fn test_other_keys_and_releases_ignored() {
        assert!(!is_quit_key(&key(ElementState::Released, Some(VirtualKeyCode::Escape))));
        assert!(!is_quit_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Space))));
        assert!(!is_quit_key(&key(ElementState::Pressed, None)));
    }
}
