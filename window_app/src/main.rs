//! Minimal OpenGL window demo
//!
//! Opens a window from `window.toml` (or the path given as the first
//! argument), prints the driver strings and clears the screen every frame
//! until the window is closed or Escape is pressed.

use std::path::PathBuf;

use gl_window::prelude::*;
use glfw::{Action, Key, WindowEvent};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "window.toml";

#[derive(Error, Debug)]
enum AppError {
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn load_config() -> Result<WindowConfig, ConfigError> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        log::info!("Loading window configuration from {}", path.display());
        WindowConfig::load_from_file(&path)
    } else {
        log::info!("No configuration at {}, using defaults", path.display());
        Ok(WindowConfig::default())
    }
}

#[allow(unsafe_code)]
fn clear_frame(time: f32) {
    let pulse = time.sin().mul_add(0.25, 0.25);
    // SAFETY: called on the thread that owns the current context, after the
    // window loaded the GL entry points.
    unsafe {
        gl::ClearColor(0.0, pulse, 0.5, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

fn main() -> Result<(), AppError> {
    logging::init();

    let config = load_config()?;
    let subsystem = VideoSubsystem::new(GlfwPlatform::new());
    let mut window: Window = Window::new(&subsystem, config);

    window.init()?;

    if let Some(info) = window.driver_info() {
        println!("{}", info.renderer);
        println!("OpenGL Version: {}", info.version);
        println!("GLSL Version: {}", info.shading_language);
    }

    let start = std::time::Instant::now();
    while !window.should_close() {
        for event in window.poll_events() {
            if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                window.set_should_close(true);
            }
        }
        clear_frame(start.elapsed().as_secs_f32());
        window.swap()?;
    }

    window.close();
    log::info!("Shutdown complete");
    Ok(())
}
