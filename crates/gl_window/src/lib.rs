//! # GL Window
//!
//! OpenGL window and context lifecycle on top of GLFW.
//!
//! ## Features
//!
//! - **Explicit lifecycle**: construct, `init`, use, `close` (or drop)
//! - **Shared video subsystem**: reference-counted across windows
//! - **Display toggles**: vsync and desktop fullscreen at runtime
//! - **File configuration**: window settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     logging::init();
//!
//!     let subsystem = VideoSubsystem::new(GlfwPlatform::new());
//!     let mut window: Window = Window::new(&subsystem, WindowConfig::default());
//!     window.init()?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         window.swap()?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod backend;
pub mod config;
pub mod foundation;
pub mod window;

pub use backend::opengl::{GlLoader, GlfwPlatform};
pub use window::{Window, WindowConfig, WindowError, WindowResult};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        backend::opengl::{GlLoader, GlfwPlatform},
        config::{Config, ConfigError},
        foundation::logging,
        window::{
            DriverInfo, GlVersion, VideoSubsystem, Window, WindowConfig, WindowError, WindowResult,
        },
    };
}
