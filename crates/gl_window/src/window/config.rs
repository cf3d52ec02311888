//! Window creation settings

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Requested OpenGL context version
///
/// The driver is free to hand back a newer compatible version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlVersion {
    /// Major version number
    pub major: u32,
    /// Minor version number
    pub minor: u32,
}

impl GlVersion {
    /// Create a version pair
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for GlVersion {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

impl std::fmt::Display for GlVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Window configuration
///
/// Missing fields fall back to their defaults when loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// VSync setting
    pub vsync: bool,

    /// Whether to start in fullscreen
    pub fullscreen: bool,

    /// Requested OpenGL version (core profile)
    pub gl_version: GlVersion,
}

impl WindowConfig {
    /// Windowed configuration with the given title and size
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Request a specific OpenGL version
    pub fn with_gl_version(mut self, major: u32, minor: u32) -> Self {
        self.gl_version = GlVersion::new(major, minor);
        self
    }

    /// Enable or disable vsync once the window is up
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Enable or disable fullscreen once the window is up
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GL Window".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            fullscreen: false,
            gl_version: GlVersion::default(),
        }
    }
}

impl Config for WindowConfig {}
