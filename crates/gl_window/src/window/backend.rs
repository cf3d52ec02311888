//! Windowing library abstraction
//!
//! [`Platform`] is the narrow surface of the windowing library that a
//! [`Window`](super::Window) drives. Errors come back as the library's own
//! error text; the window decides what to log and whether to propagate.

use std::ffi::c_void;

use super::config::GlVersion;

/// Result of a windowing library call, carrying its error text on failure
pub type PlatformResult<T> = Result<T, String>;

/// Context creation attributes set before the native window is created
///
/// Contexts are always requested with the core (non-legacy) profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHints {
    /// Requested OpenGL version
    pub version: GlVersion,
}

impl ContextHints {
    /// Core profile hints for the given version
    pub const fn core(version: GlVersion) -> Self {
        Self { version }
    }
}

/// Presentation swap interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapInterval {
    /// Present immediately (interval 0)
    Immediate,
    /// Wait for one vertical blank (interval 1)
    Synchronized,
}

impl SwapInterval {
    /// Interval matching a vsync flag
    pub const fn from_vsync(vsync: bool) -> Self {
        if vsync {
            Self::Synchronized
        } else {
            Self::Immediate
        }
    }

    /// Number of refreshes to wait before presenting
    pub const fn frames(self) -> u32 {
        match self {
            Self::Immediate => 0,
            Self::Synchronized => 1,
        }
    }
}

/// Display mode of a native window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Regular decorated window
    Windowed,
    /// Fullscreen at the desktop's current resolution
    DesktopFullscreen,
}

/// Operations a window needs from the windowing library
///
/// The video subsystem is process-wide state. Implementations only report and
/// toggle it; sharing between windows is handled by
/// [`VideoSubsystem`](super::VideoSubsystem).
pub trait Platform {
    /// Native window handle
    type Surface;

    /// Graphics context bound to a surface
    type Context;

    /// Window system event delivered by [`poll_events`](Self::poll_events)
    type Event;

    /// Bring up the video subsystem
    fn init_video(&mut self) -> PlatformResult<()>;

    /// Whether the video subsystem is currently up
    fn is_video_active(&self) -> bool;

    /// Shut the video subsystem down
    fn quit_video(&mut self);

    /// Set context attributes for the next window creation
    fn set_context_hints(&mut self, hints: ContextHints);

    /// Create a native window with an OpenGL-capable surface
    fn create_surface(&mut self, title: &str, width: u32, height: u32) -> PlatformResult<Self::Surface>;

    /// Create a graphics context for the surface and make it current
    fn create_context(&mut self, surface: &mut Self::Surface) -> PlatformResult<Self::Context>;

    /// Release the surface's graphics context
    ///
    /// Only detaches the thread's current context if it belongs to `surface`.
    fn destroy_context(&mut self, surface: &mut Self::Surface, context: Self::Context);

    /// Destroy a native window
    fn destroy_surface(&mut self, surface: Self::Surface);

    /// Switch between windowed and fullscreen
    fn set_display_mode(&mut self, surface: &mut Self::Surface, mode: DisplayMode) -> PlatformResult<()>;

    /// Make the surface's context current and set its swap interval
    fn set_swap_interval(&mut self, surface: &mut Self::Surface, interval: SwapInterval) -> PlatformResult<()>;

    /// Present the back buffer
    fn swap_buffers(&mut self, surface: &mut Self::Surface);

    /// Look up a driver entry point through the surface's context
    fn proc_address(&mut self, surface: &mut Self::Surface, name: &str) -> *const c_void;

    /// Pump pending window system events and return the surface's share
    fn poll_events(&mut self, surface: &mut Self::Surface) -> Vec<Self::Event>;

    /// Whether a close has been requested for the surface
    fn should_close(&self, surface: &Self::Surface) -> bool;

    /// Request or cancel closing the surface
    fn set_should_close(&mut self, surface: &mut Self::Surface, should_close: bool);
}
