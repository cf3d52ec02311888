//! GLFW-based window management for OpenGL rendering
//!
//! GLFW reports errors through a callback rather than return codes. The
//! callback here logs each error and keeps the latest description so the
//! [`Platform`] methods can hand it back as their failure text.

use std::cell::RefCell;
use std::ffi::c_void;

use glfw::Context as _;

use crate::window::{ContextHints, DisplayMode, Platform, PlatformResult, SwapInterval};

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn record_error(error: glfw::Error, description: String) {
    log::debug!("GLFW error {error:?}: {description}");
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(description));
}

fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

fn last_error_or(fallback: &str) -> String {
    take_last_error().unwrap_or_else(|| fallback.to_string())
}

/// Turn an error raised by the preceding GLFW calls into a failure
fn check_error() -> PlatformResult<()> {
    take_last_error().map_or(Ok(()), Err)
}

/// GLFW implementation of [`Platform`]
///
/// Holding the `glfw::Glfw` handle is what "video subsystem active" means
/// here; GLFW terminates once the last handle (including those kept by open
/// windows) is dropped.
#[derive(Default)]
pub struct GlfwPlatform {
    glfw: Option<glfw::Glfw>,
}

/// Native GLFW window plus its event queue
pub struct GlfwSurface {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    windowed: (i32, i32, u32, u32),
    fullscreen: bool,
}

/// Marker for a GLFW window's OpenGL context
///
/// GLFW owns the context together with the window; this only records that
/// the context was successfully made current.
#[derive(Debug)]
pub struct GlfwContext {
    _private: (),
}

impl GlfwPlatform {
    /// Platform with GLFW not yet initialized
    pub const fn new() -> Self {
        Self { glfw: None }
    }

    fn glfw_mut(&mut self) -> PlatformResult<&mut glfw::Glfw> {
        self.glfw.as_mut().ok_or_else(|| "GLFW is not initialized".to_string())
    }
}

impl Platform for GlfwPlatform {
    type Surface = GlfwSurface;
    type Context = GlfwContext;
    type Event = glfw::WindowEvent;

    fn init_video(&mut self) -> PlatformResult<()> {
        take_last_error();
        let glfw = glfw::init(record_error).map_err(|e| last_error_or(&format!("{e:?}")))?;
        self.glfw = Some(glfw);
        Ok(())
    }

    fn is_video_active(&self) -> bool {
        self.glfw.is_some()
    }

    fn quit_video(&mut self) {
        self.glfw = None;
    }

    fn set_context_hints(&mut self, hints: ContextHints) {
        let Some(glfw) = self.glfw.as_mut() else {
            log::warn!("Context hints ignored, GLFW is not initialized");
            return;
        };

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(hints.version.major, hints.version.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    }

    fn create_surface(&mut self, title: &str, width: u32, height: u32) -> PlatformResult<GlfwSurface> {
        let glfw = self.glfw_mut()?;
        take_last_error();

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| last_error_or("glfwCreateWindow returned no window"))?;

        window.set_close_polling(true);
        window.set_key_polling(true);

        let (x, y) = window.get_pos();
        Ok(GlfwSurface {
            window,
            events,
            windowed: (x, y, width, height),
            fullscreen: false,
        })
    }

    fn create_context(&mut self, surface: &mut GlfwSurface) -> PlatformResult<GlfwContext> {
        take_last_error();
        surface.window.make_current();

        if surface.window.is_current() {
            Ok(GlfwContext { _private: () })
        } else {
            Err(last_error_or("window has no current OpenGL context"))
        }
    }

    fn destroy_context(&mut self, surface: &mut GlfwSurface, _context: GlfwContext) {
        if surface.window.is_current() {
            glfw::make_context_current(None);
        }
    }

    fn destroy_surface(&mut self, surface: GlfwSurface) {
        drop(surface);
    }

    fn set_display_mode(&mut self, surface: &mut GlfwSurface, mode: DisplayMode) -> PlatformResult<()> {
        let glfw = self.glfw_mut()?;
        take_last_error();

        match mode {
            DisplayMode::DesktopFullscreen => {
                if !surface.fullscreen {
                    let (x, y) = surface.window.get_pos();
                    let (width, height) = surface.window.get_size();
                    surface.windowed = (x, y, width.unsigned_abs(), height.unsigned_abs());
                }

                glfw.with_primary_monitor(|_, monitor| -> PlatformResult<()> {
                    let monitor = monitor.ok_or_else(|| "no primary monitor".to_string())?;
                    let video_mode = monitor
                        .get_video_mode()
                        .ok_or_else(|| "primary monitor reports no video mode".to_string())?;
                    surface.window.set_monitor(
                        glfw::WindowMode::FullScreen(monitor),
                        0,
                        0,
                        video_mode.width,
                        video_mode.height,
                        Some(video_mode.refresh_rate),
                    );
                    Ok(())
                })?;
            }
            DisplayMode::Windowed => {
                let (x, y, width, height) = surface.windowed;
                surface
                    .window
                    .set_monitor(glfw::WindowMode::Windowed, x, y, width, height, None);
            }
        }

        check_error()?;
        surface.fullscreen = mode == DisplayMode::DesktopFullscreen;
        Ok(())
    }

    fn set_swap_interval(&mut self, surface: &mut GlfwSurface, interval: SwapInterval) -> PlatformResult<()> {
        let glfw = self.glfw_mut()?;
        take_last_error();

        // glfwSwapInterval applies to whichever context is current.
        surface.window.make_current();

        glfw.set_swap_interval(match interval {
            SwapInterval::Immediate => glfw::SwapInterval::None,
            SwapInterval::Synchronized => glfw::SwapInterval::Sync(1),
        });

        check_error()
    }

    fn swap_buffers(&mut self, surface: &mut GlfwSurface) {
        surface.window.swap_buffers();
    }

    fn proc_address(&mut self, surface: &mut GlfwSurface, name: &str) -> *const c_void {
        surface.window.get_proc_address(name) as *const c_void
    }

    fn poll_events(&mut self, surface: &mut GlfwSurface) -> Vec<glfw::WindowEvent> {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }

        glfw::flush_messages(&surface.events)
            .map(|(_, event)| event)
            .inspect(|event| {
                if matches!(event, glfw::WindowEvent::Close) {
                    log::debug!("Window close requested");
                }
            })
            .collect()
    }

    fn should_close(&self, surface: &GlfwSurface) -> bool {
        surface.window.should_close()
    }

    fn set_should_close(&mut self, surface: &mut GlfwSurface, should_close: bool) {
        surface.window.set_should_close(should_close);
    }
}
