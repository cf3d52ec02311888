//! OpenGL window lifecycle
//!
//! A [`Window`] owns one native window and the OpenGL context bound to it.
//! Construction only stores the [`WindowConfig`]; [`Window::init`] acquires
//! the video subsystem, creates the window and context and loads the driver's
//! function pointers. [`Window::close`] releases everything and is also run
//! on drop.
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! let subsystem = VideoSubsystem::new(GlfwPlatform::new());
//! let config = WindowConfig::new("Test", 800, 600).with_gl_version(3, 3);
//! let mut window: Window = Window::new(&subsystem, config);
//!
//! window.init()?;
//! while !window.should_close() {
//!     window.poll_events();
//!     window.swap()?;
//! }
//! # Ok::<(), WindowError>(())
//! ```
//!
//! A failed `init` may leave a native window behind (for example when the
//! context could not be created). It stays allocated until `close` or drop.

mod backend;
mod config;
mod error;
mod loader;
mod subsystem;

#[cfg(test)]
mod testing;

pub use backend::{ContextHints, DisplayMode, Platform, PlatformResult, SwapInterval};
pub use config::{GlVersion, WindowConfig};
pub use error::{WindowError, WindowResult};
pub use loader::{DriverInfo, FunctionLoader};
pub use subsystem::{VideoLease, VideoSubsystem};

use crate::backend::opengl::{GlLoader, GlfwPlatform};

/// An OpenGL window and its context
///
/// Generic over the windowing library and the function loader so the
/// lifecycle can run against something other than GLFW and `gl`.
pub struct Window<P: Platform = GlfwPlatform, L: FunctionLoader = GlLoader> {
    config: WindowConfig,
    subsystem: VideoSubsystem<P>,
    lease: Option<VideoLease<P>>,
    surface: Option<P::Surface>,
    context: Option<P::Context>,
    loader: L,
    driver_info: Option<DriverInfo>,
    initialized: bool,
    vsync: bool,
    fullscreen: bool,
}

impl<P: Platform, L: FunctionLoader + Default> Window<P, L> {
    /// Create an uninitialized window. Performs no I/O.
    pub fn new(subsystem: &VideoSubsystem<P>, config: WindowConfig) -> Self {
        Self::with_loader(subsystem, config, L::default())
    }
}

impl<P: Platform, L: FunctionLoader> Window<P, L> {
    /// Create an uninitialized window with an explicit function loader
    pub fn with_loader(subsystem: &VideoSubsystem<P>, config: WindowConfig, loader: L) -> Self {
        Self {
            vsync: config.vsync,
            fullscreen: false,
            config,
            subsystem: subsystem.clone(),
            lease: None,
            surface: None,
            context: None,
            loader,
            driver_info: None,
            initialized: false,
        }
    }

    /// Create the native window and OpenGL context and load GL functions
    ///
    /// Stops at the first failing step. Anything created before the failure
    /// is kept until [`close`](Self::close). Calling this again while a
    /// native window exists returns [`WindowError::AlreadyInitialized`].
    pub fn init(&mut self) -> WindowResult<()> {
        if self.surface.is_some() {
            log::error!("Window '{}' is already initialized", self.config.title);
            return Err(WindowError::AlreadyInitialized);
        }

        if self.lease.is_none() {
            self.lease = Some(self.subsystem.acquire()?);
        }

        {
            let mut platform = self.subsystem.platform_mut();
            platform.set_context_hints(ContextHints::core(self.config.gl_version));

            let surface = platform
                .create_surface(&self.config.title, self.config.width, self.config.height)
                .map_err(|e| {
                    log::error!("Unable to create window. {e}");
                    WindowError::WindowCreation(e)
                })?;
            let surface = self.surface.insert(surface);

            let context = platform.create_context(surface).map_err(|e| {
                log::error!("Unable to create OpenGL context. {e}");
                WindowError::ContextCreation(e)
            })?;
            self.context = Some(context);

            self.loader
                .load(&mut |name: &str| platform.proc_address(surface, name))
                .map_err(|e| {
                    log::error!("Unable to initialize OpenGL function loader. {e}");
                    WindowError::LoaderInit(e)
                })?;
        }

        let info = self.loader.driver_info();
        log::info!("{}", info.renderer);
        log::info!("OpenGL Version: {}", info.version);
        log::info!("GLSL Version: {}", info.shading_language);
        self.driver_info = Some(info);
        self.initialized = true;

        if self.config.vsync {
            self.set_vsync(true);
        }
        if self.config.fullscreen {
            self.set_fullscreen(true);
        }

        Ok(())
    }

    /// Destroy the window and release the video subsystem
    ///
    /// Safe to call any number of times, including before `init`.
    pub fn close(&mut self) {
        self.initialized = false;

        if let Some(mut surface) = self.surface.take() {
            let mut platform = self.subsystem.platform_mut();
            if let Some(context) = self.context.take() {
                platform.destroy_context(&mut surface, context);
            }
            platform.destroy_surface(surface);
            log::debug!("Window '{}' destroyed", self.config.title);
        }

        self.driver_info = None;
        self.fullscreen = false;

        // Platform borrow must be released before the lease can quit the subsystem.
        self.lease = None;
    }

    /// Present the back buffer
    ///
    /// Fails with [`WindowError::NotInitialized`] unless `init` completed.
    pub fn swap(&mut self) -> WindowResult<()> {
        match self.surface.as_mut() {
            Some(surface) if self.initialized => {
                self.subsystem.platform_mut().swap_buffers(surface);
                Ok(())
            }
            _ => Err(WindowError::NotInitialized),
        }
    }

    /// Switch to desktop fullscreen or back to windowed mode
    ///
    /// Failures are logged and leave the display mode unchanged.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        let action = if fullscreen {
            "Unable to set fullscreen mode."
        } else {
            "Unable to set windowed mode."
        };

        let surface = match self.surface.as_mut() {
            Some(surface) if self.initialized => surface,
            _ => {
                log::error!("{action} Window is not initialized");
                return;
            }
        };

        let mode = if fullscreen {
            DisplayMode::DesktopFullscreen
        } else {
            DisplayMode::Windowed
        };

        match self.subsystem.platform_mut().set_display_mode(surface, mode) {
            Ok(()) => self.fullscreen = fullscreen,
            Err(e) => log::error!("{action} {e}"),
        }
    }

    /// Enable or disable vertical sync
    ///
    /// Failures are logged and otherwise ignored.
    pub fn set_vsync(&mut self, vsync: bool) {
        let surface = match self.surface.as_mut() {
            Some(surface) if self.initialized => surface,
            _ => {
                log::error!("Unable to use Vsync. Window is not initialized");
                return;
            }
        };

        let interval = SwapInterval::from_vsync(vsync);
        match self.subsystem.platform_mut().set_swap_interval(surface, interval) {
            Ok(()) => {
                log::debug!("Swap interval set to {}", interval.frames());
                self.vsync = vsync;
            }
            Err(e) => log::error!("Unable to use Vsync. {e}"),
        }
    }

    /// Process pending window events and return the ones for this window
    pub fn poll_events(&mut self) -> Vec<P::Event> {
        match self.surface.as_mut() {
            Some(surface) => self.subsystem.platform_mut().poll_events(surface),
            None => Vec::new(),
        }
    }

    /// Whether the user asked to close the window
    pub fn should_close(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| self.subsystem.platform().should_close(surface))
    }

    /// Request or cancel closing the window
    pub fn set_should_close(&mut self, should_close: bool) {
        if let Some(surface) = self.surface.as_mut() {
            self.subsystem.platform_mut().set_should_close(surface, should_close);
        }
    }

    /// Whether the last `init` completed and `close` has not run since
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Requested window size
    pub const fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Requested OpenGL version
    pub const fn gl_version(&self) -> GlVersion {
        self.config.gl_version
    }

    /// Current vsync setting
    pub const fn vsync(&self) -> bool {
        self.vsync
    }

    /// Whether the window is in fullscreen mode
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Driver strings, available after a successful `init`
    pub const fn driver_info(&self) -> Option<&DriverInfo> {
        self.driver_info.as_ref()
    }
}

impl<P: Platform, L: FunctionLoader> Drop for Window<P, L> {
    fn drop(&mut self) {
        self.close();
    }
}
