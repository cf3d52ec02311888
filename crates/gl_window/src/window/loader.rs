//! Graphics function loader abstraction

use std::ffi::c_void;

/// Driver identification strings queried after loading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    /// `GL_RENDERER`
    pub renderer: String,
    /// `GL_VERSION`
    pub version: String,
    /// `GL_SHADING_LANGUAGE_VERSION`
    pub shading_language: String,
}

/// Resolves driver-provided entry points once a context is current
pub trait FunctionLoader {
    /// Resolve every entry point through `resolve`
    ///
    /// Returns the loader's error text when required functions are missing.
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), String>;

    /// Query renderer and version strings from the loaded driver
    fn driver_info(&self) -> DriverInfo;
}
