//! OpenGL entry point loading through the `gl` crate

use std::ffi::{c_void, CStr};

use crate::window::{DriverInfo, FunctionLoader};

/// Loads every OpenGL function, core and extension, with `gl::load_with`
#[derive(Debug, Default)]
pub struct GlLoader {
    loaded: bool,
}

impl FunctionLoader for GlLoader {
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), String> {
        gl::load_with(|symbol| resolve(symbol));

        let required = [
            ("glGetString", gl::GetString::is_loaded()),
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, loaded)| !loaded)
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(format!("missing entry points: {}", missing.join(", ")));
        }

        self.loaded = true;
        Ok(())
    }

    fn driver_info(&self) -> DriverInfo {
        if !self.loaded {
            return DriverInfo::default();
        }

        DriverInfo {
            renderer: gl_string(gl::RENDERER),
            version: gl_string(gl::VERSION),
            shading_language: gl_string(gl::SHADING_LANGUAGE_VERSION),
        }
    }
}

#[allow(unsafe_code)]
fn gl_string(name: gl::types::GLenum) -> String {
    // SAFETY: only called after `load` verified glGetString, with a context
    // current on this thread. The returned string is static and NUL-terminated.
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("unknown");
        }
        CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
    }
}
