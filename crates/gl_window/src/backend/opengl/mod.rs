//! GLFW windowing with `gl` crate function loading

mod loader;
mod window;

pub use loader::GlLoader;
pub use window::{GlfwContext, GlfwPlatform, GlfwSurface};
