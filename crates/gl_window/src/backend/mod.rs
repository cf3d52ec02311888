//! Concrete windowing and loader backends

pub mod opengl;
