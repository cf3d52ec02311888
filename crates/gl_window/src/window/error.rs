use thiserror::Error;

/// Window management errors
///
/// The string payloads carry the underlying library's own error text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Video subsystem could not be brought up
    #[error("Unable to initialize video subsystem: {0}")]
    SubsystemInit(String),

    /// Native window creation failed
    #[error("Unable to create window: {0}")]
    WindowCreation(String),

    /// OpenGL context creation failed
    #[error("Unable to create OpenGL context: {0}")]
    ContextCreation(String),

    /// Driver entry points could not be resolved
    #[error("Unable to initialize OpenGL function loader: {0}")]
    LoaderInit(String),

    /// `init` called while a native window exists
    #[error("Window is already initialized")]
    AlreadyInitialized,

    /// Operation needs a window and context
    #[error("Window is not initialized")]
    NotInitialized,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
