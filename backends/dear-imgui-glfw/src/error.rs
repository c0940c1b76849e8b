//! Error types for the GLFW platform

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlfwPlatformError {
    #[error("Failed to initialize GLFW: {0}")]
    Init(#[from] glfw::InitError),

    /// GLFW reports the reason through its error callback, which logs it
    #[error("Failed to create GLFW window ({width}x{height}, {client_api})")]
    CreateWindow {
        width: u32,
        height: u32,
        client_api: String,
    },

    #[error("Unsupported client API `{0}`, expected opengl2 or opengl3")]
    UnsupportedClientApi(String),
}

pub type GlfwPlatformResult<T> = Result<T, GlfwPlatformError>;
