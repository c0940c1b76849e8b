//! Error types for the SDL2 platform

use thiserror::Error;

/// Setup failures; SDL reports most of them as plain strings
#[derive(Error, Debug)]
pub enum Sdl2PlatformError {
    #[error("Failed to initialize SDL: {0}")]
    Init(String),

    #[error("Failed to create SDL window: {0}")]
    CreateWindow(#[from] sdl2::video::WindowBuildError),

    #[error("Failed to create OpenGL context: {0}")]
    CreateContext(String),

    #[error("Failed to make OpenGL context current: {0}")]
    MakeCurrent(String),

    #[error("Unsupported client API `{0}`, expected opengl2 or opengl3")]
    UnsupportedClientApi(String),
}

pub type Sdl2PlatformResult<T> = Result<T, Sdl2PlatformError>;
