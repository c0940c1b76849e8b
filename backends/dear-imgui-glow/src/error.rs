//! Error types for the glow renderer

use thiserror::Error;

/// Errors raised while creating the renderer's GL objects
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to create buffer object: {0}")]
    CreateBufferObject(String),

    #[error("Failed to create texture: {0}")]
    CreateTexture(String),

    #[error("Failed to create shader: {0}")]
    CreateShader(String),

    /// Compilation failed; carries the stage name and the driver's info log
    #[error("Failed to compile {stage} shader: {log}")]
    CompileShader { stage: &'static str, log: String },

    #[error("Failed to link program: {0}")]
    LinkProgram(String),

    /// A vertex attribute the shaders declare was optimised out or renamed
    #[error("Vertex attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
}

/// Errors raised while rendering a frame
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create vertex array: {0}")]
    CreateVertexArray(String),

    #[error("Failed to create texture: {0}")]
    CreateTexture(String),

    /// A draw command referenced a texture this renderer does not own
    #[error("Unknown texture id {0}")]
    InvalidTexture(u64),
}

pub type InitResult<T> = Result<T, InitError>;

pub type RenderResult<T> = Result<T, RenderError>;
