//! Glow (OpenGL) renderer for the Dear ImGui platform examples
//!
//! One renderer serves both example client APIs:
//!
//! - **OpenGL 3.2 core**: GLSL 1.50 shaders, a per-frame vertex array object and
//!   `glDrawElementsBaseVertex`.
//! - **OpenGL 2.1**: GLSL 1.20 shaders with `attribute`/`varying`, no vertex
//!   array object, plain `glDrawElements`.
//!
//! The GL state the application had before [`GlowRenderer::render`] is saved and
//! restored around every frame.
//!
//! # Example
//!
//! ```rust,no_run
//! use dear_imgui_rs::Context;
//! use dear_imgui_glow::GlowRenderer;
//!
//! # fn loader(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
//! let gl = unsafe { glow::Context::from_loader_function(loader) };
//! let mut imgui = Context::create();
//! let mut renderer = GlowRenderer::new(gl, &mut imgui)?;
//!
//! // Per frame:
//! // renderer.pre_render([0.45, 0.55, 0.60]);
//! // renderer.render(imgui.render())?;
//! # Ok::<(), dear_imgui_glow::InitError>(())
//! ```

// Re-export glow so callers build their context against the same version.
pub use glow;
use glow::{Context, HasContext};

mod error;
mod renderer;
mod shaders;
mod state;
mod texture;
mod versions;

pub use error::*;
pub use renderer::*;
pub use versions::*;

pub type GlBuffer = <Context as HasContext>::Buffer;
pub type GlTexture = <Context as HasContext>::Texture;
pub type GlVertexArray = <Context as HasContext>::VertexArray;
pub type GlProgram = <Context as HasContext>::Program;
pub type GlUniformLocation = <Context as HasContext>::UniformLocation;

/// View a slice of plain vertex/index data as bytes for `glBufferData`
#[inline]
fn to_byte_slice<T>(slice: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(slice.as_ptr() as *const u8, std::mem::size_of_val(slice)) }
}

/// Convert a raw GL object name (as returned by `glGet*`) into a glow handle
#[inline]
fn native_name(raw: i32) -> Option<std::num::NonZeroU32> {
    u32::try_from(raw).ok().and_then(std::num::NonZeroU32::new)
}

#[cfg(feature = "debug_message_insert_support")]
fn gl_debug_message(gl: &Context, message: &str) {
    unsafe {
        gl.debug_message_insert(
            glow::DEBUG_SOURCE_APPLICATION,
            glow::DEBUG_TYPE_MARKER,
            0,
            glow::DEBUG_SEVERITY_NOTIFICATION,
            message,
        );
    }
}

#[cfg(not(feature = "debug_message_insert_support"))]
fn gl_debug_message(_gl: &Context, _message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_slice_covers_whole_elements() {
        let indices: [u16; 3] = [0, 1, 2];
        assert_eq!(to_byte_slice(&indices).len(), 6);
    }

    #[test]
    fn native_name_rejects_zero_and_negative() {
        assert_eq!(native_name(0), None);
        assert_eq!(native_name(-1), None);
        assert_eq!(native_name(7).map(|n| n.get()), Some(7));
    }
}
