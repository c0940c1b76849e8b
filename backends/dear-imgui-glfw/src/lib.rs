//! GLFW platform backend for the Dear ImGui OpenGL examples
//!
//! [`GlfwPlatform`] owns the GLFW handle and one window with an OpenGL context.
//! Each frame it translates GLFW events into Dear ImGui IO events, feeds the
//! display size, time step and mouse state, and swaps buffers once the
//! renderer is done.
//!
//! # Example
//!
//! ```rust,no_run
//! use dear_imgui_rs::Context;
//! use dear_imgui_glfw::{GlfwClientApi, GlfwPlatform};
//!
//! let mut imgui = Context::create();
//! let mut platform = GlfwPlatform::new(&mut imgui, GlfwClientApi::OpenGL3)?;
//! // glow::Context::from_loader_function(|s| platform.get_proc_address(s))
//!
//! while !platform.should_stop() {
//!     platform.process_events(&mut imgui);
//!     platform.new_frame(&mut imgui);
//!     // build UI, render ...
//!     platform.post_render();
//! }
//! # Ok::<(), dear_imgui_glfw::GlfwPlatformError>(())
//! ```

mod client_api;
mod clipboard;
mod error;
mod frame;
mod input;
mod platform;

pub use client_api::*;
pub use clipboard::GlfwClipboard;
pub use error::*;
pub use input::{
    MOUSE_BUTTON_COUNT, MOUSE_BUTTON_PRIMARY, MOUSE_BUTTON_SECONDARY, MOUSE_BUTTON_TERTIARY,
    glfw_key_to_imgui_key, key_events, modifier_events,
};
pub use platform::GlfwPlatform;

// Re-export glfw so applications can match on the same version.
pub use glfw;
