//! SDL2 platform backend for the Dear ImGui OpenGL examples
//!
//! [`Sdl2Platform`] initialises SDL's video and timer subsystems, opens one
//! window with an OpenGL context and translates the SDL event stream into
//! Dear ImGui IO events.
//!
//! # Example
//!
//! ```rust,no_run
//! use dear_imgui_rs::Context;
//! use dear_imgui_sdl2::{Sdl2ClientApi, Sdl2Platform};
//!
//! let mut imgui = Context::create();
//! let mut platform = Sdl2Platform::new(&mut imgui, Sdl2ClientApi::OpenGL2)?;
//! imgui.set_clipboard_backend(platform.clipboard());
//!
//! while !platform.should_stop() {
//!     platform.process_events(&mut imgui);
//!     platform.new_frame(&mut imgui);
//!     // build UI, render ...
//!     platform.post_render();
//! }
//! # Ok::<(), dear_imgui_sdl2::Sdl2PlatformError>(())
//! ```

mod client_api;
mod clipboard;
mod error;
mod frame;
mod input;
mod platform;

pub use client_api::*;
pub use clipboard::Sdl2Clipboard;
pub use error::*;
pub use input::{
    MOUSE_BUTTON_COUNT, MOUSE_BUTTON_PRIMARY, MOUSE_BUTTON_SECONDARY, MOUSE_BUTTON_TERTIARY,
    key_events, modifier_events, normalize_wheel, sdl2_key_to_imgui_key,
};
pub use platform::Sdl2Platform;

// Re-export sdl2 so applications can match on the same version.
pub use sdl2;
