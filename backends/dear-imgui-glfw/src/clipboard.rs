//! Clipboard access through the GLFW window

use std::cell::RefCell;
use std::rc::Rc;

use dear_imgui_rs::ClipboardBackend;
use glfw::PWindow;

/// Dear ImGui clipboard backed by the window's clipboard string
///
/// Install it with `Context::set_clipboard_backend(platform.clipboard())`.
pub struct GlfwClipboard {
    window: Rc<RefCell<PWindow>>,
}

impl GlfwClipboard {
    pub(crate) fn new(window: Rc<RefCell<PWindow>>) -> Self {
        Self { window }
    }
}

impl ClipboardBackend for GlfwClipboard {
    fn get(&mut self) -> Option<String> {
        match self.window.try_borrow() {
            Ok(window) => window.get_clipboard_string(),
            Err(_) => {
                tracing::warn!("window busy, clipboard read skipped");
                None
            }
        }
    }

    fn set(&mut self, value: &str) {
        match self.window.try_borrow_mut() {
            Ok(mut window) => window.set_clipboard_string(value),
            Err(_) => tracing::warn!("window busy, clipboard write dropped"),
        }
    }
}
