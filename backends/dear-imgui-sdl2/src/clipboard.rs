//! Clipboard access through SDL

use dear_imgui_rs::ClipboardBackend;
use sdl2::clipboard::ClipboardUtil;

/// Dear ImGui clipboard backed by SDL's clipboard utility
pub struct Sdl2Clipboard {
    util: ClipboardUtil,
}

impl Sdl2Clipboard {
    pub(crate) fn new(util: ClipboardUtil) -> Self {
        Self { util }
    }
}

impl ClipboardBackend for Sdl2Clipboard {
    fn get(&mut self) -> Option<String> {
        if !self.util.has_clipboard_text() {
            return None;
        }
        self.util
            .clipboard_text()
            .map_err(|err| tracing::warn!(%err, "SDL clipboard read failed"))
            .ok()
    }

    fn set(&mut self, value: &str) {
        if let Err(err) = self.util.set_clipboard_text(value) {
            tracing::warn!(%err, "SDL clipboard write failed");
        }
    }
}
