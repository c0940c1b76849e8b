//! The example UI and the state it edits

use dear_imgui_rs::{Condition, Ui, sys};

/// Where the demo window opens the first time
pub const DEMO_WINDOW_POS: [f32; 2] = [650.0, 20.0];

/// Everything the example UI reads and writes between frames
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoState {
    pub show_demo_window: bool,
    pub show_another_window: bool,
    pub float_value: f32,
    pub counter: u32,
    pub clear_color: [f32; 3],
}

impl DemoState {
    /// Build this frame's windows
    pub fn draw(&mut self, ui: &Ui) {
        ui.window("Hello, world!").build(|| {
            ui.text("This is some useful text.");

            ui.checkbox("Demo Window", &mut self.show_demo_window);
            ui.checkbox("Another Window", &mut self.show_another_window);

            ui.slider_f32("float", &mut self.float_value, 0.0, 1.0);
            ui.color_edit3("clear color", &mut self.clear_color);

            if ui.button("Button") {
                self.counter += 1;
            }
            ui.same_line();
            ui.text(format!("counter = {}", self.counter));

            let framerate = ui.io().framerate();
            ui.text(frame_rate_line(framerate));
        });

        if self.show_another_window {
            ui.window("Another window").build(|| {
                ui.text("Hello from another window!");
                if ui.button("Close Me") {
                    self.show_another_window = false;
                }
            });
        }

        if self.show_demo_window {
            set_next_window_pos(DEMO_WINDOW_POS, Condition::FirstUseEver);
            ui.show_demo_window(&mut self.show_demo_window);
        }
    }
}

/// "Application average" line shown under the widgets
pub fn frame_rate_line(framerate: f32) -> String {
    let ms_per_frame = if framerate > 0.0 { 1000.0 / framerate } else { 0.0 };
    format!("Application average {ms_per_frame:.3} ms/frame ({framerate:.1} FPS)")
}

// The window builder can't reach the demo window, which begins itself.
fn set_next_window_pos(pos: [f32; 2], condition: Condition) {
    let pos = sys::ImVec2 {
        x: pos[0],
        y: pos[1],
    };
    let pivot = sys::ImVec2 { x: 0.0, y: 0.0 };
    unsafe { sys::igSetNextWindowPos(pos, condition as sys::ImGuiCond, pivot) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rate_line_formats_like_the_demo() {
        assert_eq!(
            frame_rate_line(60.0),
            "Application average 16.667 ms/frame (60.0 FPS)"
        );
        assert_eq!(
            frame_rate_line(0.0),
            "Application average 0.000 ms/frame (0.0 FPS)"
        );
    }

    #[test]
    fn default_state_starts_closed() {
        let state = DemoState::default();
        assert!(!state.show_demo_window);
        assert!(!state.show_another_window);
        assert_eq!(state.counter, 0);
        assert_eq!(state.clear_color, [0.0; 3]);
    }
}
