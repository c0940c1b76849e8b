//! Window, GL context and per-frame input for the GLFW examples

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use dear_imgui_rs::Context;
use glfw::{Action, Glfw, GlfwReceiver, PWindow, SwapInterval, WindowEvent, WindowMode};
// `swap_buffers` lives on this trait.
use glfw::Context as _;

use crate::frame::{FrameClock, framebuffer_scale};
use crate::input::{IMGUI_MOUSE_BUTTONS, MouseLatch, key_events, mouse_button_slot};
use crate::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, GlfwClientApi, GlfwClipboard, GlfwPlatformError,
    GlfwPlatformResult,
};

/// GLFW window with a current OpenGL context, feeding Dear ImGui
///
/// Dropping the platform destroys the window and terminates GLFW.
pub struct GlfwPlatform {
    window: Rc<RefCell<PWindow>>,
    events: GlfwReceiver<(f64, WindowEvent)>,
    glfw: Glfw,
    clock: FrameClock,
    mouse_latch: MouseLatch,
}

impl GlfwPlatform {
    /// Open the example window and make its GL context current
    pub fn new(imgui: &mut Context, client_api: GlfwClientApi) -> GlfwPlatformResult<Self> {
        let mut glfw = glfw::init(log_glfw_error)?;
        client_api.apply_hints(&mut glfw);

        let title = format!("ImGui-Go GLFW+{client_api} example");
        let (mut window, events) = glfw
            .create_window(
                DEFAULT_WINDOW_WIDTH,
                DEFAULT_WINDOW_HEIGHT,
                &title,
                WindowMode::Windowed,
            )
            .ok_or_else(|| GlfwPlatformError::CreateWindow {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
                client_api: client_api.to_string(),
            })?;

        window.make_current();
        glfw.set_swap_interval(SwapInterval::Sync(1));

        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);
        window.set_char_polling(true);
        tracing::debug!(%client_api, %title, "created GLFW window");

        let _ = imgui.set_platform_name(Some(format!(
            "dear-imgui-glfw {}",
            env!("CARGO_PKG_VERSION")
        )));

        Ok(Self {
            window: Rc::new(RefCell::new(window)),
            events,
            glfw,
            clock: FrameClock::default(),
            mouse_latch: MouseLatch::default(),
        })
    }

    /// Whether the user asked to close the window
    pub fn should_stop(&self) -> bool {
        self.window.borrow().should_close()
    }

    /// Poll GLFW and forward queued window events to ImGui
    pub fn process_events(&mut self, imgui: &mut Context) {
        self.glfw.poll_events();
        let io = imgui.io_mut();

        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                // Releases are picked up by polling the live state in `new_frame`.
                WindowEvent::MouseButton(button, Action::Press, _) => {
                    if let Some(slot) = mouse_button_slot(button) {
                        self.mouse_latch.press(slot);
                    }
                }
                WindowEvent::Scroll(x, y) => io.add_mouse_wheel_event([x as f32, y as f32]),
                WindowEvent::Key(key, _, action, modifiers) => {
                    for (key, down) in key_events(key, action, modifiers) {
                        io.add_key_event(key, down);
                    }
                }
                WindowEvent::Char(ch) => io.add_input_character(ch),
                _ => {}
            }
        }
    }

    /// Window size in screen coordinates
    pub fn display_size(&self) -> [f32; 2] {
        let (width, height) = self.window.borrow().get_size();
        [width as f32, height as f32]
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> [f32; 2] {
        let (width, height) = self.window.borrow().get_framebuffer_size();
        [width as f32, height as f32]
    }

    /// Feed display size, time step and mouse state for the coming frame
    pub fn new_frame(&mut self, imgui: &mut Context) {
        let display_size = self.display_size();
        let framebuffer_size = self.framebuffer_size();
        let delta_time = self.clock.tick(self.glfw.get_time());

        let window = self.window.borrow();
        let mouse_pos = if window.is_focused() {
            let (x, y) = window.get_cursor_pos();
            [x as f32, y as f32]
        } else {
            [-f32::MAX, -f32::MAX]
        };
        let live = [
            glfw::MouseButton::Button1,
            glfw::MouseButton::Button2,
            glfw::MouseButton::Button3,
        ]
        .map(|button| window.get_mouse_button(button) == Action::Press);
        let buttons = self.mouse_latch.take(live);

        let io = imgui.io_mut();
        io.set_display_size(display_size);
        io.set_display_framebuffer_scale(framebuffer_scale(display_size, framebuffer_size));
        if let Some(delta_time) = delta_time {
            io.set_delta_time(delta_time);
        }
        io.add_mouse_pos_event(mouse_pos);
        for (button, down) in IMGUI_MOUSE_BUTTONS.into_iter().zip(buttons) {
            io.add_mouse_button_event(button, down);
        }
        tracing::trace!(?display_size, ?delta_time, ?buttons, "glfw new frame");
    }

    /// Present the rendered frame
    pub fn post_render(&mut self) {
        self.window.borrow_mut().swap_buffers();
    }

    /// Clipboard backend sharing this platform's window
    pub fn clipboard(&self) -> GlfwClipboard {
        GlfwClipboard::new(Rc::clone(&self.window))
    }

    /// OpenGL function loader for the window's context
    pub fn get_proc_address(&mut self, name: &str) -> *const c_void {
        self.window.borrow_mut().get_proc_address(name) as *const c_void
    }
}

fn log_glfw_error(error: glfw::Error, description: String) {
    tracing::error!(?error, %description, "GLFW error");
}
