//! Window, GL context and per-frame input for the SDL2 examples

use std::ffi::c_void;

use dear_imgui_rs::{Context, Io};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod, Scancode};
use sdl2::video::{GLContext, SwapInterval, Window};
use sdl2::{EventPump, Sdl, TimerSubsystem, VideoSubsystem};

use crate::frame::{FrameClock, framebuffer_scale};
use crate::input::{
    IMGUI_MOUSE_BUTTONS, MouseLatch, key_events, mouse_button_slot, normalize_wheel,
};
use crate::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, Sdl2ClientApi, Sdl2Clipboard, Sdl2PlatformError,
    Sdl2PlatformResult,
};

/// SDL2 window with a current OpenGL context, feeding Dear ImGui
pub struct Sdl2Platform {
    // Fields drop top to bottom: context, window, then the subsystems.
    _gl_context: GLContext,
    window: Window,
    event_pump: EventPump,
    timer: TimerSubsystem,
    video: VideoSubsystem,
    _sdl: Sdl,
    clock: FrameClock,
    mouse_latch: MouseLatch,
    stop_requested: bool,
}

impl Sdl2Platform {
    /// Initialise SDL, open the example window and make its GL context current
    pub fn new(imgui: &mut Context, client_api: Sdl2ClientApi) -> Sdl2PlatformResult<Self> {
        let sdl = sdl2::init().map_err(Sdl2PlatformError::Init)?;
        let video = sdl.video().map_err(Sdl2PlatformError::Init)?;
        let timer = sdl.timer().map_err(Sdl2PlatformError::Init)?;
        let event_pump = sdl.event_pump().map_err(Sdl2PlatformError::Init)?;

        client_api.apply_attributes(&video.gl_attr());

        let title = format!("ImGui-Go SDL2+{client_api} example");
        let window = video
            .window(&title, DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
            .position_centered()
            .opengl()
            .build()?;

        let gl_context = window
            .gl_create_context()
            .map_err(Sdl2PlatformError::CreateContext)?;
        window
            .gl_make_current(&gl_context)
            .map_err(Sdl2PlatformError::MakeCurrent)?;
        if let Err(err) = video.gl_set_swap_interval(SwapInterval::VSync) {
            tracing::warn!(%err, "vsync not available");
        }
        tracing::debug!(%client_api, %title, "created SDL2 window");

        let _ = imgui.set_platform_name(Some(format!(
            "dear-imgui-sdl2 {}",
            env!("CARGO_PKG_VERSION")
        )));

        Ok(Self {
            _gl_context: gl_context,
            window,
            event_pump,
            timer,
            video,
            _sdl: sdl,
            clock: FrameClock::default(),
            mouse_latch: MouseLatch::default(),
            stop_requested: false,
        })
    }

    /// Whether a quit event has been received
    pub fn should_stop(&self) -> bool {
        self.stop_requested
    }

    /// Drain SDL's event queue into ImGui
    pub fn process_events(&mut self, imgui: &mut Context) {
        let io = imgui.io_mut();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.stop_requested = true,
                Event::MouseWheel { x, y, .. } => {
                    io.add_mouse_wheel_event([normalize_wheel(x), normalize_wheel(y)]);
                }
                Event::MouseButtonDown { mouse_btn, .. } => {
                    if let Some(slot) = mouse_button_slot(mouse_btn) {
                        self.mouse_latch.press(slot);
                    }
                }
                Event::TextInput { text, .. } => {
                    for ch in text.chars() {
                        io.add_input_character(ch);
                    }
                }
                Event::KeyDown {
                    keycode,
                    scancode,
                    keymod,
                    ..
                } => forward_key(io, keycode, scancode, keymod, true),
                Event::KeyUp {
                    keycode,
                    scancode,
                    keymod,
                    ..
                } => forward_key(io, keycode, scancode, keymod, false),
                _ => {}
            }
        }
    }

    /// Window size in window coordinates
    pub fn display_size(&self) -> [f32; 2] {
        let (width, height) = self.window.size();
        [width as f32, height as f32]
    }

    /// GL drawable size in pixels
    pub fn framebuffer_size(&self) -> [f32; 2] {
        let (width, height) = self.window.drawable_size();
        [width as f32, height as f32]
    }

    /// Feed display size, time step and mouse state for the coming frame
    pub fn new_frame(&mut self, imgui: &mut Context) {
        let display_size = self.display_size();
        let framebuffer_size = self.framebuffer_size();
        let delta_time = self.clock.tick(
            self.timer.performance_counter(),
            self.timer.performance_frequency(),
        );

        let mouse = self.event_pump.mouse_state();
        let buttons = self
            .mouse_latch
            .take([mouse.left(), mouse.right(), mouse.middle()]);

        let io = imgui.io_mut();
        io.set_display_size(display_size);
        io.set_display_framebuffer_scale(framebuffer_scale(display_size, framebuffer_size));
        io.set_delta_time(delta_time);
        io.add_mouse_pos_event([mouse.x() as f32, mouse.y() as f32]);
        for (button, down) in IMGUI_MOUSE_BUTTONS.into_iter().zip(buttons) {
            io.add_mouse_button_event(button, down);
        }
        tracing::trace!(?display_size, delta_time, ?buttons, "sdl2 new frame");
    }

    /// Present the rendered frame
    pub fn post_render(&mut self) {
        self.window.gl_swap_window();
    }

    /// Clipboard backend using SDL's clipboard
    pub fn clipboard(&self) -> Sdl2Clipboard {
        Sdl2Clipboard::new(self.video.clipboard())
    }

    /// OpenGL function loader for the window's context
    pub fn get_proc_address(&self, name: &str) -> *const c_void {
        self.video.gl_get_proc_address(name) as *const c_void
    }
}

fn forward_key(
    io: &mut Io,
    keycode: Option<Keycode>,
    scancode: Option<Scancode>,
    keymod: Mod,
    down: bool,
) {
    for (key, key_down) in key_events(keycode, scancode, keymod, down) {
        io.add_key_event(key, key_down);
    }
}
