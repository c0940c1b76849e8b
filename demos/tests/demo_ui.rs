use std::convert::Infallible;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use dear_imgui_demos::{DemoState, Platform, Renderer, RunnerConfig, run};
use dear_imgui_rs as imgui;
use dear_imgui_rs::render::DrawData;
use pretty_assertions::assert_eq;

fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

fn headless_context() -> imgui::Context {
    let mut ctx = imgui::Context::create();
    let _ = ctx.set_ini_filename::<std::path::PathBuf>(None);
    {
        let io = ctx.io_mut();
        io.set_display_size([1280.0, 720.0]);
        io.set_delta_time(1.0 / 60.0);
    }
    let _ = ctx.font_atlas_mut().build();
    ctx
}

/// Stops after a fixed number of frames
struct FramesPlatform {
    frames_left: u32,
    events_processed: u32,
    presented: u32,
}

impl Platform for FramesPlatform {
    fn should_stop(&self) -> bool {
        self.frames_left == 0
    }

    fn process_events(&mut self, _imgui: &mut imgui::Context) {
        self.events_processed += 1;
    }

    fn display_size(&self) -> [f32; 2] {
        [1280.0, 720.0]
    }

    fn framebuffer_size(&self) -> [f32; 2] {
        [1280.0, 720.0]
    }

    fn new_frame(&mut self, imgui: &mut imgui::Context) {
        let io = imgui.io_mut();
        io.set_display_size(self.display_size());
        io.set_delta_time(1.0 / 60.0);
        self.frames_left -= 1;
    }

    fn post_render(&mut self) {
        self.presented += 1;
    }
}

#[derive(Default)]
struct RecordingRenderer {
    clear_colors: Vec<[f32; 3]>,
    rendered: u32,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn pre_render(&mut self, clear_color: [f32; 3]) {
        self.clear_colors.push(clear_color);
    }

    fn render(&mut self, _draw_data: &DrawData) -> Result<(), Infallible> {
        self.rendered += 1;
        Ok(())
    }
}

#[test]
fn demo_ui_builds_every_window() {
    let _guard = test_guard();
    let mut ctx = headless_context();

    let mut state = DemoState {
        show_demo_window: true,
        show_another_window: true,
        ..DemoState::default()
    };
    for _ in 0..3 {
        let ui = ctx.frame();
        state.draw(ui);
        let _ = ctx.render();
    }

    // Nothing was clicked, so the state is untouched.
    assert!(state.show_demo_window);
    assert!(state.show_another_window);
    assert_eq!(state.counter, 0);
}

#[test]
fn run_loop_drives_platform_and_renderer_in_order() {
    let _guard = test_guard();
    let mut ctx = headless_context();

    let mut platform = FramesPlatform {
        frames_left: 4,
        events_processed: 0,
        presented: 0,
    };
    let mut renderer = RecordingRenderer::default();
    let config = RunnerConfig {
        clear_color: [0.25, 0.5, 0.75],
        frame_sleep: Duration::ZERO,
        ini_filename: None,
    };
    config.apply(&mut ctx);

    let result = run(&mut ctx, &mut platform, &mut renderer, &config);

    assert!(result.is_ok());
    assert_eq!(platform.events_processed, 4);
    assert_eq!(platform.presented, 4);
    assert_eq!(renderer.rendered, 4);
    assert_eq!(renderer.clear_colors, vec![[0.25, 0.5, 0.75]; 4]);
}

#[test]
fn run_returns_immediately_when_already_stopped() {
    let _guard = test_guard();
    let mut ctx = headless_context();

    let mut platform = FramesPlatform {
        frames_left: 0,
        events_processed: 0,
        presented: 0,
    };
    let mut renderer = RecordingRenderer::default();

    let result = run(&mut ctx, &mut platform, &mut renderer, &RunnerConfig::default());

    assert!(result.is_ok());
    assert_eq!(platform.events_processed, 0);
    assert_eq!(renderer.rendered, 0);
}
