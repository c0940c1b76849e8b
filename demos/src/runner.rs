//! The loop shared by every example binary

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use dear_imgui_rs::Context;
use dear_imgui_rs::render::DrawData;

use crate::DemoState;

/// Window and input side of an example
pub trait Platform {
    fn should_stop(&self) -> bool;
    fn process_events(&mut self, imgui: &mut Context);
    fn display_size(&self) -> [f32; 2];
    fn framebuffer_size(&self) -> [f32; 2];
    fn new_frame(&mut self, imgui: &mut Context);
    fn post_render(&mut self);
}

/// Drawing side of an example
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Clear the framebuffer before the GUI is drawn
    fn pre_render(&mut self, clear_color: [f32; 3]);
    fn render(&mut self, draw_data: &DrawData) -> Result<(), Self::Error>;
}

/// Knobs for [`run`]
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Initial clear colour; the UI can change it afterwards
    pub clear_color: [f32; 3],
    /// Pause after each frame
    pub frame_sleep: Duration,
    /// Where ImGui keeps window layout; `None` disables the ini file
    pub ini_filename: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0],
            frame_sleep: Duration::from_millis(25),
            ini_filename: None,
        }
    }
}

impl RunnerConfig {
    /// Apply the context-level settings; call before the first frame
    pub fn apply(&self, imgui: &mut Context) {
        if let Err(err) = imgui.set_ini_filename(self.ini_filename.clone()) {
            tracing::warn!(%err, "could not set ini filename");
        }
    }
}

/// Run the example until the platform asks to stop
pub fn run<P, R>(
    imgui: &mut Context,
    platform: &mut P,
    renderer: &mut R,
    config: &RunnerConfig,
) -> Result<(), R::Error>
where
    P: Platform,
    R: Renderer,
{
    let mut state = DemoState {
        clear_color: config.clear_color,
        ..DemoState::default()
    };
    tracing::info!(
        display_size = ?platform.display_size(),
        framebuffer_size = ?platform.framebuffer_size(),
        "entering main loop"
    );

    while !platform.should_stop() {
        platform.process_events(imgui);
        platform.new_frame(imgui);

        let ui = imgui.frame();
        state.draw(ui);
        let draw_data = imgui.render();

        renderer.pre_render(state.clear_color);
        renderer.render(draw_data)?;
        platform.post_render();

        if !config.frame_sleep.is_zero() {
            thread::sleep(config.frame_sleep);
        }
    }

    tracing::info!(counter = state.counter, "main loop finished");
    Ok(())
}
