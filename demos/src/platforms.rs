//! [`Platform`] and [`Renderer`] for the backend crates

use dear_imgui_glfw::GlfwPlatform;
use dear_imgui_glow::{GlowRenderer, RenderError};
use dear_imgui_rs::Context;
use dear_imgui_rs::render::DrawData;
use dear_imgui_sdl2::Sdl2Platform;

use crate::{Platform, Renderer};

impl Platform for GlfwPlatform {
    fn should_stop(&self) -> bool {
        GlfwPlatform::should_stop(self)
    }

    fn process_events(&mut self, imgui: &mut Context) {
        GlfwPlatform::process_events(self, imgui);
    }

    fn display_size(&self) -> [f32; 2] {
        GlfwPlatform::display_size(self)
    }

    fn framebuffer_size(&self) -> [f32; 2] {
        GlfwPlatform::framebuffer_size(self)
    }

    fn new_frame(&mut self, imgui: &mut Context) {
        GlfwPlatform::new_frame(self, imgui);
    }

    fn post_render(&mut self) {
        GlfwPlatform::post_render(self);
    }
}

impl Platform for Sdl2Platform {
    fn should_stop(&self) -> bool {
        Sdl2Platform::should_stop(self)
    }

    fn process_events(&mut self, imgui: &mut Context) {
        Sdl2Platform::process_events(self, imgui);
    }

    fn display_size(&self) -> [f32; 2] {
        Sdl2Platform::display_size(self)
    }

    fn framebuffer_size(&self) -> [f32; 2] {
        Sdl2Platform::framebuffer_size(self)
    }

    fn new_frame(&mut self, imgui: &mut Context) {
        Sdl2Platform::new_frame(self, imgui);
    }

    fn post_render(&mut self) {
        Sdl2Platform::post_render(self);
    }
}

impl Renderer for GlowRenderer {
    type Error = RenderError;

    fn pre_render(&mut self, clear_color: [f32; 3]) {
        GlowRenderer::pre_render(self, clear_color);
    }

    fn render(&mut self, draw_data: &DrawData) -> Result<(), RenderError> {
        GlowRenderer::render(self, draw_data)
    }
}
