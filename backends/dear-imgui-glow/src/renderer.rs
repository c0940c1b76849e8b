//! The renderer: draw data in, GL draw calls out

use std::mem::size_of;

use dear_imgui_rs::{
    BackendFlags, Context as ImGuiContext, TextureId,
    internal::RawWrapper,
    render::{DrawCmd, DrawCmdParams, DrawData, DrawIdx, DrawVert},
};
use glow::{Context, HasContext};
use memoffset::offset_of;

use crate::{
    GlBuffer, GlVersion, GlslVersion,
    error::{InitError, InitResult, RenderError, RenderResult},
    gl_debug_message,
    shaders::Shaders,
    state::GlStateBackup,
    texture::Textures,
    to_byte_slice,
};

/// OpenGL renderer for Dear ImGui draw data
///
/// Owns the `glow` context it was created with. GL objects are released on drop.
pub struct GlowRenderer {
    gl: Context,
    gl_version: GlVersion,
    shaders: Shaders,
    state_backup: GlStateBackup,
    vbo: Option<GlBuffer>,
    ebo: Option<GlBuffer>,
    textures: Textures,
}

impl GlowRenderer {
    /// Create the renderer for the context that is current on this thread
    pub fn new(gl: Context, imgui: &mut ImGuiContext) -> InitResult<Self> {
        let gl_version = GlVersion::read(&gl);
        let glsl = GlslVersion::for_gl_version(gl_version);

        let shaders = Shaders::new(&gl, glsl)?;
        let (vbo, ebo) = unsafe {
            let vbo = gl.create_buffer().map_err(InitError::CreateBufferObject)?;
            let ebo = gl.create_buffer().map_err(InitError::CreateBufferObject)?;
            (vbo, ebo)
        };

        let _ = imgui.set_renderer_name(Some(format!(
            "dear-imgui-glow {} ({})",
            env!("CARGO_PKG_VERSION"),
            glsl.directive()
        )));
        let io = imgui.io_mut();
        let mut flags = io.backend_flags();
        flags.insert(BackendFlags::RENDERER_HAS_TEXTURES);
        if Self::draws_with_vertex_offset(gl_version) {
            flags.insert(BackendFlags::RENDERER_HAS_VTX_OFFSET);
        }
        io.set_backend_flags(flags);

        Ok(Self {
            gl,
            gl_version,
            shaders,
            state_backup: GlStateBackup::default(),
            vbo: Some(vbo),
            ebo: Some(ebo),
            textures: Textures::default(),
        })
    }

    pub fn gl_version(&self) -> GlVersion {
        self.gl_version
    }

    fn draws_with_vertex_offset(gl_version: GlVersion) -> bool {
        cfg!(feature = "vertex_offset_support") && gl_version.vertex_offset_support()
    }

    fn uses_vertex_array(&self) -> bool {
        cfg!(feature = "bind_vertex_array_support") && self.gl_version.bind_vertex_array_support()
    }

    /// Clear the default framebuffer before the GUI is drawn over it
    pub fn pre_render(&self, clear_color: [f32; 3]) {
        unsafe {
            self.gl
                .clear_color(clear_color[0], clear_color[1], clear_color[2], 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Render one frame of draw data
    pub fn render(&mut self, draw_data: &DrawData) -> RenderResult<()> {
        self.textures.apply_requests(&self.gl, draw_data)?;

        let Some([fb_width, fb_height]) = framebuffer_size(draw_data) else {
            return Ok(());
        };

        let gl = &self.gl;
        gl_debug_message(gl, "dear-imgui-glow: start render");
        self.state_backup.backup(gl, self.gl_version);

        // VAOs cannot be shared between GL contexts, so one is made per frame.
        let vao = if self.uses_vertex_array() {
            unsafe {
                let vao = gl
                    .create_vertex_array()
                    .map_err(RenderError::CreateVertexArray)?;
                gl.bind_vertex_array(Some(vao));
                Some(vao)
            }
        } else {
            None
        };

        let result = self
            .set_up_render_state(draw_data, fb_width, fb_height)
            .and_then(|()| self.render_draw_lists(draw_data, fb_height));

        if let Some(vao) = vao {
            unsafe { self.gl.delete_vertex_array(vao) };
        }
        self.state_backup.restore(&self.gl, self.gl_version);
        gl_debug_message(&self.gl, "dear-imgui-glow: end render");

        result
    }

    fn set_up_render_state(
        &self,
        draw_data: &DrawData,
        fb_width: f32,
        fb_height: f32,
    ) -> RenderResult<()> {
        let gl = &self.gl;
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_equation(glow::FUNC_ADD);
            gl.blend_func_separate(
                glow::SRC_ALPHA,
                glow::ONE_MINUS_SRC_ALPHA,
                glow::ONE,
                glow::ONE_MINUS_SRC_ALPHA,
            );
            gl.disable(glow::CULL_FACE);
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::STENCIL_TEST);
            gl.enable(glow::SCISSOR_TEST);

            #[cfg(feature = "polygon_mode_support")]
            if self.gl_version.polygon_mode_support() {
                gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
            }

            gl.viewport(0, 0, fb_width as i32, fb_height as i32);

            let projection = ortho_projection(draw_data.display_pos, draw_data.display_size);
            gl.use_program(self.shaders.program);
            gl.uniform_1_i32(self.shaders.uniform_texture.as_ref(), 0);
            gl.uniform_matrix_4_f32_slice(
                self.shaders.uniform_proj_mtx.as_ref(),
                false,
                &projection,
            );

            #[cfg(feature = "bind_sampler_support")]
            if self.gl_version.bind_sampler_support() {
                gl.bind_sampler(0, None);
            }

            gl.bind_buffer(glow::ARRAY_BUFFER, self.vbo);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.ebo);

            let stride = size_of::<DrawVert>() as i32;
            let attributes = [
                (self.shaders.attrib_position, 2, glow::FLOAT, false, offset_of!(DrawVert, pos)),
                (self.shaders.attrib_uv, 2, glow::FLOAT, false, offset_of!(DrawVert, uv)),
                // Colour is packed RGBA8.
                (self.shaders.attrib_color, 4, glow::UNSIGNED_BYTE, true, offset_of!(DrawVert, col)),
            ];
            for (location, size, data_type, normalized, offset) in attributes {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    size,
                    data_type,
                    normalized,
                    stride,
                    offset as i32,
                );
            }
        }
        Ok(())
    }

    fn render_draw_lists(&self, draw_data: &DrawData, fb_height: f32) -> RenderResult<()> {
        let gl = &self.gl;
        let clip = ClipTransform {
            offset: draw_data.display_pos,
            scale: draw_data.framebuffer_scale,
            fb_height,
        };

        for draw_list in draw_data.draw_lists() {
            unsafe {
                // glBufferData every list; glBufferSubData corrupts on some Intel drivers.
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    to_byte_slice(draw_list.vtx_buffer()),
                    glow::STREAM_DRAW,
                );
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    to_byte_slice(draw_list.idx_buffer()),
                    glow::STREAM_DRAW,
                );
            }

            for command in draw_list.commands() {
                match command {
                    DrawCmd::Elements {
                        count,
                        cmd_params,
                        raw_cmd,
                    } => {
                        let texture_id = effective_texture_id(cmd_params.texture_id, raw_cmd);
                        self.render_elements(count, &cmd_params, texture_id, &clip)?;
                    }
                    DrawCmd::ResetRenderState => {
                        let fb_width = draw_data.display_size[0] * draw_data.framebuffer_scale[0];
                        self.set_up_render_state(draw_data, fb_width, fb_height)?;
                    }
                    DrawCmd::RawCallback { callback, raw_cmd } => unsafe {
                        callback(draw_list.raw(), raw_cmd);
                    },
                }
            }
        }
        Ok(())
    }

    fn render_elements(
        &self,
        count: usize,
        cmd_params: &DrawCmdParams,
        texture_id: TextureId,
        clip: &ClipTransform,
    ) -> RenderResult<()> {
        let Some([x, y, w, h]) = clip.scissor(cmd_params.clip_rect) else {
            return Ok(());
        };
        let texture = self.textures.resolve(texture_id)?;

        let gl = &self.gl;
        let index_type = if size_of::<DrawIdx>() == 2 {
            glow::UNSIGNED_SHORT
        } else {
            glow::UNSIGNED_INT
        };
        let idx_offset = (cmd_params.idx_offset * size_of::<DrawIdx>()) as i32;

        unsafe {
            gl.scissor(x, y, w, h);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            if Self::draws_with_vertex_offset(self.gl_version) {
                gl.draw_elements_base_vertex(
                    glow::TRIANGLES,
                    count as i32,
                    index_type,
                    idx_offset,
                    cmd_params.vtx_offset as i32,
                );
            } else {
                gl.draw_elements(glow::TRIANGLES, count as i32, index_type, idx_offset);
            }
        }
        Ok(())
    }

    /// Release every GL object the renderer created
    pub fn destroy_device_objects(&mut self) {
        let gl = &self.gl;
        if let Some(vbo) = self.vbo.take() {
            unsafe { gl.delete_buffer(vbo) };
        }
        if let Some(ebo) = self.ebo.take() {
            unsafe { gl.delete_buffer(ebo) };
        }
        self.shaders.destroy(gl);
        self.textures.destroy_all(gl);
    }
}

impl Drop for GlowRenderer {
    fn drop(&mut self) {
        self.destroy_device_objects();
    }
}

/// Framebuffer size in pixels, or `None` when minimised
fn framebuffer_size(draw_data: &DrawData) -> Option<[f32; 2]> {
    let width = draw_data.display_size[0] * draw_data.framebuffer_scale[0];
    let height = draw_data.display_size[1] * draw_data.framebuffer_scale[1];
    (width > 0.0 && height > 0.0).then_some([width, height])
}

/// Column-major orthographic projection covering the display rectangle
fn ortho_projection(display_pos: [f32; 2], display_size: [f32; 2]) -> [f32; 16] {
    let l = display_pos[0];
    let r = display_pos[0] + display_size[0];
    let t = display_pos[1];
    let b = display_pos[1] + display_size[1];
    #[rustfmt::skip]
    let matrix = [
        2.0 / (r - l),     0.0,               0.0,  0.0,
        0.0,               2.0 / (t - b),     0.0,  0.0,
        0.0,               0.0,               -1.0, 0.0,
        (r + l) / (l - r), (t + b) / (b - t), 0.0,  1.0,
    ];
    matrix
}

/// Maps ImGui clip rectangles (display space) to GL scissor boxes (framebuffer space)
struct ClipTransform {
    offset: [f32; 2],
    scale: [f32; 2],
    fb_height: f32,
}

impl ClipTransform {
    /// Scissor box `[x, y, w, h]` with a bottom-left origin, or `None` if empty
    fn scissor(&self, clip_rect: [f32; 4]) -> Option<[i32; 4]> {
        let min_x = (clip_rect[0] - self.offset[0]) * self.scale[0];
        let min_y = (clip_rect[1] - self.offset[1]) * self.scale[1];
        let max_x = (clip_rect[2] - self.offset[0]) * self.scale[0];
        let max_y = (clip_rect[3] - self.offset[1]) * self.scale[1];
        if max_x <= min_x || max_y <= min_y {
            return None;
        }
        Some([
            min_x as i32,
            (self.fb_height - max_y) as i32,
            (max_x - min_x) as i32,
            (max_y - min_y) as i32,
        ])
    }
}

/// Texture id for a draw command, honouring ImGui's managed texture references
fn effective_texture_id(
    legacy: TextureId,
    raw_cmd: *const dear_imgui_rs::sys::ImDrawCmd,
) -> TextureId {
    if raw_cmd.is_null() {
        return legacy;
    }
    unsafe {
        let mut copy = *raw_cmd;
        TextureId::from(dear_imgui_rs::sys::ImDrawCmd_GetTexID(&mut copy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scissor_flips_y_and_scales() {
        let clip = ClipTransform {
            offset: [0.0, 0.0],
            scale: [2.0, 2.0],
            fb_height: 1440.0,
        };
        assert_eq!(
            clip.scissor([10.0, 20.0, 110.0, 70.0]),
            Some([20, 1440 - 140, 200, 100])
        );
    }

    #[test]
    fn scissor_honours_display_offset() {
        let clip = ClipTransform {
            offset: [100.0, 50.0],
            scale: [1.0, 1.0],
            fb_height: 720.0,
        };
        assert_eq!(
            clip.scissor([100.0, 50.0, 200.0, 150.0]),
            Some([0, 620, 100, 100])
        );
    }

    #[test]
    fn empty_clip_rect_is_skipped() {
        let clip = ClipTransform {
            offset: [0.0, 0.0],
            scale: [1.0, 1.0],
            fb_height: 720.0,
        };
        assert_eq!(clip.scissor([50.0, 50.0, 50.0, 80.0]), None);
        assert_eq!(clip.scissor([50.0, 90.0, 80.0, 80.0]), None);
    }

    #[test]
    fn projection_maps_display_corners_to_clip_space() {
        let m = ortho_projection([0.0, 0.0], [1280.0, 720.0]);
        let project = |x: f32, y: f32| [m[0] * x + m[12], m[5] * y + m[13]];
        assert_eq!(project(0.0, 0.0), [-1.0, 1.0]);
        assert_eq!(project(1280.0, 720.0), [1.0, -1.0]);
    }
}
