//! Snapshot of the GL state the renderer touches

use crate::{GlBuffer, GlProgram, GlTexture, GlVersion, GlVertexArray, native_name};
use glow::{Context, HasContext};

/// Everything `render` changes, captured so the application's state survives
#[derive(Default)]
pub struct GlStateBackup {
    active_texture: u32,
    program: Option<GlProgram>,
    texture: Option<GlTexture>,
    #[cfg(feature = "bind_sampler_support")]
    sampler: Option<<Context as HasContext>::Sampler>,
    array_buffer: Option<GlBuffer>,
    element_array_buffer: Option<GlBuffer>,
    #[cfg(feature = "bind_vertex_array_support")]
    vertex_array: Option<GlVertexArray>,
    #[cfg(feature = "polygon_mode_support")]
    polygon_mode: [i32; 2],
    viewport: [i32; 4],
    scissor_box: [i32; 4],
    blend_src_rgb: u32,
    blend_dst_rgb: u32,
    blend_src_alpha: u32,
    blend_dst_alpha: u32,
    blend_equation_rgb: u32,
    blend_equation_alpha: u32,
    blend: bool,
    cull_face: bool,
    depth_test: bool,
    stencil_test: bool,
    scissor_test: bool,
}

impl GlStateBackup {
    pub fn backup(&mut self, gl: &Context, gl_version: GlVersion) {
        unsafe {
            self.active_texture = gl.get_parameter_i32(glow::ACTIVE_TEXTURE) as u32;
            // Texture, program and buffer bindings are queried on texture unit 0,
            // which is the unit the renderer binds.
            gl.active_texture(glow::TEXTURE0);

            self.program =
                native_name(gl.get_parameter_i32(glow::CURRENT_PROGRAM)).map(glow::NativeProgram);
            self.texture = native_name(gl.get_parameter_i32(glow::TEXTURE_BINDING_2D))
                .map(glow::NativeTexture);

            #[cfg(feature = "bind_sampler_support")]
            if gl_version.bind_sampler_support() {
                self.sampler = native_name(gl.get_parameter_i32(glow::SAMPLER_BINDING))
                    .map(glow::NativeSampler);
            }

            self.array_buffer = native_name(gl.get_parameter_i32(glow::ARRAY_BUFFER_BINDING))
                .map(glow::NativeBuffer);

            #[cfg(feature = "bind_vertex_array_support")]
            if gl_version.bind_vertex_array_support() {
                self.vertex_array = native_name(gl.get_parameter_i32(glow::VERTEX_ARRAY_BINDING))
                    .map(glow::NativeVertexArray);
            }
            // The element buffer binding is VAO state on GL 3+; read it after the VAO.
            self.element_array_buffer =
                native_name(gl.get_parameter_i32(glow::ELEMENT_ARRAY_BUFFER_BINDING))
                    .map(glow::NativeBuffer);

            #[cfg(feature = "polygon_mode_support")]
            if gl_version.polygon_mode_support() {
                gl.get_parameter_i32_slice(glow::POLYGON_MODE, &mut self.polygon_mode);
            }

            gl.get_parameter_i32_slice(glow::VIEWPORT, &mut self.viewport);
            gl.get_parameter_i32_slice(glow::SCISSOR_BOX, &mut self.scissor_box);

            self.blend_src_rgb = gl.get_parameter_i32(glow::BLEND_SRC_RGB) as u32;
            self.blend_dst_rgb = gl.get_parameter_i32(glow::BLEND_DST_RGB) as u32;
            self.blend_src_alpha = gl.get_parameter_i32(glow::BLEND_SRC_ALPHA) as u32;
            self.blend_dst_alpha = gl.get_parameter_i32(glow::BLEND_DST_ALPHA) as u32;
            self.blend_equation_rgb = gl.get_parameter_i32(glow::BLEND_EQUATION_RGB) as u32;
            self.blend_equation_alpha = gl.get_parameter_i32(glow::BLEND_EQUATION_ALPHA) as u32;

            self.blend = gl.is_enabled(glow::BLEND);
            self.cull_face = gl.is_enabled(glow::CULL_FACE);
            self.depth_test = gl.is_enabled(glow::DEPTH_TEST);
            self.stencil_test = gl.is_enabled(glow::STENCIL_TEST);
            self.scissor_test = gl.is_enabled(glow::SCISSOR_TEST);
        }
    }

    pub fn restore(&self, gl: &Context, gl_version: GlVersion) {
        unsafe {
            gl.use_program(self.program);
            gl.bind_texture(glow::TEXTURE_2D, self.texture);

            #[cfg(feature = "bind_sampler_support")]
            if gl_version.bind_sampler_support() {
                gl.bind_sampler(0, self.sampler);
            }

            gl.active_texture(self.active_texture);

            #[cfg(feature = "bind_vertex_array_support")]
            if gl_version.bind_vertex_array_support() {
                gl.bind_vertex_array(self.vertex_array);
            }
            gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.element_array_buffer);

            gl.blend_equation_separate(self.blend_equation_rgb, self.blend_equation_alpha);
            gl.blend_func_separate(
                self.blend_src_rgb,
                self.blend_dst_rgb,
                self.blend_src_alpha,
                self.blend_dst_alpha,
            );

            set_capability(gl, glow::BLEND, self.blend);
            set_capability(gl, glow::CULL_FACE, self.cull_face);
            set_capability(gl, glow::DEPTH_TEST, self.depth_test);
            set_capability(gl, glow::STENCIL_TEST, self.stencil_test);
            set_capability(gl, glow::SCISSOR_TEST, self.scissor_test);

            #[cfg(feature = "polygon_mode_support")]
            if gl_version.polygon_mode_support() {
                gl.polygon_mode(glow::FRONT_AND_BACK, self.polygon_mode[0] as u32);
            }

            let [x, y, w, h] = self.viewport;
            gl.viewport(x, y, w, h);
            let [x, y, w, h] = self.scissor_box;
            gl.scissor(x, y, w, h);
        }
    }
}

fn set_capability(gl: &Context, capability: u32, enabled: bool) {
    unsafe {
        if enabled {
            gl.enable(capability);
        } else {
            gl.disable(capability);
        }
    }
}
