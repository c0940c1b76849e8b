//! Shader program for the ImGui vertex format

use crate::{GlProgram, GlUniformLocation, GlslVersion, InitError, InitResult};
use glow::{Context, HasContext};

const VERTEX_BODY: &str = r#"
uniform mat4 ProjMtx;
IN vec2 Position;
IN vec2 UV;
IN vec4 Color;
OUT vec2 Frag_UV;
OUT vec4 Frag_Color;

void main()
{
    Frag_UV = UV;
    Frag_Color = Color;
    gl_Position = ProjMtx * vec4(Position.xy, 0, 1);
}
"#;

const FRAGMENT_BODY: &str = r#"
uniform sampler2D Texture;
IN vec2 Frag_UV;
IN vec4 Frag_Color;
FRAG_OUT_DECL

void main()
{
    FRAG_OUT = Frag_Color * TEXTURE(Texture, Frag_UV.st);
}
"#;

/// Linked program and the locations the renderer binds every frame
pub struct Shaders {
    pub program: Option<GlProgram>,
    pub uniform_texture: Option<GlUniformLocation>,
    pub uniform_proj_mtx: Option<GlUniformLocation>,
    pub attrib_position: u32,
    pub attrib_uv: u32,
    pub attrib_color: u32,
}

impl Shaders {
    pub fn new(gl: &Context, glsl: GlslVersion) -> InitResult<Self> {
        let (vertex_source, fragment_source) = sources(glsl);
        tracing::debug!(glsl = %glsl.directive(), "compiling imgui shaders");

        unsafe {
            let vertex = compile(gl, glow::VERTEX_SHADER, "vertex", &vertex_source)?;
            let fragment = match compile(gl, glow::FRAGMENT_SHADER, "fragment", &fragment_source) {
                Ok(shader) => shader,
                Err(err) => {
                    gl.delete_shader(vertex);
                    return Err(err);
                }
            };

            let program = gl.create_program().map_err(InitError::CreateShader)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(InitError::LinkProgram(log));
            }

            let attrib = |name: &'static str| {
                gl.get_attrib_location(program, name)
                    .ok_or(InitError::MissingAttribute(name))
            };
            let located = (|| -> InitResult<(u32, u32, u32)> {
                Ok((attrib("Position")?, attrib("UV")?, attrib("Color")?))
            })();
            let (attrib_position, attrib_uv, attrib_color) = match located {
                Ok(locations) => locations,
                Err(err) => {
                    gl.delete_program(program);
                    return Err(err);
                }
            };

            Ok(Self {
                program: Some(program),
                uniform_texture: gl.get_uniform_location(program, "Texture"),
                uniform_proj_mtx: gl.get_uniform_location(program, "ProjMtx"),
                attrib_position,
                attrib_uv,
                attrib_color,
            })
        }
    }

    pub fn destroy(&mut self, gl: &Context) {
        if let Some(program) = self.program.take() {
            unsafe { gl.delete_program(program) };
        }
    }
}

unsafe fn compile(
    gl: &Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> InitResult<<Context as HasContext>::Shader> {
    unsafe {
        let shader = gl.create_shader(kind).map_err(InitError::CreateShader)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(InitError::CompileShader { stage, log });
        }
        Ok(shader)
    }
}

/// Expand the shared shader bodies for one GLSL dialect
fn sources(glsl: GlslVersion) -> (String, String) {
    let header = if glsl.is_es {
        format!("{}\nprecision mediump float;\n", glsl.directive())
    } else {
        format!("{}\n", glsl.directive())
    };

    let (vertex_in, vertex_out, fragment_in) = if glsl.is_legacy() {
        ("attribute", "varying", "varying")
    } else {
        ("in", "out", "in")
    };
    let (frag_out_decl, frag_out, texture_fn) = if glsl.is_legacy() {
        ("", "gl_FragColor", "texture2D")
    } else {
        ("out vec4 Out_Color;", "Out_Color", "texture")
    };

    let vertex = VERTEX_BODY
        .replace("IN ", &format!("{vertex_in} "))
        .replace("OUT ", &format!("{vertex_out} "));
    let fragment = FRAGMENT_BODY
        .replace("IN ", &format!("{fragment_in} "))
        .replace("FRAG_OUT_DECL", frag_out_decl)
        .replace("FRAG_OUT", frag_out)
        .replace("TEXTURE(", &format!("{texture_fn}("));

    (format!("{header}{vertex}"), format!("{header}{fragment}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlVersion;

    #[test]
    fn core_profile_sources_use_in_out() {
        let (vs, fs) = sources(GlslVersion::for_gl_version(GlVersion::new(3, 2)));
        assert!(vs.starts_with("#version 150\n"));
        assert!(vs.contains("in vec2 Position;"));
        assert!(vs.contains("out vec4 Frag_Color;"));
        assert!(fs.contains("out vec4 Out_Color;"));
        assert!(fs.contains("Out_Color = Frag_Color * texture(Texture"));
        assert!(!fs.contains("gl_FragColor"));
    }

    #[test]
    fn legacy_sources_use_attribute_varying() {
        let (vs, fs) = sources(GlslVersion::for_gl_version(GlVersion::new(2, 1)));
        assert!(vs.starts_with("#version 120\n"));
        assert!(vs.contains("attribute vec2 UV;"));
        assert!(vs.contains("varying vec2 Frag_UV;"));
        assert!(fs.contains("varying vec4 Frag_Color;"));
        assert!(fs.contains("gl_FragColor = Frag_Color * texture2D(Texture"));
        assert!(!fs.contains("Out_Color"));
    }

    #[test]
    fn es_sources_declare_precision() {
        let es2 = GlVersion {
            major: 2,
            minor: 0,
            is_es: true,
        };
        let (vs, fs) = sources(GlslVersion::for_gl_version(es2));
        assert!(vs.starts_with("#version 100\nprecision mediump float;"));
        assert!(fs.contains("precision mediump float;"));
    }
}
