//! OpenGL version detection and the capabilities derived from it

use glow::{Context, HasContext};

/// OpenGL version of the current context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
    pub is_es: bool,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            is_es: false,
        }
    }

    /// Read the version from the context that is current on this thread
    pub fn read(gl: &Context) -> Self {
        let version_string = unsafe { gl.get_parameter_string(glow::VERSION) };
        let version = Self::parse(&version_string);
        tracing::debug!(%version_string, ?version, "detected OpenGL version");
        version
    }

    /// Parse a `GL_VERSION` string
    ///
    /// Desktop drivers report e.g. `"3.2.0 NVIDIA 535.54"` or
    /// `"2.1 Mesa 23.1.0"`; ES drivers prefix with `"OpenGL ES"`.
    pub fn parse(version_string: &str) -> Self {
        let is_es = version_string.contains("OpenGL ES") || version_string.contains("WebGL");
        let fallback = if is_es { (2, 0) } else { (2, 1) };
        let (major, minor) = Self::parse_version_numbers(version_string).unwrap_or(fallback);

        Self {
            major,
            minor,
            is_es,
        }
    }

    fn parse_version_numbers(version_string: &str) -> Option<(u32, u32)> {
        version_string.split_whitespace().find_map(|word| {
            let mut parts = word.split('.');
            let major = parts.next()?.parse::<u32>().ok()?;
            let minor = parts.next()?.parse::<u32>().ok()?;
            Some((major, minor))
        })
    }

    fn at_least(self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }

    /// Vertex array objects: GL 3.0+ / ES 3.0+
    pub fn bind_vertex_array_support(self) -> bool {
        self.major >= 3
    }

    /// `glDrawElementsBaseVertex`: desktop GL 3.2+
    pub fn vertex_offset_support(self) -> bool {
        !self.is_es && self.at_least(3, 2)
    }

    /// `glBindSampler`: GL 3.3+ / ES 3.0+
    pub fn bind_sampler_support(self) -> bool {
        if self.is_es {
            self.major >= 3
        } else {
            self.at_least(3, 3)
        }
    }

    /// `glPolygonMode`: desktop only
    pub fn polygon_mode_support(self) -> bool {
        !self.is_es
    }
}

/// GLSL dialect the shaders are generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlslVersion {
    pub number: u32,
    pub is_es: bool,
}

impl GlslVersion {
    /// Pick the shading language version matching a GL version
    ///
    /// GL 3.2 core maps to `#version 150` and GL 2.1 to `#version 120`, which
    /// are the two client APIs the platform crates request.
    pub fn for_gl_version(gl_version: GlVersion) -> Self {
        let number = if gl_version.is_es {
            if gl_version.major >= 3 { 300 } else { 100 }
        } else {
            match (gl_version.major, gl_version.minor) {
                (4, minor) => 400 + minor * 10,
                (3, minor) if minor >= 3 => 330,
                (3, 2) => 150,
                (3, 1) => 140,
                (3, 0) => 130,
                (2, 1) => 120,
                (2, 0) => 110,
                (major, _) if major > 4 => 460,
                _ => 120,
            }
        };

        Self {
            number,
            is_es: gl_version.is_es,
        }
    }

    /// `#version` line to prepend to shader sources
    pub fn directive(self) -> String {
        if self.is_es && self.number >= 300 {
            format!("#version {} es", self.number)
        } else {
            format!("#version {}", self.number)
        }
    }

    /// GLSL 1.10/1.20 and ES 1.00 use `attribute`/`varying` and `gl_FragColor`
    pub fn is_legacy(self) -> bool {
        self.number < 130 || (self.is_es && self.number < 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_desktop_version_strings() {
        assert_eq!(GlVersion::parse("3.2.0 NVIDIA 535.54"), GlVersion::new(3, 2));
        assert_eq!(GlVersion::parse("2.1 Mesa 23.1.0"), GlVersion::new(2, 1));
        assert_eq!(GlVersion::parse("4.6 (Core Profile) Mesa"), GlVersion::new(4, 6));
    }

    #[test]
    fn parses_es_and_garbage() {
        let es = GlVersion::parse("OpenGL ES 3.0 (OpenGL ES GLSL ES 3.00)");
        assert!(es.is_es);
        assert_eq!((es.major, es.minor), (3, 0));

        assert_eq!(GlVersion::parse("unknown driver"), GlVersion::new(2, 1));
    }

    #[test]
    fn capabilities_follow_client_api() {
        let gl2 = GlVersion::new(2, 1);
        assert!(!gl2.bind_vertex_array_support());
        assert!(!gl2.vertex_offset_support());
        assert!(!gl2.bind_sampler_support());

        let gl3 = GlVersion::new(3, 2);
        assert!(gl3.bind_vertex_array_support());
        assert!(gl3.vertex_offset_support());
        assert!(!gl3.bind_sampler_support());
        assert!(GlVersion::new(3, 3).bind_sampler_support());
    }

    #[test]
    fn glsl_for_example_client_apis() {
        let glsl3 = GlslVersion::for_gl_version(GlVersion::new(3, 2));
        assert_eq!(glsl3.directive(), "#version 150");
        assert!(!glsl3.is_legacy());

        let glsl2 = GlslVersion::for_gl_version(GlVersion::new(2, 1));
        assert_eq!(glsl2.directive(), "#version 120");
        assert!(glsl2.is_legacy());
    }

    #[test]
    fn glsl_for_newer_and_es() {
        assert_eq!(
            GlslVersion::for_gl_version(GlVersion::new(4, 1)).directive(),
            "#version 410"
        );
        let es3 = GlVersion {
            major: 3,
            minor: 0,
            is_es: true,
        };
        assert_eq!(GlslVersion::for_gl_version(es3).directive(), "#version 300 es");
    }
}
