//! OpenGL client API the window's context is created for

use std::fmt;
use std::str::FromStr;

use sdl2::video::{GLAttr, GLProfile};

use crate::Sdl2PlatformError;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sdl2ClientApi {
    /// OpenGL 2.1
    #[default]
    OpenGL2,
    /// OpenGL 3.2 core profile, forward compatible
    OpenGL3,
}

impl Sdl2ClientApi {
    pub const fn context_version(self) -> (u8, u8) {
        match self {
            Self::OpenGL2 => (2, 1),
            Self::OpenGL3 => (3, 2),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenGL2 => "OpenGL2",
            Self::OpenGL3 => "OpenGL3",
        }
    }

    /// Set the context attributes; must happen before the window is created
    pub(crate) fn apply_attributes(self, gl_attr: &GLAttr<'_>) {
        let (major, minor) = self.context_version();
        gl_attr.set_context_version(major, minor);
        if self == Self::OpenGL3 {
            gl_attr.set_context_profile(GLProfile::Core);
            gl_attr.set_context_flags().forward_compatible().set();
        }
        gl_attr.set_double_buffer(true);
        gl_attr.set_depth_size(24);
        gl_attr.set_stencil_size(8);
    }
}

impl fmt::Display for Sdl2ClientApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sdl2ClientApi {
    type Err = Sdl2PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opengl2" | "gl2" => Ok(Self::OpenGL2),
            "opengl3" | "gl3" => Ok(Self::OpenGL3),
            _ => Err(Sdl2PlatformError::UnsupportedClientApi(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_api() {
        assert_eq!("gl2".parse::<Sdl2ClientApi>().ok(), Some(Sdl2ClientApi::OpenGL2));
        assert_eq!("OPENGL3".parse::<Sdl2ClientApi>().ok(), Some(Sdl2ClientApi::OpenGL3));
        assert!(matches!(
            "metal".parse::<Sdl2ClientApi>(),
            Err(Sdl2PlatformError::UnsupportedClientApi(_))
        ));
    }

    #[test]
    fn names_and_versions() {
        assert_eq!(Sdl2ClientApi::OpenGL3.to_string(), "OpenGL3");
        assert_eq!(Sdl2ClientApi::OpenGL2.context_version(), (2, 1));
        assert_eq!(Sdl2ClientApi::OpenGL3.context_version(), (3, 2));
    }
}
