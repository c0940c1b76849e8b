//! OpenGL client API the window's context is created for

use std::fmt;
use std::str::FromStr;

use glfw::{Glfw, OpenGlProfileHint, WindowHint};

use crate::GlfwPlatformError;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Which OpenGL context the platform asks GLFW for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlfwClientApi {
    /// OpenGL 2.1, any profile
    #[default]
    OpenGL2,
    /// OpenGL 3.2 core profile, forward compatible
    OpenGL3,
}

impl GlfwClientApi {
    /// Requested `(major, minor)` context version
    pub const fn context_version(self) -> (u32, u32) {
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

    /// Window hints to set before `create_window`
    pub fn window_hints(self) -> Vec<WindowHint> {
        let (major, minor) = self.context_version();
        let mut hints = vec![WindowHint::ContextVersion(major, minor)];
        if self == Self::OpenGL3 {
            hints.push(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
            hints.push(WindowHint::OpenGlForwardCompat(true));
        }
        hints
    }

    pub(crate) fn apply_hints(self, glfw: &mut Glfw) {
        for hint in self.window_hints() {
            glfw.window_hint(hint);
        }
    }
}

impl fmt::Display for GlfwClientApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlfwClientApi {
    type Err = GlfwPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opengl2" | "gl2" => Ok(Self::OpenGL2),
            "opengl3" | "gl3" => Ok(Self::OpenGL3),
            _ => Err(GlfwPlatformError::UnsupportedClientApi(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("opengl2".parse::<GlfwClientApi>().ok(), Some(GlfwClientApi::OpenGL2));
        assert_eq!("GL3".parse::<GlfwClientApi>().ok(), Some(GlfwClientApi::OpenGL3));
        assert_eq!("OpenGL3".parse::<GlfwClientApi>().ok(), Some(GlfwClientApi::OpenGL3));
    }

    #[test]
    fn rejects_unknown_api() {
        let err = "vulkan".parse::<GlfwClientApi>().unwrap_err();
        assert!(matches!(err, GlfwPlatformError::UnsupportedClientApi(ref s) if s == "vulkan"));
    }

    #[test]
    fn display_matches_window_title_fragment() {
        assert_eq!(GlfwClientApi::OpenGL2.to_string(), "OpenGL2");
        assert_eq!(GlfwClientApi::default(), GlfwClientApi::OpenGL2);
    }

    #[test]
    fn core_profile_only_for_opengl3() {
        assert_eq!(GlfwClientApi::OpenGL2.window_hints().len(), 1);
        assert_eq!(GlfwClientApi::OpenGL3.window_hints().len(), 3);
        assert_eq!(GlfwClientApi::OpenGL3.context_version(), (3, 2));
    }
}
