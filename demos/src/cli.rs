//! Command-line options shared by the example binaries

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dear_imgui_glfw::GlfwClientApi;
use dear_imgui_sdl2::Sdl2ClientApi;

use crate::RunnerConfig;

/// OpenGL version the example window asks for
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientApi {
    /// OpenGL 2.1
    #[default]
    #[value(name = "opengl2", alias = "gl2")]
    OpenGL2,
    /// OpenGL 3.2 core profile
    #[value(name = "opengl3", alias = "gl3")]
    OpenGL3,
}

impl From<ClientApi> for GlfwClientApi {
    fn from(api: ClientApi) -> Self {
        match api {
            ClientApi::OpenGL2 => Self::OpenGL2,
            ClientApi::OpenGL3 => Self::OpenGL3,
        }
    }
}

impl From<ClientApi> for Sdl2ClientApi {
    fn from(api: ClientApi) -> Self {
        match api {
            ClientApi::OpenGL2 => Self::OpenGL2,
            ClientApi::OpenGL3 => Self::OpenGL3,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(about = "Dear ImGui OpenGL example")]
pub struct Args {
    /// OpenGL client API
    #[arg(
        long,
        env = "IMGUI_DEMO_CLIENT_API",
        value_enum,
        ignore_case = true,
        default_value = "opengl2"
    )]
    pub client_api: ClientApi,

    /// Milliseconds to sleep after each frame
    #[arg(long, default_value_t = 25)]
    pub frame_sleep_ms: u64,

    /// Persist window layout to this ini file
    #[arg(long)]
    pub ini_file: Option<PathBuf>,
}

impl From<&Args> for RunnerConfig {
    fn from(args: &Args) -> Self {
        Self {
            frame_sleep: Duration::from_millis(args.frame_sleep_ms),
            ini_filename: args.ini_file.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["glfw_opengl"]).unwrap();
        // The variable may be set in the environment running the tests.
        if std::env::var_os("IMGUI_DEMO_CLIENT_API").is_none() {
            assert_eq!(args.client_api, ClientApi::OpenGL2);
        }
        assert_eq!(args.frame_sleep_ms, 25);
        assert_eq!(args.ini_file, None);
        assert_eq!(RunnerConfig::from(&args), RunnerConfig::default());
    }

    #[test]
    fn explicit_options_reach_the_config() {
        let args = Args::try_parse_from([
            "sdl_opengl",
            "--client-api",
            "gl3",
            "--frame-sleep-ms",
            "0",
            "--ini-file",
            "layout.ini",
        ])
        .unwrap();
        assert_eq!(args.client_api, ClientApi::OpenGL3);
        assert_eq!(GlfwClientApi::from(args.client_api), GlfwClientApi::OpenGL3);
        assert_eq!(Sdl2ClientApi::from(args.client_api), Sdl2ClientApi::OpenGL3);

        let config = RunnerConfig::from(&args);
        assert_eq!(config.frame_sleep, Duration::ZERO);
        assert_eq!(config.ini_filename, Some(PathBuf::from("layout.ini")));
    }

    #[test]
    fn client_api_is_checked_while_parsing() {
        let args = Args::try_parse_from(["glfw_opengl", "--client-api", "OpenGL2"]).unwrap();
        assert_eq!(args.client_api, ClientApi::OpenGL2);

        let err = Args::try_parse_from(["glfw_opengl", "--client-api", "vulkan"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_non_numeric_sleep() {
        assert!(Args::try_parse_from(["glfw_opengl", "--frame-sleep-ms", "soon"]).is_err());
    }
}
