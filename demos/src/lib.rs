//! Dear ImGui example applications on GLFW and SDL2 with the glow renderer
//!
//! Both binaries share one loop, [`run`], which drives any [`Platform`] and
//! [`Renderer`] pair and draws the [`DemoState`] UI every frame.

pub mod cli;
mod demo_state;
mod platforms;
mod runner;

pub use demo_state::DemoState;
pub use runner::{Platform, Renderer, RunnerConfig, run};

/// Install a `tracing` subscriber filtered by `RUST_LOG`, defaulting to `info`
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
