//! Dear ImGui on an SDL2 window, drawn with the glow renderer
//!
//! ```text
//! cargo run -p dear-imgui-demos --bin sdl_opengl
//! ```

use anyhow::Context as _;
use clap::Parser;
use dear_imgui_demos::{RunnerConfig, cli::Args, init_tracing, run};
use dear_imgui_glow::{GlowRenderer, glow};
use dear_imgui_rs::Context;
use dear_imgui_sdl2::{Sdl2ClientApi, Sdl2Platform};

fn main() {
    init_tracing();
    if let Err(err) = try_main(Args::parse()) {
        eprintln!("{err:#}");
        std::process::exit(-1);
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let client_api = Sdl2ClientApi::from(args.client_api);
    let config = RunnerConfig::from(&args);

    let mut imgui = Context::try_create().context("creating Dear ImGui context")?;
    config.apply(&mut imgui);

    let mut platform =
        Sdl2Platform::new(&mut imgui, client_api).context("setting up SDL2 platform")?;
    imgui.set_clipboard_backend(platform.clipboard());

    let gl = unsafe { glow::Context::from_loader_function(|name| platform.get_proc_address(name)) };
    let mut renderer = GlowRenderer::new(gl, &mut imgui).context("creating OpenGL renderer")?;
    tracing::info!(%client_api, gl_version = ?renderer.gl_version(), "SDL2 example ready");

    run(&mut imgui, &mut platform, &mut renderer, &config)?;
    Ok(())
}
